use dioxus::prelude::*;

/// Full-screen view shown while the deities are consulted.
///
/// There is no reset control here; the page leaves this view only when the request finishes.
#[component]
pub fn LoadingOverlay(message: String) -> Element {
    rsx!(
        div { class: "fixed inset-0 z-50 flex flex-col items-center justify-center bg-stone-50/90 backdrop-blur-sm transition-all duration-700",
            div { class: "relative w-64 h-64 mb-12 flex items-center justify-center",
                div { class: "absolute w-full h-full bg-gradient-to-r from-beige-200/0 via-beige-400/20 to-beige-200/0 rounded-full blur-2xl animate-pulse" }
                div { class: "absolute inset-0 border-[2px] border-beige-200 rounded-full animate-[spin_12s_linear_infinite]" }
                div { class: "absolute inset-4 border-[1px] border-dashed border-beige-400 rounded-full animate-[spin_20s_linear_infinite_reverse] opacity-70" }
                div { class: "absolute inset-10 border-[3px] border-double border-beige-300 rounded-full animate-glow" }
                div { class: "absolute inset-0 animate-[spin_8s_linear_infinite]",
                    div { class: "absolute top-0 left-1/2 w-2 h-2 bg-white rounded-full shadow-[0_0_10px_rgba(255,255,255,0.8)]" }
                    div { class: "absolute bottom-0 left-1/2 w-2 h-2 bg-beige-500 rounded-full shadow-[0_0_10px_rgba(184,152,104,0.8)]" }
                }
                svg {
                    view_box: "0 0 100 100",
                    class: "w-32 h-32 text-stone-700 drop-shadow-[0_0_15px_rgba(184,152,104,0.6)] animate-pulse relative z-10",
                    path {
                        d: "M50 5 L63 40 L98 40 L70 60 L80 95 L50 75 L20 95 L30 60 L2 40 L37 40 Z",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "1",
                        class: "text-stone-600",
                    }
                    path {
                        d: "M50 5 L80 95 L5 35 L95 35 L20 95 Z",
                        fill: "none",
                        stroke: "#b89868",
                        stroke_width: "1.5",
                        class: "drop-shadow-sm opacity-90",
                    }
                }
                div { class: "absolute w-2 h-2 bg-white rounded-full blur-[2px] animate-ping z-20" }
            }
            div { class: "text-center space-y-3 relative z-10",
                h3 { class: "text-2xl md:text-3xl text-stone-700 font-serif font-bold tracking-widest drop-shadow-sm",
                    "交信中..."
                }
                p { class: "text-stone-500 font-serif tracking-wider animate-pulse text-base md:text-lg",
                    "{message}"
                }
                div { class: "w-16 h-1 bg-beige-300 mx-auto rounded-full mt-4 overflow-hidden",
                    div { class: "h-full bg-beige-500 animate-[translateX_1.5s_ease-in-out_infinite] w-1/2 rounded-full" }
                }
            }
        }
    )
}
