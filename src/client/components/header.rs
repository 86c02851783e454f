use dioxus::prelude::*;

const ENSEMBLE_IMG: &str = "/header_visual.png";

#[component]
pub fn SiteHeader(show_ensemble: bool) -> Element {
    rsx!(
        header { class: "pt-8 pb-4 z-10 text-center relative",
            h1 { class: "text-3xl md:text-5xl font-bold text-stone-700 tracking-[0.2em] mb-2 drop-shadow-sm font-serif",
                "守護神占い"
            }
            p { class: "text-sm md:text-base text-stone-500 font-sans tracking-widest uppercase mb-8",
                "Guardian Deity Fortune"
            }
            if show_ensemble {
                GodEnsemble {}
            }
        }
    )
}

/// Header visual of the whole pantheon, with a notice in its place when the image is missing
#[component]
fn GodEnsemble() -> Element {
    let mut failed = use_signal(|| false);

    rsx!(
        div { class: "w-full max-w-5xl mx-auto mb-10 fade-in px-4 md:px-0 perspective-1000",
            if failed() {
                div { class: "w-full rounded-[2rem] shadow-2xl border-[6px] border-white ring-1 ring-beige-200 bg-beige-100 flex items-center justify-center h-64",
                    div { class: "text-center p-4",
                        p { class: "text-stone-500 font-serif mb-2", "画像を読み込めませんでした" }
                        p { class: "text-xs text-stone-400", "publicフォルダに header_visual.png を配置してください" }
                    }
                }
            } else {
                div { class: "relative w-full rounded-[2rem] shadow-2xl overflow-hidden border-[6px] border-white ring-1 ring-beige-200 group transition-all hover:scale-[1.01] duration-700 bg-white",
                    img {
                        src: ENSEMBLE_IMG,
                        alt: "神々の集合",
                        class: "relative w-full h-auto object-cover z-10",
                        onerror: move |_| failed.set(true),
                    }
                    div { class: "absolute inset-0 bg-gradient-to-tr from-white/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-700 pointer-events-none z-20" }
                }
            }
        }
    )
}
