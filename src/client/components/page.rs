use dioxus::prelude::*;

/// Page shell with the soft background decoration and footer
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "min-h-screen flex flex-col font-serif relative overflow-hidden bg-stone-50 {class}",
            div { class: "absolute top-0 left-0 w-full h-full pointer-events-none opacity-30 z-0 overflow-hidden",
                div { class: "absolute -top-20 -left-20 w-96 h-96 bg-beige-200 rounded-full blur-3xl mix-blend-multiply" }
                div { class: "absolute top-1/2 -right-20 w-80 h-80 bg-beige-300 rounded-full blur-3xl mix-blend-multiply" }
                div { class: "absolute bottom-0 left-1/3 w-96 h-96 bg-stone-200 rounded-full blur-3xl mix-blend-multiply" }
            }
            {children}
            footer {
                class: "py-8 text-center text-stone-400 text-xs z-10 font-sans border-t border-beige-200 mt-auto bg-white/30 backdrop-blur-sm",
                p { "© 2024 Guardian Deity Fortune. All rights reserved." }
            }
        }
    )
}
