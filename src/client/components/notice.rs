use dioxus::prelude::*;

/// Blocking notice that must be acknowledged before the form can be used again
#[component]
pub fn FailureNotice(message: &'static str, on_dismiss: EventHandler<()>) -> Element {
    rsx!(
        div { class: "modal modal-open z-50", role: "alertdialog",
            div { class: "modal-box bg-white border border-beige-200",
                p { class: "font-sans text-stone-700 leading-relaxed", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn bg-stone-700 hover:bg-stone-800 text-white",
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    )
}
