use dioxus::prelude::*;

use crate::client::{router::Route, store::FortuneStore};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(FortuneStore::default()));

    rsx!(
        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    )
}
