use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{Page, SiteHeader},
    router::Route,
};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "ページが見つかりません | 守護神占い" }
        Page {
            SiteHeader { show_ensemble: false }
            main { class: "flex-grow flex flex-col items-center gap-6 z-10 py-12 font-sans text-stone-600",
                p { "/{path} は存在しません" }
                Link {
                    to: Route::Home {},
                    class: "bg-stone-700 hover:bg-stone-800 text-white px-8 py-3 rounded-full font-serif",
                    "トップへ戻る"
                }
            }
        }
    )
}
