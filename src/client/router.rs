use dioxus::prelude::*;

use crate::client::routes::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
