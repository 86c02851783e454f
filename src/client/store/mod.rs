//! Client-side state shared through Dioxus context.

pub mod fortune;

pub use fortune::FortuneStore;
