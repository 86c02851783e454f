//! HTTP controller endpoints for the fortune API.
//!
//! Controllers decode requests, build the service they need from [`AppState`], and map the
//! result to a response. Errors propagate as [`crate::server::error::Error`], whose
//! `IntoResponse` implementation picks the status code.
//!
//! [`AppState`]: crate::server::model::app::AppState

pub mod fortune;
