//! Server application core modules.
//!
//! Everything needed to serve `POST /api/fortune`: configuration, the Gemini client behind the
//! [`util::gemini::GenerativeModel`] trait, the fortune service that turns birth data into a
//! fortune record, and the HTTP controller and router exposing it.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
