//! Utilities shared across the server, currently the Gemini generative model client.

pub mod gemini;
