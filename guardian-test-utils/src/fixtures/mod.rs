//! JSON fixtures for fortunes and Gemini responses.

pub mod fortune;
pub mod gemini;
