//! Data transfer types shared by the browser client and the API server.

pub mod api;
pub mod fortune;
