//! Business logic services.
//!
//! Services hold references to the resources they need and are constructed per request by the
//! controllers.

pub mod fortune;
