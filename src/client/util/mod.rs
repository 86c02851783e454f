pub mod request_fortune;

#[cfg(feature = "web")]
pub use request_fortune::request_fortune;
