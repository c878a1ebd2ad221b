//! Error codes shared by the HTTP error renderer.

pub mod error_code;

pub use error_code::ErrorCode;
