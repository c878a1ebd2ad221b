//! Shared helpers for the todo backend's unit and integration tests.
//!
//! Kept free of backend types so that both test layers can depend on it.

pub mod logging;
pub mod problem_details;
