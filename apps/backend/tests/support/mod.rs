#![allow(dead_code)]

pub mod auth;

pub use app_builder::{init_app, send, test_state};
