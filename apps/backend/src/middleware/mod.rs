pub mod auth_gate;
pub mod cors;
pub mod request_trace;

pub use auth_gate::AuthGate;
pub use cors::cors_middleware;
pub use request_trace::{RequestTrace, TraceId};
