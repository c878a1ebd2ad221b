//! Task-local trace id for the request being served.
//!
//! `RequestTrace` opens the scope; error rendering reads it so that bodies
//! and the `x-trace-id` header agree without threading the request through.

use std::future::Future;
use std::sync::Arc;

use tokio::task_local;

task_local! {
    static TRACE_ID: Arc<str>;
}

/// Placeholder used outside of any request scope.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

/// Trace id of the current task, or `"unknown"` outside a request.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.to_string())
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` visible to [`trace_id`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(Arc::from(trace_id), future).await
}
