//! Security events emitted by the authentication gate.

use tracing::{debug, error};

use crate::auth::error::AuthError;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a rejected request. Unclassified faults are errors with full
/// (redacted) detail; every other kind is routine and only logged at debug.
pub fn auth_rejected(err: &AuthError, path: &str) {
    let trace_id = trace_ctx::trace_id();
    let code = err.code();

    if err.is_fault() {
        error!(
            event = "SECURITY_AUTH_FAULT",
            %trace_id,
            %code,
            path,
            detail = %Redacted(&err.to_string()),
            "Authentication gate fault"
        );
    } else {
        debug!(
            event = "SECURITY_AUTH_REJECTED",
            %trace_id,
            %code,
            path,
            detail = %Redacted(&err.to_string()),
            "Request rejected by authentication gate"
        );
    }
}
