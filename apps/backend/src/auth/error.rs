//! Closed failure taxonomy for credential verification and path authorization.

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::errors::ErrorCode;

/// Every way the authentication gate can refuse a request.
///
/// The `String` payloads are diagnostics for logs only; callers see
/// [`AuthError::message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("missing credential header")]
    MissingCredential,
    #[error("malformed credential")]
    MalformedCredential,
    #[error("bad token signature")]
    BadSignature,
    #[error("token expired")]
    Expired,
    #[error("unsupported token format: {0}")]
    UnsupportedFormat(String),
    #[error("malformed claims: {0}")]
    MalformedClaims(String),
    #[error("role does not satisfy path policy")]
    Forbidden,
    #[error("internal fault: {0}")]
    InternalFault(String),
}

impl AuthError {
    pub fn unsupported(detail: impl Into<String>) -> Self {
        Self::UnsupportedFormat(detail.into())
    }

    pub fn malformed_claims(detail: impl Into<String>) -> Self {
        Self::MalformedClaims(detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::InternalFault(detail.into())
    }

    /// HTTP status for this failure.
    ///
    /// `UnsupportedFormat` is a client error (400) while signature and expiry
    /// failures are 401.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredential
            | Self::MalformedCredential
            | Self::UnsupportedFormat(_)
            | Self::MalformedClaims(_) => StatusCode::BAD_REQUEST,
            Self::BadSignature | Self::Expired => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InternalFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingCredential => ErrorCode::MissingCredential,
            Self::MalformedCredential => ErrorCode::MalformedCredential,
            Self::BadSignature => ErrorCode::BadSignature,
            Self::Expired => ErrorCode::TokenExpired,
            Self::UnsupportedFormat(_) => ErrorCode::UnsupportedToken,
            Self::MalformedClaims(_) => ErrorCode::MalformedClaims,
            Self::Forbidden => ErrorCode::Forbidden,
            Self::InternalFault(_) => ErrorCode::Internal,
        }
    }

    /// Short human-readable message safe to send to the caller.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingCredential => "JWT token is required",
            Self::MalformedCredential => "Authorization header must be 'Bearer <token>'",
            Self::BadSignature => "Invalid JWT signature",
            Self::Expired => "Expired JWT token",
            Self::UnsupportedFormat(_) => "Unsupported JWT token",
            Self::MalformedClaims(_) => "Malformed JWT claims",
            Self::Forbidden => "Access denied",
            Self::InternalFault(_) => "Internal server error",
        }
    }

    /// Only unclassified faults need operational follow-up.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::InternalFault(_))
    }
}
