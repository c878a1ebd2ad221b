//! Error codes for the todo backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

/// Centralized error codes surfaced in Problem Details bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication gate
    /// No Authorization header on a protected path
    MissingCredential,
    /// Authorization header present but not `Bearer <token>`
    MalformedCredential,
    /// Signature mismatch or unparseable token
    BadSignature,
    /// Correctly signed token past its expiry
    TokenExpired,
    /// Token uses an algorithm or serialization we do not accept
    UnsupportedToken,
    /// Claims missing or violating their invariants
    MalformedClaims,
    /// Authenticated, but the role does not satisfy the path policy
    Forbidden,

    // Resources
    NotFound,

    // System
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCredential => "MISSING_CREDENTIAL",
            Self::MalformedCredential => "MALFORMED_CREDENTIAL",
            Self::BadSignature => "BAD_SIGNATURE",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::UnsupportedToken => "UNSUPPORTED_TOKEN",
            Self::MalformedClaims => "MALFORMED_CLAIMS",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
