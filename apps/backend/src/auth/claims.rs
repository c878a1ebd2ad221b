//! Claims carried by access tokens and the closed role enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// Roles a token may carry. Wire values are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl UserRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Authority granted by this role, e.g. `ROLE_ADMIN`.
    pub fn authority(&self) -> String {
        format!("ROLE_{}", self.as_str())
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            other => Err(AuthError::malformed_claims(format!(
                "unknown role '{other}'"
            ))),
        }
    }
}

/// Payload of a backend access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id as a decimal string
    pub sub: String,
    pub email: String,
    pub nickname: String,
    #[serde(rename = "userRole")]
    pub user_role: UserRole,
    /// Issued-at (seconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl TokenClaims {
    /// Parse `sub` as a positive user id.
    pub fn subject_id(&self) -> Result<i64, AuthError> {
        match self.sub.parse::<i64>() {
            Ok(id) if id > 0 => Ok(id),
            Ok(id) => Err(AuthError::malformed_claims(format!(
                "subject id must be positive, got {id}"
            ))),
            Err(_) => Err(AuthError::malformed_claims(format!(
                "subject '{}' is not numeric",
                self.sub
            ))),
        }
    }

    /// Check the invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), AuthError> {
        if let Some(iat) = self.iat {
            if self.exp <= iat {
                return Err(AuthError::malformed_claims(format!(
                    "exp ({}) must be after iat ({iat})",
                    self.exp
                )));
            }
        }
        self.subject_id().map(|_| ())
    }
}
