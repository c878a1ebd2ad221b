use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Smallest HMAC key we accept, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Signing key and token rules, built once at startup and shared read-only.
#[derive(Clone)]
pub struct SecurityConfig {
    /// HMAC key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Only algorithm accepted on verification (defaults to HS256)
    pub algorithm: Algorithm,
    /// Clock skew tolerated on `exp`
    pub leeway: Duration,
    /// Lifetime of minted tokens
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given raw secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            leeway: Duration::ZERO,
            token_ttl: Duration::from_secs(60 * 60),
        }
    }

    /// Build from a base64-encoded secret, enforcing the minimum key length.
    pub fn from_base64_secret(encoded: &str) -> Result<Self, AppError> {
        let secret = STANDARD
            .decode(encoded.trim())
            .map_err(|e| AppError::config(format!("JWT_SECRET_KEY is not valid base64: {e}")))?;
        if secret.len() < MIN_SECRET_LEN {
            return Err(AppError::config(format!(
                "JWT_SECRET_KEY must decode to at least {MIN_SECRET_LEN} bytes, got {}",
                secret.len()
            )));
        }
        Ok(Self::new(secret))
    }

    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field("leeway", &self.leeway)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
