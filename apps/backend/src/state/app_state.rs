use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::config::path_policy::PathPolicy;
use crate::error::AppError;

/// Shared, read-only resources handed to every worker via `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Signing key and token rules
    pub security: SecurityConfig,
    /// Path → requirement table used by the gate
    pub policy: Arc<PathPolicy>,
}

impl AppState {
    pub fn new(security: SecurityConfig, policy: PathPolicy) -> Self {
        Self {
            security,
            policy: Arc::new(policy),
        }
    }

    /// State with the built-in path policy.
    pub fn with_default_policy(security: SecurityConfig) -> Result<Self, AppError> {
        Ok(Self::new(security, PathPolicy::default_policy()?))
    }
}
