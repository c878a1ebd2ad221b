//! Application configuration loaded once from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::path_policy::{PathPolicy, DEFAULT_ADMIN_PATHS, DEFAULT_EXEMPT_PATHS};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Token verification
    pub security: SecurityConfig,

    // Exempt rules first, then admin rules; built and validated once
    pub policy: PathPolicy,

    // Browser origins allowed by CORS; empty means localhost fallback
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("BACKEND_PORT", 8080u16)?;

        let secret = env::var("JWT_SECRET_KEY")
            .map_err(|_| AppError::config("JWT_SECRET_KEY must be set"))?;
        let leeway = parse_var("JWT_LEEWAY_SECS", 0u64)?;
        let ttl = parse_var("JWT_TTL_SECS", 3600u64)?;
        if ttl == 0 {
            return Err(AppError::config("JWT_TTL_SECS must be greater than zero"));
        }
        let security = SecurityConfig::from_base64_secret(&secret)?
            .with_leeway(Duration::from_secs(leeway))
            .with_token_ttl(Duration::from_secs(ttl));

        let exempt_paths = list_var("AUTH_EXEMPT_PATHS", &DEFAULT_EXEMPT_PATHS);
        let admin_paths = list_var("AUTH_ADMIN_PATHS", &DEFAULT_ADMIN_PATHS);
        let policy = PathPolicy::from_patterns(
            exempt_paths.iter().map(String::as_str),
            admin_paths.iter().map(String::as_str),
        )?;
        let cors_allowed_origins = list_var("CORS_ALLOWED_ORIGINS", &[]);

        Ok(Config {
            host,
            port,
            security,
            policy,
            cors_allowed_origins,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("{name} must be a non-negative integer, got '{raw}'"))
        }),
        _ => Ok(default),
    }
}

/// Comma-separated list; unset or blank falls back to `default`.
fn list_var(name: &str, default: &[&str]) -> Vec<String> {
    let parsed: Vec<String> = env::var(name)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        default.iter().map(|s| s.to_string()).collect()
    } else {
        parsed
    }
}
