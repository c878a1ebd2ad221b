//! Token codec: bearer extraction, HS* signing, and classified verification.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde_json::{Map, Value};

use super::claims::{TokenClaims, UserRole};
use super::error::AuthError;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Scheme marker expected at the start of the Authorization header.
pub const BEARER_SCHEME: &str = "Bearer";

/// Return the token that follows `Bearer ` in a raw header value.
///
/// The marker is case-sensitive and must be followed by exactly one space
/// and a non-empty token without further whitespace.
pub fn strip_scheme_prefix(raw_header_value: &str) -> Result<&str, AuthError> {
    let token = raw_header_value
        .strip_prefix(BEARER_SCHEME)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or(AuthError::MalformedCredential)?;

    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(AuthError::MalformedCredential);
    }
    Ok(token)
}

/// Verify `token` against the configured key and the current time.
pub fn verify_and_decode(token: &str, security: &SecurityConfig) -> Result<TokenClaims, AuthError> {
    verify_and_decode_at(token, SystemTime::now(), security)
}

/// Verify `token` as of `now`.
///
/// Order of checks: token shape and algorithm, signature, expiry, then claim
/// content. The first failing check decides the classification.
pub fn verify_and_decode_at(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<TokenClaims, AuthError> {
    inspect_header(token, security)?;

    // Expiry is checked below against `now` so that callers control the clock.
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp"]);

    let payload = decode::<Map<String, Value>>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(classify)?;

    let exp = payload
        .get("exp")
        .and_then(Value::as_i64)
        .ok_or_else(|| AuthError::malformed_claims("exp must be an integer timestamp"))?;
    let leeway = i64::try_from(security.leeway.as_secs()).unwrap_or(i64::MAX);
    if unix_seconds(now)? > exp.saturating_add(leeway) {
        return Err(AuthError::Expired);
    }

    let claims: TokenClaims = serde_json::from_value(Value::Object(payload))
        .map_err(|e| AuthError::malformed_claims(e.to_string()))?;
    claims.validate()?;
    Ok(claims)
}

/// Reject tokens we cannot verify before touching the signature.
fn inspect_header(token: &str, security: &SecurityConfig) -> Result<(), AuthError> {
    let segments: Vec<&str> = token.split('.').collect();
    match segments.len() {
        3 => {}
        5 => return Err(AuthError::unsupported("encrypted tokens are not accepted")),
        _ => return Err(AuthError::BadSignature),
    }

    let raw = URL_SAFE_NO_PAD
        .decode(segments[0])
        .map_err(|_| AuthError::BadSignature)?;
    let fields: Value = serde_json::from_slice(&raw).map_err(|_| AuthError::BadSignature)?;
    let alg = fields
        .get("alg")
        .and_then(Value::as_str)
        .ok_or(AuthError::BadSignature)?;

    match alg.parse::<Algorithm>() {
        Ok(parsed) if parsed == security.algorithm => {}
        Ok(parsed) => {
            return Err(AuthError::unsupported(format!(
                "algorithm {parsed:?} is not accepted"
            )))
        }
        Err(_) => return Err(AuthError::unsupported(format!("unknown algorithm '{alg}'"))),
    }

    // Any JSON error left after this comes from the claims of a signed token
    serde_json::from_slice::<Header>(&raw).map_err(|_| AuthError::BadSignature)?;
    Ok(())
}

fn classify(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::InvalidSignature
        | ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Utf8(_) => AuthError::BadSignature,
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName
        | ErrorKind::MissingAlgorithm => AuthError::unsupported(err.to_string()),
        ErrorKind::MissingRequiredClaim(claim) => {
            AuthError::malformed_claims(format!("missing required claim '{claim}'"))
        }
        ErrorKind::Json(e) => AuthError::malformed_claims(e.to_string()),
        _ => AuthError::internal(format!("token verification failed: {err}")),
    }
}

fn unix_seconds(at: SystemTime) -> Result<i64, AuthError> {
    at.duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| i64::try_from(d.as_secs()).ok())
        .ok_or_else(|| AuthError::internal("system clock is outside the token time range"))
}

/// Identity fields written into a minted token.
#[derive(Debug, Clone, Copy)]
pub struct TokenSubject<'a> {
    pub user_id: i64,
    pub email: &'a str,
    pub nickname: &'a str,
    pub role: UserRole,
}

/// Mint an access token valid for `security.token_ttl` from `now`.
pub fn mint_access_token(
    subject: &TokenSubject<'_>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = unix_seconds(now).map_err(|_| AppError::internal("Failed to get current time"))?;
    let exp = i64::try_from(security.token_ttl.as_secs())
        .ok()
        .and_then(|ttl| iat.checked_add(ttl))
        .ok_or_else(|| AppError::internal("token ttl overflows the expiry timestamp"))?;

    let claims = TokenClaims {
        sub: subject.user_id.to_string(),
        email: subject.email.to_string(),
        nickname: subject.nickname.to_string(),
        user_role: subject.role,
        iat: Some(iat),
        exp,
    };

    encode_claims(&claims, security)
}

/// Sign an arbitrary claims payload with the configured key and algorithm.
pub fn encode_claims<C: Serialize>(claims: &C, security: &SecurityConfig) -> Result<String, AppError> {
    encode(
        &Header::new(security.algorithm),
        claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}
