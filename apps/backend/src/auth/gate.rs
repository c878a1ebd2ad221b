//! Decision steps of the authentication gate, independent of the HTTP stack.
//!
//! `middleware::auth_gate` drives these in order for every request:
//! exemption → credential → verification → principal → install → authorize.

use std::time::SystemTime;

use super::error::AuthError;
use super::jwt::{strip_scheme_prefix, verify_and_decode_at};
use super::principal::{Identity, Principal};
use crate::config::path_policy::Requirement;
use crate::state::security_config::SecurityConfig;

/// Raw Authorization header as seen by the gate.
#[derive(Debug, Clone, Copy)]
pub enum CredentialHeader<'a> {
    Absent,
    /// Present but not visible ASCII
    Opaque,
    Present(&'a str),
}

impl<'a> CredentialHeader<'a> {
    pub fn from_header(value: Option<&'a actix_web::http::header::HeaderValue>) -> Self {
        match value {
            None => Self::Absent,
            Some(v) => v.to_str().map(Self::Present).unwrap_or(Self::Opaque),
        }
    }
}

/// Steps 2–5: credential presence, extraction, verification, principal.
pub fn authenticate(
    header: CredentialHeader<'_>,
    security: &SecurityConfig,
    now: SystemTime,
) -> Result<Identity, AuthError> {
    let raw = match header {
        CredentialHeader::Absent => return Err(AuthError::MissingCredential),
        CredentialHeader::Opaque => return Err(AuthError::MalformedCredential),
        CredentialHeader::Present(raw) => raw,
    };

    let token = strip_scheme_prefix(raw)?;
    let claims = verify_and_decode_at(token, now, security)?;
    let principal = Principal::try_from(claims)?;
    Ok(Identity::from(principal))
}

/// Step 7: role gating against the matched requirement.
pub fn authorize(requirement: Requirement, identity: &Identity) -> Result<(), AuthError> {
    if requirement.is_satisfied_by(&identity.authorities) {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}
