use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use tracing::error;

use crate::auth::principal::{AuthoritySet, Identity, Principal};
use crate::error::AppError;

/// Authenticated caller, as installed by the `AuthGate` middleware.
///
/// Only usable on routes the gate protects. On an exempt route there is no
/// identity, which is a wiring mistake and surfaces as a 500.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub principal: Principal,
    pub authorities: AuthoritySet,
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(current_identity(req).map(|identity| AuthUser {
            principal: identity.principal,
            authorities: identity.authorities,
        }))
    }
}

/// Identity installed for `req`, or an internal error if there is none.
pub fn current_identity(req: &HttpRequest) -> Result<Identity, AppError> {
    req.extensions().get::<Identity>().cloned().ok_or_else(|| {
        error!(path = %req.path(), "no identity installed for request");
        AppError::internal("no identity installed for request")
    })
}

/// Principal installed for `req`, or an internal error if there is none.
pub fn current_principal(req: &HttpRequest) -> Result<Principal, AppError> {
    current_identity(req).map(|identity| identity.principal)
}
