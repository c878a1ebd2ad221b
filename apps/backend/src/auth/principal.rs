//! Request-scoped caller identity derived from verified claims.

use serde::Serialize;

use super::claims::{TokenClaims, UserRole};
use super::error::AuthError;

/// The authenticated caller of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub role: UserRole,
}

impl TryFrom<TokenClaims> for Principal {
    type Error = AuthError;

    fn try_from(claims: TokenClaims) -> Result<Self, Self::Error> {
        let id = claims.subject_id()?;
        Ok(Self {
            id,
            email: claims.email,
            nickname: claims.nickname,
            role: claims.user_role,
        })
    }
}

/// Authorities granted to a principal. Always exactly `ROLE_<role>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuthoritySet(Vec<String>);

impl AuthoritySet {
    pub fn for_role(role: UserRole) -> Self {
        Self(vec![role.authority()])
    }

    pub fn contains(&self, authority: &str) -> bool {
        self.0.iter().any(|a| a == authority)
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.contains(&role.authority())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// What the gate installs for downstream handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub principal: Principal,
    pub authorities: AuthoritySet,
}

impl From<Principal> for Identity {
    fn from(principal: Principal) -> Self {
        let authorities = AuthoritySet::for_role(principal.role);
        Self {
            principal,
            authorities,
        }
    }
}
