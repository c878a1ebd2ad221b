//! Token codec, principal model and the gate's decision steps.

pub mod claims;
pub mod error;
pub mod gate;
pub mod jwt;
pub mod principal;


pub use claims::{TokenClaims, UserRole};
pub use error::AuthError;
pub use jwt::{
    encode_claims, mint_access_token, strip_scheme_prefix, verify_and_decode,
    verify_and_decode_at, TokenSubject, BEARER_SCHEME,
};
pub use principal::{AuthoritySet, Identity, Principal};
