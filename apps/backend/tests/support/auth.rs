//! Token helpers for tests.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};
use todo_backend::auth::jwt::{encode_claims, mint_access_token, TokenSubject};
use todo_backend::{SecurityConfig, UserRole};

/// Secret shared by the test app and the helpers below.
pub const TEST_SECRET: &[u8] = b"integration_test_secret_key_0123456789abcdef";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

pub fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs() as i64
}

/// Mint a token for user `user_id` with the given role.
pub fn mint_test_token(user_id: i64, role: UserRole, sec: &SecurityConfig) -> String {
    let email = format!("user{user_id}@example.com");
    let nickname = format!("user{user_id}");
    let subject = TokenSubject {
        user_id,
        email: &email,
        nickname: &nickname,
        role,
    };
    mint_access_token(&subject, SystemTime::now(), sec).expect("should mint token successfully")
}

/// Full Authorization header value including the `Bearer ` prefix.
pub fn bearer_header(user_id: i64, role: UserRole, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(user_id, role, sec))
}

/// Sign an arbitrary payload, for claims the minting API would never produce.
pub fn sign_payload(payload: &Value, sec: &SecurityConfig) -> String {
    encode_claims(payload, sec).expect("should sign payload")
}

/// Claims for amy (id 42) with the given role and expiry.
pub fn amy_claims(role: &str, exp: i64) -> Value {
    json!({
        "sub": "42",
        "email": "a@x.com",
        "nickname": "amy",
        "userRole": role,
        "exp": exp,
    })
}

/// A correctly signed token for amy that expired one second ago.
pub fn mint_expired_token(sec: &SecurityConfig) -> String {
    sign_payload(&amy_claims("ADMIN", now_secs() - 1), sec)
}

/// A valid token with its first signature character replaced.
pub fn tampered_token(sec: &SecurityConfig) -> String {
    let token = mint_test_token(7, UserRole::User, sec);
    let sig_start = token.rfind('.').expect("three segments") + 1;
    let mut bytes = token.into_bytes();
    bytes[sig_start] = if bytes[sig_start] == b'A' { b'B' } else { b'A' };
    String::from_utf8(bytes).expect("ascii token")
}

/// An unsigned (`alg: none`) token carrying otherwise valid claims.
pub fn unsigned_token() -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(amy_claims("ADMIN", now_secs() + 3600).to_string());
    format!("{header}.{payload}.")
}

/// Valid claims under a header that is JSON but not a JOSE header, with a
/// made-up signature.
pub fn forged_token_with_odd_header() -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":5}"#);
    let payload = URL_SAFE_NO_PAD.encode(amy_claims("ADMIN", now_secs() + 3600).to_string());
    format!("{header}.{payload}.AAAAforgedsignatureAAAA")
}
