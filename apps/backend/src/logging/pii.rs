use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Literal patterns, exercised by the tests below.
#[allow(clippy::unwrap_used)]
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap());

/// Compact JWS: three base64url segments, the last possibly empty.
#[allow(clippy::unwrap_used)]
static COMPACT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]*").unwrap()
});

/// Opaque base64/base64url runs of 16+ characters (secrets, lone segments).
#[allow(clippy::unwrap_used)]
static OPAQUE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9+/_-]{16,}={0,2}").unwrap());

/// Mask emails and bearer-like material in free text before it is logged.
///
/// Emails keep their first character and domain; compact tokens and long
/// opaque runs become `[REDACTED_TOKEN]`.
pub fn redact(input: &str) -> String {
    let emails = EMAIL.replace_all(input, |caps: &regex::Captures| {
        let full = &caps[0];
        match full.split_once('@') {
            Some((local, domain)) if !local.is_empty() => {
                let first = local.chars().next().map(String::from).unwrap_or_default();
                format!("{first}***@{domain}")
            }
            _ => full.to_string(),
        }
    });

    let tokens = COMPACT_TOKEN.replace_all(&emails, "[REDACTED_TOKEN]");
    OPAQUE_TOKEN
        .replace_all(&tokens, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Formats its contents through [`redact`], for both `%` and `?` fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
