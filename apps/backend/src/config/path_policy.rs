//! Static path → requirement table consulted by the authentication gate.
//!
//! Rules are evaluated in insertion order and the first matching pattern wins.
//! Paths that match no rule require an authenticated caller.
//!
//! Pattern syntax (segment based):
//! - `/auth/**` matches `/auth` and everything beneath it, but not `/authors`
//! - `/todos/*` matches exactly one segment under `/todos`
//! - anything else is an exact match; trailing slashes are ignored

use std::fmt;

use crate::auth::claims::UserRole;
use crate::auth::principal::AuthoritySet;
use crate::error::AppError;

/// What a path demands of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// No credential needed; the gate forwards untouched
    Exempt,
    /// Authenticated caller holding this role
    Role(UserRole),
    /// Any authenticated caller
    Authenticated,
}

impl Requirement {
    /// Whether an authenticated caller with `authorities` may proceed.
    pub fn is_satisfied_by(&self, authorities: &AuthoritySet) -> bool {
        match self {
            Self::Exempt | Self::Authenticated => true,
            Self::Role(role) => authorities.has_role(*role),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    /// Pattern ended in `/**`
    subtree: bool,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        if !raw.starts_with('/') {
            return Err(AppError::config(format!(
                "path pattern '{raw}' must start with '/'"
            )));
        }

        let parts: Vec<&str> = split_segments(raw).collect();
        let mut segments = Vec::with_capacity(parts.len());
        let mut subtree = false;

        for (i, part) in parts.iter().enumerate() {
            match *part {
                "**" if i + 1 == parts.len() => subtree = true,
                "**" => {
                    return Err(AppError::config(format!(
                        "'**' is only allowed as the last segment in '{raw}'"
                    )))
                }
                "*" => segments.push(Segment::Any),
                literal if literal.contains('*') => {
                    return Err(AppError::config(format!(
                        "partial wildcards are not supported in '{raw}'"
                    )))
                }
                literal => segments.push(Segment::Literal(literal.to_string())),
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
            subtree,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        let mut path_segments = split_segments(path);

        for expected in &self.segments {
            match (expected, path_segments.next()) {
                (Segment::Literal(lit), Some(actual)) if lit == actual => {}
                (Segment::Any, Some(_)) => {}
                _ => return false,
            }
        }

        self.subtree || path_segments.next().is_none()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRule {
    pub pattern: PathPattern,
    pub requirement: Requirement,
}

/// Ordered, immutable rule table.
#[derive(Debug, Clone, Default)]
pub struct PathPolicy {
    rules: Vec<PathRule>,
}

impl PathPolicy {
    /// Empty policy: every path requires authentication.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, pattern: &str, requirement: Requirement) -> Result<Self, AppError> {
        self.rules.push(PathRule {
            pattern: PathPattern::parse(pattern)?,
            requirement,
        });
        Ok(self)
    }

    pub fn exempt(self, pattern: &str) -> Result<Self, AppError> {
        self.rule(pattern, Requirement::Exempt)
    }

    pub fn require_role(self, pattern: &str, role: UserRole) -> Result<Self, AppError> {
        self.rule(pattern, Requirement::Role(role))
    }

    pub fn authenticated(self, pattern: &str) -> Result<Self, AppError> {
        self.rule(pattern, Requirement::Authenticated)
    }

    /// Exempt patterns first, then admin patterns, in the given order.
    pub fn from_patterns<'a>(
        exempt: impl IntoIterator<Item = &'a str>,
        admin: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, AppError> {
        let policy = exempt
            .into_iter()
            .try_fold(Self::new(), |policy, pattern| policy.exempt(pattern))?;
        admin
            .into_iter()
            .try_fold(policy, |policy, pattern| {
                policy.require_role(pattern, UserRole::Admin)
            })
    }

    /// `/auth/**`, `/error/**` and `/health` exempt; `/admin/**` admin-only.
    pub fn default_policy() -> Result<Self, AppError> {
        Self::from_patterns(DEFAULT_EXEMPT_PATHS.iter().copied(), DEFAULT_ADMIN_PATHS.iter().copied())
    }

    pub fn requirement_for(&self, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| rule.requirement)
            .unwrap_or(Requirement::Authenticated)
    }

    pub fn rules(&self) -> &[PathRule] {
        &self.rules
    }
}

pub const DEFAULT_EXEMPT_PATHS: [&str; 3] = ["/auth/**", "/error/**", "/health"];
pub const DEFAULT_ADMIN_PATHS: [&str; 1] = ["/admin/**"];
