//! Property tests for path pattern matching.
//!
//! Properties tested:
//! - A subtree pattern matches its prefix and every path beneath it
//! - A subtree pattern never matches a sibling that merely shares a string prefix
//! - Exact patterns ignore trailing slashes and nothing else
//! - Paths outside every rule fall back to `Authenticated`

use proptest::prelude::*;

use super::path_policy::{PathPattern, PathPolicy, Requirement};

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}"
}

fn segments(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 0..max)
}

fn join(parts: &[String]) -> String {
    format!("/{}", parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_subtree_matches_descendants(
        prefix in prop::collection::vec(segment(), 1..4),
        rest in segments(5),
    ) {
        let pattern = PathPattern::parse(&format!("{}/**", join(&prefix))).unwrap();
        let mut path = prefix.clone();
        path.extend(rest);

        prop_assert!(pattern.matches(&join(&path)));
    }

    #[test]
    fn prop_subtree_rejects_string_prefix_sibling(
        prefix in prop::collection::vec(segment(), 1..4),
        suffix in segment(),
        rest in segments(3),
    ) {
        let pattern = PathPattern::parse(&format!("{}/**", join(&prefix))).unwrap();
        let mut sibling = prefix.clone();
        if let Some(last) = sibling.last_mut() {
            last.push_str(&suffix);
        }
        sibling.extend(rest);

        prop_assert!(!pattern.matches(&join(&sibling)));
    }

    #[test]
    fn prop_exact_pattern_only_matches_itself(
        parts in prop::collection::vec(segment(), 1..5),
        extra in segment(),
    ) {
        let path = join(&parts);
        let pattern = PathPattern::parse(&path).unwrap();

        prop_assert!(pattern.matches(&path));
        let with_slash = format!("{path}/");
        prop_assert!(pattern.matches(&with_slash));
        let child = format!("{path}/{extra}");
        prop_assert!(!pattern.matches(&child));
    }

    #[test]
    fn prop_unmatched_paths_require_authentication(parts in segments(5)) {
        let policy = PathPolicy::new().exempt("/zz-exempt/**").unwrap();
        prop_assume!(parts.first().map(String::as_str) != Some("zz-exempt"));

        prop_assert_eq!(policy.requirement_for(&join(&parts)), Requirement::Authenticated);
    }
}
