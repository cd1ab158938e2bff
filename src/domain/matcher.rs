//! Path matching against a rule snapshot.
//!
//! The matcher is pure and stateless: given an immutable
//! [`RuleSnapshot`] and a request path it either produces a redirect
//! outcome or nothing. It needs no synchronization of its own and is
//! safe to call from any number of concurrent request handlers.

use crate::domain::entities::{RedirectRule, RedirectStatus, RuleSnapshot};

/// Outcome of a successful rule match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Value for the `Location` header of the redirect response.
    pub location: String,
    pub status: RedirectStatus,
}

/// Finds the redirect outcome for a request path, if any rule matches.
///
/// Rules are evaluated in their stored order and the first match wins;
/// there is no longest-prefix preference. Rule authors who configure
/// overlapping prefixes must order them accordingly.
///
/// Matching semantics per rule:
///
/// - Exact rule: the request path must equal `source_path`; the target
///   is used verbatim.
/// - Prefix-relative rule: the request path must start with
///   `source_path` and the character following the prefix must be
///   absent or a `/`, so `/product` does not match `/productX`. The
///   unmatched remainder (leading `/` included) is appended to the
///   target.
pub fn find_redirect(snapshot: &RuleSnapshot, path: &str) -> Option<RuleMatch> {
    snapshot.rules().iter().find_map(|rule| apply_rule(rule, path))
}

fn apply_rule(rule: &RedirectRule, path: &str) -> Option<RuleMatch> {
    if rule.prefix_relative {
        let remainder = path.strip_prefix(rule.source_path.as_str())?;
        // Boundary check: the prefix must end at a path segment.
        if !remainder.is_empty() && !remainder.starts_with('/') {
            return None;
        }
        Some(RuleMatch {
            location: format!("{}{}", rule.target_path, remainder),
            status: rule.status,
        })
    } else if path == rule.source_path {
        Some(RuleMatch {
            location: rule.target_path.clone(),
            status: rule.status,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(source: &str, target: &str, status: RedirectStatus) -> RedirectRule {
        RedirectRule {
            source_path: source.to_string(),
            target_path: target.to_string(),
            status,
            prefix_relative: false,
        }
    }

    fn prefix(source: &str, target: &str, status: RedirectStatus) -> RedirectRule {
        RedirectRule {
            prefix_relative: true,
            ..exact(source, target, status)
        }
    }

    #[test]
    fn exact_rule_matches_only_the_exact_path() {
        let snapshot = RuleSnapshot::new(vec![exact(
            "/campaignA",
            "/campaigns/targetcampaign",
            RedirectStatus::Temporary,
        )]);

        let m = find_redirect(&snapshot, "/campaignA").unwrap();
        assert_eq!(m.location, "/campaigns/targetcampaign");
        assert_eq!(m.status, RedirectStatus::Temporary);

        assert!(find_redirect(&snapshot, "/campaignA/extra").is_none());
        assert!(find_redirect(&snapshot, "/campaign").is_none());
    }

    #[test]
    fn prefix_rule_carries_the_remainder_to_the_target() {
        let snapshot = RuleSnapshot::new(vec![prefix(
            "/product-directory",
            "/products",
            RedirectStatus::Permanent,
        )]);

        let m = find_redirect(&snapshot, "/product-directory/bits/masonary/diamond-tip").unwrap();
        assert_eq!(m.location, "/products/bits/masonary/diamond-tip");
        assert_eq!(m.status, RedirectStatus::Permanent);
    }

    #[test]
    fn prefix_rule_matches_the_bare_prefix() {
        let snapshot = RuleSnapshot::new(vec![prefix(
            "/product-directory",
            "/products",
            RedirectStatus::Permanent,
        )]);

        let m = find_redirect(&snapshot, "/product-directory").unwrap();
        assert_eq!(m.location, "/products");
    }

    #[test]
    fn prefix_rule_requires_a_segment_boundary() {
        let snapshot = RuleSnapshot::new(vec![prefix(
            "/product",
            "/products",
            RedirectStatus::Permanent,
        )]);

        assert!(find_redirect(&snapshot, "/productX").is_none());
        assert!(find_redirect(&snapshot, "/product-directory").is_none());
        assert!(find_redirect(&snapshot, "/product/42").is_some());
    }

    #[test]
    fn trailing_slash_is_part_of_the_remainder() {
        let snapshot = RuleSnapshot::new(vec![prefix(
            "/docs",
            "/manual",
            RedirectStatus::Temporary,
        )]);

        // No normalization: the trailing slash is carried through.
        let m = find_redirect(&snapshot, "/docs/").unwrap();
        assert_eq!(m.location, "/manual/");
    }

    #[test]
    fn first_matching_rule_wins() {
        let snapshot = RuleSnapshot::new(vec![
            prefix("/shop", "/store", RedirectStatus::Temporary),
            exact("/shop/sale", "/clearance", RedirectStatus::Permanent),
        ]);

        // Both rules match, the earlier prefix rule takes precedence.
        let m = find_redirect(&snapshot, "/shop/sale").unwrap();
        assert_eq!(m.location, "/store/sale");
        assert_eq!(m.status, RedirectStatus::Temporary);
    }

    #[test]
    fn empty_snapshot_never_matches() {
        let snapshot = RuleSnapshot::new(vec![]);
        assert!(find_redirect(&snapshot, "/anything").is_none());
    }
}
