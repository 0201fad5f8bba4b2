//! Public Suffix List (PSL) lookups and eTLD+1 extraction
//!
//! This module turns partitioned rule sets into hash sets keyed by the bare
//! suffix, so hosts can be checked against the list. To go straight from
//! raw list text, use `psl_compiler::load_suffix_list`.
//!
//! # Examples
//!
//! ```
//! use psl_core::{PublicSuffixList, RuleSets};
//!
//! let sets = RuleSets {
//!     full_match: vec!["com".into(), "jp".into(), "*.kobe.jp".into()],
//!     exception: vec!["!city.kobe.jp".into()],
//!     wildcard: vec!["*.kobe.jp".into()],
//! };
//! let psl = PublicSuffixList::from_rule_sets(&sets);
//!
//! assert!(psl.is_public_suffix("shop.kobe.jp"));
//! assert!(!psl.is_public_suffix("city.kobe.jp"));
//! assert_eq!(psl.registrable_domain("www.example.com").as_deref(), Some("example.com"));
//! ```

use std::collections::HashSet;

use crate::rules::RuleSets;

// =============================================================================
// PSL Hash Sets
// =============================================================================

/// PSL rule sets for suffix lookup.
#[derive(Debug, Clone, Default)]
pub struct PublicSuffixList {
    /// Exact suffix rules (e.g., "com", "co.uk")
    exact: HashSet<String>,

    /// Wildcard rules (e.g., "*.ck" stored as "ck")
    wildcard: HashSet<String>,

    /// Exception rules (e.g., "!www.ck" stored as "www.ck")
    exception: HashSet<String>,
}

impl PublicSuffixList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build lookup sets from partitioned rules.
    ///
    /// Wildcard lines also sit in the full-match set; they are only
    /// indexed as wildcards here.
    pub fn from_rule_sets(rules: &RuleSets) -> Self {
        let mut psl = Self::new();

        for rule in &rules.full_match {
            if !rule.starts_with("*.") {
                psl.exact.insert(rule.to_ascii_lowercase());
            }
        }

        for rule in &rules.wildcard {
            if let Some(parent) = rule.strip_prefix("*.") {
                psl.wildcard.insert(parent.to_ascii_lowercase());
            }
        }

        for rule in &rules.exception {
            if let Some(name) = rule.strip_prefix('!') {
                psl.exception.insert(name.to_ascii_lowercase());
            }
        }

        log::debug!(
            "PSL loaded: {} exact, {} wildcard, {} exception",
            psl.exact.len(),
            psl.wildcard.len(),
            psl.exception.len()
        );

        psl
    }

    /// Check if a suffix is an exact rule.
    #[inline]
    pub fn is_exact(&self, suffix: &str) -> bool {
        self.exact.contains(suffix)
    }

    /// Check if a suffix is the parent of a wildcard rule.
    #[inline]
    pub fn is_wildcard(&self, suffix: &str) -> bool {
        self.wildcard.contains(suffix)
    }

    /// Check if a name is an exception rule.
    #[inline]
    pub fn is_exception(&self, suffix: &str) -> bool {
        self.exception.contains(suffix)
    }

    /// Number of indexed rules.
    pub fn len(&self) -> usize {
        self.exact.len() + self.wildcard.len() + self.exception.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `domain` is itself a public suffix.
    ///
    /// Exceptions win over everything. Domains no rule covers are not
    /// treated as suffixes here.
    pub fn is_public_suffix(&self, domain: &str) -> bool {
        let domain = normalize_host(domain);
        if domain.is_empty() {
            return false;
        }
        self.matches_suffix(&domain)
    }

    fn matches_suffix(&self, domain: &str) -> bool {
        if self.is_exception(domain) {
            return false;
        }
        if self.is_exact(domain) {
            return true;
        }
        match get_parent_domain(domain) {
            Some(parent) => self.is_wildcard(parent),
            None => false,
        }
    }

    // =========================================================================
    // eTLD+1 Extraction
    // =========================================================================

    /// Get the eTLD+1 (registrable domain) for a hostname.
    ///
    /// Returns `None` for empty hosts and for hosts that are public
    /// suffixes. Hosts under an unknown TLD fall back to the last two labels.
    pub fn registrable_domain(&self, host: &str) -> Option<String> {
        let host = normalize_host(host);
        if host.is_empty() {
            return None;
        }

        let labels: Vec<&str> = host.split('.').collect();
        let n = labels.len();

        for i in 0..n {
            let suffix = labels[i..].join(".");

            // Exception rules make the name itself registrable
            if self.is_exception(&suffix) {
                return Some(suffix);
            }

            let wildcard_hit = i + 1 < n && self.is_wildcard(&labels[i + 1..].join("."));
            if self.is_exact(&suffix) || wildcard_hit {
                if i == 0 {
                    return None;
                }
                return Some(labels[i - 1..].join("."));
            }
        }

        // Implicit "*" rule: the last label is the suffix
        if n < 2 {
            return None;
        }
        Some(labels[n - 2..].join("."))
    }

    /// Check if two hosts share the same eTLD+1.
    pub fn is_same_site(&self, host1: &str, host2: &str) -> bool {
        match (self.registrable_domain(host1), self.registrable_domain(host2)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

fn normalize_host(host: &str) -> String {
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// Get the parent domain (strip leftmost label).
pub fn get_parent_domain(host: &str) -> Option<&str> {
    match host.find('.') {
        Some(idx) if idx < host.len() - 1 => Some(&host[idx + 1..]),
        _ => None,
    }
}
