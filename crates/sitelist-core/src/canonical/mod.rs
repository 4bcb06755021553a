//! Domain canonicalization.
//!
//! Maps a raw URL or domain line to the key that identifies its site: the last
//! two labels of the bare host, or the last three when the host sits under one
//! of the multi-part [`SPECIAL_SUFFIXES`].

mod host;
mod suffix;

use std::fmt;

pub use host::strip_to_host;
pub use suffix::{special_suffix, SPECIAL_SUFFIXES};

/// Lowercase site identity used to group raw entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes the canonical key of a raw entry. Total and deterministic.
///
/// # Examples
///
/// - `normalize("HTTP://WWW.Example.COM/x?y=1")` → `"example.com"`
/// - `normalize("sub.example.co.uk")` → `"example.co.uk"`
/// - `normalize("co.uk")` → `"co.uk"` (too short, passed through)
pub fn normalize(raw: &str) -> CanonicalKey {
    let host = strip_to_host(raw);
    let keep = if special_suffix(&host).is_some() { 3 } else { 2 };
    CanonicalKey(last_labels(&host, keep))
}

/// Joins the last `keep` dot-separated labels, or returns `host` unchanged
/// when it has fewer than `keep` labels.
fn last_labels(host: &str, keep: usize) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < keep {
        return host.to_string();
    }
    labels[labels.len() - keep..].join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> String {
        normalize(raw).into_string()
    }

    #[test]
    fn ordinary_domains_keep_two_labels() {
        assert_eq!(key("example.com"), "example.com");
        assert_eq!(key("a.b.c.d"), "c.d");
        assert_eq!(key("deep.sub.example.org"), "example.org");
    }

    #[test]
    fn special_suffixes_keep_three_labels() {
        assert_eq!(key("sub.example.co.uk"), "example.co.uk");
        assert_eq!(key("example.co.uk"), "example.co.uk");
        assert_eq!(key("a.b.shop.com.au"), "shop.com.au");
        assert_eq!(key("www.council.gov.uk"), "council.gov.uk");
    }

    #[test]
    fn bare_special_suffix_passes_through() {
        assert_eq!(key("co.uk"), "co.uk");
        assert_eq!(key("www.co.uk"), "co.uk");
    }

    #[test]
    fn single_label_passes_through() {
        assert_eq!(key("localhost"), "localhost");
        assert_eq!(key("http://intranet:8080/"), "intranet");
    }

    #[test]
    fn scheme_case_and_prefix_insensitive() {
        assert_eq!(key("HTTP://WWW.Example.COM/x?y=1"), "example.com");
        assert_eq!(key("https://www.example.com:443"), "example.com");
    }

    #[test]
    fn uppercase_special_suffix_is_lowercased_first() {
        assert_eq!(key("Sub.Example.CO.UK"), "example.co.uk");
    }

    #[test]
    fn canonicalization_scenario_collapses_to_one_group() {
        let keys: Vec<String> = ["example.co.uk", "www.Example.CO.UK", "sub.example.co.uk"]
            .iter()
            .map(|s| key(s))
            .collect();
        assert!(keys.iter().all(|k| k == "example.co.uk"));
    }

    #[test]
    fn canonical_keys_are_fixed_points() {
        for raw in [
            "https://www.news.example.com/a",
            "shop.example.co.jp",
            "co.uk",
            "localhost",
            "a.b.c.d",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(once.as_str()), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn trailing_dot_yields_empty_last_label() {
        assert_eq!(key("example.com."), "com.");
    }
}
