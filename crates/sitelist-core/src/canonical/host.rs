//! Reduces a raw URL or domain line to a bare lowercase host.

/// Scheme prefixes removed before host extraction, matched case-insensitively.
const SCHEMES: &[&str] = &["http://", "https://"];

/// Strips scheme, path, port and a leading `www.` from `raw`, lowercasing the rest.
///
/// Only `http://` and `https://` are recognised; anything else is treated as
/// part of the host. No further validation takes place.
pub fn strip_to_host(raw: &str) -> String {
    let mut rest = raw;
    for scheme in SCHEMES {
        if starts_with_ignore_ascii_case(rest, scheme) {
            rest = &rest[scheme.len()..];
            break;
        }
    }

    let rest = rest.split('/').next().unwrap_or_default();
    let rest = rest.split(':').next().unwrap_or_default();

    let host = rest.to_lowercase();
    match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    }
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}
