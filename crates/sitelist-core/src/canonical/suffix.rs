//! Multi-part public suffixes that keep an extra label in the canonical key.

/// Suffixes under which the registrable site sits one label deeper
/// (`example.co.uk` rather than `co.uk`). Matched against the lowercased host.
pub const SPECIAL_SUFFIXES: &[&str] = &[
    ".co.uk",
    ".co.jp",
    ".co.kr",
    ".co.in",
    ".co.za",
    ".co.nz",
    ".co.au",
    ".com.au",
    ".com.br",
    ".com.cn",
    ".com.mx",
    ".com.ar",
    ".com.tr",
    ".org.uk",
    ".net.au",
    ".edu.au",
    ".gov.au",
    ".asn.au",
    ".ac.uk",
    ".gov.uk",
    ".sch.uk",
    ".police.uk",
];

/// Returns the first special suffix `host` ends with, if any.
pub fn special_suffix(host: &str) -> Option<&'static str> {
    SPECIAL_SUFFIXES
        .iter()
        .copied()
        .find(|suffix| host.ends_with(suffix))
}
