use serde::Serialize;
use std::fmt;

/// A raw entry that lost to another entry with the same canonical key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub discarded: String,
    pub kept: String,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.discarded, self.kept)
    }
}

/// Outcome of a dedupe run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DedupReport {
    /// Non-blank input lines.
    pub total_count: usize,
    /// Distinct canonical keys; equals `representatives.len()`.
    pub unique_count: usize,
    /// One entry per key, in first-seen key order.
    pub representatives: Vec<String>,
    /// One record per line whose key was already taken, in input order.
    pub collisions: Vec<Collision>,
}

impl DedupReport {
    pub fn duplicates_removed(&self) -> usize {
        self.total_count - self.unique_count
    }

    /// First `n` collisions rendered as `"<discarded> -> <kept>"`.
    pub fn collision_preview(&self, n: usize) -> Vec<String> {
        self.collisions.iter().take(n).map(ToString::to_string).collect()
    }
}
