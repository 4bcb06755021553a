//! Exact-match set difference: drop every line of a large list that appears
//! verbatim in a small exclusion list.
//!
//! Comparison is literal string equality on trimmed lines. Unlike
//! [`crate::canonical`], nothing is normalized here.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::ListError;
use crate::lines::{self, LineSink};

/// Trimmed raw entries to remove.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    entries: HashSet<String>,
}

impl ExclusionSet {
    /// Builds the set from a reader, trimming lines and skipping blanks.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self, ListError> {
        let mut entries = HashSet::new();
        for entry in lines::read_entries(reader) {
            entries.insert(entry.map_err(|e| ListError::io(path, e))?);
        }
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, ListError> {
        lines::require_exists(path)?;
        let file = File::open(path).map_err(|e| ListError::io(path, e))?;
        Self::from_reader(BufReader::new(file), path)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    /// Distinct entries in the set.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(Into::<String>::into)
            .filter_map(|s| {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
        Self { entries }
    }
}

/// Outcome of one filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub removed_count: usize,
    pub kept_count: usize,
}

impl FilterStats {
    /// Non-blank lines seen in the large list.
    pub fn total(&self) -> usize {
        self.removed_count + self.kept_count
    }
}

/// Streams `large` into `sink`, leaving out entries present in `exclude`.
///
/// `large_path` is only used to attribute read errors.
pub fn filter_out<R: BufRead, W: Write>(
    large: R,
    large_path: &Path,
    exclude: &ExclusionSet,
    sink: &mut LineSink<W>,
) -> Result<FilterStats, ListError> {
    let mut stats = FilterStats::default();
    for entry in lines::read_entries(large) {
        let entry = entry.map_err(|e| ListError::io(large_path, e))?;
        if exclude.contains(&entry) {
            stats.removed_count += 1;
            tracing::debug!(url = %entry, "removed excluded entry");
        } else {
            sink.write_entry(&entry)?;
            stats.kept_count += 1;
        }
    }
    Ok(stats)
}

/// Writes `large` minus `small` to `output`.
///
/// Both inputs are checked before `output` is created, so a missing input
/// never leaves a partial file behind.
pub fn filter_file(large: &Path, small: &Path, output: &Path) -> Result<FilterStats, ListError> {
    lines::require_exists(large)?;
    lines::require_exists(small)?;

    let exclude = ExclusionSet::load(small)?;
    tracing::info!(
        small = %small.display(),
        entries = exclude.entry_count(),
        "loaded exclusion set"
    );

    let file = File::open(large).map_err(|e| ListError::io(large, e))?;
    let mut sink = LineSink::create(output)?;
    let stats = filter_out(BufReader::new(file), large, &exclude, &mut sink)?;
    sink.finish()?;

    tracing::info!(
        large = %large.display(),
        output = %output.display(),
        removed = stats.removed_count,
        kept = stats.kept_count,
        "filter finished"
    );
    Ok(stats)
}
