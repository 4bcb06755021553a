//! Domain deduplication: one representative raw entry per canonical key.
//!
//! Entries are grouped by [`normalize`]; when a key repeats, the
//! representative is chosen by [`prefer_candidate`]. Output order is the order
//! in which each key was first seen, independent of later replacements.

mod choose;
mod report;
mod table;

use std::io::Write;
use std::path::Path;

pub use choose::prefer_candidate;
pub use report::{Collision, DedupReport};
pub use table::{DedupTable, Offer};

use crate::canonical::normalize;
use crate::error::ListError;
use crate::lines::{self, LineSink};

/// Accumulates entries one at a time.
#[derive(Debug, Default)]
pub struct Deduplicator {
    table: DedupTable,
    total_count: usize,
    collisions: Vec<Collision>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one raw line. Blank lines are ignored and not counted.
    pub fn push(&mut self, line: &str) {
        let entry = line.trim();
        if entry.is_empty() {
            return;
        }
        self.total_count += 1;

        let key = normalize(entry);
        if let Offer::Occupied { current } = self.table.offer(key, entry) {
            let collision = if prefer_candidate(entry, current) {
                let discarded = std::mem::replace(current, entry.to_string());
                Collision {
                    discarded,
                    kept: entry.to_string(),
                }
            } else {
                Collision {
                    discarded: entry.to_string(),
                    kept: current.clone(),
                }
            };
            tracing::debug!(
                discarded = %collision.discarded,
                kept = %collision.kept,
                "duplicate canonical key"
            );
            self.collisions.push(collision);
        }
    }

    pub fn finish(self) -> DedupReport {
        let representatives = self.table.into_representatives();
        DedupReport {
            total_count: self.total_count,
            unique_count: representatives.len(),
            representatives,
            collisions: self.collisions,
        }
    }
}

/// Deduplicates an in-memory sequence of raw entries.
pub fn dedupe<I, S>(lines: I) -> DedupReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dedup = Deduplicator::new();
    for line in lines {
        dedup.push(line.as_ref());
    }
    dedup.finish()
}

/// Writes the representatives of `report` to `sink`, one per line.
pub fn write_representatives<W: Write>(
    report: &DedupReport,
    sink: &mut LineSink<W>,
) -> Result<(), ListError> {
    for entry in &report.representatives {
        sink.write_entry(entry)?;
    }
    Ok(())
}

/// Deduplicates the list at `input` into `output`.
///
/// Fails with [`ListError::NotFound`] before `output` is touched if `input`
/// is missing. The output is only created once the whole input has been read.
pub fn dedupe_file(input: &Path, output: &Path) -> Result<DedupReport, ListError> {
    lines::require_exists(input)?;

    let mut dedup = Deduplicator::new();
    for entry in lines::open_entries(input)? {
        let entry = entry.map_err(|e| ListError::io(input, e))?;
        dedup.push(&entry);
    }
    let report = dedup.finish();

    let mut sink = LineSink::create(output)?;
    write_representatives(&report, &mut sink)?;
    sink.finish()?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        total = report.total_count,
        unique = report.unique_count,
        "dedupe finished"
    );
    Ok(report)
}
