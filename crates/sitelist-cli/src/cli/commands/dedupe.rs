//! `sitelist dedupe -i <input> -o <output>` – one entry per site.

use anyhow::{Context, Result};
use serde::Serialize;
use sitelist_core::dedup::{self, DedupReport};
use std::path::Path;

use super::{print_json, Output};

/// JSON view of a dedupe run; representatives live in the output file.
#[derive(Debug, Serialize)]
pub(super) struct DedupSummary {
    total_count: usize,
    unique_count: usize,
    duplicates_removed: usize,
    collisions: Vec<String>,
}

impl DedupSummary {
    pub(super) fn new(report: &DedupReport, preview: usize) -> Self {
        Self {
            total_count: report.total_count,
            unique_count: report.unique_count,
            duplicates_removed: report.duplicates_removed(),
            collisions: report.collision_preview(preview),
        }
    }
}

pub fn run_dedupe(input: &Path, output: &Path, preview: usize, out: Output) -> Result<()> {
    let report = dedup::dedupe_file(input, output)
        .with_context(|| format!("dedupe {}", input.display()))?;

    if out.json {
        let preview = if out.verbose { preview } else { 0 };
        return print_json(&DedupSummary::new(&report, preview));
    }
    print_dedup_report(&report, output, preview, out.verbose);
    Ok(())
}

pub(super) fn print_dedup_report(
    report: &DedupReport,
    output: &Path,
    preview: usize,
    verbose: bool,
) {
    println!("Done:");
    println!("  Input domains:      {}", report.total_count);
    println!("  Unique sites:       {}", report.unique_count);
    println!("  Duplicates removed: {}", report.duplicates_removed());
    println!("  Saved to:           {}", output.display());

    if verbose && !report.collisions.is_empty() && preview > 0 {
        println!();
        println!("First {} collisions:", preview.min(report.collisions.len()));
        for (i, example) in report.collision_preview(preview).iter().enumerate() {
            println!("{}. {}", i + 1, example);
        }
    }
}
