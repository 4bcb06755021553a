//! `sitelist pipeline` – remove, then dedupe the remainder.

use anyhow::{Context, Result};
use serde::Serialize;
use sitelist_core::filter::FilterStats;
use sitelist_core::pipeline::{self, PipelinePaths};

use super::dedupe::{print_dedup_report, DedupSummary};
use super::{print_json, Output};

#[derive(Debug, Serialize)]
struct PipelineSummary {
    filter: FilterStats,
    dedup: DedupSummary,
}

pub fn run_pipeline(paths: PipelinePaths, preview: usize, out: Output) -> Result<()> {
    let report = pipeline::run(&paths).context("pipeline")?;

    if out.json {
        let preview = if out.verbose { preview } else { 0 };
        return print_json(&PipelineSummary {
            filter: report.filter,
            dedup: DedupSummary::new(&report.dedup, preview),
        });
    }

    println!("=== Step 1: remove listed URLs ===");
    println!(
        "Removed {} URL(s), kept {} URL(s) -> {}",
        report.filter.removed_count,
        report.filter.kept_count,
        paths.filtered.display()
    );
    println!();
    println!("=== Step 2: dedupe domains ===");
    print_dedup_report(&report.dedup, &paths.output, preview, out.verbose);
    Ok(())
}
