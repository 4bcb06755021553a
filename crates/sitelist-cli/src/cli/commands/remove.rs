//! `sitelist remove -l <large> -s <small> -o <output>` – exact-match set difference.

use anyhow::{Context, Result};
use sitelist_core::filter;
use std::path::Path;

use super::{print_json, Output};

pub fn run_remove(large: &Path, small: &Path, output: &Path, out: Output) -> Result<()> {
    let stats = filter::filter_file(large, small, output)
        .with_context(|| format!("remove {} from {}", small.display(), large.display()))?;

    if out.json {
        return print_json(&stats);
    }
    println!("Done:");
    println!("  Removed URLs: {}", stats.removed_count);
    println!("  Kept URLs:    {}", stats.kept_count);
    println!("  Saved to:     {}", output.display());
    Ok(())
}
