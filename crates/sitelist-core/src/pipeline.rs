//! Two-step run: filter the master list, then deduplicate what is left.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::PipelineConfig;
use crate::dedup::{self, DedupReport};
use crate::error::ListError;
use crate::filter::{self, FilterStats};
use crate::lines;

/// Files consumed and produced by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePaths {
    pub large: PathBuf,
    pub small: PathBuf,
    pub filtered: PathBuf,
    pub output: PathBuf,
}

impl Default for PipelinePaths {
    fn default() -> Self {
        PipelineConfig::default().into()
    }
}

impl From<PipelineConfig> for PipelinePaths {
    fn from(cfg: PipelineConfig) -> Self {
        Self {
            large: cfg.large,
            small: cfg.small,
            filtered: cfg.filtered,
            output: cfg.output,
        }
    }
}

impl PipelinePaths {
    /// Resolves relative paths against `base`.
    pub fn relative_to(self, base: &Path) -> Self {
        let join = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        Self {
            large: join(self.large),
            small: join(self.small),
            filtered: join(self.filtered),
            output: join(self.output),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub filter: FilterStats,
    pub dedup: DedupReport,
}

/// Runs the filter into `paths.filtered`, then dedupes it into `paths.output`.
///
/// Both inputs are checked up front so that nothing is written when either is
/// missing.
pub fn run(paths: &PipelinePaths) -> Result<PipelineReport, ListError> {
    lines::require_exists(&paths.large)?;
    lines::require_exists(&paths.small)?;

    tracing::info!(
        large = %paths.large.display(),
        small = %paths.small.display(),
        "pipeline step 1: filter"
    );
    let filter = filter::filter_file(&paths.large, &paths.small, &paths.filtered)?;

    tracing::info!(
        filtered = %paths.filtered.display(),
        "pipeline step 2: dedupe"
    );
    let dedup = dedup::dedupe_file(&paths.filtered, &paths.output)?;

    Ok(PipelineReport { filter, dedup })
}
