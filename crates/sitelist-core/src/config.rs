use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default file names for `sitelist pipeline` (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Master URL list.
    pub large: PathBuf,
    /// Entries to remove from the master list.
    pub small: PathBuf,
    /// Intermediate output of the filter step.
    pub filtered: PathBuf,
    /// Final deduplicated output.
    pub output: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            large: PathBuf::from("urls_10000.txt"),
            small: PathBuf::from("urls_100.txt"),
            filtered: PathBuf::from("urls_filtered.txt"),
            output: PathBuf::from("urls_final.txt"),
        }
    }
}

/// Global configuration loaded from `~/.config/sitelist/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitelistConfig {
    /// How many collisions `dedupe --verbose` prints.
    pub collision_preview: usize,
    /// Optional pipeline defaults; if missing, built-in defaults are used.
    #[serde(default)]
    pub pipeline: Option<PipelineConfig>,
}

impl Default for SitelistConfig {
    fn default() -> Self {
        Self {
            collision_preview: 10,
            pipeline: None,
        }
    }
}

impl SitelistConfig {
    pub fn pipeline_or_default(&self) -> PipelineConfig {
        self.pipeline.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitelist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SitelistConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SitelistConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SitelistConfig = toml::from_str(&data)?;
    Ok(cfg)
}
