//! CLI for sitelist.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sitelist_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_dedupe, run_normalize, run_pipeline, run_remove, Output};

/// Top-level CLI for sitelist.
#[derive(Debug, Parser)]
#[command(name = "sitelist")]
#[command(about = "sitelist: filter URL lists and deduplicate domains by site", long_about = None)]
pub struct Cli {
    /// Print per-entry details (collision examples for dedupe).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the report as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Remove every URL listed in the small file from the large file.
    Remove {
        /// Master URL list.
        #[arg(short, long = "large-file", value_name = "PATH")]
        large: PathBuf,

        /// URLs to remove (exact match after trimming).
        #[arg(short, long = "small-file", value_name = "PATH")]
        small: PathBuf,

        /// Where to write the remaining URLs.
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },

    /// Keep one entry per site from a domain or URL list.
    Dedupe {
        /// Domain or URL list.
        #[arg(short, long, value_name = "PATH")]
        input: PathBuf,

        /// Where to write the deduplicated list.
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },

    /// Remove, then dedupe. Paths default to the [pipeline] config section.
    Pipeline {
        #[arg(long, value_name = "PATH")]
        large: Option<PathBuf>,

        #[arg(long, value_name = "PATH")]
        small: Option<PathBuf>,

        /// Intermediate output of the remove step.
        #[arg(long, value_name = "PATH")]
        filtered: Option<PathBuf>,

        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print the canonical site key of each entry.
    Normalize {
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// Generate a shell completion script.
    Completions {
        shell: Shell,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().context("load config")?;
        tracing::debug!("loaded config: {:?}", cfg);

        let out = Output {
            verbose: cli.verbose,
            json: cli.json,
        };

        match cli.command {
            CliCommand::Remove {
                large,
                small,
                output,
            } => run_remove(&large, &small, &output, out)?,
            CliCommand::Dedupe { input, output } => {
                run_dedupe(&input, &output, cfg.collision_preview, out)?
            }
            CliCommand::Pipeline {
                large,
                small,
                filtered,
                output,
            } => {
                let mut paths = cfg.pipeline_or_default();
                if let Some(p) = large {
                    paths.large = p;
                }
                if let Some(p) = small {
                    paths.small = p;
                }
                if let Some(p) = filtered {
                    paths.filtered = p;
                }
                if let Some(p) = output {
                    paths.output = p;
                }
                run_pipeline(paths.into(), cfg.collision_preview, out)?;
            }
            CliCommand::Normalize { entries } => run_normalize(&entries, out)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
