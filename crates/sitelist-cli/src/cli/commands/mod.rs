//! CLI command handlers, one file per subcommand.

mod completions;
mod dedupe;
mod normalize;
mod pipeline;
mod remove;

pub use completions::run_completions;
pub use dedupe::run_dedupe;
pub use normalize::run_normalize;
pub use pipeline::run_pipeline;
pub use remove::run_remove;

/// Output switches shared by all report-printing commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub verbose: bool,
    pub json: bool,
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
