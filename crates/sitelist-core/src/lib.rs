pub mod config;
pub mod logging;

pub mod canonical;
pub mod dedup;
pub mod error;
pub mod filter;
pub mod lines;
pub mod pipeline;

pub use canonical::{normalize, CanonicalKey};
pub use dedup::{dedupe, dedupe_file, Collision, DedupReport};
pub use error::ListError;
pub use filter::{filter_file, filter_out, ExclusionSet, FilterStats};
