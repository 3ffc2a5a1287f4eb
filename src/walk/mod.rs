//! Source traversal and aggregation
//!
//! One walker, [`Aggregator`], handles both ways of selecting files. What
//! differs is the [`EligibilityPolicy`] it consults:
//!
//! - [`ExclusionPolicy`]: skip files and prune directories matching glob
//!   patterns, skip binary files
//! - [`ContentMatchPolicy`]: keep only files containing the search terms

mod config;
mod exclude;
mod policy;
mod walker;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::output::RunSummary;

pub use config::{MatchMode, RunConfig, Selection};
pub use exclude::{ExclusionSet, should_skip};
pub use policy::{ContentMatchPolicy, EligibilityPolicy, ExclusionPolicy, SkipReason, Verdict};
pub use walker::Aggregator;

/// Execute a configured run.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    match &config.selection {
        Selection::Exclude { patterns } => {
            let policy = ExclusionPolicy::new(ExclusionSet::new(patterns));
            Aggregator::new(policy).run(&config.sources, &config.output)
        }
        Selection::Match { terms, mode } => {
            let policy = ContentMatchPolicy::new(terms.clone(), *mode);
            let summary = Aggregator::new(policy).run(&config.sources, &config.output)?;
            info!(
                "{} files matched into {}",
                summary.included,
                config.output.display()
            );
            Ok(summary)
        }
    }
}

/// Concatenate files and directory trees, skipping excluded and binary files.
///
/// A single path can be passed as `[path]` or `Some(path)`.
pub fn concatenate_paths<I, S>(sources: I, output: &Path, patterns: &[String]) -> Result<RunSummary>
where
    I: IntoIterator<Item = S>,
    S: Into<PathBuf>,
{
    run(&RunConfig::excluding(sources, output, patterns.to_vec()))
}

/// Concatenate files under `directory` that contain every search term.
pub fn concatenate_matching(
    directory: &Path,
    search_terms: &[String],
    output: &Path,
) -> Result<RunSummary> {
    run(&RunConfig::matching(directory, search_terms.to_vec(), output))
}
