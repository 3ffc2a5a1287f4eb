//! Sheaf - bundle a tree of text files into one annotated document

pub mod binary;
pub mod error;
pub mod file_utils;
pub mod output;
pub mod walk;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use binary::is_binary;
pub use error::{Error, Result};
pub use output::{BlockStyle, RunSummary, print_summary, print_summary_json};
pub use walk::{
    Aggregator, ContentMatchPolicy, EligibilityPolicy, ExclusionPolicy, ExclusionSet, MatchMode,
    RunConfig, Selection, concatenate_matching, concatenate_paths, run, should_skip,
};
