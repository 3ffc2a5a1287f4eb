//! Eligibility policies deciding which discovered files are aggregated

use std::io;
use std::path::Path;

use crate::binary::is_binary;
use crate::file_utils::read_text_lossy;
use crate::output::BlockStyle;

use super::config::MatchMode;
use super::exclude::ExclusionSet;

/// Why a discovered file was not aggregated.
#[derive(Debug)]
pub enum SkipReason {
    /// Name or path matched an exclusion pattern.
    Excluded,
    /// Null byte in the leading bytes, or the file could not be sniffed.
    Binary,
    /// The file could not be read.
    Unreadable(io::Error),
    /// Content did not contain the required terms.
    Unmatched,
}

/// Outcome of evaluating one file.
#[derive(Debug)]
pub enum Verdict {
    /// Aggregate the file with this decoded content.
    Include(String),
    Skip(SkipReason),
}

/// Rule the walker consults for every candidate file and subdirectory.
pub trait EligibilityPolicy {
    /// Header style for blocks produced under this policy.
    fn style(&self) -> BlockStyle;

    /// Whether to descend into a subdirectory. Refused directories are
    /// pruned along with everything beneath them.
    fn allows_dir(&self, _name: &str, _path: &Path) -> bool {
        true
    }

    /// Decide on a file, reading its content if it is to be included.
    fn evaluate(&self, name: &str, path: &Path) -> Verdict;
}

/// Aggregate every text file not matching an exclusion pattern.
#[derive(Debug, Clone, Default)]
pub struct ExclusionPolicy {
    exclusions: ExclusionSet,
}

impl ExclusionPolicy {
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }
}

impl EligibilityPolicy for ExclusionPolicy {
    fn style(&self) -> BlockStyle {
        BlockStyle::FILE_PATH
    }

    fn allows_dir(&self, name: &str, path: &Path) -> bool {
        !self.exclusions.is_excluded(name, path)
    }

    fn evaluate(&self, name: &str, path: &Path) -> Verdict {
        if self.exclusions.is_excluded(name, path) {
            return Verdict::Skip(SkipReason::Excluded);
        }
        if is_binary(path) {
            return Verdict::Skip(SkipReason::Binary);
        }
        match read_text_lossy(path) {
            Ok(content) => Verdict::Include(content),
            Err(e) => Verdict::Skip(SkipReason::Unreadable(e)),
        }
    }
}

/// Aggregate files whose text contains the search terms.
#[derive(Debug, Clone)]
pub struct ContentMatchPolicy {
    terms: Vec<String>,
    mode: MatchMode,
}

impl ContentMatchPolicy {
    pub fn new(terms: Vec<String>, mode: MatchMode) -> Self {
        Self { terms, mode }
    }
}

impl EligibilityPolicy for ContentMatchPolicy {
    fn style(&self) -> BlockStyle {
        BlockStyle::SOURCE_PATH
    }

    fn evaluate(&self, _name: &str, path: &Path) -> Verdict {
        let content = match read_text_lossy(path) {
            Ok(c) => c,
            Err(e) => return Verdict::Skip(SkipReason::Unreadable(e)),
        };
        if self.mode.matches(&content, &self.terms) {
            Verdict::Include(content)
        } else {
            Verdict::Skip(SkipReason::Unmatched)
        }
    }
}
