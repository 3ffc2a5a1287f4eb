//! Configuration types for aggregation runs

use std::path::PathBuf;

/// How search terms combine when filtering by content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Every term must occur.
    #[default]
    All,
    /// At least one term must occur.
    Any,
}

impl MatchMode {
    /// Check `content` for the literal, case-sensitive `terms`.
    pub fn matches<S: AsRef<str>>(self, content: &str, terms: &[S]) -> bool {
        match self {
            MatchMode::All => terms.iter().all(|t| content.contains(t.as_ref())),
            MatchMode::Any => terms.iter().any(|t| content.contains(t.as_ref())),
        }
    }
}

/// Rule deciding which discovered files are aggregated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Skip files and prune directories matching any of these globs;
    /// binary files are skipped too.
    Exclude { patterns: Vec<String> },
    /// Keep only files whose text contains the search terms.
    Match { terms: Vec<String>, mode: MatchMode },
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Exclude {
            patterns: Vec::new(),
        }
    }
}

/// Everything one aggregation run needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Files and/or directories, processed in order.
    pub sources: Vec<PathBuf>,
    /// Destination file, truncated at the start of the run.
    pub output: PathBuf,
    pub selection: Selection,
}

impl RunConfig {
    /// Aggregate `sources`, skipping anything matching `patterns`.
    pub fn excluding<I, P>(sources: I, output: impl Into<PathBuf>, patterns: Vec<String>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            output: output.into(),
            selection: Selection::Exclude { patterns },
        }
    }

    /// Aggregate files under `directory` containing all of `terms`.
    pub fn matching(
        directory: impl Into<PathBuf>,
        terms: Vec<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sources: vec![directory.into()],
            output: output.into(),
            selection: Selection::Match {
                terms,
                mode: MatchMode::All,
            },
        }
    }

    /// Switch a content-match run to a different term mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        if let Selection::Match { mode: ref mut m, .. } = self.selection {
            *m = mode;
        }
        self
    }
}
