//! Run summary reporting

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Counters collected over one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of source paths the run was given.
    pub sources: usize,
    pub output: PathBuf,
    /// Files written to the output as blocks.
    pub included: usize,
    pub skipped_excluded_files: usize,
    pub skipped_excluded_dirs: usize,
    pub skipped_binary: usize,
    pub skipped_unreadable: usize,
    /// Files read but rejected by the content filter.
    pub skipped_unmatched: usize,
    pub missing_sources: usize,
}

impl RunSummary {
    pub fn new(sources: usize, output: &Path) -> Self {
        Self {
            sources,
            output: output.to_path_buf(),
            ..Default::default()
        }
    }

    /// Total files that were discovered but not written.
    pub fn skipped_files(&self) -> usize {
        self.skipped_excluded_files
            + self.skipped_binary
            + self.skipped_unreadable
            + self.skipped_unmatched
    }

    /// One-line human readable summary.
    pub fn render_line(&self) -> String {
        let noun = if self.sources == 1 { "path" } else { "paths" };
        format!(
            "Done. {} files concatenated into '{}' from {} source {}.",
            self.included,
            self.output.display(),
            self.sources,
            noun
        )
    }
}

/// Print the summary line to stdout.
pub fn print_summary(summary: &RunSummary) -> io::Result<()> {
    println!("{}", summary.render_line());
    Ok(())
}

/// Print the summary as pretty-printed JSON to stdout.
pub fn print_summary_json(summary: &RunSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_plural() {
        let mut summary = RunSummary::new(2, Path::new("out.txt"));
        summary.included = 5;
        assert_eq!(
            summary.render_line(),
            "Done. 5 files concatenated into 'out.txt' from 2 source paths."
        );
    }

    #[test]
    fn test_render_line_single_source() {
        let summary = RunSummary::new(1, Path::new("bundle.txt"));
        assert!(summary.render_line().ends_with("from 1 source path."));
    }

    #[test]
    fn test_skipped_files_excludes_dirs_and_missing() {
        let summary = RunSummary {
            skipped_excluded_files: 1,
            skipped_excluded_dirs: 4,
            skipped_binary: 2,
            skipped_unreadable: 3,
            skipped_unmatched: 5,
            missing_sources: 7,
            ..RunSummary::new(1, Path::new("o"))
        };
        assert_eq!(summary.skipped_files(), 11);
    }

    #[test]
    fn test_json_field_names() {
        let mut summary = RunSummary::new(1, Path::new("out.txt"));
        summary.included = 3;
        summary.skipped_binary = 1;
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["sources"], 1);
        assert_eq!(value["output"], "out.txt");
        assert_eq!(value["included"], 3);
        assert_eq!(value["skipped_binary"], 1);
        assert_eq!(value["skipped_excluded_dirs"], 0);
        assert_eq!(value["missing_sources"], 0);
    }
}
