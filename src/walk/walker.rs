//! Aggregator - walks source paths and writes eligible files as blocks

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::file_utils::{file_name_str, resolve_identity};
use crate::output::{OutputFile, RunSummary};

use super::policy::{EligibilityPolicy, SkipReason, Verdict};

/// State owned by a single run: the open output and its counters.
struct Pass {
    output: OutputFile,
    output_identity: PathBuf,
    summary: RunSummary,
}

/// Depth-first walker that feeds every discovered file through an
/// [`EligibilityPolicy`] and appends the accepted ones to the output.
pub struct Aggregator<P: EligibilityPolicy> {
    policy: P,
}

impl<P: EligibilityPolicy> Aggregator<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Aggregate `sources` into `output`.
    ///
    /// The output file is truncated first. Only failures to open or write the
    /// output abort the run; everything else is logged and skipped.
    pub fn run(&self, sources: &[PathBuf], output: &Path) -> Result<RunSummary> {
        let output_file = OutputFile::create(output, self.policy.style())?;
        // Resolve after creation so the path exists and symlinks are followed
        let mut pass = Pass {
            output: output_file,
            output_identity: resolve_identity(output),
            summary: RunSummary::new(sources.len(), output),
        };

        for source in sources {
            self.visit_source(source, &mut pass)?;
        }

        let Pass {
            output: output_file,
            summary,
            ..
        } = pass;
        output_file.finish()?;

        info!(
            "Concatenated {} files from {} source paths into {} ({} skipped)",
            summary.included,
            summary.sources,
            output.display(),
            summary.skipped_files()
        );
        Ok(summary)
    }

    fn visit_source(&self, source: &Path, pass: &mut Pass) -> Result<()> {
        // Follows symlinks, so a link to a file or directory counts as one
        let meta = match std::fs::metadata(source) {
            Ok(m) => m,
            Err(_) => {
                warn!("Source path does not exist, skipping: {}", source.display());
                pass.summary.missing_sources += 1;
                return Ok(());
            }
        };

        if meta.is_file() {
            self.process_file(source, pass)
        } else if meta.is_dir() {
            info!("Processing directory: {}", source.display());
            self.walk_dir(source, pass)
        } else {
            warn!(
                "Source path is neither a file nor a directory, skipping: {}",
                source.display()
            );
            Ok(())
        }
    }

    /// Evaluate one file and append it to the output if eligible.
    ///
    /// Returns an error only when the output itself cannot be written.
    fn process_file(&self, path: &Path, pass: &mut Pass) -> Result<()> {
        if resolve_identity(path) == pass.output_identity {
            debug!("Skipping output file: {}", path.display());
            return Ok(());
        }

        let name = file_name_str(path);
        match self.policy.evaluate(&name, path) {
            Verdict::Include(content) => {
                pass.output.write_block(path, &content)?;
                pass.summary.included += 1;
                info!("Added: {}", path.display());
            }
            Verdict::Skip(SkipReason::Excluded) => {
                info!("Skipping excluded file: {}", path.display());
                pass.summary.skipped_excluded_files += 1;
            }
            Verdict::Skip(SkipReason::Binary) => {
                info!("Skipping binary file: {}", path.display());
                pass.summary.skipped_binary += 1;
            }
            Verdict::Skip(SkipReason::Unreadable(e)) => {
                warn!("Could not read {}: {}", path.display(), e);
                pass.summary.skipped_unreadable += 1;
            }
            Verdict::Skip(SkipReason::Unmatched) => {
                debug!("No match: {}", path.display());
                pass.summary.skipped_unmatched += 1;
            }
        }
        Ok(())
    }

    fn walk_dir(&self, dir: &Path, pass: &mut Pass) -> Result<()> {
        let entries = match read_sorted_entries(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!("Could not read directory {}: {}", dir.display(), e);
                return Ok(());
            }
        };

        let (files, subdirs) = partition_entries(entries);

        // Decide the full descent list before recursing into any of it
        let descend: Vec<PathBuf> = subdirs
            .into_iter()
            .filter(|subdir| {
                let name = file_name_str(subdir);
                if self.policy.allows_dir(&name, subdir) {
                    true
                } else {
                    info!("Skipping excluded directory: {}", subdir.display());
                    pass.summary.skipped_excluded_dirs += 1;
                    false
                }
            })
            .collect();

        for file in &files {
            self.process_file(file, pass)?;
        }

        for subdir in &descend {
            debug!("Entering directory: {}", subdir.display());
            self.walk_dir(subdir, pass)?;
        }

        Ok(())
    }
}

/// Read a directory's entries sorted by file name.
fn read_sorted_entries(dir: &Path) -> std::io::Result<Vec<DirEntry>> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());
    Ok(entries)
}

/// Split entries into files and directories to descend into.
///
/// Symlinks to files count as files; symlinked directories are not followed.
/// Other entry kinds (sockets, fifos, devices) are ignored.
fn partition_entries(entries: Vec<DirEntry>) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut files = Vec::new();
    let mut subdirs = Vec::new();

    for entry in entries {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                warn!("Could not stat {}: {}", path.display(), e);
                continue;
            }
        };

        if file_type.is_dir() {
            subdirs.push(path);
        } else if file_type.is_file() {
            files.push(path);
        } else if file_type.is_symlink() {
            match std::fs::metadata(&path) {
                Ok(meta) if meta.is_file() => files.push(path),
                Ok(meta) if meta.is_dir() => {
                    debug!("Not following symlinked directory: {}", path.display());
                }
                Ok(_) => debug!("Ignoring special file: {}", path.display()),
                // Dangling link: let the policy decide what to report
                Err(_) => files.push(path),
            }
        } else {
            debug!("Ignoring special file: {}", path.display());
        }
    }

    (files, subdirs)
}
