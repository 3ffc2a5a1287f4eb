//! Error type for aggregation runs.
//!
//! Only failures of the output file abort a run. Per-file problems are
//! logged and absorbed by the walker.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors surfaced to the caller of a run.
#[derive(Error, Debug)]
pub enum Error {
    /// The output file could not be created or truncated.
    #[error("cannot open output file {}: {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the output file failed part-way through.
    #[error("error writing output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
