//! Block rendering for the aggregated output file

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Header layout of an aggregated block: delimiter width and path label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStyle {
    pub width: usize,
    pub label: &'static str,
}

impl BlockStyle {
    /// Style used when aggregating by exclusion patterns.
    pub const FILE_PATH: BlockStyle = BlockStyle {
        width: 80,
        label: "FILE PATH",
    };

    /// Style used when aggregating by content match.
    pub const SOURCE_PATH: BlockStyle = BlockStyle {
        width: 50,
        label: "SOURCE PATH",
    };

    /// The delimiter line, without its newline.
    pub fn delimiter(&self) -> String {
        "=".repeat(self.width)
    }

    /// Render the header that precedes a file's content.
    ///
    /// The header starts with a newline so consecutive blocks are separated
    /// by exactly one blank line's worth of spacing.
    pub fn render_header(&self, path: &Path) -> String {
        let delimiter = self.delimiter();
        format!(
            "\n{delimiter}\n{}: {}\n{delimiter}\n\n",
            self.label,
            path.display()
        )
    }
}

/// Writes blocks to an underlying sink in a fixed style.
pub struct BlockWriter<W: Write> {
    inner: W,
    style: BlockStyle,
}

impl<W: Write> BlockWriter<W> {
    pub fn new(inner: W, style: BlockStyle) -> Self {
        Self { inner, style }
    }

    /// Append one block: header, verbatim content, trailing newline.
    pub fn write_block(&mut self, path: &Path, content: &str) -> io::Result<()> {
        self.inner
            .write_all(self.style.render_header(path).as_bytes())?;
        self.inner.write_all(content.as_bytes())?;
        self.inner.write_all(b"\n")
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Block writer bound to an output file on disk.
pub struct OutputFile {
    path: PathBuf,
    writer: BlockWriter<BufWriter<File>>,
}

impl OutputFile {
    /// Create (or truncate) the output file.
    pub fn create(path: &Path, style: BlockStyle) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BlockWriter::new(BufWriter::new(file), style),
        })
    }

    pub fn write_block(&mut self, path: &Path, content: &str) -> Result<()> {
        self.writer
            .write_block(path, content)
            .map_err(|source| self.write_error(source))
    }

    /// Flush buffered blocks and close the file.
    pub fn finish(self) -> Result<()> {
        let OutputFile { path, writer } = self;
        writer
            .into_inner()
            .map_err(|source| Error::OutputWrite { path, source })?;
        Ok(())
    }

    fn write_error(&self, source: io::Error) -> Error {
        Error::OutputWrite {
            path: self.path.clone(),
            source,
        }
    }
}
