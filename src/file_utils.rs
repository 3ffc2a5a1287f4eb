//! Shared file reading and path utilities
//!
//! This module provides the file I/O patterns shared by both eligibility
//! policies and the walker: lossy text reading and path identity checks.

use std::io;
use std::path::{Path, PathBuf};

/// Read a whole file as text.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD instead of failing, so
/// the only errors returned are genuine I/O failures (missing file,
/// permission denied, read error).
pub fn read_text_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Resolve a path to a stable identity for comparison.
///
/// Symlinks and `..` components are resolved when the path exists. When it
/// cannot be canonicalized the absolute form is used instead.
pub fn resolve_identity(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Get the final component of a path as a string, or an empty string.
pub fn file_name_str(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
