//! Binary content sniffing

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected when sniffing for binary content.
pub const SNIFF_LEN: usize = 1024;

/// Check whether a file looks binary.
///
/// A file is binary if a null byte occurs within its first [`SNIFF_LEN`]
/// bytes. Files that cannot be opened or read are also reported as binary so
/// callers simply skip them. Binary files without a null byte in the prefix
/// are not detected.
pub fn is_binary(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return true,
    };

    match read_prefix(&mut file) {
        Ok(prefix) => prefix.contains(&0),
        Err(_) => true,
    }
}

/// Read up to `SNIFF_LEN` bytes, tolerating short reads.
fn read_prefix<R: Read>(reader: &mut R) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(SNIFF_LEN);
    reader.take(SNIFF_LEN as u64).read_to_end(&mut buf)?;
    Ok(buf)
}
