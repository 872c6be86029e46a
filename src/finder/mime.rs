//! MIME type detection
//!
//! Signature-based detection via `infer`, with fallbacks for the cases
//! it does not recognise (directories, empty files, plain text).
//! Text versus binary is decided by `content_inspector`.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// MIME type reported for directories
pub const DIRECTORY: &str = "directory";
/// MIME type reported for zero-length files
pub const EMPTY: &str = "inode/x-empty";
/// MIME type reported for unrecognised UTF-8 content
pub const TEXT_PLAIN: &str = "text/plain";
/// MIME type reported for unrecognised binary content
pub const OCTET_STREAM: &str = "application/octet-stream";

const SAMPLE_LEN: u64 = 8192;

/// Detect the MIME type of the file at `path`, following symlinks.
pub fn detect(path: &Path) -> io::Result<String> {
    let metadata = fs::metadata(path)?;
    if metadata.is_dir() {
        return Ok(DIRECTORY.to_string());
    }
    if metadata.len() == 0 {
        return Ok(EMPTY.to_string());
    }

    let mut sample = Vec::with_capacity(SAMPLE_LEN as usize);
    File::open(path)?.take(SAMPLE_LEN).read_to_end(&mut sample)?;

    if let Some(kind) = infer::get(&sample) {
        return Ok(kind.mime_type().to_string());
    }

    let mime = if content_inspector::inspect(&sample).is_text() {
        TEXT_PLAIN
    } else {
        OCTET_STREAM
    };
    Ok(mime.to_string())
}
