//! Reads documents from disk and hands decoded text to the comparison core.

use log::debug;
use std::fs;
use std::path::Path;

use crate::error::AcquireError;

/// Read `path` as UTF-8 text, dropping a leading byte order mark.
pub fn read_document(path: &Path) -> Result<String, AcquireError> {
    let bytes = fs::read(path).map_err(|source| AcquireError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| AcquireError::NotUtf8 {
        path: path.to_path_buf(),
    })?;

    debug!("Read {} bytes from {}", text.len(), path.display());

    match text.strip_prefix('\u{FEFF}') {
        Some(rest) => Ok(rest.to_string()),
        None => Ok(text),
    }
}
