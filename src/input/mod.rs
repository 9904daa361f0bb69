use crate::error::AppError;
use std::io::Read;
use std::path::Path;

pub mod clipboard;

pub use clipboard::{ClipboardProvider, MemoryClipboard, SystemClipboard};

/// Reads a whole address list from a file.
///
/// An empty file is not an error: it simply produces no results.
pub fn load_file(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a whole address list from any reader (stdin in headless mode).
pub fn load_reader<R: Read>(mut reader: R) -> Result<String, AppError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}
