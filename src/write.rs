//! Atomic replacement of a file's contents with reprinted text.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Path has no parent directory: {0}")]
    NoParent(PathBuf),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of writing reprinted text back to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "WriteResult should be checked for written/unchanged"]
pub enum WriteResult {
    Written { file: PathBuf, bytes: usize },
    /// The file already held exactly this text.
    Unchanged { file: PathBuf },
}

/// Replace the contents of `path` with `content`.
///
/// Skips the write when nothing changed. Otherwise writes a tempfile in the
/// same directory, fsyncs it, renames it over `path`, and bumps the mtime
/// so incremental builds notice the change.
pub fn write_reprinted(path: &Path, content: &str) -> Result<WriteResult, WriteError> {
    if fs::read(path)? == content.as_bytes() {
        return Ok(WriteResult::Unchanged {
            file: path.to_path_buf(),
        });
    }

    atomic_write(path, content.as_bytes())?;

    let now = filetime::FileTime::now();
    filetime::set_file_mtime(path, now)?;

    Ok(WriteResult::Written {
        file: path.to_path_buf(),
        bytes: content.len(),
    })
}

/// Atomic file write: tempfile + fsync + rename.
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), WriteError> {
    // Same directory keeps the rename on one filesystem.
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => return Err(WriteError::NoParent(path.to_path_buf())),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
