//! File system side of emission.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::Path;

use super::GenerateError;

pub(crate) fn create_dirs(dir: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(dir).map_err(|source| GenerateError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `bytes` to a file that must not exist yet.
pub(crate) fn write_new(path: &Path, bytes: &[u8]) -> Result<(), GenerateError> {
    let io_err = |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote class file");
    Ok(())
}
