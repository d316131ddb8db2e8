//! Atomic I/O operations for the managed file
//!
//! All access is whole-file: read everything, write everything. There is
//! no coordination between independent processes editing the same file;
//! concurrent invocations race last-writer-wins.

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Read the entire file as text.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    fs::read_to_string(&native).map_err(|e| Error::io(&native, e))
}

/// Write content atomically, replacing the file contents.
///
/// Uses write-to-temp-then-rename in the target directory so a reader
/// never observes a partially written file. The temp file is held under
/// an exclusive advisory lock for the duration of the write.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native = path.to_native();

    // Ensure parent directory exists
    if let Some(parent) = native.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file in the same directory, so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native.clone(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: native.clone(),
    })?;

    tracing::debug!(path = %path, bytes = content.len(), "replacing file via rename");

    fs::rename(&temp_path, &native).map_err(|e| Error::io(&native, e))?;

    Ok(())
}

/// Verify the file exists and is openable for both read and write.
///
/// Opening for write does not truncate; this is a probe only.
pub fn check_read_write(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    OpenOptions::new()
        .read(true)
        .open(&native)
        .map_err(|e| Error::io(&native, e))?;
    OpenOptions::new()
        .write(true)
        .open(&native)
        .map_err(|e| Error::io(&native, e))?;
    Ok(())
}
