//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

use crate::errors::{io_write_error, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sibling path the content is staged in before the rename
pub fn temp_path_for(target_path: &Path) -> PathBuf {
    target_path.with_extension("tmp")
}

/// Atomically replace `target_path` with `content`
///
/// The temp file is flushed to disk before the rename, so after a crash the
/// target holds either the old or the new content.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_write_error("create_store_dir", e))?;
    }

    let temp_path = temp_path_for(target_path);

    let mut file = File::create(&temp_path).map_err(|e| io_write_error("write_store_temp", e))?;
    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| io_write_error("write_store_temp", e))?;

    fs::rename(&temp_path, target_path).map_err(|e| io_write_error("rename_store_temp", e))?;

    Ok(())
}
