use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::nr::shims::error::{Result, ToolError};
use crate::nr::shims::model::marker;

/// Longest line inspected for a marker. A file whose line runs past this
/// without a newline stops being scanned and counts as unmarked.
pub const MAX_LINE: usize = 64 * 1024;

/// Removes every shim previously generated for `profile` from `shim_dir`.
///
/// All files are scanned before anything is deleted, so an unreadable entry
/// aborts the run with the directory untouched. Returns the removed paths.
#[instrument(level = "info", skip_all, fields(dir = %shim_dir.display(), profile = %profile))]
pub fn clean_generated(shim_dir: &Path, profile: &str) -> Result<Vec<PathBuf>> {
    let marked = find_generated(shim_dir, profile)?;
    info!(count = marked.len(), "removing generated shims");
    remove_all(&marked)?;
    Ok(marked)
}

/// Deletes `paths` in order, stopping at the first failure. Paths after the
/// failing one are left on disk.
fn remove_all(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        fs::remove_file(path).map_err(|source| ToolError::FileDelete {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "removed");
    }
    Ok(())
}

/// Lists the files directly inside `shim_dir` that carry `profile`'s marker.
///
/// Only regular files and symlinks are opened; directories, sockets and FIFOs
/// are passed over. A symlink pointing at a FIFO still blocks on open.
pub fn find_generated(shim_dir: &Path, profile: &str) -> Result<Vec<PathBuf>> {
    let dir_error = |source: std::io::Error| ToolError::DirectoryRead {
        path: shim_dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(shim_dir)
        .map_err(dir_error)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(dir_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    let marker = marker(profile);
    let mut marked = Vec::new();
    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(dir_error)?;
        if !(file_type.is_file() || file_type.is_symlink()) {
            continue;
        }

        let file = File::open(&path).map_err(|source| ToolError::FileOpen {
            path: path.clone(),
            source,
        })?;
        if has_marker(BufReader::new(file), marker.as_bytes(), &path) {
            marked.push(path);
        }
    }

    Ok(marked)
}

/// Scans `reader` line by line and stops at the first line starting with
/// `marker`. Lines are compared as bytes since `~/bin` also holds binaries,
/// and at most [`MAX_LINE`] bytes of a line are buffered.
fn has_marker(mut reader: impl BufRead, marker: &[u8], path: &Path) -> bool {
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.by_ref().take(MAX_LINE as u64).read_until(b'\n', &mut line) {
            Ok(0) => return false,
            Ok(_) if line.starts_with(marker) => return true,
            Ok(read) if read == MAX_LINE && line.last() != Some(&b'\n') => {
                debug!(path = %path.display(), "line too long, stopped scanning");
                return false;
            }
            Ok(_) => {}
            Err(error) => {
                warn!(path = %path.display(), %error, "stopped scanning unreadable file");
                return false;
            }
        }
    }
}
