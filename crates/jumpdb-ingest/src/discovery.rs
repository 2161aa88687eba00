//! Input discovery: dataset folders under a root and CSV files inside them.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists the immediate subdirectories of `root`, sorted by name.
pub fn list_group_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = list_entries(root, Path::is_dir)?;
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = list_entries(dir, |path| {
        // Check for .csv extension (case-insensitive)
        path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    })?;
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn list_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if keep(&path) {
            paths.push(path);
        }
    }
    Ok(paths)
}
