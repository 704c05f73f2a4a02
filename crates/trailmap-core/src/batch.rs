//! Directory scanning for batch conversion.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConvertError;
use crate::Result;

/// List the YAML files directly inside `dir`.
///
/// Matches plain files whose name ends in `.yaml` or `.yml`
/// (case-insensitive); subdirectories are not descended into. Results are
/// sorted by name so batch runs report files in a stable order.
pub fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ConvertError::DirectoryMissing {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|e| ConvertError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConvertError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && has_yaml_suffix(&path) {
            files.push(path);
        }
    }
    files.sort();

    debug!(count = files.len(), dir = %dir.display(), "scanned for YAML files");
    Ok(files)
}

/// Match on the file-name suffix rather than `Path::extension`, so a file
/// named exactly `.yaml` still counts as "name ends in .yaml".
fn has_yaml_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            let name = name.to_ascii_lowercase();
            name.ends_with(".yaml") || name.ends_with(".yml")
        })
}
