//! Single-file YAML-to-JSON conversion.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use crate::error::ConvertError;
use crate::extract;
use crate::Result;

/// Convert one roadmap YAML file to pretty-printed JSON.
///
/// The payload is serialized with two-space indentation and a single
/// trailing newline. On any failure nothing is written; an existing
/// destination file is only ever replaced by a successful conversion.
pub fn convert_file(source: &Path, dest: &Path) -> Result<()> {
    let text = fs::read_to_string(source).map_err(|e| ConvertError::NotReadable {
        path: source.to_path_buf(),
        source: e,
    })?;

    // serde_yaml parses an empty document to null; reject it up front so
    // the report says "empty file" rather than "no payload found".
    if text.trim().is_empty() {
        return Err(ConvertError::EmptyInput {
            path: source.to_path_buf(),
        });
    }

    let tree: Value = serde_yaml::from_str(&text).map_err(|e| ConvertError::Parse {
        path: source.to_path_buf(),
        source: e,
    })?;

    let payload = extract::extract(&tree).ok_or_else(|| ConvertError::ExtractionFailed {
        path: source.to_path_buf(),
    })?;
    debug!(topics = payload.len(), source = %source.display(), "payload located");

    let mut json = serde_json::to_string_pretty(payload).map_err(|e| ConvertError::Serialize {
        path: source.to_path_buf(),
        source: e,
    })?;
    json.push('\n');

    fs::write(dest, json).map_err(|e| ConvertError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Derive the destination path for a source file by swapping the extension
/// for `.json`.
pub fn json_sibling(path: &Path) -> PathBuf {
    path.with_extension("json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_sibling_swaps_the_extension() {
        assert_eq!(
            json_sibling(Path::new("roadmaps/devops.yaml")),
            PathBuf::from("roadmaps/devops.json")
        );
        assert_eq!(
            json_sibling(Path::new("backend.yml")),
            PathBuf::from("backend.json")
        );
    }
}
