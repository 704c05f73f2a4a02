//! Conversion error taxonomy.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while converting one roadmap file or
/// scanning a batch directory.
///
/// Per-file variants are reportable conditions, not faults: the batch
/// driver catches them, prints a message, and moves on to the next file.
/// Only the directory variants terminate a batch run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source path does not exist or cannot be read.
    #[error("cannot read {}: {source}", path.display())]
    NotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source file exists but contains no non-whitespace content.
    #[error("empty file: {}", path.display())]
    EmptyInput { path: PathBuf },

    /// YAML syntax error.
    #[error("invalid YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Parse succeeded but no roadmap-shaped structure was found.
    #[error("no roadmap payload found in {}", path.display())]
    ExtractionFailed { path: PathBuf },

    /// The payload cannot be represented as JSON. Scalar topic keys are
    /// stringified by the JSON serializer; only sequence or mapping keys
    /// land here.
    #[error("cannot serialize {} as JSON: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Destination could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Batch source directory does not exist. Fatal in batch mode.
    #[error("directory not found: {}", path.display())]
    DirectoryMissing { path: PathBuf },

    /// Batch source directory exists but cannot be listed. Fatal in batch mode.
    #[error("cannot list directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
