//! CLI argument definitions using clap derive macros.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use tracing::info;

use trailmap_core::{batch, convert_file, json_sibling, ConvertError};

use crate::report;

/// Trailmap - convert YAML roadmap documents to pretty-printed JSON
///
/// With a source file, converts that one file (to an explicit destination,
/// or to a sibling .json file). With no arguments, batch-converts every
/// YAML file directly inside the roadmaps/ directory.
#[derive(Debug, Parser)]
#[command(name = "trailmap", author, version, about)]
pub struct Cli {
    /// Source YAML file; omit to batch-convert the roadmaps/ directory
    pub input: Option<PathBuf>,

    /// Destination JSON file; defaults to the source path with a .json extension
    pub output: Option<PathBuf>,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Dispatch to single-file or batch mode based on the arguments given.
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.input {
            Some(input) => {
                let output = self
                    .output
                    .clone()
                    .unwrap_or_else(|| json_sibling(input));
                convert_one(input, &output)?;
            }
            None => run_batch(Path::new("roadmaps"))?,
        }
        Ok(())
    }
}

/// Convert a single file and report the outcome on success.
fn convert_one(source: &Path, dest: &Path) -> Result<(), ConvertError> {
    convert_file(source, dest)?;
    report::success(source, dest);
    Ok(())
}

/// Convert every YAML file inside `dir`, isolating per-file failures.
///
/// One file's failure never blocks the rest; only a missing or unreadable
/// directory is fatal. Returns `Ok` even when individual files failed, so
/// batch mode exits zero after printing its summary.
fn run_batch(dir: &Path) -> Result<(), ConvertError> {
    let files = batch::yaml_files(dir)?;
    info!(count = files.len(), dir = %dir.display(), "starting batch conversion");

    let mut succeeded = 0usize;
    let mut failed = 0usize;
    for source in &files {
        match convert_one(source, &json_sibling(source)) {
            Ok(()) => succeeded += 1,
            Err(e) => {
                failed += 1;
                report::failure(&e);
            }
        }
    }

    report::summary(succeeded, failed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_arguments_are_optional() {
        let cli = Cli::parse_from(["trailmap"]);
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());

        let cli = Cli::parse_from(["trailmap", "in.yaml"]);
        assert_eq!(cli.input.as_deref(), Some(Path::new("in.yaml")));
        assert!(cli.output.is_none());

        let cli = Cli::parse_from(["trailmap", "in.yaml", "out.json"]);
        assert_eq!(cli.output.as_deref(), Some(Path::new("out.json")));
    }
}
