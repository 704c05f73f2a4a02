//! Console reporting for conversion outcomes.
//!
//! Successes go to stdout, failures to stderr, each with a distinguishing
//! marker so batch output can be filtered per stream.

use std::fmt::Display;
use std::path::Path;

/// Success marker, matching the rest of the tooling's output style.
pub const CHECK: &str = "✓";
/// Failure marker.
pub const CROSS: &str = "✗";

/// Report one successful conversion.
pub fn success(source: &Path, dest: &Path) {
    println!("{CHECK} {} -> {}", source.display(), dest.display());
}

/// Report one failure with its human-readable cause.
pub fn failure(cause: &impl Display) {
    eprintln!("{CROSS} {cause}");
}

/// Report the batch summary line.
pub fn summary(succeeded: usize, failed: usize) {
    println!("{succeeded} succeeded, {failed} failed");
}
