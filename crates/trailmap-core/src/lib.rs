//! Trailmap core: locate roadmap payloads in parsed YAML and convert them
//! to pretty-printed JSON.
//!
//! A roadmap document is a mapping from topic key to entry, where each
//! entry carries at least `title` and `description`. Documents may store
//! the topic map bare at the top level or nested under one descriptive
//! wrapper key; [`extract::extract`] tolerates both.

pub mod batch;
pub mod convert;
pub mod error;
pub mod extract;

pub use convert::{convert_file, json_sibling};
pub use error::ConvertError;
pub use extract::extract;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
