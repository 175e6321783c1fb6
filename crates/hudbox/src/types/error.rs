/*! Error types for HudBox config operations. */

use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading or writing HudBox config files.
///
/// None of these are fatal to the application: the public loader and writer
/// collapse them into "no configuration" or a `false` success flag.
#[derive(Debug, thiserror::Error)]
pub enum HudboxError {
  #[error("Failed to read config {}: {source}", .path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("Malformed JSON in {}: {source}", .path.display())]
  Parse {
    path: PathBuf,
    source: serde_json::Error,
  },

  #[error("Unexpected config shape in {}: expected object or array, found {found}", .path.display())]
  UnexpectedShape { path: PathBuf, found: &'static str },

  #[error("No window records in {}", .path.display())]
  Empty { path: PathBuf },

  #[error("Failed to write config {}: {source}", .path.display())]
  Write { path: PathBuf, source: io::Error },

  #[error("Failed to serialize config: {0}")]
  Serialize(#[from] serde_json::Error),
}

/// Result type for HudBox config operations.
pub type HudboxResult<T> = Result<T, HudboxError>;
