//! Error kinds surfaced while generating the embedded asset fragment.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used across the crate.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Failure raised by the generator. Every variant aborts the run.
#[derive(Debug, Error)]
pub enum GenerateError {
  /// The HTML input does not reference a bundle under the expected URL prefix.
  #[error("no bundle reference found in {}: expected src=\"{prefix}<file>\"", .path.display())]
  MissingBundleReference {
    /// HTML document that was searched.
    path: PathBuf,
    /// URL prefix the reference was expected to start with.
    prefix: String,
  },
  /// An explicitly requested configuration file could not be parsed.
  #[error("invalid configuration in {}", .path.display())]
  InvalidConfig {
    /// Configuration file that failed to parse.
    path: PathBuf,
    /// Underlying parse failure.
    #[source]
    source: serde_json::Error,
  },
  /// Any filesystem read or write failure.
  #[error("failed to {action} {}", .path.display())]
  Io {
    /// Short verb describing the attempted operation.
    action: &'static str,
    /// Path the operation targeted.
    path: PathBuf,
    /// Underlying filesystem failure.
    #[source]
    source: io::Error,
  },
}

impl GenerateError {
  pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
    Self::Io {
      action,
      path: path.to_path_buf(),
      source,
    }
  }

  /// Whether the failure stems from a mismatch between configuration and the HTML input,
  /// as opposed to a filesystem problem.
  pub fn is_configuration(&self) -> bool {
    matches!(
      self,
      Self::MissingBundleReference { .. } | Self::InvalidConfig { .. }
    )
  }
}
