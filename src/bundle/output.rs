//! Persisting the generated fragment next to the native sources.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::Builder;

use crate::error::{GenerateError, GenerateResult};

/// Result of writing the generated fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
  /// The output file was created or replaced.
  Written,
  /// The output already held identical bytes and was left alone.
  Unchanged,
}

/// Whether `path` already contains exactly `contents`.
pub fn is_up_to_date(path: &Path, contents: &str) -> GenerateResult<bool> {
  match fs::read(path) {
    Ok(existing) => Ok(existing == contents.as_bytes()),
    Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
    Err(err) => Err(GenerateError::io("read", path, err)),
  }
}

/// Write `contents` to `path`, replacing any existing file.
///
/// The text goes to a temporary file in the destination directory first and is then moved
/// over the target, so readers never observe a half-written fragment. An existing target
/// keeps its permissions; a new one gets the same mode `fs::write` would give it. The parent
/// directory must already exist.
pub fn write_generated_source(path: &Path, contents: &str) -> GenerateResult<WriteOutcome> {
  if is_up_to_date(path, contents)? {
    return Ok(WriteOutcome::Unchanged);
  }

  let parent = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  let mut staged = staging_builder()
    .tempfile_in(parent)
    .map_err(|err| GenerateError::io("write", path, err))?;
  staged
    .write_all(contents.as_bytes())
    .and_then(|_| staged.flush())
    .map_err(|err| GenerateError::io("write", path, err))?;

  match fs::metadata(path) {
    Ok(existing) => staged
      .as_file()
      .set_permissions(existing.permissions())
      .map_err(|err| GenerateError::io("write", path, err))?,
    Err(err) if err.kind() == ErrorKind::NotFound => {}
    Err(err) => return Err(GenerateError::io("read", path, err)),
  }

  staged
    .persist(path)
    .map_err(|err| GenerateError::io("write", path, err.error))?;

  Ok(WriteOutcome::Written)
}

// Temp files default to 0600; request the regular file mode so the umask applies as usual.
#[cfg(unix)]
fn staging_builder() -> Builder<'static, 'static> {
  use std::os::unix::fs::PermissionsExt;

  let mut builder = Builder::new();
  builder.permissions(fs::Permissions::from_mode(0o666));
  builder
}

#[cfg(not(unix))]
fn staging_builder() -> Builder<'static, 'static> {
  Builder::new()
}
