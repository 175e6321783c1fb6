/*!
Default config bootstrap.

Writes the canonical document: a one-element array holding the built-in
window defaults, pretty-printed. The file is staged next to its target and
renamed into place; readers never see a partial document.
*/

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{HudboxError, HudboxResult, WindowConfig};

/// The canonical default config document.
pub fn default_config_document() -> HudboxResult<String> {
  let mut document = serde_json::to_string_pretty(&[WindowConfig::default()])?;
  document.push('\n');
  Ok(document)
}

fn staging_path(path: &Path) -> PathBuf {
  let mut name = OsString::from(".");
  name.push(path.file_name().unwrap_or_else(|| OsStr::new("hudbox")));
  name.push(".tmp");
  path.with_file_name(name)
}

/// Write the default config document to `path`, replacing any existing file.
pub fn try_write_default_config(path: impl AsRef<Path>) -> HudboxResult<()> {
  let path = path.as_ref();
  let document = default_config_document()?;
  let staging = staging_path(path);

  let written = fs::write(&staging, document).and_then(|()| fs::rename(&staging, path));
  if let Err(source) = written {
    fs::remove_file(&staging).ok();
    return Err(HudboxError::Write {
      path: path.to_path_buf(),
      source,
    });
  }
  Ok(())
}

/// Write the default config document to `path`.
///
/// Returns whether the write succeeded. Failures are logged as warnings and
/// never abort the caller.
pub fn write_default_config(path: impl AsRef<Path>) -> bool {
  let path = path.as_ref();
  match try_write_default_config(path) {
    Ok(()) => {
      log::info!("Wrote default config to {}", path.display());
      true
    }
    Err(e) => {
      log::warn!("{e}");
      false
    }
  }
}

/// Create the default config at `path` unless something already exists there.
///
/// Existing files are never touched, whatever their contents.
pub fn ensure_default_config_exists(path: impl AsRef<Path>) {
  let path = path.as_ref();
  match path.try_exists() {
    Ok(true) => {}
    Ok(false) => {
      write_default_config(path);
    }
    Err(e) => log::debug!("Cannot check {}: {e}", path.display()),
  }
}
