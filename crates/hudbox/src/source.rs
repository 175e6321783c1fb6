/*!
Where the config comes from.

An explicit path (from the command line) is used as-is and never created.
Without one, the per-user default `~/.hudbox.json` is used and bootstrapped.
The home directory is supplied through [`HomeDir`] so resolution stays
deterministic under test.
*/

use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the per-user default config, relative to the home directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".hudbox.json";

/// Provides the current user's home directory.
pub trait HomeDir {
  /// The home directory, or `None` when it cannot be determined.
  fn home_dir(&self) -> Option<PathBuf>;
}

/// [`HomeDir`] backed by the platform's notion of the user's home.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHome;

impl HomeDir for SystemHome {
  fn home_dir(&self) -> Option<PathBuf> {
    dirs::home_dir()
  }
}

impl<F> HomeDir for F
where
  F: Fn() -> Option<PathBuf>,
{
  fn home_dir(&self) -> Option<PathBuf> {
    self()
  }
}

/// The config file selected for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
  /// Path given by the user. Read only, never created.
  Explicit(PathBuf),
  /// The per-user default path. Created with defaults when missing.
  Default(PathBuf),
  /// No explicit path and no home directory. Built-in defaults only.
  Unavailable,
}

impl ConfigSource {
  /// The config file path, if there is one.
  pub fn path(&self) -> Option<&Path> {
    match self {
      Self::Explicit(path) | Self::Default(path) => Some(path),
      Self::Unavailable => None,
    }
  }

  /// Whether a missing file at this source should be created with defaults.
  pub const fn bootstraps(&self) -> bool {
    matches!(self, Self::Default(_))
  }
}

impl fmt::Display for ConfigSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Explicit(path) => write!(f, "{}", path.display()),
      Self::Default(path) => write!(f, "{} (default)", path.display()),
      Self::Unavailable => f.write_str("built-in defaults"),
    }
  }
}

/// Pick the config source from an optional explicit path.
///
/// An empty explicit path counts as absent.
pub fn resolve_config_source(explicit: Option<PathBuf>, home: &impl HomeDir) -> ConfigSource {
  match explicit {
    Some(path) if !path.as_os_str().is_empty() => ConfigSource::Explicit(path),
    _ => home
      .home_dir()
      .map_or(ConfigSource::Unavailable, |home| {
        ConfigSource::Default(home.join(DEFAULT_CONFIG_FILE_NAME))
      }),
  }
}
