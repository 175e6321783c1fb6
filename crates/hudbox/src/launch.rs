/*!
Launch flow - from a config source to presented windows.

```ignore
use hudbox::{launch, resolve_config_source, SystemHome};

let source = resolve_config_source(cli.config, &SystemHome);
let shown = launch(&source, &mut presenter);
```

The GUI side only has to implement [`Presenter`]. Everything before that
(bootstrap, loading, fallback to one default window) happens here.
*/

use std::fmt;

use crate::bootstrap::ensure_default_config_exists;
use crate::loader::load_configs;
use crate::source::ConfigSource;
use crate::style::page_script;
use crate::types::WindowConfig;

/// Prefix of every HudBox window label.
pub const WINDOW_LABEL_PREFIX: &str = "hudbox-";

/// Everything the presentation layer needs to show one window.
///
/// Owns its [`WindowConfig`]; the plan is handed to the presenter once and
/// not kept by the launch flow.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowPlan {
  label: String,
  config: WindowConfig,
  init_script: Option<String>,
}

impl WindowPlan {
  /// Plan the `index`-th window of a run.
  pub fn new(index: usize, config: WindowConfig) -> Self {
    Self {
      label: format!("{WINDOW_LABEL_PREFIX}{index}"),
      init_script: page_script(&config),
      config,
    }
  }

  /// Unique window label within the run.
  pub fn label(&self) -> &str {
    &self.label
  }

  /// The window's configuration.
  pub const fn config(&self) -> &WindowConfig {
    &self.config
  }

  /// HudBox windows never show OS decorations.
  pub const fn decorations(&self) -> bool {
    false
  }

  /// HudBox windows can always be resized.
  pub const fn resizable(&self) -> bool {
    true
  }

  /// Script to run in the page before any page script.
  ///
  /// Unlocked windows get the drag hook here; locked windows never do.
  pub fn init_script(&self) -> Option<&str> {
    self.init_script.as_deref()
  }

  /// Give the configuration back, dropping the plan.
  pub fn into_config(self) -> WindowConfig {
    self.config
  }
}

/// The presentation layer: turns a [`WindowPlan`] into an on-screen window.
pub trait Presenter {
  /// Why a window could not be shown. Logged, never fatal.
  type Error: fmt::Display;

  /// Show one window. The plan is handed over for good.
  fn present_window(&mut self, plan: WindowPlan) -> Result<(), Self::Error>;
}

/// Resolve the windows to show for `source`.
///
/// Bootstraps the default file when the source calls for it, then loads.
/// Never returns an empty list: when nothing loads, one default window is
/// returned.
pub fn collect_windows(source: &ConfigSource) -> Vec<WindowConfig> {
  let Some(path) = source.path() else {
    log::info!("No config path available, using built-in defaults");
    return vec![WindowConfig::default()];
  };

  if source.bootstraps() {
    ensure_default_config_exists(path);
  }

  match load_configs(path) {
    Some(configs) => {
      log::info!("Loaded {} window config(s) from {source}", configs.len());
      configs
    }
    None => {
      log::info!("No usable config at {source}, using built-in defaults");
      vec![WindowConfig::default()]
    }
  }
}

/// Present every window for `source`, in config order.
///
/// A presenter failure is logged and does not stop the remaining windows.
/// Returns how many windows were presented.
pub fn launch<P: Presenter>(source: &ConfigSource, presenter: &mut P) -> usize {
  let mut presented = 0;
  for (index, config) in collect_windows(source).into_iter().enumerate() {
    let plan = WindowPlan::new(index, config);
    let label = plan.label().to_owned();
    match presenter.present_window(plan) {
      Ok(()) => presented += 1,
      Err(e) => log::warn!("Failed to present window {label}: {e}"),
    }
  }
  presented
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bootstrap::default_config_document;
  use std::fs;
  use std::path::PathBuf;

  /// Records plans; fails for any address listed in `reject`.
  #[derive(Default)]
  struct RecordingPresenter {
    presented: Vec<WindowPlan>,
    reject: Vec<&'static str>,
  }

  impl Presenter for RecordingPresenter {
    type Error = String;

    fn present_window(&mut self, plan: WindowPlan) -> Result<(), Self::Error> {
      if self.reject.iter().any(|r| *r == plan.config().address()) {
        return Err(format!("cannot load {}", plan.config().address()));
      }
      self.presented.push(plan);
      Ok(())
    }
  }

  fn titles(presenter: &RecordingPresenter) -> Vec<&str> {
    presenter
      .presented
      .iter()
      .map(|plan| plan.config().title())
      .collect()
  }

  mod plan {
    use super::*;

    #[test]
    fn labels_are_indexed() {
      assert_eq!(WindowPlan::new(0, WindowConfig::default()).label(), "hudbox-0");
      assert_eq!(WindowPlan::new(7, WindowConfig::default()).label(), "hudbox-7");
    }

    #[test]
    fn undecorated_and_resizable() {
      let plan = WindowPlan::new(0, WindowConfig::default());
      assert!(!plan.decorations());
      assert!(plan.resizable());
    }

    #[test]
    fn only_unlocked_windows_get_drag_hook() {
      let locked = WindowPlan::new(0, WindowConfig::default().with_locked(true));
      assert!(
        !locked.init_script().is_some_and(|s| s.contains("start_dragging")),
        "locked window must not be draggable"
      );
      let unlocked = WindowPlan::new(1, WindowConfig::default());
      assert!(unlocked.init_script().is_some_and(|s| s.contains("start_dragging")));
    }

    #[test]
    fn carries_page_script() {
      let plan = WindowPlan::new(0, WindowConfig::default());
      assert!(plan.init_script().is_some_and(|s| s.contains("start_dragging")));
    }

    #[test]
    fn into_config_returns_owned_config() {
      let cfg = WindowConfig::default().with_title("mine");
      assert_eq!(WindowPlan::new(3, cfg.clone()).into_config(), cfg);
    }
  }

  mod collect {
    use super::*;

    #[test]
    fn unavailable_source_gives_one_default() {
      assert_eq!(
        collect_windows(&ConfigSource::Unavailable),
        vec![WindowConfig::default()]
      );
    }

    #[test]
    fn default_source_is_bootstrapped() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join(".hudbox.json");

      let windows = collect_windows(&ConfigSource::Default(path.clone()));
      assert_eq!(windows, vec![WindowConfig::default()]);
      assert_eq!(
        fs::read_to_string(&path).unwrap(),
        default_config_document().unwrap()
      );
    }

    #[test]
    fn explicit_source_is_never_created() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("custom.json");

      let windows = collect_windows(&ConfigSource::Explicit(path.clone()));
      assert_eq!(windows, vec![WindowConfig::default()], "falls back in memory");
      assert!(!path.exists(), "explicit path must not be created");
    }

    #[test]
    fn existing_default_file_is_used() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join(".hudbox.json");
      fs::write(&path, r#"[{"title": "one"}, {"title": "two"}]"#).unwrap();

      let windows = collect_windows(&ConfigSource::Default(path));
      let titles: Vec<_> = windows.iter().map(WindowConfig::title).collect();
      assert_eq!(titles, ["one", "two"]);
    }

    #[test]
    fn broken_file_falls_back() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join(".hudbox.json");
      fs::write(&path, "{ not json").unwrap();

      assert_eq!(
        collect_windows(&ConfigSource::Default(path.clone())),
        vec![WindowConfig::default()]
      );
      assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{ not json",
        "existing file is left alone"
      );
    }
  }

  mod run {
    use super::*;

    #[test]
    fn presents_in_config_order() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("hud.json");
      fs::write(
        &path,
        r#"[{"title": "A", "address": "https://a.test"}, {"title": "B", "address": "https://b.test"}]"#,
      )
      .unwrap();

      let mut presenter = RecordingPresenter::default();
      let shown = launch(&ConfigSource::Explicit(path), &mut presenter);

      assert_eq!(shown, 2);
      assert_eq!(titles(&presenter), ["A", "B"]);
      let labels: Vec<_> = presenter.presented.iter().map(WindowPlan::label).collect();
      assert_eq!(labels, ["hudbox-0", "hudbox-1"]);
    }

    #[test]
    fn failure_does_not_stop_other_windows() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("hud.json");
      fs::write(
        &path,
        r#"[{"title": "A", "address": "bad"}, {"title": "B", "address": "https://b.test"}]"#,
      )
      .unwrap();

      let mut presenter = RecordingPresenter {
        reject: vec!["bad"],
        ..Default::default()
      };
      let shown = launch(&ConfigSource::Explicit(path), &mut presenter);

      assert_eq!(shown, 1);
      assert_eq!(titles(&presenter), ["B"]);
    }

    #[test]
    fn missing_explicit_file_shows_default_window() {
      let mut presenter = RecordingPresenter::default();
      let shown = launch(
        &ConfigSource::Explicit(PathBuf::from("/definitely/not/here.json")),
        &mut presenter,
      );

      assert_eq!(shown, 1);
      assert_eq!(presenter.presented[0].config(), &WindowConfig::default());
    }
  }
}
