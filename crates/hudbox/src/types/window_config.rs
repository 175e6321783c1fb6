/*!
Window configuration - the resolved display parameters for one window.

A `WindowConfig` always starts from the built-in defaults. Fields are only
overridden by the loader or the `with_*` builders, and every path that sets
`opacity` leaves it inside `[0.0, 1.0]`.
*/

use serde::Serialize;

/// Product name used as the default window title.
pub const DEFAULT_TITLE: &str = "HudBox";
/// Page loaded when no address is configured.
pub const DEFAULT_ADDRESS: &str = "https://swstegall.github.io/HudBox/";
/// Default inner width in logical pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default inner height in logical pixels.
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default window alpha.
pub const DEFAULT_OPACITY: f64 = 0.9;

/// Constrain an opacity value to `[0.0, 1.0]`.
///
/// NaN has no nearest bound and maps to [`DEFAULT_OPACITY`].
///
/// ```
/// use hudbox::clamp_opacity;
///
/// assert_eq!(clamp_opacity(1.5), 1.0);
/// assert_eq!(clamp_opacity(-5.0), 0.0);
/// assert_eq!(clamp_opacity(0.25), 0.25);
/// ```
#[inline]
pub fn clamp_opacity(value: f64) -> f64 {
  if value.is_nan() {
    DEFAULT_OPACITY
  } else {
    value.clamp(0.0, 1.0)
  }
}

/// Desired configuration of one HudBox window.
///
/// Serializes to exactly the on-disk record shape, in the canonical field
/// order: `title`, `address`, `width`, `height`, `locked`, `opacity`,
/// `transparent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowConfig {
  pub(crate) title: String,
  pub(crate) address: String,
  pub(crate) width: u32,
  pub(crate) height: u32,
  pub(crate) locked: bool,
  pub(crate) opacity: f64,
  pub(crate) transparent: bool,
}

impl Default for WindowConfig {
  fn default() -> Self {
    Self {
      title: DEFAULT_TITLE.to_owned(),
      address: DEFAULT_ADDRESS.to_owned(),
      width: DEFAULT_WIDTH,
      height: DEFAULT_HEIGHT,
      locked: false,
      opacity: DEFAULT_OPACITY,
      transparent: false,
    }
  }
}

impl WindowConfig {
  /// Window title.
  pub fn title(&self) -> &str {
    &self.title
  }

  /// URI loaded in the web view.
  pub fn address(&self) -> &str {
    &self.address
  }

  /// Initial inner width in logical pixels.
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Initial inner height in logical pixels.
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// Locked windows cannot be dragged to move.
  pub const fn is_locked(&self) -> bool {
    self.locked
  }

  /// Window alpha, always within `[0.0, 1.0]`.
  pub const fn opacity(&self) -> f64 {
    self.opacity
  }

  /// Whether window chrome and page background render fully transparent.
  pub const fn is_transparent(&self) -> bool {
    self.transparent
  }

  /// Set the title. Empty titles are ignored.
  #[must_use]
  pub fn with_title(mut self, title: impl Into<String>) -> Self {
    let title = title.into();
    if !title.is_empty() {
      self.title = title;
    }
    self
  }

  /// Set the address. Empty addresses are ignored.
  #[must_use]
  pub fn with_address(mut self, address: impl Into<String>) -> Self {
    let address = address.into();
    if !address.is_empty() {
      self.address = address;
    }
    self
  }

  /// Set the initial size. A zero dimension leaves that axis unchanged.
  #[must_use]
  pub const fn with_size(mut self, width: u32, height: u32) -> Self {
    if width > 0 {
      self.width = width;
    }
    if height > 0 {
      self.height = height;
    }
    self
  }

  #[must_use]
  pub const fn with_locked(mut self, locked: bool) -> Self {
    self.locked = locked;
    self
  }

  /// Set the opacity, clamped into `[0.0, 1.0]`.
  #[must_use]
  pub fn with_opacity(mut self, opacity: f64) -> Self {
    self.opacity = clamp_opacity(opacity);
    self
  }

  #[must_use]
  pub const fn with_transparent(mut self, transparent: bool) -> Self {
    self.transparent = transparent;
    self
  }
}
