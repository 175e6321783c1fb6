/*! Core types for HudBox. */

#![allow(missing_docs)]

mod error;
mod window_config;

pub use error::{HudboxError, HudboxResult};
pub use window_config::{
  clamp_opacity, WindowConfig, DEFAULT_ADDRESS, DEFAULT_HEIGHT, DEFAULT_OPACITY, DEFAULT_TITLE,
  DEFAULT_WIDTH,
};
