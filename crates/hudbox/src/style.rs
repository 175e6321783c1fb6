/*!
Page styling and the drag hook.

The host web view has no per-window alpha or transparency switch that works
the same on every platform, so both are applied to the page itself through
one initialisation script that runs before any page script:

- `transparent` injects [`TRANSPARENT_PAGE_CSS`], and opacity below 1.0
  sets `opacity` on the document root. An opaque window keeps the web view's
  solid backdrop, where page opacity would only wash the page out, so its
  `opacity` has no visible effect.
- unlocked windows get a primary-button handler that asks the host to start
  a window move.
*/

use crate::types::WindowConfig;

/// Forces the page background to be see-through.
pub const TRANSPARENT_PAGE_CSS: &str = "html, body {
  background: transparent !important;
  background-color: transparent !important;
}
";

/// Elements that keep their own mouse behaviour instead of moving the window.
const INTERACTIVE_SELECTOR: &str =
  "a, button, input, textarea, select, option, label, summary, [contenteditable]";

/// Host command that begins an OS window move for the calling window.
pub const START_DRAGGING_COMMAND: &str = "plugin:window|start_dragging";

/// The user stylesheet for `config`, or `None` when the page is untouched.
pub fn page_css(config: &WindowConfig) -> Option<String> {
  if !config.is_transparent() {
    return None;
  }
  let mut css = TRANSPARENT_PAGE_CSS.to_owned();
  if config.opacity() < 1.0 {
    css.push_str(&format!("html {{ opacity: {} !important; }}\n", config.opacity()));
  }
  Some(css)
}

fn style_injection(css: &str) -> String {
  // A JSON string literal is a valid JS string literal.
  let literal = serde_json::Value::from(css).to_string();
  format!(
    r"(function () {{
  var css = {literal};
  var install = function () {{
    var style = document.createElement('style');
    style.setAttribute('data-hudbox', '');
    style.textContent = css;
    (document.head || document.documentElement).appendChild(style);
  }};
  if (document.documentElement) {{
    install();
  }} else {{
    document.addEventListener('DOMContentLoaded', install, {{ once: true }});
  }}
}})();
"
  )
}

fn drag_hook() -> String {
  let selector = serde_json::Value::from(INTERACTIVE_SELECTOR).to_string();
  let command = serde_json::Value::from(START_DRAGGING_COMMAND).to_string();
  format!(
    r"(function () {{
  var interactive = {selector};
  window.addEventListener('mousedown', function (event) {{
    if (event.button !== 0 || event.defaultPrevented) return;
    var target = event.target;
    if (target && target.closest && target.closest(interactive)) return;
    var internals = window.__TAURI_INTERNALS__;
    if (!internals) return;
    event.preventDefault();
    internals.invoke({command});
  }});
}})();
"
  )
}

/// Initialisation script for a window showing `config`.
///
/// Returns `None` when the window needs neither styling nor a drag hook
/// (an opaque, locked window).
pub fn page_script(config: &WindowConfig) -> Option<String> {
  let mut script = String::new();
  if let Some(css) = page_css(config) {
    script.push_str(&style_injection(&css));
  }
  if !config.is_locked() {
    script.push_str(&drag_hook());
  }
  (!script.is_empty()).then_some(script)
}
