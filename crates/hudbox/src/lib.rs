/*!
HudBox - borderless web view windows from a JSON config.

```ignore
use hudbox::{launch, resolve_config_source, SystemHome};

// `None` means "use ~/.hudbox.json", creating it with defaults if missing
let source = resolve_config_source(None, &SystemHome);

// Presenter is implemented by the GUI layer
let shown = launch(&source, &mut presenter);
```

Config files hold either one window object or an array of them:

```json
[
  { "title": "Clock", "address": "https://example.com/clock", "width": 320,
    "height": 120, "locked": true, "opacity": 0.8, "transparent": true }
]
```
*/

mod bootstrap;
mod launch;
mod loader;
mod source;
mod style;

mod types;
pub use types::*;

pub use crate::bootstrap::{
  default_config_document, ensure_default_config_exists, try_write_default_config,
  write_default_config,
};
pub use crate::launch::{collect_windows, launch, Presenter, WindowPlan, WINDOW_LABEL_PREFIX};
pub use crate::loader::{load_configs, parse_configs, try_load_configs};
pub use crate::source::{
  resolve_config_source, ConfigSource, HomeDir, SystemHome, DEFAULT_CONFIG_FILE_NAME,
};
pub use crate::style::{page_css, page_script, START_DRAGGING_COMMAND, TRANSPARENT_PAGE_CSS};
