/*!
Config loading - turns a JSON document into window records.

The document root is either one object (one window) or an array of objects
(one window per object, in order). Each record starts from
[`WindowConfig::default`], known fields are applied by name, and opacity is
clamped last.

Field access goes through [`FieldValue`]: a member that is absent or holds a
value of the wrong type is simply not applied. Nothing inside a record can
fail the whole load.
*/

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::types::{clamp_opacity, HudboxError, HudboxResult, WindowConfig};

type Record = Map<String, Value>;

/// A value that can be read out of one JSON record member.
trait FieldValue: Sized {
  /// Name of the accepted JSON type, for diagnostics.
  const EXPECTED: &'static str;

  fn from_json(value: &Value) -> Option<Self>;
}

impl FieldValue for String {
  const EXPECTED: &'static str = "non-empty string";

  fn from_json(value: &Value) -> Option<Self> {
    value
      .as_str()
      .filter(|s| !s.is_empty())
      .map(str::to_owned)
  }
}

impl FieldValue for u32 {
  const EXPECTED: &'static str = "positive integer";

  // Whole numbers written with a fraction part (`1024.0`) count as integers.
  #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Checked whole and in range
  fn from_json(value: &Value) -> Option<Self> {
    let whole = match value.as_u64() {
      Some(n) => Some(n),
      None => value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && (1.0..=f64::from(u32::MAX)).contains(f))
        .map(|f| f as u64),
    };
    whole
      .and_then(|n| u32::try_from(n).ok())
      .filter(|n| *n > 0)
  }
}

impl FieldValue for bool {
  const EXPECTED: &'static str = "boolean";

  fn from_json(value: &Value) -> Option<Self> {
    value.as_bool()
  }
}

impl FieldValue for f64 {
  const EXPECTED: &'static str = "number";

  // Literals beyond f64 range read as signed infinity and are clamped later.
  fn from_json(value: &Value) -> Option<Self> {
    value.as_f64().or_else(|| {
      value
        .as_number()
        .and_then(|n| n.to_string().parse::<f64>().ok())
    })
  }
}

/// Read `key` from `record` as `T`. `None` if absent or mistyped.
fn field<T: FieldValue>(record: &Record, key: &str) -> Option<T> {
  let value = record.get(key)?;
  let parsed = T::from_json(value);
  if parsed.is_none() {
    log::debug!(
      "Ignoring field '{key}': expected {}, found {}",
      T::EXPECTED,
      json_kind(value)
    );
  }
  parsed
}

/// JSON type name of `value`, for diagnostics.
const fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

/// Build one window record from a JSON object.
fn record_to_config(record: &Record) -> WindowConfig {
  let mut cfg = WindowConfig::default();

  if let Some(title) = field::<String>(record, "title") {
    cfg.title = title;
  }

  // `uri` is the legacy name. Any `address` member, even a mistyped one,
  // shadows it.
  let address = if record.contains_key("address") {
    field::<String>(record, "address")
  } else {
    field::<String>(record, "uri")
  };
  if let Some(address) = address {
    cfg.address = address;
  }

  if let Some(width) = field::<u32>(record, "width") {
    cfg.width = width;
  }
  if let Some(height) = field::<u32>(record, "height") {
    cfg.height = height;
  }
  if let Some(locked) = field::<bool>(record, "locked") {
    cfg.locked = locked;
  }
  if let Some(opacity) = field::<f64>(record, "opacity") {
    cfg.opacity = opacity;
  }
  if let Some(transparent) = field::<bool>(record, "transparent") {
    cfg.transparent = transparent;
  }

  cfg.opacity = clamp_opacity(cfg.opacity);
  cfg
}

/// Convert a parsed document root into window records.
///
/// Array elements that are not objects are skipped. Returns the JSON type
/// name of the root when it is neither an object nor an array.
fn document_to_configs(root: &Value) -> Result<Vec<WindowConfig>, &'static str> {
  match root {
    Value::Object(record) => Ok(vec![record_to_config(record)]),
    Value::Array(items) => Ok(
      items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
          Value::Object(record) => Some(record_to_config(record)),
          other => {
            log::debug!(
              "Skipping config element {index}: expected object, found {}",
              json_kind(other)
            );
            None
          }
        })
        .collect(),
    ),
    other => Err(json_kind(other)),
  }
}

/// Parse config text that was read from `path`.
///
/// `path` is only used to label errors.
pub fn parse_configs(path: impl AsRef<Path>, contents: &str) -> HudboxResult<Vec<WindowConfig>> {
  let path = path.as_ref();
  let root: Value = serde_json::from_str(contents).map_err(|source| HudboxError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  let configs = document_to_configs(&root).map_err(|found| HudboxError::UnexpectedShape {
    path: path.to_path_buf(),
    found,
  })?;

  if configs.is_empty() {
    return Err(HudboxError::Empty {
      path: path.to_path_buf(),
    });
  }
  Ok(configs)
}

/// Load window records from `path`, reporting why nothing was loaded.
pub fn try_load_configs(path: impl AsRef<Path>) -> HudboxResult<Vec<WindowConfig>> {
  let path = path.as_ref();
  let contents = fs::read_to_string(path).map_err(|source| HudboxError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  parse_configs(path, &contents)
}

/// Load window records from `path`.
///
/// Returns `None` when the file is missing or unreadable, is not valid JSON,
/// has a root other than an object or array, or yields no records. Callers
/// treat all of these as "no configuration". The returned vector is never
/// empty.
pub fn load_configs(path: impl AsRef<Path>) -> Option<Vec<WindowConfig>> {
  match try_load_configs(path) {
    Ok(configs) => Some(configs),
    Err(e) => {
      log::debug!("No configuration loaded: {e}");
      None
    }
  }
}
