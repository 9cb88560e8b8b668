//! Cell value stringification.

use std::sync::Arc;

use serde_json::Value;

/// Per-cell value-to-text conversion callback.
///
/// The produced text must not contain line breaks; the layout treats every
/// cell as a single logical line and wraps it by character count.
pub type Stringify = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Default cell formatter.
///
/// Strings render raw (unquoted), null renders empty, numbers and booleans
/// use their display form, and arrays and objects render as compact
/// single-line JSON.
pub fn default_stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
