//! Template-driven reshaping of a document.
//!
//! A template describes the shape the caller wants back. Each template entry
//! is dispatched on its shape:
//!
//! - `key: {...}` (a nested list or map): recurse into the source's `key`,
//!   which must exist.
//! - `0: "name"` (a numeric key): copy the source's `name`, which must exist.
//! - `key: default` (anything else): copy the source's `key`, or `default`
//!   when the source lacks it.
//!
//! Required keys that are missing abort the whole reshape; there is no
//! partial result.

use crate::diagnostics::{DotError, Result};
use crate::value::{Key, Mapping, Value};

/// Reshapes `source` to the shape of `template`.
///
/// # Examples
///
/// ```rust
/// use dotarr::{reshape::filter_recursive, Value};
/// use serde_json::json;
///
/// let source = Value::from(json!({"x": 1, "y": 2, "z": 3}));
/// let template = Value::from(json!({"x": 0, "0": "y", "w": "fallback"}));
/// let shaped = filter_recursive(&source, &template).unwrap();
/// assert_eq!(shaped, Value::from(json!({"x": 1, "y": 2, "w": "fallback"})));
/// ```
pub fn filter_recursive(source: &Value, template: &Value) -> Result<Value> {
    let mut result = Mapping::with_capacity(template.len());

    for (key, wanted) in template.entries() {
        if wanted.is_accessible() {
            let child = required(source, &key)?;
            if !child.is_accessible() {
                return Err(DotError::ShapeMismatch {
                    key,
                    found: child.type_name(),
                });
            }
            let shaped = filter_recursive(child, wanted)?;
            result.insert(key, shaped);
        } else if key.is_numeric() {
            let name = Key::from_value(wanted)?;
            let value = required(source, &name)?.clone();
            result.insert(name, value);
        } else {
            let value = source.get_key(&key).unwrap_or(wanted).clone();
            result.insert(key, value);
        }
    }

    Ok(Value::Map(result))
}

fn required<'a>(source: &'a Value, key: &Key) -> Result<&'a Value> {
    source
        .get_key(key)
        .ok_or_else(|| DotError::MissingKey { key: key.clone() })
}
