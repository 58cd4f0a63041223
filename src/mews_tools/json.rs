//! Sorting transform for lookup documents.
//!
//! A lookup document is either an array of strings or an object whose values
//! are arrays of strings (other value types pass through). The transform
//! sorts array elements and object keys ascending, case-sensitive.

use crate::error::{MewsError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

/// Sort a parsed lookup document.
///
/// Returns `None` when the root is neither an array nor an object, in which
/// case the caller leaves the file untouched.
pub fn sort_document(value: Value) -> Result<Option<Value>> {
    match value {
        Value::Array(mut items) => {
            sort_string_array(&mut items)?;
            Ok(Some(Value::Array(items)))
        }
        Value::Object(map) => {
            let mut keys: Vec<String> = map.keys().cloned().collect();
            keys.sort_unstable();

            let mut map = map;
            let mut sorted = Map::new();
            for key in keys {
                let mut val = map.remove(&key).unwrap_or(Value::Null);
                if let Value::Array(items) = &mut val {
                    sort_string_array(items)?;
                }
                sorted.insert(key, val);
            }
            Ok(Some(Value::Object(sorted)))
        }
        _ => Ok(None),
    }
}

fn sort_string_array(items: &mut [Value]) -> Result<()> {
    for item in items.iter() {
        if !item.is_string() {
            return Err(MewsError::Data(format!(
                "expected an array of strings, found {}",
                item
            )));
        }
    }
    items.sort_by(|a, b| {
        let a = a.as_str().unwrap_or_default();
        let b = b.as_str().unwrap_or_default();
        a.cmp(b)
    });
    Ok(())
}

/// Serialize with 4-space indentation, matching how the lookup files are
/// checked in.
pub fn to_pretty_4(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| MewsError::Data(e.to_string()))
}
