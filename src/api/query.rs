//! Flattening of typed option structs into URL query parameters.
//!
//! Option structs are serialized through `serde_json` first so that
//! `#[serde(flatten)]`, renames and `skip_serializing_if` behave exactly as
//! they do for request bodies. Top-level fields become `key=value` pairs,
//! sequences become repeated keys, and nulls are dropped.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Convert an argument value into ordered query pairs.
pub(crate) fn to_query_pairs<T: Serialize + ?Sized>(args: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(args).map_err(Error::Encode)?;

    let mut pairs = Vec::new();
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                push_value(&mut pairs, &key, value);
            }
        }
        other => {
            return Err(Error::Encode(<serde_json::Error as serde::ser::Error>::custom(
                format!("query arguments must serialize to an object, got {}", other),
            )))
        }
    }
    Ok(pairs)
}

fn push_value(pairs: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key.to_string(), s)),
        Value::Bool(b) => pairs.push((key.to_string(), b.to_string())),
        Value::Number(n) => pairs.push((key.to_string(), n.to_string())),
        Value::Array(items) => {
            for item in items {
                push_value(pairs, key, item);
            }
        }
        // Nested objects have no standard query form; send them as JSON.
        object @ Value::Object(_) => pairs.push((key.to_string(), object.to_string())),
    }
}
