use serde_json::{Map, Value};

use crate::record::{ContextObject, BAD_OBJECT};

/// Turn each context object into a field map, preserving input order.
///
/// Maps pass through untouched. Strings are tried, in order, as a JSON
/// object, then as a single `key=value` pair split on the first `=`.
/// Anything else is kept under the `_bad_object` key. This never fails and
/// yields exactly one map per input item.
///
/// e.g. for `["key1=value1", {"key2": "value2"}, "{\"key3\":\"value3\"}"]`
/// returns `[{"key1": "value1"}, {"key2": "value2"}, {"key3": "value3"}]`.
pub fn normalize_objects(objects: &[ContextObject]) -> Vec<Map<String, Value>> {
    objects.iter().map(normalize_object).collect()
}

pub fn normalize_object(object: &ContextObject) -> Map<String, Value> {
    match object {
        ContextObject::Fields(map) => map.clone(),
        ContextObject::Text(text) => normalize_text(text),
    }
}

fn normalize_text(text: &str) -> Map<String, Value> {
    // JSON that decodes to something other than an object is treated like
    // any other unstructured string.
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) {
        return map;
    }

    let mut map = Map::new();
    match text.split_once('=') {
        Some((key, value)) => {
            map.insert(key.to_string(), Value::String(value.to_string()));
        }
        None => {
            map.insert(BAD_OBJECT.to_string(), Value::String(text.to_string()));
        }
    }
    map
}
