// Nested JSON lookups.
// Resolves a key path through successively nested JSON objects.

use serde_json::Value;

use crate::error::{GhOrgError, Result};

/// Follow `path` through nested objects starting at `root`.
///
/// Every segment must land on an object that contains the key. Arrays and
/// scalars mid-path fail the same way a missing key does, with
/// [`GhOrgError::KeyNotFound`] naming the segment. An empty path returns
/// `root` itself.
///
/// ```
/// use serde_json::json;
/// use ghorg::utils::access_nested_map;
///
/// let map = json!({"a": {"b": {"c": 1}}});
/// assert_eq!(access_nested_map(&map, &["a", "b", "c"]).unwrap(), &json!(1));
/// ```
pub fn access_nested_map<'a, K: AsRef<str>>(root: &'a Value, path: &[K]) -> Result<&'a Value> {
    let mut current = root;
    for key in path {
        let key = key.as_ref();
        current = current
            .as_object()
            .and_then(|map| map.get(key))
            .ok_or_else(|| GhOrgError::KeyNotFound(key.to_string()))?;
    }
    Ok(current)
}
