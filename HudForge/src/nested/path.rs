use crate::error::{Error, Result};

use super::types::{KeyPath, NestedMap, Value};

/// Walk `keys` from `root`, creating empty mappings for missing keys, and
/// return the mapping at the last key.
///
/// An empty key list returns `root` itself.
///
/// # Errors
/// Returns [`Error::PathConflict`] if a key on the way already holds a scalar.
pub fn ensure_nested_path<I, K>(root: &mut NestedMap, keys: I) -> Result<&mut NestedMap>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut current = root;
    let mut path = KeyPath::root();
    let mut created = 0usize;

    for key in keys {
        let key = key.as_ref();
        path.push(key);

        if !current.contains_key(key) {
            created += 1;
        }
        let slot = current.entry(key.to_string()).or_insert_with(Value::empty);

        current = match slot {
            Value::Nested(map) => map,
            Value::Scalar(_) => {
                let err = Error::PathConflict {
                    path: path.to_string(),
                };
                tracing::error!("Failed to create nested path: {err}");
                return Err(err);
            }
        };
    }

    tracing::debug!("Ensured nested path {path} ({created} mappings created)");
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_creates_full_chain() {
        let mut root = NestedMap::new();

        let leaf = ensure_nested_path(&mut root, ["a", "b", "c"]).unwrap();
        assert!(leaf.is_empty());
        leaf.insert("value".to_string(), Value::from("x"));

        let expected: NestedMap =
            serde_json::from_value(json!({"a": {"b": {"c": {"value": "x"}}}})).unwrap();
        assert_eq!(root, expected);
    }

    #[test]
    fn test_reuses_existing_mappings() {
        let mut root: NestedMap =
            serde_json::from_value(json!({"a": {"keep": 1, "b": {"old": true}}})).unwrap();

        let leaf = ensure_nested_path(&mut root, vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(leaf.len(), 1);
        assert_eq!(leaf["old"], Value::from(true));

        let a = root["a"].as_mapping().unwrap();
        assert_eq!(a["keep"], Value::from(1_i64));
    }

    #[test]
    fn test_empty_keys_returns_root() {
        let mut root: NestedMap = serde_json::from_value(json!({"x": 1})).unwrap();
        let same = ensure_nested_path(&mut root, Vec::<&str>::new()).unwrap();
        assert_eq!(same.len(), 1);
    }

    #[test]
    fn test_scalar_on_path_is_conflict() {
        let mut root: NestedMap = serde_json::from_value(json!({"a": {"b": "leaf"}})).unwrap();

        let err = ensure_nested_path(&mut root, ["a", "b", "c"]).unwrap_err();

        assert!(matches!(err, Error::PathConflict { ref path } if path == "a/b"));
        assert_eq!(root["a"].as_mapping().unwrap()["b"], Value::from("leaf"));
    }
}
