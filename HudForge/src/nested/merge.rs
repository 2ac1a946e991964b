//! Recursive merge of nested mappings
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::error::{Error, Result};

use super::types::{KeyPath, NestedMap, Value};

/// Merge `source` into `target` in place.
///
/// For each key already in `target`:
/// - both sides hold a mapping: merge recursively
/// - `target` holds a mapping, `source` a scalar or nothing: left untouched
/// - `target` holds a scalar and `source` has the key: overwritten with the
///   source value, whatever its kind
///
/// Keys only present in `source` are then appended in source order. Values are
/// cloned out of `source`.
///
/// # Errors
/// Returns [`Error::MergeFailure`] if a value along the merge cannot be
/// classified as scalar or mapping. The whole tree is checked before anything
/// is written, so `target` is unchanged on failure.
pub fn merge(target: &mut NestedMap, source: &NestedMap) -> Result<()> {
    validate(target, source, &KeyPath::root()).inspect_err(report)?;
    apply(target, source);
    tracing::debug!("Merged {} source keys into {} target keys", source.len(), target.len());
    Ok(())
}

/// Same as [`merge`], but moves values out of `source` instead of cloning them.
pub fn merge_owned(target: &mut NestedMap, source: NestedMap) -> Result<()> {
    validate(target, &source, &KeyPath::root()).inspect_err(report)?;
    tracing::debug!("Merging {} owned source keys", source.len());
    apply_owned(target, source);
    Ok(())
}

fn report(err: &Error) {
    tracing::error!("Nested map merge failed: {err}");
}

/// Decide whether a value takes part in recursion.
///
/// A JSON object wrapped as a scalar is a mapping in disguise; merging it as
/// either kind would silently pick a side, so it is rejected.
fn classify<'a>(value: &'a Value, path: &KeyPath) -> Result<Option<&'a NestedMap>> {
    match value {
        Value::Nested(map) => Ok(Some(map)),
        Value::Scalar(serde_json::Value::Object(_)) => Err(Error::MergeFailure {
            path: path.to_string(),
            message: "JSON object stored as a scalar; expected a nested mapping".to_string(),
        }),
        Value::Scalar(_) => Ok(None),
    }
}

/// Walk the same keys `apply` will visit and classify every value it branches on.
fn validate(target: &NestedMap, source: &NestedMap, path: &KeyPath) -> Result<()> {
    for (key, value) in target {
        let key_path = path.child(key);
        let Some(inner) = classify(value, &key_path)? else {
            continue;
        };
        let Some(incoming) = source.get(key) else {
            continue;
        };
        if let Some(incoming) = classify(incoming, &key_path)? {
            validate(inner, incoming, &key_path)?;
        }
    }
    Ok(())
}

fn apply(target: &mut NestedMap, source: &NestedMap) {
    for (key, slot) in target.iter_mut() {
        let Some(incoming) = source.get(key) else {
            continue;
        };
        match (slot, incoming) {
            (Value::Nested(inner), Value::Nested(incoming)) => apply(inner, incoming),
            // Recursion only happens when both sides are mappings
            (Value::Nested(_), Value::Scalar(_)) => {}
            (slot, incoming) => *slot = incoming.clone(),
        }
    }

    for (key, value) in source {
        if !target.contains_key(key) {
            target.insert(key.clone(), value.clone());
        }
    }
}

fn apply_owned(target: &mut NestedMap, source: NestedMap) {
    for (key, incoming) in source {
        if let Some(slot) = target.get_mut(&key) {
            match (slot, incoming) {
                (Value::Nested(inner), Value::Nested(incoming)) => apply_owned(inner, incoming),
                (Value::Nested(_), Value::Scalar(_)) => {}
                (slot, incoming) => *slot = incoming,
            }
        } else {
            target.insert(key, incoming);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn map(value: serde_json::Value) -> NestedMap {
        serde_json::from_value(value).unwrap()
    }

    fn keys(map: &NestedMap) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_merge_recurses_and_appends() {
        let mut target = map(json!({"a": {"x": 1}, "b": 2}));
        let source = map(json!({"a": {"x": 9, "y": 8}, "c": 3}));

        merge(&mut target, &source).unwrap();

        assert_eq!(target, map(json!({"a": {"x": 9, "y": 8}, "b": 2, "c": 3})));
        assert_eq!(keys(&target), vec!["a", "b", "c"]);
        assert_eq!(keys(target["a"].as_mapping().unwrap()), vec!["x", "y"]);
    }

    #[test]
    fn test_merge_scalar_overwritten_by_any_kind() {
        let mut target = map(json!({"a": 1, "b": "text"}));
        let source = map(json!({"a": {"now": "nested"}, "b": [1, 2]}));

        merge(&mut target, &source).unwrap();

        assert_eq!(target, source);
    }

    #[test]
    fn test_merge_mapping_not_replaced_by_scalar() {
        let mut target = map(json!({"a": {"x": 1}}));
        let source = map(json!({"a": "flat"}));

        merge(&mut target, &source).unwrap();

        assert_eq!(target, map(json!({"a": {"x": 1}})));
    }

    #[test]
    fn test_merge_keeps_target_only_keys() {
        let mut target = map(json!({"keep": {"deep": true}, "also": 0}));
        merge(&mut target, &NestedMap::new()).unwrap();
        assert_eq!(target, map(json!({"keep": {"deep": true}, "also": 0})));
    }

    #[test]
    fn test_merge_into_empty_copies_source() {
        let mut target = NestedMap::new();
        let source = map(json!({"z": 1, "a": {"b": 2}}));

        merge(&mut target, &source).unwrap();

        assert_eq!(target, source);
        assert_eq!(keys(&target), vec!["z", "a"]);
    }

    #[test]
    fn test_merge_source_is_copied_not_shared() {
        let mut target = NestedMap::new();
        let mut source = map(json!({"a": {"b": 1}}));

        merge(&mut target, &source).unwrap();
        source
            .get_mut("a")
            .and_then(Value::as_mapping_mut)
            .unwrap()
            .insert("c".to_string(), Value::from(2_i64));

        assert_eq!(target, map(json!({"a": {"b": 1}})));
    }

    #[test]
    fn test_merge_deeply_nested() {
        let mut target = map(json!({"Scheme": {"Colors": {"A": "1 1 1 1", "B": "2 2 2 2"}}}));
        let source = map(json!({"Scheme": {"Colors": {"B": "9 9 9 9"}, "Fonts": {}}}));

        merge(&mut target, &source).unwrap();

        assert_eq!(
            target,
            map(json!({"Scheme": {"Colors": {"A": "1 1 1 1", "B": "9 9 9 9"}, "Fonts": {}}}))
        );
    }

    #[test]
    fn test_merge_failure_leaves_target_untouched() {
        let mut target = map(json!({"a": 1, "b": {"c": {"d": 1}}}));
        target
            .get_mut("b")
            .and_then(Value::as_mapping_mut)
            .unwrap()
            .insert("c".to_string(), Value::Scalar(json!({"hidden": true})));
        let before = target.clone();
        let source = map(json!({"a": 2, "b": {"c": {"d": 2}}, "e": 5}));

        let err = merge(&mut target, &source).unwrap_err();

        match err {
            Error::MergeFailure { path, .. } => assert_eq!(path, "b/c"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(target, before);
    }

    #[test]
    fn test_merge_failure_on_source_side() {
        let mut target = map(json!({"a": {"x": 1}}));
        let mut source = NestedMap::new();
        source.insert("a".to_string(), Value::Scalar(json!({"x": 2})));

        assert!(matches!(
            merge(&mut target, &source),
            Err(Error::MergeFailure { .. })
        ));
    }

    #[test]
    fn test_merge_owned_matches_merge() {
        let base = map(json!({"a": {"x": 1, "k": {"q": 0}}, "b": 2, "s": {"m": 1}}));
        let source = map(json!({"n": 4, "a": {"y": 3, "k": {"q": 1}}, "b": {"now": 1}, "s": 7}));

        let mut borrowed = base.clone();
        merge(&mut borrowed, &source).unwrap();
        let mut owned = base;
        merge_owned(&mut owned, source).unwrap();

        assert_eq!(owned, borrowed);
        assert_eq!(keys(&owned), keys(&borrowed));
    }
}
