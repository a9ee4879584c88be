//! Whole-container utilities: merging, flattening, ordering and filtering.
//!
//! All functions are pure and accept any [`Value`]; scalars behave like empty
//! containers. List entries are keyed by position.

use indexmap::IndexSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::access;
use crate::diagnostics::Result;
use crate::path::DEFAULT_DELIMITER;
use crate::value::{is_sequential, Key, Mapping, Value};

// Using a concrete, seedable PRNG for determinism.
type SmallRng = Xoshiro256StarStar;

// ============================================================================
// MERGING AND SPLITTING
// ============================================================================

/// Merges every list or map inside `value` into a single container.
///
/// Integer keys are renumbered and appended, string keys overwrite earlier
/// ones. Scalar items are skipped.
pub fn collapse(value: &Value) -> Value {
    let mut merged = Mapping::new();
    let mut next_index = 0i64;
    for (_, item) in value.entries().filter(|(_, item)| item.is_accessible()) {
        for (key, inner) in item.entries() {
            match key {
                Key::Int(_) => {
                    merged.insert(Key::Int(next_index), inner.clone());
                    next_index += 1;
                }
                named => {
                    merged.insert(named, inner.clone());
                }
            }
        }
    }
    Value::compact(merged)
}

/// Splits a container into its keys and its values.
pub fn divide(value: &Value) -> (Vec<Key>, Vec<Value>) {
    value
        .entries()
        .map(|(key, item)| (key, item.clone()))
        .unzip()
}

/// Flattens nested containers into a single level of dotted keys.
///
/// # Examples
///
/// ```rust
/// use dotarr::{collection::dot, Key, Value};
/// use serde_json::json;
///
/// let flat = dot(&Value::from(json!({"a": {"b": 1}, "c": []})), "");
/// assert_eq!(flat.get(&Key::from("a.b")), Some(&Value::Int(1)));
/// assert_eq!(flat.get(&Key::from("c")), Some(&Value::List(vec![])));
/// ```
pub fn dot(value: &Value, prepend: &str) -> Mapping {
    dot_with(value, prepend, DEFAULT_DELIMITER)
}

pub fn dot_with(value: &Value, prepend: &str, delimiter: char) -> Mapping {
    let mut results = Mapping::new();
    dot_into(&mut results, value, prepend, delimiter);
    results
}

fn dot_into(results: &mut Mapping, value: &Value, prepend: &str, delimiter: char) {
    for (key, item) in value.entries() {
        if item.is_accessible() && !item.is_empty() {
            let prefix = format!("{prepend}{key}{delimiter}");
            dot_into(results, item, &prefix, delimiter);
        } else {
            results.insert(Key::parse(&format!("{prepend}{key}")), item.clone());
        }
    }
}

/// Flattens nested containers into their leaf values.
///
/// `depth` limits how many levels are unpacked; `None` (or `Some(0)`)
/// unpacks everything.
pub fn flatten(value: &Value, depth: Option<usize>) -> Vec<Value> {
    let mut out = Vec::new();
    flatten_into(&mut out, value, depth);
    out
}

fn flatten_into(out: &mut Vec<Value>, value: &Value, depth: Option<usize>) {
    for (_, item) in value.entries() {
        if !item.is_accessible() {
            out.push(item.clone());
        } else if depth == Some(1) {
            out.extend(item.entries().map(|(_, inner)| inner.clone()));
        } else {
            flatten_into(out, item, depth.map(|d| d.saturating_sub(1)));
        }
    }
}

/// Puts `item` in front of the container.
///
/// Without a key the item takes index `0` and the other integer keys shift
/// up by one. With a key the item is stored under it, replacing any entry
/// already stored there.
pub fn prepend(value: &Value, item: Value, key: Option<Key>) -> Value {
    let mut result = Mapping::with_capacity(value.len() + 1);
    match key {
        None => {
            result.insert(Key::Int(0), item);
            let mut next_index = 1i64;
            for (key, inner) in value.entries() {
                match key {
                    Key::Int(_) => {
                        result.insert(Key::Int(next_index), inner.clone());
                        next_index += 1;
                    }
                    named => {
                        result.insert(named, inner.clone());
                    }
                }
            }
        }
        Some(key) => {
            result.insert(key.clone(), item);
            result.extend(
                value
                    .entries()
                    .filter(|(existing, _)| *existing != key)
                    .map(|(existing, inner)| (existing, inner.clone())),
            );
        }
    }
    Value::compact(result)
}

// ============================================================================
// LOOKUP
// ============================================================================

pub fn first(value: &Value) -> Option<&Value> {
    value.entries().next().map(|(_, item)| item)
}

/// The first entry for which `pred(item, key)` holds.
pub fn first_where<F>(value: &Value, mut pred: F) -> Option<&Value>
where
    F: FnMut(&Value, &Key) -> bool,
{
    value
        .entries()
        .find(|(key, item)| pred(*item, key))
        .map(|(_, item)| item)
}

pub fn last(value: &Value) -> Option<&Value> {
    value.entries().next_back().map(|(_, item)| item)
}

pub fn last_where<F>(value: &Value, mut pred: F) -> Option<&Value>
where
    F: FnMut(&Value, &Key) -> bool,
{
    value
        .entries()
        .rev()
        .find(|(key, item)| pred(*item, key))
        .map(|(_, item)| item)
}

/// True unless the keys are exactly `0..n` in order.
pub fn is_assoc(value: &Value) -> bool {
    match value {
        Value::Map(map) => !is_sequential(map.keys()),
        _ => false,
    }
}

/// Extracts `value_path` from every item, optionally keyed by `key_path`.
///
/// Missing paths yield `Nil`. Later items win when two share a key.
pub fn pluck(value: &Value, value_path: &str, key_path: Option<&str>) -> Result<Value> {
    let Some(key_path) = key_path else {
        return Ok(value
            .entries()
            .map(|(_, item)| access::get_or(item, value_path, Value::Nil))
            .collect());
    };

    let mut results = Mapping::with_capacity(value.len());
    for (_, item) in value.entries() {
        let plucked = access::get_or(item, value_path, Value::Nil);
        let key = Key::from_value(&access::get_or(item, key_path, Value::Nil))?;
        results.insert(key, plucked);
    }
    Ok(Value::Map(results))
}

// ============================================================================
// ORDERING
// ============================================================================

/// The values of the container in random order.
///
/// The same seed always yields the same order.
pub fn shuffle(value: &Value, seed: Option<u64>) -> Value {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    shuffle_with(value, &mut rng)
}

pub fn shuffle_with<R: Rng + ?Sized>(value: &Value, rng: &mut R) -> Value {
    let mut items: Vec<Value> = value.entries().map(|(_, item)| item.clone()).collect();
    items.shuffle(rng);
    Value::List(items)
}

/// Stable sort by the value each entry yields under `sort_key`.
///
/// A map keeps its keys; a list is re-indexed.
pub fn sort_by<F>(value: &Value, mut sort_key: F) -> Value
where
    F: FnMut(&Value) -> Value,
{
    let mut decorated: Vec<(Value, Key, Value)> = value
        .entries()
        .map(|(key, item)| (sort_key(item), key, item.clone()))
        .collect();
    decorated.sort_by(|a, b| a.0.total_cmp(&b.0));
    rebuild(value, decorated.into_iter().map(|(_, key, item)| (key, item)))
}

/// Stable sort by the value found at `path` inside each entry.
pub fn sort_by_path(value: &Value, path: &str) -> Value {
    sort_by(value, |item| access::get_or(item, path, Value::Nil))
}

/// Sorts every level: maps with string keys by key, sequences by value.
pub fn sort_recursive(value: &Value) -> Value {
    if !value.is_accessible() {
        return value.clone();
    }
    let mut entries: Vec<(Key, Value)> = value
        .entries()
        .map(|(key, item)| (key, sort_recursive(item)))
        .collect();

    if is_assoc(value) {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Value::Map(entries.into_iter().collect())
    } else {
        let mut items: Vec<Value> = entries.into_iter().map(|(_, item)| item).collect();
        items.sort_by(Value::total_cmp);
        Value::List(items)
    }
}

/// Keeps the entries for which `pred(item, key)` holds.
///
/// A map keeps its keys; a list is re-indexed.
pub fn filter<F>(value: &Value, mut pred: F) -> Value
where
    F: FnMut(&Value, &Key) -> bool,
{
    let kept: Vec<(Key, Value)> = value
        .entries()
        .filter(|(key, item)| pred(*item, key))
        .map(|(key, item)| (key, item.clone()))
        .collect();
    rebuild(value, kept.into_iter())
}

fn rebuild(original: &Value, entries: impl Iterator<Item = (Key, Value)>) -> Value {
    match original {
        Value::List(_) => entries.map(|(_, item)| item).collect(),
        _ => entries.collect(),
    }
}

// ============================================================================
// SET OPERATIONS
// ============================================================================

/// Scalar values of `a` that do not occur in `b`, as keys, without duplicates.
pub fn diff(a: &Value, b: &Value) -> Vec<Key> {
    let mut remaining: IndexSet<Key> = scalar_keys(a).collect();
    for key in scalar_keys(b) {
        remaining.shift_remove(&key);
    }
    remaining.into_iter().collect()
}

/// Scalar values of `a` that also occur in `b`, as keys, without duplicates.
pub fn intersect(a: &Value, b: &Value) -> Vec<Key> {
    let other: IndexSet<Key> = scalar_keys(b).collect();
    let mut common: IndexSet<Key> = scalar_keys(a).collect();
    common.retain(|key| other.contains(key));
    common.into_iter().collect()
}

fn scalar_keys(value: &Value) -> impl Iterator<Item = Key> + '_ {
    value
        .entries()
        .filter_map(|(_, item)| Key::from_value(item).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_collapse_merges_lists_and_skips_scalars() {
        let value = doc(json!([[1, 2], "skip", [3], {"k": "v"}]));
        assert_eq!(collapse(&value), doc(json!({"0": 1, "1": 2, "2": 3, "k": "v"})));
        assert_eq!(collapse(&doc(json!([[1], [2, 3]]))), doc(json!([1, 2, 3])));
    }

    #[test]
    fn test_divide() {
        let (keys, values) = divide(&doc(json!({"a": 1, "b": 2})));
        assert_eq!(keys, vec![Key::from("a"), Key::from("b")]);
        assert_eq!(values, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_dot_flattens_and_keeps_empty_containers() {
        let flat = dot(&doc(json!({"a": {"b": {"c": 1}}, "d": [5, 6], "e": {}})), "");
        let expected: Mapping = [
            (Key::from("a.b.c"), Value::Int(1)),
            (Key::from("d.0"), Value::Int(5)),
            (Key::from("d.1"), Value::Int(6)),
            (Key::from("e"), doc(json!({}))),
        ]
        .into_iter()
        .collect();
        assert_eq!(flat, expected);
    }

    #[test]
    fn test_dot_with_prefix_and_delimiter() {
        let flat = dot_with(&doc(json!({"a": {"b": 1}})), "root/", '/');
        assert_eq!(flat.get(&Key::from("root/a/b")), Some(&Value::Int(1)));
    }

    #[test]
    fn test_flatten_depths() {
        let value = doc(json!([1, [2, [3, [4]]]]));
        assert_eq!(
            flatten(&value, None),
            vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
        );
        assert_eq!(
            flatten(&value, Some(1)),
            vec![Value::Int(1), Value::Int(2), doc(json!([3, [4]]))]
        );
    }

    #[test]
    fn test_first_and_last() {
        let value = doc(json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(first(&value), Some(&Value::Int(1)));
        assert_eq!(last(&value), Some(&Value::Int(3)));
        assert_eq!(
            first_where(&value, |v, _| v.as_i64() > Some(1)),
            Some(&Value::Int(2))
        );
        assert_eq!(
            last_where(&value, |_, k| *k != Key::from("c")),
            Some(&Value::Int(2))
        );
        assert_eq!(first(&Value::Nil), None);
    }

    #[test]
    fn test_is_assoc() {
        assert!(!is_assoc(&doc(json!([1, 2]))));
        assert!(!is_assoc(&doc(json!({"0": "a", "1": "b"}))));
        assert!(is_assoc(&doc(json!({"1": "a"}))));
        assert!(is_assoc(&doc(json!({"a": 1}))));
    }

    #[test]
    fn test_prepend() {
        assert_eq!(prepend(&doc(json!([2, 3])), Value::Int(1), None), doc(json!([1, 2, 3])));
        assert_eq!(
            prepend(&doc(json!({"b": 2, "a": 0})), Value::Int(1), Some(Key::from("a"))),
            doc(json!({"a": 1, "b": 2}))
        );
        let keyed = prepend(&doc(json!({"b": 2})), Value::Int(1), Some(Key::from("a")));
        assert_eq!(first(&keyed), Some(&Value::Int(1)));
    }

    #[test]
    fn test_pluck() {
        let users = doc(json!([
            {"id": 1, "profile": {"name": "ada"}},
            {"id": 2, "profile": {"name": "bob"}},
            {"id": 3}
        ]));
        assert_eq!(
            pluck(&users, "profile.name", None).unwrap(),
            doc(json!(["ada", "bob", null]))
        );
        assert_eq!(
            pluck(&users, "profile.name", Some("id")).unwrap(),
            doc(json!({"1": "ada", "2": "bob", "3": null}))
        );
        assert!(pluck(&users, "id", Some("profile")).is_err());
    }

    #[test]
    fn test_shuffle_is_deterministic_with_seed() {
        let value = doc(json!([1, 2, 3, 4, 5, 6, 7, 8]));
        let a = shuffle(&value, Some(42));
        let b = shuffle(&value, Some(42));
        assert_eq!(a, b);
        let mut sorted = flatten(&a, None);
        sorted.sort_by(Value::total_cmp);
        assert_eq!(Value::List(sorted), value);
    }

    #[test]
    fn test_sort_by_path_keeps_map_keys() {
        let value = doc(json!({"x": {"age": 30}, "y": {"age": 20}}));
        let sorted = sort_by_path(&value, "age");
        let keys: Vec<Key> = sorted.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![Key::from("y"), Key::from("x")]);
    }

    #[test]
    fn test_sort_by_reindexes_lists() {
        let sorted = sort_by(&doc(json!([3, 1, 2])), Value::clone);
        assert_eq!(sorted, doc(json!([1, 2, 3])));
    }

    #[test]
    fn test_sort_recursive() {
        let value = doc(json!({"b": [3, 1], "a": {"d": 1, "c": 2}}));
        let sorted = sort_recursive(&value);
        let keys: Vec<Key> = sorted.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![Key::from("a"), Key::from("b")]);
        assert_eq!(access::get(&sorted, "b"), Some(&doc(json!([1, 3]))));
        let inner: Vec<Key> = access::get(&sorted, "a").unwrap().entries().map(|(k, _)| k).collect();
        assert_eq!(inner, vec![Key::from("c"), Key::from("d")]);
    }

    #[test]
    fn test_filter() {
        let evens = filter(&doc(json!([1, 2, 3, 4])), |v, _| v.as_i64().map_or(false, |n| n % 2 == 0));
        assert_eq!(evens, doc(json!([2, 4])));
        let named = filter(&doc(json!({"a": 1, "b": 2})), |_, k| *k == Key::from("b"));
        assert_eq!(named, doc(json!({"b": 2})));
    }

    #[test]
    fn test_diff_and_intersect() {
        let a = doc(json!(["a", "b", "b", 1, [9]]));
        let b = doc(json!(["b", "1"]));
        assert_eq!(diff(&a, &b), vec![Key::from("a")]);
        assert_eq!(intersect(&a, &b), vec![Key::from("b"), Key::Int(1)]);
    }
}
