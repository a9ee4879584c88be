//! Document model for nested key/value data.
//!
//! A [`Value`] is a scalar, a sequence ([`Value::List`]) or a keyed mapping
//! ([`Value::Map`]). Lists and maps are both *accessible*: they can be
//! addressed by [`Key`]s and descended into by the accessor functions.
//! Values are deeply compositional: lists and maps can contain any other value.

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::diagnostics::{DotError, Result};

/// Insertion-ordered mapping used for every [`Value::Map`].
pub type Mapping = IndexMap<Key, Value>;

// ============================================================================
// KEY: integer or string key of a mapping level
// ============================================================================

/// A key inside a [`Mapping`].
///
/// Strings holding the canonical decimal form of an integer are normalised
/// to [`Key::Int`], so `"3"` and `3` address the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Builds a key from raw text, normalising canonical integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotarr::Key;
    /// assert_eq!(Key::parse("7"), Key::Int(7));
    /// assert_eq!(Key::parse("-3"), Key::Int(-3));
    /// assert_eq!(Key::parse("07"), Key::Str("07".to_string()));
    /// assert_eq!(Key::parse("a.b"), Key::Str("a.b".to_string()));
    /// ```
    pub fn parse(raw: &str) -> Self {
        if is_canonical_int(raw) {
            if let Ok(n) = raw.parse::<i64>() {
                return Key::Int(n);
            }
        }
        Key::Str(raw.to_string())
    }

    /// Converts a scalar value into the key it would occupy.
    ///
    /// `Nil` becomes the empty string, booleans become `0`/`1` and floats are
    /// truncated. Lists and maps cannot be keys.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Nil => Ok(Key::Str(String::new())),
            Value::Bool(b) => Ok(Key::Int(i64::from(*b))),
            Value::Int(n) => Ok(Key::Int(*n)),
            Value::Float(f) => Ok(Key::Int(f.trunc() as i64)),
            Value::String(s) => Ok(Key::parse(s)),
            other => Err(DotError::InvalidKey {
                type_name: other.type_name(),
            }),
        }
    }

    /// True for integer keys and for string keys that read as a number.
    pub fn is_numeric(&self) -> bool {
        match self {
            Key::Int(_) => true,
            Key::Str(s) => is_numeric_str(s),
        }
    }

    /// The list position this key addresses, if any.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Int(n) => usize::try_from(*n).ok(),
            Key::Str(_) => None,
        }
    }
}

fn is_canonical_int(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    // "-0" stays a string key
    !(digits.len() != raw.len() && digits == "0")
}

fn is_numeric_str(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty()
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
        && trimmed.parse::<f64>().is_ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{}", n),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Key {
    fn from(raw: &str) -> Self {
        Key::parse(raw)
    }
}

impl From<String> for Key {
    fn from(raw: String) -> Self {
        Key::parse(&raw)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Int(n as i64)
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Key::Int(n) => serializer.serialize_i64(*n),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or integer key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Key, E> {
                Ok(Key::parse(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Key, E> {
                Ok(Key::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Key, E> {
                Ok(i64::try_from(v).map_or_else(|_| Key::Str(v.to_string()), Key::Int))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Key, E> {
                Ok(Key::Int(v.trunc() as i64))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Key, E> {
                Ok(Key::Int(i64::from(v)))
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Key, E> {
                Ok(Key::Str(String::new()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

// ============================================================================
// VALUE: scalars, lists and maps
// ============================================================================

/// A node of a nested document.
///
/// # Examples
///
/// ```rust
/// use dotarr::Value;
/// let n = Value::Int(3);
/// assert_eq!(n.type_name(), "Int");
/// let s = Value::from("hello");
/// assert_eq!(s.type_name(), "String");
/// let nil = Value::default();
/// assert!(nil.is_nil());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Mapping),
}

impl Value {
    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "Nil",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
        }
    }

    /// Returns true if the value is Nil.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotarr::Value;
    /// assert!(Value::Nil.is_nil());
    /// assert!(!Value::Int(1).is_nil());
    /// ```
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric value of an `Int` or `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// True for values that can be addressed by key: lists and maps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotarr::Value;
    /// assert!(Value::List(vec![]).is_accessible());
    /// assert!(!Value::from("text").is_accessible());
    /// ```
    pub fn is_accessible(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Number of entries of a list or map; scalars have none.
    pub fn len(&self) -> usize {
        match self {
            Value::List(items) => items.len(),
            Value::Map(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ------------------------------------------------------------------------
    // Single-level key access
    // ------------------------------------------------------------------------

    /// Looks up one key at this level.
    pub fn get_key(&self, key: &Key) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            Value::List(items) => key.as_index().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    pub fn get_key_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match self {
            Value::Map(map) => map.get_mut(key),
            Value::List(items) => key.as_index().and_then(move |i| items.get_mut(i)),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.get_key(key).is_some()
    }

    /// Returns the slot stored under `key`, creating it as `Nil` if absent.
    ///
    /// A list accepts the key in place when it addresses an existing element
    /// or the position right after the last one. Any other key turns the list
    /// into a map keyed by the old indices. A scalar is replaced by an empty
    /// map.
    pub fn slot(&mut self, key: Key) -> &mut Value {
        let list_index = match (&*self, key.as_index()) {
            (Value::List(items), Some(i)) if i <= items.len() => Some(i),
            _ => None,
        };
        match (self, list_index) {
            (Value::List(items), Some(i)) => {
                if i == items.len() {
                    items.push(Value::Nil);
                }
                &mut items[i]
            }
            (value, _) => value.promote().entry(key).or_default(),
        }
    }

    /// Stores `value` under `key` at this level.
    pub fn insert_key(&mut self, key: Key, value: Value) {
        *self.slot(key) = value;
    }

    /// Removes `key` from this level.
    ///
    /// Popping the last list element keeps a list; removing any other element
    /// turns the list into a map so the remaining elements keep their indices.
    pub fn remove_key(&mut self, key: &Key) -> Option<Value> {
        if let Value::List(items) = self {
            let index = key.as_index().filter(|i| *i < items.len())?;
            if index + 1 == items.len() {
                return items.pop();
            }
        }
        if matches!(self, Value::List(_)) {
            return self.promote().shift_remove(key);
        }
        match self {
            Value::Map(map) => map.shift_remove(key),
            _ => None,
        }
    }

    /// Turns this value into a map in place and returns it.
    fn promote(&mut self) -> &mut Mapping {
        if !matches!(self, Value::Map(_)) {
            let map = match std::mem::take(self) {
                Value::List(items) => indexed(items),
                _ => Mapping::new(),
            };
            *self = Value::Map(map);
        }
        match self {
            Value::Map(map) => map,
            _ => unreachable!("value was promoted to a map above"),
        }
    }

    /// Iterates `(key, value)` pairs; list entries are keyed by position.
    pub fn entries(&self) -> Entries<'_> {
        match self {
            Value::List(items) => Entries::List(items.iter().enumerate()),
            Value::Map(map) => Entries::Map(map.iter()),
            _ => Entries::Empty,
        }
    }

    /// Builds a list when `map` is keyed exactly `0..n` in order, else a map.
    pub fn compact(map: Mapping) -> Value {
        if is_sequential(map.keys()) {
            Value::List(map.into_values().collect())
        } else {
            Value::Map(map)
        }
    }

    // ------------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------------

    /// A total order used for sorting.
    ///
    /// Types rank `Nil < Bool < number < String < List < Map`; ints and
    /// floats compare numerically.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Nil, Value::Nil) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| x.total_cmp(y))
                .find(|o| o.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            (Value::Map(a), Value::Map(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.iter()
                    .zip(b.iter())
                    .map(|((ka, va), (kb, vb))| ka.cmp(kb).then_with(|| va.total_cmp(vb)))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.rank().cmp(&b.rank()),
            },
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Nil => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::String(_) => 3,
            Value::List(_) => 4,
            Value::Map(_) => 5,
        }
    }
}

fn indexed(items: Vec<Value>) -> Mapping {
    items
        .into_iter()
        .enumerate()
        .map(|(i, v)| (Key::from(i), v))
        .collect()
}

pub(crate) fn is_sequential<'a>(keys: impl Iterator<Item = &'a Key>) -> bool {
    keys.enumerate()
        .all(|(i, key)| matches!(key, Key::Int(n) if *n == i as i64))
}

/// Iterator over the entries of a list or map.
pub enum Entries<'a> {
    List(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Map(indexmap::map::Iter<'a, Key, Value>),
    Empty,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::List(it) => it.next().map(|(i, v)| (Key::from(i), v)),
            Entries::Map(it) => it.next().map(|(k, v)| (k.clone(), v)),
            Entries::Empty => None,
        }
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            Entries::List(it) => it.next_back().map(|(i, v)| (Key::from(i), v)),
            Entries::Map(it) => it.next_back().map(|(k, v)| (k.clone(), v)),
            Entries::Empty => None,
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Map(map)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(n) => Value::Int(n),
            Key::Str(s) => Value::String(s),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(object) => Value::Map(
                object
                    .into_iter()
                    .map(|(k, v)| (Key::parse(&k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl FromIterator<(Key, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().collect())
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

// ============================================================================
// SERDE
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items),
            Value::Map(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("any document value")
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
                Ok(Value::Nil)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
                Ok(Value::Nil)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Value, D::Error> {
                Value::deserialize(d)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Value, E> {
                Ok(Value::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Value, E> {
                Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Value, E> {
                Ok(Value::Float(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Value, E> {
                Ok(Value::String(v))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Value, A::Error> {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::List(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Value, A::Error> {
                let mut map = Mapping::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<Key, Value>()? {
                    map.insert(key, value);
                }
                Ok(Value::Map(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
            container => {
                let text = serde_json::to_string(container).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_normalisation() {
        assert_eq!(Key::parse("0"), Key::Int(0));
        assert_eq!(Key::parse("42"), Key::Int(42));
        assert_eq!(Key::parse("-0"), Key::Str("-0".to_string()));
        assert_eq!(Key::parse("+1"), Key::Str("+1".to_string()));
        assert_eq!(Key::parse(""), Key::Str(String::new()));
        assert_eq!(Key::parse("99999999999999999999"), Key::Str("99999999999999999999".to_string()));
    }

    #[test]
    fn test_key_is_numeric() {
        assert!(Key::Int(3).is_numeric());
        assert!(Key::parse("1.5").is_numeric());
        assert!(Key::parse("1e3").is_numeric());
        assert!(!Key::parse("x1").is_numeric());
        assert!(!Key::parse("inf").is_numeric());
    }

    #[test]
    fn test_key_from_value() {
        assert_eq!(Key::from_value(&Value::Bool(true)).unwrap(), Key::Int(1));
        assert_eq!(Key::from_value(&Value::Float(2.9)).unwrap(), Key::Int(2));
        assert_eq!(Key::from_value(&Value::Nil).unwrap(), Key::Str(String::new()));
        assert!(matches!(
            Key::from_value(&Value::List(vec![])),
            Err(DotError::InvalidKey { type_name: "List" })
        ));
    }

    #[test]
    fn test_from_json_normalises_object_keys() {
        let value = Value::from(json!({"0": "zero", "name": "n"}));
        assert_eq!(value.get_key(&Key::Int(0)), Some(&Value::from("zero")));
        assert_eq!(value.get_key(&Key::from("name")), Some(&Value::from("n")));
    }

    #[test]
    fn test_slot_appends_to_list() {
        let mut list = Value::from(json!([1, 2]));
        list.insert_key(Key::Int(2), Value::Int(3));
        assert_eq!(list, Value::from(json!([1, 2, 3])));
    }

    #[test]
    fn test_slot_promotes_list_on_gap() {
        let mut list = Value::from(json!([1]));
        list.insert_key(Key::Int(5), Value::Int(6));
        let Value::Map(map) = &list else {
            panic!("expected a map, got {}", list.type_name());
        };
        assert_eq!(map.get(&Key::Int(0)), Some(&Value::Int(1)));
        assert_eq!(map.get(&Key::Int(5)), Some(&Value::Int(6)));
    }

    #[test]
    fn test_slot_replaces_scalar() {
        let mut scalar = Value::from("text");
        scalar.insert_key(Key::from("a"), Value::Int(1));
        assert_eq!(scalar, Value::from(json!({"a": 1})));
    }

    #[test]
    fn test_remove_key_from_list() {
        let mut list = Value::from(json!(["a", "b", "c"]));
        assert_eq!(list.remove_key(&Key::Int(2)), Some(Value::from("c")));
        assert_eq!(list, Value::from(json!(["a", "b"])));

        assert_eq!(list.remove_key(&Key::Int(0)), Some(Value::from("a")));
        assert_eq!(list.get_key(&Key::Int(1)), Some(&Value::from("b")));
        assert_eq!(list.get_key(&Key::Int(0)), None);
    }

    #[test]
    fn test_compact() {
        let seq: Mapping = [(Key::Int(0), Value::Int(1)), (Key::Int(1), Value::Int(2))]
            .into_iter()
            .collect();
        assert_eq!(Value::compact(seq), Value::from(json!([1, 2])));

        let gap: Mapping = [(Key::Int(1), Value::Int(2))].into_iter().collect();
        assert!(matches!(Value::compact(gap), Value::Map(_)));
    }

    #[test]
    fn test_total_cmp_mixes_numbers() {
        assert_eq!(Value::Int(2).total_cmp(&Value::Float(1.5)), Ordering::Greater);
        assert_eq!(Value::Nil.total_cmp(&Value::Bool(false)), Ordering::Less);
        assert_eq!(Value::from("a").total_cmp(&Value::Int(100)), Ordering::Greater);
    }

    #[test]
    fn test_serde_roundtrip_through_yaml() {
        let value = Value::from(json!({"a": {"b": [1, 2.5, null, true]}}));
        let text = serde_yaml::to_string(&value).unwrap();
        let back: Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("x").to_string(), "x");
        assert_eq!(Value::from(json!({"a": [1]})).to_string(), r#"{"a":[1]}"#);
    }
}
