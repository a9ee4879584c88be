//! Dot-notation access into nested documents.
//!
//! Every operation addresses a value by a delimited path such as `"a.b.c"`.
//! A path that names a top-level key literally (`"a.b"` stored as one key)
//! is matched exactly before it is split into segments.
//!
//! Reads never fail: a missing path yields `None` or the caller's default.
//! Writes never fail either: missing or scalar intermediates are replaced by
//! empty maps on the way down.
//!
//! The free functions use the default `.` delimiter; build an [`Accessor`]
//! to use another one.

use crate::path::{Path, DEFAULT_DELIMITER};
use crate::value::{Key, Mapping, Value};

// ============================================================================
// ACCESSOR: delimiter-aware path operations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessor {
    delimiter: char,
}

impl Accessor {
    pub const fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn split(&self, path: &str) -> Path {
        Path::split(path, self.delimiter)
    }

    /// Reads the value at `path`.
    ///
    /// An empty path returns `root` itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotarr::{Accessor, Value};
    /// use serde_json::json;
    ///
    /// let doc = Value::from(json!({"user": {"name": "ada"}}));
    /// let slash = Accessor::new('/');
    /// assert_eq!(slash.get(&doc, "user/name"), Some(&Value::from("ada")));
    /// assert_eq!(slash.get(&doc, "user/age"), None);
    /// ```
    pub fn get<'a>(&self, root: &'a Value, path: &str) -> Option<&'a Value> {
        if path.is_empty() {
            return Some(root);
        }
        if let Some(exact) = root.get_key(&Key::parse(path)) {
            return Some(exact);
        }
        descend(root, &self.split(path).keys())
    }

    /// Reads the value at `path`, or `default` when it does not resolve.
    pub fn get_or(&self, root: &Value, path: &str, default: Value) -> Value {
        self.get(root, path).cloned().unwrap_or(default)
    }

    /// Like [`Accessor::get_or`], evaluating the default only when needed.
    pub fn get_or_else<F>(&self, root: &Value, path: &str, default: F) -> Value
    where
        F: FnOnce() -> Value,
    {
        self.get(root, path).cloned().unwrap_or_else(default)
    }

    /// Writes `value` at `path`, creating intermediate maps as needed.
    ///
    /// Intermediates that exist but hold scalars are overwritten with empty
    /// maps. An empty path replaces `root` entirely. Returns `root`.
    pub fn set<'a>(&self, root: &'a mut Value, path: &str, value: Value) -> &'a mut Value {
        if path.is_empty() {
            *root = value;
            return root;
        }
        let keys = self.split(path).keys();
        let Some((last, parents)) = keys.split_last() else {
            return root;
        };

        let mut current = &mut *root;
        for key in parents {
            let next = current.slot(key.clone());
            if !next.is_accessible() {
                *next = Value::Map(Mapping::new());
            }
            current = next;
        }
        current.insert_key(last.clone(), value);
        root
    }

    /// Writes `value` at `path` only if nothing (or `Nil`) is stored there.
    pub fn add<'a>(&self, root: &'a mut Value, path: &str, value: Value) -> &'a mut Value {
        if self.get(root, path).map_or(true, Value::is_nil) {
            self.set(root, path, value);
        }
        root
    }

    /// True when every one of `paths` resolves.
    ///
    /// An empty document or an empty set of paths is never "had". A key
    /// holding `Nil` counts as present.
    pub fn has<I, S>(&self, root: &Value, paths: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if root.is_empty() {
            return false;
        }
        let mut requested = 0usize;
        for path in paths {
            requested += 1;
            let path = path.as_ref();
            if root.contains_key(&Key::parse(path)) {
                continue;
            }
            if descend(root, &self.split(path).keys()).is_none() {
                return false;
            }
        }
        requested > 0
    }

    /// Removes every one of `paths`; paths that do not resolve are skipped.
    pub fn forget<I, S>(&self, root: &mut Value, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for path in paths {
            let path = path.as_ref();
            let exact = Key::parse(path);
            if root.contains_key(&exact) {
                root.remove_key(&exact);
                continue;
            }

            let keys = self.split(path).keys();
            let Some((last, parents)) = keys.split_last() else {
                continue;
            };
            if let Some(parent) = descend_mut(root, parents) {
                parent.remove_key(last);
            }
        }
    }

    /// Reads the value at `path` and removes it.
    pub fn pull(&self, root: &mut Value, path: &str, default: Value) -> Value {
        let value = self.get_or(root, path, default);
        self.forget(root, [path]);
        value
    }

    /// Keeps only the given top-level keys, in the document's order.
    ///
    /// Dotted paths are not followed here.
    pub fn only<I, S>(&self, root: &Value, keys: I) -> Value
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: Vec<Key> = keys.into_iter().map(|k| Key::parse(k.as_ref())).collect();
        root.entries()
            .filter(|(key, _)| wanted.contains(key))
            .map(|(key, value)| (key, value.clone()))
            .collect()
    }

    /// A copy of `root` without the given paths.
    pub fn except<I, S>(&self, root: &Value, paths: I) -> Value
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut copy = root.clone();
        self.forget(&mut copy, paths);
        copy
    }

    /// True when `key` is a top-level key of `root`.
    pub fn exists(&self, root: &Value, key: &str) -> bool {
        root.contains_key(&Key::parse(key))
    }
}

impl Default for Accessor {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

/// Walks `keys` one level at a time from `root`.
fn descend<'a>(root: &'a Value, keys: &[Key]) -> Option<&'a Value> {
    let mut current = root;
    for key in keys {
        let Some(value) = current.get_key(key) else {
            return None;
        };
        current = value;
    }
    Some(current)
}

/// Walks `keys` by mutable reference, stopping at anything that is not a list or map.
fn descend_mut<'a>(root: &'a mut Value, keys: &[Key]) -> Option<&'a mut Value> {
    let mut current = root;
    for key in keys {
        current = current.get_key_mut(key).filter(|v| v.is_accessible())?;
    }
    Some(current)
}

// ============================================================================
// FREE FUNCTIONS: default-delimiter shorthands
// ============================================================================

const DEFAULT: Accessor = Accessor::new(DEFAULT_DELIMITER);

/// True for values that can be addressed by key (lists and maps).
pub fn accessible(value: &Value) -> bool {
    value.is_accessible()
}

pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    DEFAULT.get(root, path)
}

pub fn get_or(root: &Value, path: &str, default: Value) -> Value {
    DEFAULT.get_or(root, path, default)
}

pub fn get_or_else<F: FnOnce() -> Value>(root: &Value, path: &str, default: F) -> Value {
    DEFAULT.get_or_else(root, path, default)
}

pub fn set<'a>(root: &'a mut Value, path: &str, value: Value) -> &'a mut Value {
    DEFAULT.set(root, path, value)
}

pub fn add<'a>(root: &'a mut Value, path: &str, value: Value) -> &'a mut Value {
    DEFAULT.add(root, path, value)
}

pub fn has<I, S>(root: &Value, paths: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT.has(root, paths)
}

pub fn forget<I, S>(root: &mut Value, paths: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT.forget(root, paths)
}

pub fn pull(root: &mut Value, path: &str, default: Value) -> Value {
    DEFAULT.pull(root, path, default)
}

pub fn only<I, S>(root: &Value, keys: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT.only(root, keys)
}

pub fn except<I, S>(root: &Value, paths: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT.except(root, paths)
}

pub fn exists(root: &Value, key: &str) -> bool {
    DEFAULT.exists(root, key)
}
