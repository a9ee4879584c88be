//! Attribute hydration for plain structs through explicit field tables.
//!
//! An [`Entity`] lists its attributes once, as a static table of [`Field`]s
//! pairing a name with a getter and a setter. Name-based access
//! (`set_attribute("first_name", ..)`) resolves through that table, so no
//! runtime reflection is involved and every accessor is type-checked.
//!
//! ```rust
//! use dotarr::entity::{expect_int, expect_string, Entity, Field};
//! use dotarr::{Result, Value};
//! use serde_json::json;
//!
//! #[derive(Default)]
//! struct Tag {
//!     id: i64,
//!     label: String,
//! }
//!
//! fn id(t: &Tag) -> Value { Value::Int(t.id) }
//! fn set_id(t: &mut Tag, v: Value) -> Result<()> { t.id = expect_int("id", v)?; Ok(()) }
//! fn label(t: &Tag) -> Value { Value::from(t.label.as_str()) }
//! fn set_label(t: &mut Tag, v: Value) -> Result<()> { t.label = expect_string("label", v)?; Ok(()) }
//!
//! impl Entity for Tag {
//!     const NAME: &'static str = "Tag";
//!     fn fields() -> &'static [Field<Self>] {
//!         const FIELDS: &[Field<Tag>] = &[
//!             Field::new("id", Some(id), Some(set_id)),
//!             Field::new("label", Some(label), Some(set_label)),
//!         ];
//!         FIELDS
//!     }
//! }
//!
//! let mut tag = Tag::default();
//! tag.from_native(&Value::from(json!({"id": 3, "label": "rust"}))).unwrap();
//! assert_eq!(tag.label, "rust");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{DotError, Result};
use crate::value::{Key, Mapping, Value};

pub type Getter<E> = fn(&E) -> Value;
pub type Setter<E> = fn(&mut E, Value) -> Result<()>;

/// One named attribute of an entity.
pub struct Field<E> {
    pub name: &'static str,
    pub get: Option<Getter<E>>,
    pub set: Option<Setter<E>>,
}

impl<E> Field<E> {
    pub const fn new(name: &'static str, get: Option<Getter<E>>, set: Option<Setter<E>>) -> Self {
        Self { name, get, set }
    }

    pub const fn read_only(name: &'static str, get: Getter<E>) -> Self {
        Self {
            name,
            get: Some(get),
            set: None,
        }
    }
}

pub trait Entity: Sized + 'static {
    /// Model name used in error messages.
    const NAME: &'static str;

    fn fields() -> &'static [Field<Self>];

    /// Resolves `name` exactly, then as its lower camel case form
    /// (`first_name` finds `firstName`).
    fn field(name: &str) -> Option<&'static Field<Self>> {
        let fields = Self::fields();
        fields.iter().find(|f| f.name == name).or_else(|| {
            let camel = lcfirst(&camelize(name, '_'));
            fields.iter().find(|f| f.name == camel)
        })
    }

    fn has_attribute(name: &str) -> bool {
        Self::field(name).is_some()
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> Result<&mut Self> {
        let field = Self::field(name).ok_or_else(|| DotError::UnknownAttribute {
            attribute: name.to_string(),
            entity: Self::NAME,
        })?;
        let setter = field.set.ok_or_else(|| DotError::MissingSetter {
            setter: format!("set{}", camelize(name, '_')),
            entity: Self::NAME,
        })?;
        setter(self, value)?;
        Ok(self)
    }

    /// Reads an attribute by its exact table name.
    fn get_attribute(&self, name: &str) -> Result<Value> {
        let field = Self::fields()
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| DotError::UnknownAttribute {
                attribute: name.to_string(),
                entity: Self::NAME,
            })?;
        let getter = field.get.ok_or_else(|| DotError::MissingGetter {
            getter: format!("get{}", camelize(name, '_')),
            entity: Self::NAME,
        })?;
        Ok(getter(self))
    }

    /// Sets every attribute present in `attributes`; stops at the first failure.
    fn from_native(&mut self, attributes: &Value) -> Result<&mut Self> {
        for (key, value) in attributes.entries() {
            self.set_attribute(&key.to_string(), value.clone())?;
        }
        Ok(self)
    }

    /// Reads every attribute of the table into a map, optionally with
    /// snake_case keys.
    fn to_native(&self, underscore_keys: bool) -> Result<Value> {
        let mut data = Mapping::with_capacity(Self::fields().len());
        for field in Self::fields() {
            let key = if underscore_keys {
                underscore(field.name)
            } else {
                field.name.to_string()
            };
            data.insert(Key::parse(&key), self.get_attribute(field.name)?);
        }
        Ok(Value::Map(data))
    }
}

// ============================================================================
// ARRAYABLE / JSONABLE
// ============================================================================

/// Types that can present themselves as a document.
pub trait Arrayable {
    fn to_array(&self) -> Value;
}

/// Types that can encode themselves as JSON.
pub trait Jsonable {
    fn to_json(&self, pretty: bool) -> Result<String>;
}

impl Arrayable for Value {
    fn to_array(&self) -> Value {
        self.clone()
    }
}

impl<T: Arrayable + ?Sized> Jsonable for T {
    fn to_json(&self, pretty: bool) -> Result<String> {
        let value = self.to_array();
        let encoded = if pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        encoded.map_err(|e| DotError::Encode {
            source: Box::new(e),
        })
    }
}

// ============================================================================
// NAME CONVERSION
// ============================================================================

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^A-Z])([A-Z])").expect("camel case boundary pattern is valid"));

/// `first_name` -> `FirstName`.
pub fn camelize(input: &str, separator: char) -> String {
    input.split(separator).map(ucfirst).collect()
}

/// `firstName` -> `first_name`.
pub fn underscore(input: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(input, "${1}_${2}")
        .to_lowercase()
}

fn ucfirst(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lcfirst(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// SETTER HELPERS
// ============================================================================

fn mismatch(attribute: &str, expected: &'static str, value: &Value) -> DotError {
    DotError::TypeMismatch {
        attribute: attribute.to_string(),
        expected,
        actual: value.type_name(),
    }
}

pub fn expect_string(attribute: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(mismatch(attribute, "String", &other)),
    }
}

pub fn expect_int(attribute: &str, value: Value) -> Result<i64> {
    value.as_i64().ok_or_else(|| mismatch(attribute, "Int", &value))
}

/// Accepts ints as well as floats.
pub fn expect_float(attribute: &str, value: Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| mismatch(attribute, "Float", &value))
}

pub fn expect_bool(attribute: &str, value: Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| mismatch(attribute, "Bool", &value))
}
