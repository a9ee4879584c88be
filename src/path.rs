//! A canonical, type-safe representation of a path into a nested document.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value::Key;

/// The default segment delimiter.
pub const DEFAULT_DELIMITER: char = '.';

/// A key string split into its segments.
///
/// # Examples
///
/// ```rust
/// use dotarr::Path;
/// let path = Path::split("user.address.city", '.');
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "user.address.city");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path(pub Vec<String>);

impl Path {
    pub fn split(raw: &str, delimiter: char) -> Self {
        Path(raw.split(delimiter).map(str::to_string).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The segments as mapping keys.
    pub fn keys(&self) -> Vec<Key> {
        self.0.iter().map(|segment| Key::parse(segment)).collect()
    }

    /// Joins the segments back together with `delimiter`.
    pub fn join(&self, delimiter: char) -> String {
        let mut buf = [0u8; 4];
        self.0.join(&*delimiter.encode_utf8(&mut buf))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(DEFAULT_DELIMITER))
    }
}
