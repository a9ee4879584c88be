pub use crate::access::Accessor;
pub use crate::diagnostics::{DotError, ErrorType, Result};
pub use crate::path::{Path, DEFAULT_DELIMITER};
pub use crate::value::{Key, Mapping, Value};

pub mod access;
pub mod cli;
pub mod collection;
pub mod diagnostics;
pub mod entity;
pub mod path;
pub mod reshape;
pub mod value;
