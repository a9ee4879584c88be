//! The dotarr Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::io::Read;
use std::path::Path;
use std::{fs, io, process};

use clap::Parser;

use crate::access::Accessor;
use crate::cli::args::{Command, DotArgs};
use crate::cli::output::Printer;
use crate::collection::dot_with;
use crate::diagnostics::{to_error_source, DotError, Result};
use crate::reshape::filter_recursive;
use crate::value::Value;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> miette::Result<()> {
    let args = DotArgs::parse();
    let succeeded = execute(&args)?;
    if !succeeded {
        process::exit(1);
    }
    Ok(())
}

/// Runs one subcommand. Returns `false` when the answer was negative.
pub fn execute(args: &DotArgs) -> Result<bool> {
    let accessor = Accessor::new(args.delimiter);
    let printer = Printer::new(args.format, args.compact);

    match &args.command {
        Command::Get {
            document,
            path,
            default,
        } => {
            let doc = load_document(document)?;
            let default = default.as_deref().map_or(Value::Nil, parse_literal);
            printer.value(&accessor.get_or(&doc, path, default))?;
        }
        Command::Set {
            document,
            path,
            value,
        } => {
            let mut doc = load_document(document)?;
            accessor.set(&mut doc, path, parse_literal(value));
            printer.value(&doc)?;
        }
        Command::Has { document, paths } => {
            let doc = load_document(document)?;
            let found = accessor.has(&doc, paths);
            printer.status(found);
            return Ok(found);
        }
        Command::Forget { document, paths } => {
            let mut doc = load_document(document)?;
            accessor.forget(&mut doc, paths);
            printer.value(&doc)?;
        }
        Command::Pull { document, path } => {
            let mut doc = load_document(document)?;
            let pulled = accessor.pull(&mut doc, path, Value::Nil);
            printer.value(&pulled)?;
            printer.value(&doc)?;
        }
        Command::Only { document, keys } => {
            let doc = load_document(document)?;
            printer.value(&accessor.only(&doc, keys))?;
        }
        Command::Except { document, paths } => {
            let doc = load_document(document)?;
            printer.value(&accessor.except(&doc, paths))?;
        }
        Command::Dot { document, prepend } => {
            let doc = load_document(document)?;
            let flat = dot_with(&doc, prepend, accessor.delimiter());
            printer.value(&Value::Map(flat))?;
        }
        Command::Filter { document, template } => {
            let doc = load_document(document)?;
            let template = load_document(template)?;
            printer.value(&filter_recursive(&doc, &template)?)?;
        }
    }
    Ok(true)
}

/// Reads and decodes a document; `-` reads JSON from standard input.
pub fn load_document(path: &Path) -> Result<Value> {
    let io_error = |source: io::Error| DotError::Io {
        path: path.to_path_buf(),
        source,
    };
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(io_error)?;
        text
    } else {
        fs::read_to_string(path).map_err(io_error)?
    };
    let name = path.display().to_string();

    if is_yaml(path) {
        serde_yaml::from_str(&text).map_err(|e| match e.location() {
            Some(loc) => DotError::parse_at("YAML", e.to_string(), &name, &text, loc.line(), loc.column()),
            None => DotError::Parse {
                format: "YAML",
                message: e.to_string(),
                src: Some(to_error_source(&name, &text)),
                span: None,
            },
        })
    } else {
        serde_json::from_str(&text)
            .map_err(|e| DotError::parse_at("JSON", e.to_string(), &name, &text, e.line(), e.column()))
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}

/// Reads a command-line value as JSON, falling back to a plain string.
pub fn parse_literal(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        assert_eq!(parse_literal("42"), Value::Int(42));
        assert_eq!(parse_literal(r#"{"a":true}"#), Value::from(serde_json::json!({"a": true})));
        assert_eq!(parse_literal("plain text"), Value::from("plain text"));
    }

    #[test]
    fn test_is_yaml() {
        assert!(is_yaml(Path::new("doc.yml")));
        assert!(is_yaml(Path::new("conf/doc.yaml")));
        assert!(!is_yaml(Path::new("doc.json")));
        assert!(!is_yaml(Path::new("-")));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_document(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, DotError::Io { .. }));
    }
}
