//! Defines the command-line arguments and subcommands for the dotarr CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "dotarr",
    version,
    about = "Dot-notation access and reshaping for JSON and YAML documents."
)]
pub struct DotArgs {
    /// Character separating the segments of a path.
    #[arg(long, short = 'd', global = true, default_value_t = '.')]
    pub delimiter: char,

    /// Encoding used for printed documents.
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print JSON on a single line.
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// An enumeration of all available CLI subcommands.
///
/// Every `document` is a file path (`.yaml`/`.yml` read as YAML, anything
/// else as JSON) or `-` for JSON on standard input.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the value at a path.
    Get {
        document: PathBuf,
        path: String,
        /// Printed when the path does not resolve (JSON, or a plain string).
        #[arg(long)]
        default: Option<String>,
    },
    /// Write a value at a path and print the document.
    Set {
        document: PathBuf,
        path: String,
        /// The value to store (JSON, or a plain string).
        value: String,
    },
    /// Check that every path resolves; exits with 1 when one does not.
    Has {
        document: PathBuf,
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Remove paths and print the document.
    Forget {
        document: PathBuf,
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the value at a path, then the document without it.
    Pull { document: PathBuf, path: String },
    /// Keep only the given top-level keys.
    Only {
        document: PathBuf,
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Drop the given paths from a copy of the document.
    Except {
        document: PathBuf,
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Flatten the document into delimiter-joined keys.
    Dot {
        document: PathBuf,
        /// Prefix added to every flattened key.
        #[arg(long, default_value = "")]
        prepend: String,
    },
    /// Reshape the document to the shape of a template document.
    Filter {
        document: PathBuf,
        template: PathBuf,
    },
}
