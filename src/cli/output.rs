//! Handles all user-facing output for the CLI.
//!
//! Documents are encoded as JSON or YAML; boolean answers are colourised
//! when standard output is a terminal.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::args::OutputFormat;
use crate::diagnostics::{DotError, Result};
use crate::value::Value;

pub struct Printer {
    format: OutputFormat,
    compact: bool,
}

impl Printer {
    pub fn new(format: OutputFormat, compact: bool) -> Self {
        Self { format, compact }
    }

    /// Encodes `value` in the configured format.
    pub fn render(&self, value: &Value) -> Result<String> {
        let encoded = match (self.format, self.compact) {
            (OutputFormat::Json, true) => serde_json::to_string(value).map_err(encode_error),
            (OutputFormat::Json, false) => serde_json::to_string_pretty(value).map_err(encode_error),
            (OutputFormat::Yaml, _) => serde_yaml::to_string(value).map_err(encode_error),
        }?;
        Ok(encoded.trim_end().to_string())
    }

    pub fn value(&self, value: &Value) -> Result<()> {
        let text = self.render(value)?;
        println!("{}", text);
        Ok(())
    }

    /// Prints `true` in green or `false` in red.
    pub fn status(&self, found: bool) {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        let color = if found { Color::Green } else { Color::Red };
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = writeln!(stdout, "{}", found);
        let _ = stdout.reset();
    }
}

fn encode_error<E>(error: E) -> DotError
where
    E: std::error::Error + Send + Sync + 'static,
{
    DotError::Encode {
        source: Box::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_compact_json() {
        let printer = Printer::new(OutputFormat::Json, true);
        let value = Value::from(json!({"a": {"b": [1, 2]}}));
        assert_eq!(printer.render(&value).unwrap(), r#"{"a":{"b":[1,2]}}"#);
    }

    #[test]
    fn test_render_yaml_trims_trailing_newline() {
        let printer = Printer::new(OutputFormat::Yaml, false);
        let value = Value::from(json!({"a": 1}));
        assert_eq!(printer.render(&value).unwrap(), "a: 1");
    }
}
