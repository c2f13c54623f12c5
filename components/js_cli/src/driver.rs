//! Pipeline driver: source text in, rendered JSON out
//!
//! The driver runs the scanner (and, unless token mode is on, the parser)
//! over a source string and renders the result with `serde_json`.

use crate::error::CliResult;
use core_types::SyntaxError;
use parser::{parse_source, scan};
use serde::Serialize;
use std::path::Path;

/// Runs source text through the pipeline and renders the result
#[derive(Debug, Clone, Default)]
pub struct Driver {
    /// Render the token stream instead of the syntax tree
    tokens: bool,
    /// Render single-line JSON
    compact: bool,
}

impl Driver {
    /// Create a driver that renders pretty-printed syntax trees
    ///
    /// # Example
    /// ```
    /// use js_cli::Driver;
    ///
    /// let driver = Driver::new();
    /// let json = driver.render_string("var x = 1;").unwrap();
    /// assert!(json.contains("\"Assignment\""));
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable token mode
    pub fn with_tokens(mut self, enabled: bool) -> Self {
        self.tokens = enabled;
        self
    }

    /// Enable compact output
    pub fn with_compact(mut self, enabled: bool) -> Self {
        self.compact = enabled;
        self
    }

    /// Switch token mode on or off in place
    pub fn set_tokens(&mut self, enabled: bool) {
        self.tokens = enabled;
    }

    /// Whether token mode is on
    pub fn is_token_mode(&self) -> bool {
        self.tokens
    }

    /// Render a source file
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or the source is invalid
    ///
    /// # Example
    /// ```no_run
    /// use js_cli::Driver;
    ///
    /// let json = Driver::new().render_file("index.js").unwrap();
    /// ```
    pub fn render_file(&self, path: impl AsRef<Path>) -> CliResult<String> {
        let source = std::fs::read_to_string(path)?;
        self.render_string(&source)
    }

    /// Render a source string
    ///
    /// # Errors
    /// Returns `CliError::Syntax` if scanning or parsing fails
    pub fn render_string(&self, source: &str) -> CliResult<String> {
        if self.tokens {
            let tokens = scan(source).map_err(SyntaxError::from)?;
            self.to_json(&tokens)
        } else {
            let program = parse_source(source)?;
            self.to_json(&program)
        }
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<String> {
        let rendered = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(rendered)
    }
}
