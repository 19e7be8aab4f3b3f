//! Miette diagnostics for files the CLI reads.
//!
//! Parse failures in the configuration file or a catalog are rendered with
//! the offending source span before the command exits.

use std::ops::Range;
use std::path::Path;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

use super::output;

/// A TOML or JSON file that failed to parse.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(outlay::parse))]
pub struct ParseError {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: Option<SourceSpan>,

    #[help]
    pub help: Option<String>,
}

impl ParseError {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        path: &Path,
        src: impl Into<String>,
        span: Option<Range<usize>>,
    ) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(path.display().to_string(), src.into()),
            span: span.map(SourceSpan::from),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build from a `toml` deserialization error.
    #[must_use]
    pub fn from_toml(path: &Path, src: &str, err: &toml::de::Error) -> Self {
        Self::new(err.message().to_string(), path, src, err.span())
    }

    /// Build from a `serde_json` error, converting its line and column to
    /// a byte offset.
    #[must_use]
    pub fn from_json(path: &Path, src: &str, err: &serde_json::Error) -> Self {
        let offset = line_column_offset(src, err.line(), err.column());
        Self::new(err.to_string(), path, src, offset.map(|at| at..at))
    }
}

/// Byte offset of a 1-based line and column.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((start + column.saturating_sub(1)).min(src.len()))
}

/// Print a diagnostic to stderr unless JSON mode is on.
pub fn report(diagnostic: ParseError) {
    if output::is_json() {
        output::error(&diagnostic.message);
        return;
    }
    eprintln!("{:?}", Report::new(diagnostic));
}
