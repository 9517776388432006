//! Error types for specification reading.
//!
//! Every structural variant records the line number and the offending text
//! so a caller can report where the input stopped matching the grammar.

use std::path::PathBuf;

use thiserror::Error;

/// Text used in diagnostics when the input ended where a line was required.
pub const END_OF_INPUT: &str = "<end of input>";

/// Fatal errors that abort reading a specification.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The specification file could not be opened.
    #[error("couldn't open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a line failed after the input was opened.
    #[error("read error at line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// The input holds no command blocks.
    #[error("empty file: no commands found")]
    Empty,

    /// A block started with something other than `command`.
    #[error("expected 'command' in line {line}: got {text}")]
    ExpectedCommand { line: usize, text: String },

    /// A `command` header has no identifier.
    #[error("missing command id in line {line}: got {text}")]
    MissingCommandId { line: usize, text: String },

    /// The line after a `command` header is not `usage`.
    #[error("expected 'usage' in line {line}: got {text}")]
    ExpectedUsage { line: usize, text: String },

    /// A usage line is too short to carry its enclosing quotes.
    #[error("malformed usage line {line}: got {text}")]
    MalformedUsage { line: usize, text: String },

    /// An options section line is not an `option` header.
    #[error("expected 'option' in line {line}: got {text}")]
    ExpectedOption { line: usize, text: String },
}

impl SpecError {
    /// Returns the line number the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io { line, .. }
            | Self::ExpectedCommand { line, .. }
            | Self::MissingCommandId { line, .. }
            | Self::ExpectedUsage { line, .. }
            | Self::MalformedUsage { line, .. }
            | Self::ExpectedOption { line, .. } => Some(*line),
            Self::Open { .. } | Self::Empty => None,
        }
    }
}

/// Convenience alias for results with [`SpecError`].
pub type Result<T> = std::result::Result<T, SpecError>;
