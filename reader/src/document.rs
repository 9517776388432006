//! Parsed document and non-fatal diagnostics.

use std::fmt;

use cmdspec_core::CommandEntry;

/// A non-fatal problem found while reading, such as an unknown directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: usize,
    /// The offending line, trimmed
    pub text: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: unknown directive: {}", self.line, self.text)
    }
}

/// Result of reading one specification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecDocument {
    /// Command entries in file order
    pub commands: Vec<CommandEntry>,
    /// Warnings collected while reading
    pub diagnostics: Vec<Diagnostic>,
}

impl SpecDocument {
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Finds a command by its id.
    pub fn find_command(&self, id: &str) -> Option<&CommandEntry> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Consumes the document, keeping only the command list.
    pub fn into_commands(self) -> Vec<CommandEntry> {
        self.commands
    }
}
