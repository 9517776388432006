//! Block parsers for the specification format.
//!
//! The driver reads `command` headers and hands the shared [`LineSource`]
//! to the usage parser and then to the options parser. Each parser leaves
//! the cursor on the first line it did not consume, so every header line is
//! seen exactly once.
//!
//! ```text
//! command add
//!     usage
//!         "usage: git add [<options>] [--] <pathspec>..."
//!     option dryRun
//!         shortname: n
//!         longname: dry-run
//!         help: "dry run"
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cmdspec_core::{CommandEntry, OptionEntry};
use tracing::{debug, warn};

use crate::directive::{Directive, Header, OptionBuilder, ends_block};
use crate::document::{Diagnostic, SpecDocument};
use crate::error::{END_OF_INPUT, Result, SpecError};
use crate::source::LineSource;

/// Reads a full specification from a line source.
///
/// # Examples
///
/// ```
/// use cmdspec_reader::SpecReader;
///
/// let spec = "\
/// command add
///     usage
///         \"usage: git add [<options>]\"
///     option dryRun
///         shortname: n
/// ";
///
/// let doc = SpecReader::new(spec.as_bytes()).read().unwrap();
/// assert_eq!(doc.commands[0].id, "add");
/// assert_eq!(doc.commands[0].usage, vec!["usage: git add [<options>]"]);
/// assert_eq!(doc.commands[0].options[0].short_name.as_deref(), Some("n"));
/// ```
#[derive(Debug)]
pub struct SpecReader<R> {
    source: LineSource<R>,
    diagnostics: Vec<Diagnostic>,
}

impl SpecReader<BufReader<File>> {
    /// Opens a specification file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Open`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_source(LineSource::open(path)?))
    }
}

impl<R: BufRead> SpecReader<R> {
    pub fn new(reader: R) -> Self {
        Self::from_source(LineSource::new(reader))
    }

    pub fn from_source(source: LineSource<R>) -> Self {
        Self {
            source,
            diagnostics: Vec::new(),
        }
    }

    /// Reads every command block until end of input.
    ///
    /// # Errors
    ///
    /// Returns the first structural [`SpecError`]; no partial document is
    /// produced. An input without any command is [`SpecError::Empty`].
    pub fn read(mut self) -> Result<SpecDocument> {
        let mut commands = Vec::new();

        self.source.advance()?;
        loop {
            self.skip_blank()?;
            if self.source.is_exhausted() {
                break;
            }
            commands.push(self.read_command()?);
        }

        if commands.is_empty() {
            return Err(SpecError::Empty);
        }

        debug!(
            commands = commands.len(),
            diagnostics = self.diagnostics.len(),
            "Read specification"
        );
        Ok(SpecDocument {
            commands,
            diagnostics: self.diagnostics,
        })
    }

    fn skip_blank(&mut self) -> Result<()> {
        while self
            .source
            .current()
            .is_some_and(|line| line.trim().is_empty())
        {
            self.source.advance()?;
        }
        Ok(())
    }

    /// Parses the `command` header on the current line and the blocks after it.
    fn read_command(&mut self) -> Result<CommandEntry> {
        let line_number = self.source.line_number();
        let line = self.source.current().unwrap_or_default().trim();
        let (id, display_name) = parse_command_header(line, line_number)?;

        let mut entry = CommandEntry::new(&id).with_display_name(&display_name);
        entry.usage = self.read_usage()?;
        entry.options = self.read_options()?;

        debug!(
            command = %entry.id,
            usage = entry.usage.len(),
            options = entry.options.len(),
            "Parsed command block"
        );
        Ok(entry)
    }

    /// Reads the `usage` header and its quoted lines.
    ///
    /// Stops on the first `option` or `command` header, leaving it current.
    fn read_usage(&mut self) -> Result<Vec<String>> {
        loop {
            if !self.source.advance()? {
                return Err(SpecError::ExpectedUsage {
                    line: self.source.line_number() + 1,
                    text: END_OF_INPUT.to_string(),
                });
            }
            let line = self.source.current().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            if line != Header::Usage.keyword() {
                return Err(SpecError::ExpectedUsage {
                    line: self.source.line_number(),
                    text: line.to_string(),
                });
            }
            break;
        }

        let mut usage = Vec::new();
        while self.source.advance()? {
            let line = self.source.current().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            if ends_block(line) {
                break;
            }
            usage.push(strip_enclosing(line, self.source.line_number())?);
        }
        Ok(usage)
    }

    /// Reads `option` blocks until a `command` header or end of input.
    fn read_options(&mut self) -> Result<Vec<OptionEntry>> {
        let mut options = Vec::new();

        while let Some(line) = self.source.current() {
            let line = line.trim();
            match Header::parse(line) {
                Some(Header::Command) => break,
                Some(Header::Option) => {}
                // The usage and option block readers only stop on a header
                // or end of input, so `read` never reaches this arm.
                _ => {
                    return Err(SpecError::ExpectedOption {
                        line: self.source.line_number(),
                        text: line.to_string(),
                    });
                }
            }
            options.push(self.read_option_block()?);
        }

        Ok(options)
    }

    /// Consumes directives after an `option` header.
    fn read_option_block(&mut self) -> Result<OptionEntry> {
        let mut builder = OptionBuilder::default();

        while self.source.advance()? {
            let line = self.source.current().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            if ends_block(line) {
                break;
            }
            let directive = Directive::parse(line);
            if let Directive::Unknown(text) = directive {
                let line_number = self.source.line_number();
                warn!(line = line_number, text, "Unknown directive in option block");
                self.diagnostics.push(Diagnostic {
                    line: line_number,
                    text: text.to_string(),
                });
            }
            builder.apply(directive);
        }

        Ok(builder.finish())
    }
}

/// Splits a `command` header into id and display name.
fn parse_command_header(line: &str, line_number: usize) -> Result<(String, String)> {
    let raw = Header::Command
        .strip(line)
        .ok_or_else(|| SpecError::ExpectedCommand {
            line: line_number,
            text: line.to_string(),
        })?;

    let (id, display_name) = match raw.find(" \"") {
        Some(idx) => {
            let display = &raw[idx + 2..];
            (&raw[..idx], display.strip_suffix('"').unwrap_or(display))
        }
        None => (raw, raw),
    };

    if id.trim().is_empty() {
        return Err(SpecError::MissingCommandId {
            line: line_number,
            text: line.to_string(),
        });
    }
    Ok((id.to_string(), display_name.to_string()))
}

/// Drops the first and last character of a quoted usage line.
fn strip_enclosing(line: &str, line_number: usize) -> Result<String> {
    let mut chars = line.chars();
    match (chars.next(), chars.next_back()) {
        (Some(_), Some(_)) => Ok(chars.as_str().to_string()),
        _ => Err(SpecError::MalformedUsage {
            line: line_number,
            text: line.to_string(),
        }),
    }
}

/// Reads a specification from a string.
///
/// # Errors
///
/// See [`SpecReader::read`].
pub fn parse_str(spec: &str) -> Result<SpecDocument> {
    parse_bytes(spec.as_bytes())
}

/// Reads a specification already loaded into memory.
///
/// # Errors
///
/// See [`SpecReader::read`].
pub fn parse_bytes(spec: &[u8]) -> Result<SpecDocument> {
    SpecReader::new(spec).read()
}

/// Reads a specification file.
///
/// # Errors
///
/// Returns [`SpecError::Open`] if the file cannot be opened, otherwise see
/// [`SpecReader::read`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<SpecDocument> {
    SpecReader::open(path)?.read()
}
