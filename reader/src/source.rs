//! Forward-only line cursor shared by the block parsers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SpecError};

/// Single-pass cursor over the lines of a specification.
///
/// The most recently fetched line stays visible through [`current`] until
/// the next [`advance`]; there is no other pushback. The line counter only
/// feeds diagnostics.
///
/// [`current`]: LineSource::current
/// [`advance`]: LineSource::advance
///
/// # Examples
///
/// ```
/// use cmdspec_reader::LineSource;
///
/// let mut source = LineSource::new("command add\r\n    usage\n".as_bytes());
/// assert!(source.advance().unwrap());
/// assert_eq!(source.current(), Some("command add"));
/// assert!(source.advance().unwrap());
/// assert_eq!(source.line_number(), 2);
/// assert!(!source.advance().unwrap());
/// assert_eq!(source.current(), None);
/// ```
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    current: Option<String>,
    line_number: usize,
    exhausted: bool,
}

impl LineSource<BufReader<File>> {
    /// Opens a specification file.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Open`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SpecError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current: None,
            line_number: 0,
            exhausted: false,
        }
    }

    /// Fetches the next line.
    ///
    /// Returns `Ok(false)` once the input is exhausted; the current line is
    /// then `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Io`] if the underlying reader fails.
    pub fn advance(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }

        let mut buf = String::new();
        let read = self
            .reader
            .read_line(&mut buf)
            .map_err(|source| SpecError::Io {
                line: self.line_number + 1,
                source,
            })?;

        if read == 0 {
            self.exhausted = true;
            self.current = None;
            return Ok(false);
        }

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        self.line_number += 1;
        self.current = Some(buf);
        Ok(true)
    }

    /// Returns the line most recently fetched by [`advance`](Self::advance).
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns the 1-based number of the current line.
    ///
    /// After the input is exhausted this stays at the number of the last
    /// line read.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns `true` once [`advance`](Self::advance) has hit end of input.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
