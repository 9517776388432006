//! Reader for the line-oriented command-line specification format.
//!
//! A specification lists `command` blocks, each with a `usage` block and any
//! number of `option` blocks:
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
//!
//! # Main entry points
//!
//! - [`parse_str`] / [`parse_file`] — read a whole specification.
//! - [`SpecReader`] — the same over any [`BufRead`](std::io::BufRead).
//! - [`LineSource`] — the shared line cursor the block parsers advance.
//!
//! Structural problems (missing `command`, `usage` or `option` keywords, an
//! empty file, an unreadable file) are returned as [`SpecError`] and no
//! partial result is produced. Unknown directives inside an option block are
//! collected as [`Diagnostic`]s on the returned [`SpecDocument`] and logged
//! with `tracing`.
//!
//! # Example
//!
//! ```
//! use cmdspec_core::OptionKind;
//! use cmdspec_reader::parse_str;
//!
//! let doc = parse_str(
//!     "command build \"Build artifact\"\n  usage\n    \"usage: build\"\n  option\n    groupline\n",
//! )
//! .unwrap();
//!
//! let build = &doc.commands[0];
//! assert_eq!(build.id, "build");
//! assert_eq!(build.display_name, "Build artifact");
//! assert_eq!(build.options[0].kind, OptionKind::GroupLine);
//! ```

mod directive;
mod document;
mod error;
mod parser;
mod source;

pub use directive::{Directive, Header};
pub use document::{Diagnostic, SpecDocument};
pub use error::{END_OF_INPUT, Result, SpecError};
pub use parser::{SpecReader, parse_bytes, parse_file, parse_str};
pub use source::LineSource;
