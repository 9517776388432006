//! Specification model for command-line parser generation.
//!
//! This crate defines the types a specification reader populates and a
//! code generator consumes:
//!
//! - [`CommandEntry`] — one `command` block: identifier, display name, usage
//!   lines and options.
//! - [`OptionEntry`] — one `option` block, or a [`groupline`](OptionKind::GroupLine)
//!   / [`textline`](OptionKind::TextLine) pseudo-option used for help layout.
//!
//! Two model-level renderers are included: [`write_spec`] turns a command
//! list back into specification text, and [`render_help`] previews the
//! git-style help output the model describes.
//!
//! # Example
//!
//! ```
//! use cmdspec_core::*;
//!
//! let commit = CommandEntry::new("commit")
//!     .with_usage("usage: git commit [<options>] [--] <pathspec>...")
//!     .with_option(OptionEntry::option().with_short("q").with_long("quiet"))
//!     .with_option(OptionEntry::groupline())
//!     .with_option(OptionEntry::textline("Commit message options"));
//!
//! assert_eq!(commit.options.len(), 3);
//! assert_eq!(commit.real_options().count(), 1);
//! assert!(write_spec(&[commit]).starts_with("command commit\n"));
//! ```

mod help;
mod types;
mod write;

pub use help::{HELP_COLUMN, HelpStyle, render_help};
pub use types::*;
pub use write::write_spec;
