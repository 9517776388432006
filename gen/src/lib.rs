//! Generation boundary for parsed command-line specifications.
//!
//! A code generator consumes the ordered command list produced by
//! `cmdspec-reader` through the [`Generator`] trait. This crate provides
//! the trait, the built-in model emitters selected by [`OutputFormat`], the
//! YAML [`GeneratorConfig`] and the [`SpecBundle`] envelope written by the
//! JSON and YAML emitters.
//!
//! # Quick start
//!
//! ```
//! use cmdspec_core::CommandEntry;
//! use cmdspec_gen::{GeneratorConfig, SpecBundle, generate_to_string, generator_for};
//!
//! let commands = vec![CommandEntry::new("add").with_usage("usage: git add")];
//! let generator = generator_for(&GeneratorConfig::default(), None);
//! let json = generate_to_string(generator.as_ref(), &commands).unwrap();
//!
//! let bundle: SpecBundle = serde_json::from_str(&json).unwrap();
//! assert_eq!(bundle.commands, commands);
//! ```
//!
//! # Feature flags
//!
//! - **`clap`** (default): derives `clap::ValueEnum` for [`OutputFormat`].

mod bundle;
mod config;
mod error;
mod output;

pub use bundle::{BUNDLE_FORMAT_VERSION, SourceInfo, SpecBundle};
pub use config::GeneratorConfig;
pub use error::{GenError, Result};
pub use output::{
    Generator, HelpGenerator, JsonGenerator, OutputFormat, SpecGenerator, YamlGenerator,
    generate_to_string, generator_for,
};
