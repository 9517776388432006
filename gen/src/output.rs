//! Generator boundary and the built-in model emitters.
//!
//! A [`Generator`] receives the ordered command list and writes whatever it
//! produces to a stream. Target-language code generators plug in behind the
//! same trait; the emitters here cover serialization of the model itself.

use std::io::Write;

use cmdspec_core::{CommandEntry, HelpStyle, render_help, write_spec};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bundle::{SourceInfo, SpecBundle};
use crate::config::GeneratorConfig;
use crate::error::Result;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Spec bundle as pretty-printed JSON
    #[default]
    Json,
    /// Spec bundle as YAML
    Yaml,
    /// Specification text, re-rendered
    Spec,
    /// Help text preview per command
    Help,
}

/// Consumes a parsed command list and emits output.
pub trait Generator {
    /// Writes output for `commands` to `out`.
    ///
    /// # Errors
    ///
    /// Returns a [`GenError`](crate::GenError) if serialization or writing
    /// fails.
    fn generate(&self, commands: &[CommandEntry], out: &mut dyn Write) -> Result<()>;
}

/// Writes a [`SpecBundle`] as JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonGenerator {
    pub source: Option<SourceInfo>,
}

impl Generator for JsonGenerator {
    fn generate(&self, commands: &[CommandEntry], out: &mut dyn Write) -> Result<()> {
        let bundle = bundle_for(commands, self.source.clone());
        serde_json::to_writer_pretty(&mut *out, &bundle)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Writes a [`SpecBundle`] as YAML.
#[derive(Debug, Clone, Default)]
pub struct YamlGenerator {
    pub source: Option<SourceInfo>,
}

impl Generator for YamlGenerator {
    fn generate(&self, commands: &[CommandEntry], out: &mut dyn Write) -> Result<()> {
        let bundle = bundle_for(commands, self.source.clone());
        serde_yaml::to_writer(&mut *out, &bundle)?;
        Ok(())
    }
}

/// Re-renders the specification text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecGenerator;

impl Generator for SpecGenerator {
    fn generate(&self, commands: &[CommandEntry], out: &mut dyn Write) -> Result<()> {
        out.write_all(write_spec(commands).as_bytes())?;
        Ok(())
    }
}

/// Writes the help preview of every command, one section each.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpGenerator {
    pub style: HelpStyle,
}

impl Generator for HelpGenerator {
    fn generate(&self, commands: &[CommandEntry], out: &mut dyn Write) -> Result<()> {
        for (idx, command) in commands.iter().enumerate() {
            if idx > 0 {
                writeln!(out)?;
            }
            writeln!(out, "=== {} ===", command.display_name)?;
            for line in render_help(command, self.style) {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }
}

fn bundle_for(commands: &[CommandEntry], source: Option<SourceInfo>) -> SpecBundle {
    let bundle = SpecBundle::now(commands.to_vec());
    match source {
        Some(source) => bundle.with_source(source),
        None => bundle,
    }
}

/// Builds the generator selected by `config`.
///
/// # Examples
///
/// ```
/// use cmdspec_core::CommandEntry;
/// use cmdspec_gen::{GeneratorConfig, OutputFormat, generator_for};
///
/// let config = GeneratorConfig {
///     format: OutputFormat::Spec,
///     ..GeneratorConfig::default()
/// };
/// let mut out: Vec<u8> = Vec::new();
/// generator_for(&config, None)
///     .generate(&[CommandEntry::new("gc")], &mut out)
///     .unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "command gc\n    usage\n");
/// ```
pub fn generator_for(config: &GeneratorConfig, source: Option<SourceInfo>) -> Box<dyn Generator> {
    debug!(format = ?config.format, include_hidden = config.include_hidden, "Selecting generator");
    match config.format {
        OutputFormat::Json => Box::new(JsonGenerator { source }),
        OutputFormat::Yaml => Box::new(YamlGenerator { source }),
        OutputFormat::Spec => Box::new(SpecGenerator),
        OutputFormat::Help => Box::new(HelpGenerator {
            style: if config.include_hidden {
                HelpStyle::All
            } else {
                HelpStyle::Short
            },
        }),
    }
}

/// Runs `generator` into a string.
///
/// # Errors
///
/// Propagates the generator's error.
pub fn generate_to_string(generator: &dyn Generator, commands: &[CommandEntry]) -> Result<String> {
    let mut out: Vec<u8> = Vec::new();
    generator.generate(commands, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
