//! Generator configuration.
//!
//! Loaded from YAML; every field is optional and falls back to its default.
//!
//! # Example YAML
//!
//! ```yaml
//! format: help
//! output: build/git-help.txt
//! include_hidden: true
//! strict: false
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::output::OutputFormat;

/// Settings for one generation run.
///
/// # Examples
///
/// ```
/// use cmdspec_gen::{GeneratorConfig, OutputFormat};
///
/// let config: GeneratorConfig = serde_yaml::from_str("format: yaml\n").unwrap();
/// assert_eq!(config.format, OutputFormat::Yaml);
/// assert!(config.output.is_none());
/// assert!(!config.strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Output file; standard output when unset.
    pub output: Option<PathBuf>,
    /// Include hidden options in help previews.
    pub include_hidden: bool,
    /// Treat unknown directives as errors.
    pub strict: bool,
}

impl GeneratorConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::GenError::IoError) if the file cannot be
    /// read, or [`ConfigError`](crate::GenError::ConfigError) if it is not
    /// a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).map_err(|source| GenError::ConfigError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::GenError::IoError) if the file cannot be
    /// written, or [`YamlError`](crate::GenError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmdspec.yml");

        let config = GeneratorConfig {
            format: OutputFormat::Help,
            output: Some(PathBuf::from("out/help.txt")),
            include_hidden: true,
            strict: true,
        };
        config.save(&path).unwrap();
        assert_eq!(GeneratorConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_empty_mapping_uses_defaults() {
        let config: GeneratorConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "format: toml\n").unwrap();
        let err = GeneratorConfig::load(&path).unwrap_err();
        match &err {
            GenError::ConfigError { path: bad, .. } => assert_eq!(bad, &path),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("invalid config "));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::load(dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, GenError::IoError(_)));
    }
}
