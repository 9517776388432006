//! Serializable envelope handed to external generators.

use std::path::Path;

use cmdspec_core::CommandEntry;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Version of the bundle layout (semver).
pub const BUNDLE_FORMAT_VERSION: &str = "1.0.0";

/// Identifies the specification a bundle was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Path as given on the command line
    pub path: String,
    /// SHA-256 hex digest of the file contents
    pub sha256: String,
}

impl SourceInfo {
    /// Describes in-memory specification text.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdspec_gen::SourceInfo;
    ///
    /// let info = SourceInfo::from_bytes("spec.txt", b"");
    /// assert_eq!(
    ///     info.sha256,
    ///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    /// );
    /// ```
    pub fn from_bytes(path: impl Into<String>, bytes: &[u8]) -> Self {
        let hash = Sha256::digest(bytes);
        Self {
            path: path.into(),
            sha256: format!("{:x}", hash),
        }
    }

    /// Reads and hashes a specification file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::GenError::IoError) if the file cannot be
    /// read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(path.display().to_string(), &bytes))
    }
}

/// Command list plus generation metadata, as written by the JSON and YAML
/// generators.
///
/// # Examples
///
/// ```
/// use cmdspec_core::CommandEntry;
/// use cmdspec_gen::SpecBundle;
///
/// let bundle = SpecBundle::new(vec![CommandEntry::new("add")], "2024-01-15T10:30:00Z");
/// assert_eq!(bundle.command_count(), 1);
/// assert!(bundle.source.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecBundle {
    /// Bundle layout version
    pub format_version: String,
    /// RFC 3339 timestamp of generation
    pub generated_at: String,
    /// Where the commands were read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceInfo>,
    /// Command entries in specification order
    pub commands: Vec<CommandEntry>,
}

impl SpecBundle {
    pub fn new(commands: Vec<CommandEntry>, generated_at: impl Into<String>) -> Self {
        Self {
            format_version: BUNDLE_FORMAT_VERSION.to_string(),
            generated_at: generated_at.into(),
            source: None,
            commands,
        }
    }

    /// Creates a bundle stamped with the current time.
    pub fn now(commands: Vec<CommandEntry>) -> Self {
        Self::new(commands, chrono::Utc::now().to_rfc3339())
    }

    pub fn with_source(mut self, source: SourceInfo) -> Self {
        self.source = Some(source);
        self
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}
