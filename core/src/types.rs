//! Specification model populated by the reader.
//!
//! A specification document is an ordered list of [`CommandEntry`] values.
//! Each entry owns its usage lines and its [`OptionEntry`] list by
//! composition; order is file order and drives generation order.

use serde::{Deserialize, Serialize};

/// Discriminates plain options from help-layout pseudo-options.
///
/// # Examples
///
/// ```
/// use cmdspec_core::OptionKind;
///
/// assert_eq!(OptionKind::default(), OptionKind::Option);
/// assert_eq!(OptionKind::GroupLine.as_str(), "groupline");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// A real option recognized on the command line.
    #[default]
    Option,
    /// A grouping separator (blank line) in generated help.
    GroupLine,
    /// A free-text line in generated help.
    TextLine,
}

impl OptionKind {
    /// Returns the keyword used for this kind in the spec format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Option => "option",
            Self::GroupLine => "groupline",
            Self::TextLine => "textline",
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed `option` block.
///
/// Use [`option`](OptionEntry::option), [`groupline`](OptionEntry::groupline)
/// or [`textline`](OptionEntry::textline) to create entries, then chain the
/// builder methods.
///
/// # Examples
///
/// ```
/// use cmdspec_core::{OptionEntry, OptionKind};
///
/// let dry_run = OptionEntry::option()
///     .with_short("n")
///     .with_long("dry-run")
///     .with_help("dry run");
/// assert_eq!(dry_run.kind, OptionKind::Option);
/// assert_eq!(dry_run.display_flags(), "-n, --dry-run");
/// assert_eq!(dry_run.ident().as_deref(), Some("dryRun"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Entry kind, resolved when the block is finalized
    pub kind: OptionKind,
    /// Short spelling without the dash (e.g. "n")
    pub short_name: Option<String>,
    /// Long spelling without the dashes (e.g. "dry-run")
    pub long_name: Option<String>,
    /// Argument placeholder or type; `argument:` and `type:` share it
    pub argument_type: Option<String>,
    /// Recognized but left out of short help
    pub is_hidden: bool,
    /// The argument may be omitted
    pub is_optional: bool,
    /// Accepts a `-NUM` style numeric argument
    pub takes_numeric_argument: bool,
    /// Help text with quotes stripped
    pub help_text: Option<String>,
    /// Free text shown in help for `textline` entries
    pub text_line: Option<String>,
}

impl OptionEntry {
    /// Creates an empty entry of kind [`OptionKind::Option`].
    pub fn option() -> Self {
        Self::default()
    }

    /// Creates a grouping separator entry.
    pub fn groupline() -> Self {
        Self {
            kind: OptionKind::GroupLine,
            ..Self::default()
        }
    }

    /// Creates a free-text entry.
    pub fn textline(text: &str) -> Self {
        Self {
            kind: OptionKind::TextLine,
            text_line: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn with_short(mut self, short: &str) -> Self {
        self.short_name = Some(short.to_string());
        self
    }

    pub fn with_long(mut self, long: &str) -> Self {
        self.long_name = Some(long.to_string());
        self
    }

    pub fn with_argument(mut self, argument: &str) -> Self {
        self.argument_type = Some(argument.to_string());
        self
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help_text = Some(help.to_string());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn numeric(mut self) -> Self {
        self.takes_numeric_argument = true;
        self
    }

    /// Returns `true` for entries that are real command-line options.
    pub fn is_option(&self) -> bool {
        self.kind == OptionKind::Option
    }

    /// Returns the flag spellings as shown in help (`-n, --dry-run`).
    ///
    /// Numeric options render as `-NUM` after any other spelling.
    pub fn display_flags(&self) -> String {
        let mut out = String::new();
        if let Some(short) = self.short_name.as_deref().filter(|s| !s.is_empty()) {
            out.push('-');
            out.push_str(short);
        }
        if let Some(long) = self.long_name.as_deref().filter(|s| !s.is_empty()) {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str("--");
            out.push_str(long);
        }
        if self.takes_numeric_argument {
            out.push_str("-NUM");
        }
        out
    }

    /// Derives a camel-case identifier for the option.
    ///
    /// Prefers the long name, then the short name; numeric options without
    /// either map to `NUM`. Returns `None` for pseudo-options and options
    /// with no spelling at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdspec_core::OptionEntry;
    ///
    /// assert_eq!(OptionEntry::option().with_long("ignore-errors").ident().as_deref(), Some("ignoreErrors"));
    /// assert_eq!(OptionEntry::option().with_short("v").ident().as_deref(), Some("v"));
    /// assert_eq!(OptionEntry::option().numeric().ident().as_deref(), Some("NUM"));
    /// assert_eq!(OptionEntry::groupline().ident(), None);
    /// ```
    pub fn ident(&self) -> Option<String> {
        if !self.is_option() {
            return None;
        }
        let name = self
            .long_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.short_name.as_deref().filter(|s| !s.is_empty()));
        match name {
            Some(name) => camel_case(name),
            None if self.takes_numeric_argument => Some("NUM".to_string()),
            None => None,
        }
    }
}

fn camel_case(name: &str) -> Option<String> {
    let mut out = String::new();
    for word in name.split('-').filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if out.is_empty() {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    (!out.is_empty()).then_some(out)
}

/// One parsed `command` block.
///
/// # Examples
///
/// ```
/// use cmdspec_core::{CommandEntry, OptionEntry};
///
/// let add = CommandEntry::new("add")
///     .with_usage("usage: git add [<options>] [--] <pathspec>...")
///     .with_option(OptionEntry::option().with_short("n").with_long("dry-run"));
/// assert_eq!(add.display_name, "add");
/// assert!(add.find_option("dry-run").is_some());
/// assert!(add.find_option("n").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    /// Internal name, the first token after `command`
    pub id: String,
    /// Name shown in help; equals `id` unless overridden
    pub display_name: String,
    /// Usage lines with quotes stripped
    pub usage: Vec<String>,
    /// Option entries in file order
    pub options: Vec<OptionEntry>,
}

impl CommandEntry {
    /// Creates an entry whose display name equals its id.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: id.to_string(),
            usage: Vec::new(),
            options: Vec::new(),
        }
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = display_name.to_string();
        self
    }

    pub fn with_usage(mut self, line: &str) -> Self {
        self.usage.push(line.to_string());
        self
    }

    pub fn with_option(mut self, option: OptionEntry) -> Self {
        self.options.push(option);
        self
    }

    /// Returns `true` when the display name is an explicit override.
    pub fn has_display_override(&self) -> bool {
        self.display_name != self.id
    }

    /// Finds a real option by short or long name.
    pub fn find_option(&self, name: &str) -> Option<&OptionEntry> {
        self.options.iter().filter(|o| o.is_option()).find(|o| {
            o.short_name.as_deref() == Some(name) || o.long_name.as_deref() == Some(name)
        })
    }

    /// Iterates real options, skipping grouplines and textlines.
    pub fn real_options(&self) -> impl Iterator<Item = &OptionEntry> {
        self.options.iter().filter(|o| o.is_option())
    }
}
