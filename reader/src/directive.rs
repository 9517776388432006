//! Line grammar: block header keywords and option directives.
//!
//! Each line is classified once. Headers are whole words, so the `optional`
//! directive never reads as an `option` header.

use cmdspec_core::{OptionEntry, OptionKind};

/// Block header keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    Command,
    Usage,
    Option,
}

impl Header {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Usage => "usage",
            Self::Option => "option",
        }
    }

    /// Classifies a trimmed line as a block header.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdspec_reader::Header;
    ///
    /// assert_eq!(Header::parse("option dryRun"), Some(Header::Option));
    /// assert_eq!(Header::parse("option"), Some(Header::Option));
    /// assert_eq!(Header::parse("optional"), None);
    /// assert_eq!(Header::parse("command add"), Some(Header::Command));
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        [Self::Command, Self::Usage, Self::Option]
            .into_iter()
            .find(|header| header.matches(line))
    }

    /// Returns the text after the keyword and its separator, if `line`
    /// starts with this header.
    pub fn strip(self, line: &str) -> Option<&str> {
        let rest = line.strip_prefix(self.keyword())?;
        if rest.is_empty() {
            return Some(rest);
        }
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Some(chars.as_str()),
            _ => None,
        }
    }

    fn matches(self, line: &str) -> bool {
        self.strip(line).is_some()
    }
}

/// Returns `true` if `line` opens the next block of an options section.
pub(crate) fn ends_block(line: &str) -> bool {
    matches!(Header::parse(line), Some(Header::Option | Header::Command))
}

/// One directive line inside an `option` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    ShortName(&'a str),
    LongName(&'a str),
    Argument(&'a str),
    Type(&'a str),
    Hidden,
    Optional,
    NumOpt,
    GroupLine,
    /// Help text with its enclosing quotes removed.
    Help(&'a str),
    TextLine(&'a str),
    /// Anything unrecognized; reported and skipped.
    Unknown(&'a str),
}

impl<'a> Directive<'a> {
    /// Parses a trimmed directive line.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdspec_reader::Directive;
    ///
    /// assert_eq!(Directive::parse("shortname: n"), Directive::ShortName("n"));
    /// assert_eq!(Directive::parse("help: \"dry run\""), Directive::Help("dry run"));
    /// assert_eq!(Directive::parse("numopt"), Directive::NumOpt);
    /// assert_eq!(Directive::parse("frobnicate"), Directive::Unknown("frobnicate"));
    /// ```
    pub fn parse(line: &'a str) -> Self {
        match line {
            "hidden" => return Self::Hidden,
            "optional" => return Self::Optional,
            "numopt" => return Self::NumOpt,
            "groupline" => return Self::GroupLine,
            _ => {}
        }

        if let Some(rest) = line.strip_prefix("shortname: ") {
            Self::ShortName(rest)
        } else if let Some(rest) = line.strip_prefix("longname: ") {
            Self::LongName(rest)
        } else if let Some(rest) = line.strip_prefix("argument: ") {
            Self::Argument(rest)
        } else if let Some(rest) = line.strip_prefix("type: ") {
            Self::Type(rest)
        } else if let Some(rest) = line.strip_prefix("help: ") {
            Self::Help(strip_help_quotes(rest))
        } else if let Some(rest) = line.strip_prefix("textline: ") {
            Self::TextLine(rest)
        } else {
            Self::Unknown(line)
        }
    }
}

fn strip_help_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

/// Accumulates directives for one `option` block.
#[derive(Debug, Default)]
pub(crate) struct OptionBuilder {
    entry: OptionEntry,
    groupline: bool,
}

impl OptionBuilder {
    pub(crate) fn apply(&mut self, directive: Directive<'_>) {
        let entry = &mut self.entry;
        match directive {
            Directive::ShortName(name) => entry.short_name = Some(name.to_string()),
            Directive::LongName(name) => entry.long_name = Some(name.to_string()),
            // Both write the same field; the later directive wins.
            Directive::Argument(value) | Directive::Type(value) => {
                entry.argument_type = Some(value.to_string());
            }
            Directive::Hidden => entry.is_hidden = true,
            Directive::Optional => entry.is_optional = true,
            Directive::NumOpt => entry.takes_numeric_argument = true,
            Directive::GroupLine => self.groupline = true,
            Directive::Help(text) => entry.help_text = Some(text.to_string()),
            Directive::TextLine(text) => entry.text_line = Some(text.to_string()),
            Directive::Unknown(_) => {}
        }
    }

    pub(crate) fn finish(mut self) -> OptionEntry {
        self.entry.kind = if self.groupline {
            OptionKind::GroupLine
        } else if self.entry.text_line.as_deref().is_some_and(|t| !t.is_empty()) {
            OptionKind::TextLine
        } else {
            OptionKind::Option
        };
        self.entry
    }
}
