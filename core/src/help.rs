//! Help text preview in the style of git's `-h` output.
//!
//! Options are laid out with the flag column indented four spaces and the
//! help column starting at [`HELP_COLUMN`]. Long help text wraps onto
//! continuation lines at the same column.

use crate::{CommandEntry, OptionEntry, OptionKind};

/// Column (0-based) where help text starts.
pub const HELP_COLUMN: usize = 26;

/// Flag columns at least this wide put their help on the next line.
const FLAG_COLUMN_LIMIT: usize = 25;

/// Lines must stay shorter than this before wrapping is applied.
const LINE_LIMIT: usize = 127;

/// Wrapped help chunks break at the last space before this offset.
const WRAP_WIDTH: usize = 54;

/// Which options appear in the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HelpStyle {
    /// Short help (`-h`), hidden options omitted.
    #[default]
    Short,
    /// Full help (`--help-all`), hidden options included.
    All,
}

/// Renders the help preview for one command, one element per line.
///
/// # Examples
///
/// ```
/// use cmdspec_core::{CommandEntry, HelpStyle, OptionEntry, render_help};
///
/// let cmd = CommandEntry::new("add")
///     .with_usage("usage: git add [<options>]")
///     .with_usage("")
///     .with_option(OptionEntry::option().with_short("n").with_long("dry-run").with_help("dry run"));
///
/// let lines = render_help(&cmd, HelpStyle::Short);
/// assert_eq!(lines[0], "usage: git add [<options>]");
/// assert_eq!(lines[2], "    -n, --dry-run         dry run");
/// assert_eq!(lines.last().map(String::as_str), Some(""));
/// ```
pub fn render_help(command: &CommandEntry, style: HelpStyle) -> Vec<String> {
    let mut lines: Vec<String> = command.usage.clone();

    for option in &command.options {
        match option.kind {
            OptionKind::GroupLine => lines.push(String::new()),
            OptionKind::TextLine => {
                lines.push(option.text_line.clone().unwrap_or_default());
            }
            OptionKind::Option => {
                if option.is_hidden && style == HelpStyle::Short {
                    continue;
                }
                lines.extend(option_lines(option));
            }
        }
    }

    if !command.options.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Builds the flag column text, e.g. `-u, --untracked-files[=<mode>]`.
fn flag_column(option: &OptionEntry) -> String {
    let mut column = format!("    {}", option.display_flags());
    if let Some(argument) = option.argument_type.as_deref().filter(|a| !a.is_empty()) {
        if !option.is_optional {
            column.push(' ');
        }
        column.push_str(argument);
    }
    column
}

fn option_lines(option: &OptionEntry) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = flag_column(option);
    let mut help = option.help_text.clone().unwrap_or_default();

    loop {
        if line.chars().count() < FLAG_COLUMN_LIMIT {
            if help.is_empty() {
                if !line.is_empty() {
                    lines.push(line);
                }
                break;
            }
            pad_to(&mut line, HELP_COLUMN);
            if line.chars().count() + help.chars().count() < LINE_LIMIT {
                line.push_str(&help);
                lines.push(line);
                break;
            }
            let (head, rest) = split_help(&help);
            line.push_str(head.trim_end());
            help = rest.trim_start().to_string();
            lines.push(line);
        } else {
            lines.push(line);
            if help.is_empty() {
                break;
            }
        }
        line = String::new();
    }

    lines
}

fn pad_to(line: &mut String, width: usize) {
    let len = line.chars().count();
    if len < width {
        line.extend(std::iter::repeat_n(' ', width - len));
    }
}

/// Splits help text at the last space within the wrap width.
fn split_help(help: &str) -> (&str, &str) {
    let limit = help
        .char_indices()
        .nth(WRAP_WIDTH)
        .map_or(help.len(), |(idx, _)| idx);
    match help[..limit].rfind(' ') {
        Some(idx) if idx > 0 => help.split_at(idx),
        _ => (help, ""),
    }
}
