//! Renders a command list back into the specification text format.
//!
//! Block headers are indented four spaces and block contents eight, the
//! layout git-derived specification files use. Reading the output back
//! yields an equal command list.

use std::fmt::Write as _;

use crate::{CommandEntry, OptionEntry, OptionKind};

const BLOCK_INDENT: &str = "    ";
const DIRECTIVE_INDENT: &str = "        ";

/// Renders `commands` as specification text.
///
/// # Examples
///
/// ```
/// use cmdspec_core::{CommandEntry, OptionEntry, write_spec};
///
/// let cmd = CommandEntry::new("add")
///     .with_usage("usage: git add [<options>]")
///     .with_option(OptionEntry::option().with_short("n").with_help("dry run"));
///
/// let text = write_spec(&[cmd]);
/// assert_eq!(
///     text,
///     "command add\n    usage\n        \"usage: git add [<options>]\"\n    option n\n        shortname: n\n        help: \"dry run\"\n"
/// );
/// ```
pub fn write_spec(commands: &[CommandEntry]) -> String {
    let mut out = String::new();
    for command in commands {
        write_command(&mut out, command);
    }
    out
}

fn write_command(out: &mut String, command: &CommandEntry) {
    if command.has_display_override() {
        let _ = writeln!(out, "command {} \"{}\"", command.id, command.display_name);
    } else {
        let _ = writeln!(out, "command {}", command.id);
    }

    let _ = writeln!(out, "{BLOCK_INDENT}usage");
    for line in &command.usage {
        let _ = writeln!(out, "{DIRECTIVE_INDENT}\"{line}\"");
    }

    for option in &command.options {
        write_option(out, option);
    }
}

fn write_option(out: &mut String, option: &OptionEntry) {
    match option.ident() {
        Some(ident) => {
            let _ = writeln!(out, "{BLOCK_INDENT}option {ident}");
        }
        None => {
            let _ = writeln!(out, "{BLOCK_INDENT}option");
        }
    }

    // Kind directives go first; any other fields the entry carries follow.
    if option.kind == OptionKind::GroupLine {
        let _ = writeln!(out, "{DIRECTIVE_INDENT}groupline");
    }
    if let Some(text) = non_empty(&option.text_line) {
        let _ = writeln!(out, "{DIRECTIVE_INDENT}textline: {text}");
    }

    if let Some(short) = non_empty(&option.short_name) {
        let _ = writeln!(out, "{DIRECTIVE_INDENT}shortname: {short}");
    }
    if option.takes_numeric_argument {
        let _ = writeln!(out, "{DIRECTIVE_INDENT}numopt");
    }
    if let Some(long) = non_empty(&option.long_name) {
        let _ = writeln!(out, "{DIRECTIVE_INDENT}longname: {long}");
    }
    if option.is_hidden {
        let _ = writeln!(out, "{DIRECTIVE_INDENT}hidden");
    }
    if let Some(argument) = non_empty(&option.argument_type) {
        let _ = writeln!(out, "{DIRECTIVE_INDENT}argument: {argument}");
    }
    if option.is_optional {
        let _ = writeln!(out, "{DIRECTIVE_INDENT}optional");
    }
    if let Some(help) = &option.help_text {
        let _ = writeln!(out, "{DIRECTIVE_INDENT}help: \"{help}\"");
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_override_is_quoted() {
        let cmd = CommandEntry::new("notesAdd").with_display_name("notes add");
        let text = write_spec(&[cmd]);
        assert!(text.starts_with("command notesAdd \"notes add\"\n    usage\n"));
    }

    #[test]
    fn test_pseudo_options_have_bare_header() {
        let cmd = CommandEntry::new("log")
            .with_option(OptionEntry::groupline())
            .with_option(OptionEntry::textline("Diff options"));
        let text = write_spec(&[cmd]);
        assert!(text.contains("    option\n        groupline\n"));
        assert!(text.contains("    option\n        textline: Diff options\n"));
    }

    #[test]
    fn test_directive_order() {
        let opt = OptionEntry::option()
            .with_short("u")
            .with_long("untracked-files")
            .with_argument("[=<mode>]")
            .optional()
            .hidden()
            .with_help("show untracked files");
        let text = write_spec(&[CommandEntry::new("status").with_option(opt)]);
        let body: Vec<&str> = text.lines().skip(3).map(str::trim).collect();
        assert_eq!(
            body,
            vec![
                "shortname: u",
                "longname: untracked-files",
                "hidden",
                "argument: [=<mode>]",
                "optional",
                "help: \"show untracked files\"",
            ]
        );
    }

    #[test]
    fn test_groupline_keeps_other_fields() {
        let mut opt = OptionEntry::groupline().with_short("q");
        opt.text_line = Some("foo".to_string());
        let text = write_spec(&[CommandEntry::new("a").with_option(opt)]);
        assert!(text.ends_with(
            "    option\n        groupline\n        textline: foo\n        shortname: q\n"
        ));
    }

    #[test]
    fn test_empty_help_is_written() {
        let opt = OptionEntry::option().with_short("x").with_help("");
        let text = write_spec(&[CommandEntry::new("a").with_option(opt)]);
        assert!(text.ends_with("        help: \"\"\n"));
    }

    #[test]
    fn test_empty_commands_render_nothing() {
        assert_eq!(write_spec(&[]), "");
    }
}
