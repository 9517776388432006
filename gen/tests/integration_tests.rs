use cmdspec_gen::{
    GeneratorConfig, HelpGenerator, OutputFormat, SourceInfo, SpecBundle, SpecGenerator,
    generate_to_string, generator_for,
};
use cmdspec_reader::parse_str;

const SPEC: &str = "\
command add
    usage
        \"usage: git add [<options>] [--] <pathspec>...\"
        \"\"
    option dryRun
        shortname: n
        longname: dry-run
        help: \"dry run\"
    option
        groupline
    option refresh
        longname: refresh
        hidden
        help: \"don't add, only refresh the index\"
command notesAdd \"notes add\"
    usage
        \"usage: git notes add [<options>] [<object>]\"
";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn config(format: OutputFormat) -> GeneratorConfig {
    GeneratorConfig {
        format,
        ..GeneratorConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Bundle formats
// ---------------------------------------------------------------------------

#[test]
fn test_json_bundle_records_source() {
    let doc = parse_str(SPEC).unwrap();
    let source = SourceInfo::from_bytes("git.spec", SPEC.as_bytes());
    let generator = generator_for(&config(OutputFormat::Json), Some(source.clone()));

    let text = generate_to_string(generator.as_ref(), &doc.commands).unwrap();
    let bundle: SpecBundle = serde_json::from_str(&text).unwrap();
    assert_eq!(bundle.source, Some(source));
    assert_eq!(bundle.commands, doc.commands);
}

#[test]
fn test_yaml_bundle_preserves_order() {
    let doc = parse_str(SPEC).unwrap();
    let generator = generator_for(&config(OutputFormat::Yaml), None);

    let text = generate_to_string(generator.as_ref(), &doc.commands).unwrap();
    let bundle: SpecBundle = serde_yaml::from_str(&text).unwrap();
    let ids: Vec<&str> = bundle.commands.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["add", "notesAdd"]);
    assert!(text.contains("kind: groupline"));
}

// ---------------------------------------------------------------------------
// Text formats
// ---------------------------------------------------------------------------

#[test]
fn test_spec_output_reparses() {
    let doc = parse_str(SPEC).unwrap();
    let text = generate_to_string(&SpecGenerator, &doc.commands).unwrap();
    assert_eq!(parse_str(&text).unwrap().commands, doc.commands);
}

#[test]
fn test_help_preview_matches_git_layout() {
    let doc = parse_str(SPEC).unwrap();
    let text = generate_to_string(&HelpGenerator::default(), &doc.commands).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "=== add ===");
    assert_eq!(lines[1], "usage: git add [<options>] [--] <pathspec>...");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "    -n, --dry-run         dry run");
    assert_eq!(lines[4], "");
    assert!(!text.contains("--refresh"));
    assert!(text.contains("=== notes add ==="));
}
