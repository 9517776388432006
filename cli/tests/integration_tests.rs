use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use cmdspec_core::OptionKind;
use cmdspec_reader::parse_str;

const SPEC: &str = "\
command add
    usage
        \"usage: git add [<options>] [--] <pathspec>...\"
    option dryRun
        shortname: n
        longname: dry-run
        help: \"dry run\"
    option
        groupline
    option refresh
        longname: refresh
        hidden

command rm
    usage
        \"usage: git rm [<options>] [--] <file>...\"
";

fn write_spec(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("failed to write spec");
    path
}

fn cmdspec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cmdspec"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cmdspec")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

// ---------------------------------------------------------------------------
// Successful runs
// ---------------------------------------------------------------------------

#[test]
fn reports_command_count_and_writes_json() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(dir.path(), "git.spec", SPEC);

    let out = cmdspec(&[path_str(&spec)]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Reading from"));
    assert!(stderr.contains("We have 2 commands"));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["commands"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["commands"][0]["id"], "add");
    assert_eq!(json["commands"][0]["options"][1]["kind"], "groupline");
    assert_eq!(json["source"]["sha256"].as_str().map(str::len), Some(64));
}

#[test]
fn bundle_checksum_matches_parsed_file() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(dir.path(), "git.spec", SPEC);

    let out = cmdspec(&[path_str(&spec)]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let expected = cmdspec_gen::SourceInfo::from_bytes(path_str(&spec), SPEC.as_bytes());
    assert_eq!(json["source"]["sha256"], expected.sha256.as_str());
    assert_eq!(json["source"]["path"], expected.path.as_str());
}

#[test]
fn spec_format_to_output_file_reparses() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(dir.path(), "git.spec", SPEC);
    let output = dir.path().join("nested").join("out.spec");

    let out = cmdspec(&[
        path_str(&spec),
        "--format",
        "spec",
        "--output",
        path_str(&output),
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());

    let written = fs::read_to_string(&output).unwrap();
    let original = parse_str(SPEC).unwrap();
    assert_eq!(parse_str(&written).unwrap().commands, original.commands);
    assert_eq!(original.commands[0].options[1].kind, OptionKind::GroupLine);
}

#[test]
fn help_format_hides_hidden_options_unless_asked() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(dir.path(), "git.spec", SPEC);

    let out = cmdspec(&[path_str(&spec), "--format", "help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("    -n, --dry-run         dry run"));
    assert!(!stdout.contains("--refresh"));

    let out = cmdspec(&[path_str(&spec), "--format", "help", "--include-hidden"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("    --refresh"));
}

#[test]
fn config_file_sets_format_and_flag_overrides_it() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(dir.path(), "git.spec", SPEC);
    let config = dir.path().join("cmdspec.yml");
    fs::write(&config, "format: yaml\n").unwrap();

    let out = cmdspec(&[path_str(&spec), "--config", path_str(&config)]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("format_version:"));
    assert!(stdout.contains("kind: groupline"));

    let out = cmdspec(&[
        path_str(&spec),
        "--config",
        path_str(&config),
        "--format",
        "spec",
    ]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("command add\n"));
}

#[test]
fn unknown_directive_warns_but_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(
        dir.path(),
        "odd.spec",
        "command a\n    usage\n    option x\n        sparkle\n        shortname: x\n",
    );

    let out = cmdspec(&[path_str(&spec), "--format", "spec"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unknown directive"));
    assert!(String::from_utf8_lossy(&out.stdout).contains("shortname: x"));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn strict_mode_rejects_unknown_directive() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(
        dir.path(),
        "odd.spec",
        "command a\n    usage\n    option x\n        sparkle\n",
    );

    let out = cmdspec(&[path_str(&spec), "--strict"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("1 unknown directive(s) in strict mode"));
    assert!(stderr.contains("line 4: unknown directive: sparkle"));
}

#[test]
fn malformed_spec_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(dir.path(), "bad.spec", "usage\ncommand a\n");

    let out = cmdspec(&[path_str(&spec)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&out.stderr)
            .contains("error: expected 'command' in line 1: got usage")
    );
}

#[test]
fn empty_spec_fails() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(dir.path(), "empty.spec", "");

    let out = cmdspec(&[path_str(&spec)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("empty file"));
}

#[test]
fn missing_spec_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.spec");

    let out = cmdspec(&[path_str(&missing)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("couldn't open"));
}

#[test]
fn missing_argument_is_usage_error() {
    let out = cmdspec(&[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("<SPEC>"));
}
