use std::fs;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use cmdspec_gen::{GeneratorConfig, OutputFormat, SourceInfo, generator_for};
use cmdspec_reader::{SpecDocument, SpecError, parse_bytes};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cmdspec")]
#[command(about = "Read a command-line specification and run a generator over it")]
#[command(version)]
struct Cli {
    /// Specification file to read.
    spec: PathBuf,
    /// Output format (overrides the config file).
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Output file (default: stdout).
    #[arg(long)]
    output: Option<PathBuf>,
    /// YAML generator configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Include hidden options in help previews.
    #[arg(long)]
    include_hidden: bool,
    /// Fail when the specification contains unknown directives.
    #[arg(long)]
    strict: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(&cli)?;

    eprintln!("Reading from {}", cli.spec.display());
    let bytes = fs::read(&cli.spec).map_err(|source| {
        SpecError::Open {
            path: cli.spec.clone(),
            source,
        }
        .to_string()
    })?;
    let doc = parse_bytes(&bytes).map_err(|err| err.to_string())?;
    eprintln!("We have {} commands", doc.command_count());

    if config.strict && doc.has_diagnostics() {
        return Err(strict_failure(&doc));
    }
    let diagnostics = doc.diagnostics.len();
    let commands = doc.into_commands();

    // The checksum covers exactly the parsed bytes.
    let source = SourceInfo::from_bytes(cli.spec.display().to_string(), &bytes);
    let generator = generator_for(&config, Some(source));

    match &config.output {
        Some(path) => {
            let file = create_output(path)?;
            let mut writer = BufWriter::new(file);
            generator
                .generate(&commands, &mut writer)
                .map_err(|err| format!("Generation failed: {err}"))?;
            writer
                .flush()
                .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
            info!(path = %path.display(), format = ?config.format, "Wrote output");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            generator
                .generate(&commands, &mut writer)
                .map_err(|err| format!("Generation failed: {err}"))?;
            writer
                .flush()
                .map_err(|err| format!("Failed to write stdout: {err}"))?;
        }
    }

    info!(
        commands = commands.len(),
        diagnostics,
        "Generation complete"
    );
    Ok(())
}

/// Loads the config file, if any, and applies command-line overrides.
fn resolve_config(cli: &Cli) -> Result<GeneratorConfig, String> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(output) = &cli.output {
        config.output = Some(output.clone());
    }
    config.include_hidden |= cli.include_hidden;
    config.strict |= cli.strict;

    if config.include_hidden && config.format != OutputFormat::Help {
        info!(format = ?config.format, "--include-hidden only affects help output");
    }
    Ok(config)
}

fn strict_failure(doc: &SpecDocument) -> String {
    let mut message = format!(
        "{} unknown directive(s) in strict mode",
        doc.diagnostics.len()
    );
    for diagnostic in &doc.diagnostics {
        message.push_str(&format!("\n  {diagnostic}"));
    }
    message
}

fn create_output(path: &Path) -> Result<fs::File, String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| {
            format!(
                "Failed to create output directory '{}': {err}",
                parent.display()
            )
        })?;
    }
    fs::File::create(path).map_err(|err| format!("Failed to create '{}': {err}", path.display()))
}
