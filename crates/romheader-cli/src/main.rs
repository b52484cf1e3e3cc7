use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use glob::glob;
use romheader_core::{HeaderError, Layout, Report, inspect_image, populate};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing_subscriber::EnvFilter;

mod display;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ROMHEADER_BUILD_COMMIT"),
    " ",
    env!("ROMHEADER_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "romheader")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Header analyzer for Sega 8-bit and 16-bit cartridge images.",
    long_about = None,
    after_help = "Examples:\n  romheader show sonic.md\n  romheader show sonic.md --field region\n  romheader fields game.sms\n  romheader report sonic.md -o header.json"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print decoded header fields.
    Show {
        /// Path to a cartridge image
        input: PathBuf,

        /// Only print this field
        #[arg(short, long)]
        field: Option<String>,

        /// Only probe this header layout
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,

        /// Suppress informational lines
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code when no official header is found
        #[arg(long)]
        strict: bool,
    },
    /// List the field names of the detected header layout.
    Fields {
        /// Path to a cartridge image
        input: PathBuf,

        /// Only probe this header layout
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,

        /// Print field descriptors as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a versioned JSON header report.
    Report {
        /// Path to a cartridge image
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Only probe this header layout
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    /// 16-bit Mega Drive / Genesis / 32X
    Smd,
    /// 8-bit Master System / Game Gear
    Sms,
}

impl From<LayoutArg> for Layout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Smd => Layout::Smd,
            LayoutArg::Sms => Layout::Sms,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Show {
            input,
            field,
            layout,
            quiet,
            strict,
        } => cmd_show(input, field, layout.map(Into::into), quiet, strict),
        Commands::Fields {
            input,
            layout,
            json,
        } => cmd_fields(input, layout.map(Into::into), json),
        Commands::Report {
            input,
            output,
            stdout,
            layout,
            pretty,
            compact,
            quiet,
        } => cmd_report(
            input,
            output,
            stdout,
            layout.map(Into::into),
            pretty,
            compact,
            quiet,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

/// Raw image plus the path it was read from.
struct LoadedImage {
    path: PathBuf,
    bytes: Vec<u8>,
}

fn load_image(input: &Path) -> Result<LoadedImage, CliError> {
    let path = resolve_input_path(input)?;
    validate_input_file(&path)?;
    let bytes =
        fs::read(&path).with_context(|| format!("Failed to read input file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "image loaded");
    Ok(LoadedImage { path, bytes })
}

fn cmd_show(
    input: PathBuf,
    field: Option<String>,
    layout: Option<Layout>,
    quiet: bool,
    strict: bool,
) -> Result<(), CliError> {
    let image = load_image(&input)?;
    if !quiet {
        println!("Read {} bytes from file\n", image.bytes.len());
    }

    let header = match populate(&image.bytes, layout) {
        Ok(header) => header,
        Err(err) => return unofficial(&err, strict),
    };
    if !quiet {
        println!("Image type: {}", header.layout().description());
    }

    let lines = match field {
        Some(name) => {
            let entry = header.lookup_field(&name).map_err(|err| match err {
                HeaderError::UnknownField { valid, .. } => CliError::new(
                    format!("invalid field '{}'", name),
                    Some(format!("valid fields: {}", valid.join(", "))),
                ),
                other => CliError::new(other.to_string(), None),
            })?;
            display::render_entry(entry)
        }
        None => display::render_header(&header),
    };
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_fields(input: PathBuf, layout: Option<Layout>, json: bool) -> Result<(), CliError> {
    let image = load_image(&input)?;
    let header = match populate(&image.bytes, layout) {
        Ok(header) => header,
        Err(err) => return unofficial(&err, true),
    };

    if json {
        let descriptors = header
            .entries()
            .iter()
            .map(|entry| entry.descriptor)
            .collect::<Vec<_>>();
        let json = serde_json::to_string_pretty(&descriptors).context("JSON serialization failed")?;
        println!("{}", json);
    } else {
        for name in header.fields() {
            println!("{}", name);
        }
    }
    Ok(())
}

fn cmd_report(
    input: PathBuf,
    output: Option<PathBuf>,
    stdout: bool,
    layout: Option<Layout>,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let image = load_image(&input)?;
    let output = if stdout {
        None
    } else {
        Some(output.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--output or --stdout".to_string()),
            )
        })?)
    };

    if let Some(output) = output.as_ref() {
        ensure_distinct_paths(&image.path, output)?;
    }

    let mut rep = inspect_image(&image.path.display().to_string(), &image.bytes, layout);
    if let Some(stamp) = modified_rfc3339(&image.path) {
        rep.generated_at = stamp;
    }
    let json = serialize_report(&rep, pretty, compact)?;

    let Some(output) = output else {
        print!("{}", json);
        return Ok(());
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&output, json)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;

    if !quiet {
        if let Some(reason) = rep.unofficial_reason.as_ref() {
            eprintln!("Unofficial image: {}", reason);
        }
        eprintln!("OK: report written -> {}", output.display());
    }
    Ok(())
}

fn unofficial(err: &HeaderError, strict: bool) -> Result<(), CliError> {
    if strict {
        return Err(CliError::new(
            format!("no official header: {}", err),
            Some("try --layout smd or --layout sms".to_string()),
        ));
    }
    println!("Unofficial image: {}", err);
    Ok(())
}

fn ensure_distinct_paths(input: &Path, output: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Ok(output_dir) = fs::canonicalize(parent) else {
        return Ok(());
    };
    let file_name = output
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid report path"))?;
    if output_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("report path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn modified_rfc3339(path: &Path) -> Option<String> {
    let modified = fs::metadata(path).and_then(|meta| meta.modified()).ok()?;
    OffsetDateTime::from(modified).format(&Rfc3339).ok()
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a cartridge image such as .md, .bin, .sms or .gg".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a cartridge image such as .md, .bin, .sms or .gg".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        count => {
            let listed = matches
                .iter()
                .take(3)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let more = if count > 3 { ", ..." } else { "" };
            Err(CliError::new(
                format!(
                    "multiple files match pattern '{}' ({} matches); matches: {}{}",
                    pattern, count, listed, more
                ),
                Some("pass a single image file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
