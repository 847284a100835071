use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, info};
use rayon::prelude::*;

use savio::{decode_path, serialize, write_csv, DecodeConfig, DecodedFile, SavError};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "savio - Decode $FL2 statistical system files to JSON, CSV or a summary")]
struct Cli {
    /// System files to decode
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Reject inputs larger than this many bytes
    #[arg(long, value_name = "N")]
    max_bytes: Option<u64>,

    /// Accept files without a .sav extension
    #[arg(long)]
    any_extension: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Summary,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = DecodeConfig::default().with_require_extension(!cli.any_extension);
    if let Some(limit) = cli.max_bytes {
        config = config.with_max_input_bytes(limit);
    }

    let start_time = std::time::Instant::now();
    let results: Vec<_> = cli
        .files
        .par_iter()
        .map(|path| (path, decode_path(path, &config)))
        .collect();

    let mut failed = 0;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (path, result) in results {
        let written = result.and_then(|file| {
            info!(
                "{}: {} variables, stream ended {:?}",
                path.display(),
                file.variables().len(),
                file.stream().end
            );
            render(&file, cli.format, &mut out)
        });
        if let Err(err) = written {
            debug!("{}: {:?}", path.display(), err);
            let _ = report_failure(path, &err, &mut io::stderr());
            failed += 1;
        }
    }
    info!("decoded {} files in {:.2?}", cli.files.len(), start_time.elapsed());

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// One line per failed file
fn report_failure<W: Write>(path: &Path, err: &SavError, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}: {}", path.display(), err)
}

fn render<W: Write>(file: &DecodedFile, format: OutputFormat, out: &mut W) -> Result<(), SavError> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serialize(file))?,
        OutputFormat::Csv => write_csv(file, &mut *out)?,
        OutputFormat::Summary => print_summary(file, out)?,
    }
    Ok(())
}

fn print_summary<W: Write>(file: &DecodedFile, out: &mut W) -> io::Result<()> {
    let metadata = file.metadata();
    let label = if metadata.file_label.is_empty() {
        "N/A"
    } else {
        metadata.file_label.as_str()
    };
    writeln!(out, "File label: {label}")?;
    writeln!(out, "Created: {}", metadata.creation_date)?;
    writeln!(out, "Variables: {}", file.variable_count())?;
    match file.case_count() {
        n if n < 0 => writeln!(out, "Cases: unknown")?,
        n => writeln!(out, "Cases: {n}")?,
    }
    writeln!(out)?;
    writeln!(out, "{:<10} {:<8} {:>5}  Label", "Name", "Type", "Width")?;
    for variable in file.variables() {
        writeln!(
            out,
            "{:<10} {:<8} {:>5}  {}",
            variable.name,
            variable.kind.to_string(),
            variable.width,
            variable.label.as_deref().unwrap_or("N/A")
        )?;
    }
    writeln!(out)
}
