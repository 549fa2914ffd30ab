//! Sheetseek - search every cell of every sheet of a batch of spreadsheets

mod config;
mod error;

use anyhow::{Context, bail};
use error::UsageError;
use sheetseek_core::report::{render_markdown, to_json, write_markdown};
use sheetseek_core::{FileErrorPolicy, Query, SearchError, SearchSession, UploadedFile};
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: sheetseek [OPTIONS] <PATTERN> <FILE>...");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <PATTERN>                 Text to look for (case-insensitive substring)");
    eprintln!("  <FILE>...                 Workbooks to search (.xls, .xlsx)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <FILE>       Write the markdown report to a file");
    eprintln!("  --json                    Print the search record as JSON");
    eprintln!("  --skip-errors             Skip files that fail to decode instead of aborting");
    eprintln!("  --config <FILE>           Load options from this TOML file");
    eprintln!("  --no-config               Ignore the user config file");
    eprintln!("  -h, --help                Print help");
}

#[derive(Debug, Default, PartialEq)]
struct Cli {
    pattern: String,
    files: Vec<PathBuf>,
    output_file: Option<PathBuf>,
    json: bool,
    skip_errors: bool,
    config_file: Option<PathBuf>,
    no_config: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Cli, UsageError> {
    let mut cli = Cli::default();
    let mut pattern: Option<String> = None;
    let mut only_positional = false;

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if only_positional || arg == "-" || !arg.starts_with('-') {
            if pattern.is_none() {
                pattern = Some(arg.to_string());
            } else {
                cli.files.push(PathBuf::from(arg));
            }
        } else {
            match arg {
                "-h" | "--help" => {
                    cli.help = true;
                    return Ok(cli);
                }
                "-o" | "--output" => {
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| UsageError::MissingValue(arg.to_string()))?;
                    cli.output_file = Some(PathBuf::from(value));
                }
                "--config" => {
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| UsageError::MissingValue(arg.to_string()))?;
                    cli.config_file = Some(PathBuf::from(value));
                }
                "--json" => cli.json = true,
                "--skip-errors" => cli.skip_errors = true,
                "--no-config" => cli.no_config = true,
                "--" => only_positional = true,
                _ => return Err(UsageError::UnknownOption(arg.to_string())),
            }
        }
        i += 1;
    }

    cli.pattern = pattern.ok_or(UsageError::MissingPattern)?;
    if cli.files.is_empty() {
        return Err(UsageError::MissingFiles);
    }
    Ok(cli)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Reject a blank pattern before any file is read.
    if Query::new(&cli.pattern).is_none() {
        bail!(SearchError::EmptyPattern);
    }

    let (mut options, warnings) = config::load_options(cli.config_file.as_deref(), !cli.no_config);
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
    if cli.skip_errors {
        options.on_file_error = FileErrorPolicy::SkipFile;
    }
    debug!(?options, "search options");

    let files = cli
        .files
        .iter()
        .map(|path| {
            UploadedFile::from_path(path).with_context(|| format!("Failed to read {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut session = SearchSession::new(options);
    let record = session.submit(&cli.pattern, files)?;

    if cli.json {
        println!("{}", to_json(record)?);
    } else if let Some(output_path) = cli.output_file {
        write_markdown(&output_path, record)?;
        println!("Exported to {}", output_path.display());
    } else {
        let stdout = std::io::stdout();
        render_markdown(&mut stdout.lock(), record)?;
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(2);
        }
    };
    if cli.help {
        print_usage();
        return;
    }

    init_tracing();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
