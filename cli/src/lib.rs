//! copy / move - file transfer commands
//!
//! Shared entry point of the `copy` and `move` binaries. The name the
//! process was invoked under picks the operation; any other name does
//! nothing.

use clap::{CommandFactory, FromArgMatches, Parser};
use cpmv::{Error as CpmvError, Operation, Prompt, TransferOptions, run_batch};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Copy or move regular files into a directory.
///
/// Usage:
///   copy SOURCE... DIRECTORY
///   move SOURCE... DIRECTORY
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "File names may start with '-'. Put '--' before the first path if it does."
)]
struct Args {
    /// Source file(s)
    #[arg(
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        value_name = "SOURCE"
    )]
    sources: Vec<PathBuf>,

    /// Destination directory
    ///
    /// For copy, a character or block device is accepted as well.
    #[arg(required = true, allow_hyphen_values = true, value_name = "DIRECTORY")]
    destination: PathBuf,
}

/// Environment variable overriding the streaming block size.
const ENV_BLOCK_SIZE: &str = "CPMV_BLOCK_SIZE";

/// Environment variable enabling copy-then-unlink for cross-device moves.
const ENV_CROSS_DEVICE_FALLBACK: &str = "CPMV_CROSS_DEVICE_FALLBACK";

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidConfig {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error(transparent)]
    Fatal(#[from] CpmvError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig { .. } => 2,
            Self::Fatal(_) => 1,
        }
    }
}

/// Run the command selected by the program name, exiting on failure.
pub fn run() {
    let Some(operation) = std::env::args_os()
        .next()
        .and_then(Operation::from_program_name)
    else {
        return;
    };

    init_logging();

    if let Err(error) = run_operation(operation) {
        eprintln!("error: {}", error);
        std::process::exit(error.exit_code());
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Ignore the error from a second init; there is only one caller
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_operation(operation: Operation) -> CliResult<()> {
    let about = match operation {
        Operation::Copy => "Copy regular files into a directory",
        Operation::Move => "Move regular files into a directory by hard link",
    };
    let matches = Args::command()
        .name(operation.name())
        .bin_name(operation.name())
        .about(about)
        .get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let options = options_from_env(|name| std::env::var(name).ok())?;
    tracing::debug!(
        operation = operation.name(),
        block_size = options.block_size,
        cross_device_fallback = options.cross_device_fallback,
        "starting batch"
    );

    let mut paths = args.sources;
    paths.push(args.destination);

    let summary = run_batch(
        operation,
        &paths,
        &options,
        &mut Prompt::stdio(),
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    tracing::debug!(
        transferred = summary.transferred,
        declined = summary.declined,
        failed = summary.failed,
        "batch finished"
    );

    Ok(())
}

/// Build options from the environment, read through `lookup`.
fn options_from_env(lookup: impl Fn(&str) -> Option<String>) -> CliResult<TransferOptions> {
    let mut options = TransferOptions::default();

    if let Some(value) = lookup(ENV_BLOCK_SIZE) {
        let size = parse_block_size(&value).ok_or(CliError::InvalidConfig {
            name: ENV_BLOCK_SIZE,
            value: value.clone(),
            reason: "expected a positive integer",
        })?;
        options = options.with_block_size(size);
    }

    if let Some(value) = lookup(ENV_CROSS_DEVICE_FALLBACK) {
        let enabled = parse_switch(&value).ok_or(CliError::InvalidConfig {
            name: ENV_CROSS_DEVICE_FALLBACK,
            value: value.clone(),
            reason: "expected 1/true/yes or 0/false/no",
        })?;
        if enabled {
            options = options.with_cross_device_fallback();
        }
    }

    Ok(options)
}

fn parse_block_size(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
