//! fastdt CLI - inspect and check fastd configuration files.
//!
//! This is the main entry point for the fastdt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{CheckArgs, CheckCommand, TokensArgs, TokensCommand};
use config::Config;
use error::{FastdtError, Result};

/// fastdt - inspect and check fastd configuration files
///
/// fastdt runs the fastdc streaming lexer over configuration files and
/// prints their tokens or reports lexical errors.
#[derive(Parser, Debug)]
#[command(name = "fastdt")]
#[command(author = "fastdc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and check fastd configuration files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "FASTDT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FASTDT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "FASTDT_NO_COLOR")]
    no_color: bool,

    /// Lexer lookahead window size in bytes
    #[arg(long, global = true)]
    capacity: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the fastdt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a configuration file
    ///
    /// Lexes the file and prints one token per line. Stops at the first
    /// lexical error and reports it.
    Tokens(TokensCommandArgs),

    /// Check configuration files for lexical errors
    ///
    /// Lexes every file and reports the first lexical error of each.
    Check(CheckCommandArgs),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Configuration file, or `-` for standard input
    input: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Do not print token locations
    #[arg(long)]
    no_spans: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Configuration files, `-` for standard input
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Main entry point for the fastdt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, cli.capacity, config)
}

/// Initialize the logging system.
///
/// Logs go to standard error so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| FastdtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, capacity: Option<usize>, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            let args = TokensArgs {
                input: args.input,
                format: args.format,
                no_spans: args.no_spans,
                capacity,
            };
            TokensCommand::new(args, config).run()
        },
        Commands::Check(args) => {
            let args = CheckArgs {
                inputs: args.inputs,
                capacity,
            };
            CheckCommand::new(args, config).run()
        },
    }
}
