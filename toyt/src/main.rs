//! Toyt CLI - a command-line harness for the toy language lexer.
//!
//! This is the main entry point for the toyt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in `commands`.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::SourceInput, run_init, run_keywords, run_tokens, InitArgs, KeywordsArgs, TokensArgs,
};
use config::Config;
use error::ToytError;

/// Toyt - inspect how the toy language lexer sees a piece of source
///
/// Toyt prints token streams, lists the reserved words of each dialect and
/// writes starter configuration files.
#[derive(Parser, Debug)]
#[command(name = "toyt")]
#[command(author = "Toyc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the token stream of toy language source", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "TOYT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TOYT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "TOYT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the toyt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a source file
    ///
    /// Reads a file, an inline expression or standard input and prints one
    /// token per line. Diagnostics go to standard error.
    Tokens(TokensCommand),

    /// List the reserved words of a dialect
    Keywords(KeywordsCommand),

    /// Write a default toyt.toml
    Init(InitCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file (default: standard input)
    file: Option<PathBuf>,

    /// Lex this text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Keyword dialect (standard, go)
    #[arg(short, long)]
    dialect: Option<String>,

    /// Prefix each token with its line and column
    #[arg(long)]
    spans: bool,

    /// Exit with an error when an illegal token is produced
    #[arg(long)]
    deny_illegal: bool,
}

/// Arguments for the keywords subcommand.
#[derive(Parser, Debug)]
struct KeywordsCommand {
    /// Keyword dialect (standard, go)
    #[arg(short, long)]
    dialect: Option<String>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write toyt.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing toyt.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the toyt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler. `init` runs without
/// loading the configuration so it can replace a broken one.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    match cli.command {
        Commands::Init(args) => execute_init(args)?,
        command => {
            let config = load_config(cli.config.as_deref())?;
            execute_command(command, config)?;
        },
    }
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to standard error so standard output only carries tokens.
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
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
        .map_err(|e| ToytError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("while loading {}", path.display()))?,
        None => Config::load()?,
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> error::Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Keywords(args) => run_keywords(KeywordsArgs { dialect: args.dialect }, config),
        Commands::Init(args) => execute_init(args),
    }
}

/// Execute the init command.
fn execute_init(args: InitCommand) -> error::Result<()> {
    run_init(InitArgs {
        path: args.path,
        force: args.force,
    })
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> error::Result<()> {
    let tokens_args = TokensArgs {
        input: SourceInput::from_args(args.file, args.expr),
        format: args.format,
        dialect: args.dialect,
        spans: args.spans,
        deny_illegal: args.deny_illegal,
    };
    run_tokens(tokens_args, config)
}
