//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod generate;
mod list;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::layout::Orientation;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "GGST_TEAM_LOG";

/// ggst-team - Generate Guilty Gear -Strive- 3-on-3 team images
#[derive(Parser, Debug)]
#[command(name = "ggst-team")]
#[command(about = "Generate 3-on-3 team images for Guilty Gear -Strive-")]
#[command(version, propagate_version = true, disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version, global = true)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a team image to PNG
    Generate(GenerateArgs),
    /// List every character with its aliases
    List,
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Team name
    #[arg(short, long)]
    pub team: Option<String>,

    /// Members as "Player:Character, Player:Character, Player:Character"
    #[arg(short, long)]
    pub members: Option<String>,

    /// Output directory (default: ./output, created if missing)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Member arrangement
    #[arg(short, long, value_enum)]
    pub layout: Option<Orientation>,

    /// Image width in pixels
    #[arg(long, allow_negative_numbers = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long, allow_negative_numbers = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Background image, relative to the assets directory
    #[arg(short, long)]
    pub background: Option<PathBuf>,

    /// Event name shown as a banner above the team name
    #[arg(short, long)]
    pub event: Option<String>,

    /// Asset directory with portraits and fonts (default: ./assets)
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Config file (default: discovered ggst-team.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Install the stderr log subscriber, filtered by `GGST_TEAM_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Position of the token clap rejected as unknown, if it can be found in `args`.
fn rejected_token(args: &[OsString], err: &clap::Error) -> Option<usize> {
    let invalid = [ContextKind::InvalidArg, ContextKind::InvalidSubcommand]
        .into_iter()
        .find_map(|kind| match err.get(kind) {
            Some(ContextValue::String(s)) => Some(s),
            _ => None,
        })?;
    let with_value = format!("{}=", invalid);
    args.iter()
        .enumerate()
        .skip(1)
        .rev()
        .find(|(_, tok)| {
            let tok = tok.to_string_lossy();
            tok == invalid.as_str() || tok.starts_with(&with_value)
        })
        .map(|(i, _)| i)
}

/// Parse arguments, dropping unknown flags and stray positionals.
///
/// Each rejected token is removed and parsing retried; every other clap
/// error (missing value, bad choice, out-of-range number) is returned.
pub fn parse_lenient<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    loop {
        let err = match Cli::try_parse_from(&args) {
            Ok(cli) => return Ok(cli),
            Err(err) => err,
        };
        if !matches!(err.kind(), ErrorKind::UnknownArgument | ErrorKind::InvalidSubcommand) {
            return Err(err);
        }
        match rejected_token(&args, &err) {
            Some(pos) => {
                let dropped = args.remove(pos);
                tracing::warn!("ignoring unknown argument '{}'", dropped.to_string_lossy());
            }
            None => return Err(err),
        }
    }
}

/// Run the CLI and return the process exit code
pub fn run() -> ExitCode {
    init_logging();

    let cli = match parse_lenient(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(EXIT_SUCCESS),
                _ => ExitCode::from(EXIT_ERROR),
            };
        }
    };

    match cli.command {
        Some(Commands::Generate(args)) => generate::run_generate(&args),
        Some(Commands::List) => list::run_list(),
        None => {
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}
