//! # RatonGato CLI Library
//!
//! Terminal host for the cats-vs-mouse rule engine. It owns everything the
//! engine deliberately leaves out: player names, configuration, move logs on
//! disk, and user-facing messages.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and dispatches to a subcommand.
//! [`run_with_input`] does the same with an explicit input stream, which is
//! how tests drive interactive play.
//!
//! ```no_run
//! use std::io;
//! let code = ratongato_cli::run(["ratongato", "board"], &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Hot-seat game, optionally recorded to a JSONL move log
//! - `replay`: Step through a move log and show the resulting board
//! - `verify`: Strictly validate a move log
//! - `board`: Print the cell numbering
//! - `cfg`: Display current configuration settings

use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
pub mod counter;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod record;
pub mod ui;
pub mod validation;

use cli::{Commands, RatonGatoCli};
use clap::Parser;
use commands::{
    handle_board_command, handle_cfg_command, handle_play_command, handle_replay_command,
    handle_verify_command,
};

pub use config::{Config, ConfigError, ConfigResolved, ValueSource};
pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["play", "replay", "verify", "board", "cfg"];

/// Main entry point for the CLI application, reading interactive input from stdin.
///
/// Returns the process exit code: `0` on success, `2` on errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], with interactive input taken from `input`.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// let mut input = Cursor::new("0 9\nq\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = ratongato_cli::run_with_input(
///     ["ratongato", "play", "--cat", "alice", "--mouse", "bob"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8_lossy(&out).contains("Moves played: 1"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RatonGatoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play {
            cat,
            mouse,
            record,
            hints,
        } => handle_play_command(cat, mouse, record, hints, input, out, err),
        Commands::Replay { input: path } => handle_replay_command(path, out, err),
        Commands::Verify { input: path } => {
            let Some(path) = path else {
                let _ = ui::write_error(err, "input required");
                return exit_code::ERROR;
            };
            handle_verify_command(path, out, err)
        }
        Commands::Board => handle_board_command(out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and are not failures
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "RatonGato CLI");
    write_or_exit!(err, "Usage: ratongato <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: ratongato --help");
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str], input: &str) -> (i32, String, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn unknown_command_lists_commands() {
        let (code, _, err) = run_args(&["ratongato", "fly"], "");
        assert_eq!(code, exit_code::ERROR);
        for c in COMMANDS {
            assert!(err.contains(c), "missing {} in usage", c);
        }
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, _) = run_args(&["ratongato", "--help"], "");
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("play"));
    }

    #[test]
    fn verify_without_input_fails() {
        let (code, _, err) = run_args(&["ratongato", "verify"], "");
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("input required"));
    }

    #[test]
    fn handler_error_is_reported_with_error_code() {
        let (code, _, err) = run_args(
            &["ratongato", "replay", "--input", "/nonexistent/game.jsonl"],
            "",
        );
        assert_eq!(code, exit_code::ERROR);
        assert!(err.starts_with("Error: I/O error"), "{}", err);
    }

    #[test]
    fn board_command_dispatch() {
        let (code, out, _) = run_args(&["ratongato", "board"], "");
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("59"));
    }
}
