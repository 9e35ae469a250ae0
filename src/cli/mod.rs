//! CLI module for interp
//!
//! This module provides the command-line interface.
//!
//! ## Commands
//!
//! - (no arguments) - Start the REPL in token mode
//! - `repl [--mode tokens|ast] [--prompt TEXT]` - Start the REPL
//! - `--lex <file>` - Print every token of a file
//! - `--parse <file>` - Print the parsed program of a file
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::repl::{PROMPT, ReplConfig, ReplMode};
use crate::version::INTERP_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Tokenizer, parser and REPL for the interp language
#[derive(Parser, Debug)]
#[command(name = "interp")]
#[command(version = INTERP_VERSION)]
#[command(about = "Tokenizer, parser and REPL for the interp language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Debug/development flags
    /// Tokenize a file and print every token
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "parse_file")]
    pub lex_file: Option<PathBuf>,

    /// Parse a file and print the program
    #[arg(long = "parse", value_name = "FILE")]
    pub parse_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive read-echo loop
    Repl {
        /// What to print for each line
        #[arg(long, value_enum, default_value_t = ReplMode::Tokens)]
        mode: ReplMode,
        /// Prompt shown before each line
        #[arg(long, value_name = "TEXT", default_value = PROMPT)]
        prompt: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file);
    }

    let config = match cli.command {
        Some(Command::Repl { mode, prompt }) => ReplConfig { prompt, mode },
        None => ReplConfig::default(),
    };
    commands::run_repl(&config)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_arguments() {
        let cli = Cli::try_parse_from(["interp"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.lex_file.is_none());
        assert!(cli.parse_file.is_none());
    }

    #[test]
    fn test_cli_parse_repl_defaults() {
        let cli = Cli::try_parse_from(["interp", "repl"]).unwrap();
        if let Some(Command::Repl { mode, prompt }) = cli.command {
            assert_eq!(mode, ReplMode::Tokens);
            assert_eq!(prompt, ">> ");
        } else {
            panic!("Expected Repl command");
        }
    }

    #[test]
    fn test_cli_parse_repl_options() {
        let cli = Cli::try_parse_from(["interp", "repl", "--mode", "ast", "--prompt", "? "]).unwrap();
        if let Some(Command::Repl { mode, prompt }) = cli.command {
            assert_eq!(mode, ReplMode::Ast);
            assert_eq!(prompt, "? ");
        } else {
            panic!("Expected Repl command");
        }
    }

    #[test]
    fn test_cli_parse_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["interp", "repl", "--mode", "eval"]).is_err());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["interp", "--lex", "test.it"]).unwrap();
        assert_eq!(cli.lex_file, Some(PathBuf::from("test.it")));

        let cli = Cli::try_parse_from(["interp", "--parse", "test.it"]).unwrap();
        assert_eq!(cli.parse_file, Some(PathBuf::from("test.it")));
    }

    #[test]
    fn test_cli_parse_debug_flags_conflict() {
        assert!(Cli::try_parse_from(["interp", "--lex", "a.it", "--parse", "b.it"]).is_err());
    }

    #[test]
    fn test_execute_missing_file_fails() {
        let cli = Cli::try_parse_from(["interp", "--lex", "definitely/not/here.it"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("definitely/not/here.it"), "{}", err.message);
    }

    #[test]
    fn test_cli_version_matches_crate_version() {
        use clap::CommandFactory;
        assert_eq!(Cli::command().get_version(), Some(INTERP_VERSION));
        assert_eq!(INTERP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
