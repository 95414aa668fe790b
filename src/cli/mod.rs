//! CLI module for QuestLang
//!
//! ## Commands
//!
//! - `check [FILE]` - Run the syntax checker and report every error (default action)
//! - `lex [FILE]` - Print the token stream
//!
//! `FILE` may be `-` to read stdin, and both commands accept `-c CODE` for inline source.
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

use crate::version::QUESTLANG_VERSION;
use commands::Input;

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

/// Tokenizer and syntax checker for QuestLang
#[derive(Parser, Debug)]
#[command(name = "questlang")]
#[command(version = QUESTLANG_VERSION)]
#[command(about = "Tokenizer and syntax checker for the QuestLang command language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given); `-` reads stdin
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Log checker decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check syntax and report every error found
    Check {
        /// Source file to check; `-` reads stdin
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Check inline source code
        #[arg(short = 'c', long = "command", value_name = "CODE")]
        command: Option<String>,
        /// Render errors as plain text excerpts (no colors or unicode)
        #[arg(long)]
        plain: bool,
    },

    /// Print the token stream
    Lex {
        /// Source file to tokenize; `-` reads stdin
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Tokenize inline source code
        #[arg(short = 'c', long = "command", value_name = "CODE")]
        command: Option<String>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run(cli: Cli) {
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
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Check { file, command, plain }) => {
            let source = commands::load(&resolve_input(file, command, "check")?)?;
            commands::check_source(&source, plain)
        }
        Some(Command::Lex { file, command }) => {
            let source = commands::load(&resolve_input(file, command, "lex")?)?;
            commands::lex_source(&source)
        }
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                let source = commands::load(&Input::from_path(file))?;
                commands::check_source(&source, false)
            } else {
                Err(CliError::failure(
                    "Error: expected a file to check (try `questlang --help`)",
                ))
            }
        }
    }
}

/// Turn the `FILE` / `-c CODE` pair of a subcommand into one input.
fn resolve_input(file: Option<PathBuf>, code: Option<String>, subcommand: &str) -> CliResult<Input> {
    match (file, code) {
        (_, Some(code)) if code.is_empty() => Err(CliError::failure(
            "Error: -c/--command requires source code string",
        )),
        (_, Some(code)) => Ok(Input::Inline(code)),
        (Some(file), None) => Ok(Input::from_path(file)),
        (None, None) => Err(CliError::failure(format!(
            "Error: {subcommand} requires a file path, `-` or -c \"code\""
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["questlang", "quest.ql"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("quest.ql")));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["questlang", "check", "quest.ql", "--plain"]).unwrap();
        if let Some(Command::Check { file, command, plain }) = cli.command {
            assert_eq!(file, Some(PathBuf::from("quest.ql")));
            assert!(command.is_none());
            assert!(plain);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_with_code() {
        let cli = Cli::try_parse_from(["questlang", "check", "-c", "if (hero) { jump }"]).unwrap();
        if let Some(Command::Check { command, .. }) = cli.command {
            assert_eq!(command.as_deref(), Some("if (hero) { jump }"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::try_parse_from(["questlang", "lex", "-"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Lex { .. })));
    }

    #[test]
    fn test_cli_parse_verbose_is_global() {
        let cli = Cli::try_parse_from(["questlang", "lex", "quest.ql", "--verbose"]).unwrap();
        assert!(cli.verbose);
        let cli = Cli::try_parse_from(["questlang", "-v", "quest.ql"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_file_conflicts_with_code() {
        assert!(Cli::try_parse_from(["questlang", "check", "quest.ql", "-c", "jump"]).is_err());
    }

    #[test]
    fn test_resolve_input() {
        assert!(matches!(
            resolve_input(Some(PathBuf::from("-")), None, "lex").unwrap(),
            Input::Stdin
        ));
        assert!(matches!(
            resolve_input(None, Some("jump".to_string()), "lex").unwrap(),
            Input::Inline(ref code) if code == "jump"
        ));
        assert!(resolve_input(None, Some(String::new()), "check").is_err());
        let err = resolve_input(None, None, "check").unwrap_err();
        assert!(err.message.contains("check requires"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
