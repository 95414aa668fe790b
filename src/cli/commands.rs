//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};
use thiserror::Error;

use questlang_syntax::checker::{self, CheckReport};
use questlang_syntax::diagnostics::{self, SyntaxError};
use questlang_syntax::lexer::Lexer;

use super::{CliError, CliResult, ExitCode};

/// Maximum source size (10 MiB)
///
/// Larger inputs are rejected before tokenizing.
pub const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Name used for stdin in diagnostics.
const STDIN_NAME: &str = "<stdin>";
/// Name used for `-c` source in diagnostics.
const INLINE_NAME: &str = "<command>";

// ============================================================================
// Source loading
// ============================================================================

/// Where a command reads its source from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Stdin,
    Inline(String),
}

impl Input {
    /// Map a `FILE` argument to an input; `-` means stdin.
    pub fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" { Input::Stdin } else { Input::File(path) }
    }
}

/// Source text together with the name diagnostics should show for it.
#[derive(Debug, Clone)]
pub struct Source {
    pub name: String,
    pub text: String,
}

/// Failure to obtain source text.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Cannot access file '{path}': {source}")]
    Access { path: String, source: io::Error },

    #[error("Source '{name}' is too large ({size} bytes, max {max} bytes)", max = MAX_SOURCE_SIZE)]
    TooLarge { name: String, size: u64 },

    #[error("Error reading '{name}': {source}")]
    Read { name: String, source: io::Error },
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        CliError::failure(format!("Error: {err}"))
    }
}

/// Load the source text for an input.
pub fn load(input: &Input) -> CliResult<Source> {
    let source = match input {
        Input::File(path) => {
            let name = path.to_string_lossy().to_string();
            let text = read_source(&name)?;
            Source { name, text }
        }
        Input::Stdin => Source {
            name: STDIN_NAME.to_string(),
            text: read_limited(io::stdin().lock(), STDIN_NAME)?,
        },
        Input::Inline(code) => {
            check_size(INLINE_NAME, code.len() as u64)?;
            Source {
                name: INLINE_NAME.to_string(),
                text: code.clone(),
            }
        }
    };
    tracing::debug!(name = %source.name, bytes = source.text.len(), "loaded source");
    Ok(source)
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error, or not UTF-8)
/// - The file exceeds `MAX_SOURCE_SIZE` (10 MiB)
pub fn read_source(file_path: &str) -> Result<String, SourceError> {
    // Check file size before reading
    let metadata = fs::metadata(file_path).map_err(|source| SourceError::Access {
        path: file_path.to_string(),
        source,
    })?;
    check_size(file_path, metadata.len())?;

    fs::read_to_string(file_path).map_err(|source| SourceError::Read {
        name: file_path.to_string(),
        source,
    })
}

/// Read at most `MAX_SOURCE_SIZE` bytes from a stream whose length is not known up front.
pub fn read_limited(reader: impl Read, name: &str) -> Result<String, SourceError> {
    let mut text = String::new();
    reader
        .take(MAX_SOURCE_SIZE + 1)
        .read_to_string(&mut text)
        .map_err(|source| SourceError::Read {
            name: name.to_string(),
            source,
        })?;
    check_size(name, text.len() as u64)?;
    Ok(text)
}

fn check_size(name: &str, size: u64) -> Result<(), SourceError> {
    if size > MAX_SOURCE_SIZE {
        return Err(SourceError::TooLarge {
            name: name.to_string(),
            size,
        });
    }
    Ok(())
}

// ============================================================================
// Commands
// ============================================================================

/// Lex and display tokens.
pub fn lex_source(source: &Source) -> CliResult<ExitCode> {
    print!("{}", render_tokens(&source.text));
    Ok(ExitCode::SUCCESS)
}

/// Check syntax and report every error.
pub fn check_source(source: &Source, plain: bool) -> CliResult<ExitCode> {
    let report = checker::check(&source.text);
    if report.passed() {
        println!("Syntax analysis completed without errors!");
        return Ok(ExitCode::SUCCESS);
    }

    let rendered = if plain {
        render_plain_errors(source, &report)
    } else {
        render_fancy_errors(source, &report, GraphicalTheme::default())
    };
    Err(CliError::failure(format!(
        "Syntax errors found:\n{}",
        rendered.trim_end()
    )))
}

// ============================================================================
// Rendering
// ============================================================================

/// One `Token: <KIND>, Literal: <text>` line per token, end of input excluded.
pub fn render_tokens(text: &str) -> String {
    let mut out = String::new();
    for token in Lexer::new(text).take_while(|token| !token.is_eof()) {
        out.push_str(&format!("Token: {}, Literal: {}\n", token.kind, token.text));
    }
    out
}

/// Plain-text excerpts, one block per error.
pub fn render_plain_errors(source: &Source, report: &CheckReport) -> String {
    report
        .errors()
        .iter()
        .map(|err| diagnostics::format_error(&source.name, &source.text, err))
        .collect()
}

/// miette graphical reports with source context.
///
/// `GraphicalTheme::default()` picks colors and unicode from the terminal and `NO_COLOR`.
pub fn render_fancy_errors(source: &Source, report: &CheckReport, theme: GraphicalTheme) -> String {
    let handler = GraphicalReportHandler::new_themed(theme);
    let mut out = String::new();
    for err in report.errors() {
        let diagnostic = fancy_report(source, err);
        if handler.render_report(&mut out, &*diagnostic).is_err() {
            out.push_str(&diagnostics::format_error(&source.name, &source.text, err));
        }
        out.push('\n');
    }
    out
}

fn fancy_report(source: &Source, err: &SyntaxError) -> Report {
    Report::new(err.clone()).with_source_code(NamedSource::new(&source.name, source.text.clone()))
}
