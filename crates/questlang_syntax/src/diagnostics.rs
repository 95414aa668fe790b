//! Diagnostics produced by the syntax checker.
//!
//! Every problem the checker finds becomes a [`SyntaxError`] appended to its error list; nothing here is ever
//! raised as a fault. A `SyntaxError` is a `thiserror` error (its `Display` is the human-readable message) and a
//! `miette` diagnostic, so callers can either print the bare message or render a report with source context.

use std::fmt;

use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

pub use crate::span::Span;

/// Category of a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// A token that cannot start a statement.
    UnexpectedToken,
    /// A required `(`, `)`, `{` or `;` was not the next token.
    MissingDelimiter,
    /// An `if`/`while` condition that is not one of the allowed subjects.
    InvalidSubject,
    /// A `for` header clause that is not an identifier.
    InvalidForClause,
    /// A block that reached end of input before its closing `}`.
    UnterminatedBlock,
    /// A block opened beyond the nesting limit; its contents are skipped.
    NestingTooDeep,
}

impl SyntaxErrorKind {
    /// Stable diagnostic code, shown by the CLI.
    pub fn code(self) -> &'static str {
        match self {
            SyntaxErrorKind::UnexpectedToken => "questlang::syntax::unexpected_token",
            SyntaxErrorKind::MissingDelimiter => "questlang::syntax::missing_delimiter",
            SyntaxErrorKind::InvalidSubject => "questlang::syntax::invalid_subject",
            SyntaxErrorKind::InvalidForClause => "questlang::syntax::invalid_for_clause",
            SyntaxErrorKind::UnterminatedBlock => "questlang::syntax::unterminated_block",
            SyntaxErrorKind::NestingTooDeep => "questlang::syntax::nesting_too_deep",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SyntaxErrorKind::UnexpectedToken => "not a statement",
            SyntaxErrorKind::MissingDelimiter => "found here",
            SyntaxErrorKind::InvalidSubject => "unknown subject",
            SyntaxErrorKind::InvalidForClause => "expected an identifier",
            SyntaxErrorKind::UnterminatedBlock => "block opened here",
            SyntaxErrorKind::NestingTooDeep => "nesting limit reached here",
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::UnexpectedToken => write!(f, "unexpected token"),
            SyntaxErrorKind::MissingDelimiter => write!(f, "missing delimiter"),
            SyntaxErrorKind::InvalidSubject => write!(f, "invalid condition subject"),
            SyntaxErrorKind::InvalidForClause => write!(f, "invalid for clause"),
            SyntaxErrorKind::UnterminatedBlock => write!(f, "unterminated block"),
            SyntaxErrorKind::NestingTooDeep => write!(f, "nesting too deep"),
        }
    }
}

/// A syntax error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub message: String,
    pub span: Span,
    pub hint: Option<String>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Diagnostic for SyntaxError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.hint
            .as_ref()
            .map(|hint| Box::new(hint) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.label().to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Catalog of the checker's messages.
///
/// Keeping the wording here means the checker only decides *when* to report, never *how*.
pub mod errors {
    use super::*;
    use questlang_core::lang::subjects;

    /// Text used in place of the empty end-of-input token text.
    pub const END_OF_INPUT: &str = "end of input";

    fn found(text: &str) -> String {
        if text.is_empty() {
            END_OF_INPUT.to_string()
        } else {
            format!("'{}'", text)
        }
    }

    pub fn unexpected_token(text: &str, span: Span) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::UnexpectedToken,
            format!("unexpected token {}", found(text)),
            span,
        )
    }

    pub fn expected_token(expected: &str, text: &str, span: Span) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::MissingDelimiter,
            format!("expected '{}', found {}", expected, found(text)),
            span,
        )
    }

    pub fn invalid_subject(text: &str, span: Span) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::InvalidSubject,
            format!("expected {}, found {}", subjects::expected_list(), found(text)),
            span,
        )
        .with_hint("conditions can only test the hero, an enemy, treasure or a trap")
    }

    pub fn invalid_for_clause(clause: &str, text: &str, span: Span) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::InvalidForClause,
            format!("expected an identifier in the 'for' {}, found {}", clause, found(text)),
            span,
        )
    }

    pub fn unterminated_block(construct: &str, span: Span) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::UnterminatedBlock,
            format!("expected '}}' at the end of the '{}' block", construct),
            span,
        )
        .with_hint("every '{' needs a matching '}'")
    }

    pub fn nesting_too_deep(construct: &str, limit: usize, span: Span) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::NestingTooDeep,
            format!("'{}' block is nested more than {} levels deep", construct, limit),
            span,
        )
        .with_hint("statements inside this block are not checked")
    }
}

/// Render an error as plain text with a source excerpt and caret, without colors.
///
/// ```text
/// error[questlang::syntax::unexpected_token]: unexpected token '$'
///   --> quest.ql:1:19
///    |
///  1 | move_up move_down $
///    |                   ^
/// ```
pub fn format_error(file_name: &str, source: &str, error: &SyntaxError) -> String {
    let (line_num, col_num, line_text) = get_line_info(source, error.span.start);
    let width = line_num.to_string().len();
    let span_chars = source
        .get(error.span.start..error.span.end)
        .map_or(0, |text| text.chars().count());
    let underline_len = span_chars
        .min(line_text.chars().count().saturating_sub(col_num - 1))
        .max(1);

    let mut out = String::new();
    out.push_str(&format!("error[{}]: {}\n", error.kind.code(), error.message));
    out.push_str(&format!("{:>width$}--> {}:{}:{}\n", "", file_name, line_num, col_num, width = width + 1));
    out.push_str(&format!("{:>width$} |\n", "", width = width + 1));
    out.push_str(&format!(" {:>width$} | {}\n", line_num, line_text, width = width));
    out.push_str(&format!(
        "{:>width$} | {}{}\n",
        "",
        " ".repeat(col_num - 1),
        "^".repeat(underline_len),
        width = width + 1
    ));
    if let Some(hint) = &error.hint {
        out.push_str(&format!("{:>width$} = hint: {}\n", "", hint, width = width + 1));
    }
    out
}

/// Get line number, column number (both 1-based, column in characters), and line text for a byte offset.
fn get_line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = source[line_start..line_end].trim_end_matches('\r');
    let col_num = source
        .get(line_start..offset)
        .map_or(offset - line_start, |prefix| prefix.chars().count())
        + 1;

    (line_num, col_num, line_text)
}
