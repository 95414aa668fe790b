//! Syntax checker for QuestLang
//!
//! Walks the token stream pulled from a [`Lexer`] and certifies that it follows the statement grammar:
//!
//! ```text
//! statement := command
//!            | ("if" | "while") "(" subject ")" block
//!            | "for" "(" ident ";" ident ";" ident ")" block
//! block     := "{" statement* "}"
//! command   := move_up | move_down | move_left | move_right | jump | attack | defend
//! subject   := hero | enemy | treasure | trap
//! ```
//!
//! No AST is built. Every violation is appended to an error list and checking continues, so one pass reports
//! everything.
//!
//! ## Examples
//!
//! ```rust
//! use questlang_syntax::checker;
//!
//! let report = checker::check("while (hero) { attack");
//! assert_eq!(
//!     report.messages(),
//!     vec!["expected '}' at the end of the 'while' block".to_string()]
//! );
//! ```

use crate::diagnostics::{SyntaxError, errors};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::span::Span;
use questlang_core::lang::keywords::{self, KeywordId};
use questlang_core::lang::punctuation::PunctuationId;
use questlang_core::lang::subjects;

/// Deepest block nesting the checker descends into.
///
/// A block opened past this depth is reported once and skipped by brace counting, so nesting never grows the
/// call stack beyond this bound.
pub const MAX_NESTING_DEPTH: usize = 256;

// NOTE: This module is split across multiple files using `include!` to keep all checker
// methods in the same Rust module (preserving privacy + call patterns) while keeping
// each grammar concern in its own file.

include!("checker/core.rs");
include!("checker/helpers.rs");
include!("checker/stmts.rs");
include!("checker/api.rs");
include!("checker/tests.rs");
