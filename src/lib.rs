#![forbid(unsafe_code)]
//! QuestLang tokenizer and syntax checker
//!
//! QuestLang is a tiny command language for scripting a game hero: movement and action commands, plus `if`,
//! `while` and `for` blocks over a fixed set of condition subjects. This crate is the facade over the workspace:
//! it re-exports the vocabulary registries (`questlang_core`) and the frontend (`questlang_syntax`), and provides
//! the `questlang` command-line tool.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: Registry lookups that cannot fail for a well-formed table use `.expect("... info missing")`.
//!
//! ## Examples
//!
//! ```rust
//! let report = questlang::check("for (treasure; trap; hero) { defend }");
//! assert!(report.passed());
//! ```

pub mod cli;
pub mod version;

pub use questlang_core::lang;
pub use questlang_syntax::{checker, diagnostics, lexer, span};

pub use questlang_syntax::checker::{CheckReport, Checker, check};
pub use questlang_syntax::diagnostics::{SyntaxError, SyntaxErrorKind};
pub use questlang_syntax::lexer::{Lexer, Token, TokenKind, lex};
