//! Shared syntax frontend for QuestLang: tokenizer, syntax checker, diagnostics.
//!
//! ## Notes
//! - This crate is “syntax-only”: it builds no AST and never evaluates commands.
//! - Vocabulary identity (keywords/operators/punctuation/subjects) comes from `questlang_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use questlang_syntax::{checker, lexer};
//!
//! let tokens = lexer::lex("if (hero) { move_up }");
//! assert_eq!(tokens.len(), 8);
//!
//! let report = checker::check("if (dragon) { move_up }");
//! assert!(!report.passed());
//! assert_eq!(report.errors().len(), 1);
//! ```

pub mod checker;
pub mod diagnostics;
pub mod lexer;
pub mod span;
pub mod token_helpers;
