//! QuestLang vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords (movement, action and control
//! flow), operators, punctuation, and the fixed set of subjects a condition may name.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer and checker. Callers work with
//! **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are **pure**: no token types, no IO, no side effects.
//! - The lexer/checker enforce syntax; registries provide spellings and metadata for shared use (diagnostics, docs).
//!
//! ## Examples
//! ```rust
//! use questlang_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("move_up"), Some(KeywordId::MoveUp));
//! assert_eq!(keywords::as_str(KeywordId::If), "if");
//! ```
//!
//! ## See also
//! - `cargo run -p questlang_core --bin generate_lang_reference` to regenerate `docs/language/reference.md`.

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod reference;
pub mod registry;
pub mod subjects;
