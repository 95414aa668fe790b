//! Provide the canonical language vocabulary for QuestLang.
//!
//! This crate is intentionally tiny and dependency-free. Both the lexer and the syntax checker resolve spellings
//! through it, and the language reference generator renders it into Markdown.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no mutable global state, and no syntax types.
//! - Every registry is a `const` table, so it is built once at compile time and can never be mutated.

pub mod lang;
