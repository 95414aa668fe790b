//! Token types for the QuestLang lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for movement, action and control-flow words
//! - `Operator(OperatorId)` for arithmetic and logical operators
//! - `Punctuation(PunctuationId)` for `( ) { } ;`
//!
//! ## Notes
//! - Every token carries the exact source text it was read from; `Eof` carries an empty string.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::span::Span;
use questlang_core::lang::keywords::{self, KeywordId};
use questlang_core::lang::operators::OperatorId;
use questlang_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
///
/// This is a closed set: the checker matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    /// A run of digits, kept as raw text.
    Number,

    // ========== Special ==========
    Illegal,
    Eof,
}

/// A token with its kind, matched text and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Construct the end-of-input token at `pos`.
    pub fn eof(pos: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::new(pos, pos))
    }
}

impl fmt::Display for TokenKind {
    /// Upper-case kind names, as printed by `questlang lex`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword(id) => match id {
                KeywordId::MoveUp => "MOVE_UP",
                KeywordId::MoveDown => "MOVE_DOWN",
                KeywordId::MoveLeft => "MOVE_LEFT",
                KeywordId::MoveRight => "MOVE_RIGHT",
                KeywordId::Jump => "JUMP",
                KeywordId::Attack => "ATTACK",
                KeywordId::Defend => "DEFEND",
                KeywordId::If => "IF",
                KeywordId::Else => "ELSE",
                KeywordId::While => "WHILE",
                KeywordId::For => "FOR",
            },
            TokenKind::Operator(id) => match id {
                OperatorId::Plus => "PLUS",
                OperatorId::Minus => "MINUS",
                OperatorId::Star => "MULTIPLY",
                OperatorId::Slash => "DIVIDE",
                OperatorId::AndAnd => "AND",
                OperatorId::OrOr => "OR",
                OperatorId::Bang => "NOT",
            },
            TokenKind::Punctuation(id) => match id {
                PunctuationId::LParen => "LEFT_PAREN",
                PunctuationId::RParen => "RIGHT_PAREN",
                PunctuationId::LBrace => "LEFT_BRACE",
                PunctuationId::RBrace => "RIGHT_BRACE",
                PunctuationId::Semicolon => "SEMICOLON",
            },
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
