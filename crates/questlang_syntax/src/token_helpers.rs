//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use questlang_core::lang::keywords::{self, KeywordId};
use questlang_core::lang::operators::{self, OperatorId};
use questlang_core::lang::punctuation::{self, PunctuationId};

impl TokenKind {
    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Spelling used when this kind is *expected* in a diagnostic.
    ///
    /// Vocabulary kinds render as their source spelling; the open-ended kinds fall back to a description.
    pub fn expected_spelling(&self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::as_str(*id),
            TokenKind::Operator(id) => operators::as_str(*id),
            TokenKind::Punctuation(id) => punctuation::as_str(*id),
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Illegal => "illegal token",
            TokenKind::Eof => "end of input",
        }
    }
}

impl Token {
    /// Return `true` if this token ends the stream.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
