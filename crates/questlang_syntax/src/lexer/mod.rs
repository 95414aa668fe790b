//! Lexer for QuestLang
//!
//! Handles tokenization including:
//! - Keywords (movement `move_*`, actions `jump`/`attack`/`defend`, control `if`/`else`/`while`/`for`)
//! - Identifiers and digit-run numbers
//! - Operators (`+ - * / && || !`) and punctuation (`( ) { } ;`)
//!
//! The lexer is pull-based: [`Lexer::next_token`] produces exactly one token per call and keeps returning `Eof`
//! once the input is exhausted. It never fails; anything it cannot classify becomes an `Illegal` token for the
//! checker to report.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::span::Span;
use questlang_core::lang::operators::OperatorId;
use questlang_core::lang::punctuation::PunctuationId;

/// Lexer for QuestLang source code.
///
/// Owns a forward-only cursor over one immutable source buffer.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// Byte offset of the next unread character.
    current_pos: usize,
    /// Set once the iterator has yielded `Eof`.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            done: false,
        }
    }

    /// Produce the next token.
    ///
    /// After the input is exhausted this returns an `Eof` token with empty text on every call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.current_pos;
        let Some(c) = self.advance() else {
            return Token::eof(self.source.len());
        };

        let kind = match c {
            '+' => TokenKind::Operator(OperatorId::Plus),
            '-' => TokenKind::Operator(OperatorId::Minus),
            '*' => TokenKind::Operator(OperatorId::Star),
            '/' => TokenKind::Operator(OperatorId::Slash),
            '!' => TokenKind::Operator(OperatorId::Bang),
            '&' => self.pair('&', TokenKind::Operator(OperatorId::AndAnd)),
            '|' => self.pair('|', TokenKind::Operator(OperatorId::OrOr)),

            '(' => TokenKind::Punctuation(PunctuationId::LParen),
            ')' => TokenKind::Punctuation(PunctuationId::RParen),
            '{' => TokenKind::Punctuation(PunctuationId::LBrace),
            '}' => TokenKind::Punctuation(PunctuationId::RBrace),
            ';' => TokenKind::Punctuation(PunctuationId::Semicolon),

            // No assignment or comparison exists; `==` stays one token so it is reported once.
            '=' => self.pair('=', TokenKind::Illegal),

            '0'..='9' => {
                self.eat_while(is_digit);
                TokenKind::Number
            }

            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => TokenKind::Illegal,
        };

        let token = self.make_token(kind, start);
        tracing::trace!(kind = %token.kind, text = %token.text, "token");
        token
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: fn(char) -> bool) {
        while self.peek().is_some_and(pred) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
    }

    fn make_token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(
            kind,
            &self.source[start..self.current_pos],
            Span::new(start, self.current_pos),
        )
    }

    // ========================================================================
    // Multi-character tokens
    // ========================================================================

    /// Two-character token: consume `second` if it follows, otherwise the first character alone is illegal.
    fn pair(&mut self, second: char, kind: TokenKind) -> TokenKind {
        if self.match_char(second) {
            kind
        } else {
            TokenKind::Illegal
        }
    }

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        self.eat_while(is_ident_start);

        let spelling = &self.source[start..self.current_pos];
        match keyword_id(spelling) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yield every token up to and including the first `Eof`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        self.done = token.is_eof();
        Some(token)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Words are ASCII letters and underscores only; digits end a word.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Convenience function to lex a whole source string.
///
/// The returned vector always ends with exactly one `Eof` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use questlang_core::lang::keywords::KeywordId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        use questlang_core::lang::keywords;

        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical);
            assert_eq!(tokens.len(), 2, "expected token + EOF for keyword {:?}, got {:?}", k.id, tokens);
            assert!(tokens[0].kind.is_keyword(k.id));
            assert_eq!(tokens[0].text, k.canonical);
            assert!(tokens[1].is_eof());
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        use questlang_core::lang::operators;

        for o in operators::OPERATORS {
            let tokens = lex(o.canonical);
            assert_eq!(tokens.len(), 2, "expected token + EOF for operator {:?}, got {:?}", o.id, tokens);
            assert!(tokens[0].kind.is_operator(o.id));
            assert_eq!(tokens[0].text, o.canonical);
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        use questlang_core::lang::punctuation;

        for p in punctuation::PUNCTUATION {
            let tokens = lex(p.canonical);
            assert_eq!(tokens.len(), 2);
            assert!(tokens[0].kind.is_punctuation(p.id));
            assert_eq!(tokens[0].text, p.canonical);
        }
    }

    #[test]
    fn test_reference_program() {
        let input = r#"
    move_up
    move_down
    move_left
    move_right
    jump
    attack
    defend
    if (hero) {
        move_up
    }
    while (enemy) {
        attack
    }
    for (treasure; trap; hero) {
        defend
    }
    123
    + - * /
    && || !
    "#;

        use KeywordId::*;
        let kw = TokenKind::Keyword;
        let op = TokenKind::Operator;
        let lparen = TokenKind::Punctuation(PunctuationId::LParen);
        let rparen = TokenKind::Punctuation(PunctuationId::RParen);
        let lbrace = TokenKind::Punctuation(PunctuationId::LBrace);
        let rbrace = TokenKind::Punctuation(PunctuationId::RBrace);
        let semi = TokenKind::Punctuation(PunctuationId::Semicolon);

        let expected = vec![
            (kw(MoveUp), "move_up"),
            (kw(MoveDown), "move_down"),
            (kw(MoveLeft), "move_left"),
            (kw(MoveRight), "move_right"),
            (kw(Jump), "jump"),
            (kw(Attack), "attack"),
            (kw(Defend), "defend"),
            (kw(If), "if"),
            (lparen, "("),
            (TokenKind::Ident, "hero"),
            (rparen, ")"),
            (lbrace, "{"),
            (kw(MoveUp), "move_up"),
            (rbrace, "}"),
            (kw(While), "while"),
            (lparen, "("),
            (TokenKind::Ident, "enemy"),
            (rparen, ")"),
            (lbrace, "{"),
            (kw(Attack), "attack"),
            (rbrace, "}"),
            (kw(For), "for"),
            (lparen, "("),
            (TokenKind::Ident, "treasure"),
            (semi, ";"),
            (TokenKind::Ident, "trap"),
            (semi, ";"),
            (TokenKind::Ident, "hero"),
            (rparen, ")"),
            (lbrace, "{"),
            (kw(Defend), "defend"),
            (rbrace, "}"),
            (TokenKind::Number, "123"),
            (op(OperatorId::Plus), "+"),
            (op(OperatorId::Minus), "-"),
            (op(OperatorId::Star), "*"),
            (op(OperatorId::Slash), "/"),
            (op(OperatorId::AndAnd), "&&"),
            (op(OperatorId::OrOr), "||"),
            (op(OperatorId::Bang), "!"),
            (TokenKind::Eof, ""),
        ];

        let mut lexer = Lexer::new(input);
        for (i, (kind, text)) in expected.into_iter().enumerate() {
            let tok = lexer.next_token();
            assert_eq!(tok.kind, kind, "tests[{}] - token kind wrong", i);
            assert_eq!(tok.text, text, "tests[{}] - text wrong", i);
        }
    }

    #[test]
    fn test_whitespace_only_is_single_eof() {
        for source in ["", " ", "\n\n\n", "\t\r\n  "] {
            let tokens = lex(source);
            assert_eq!(tokens.len(), 1, "source {:?}", source);
            assert!(tokens[0].is_eof());
            assert_eq!(tokens[0].text, "");
        }
    }

    #[test]
    fn test_eof_is_repeatable() {
        let mut lexer = Lexer::new("jump");
        assert!(lexer.next_token().kind.is_keyword(KeywordId::Jump));
        for _ in 0..5 {
            let tok = lexer.next_token();
            assert_eq!(tok, Token::eof(4));
        }
    }

    #[test]
    fn test_iterator_stops_after_eof() {
        let mut lexer = Lexer::new("jump");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_some_and(|t| t.is_eof()));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_lone_pair_characters_are_illegal() {
        for source in ["&", "|"] {
            let tokens = lex(source);
            assert_eq!(tokens[0].kind, TokenKind::Illegal);
            assert_eq!(tokens[0].text, source);
            assert!(tokens[1].is_eof());
        }

        let tokens = lex("&|");
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].text, "&");
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].text, "|");
    }

    #[test]
    fn test_equals_is_illegal() {
        let tokens = lex("= == ===");
        let texts: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
        assert_eq!(
            texts,
            vec![
                (TokenKind::Illegal, "="),
                (TokenKind::Illegal, "=="),
                (TokenKind::Illegal, "=="),
                (TokenKind::Illegal, "="),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_digits_end_a_word() {
        let tokens = lex("move2 _x 007");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].text, "move");
        assert_eq!(tokens[1].kind, TokenKind::Number);
        assert_eq!(tokens[1].text, "2");
        assert_eq!(tokens[2].kind, TokenKind::Ident);
        assert_eq!(tokens[2].text, "_x");
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[3].text, "007");
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(kinds("Jump IF"), vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]);
    }

    #[test]
    fn test_unknown_characters_are_illegal() {
        let tokens = lex("$ π#");
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].text, "$");
        // Multi-byte characters stay whole.
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].text, "π");
        assert_eq!(tokens[2].text, "#");
        assert!(tokens[3].is_eof());
    }

    #[test]
    fn test_spans() {
        let tokens = lex("if (hero)");
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[1].span, Span::new(3, 4));
        assert_eq!(tokens[2].span, Span::new(4, 8));
        assert_eq!(tokens[3].span, Span::new(8, 9));
        assert_eq!(tokens[4].span, Span::new(9, 9));
    }
}
