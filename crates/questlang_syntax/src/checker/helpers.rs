/// Cursor and error-recording primitives.
///
/// Every other checker chunk moves through the token stream and reports problems
/// exclusively through the helpers in this file.
impl<'a> Checker<'a> {
    /// Shift the window one token forward: `current <- lookahead <- next token`.
    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.lookahead, next);
    }

    /// Append an error. The list is never cleared or reordered.
    fn report(&mut self, error: SyntaxError) {
        tracing::debug!(kind = %error.kind, message = %error.message, "syntax error");
        self.errors.push(error);
    }

    /// If the lookahead token is `kind`, advance onto it and return `true`.
    ///
    /// Otherwise record an "expected ..., found ..." error and return `false` without moving.
    fn expect(&mut self, kind: TokenKind) -> bool {
        if self.lookahead.kind == kind {
            self.advance();
            return true;
        }
        let error = errors::expected_token(kind.expected_spelling(), &self.lookahead.text, self.lookahead.span);
        self.report(error);
        false
    }

    fn expect_punct(&mut self, id: PunctuationId) -> bool {
        self.expect(TokenKind::Punctuation(id))
    }

    fn at_punct(&self, id: PunctuationId) -> bool {
        self.current.kind.is_punctuation(id)
    }

    fn unexpected(&mut self) {
        let error = errors::unexpected_token(&self.current.text, self.current.span);
        self.report(error);
    }
}
