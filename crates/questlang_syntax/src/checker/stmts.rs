/// Statement rules.
///
/// `statement` is the single dispatch point of the grammar. Block statements recurse
/// back into it through `block`, sharing the one cursor and error list.
impl<'a> Checker<'a> {
    fn statement(&mut self) {
        match self.current.kind {
            TokenKind::Keyword(id) => match id {
                KeywordId::MoveUp
                | KeywordId::MoveDown
                | KeywordId::MoveLeft
                | KeywordId::MoveRight
                | KeywordId::Jump
                | KeywordId::Attack
                | KeywordId::Defend => {
                    tracing::debug!(command = %self.current.text, "valid command");
                }
                KeywordId::If | KeywordId::While => self.conditional_stmt(id),
                KeywordId::For => self.for_stmt(),
                KeywordId::Else => self.unexpected(),
            },

            // Closes the enclosing block; the caller decides what it means.
            TokenKind::Punctuation(PunctuationId::RBrace) => {}
            TokenKind::Punctuation(
                PunctuationId::LParen | PunctuationId::RParen | PunctuationId::LBrace | PunctuationId::Semicolon,
            ) => self.unexpected(),

            TokenKind::Operator(_) | TokenKind::Ident | TokenKind::Number | TokenKind::Illegal => self.unexpected(),

            // Loops stop before end of input, so there is nothing to check here.
            TokenKind::Eof => {}
        }
    }

    /// `if (subject) { ... }` and `while (subject) { ... }`.
    fn conditional_stmt(&mut self, keyword: KeywordId) {
        let construct = keywords::as_str(keyword);
        let head = self.current.span;
        tracing::debug!(construct, "checking block statement");

        if !self.expect_punct(PunctuationId::LParen) {
            return;
        }
        self.advance();
        self.condition_subject();

        // A missing `)` is reported, but the block can still be checked.
        self.expect_punct(PunctuationId::RParen);

        if !self.expect_punct(PunctuationId::LBrace) {
            return;
        }
        self.block(construct, head);
    }

    fn condition_subject(&mut self) {
        let allowed = self.current.kind == TokenKind::Ident && subjects::from_str(&self.current.text).is_some();
        if !allowed {
            let error = errors::invalid_subject(&self.current.text, self.current.span);
            self.report(error);
        }
    }

    /// `for (init; condition; increment) { ... }`.
    ///
    /// Header clauses only need to be identifiers; the subject allow-list does not apply.
    fn for_stmt(&mut self) {
        let head = self.current.span;
        tracing::debug!(construct = "for", "checking block statement");

        if !self.expect_punct(PunctuationId::LParen) {
            return;
        }
        self.advance();
        self.for_clause("initialization");

        if !self.expect_punct(PunctuationId::Semicolon) {
            return;
        }
        self.advance();
        self.for_clause("condition");

        // A missing second `;` is reported once; an increment clause that is still there gets checked.
        let separated = self.expect_punct(PunctuationId::Semicolon);
        if separated || !(self.lookahead.kind.is_punctuation(PunctuationId::RParen) || self.lookahead.is_eof()) {
            self.advance();
            self.for_clause("increment");
        }

        self.expect_punct(PunctuationId::RParen);

        if !self.expect_punct(PunctuationId::LBrace) {
            return;
        }
        self.block(keywords::as_str(KeywordId::For), head);
    }

    fn for_clause(&mut self, clause: &str) {
        if self.current.kind != TokenKind::Ident {
            let error = errors::invalid_for_clause(clause, &self.current.text, self.current.span);
            self.report(error);
        }
    }

    /// Check the statements after `{` up to the matching `}`.
    ///
    /// On entry `current` is the `{`; on exit it is the closing `}` or `Eof`.
    fn block(&mut self, construct: &str, head: Span) {
        if self.depth >= MAX_NESTING_DEPTH {
            self.report(errors::nesting_too_deep(construct, MAX_NESTING_DEPTH, head));
            self.skip_block(construct, head);
            return;
        }

        self.depth += 1;
        self.advance();
        while !self.current.is_eof() && !self.at_punct(PunctuationId::RBrace) {
            self.statement();
            self.advance();
        }
        self.depth -= 1;

        if !self.at_punct(PunctuationId::RBrace) {
            self.report(errors::unterminated_block(construct, head));
        }
    }

    /// Move to the `}` matching the current `{` by counting braces. Nothing in between is checked.
    fn skip_block(&mut self, construct: &str, head: Span) {
        let mut open = 1usize;
        while open > 0 {
            self.advance();
            match self.current.kind {
                TokenKind::Punctuation(PunctuationId::LBrace) => open += 1,
                TokenKind::Punctuation(PunctuationId::RBrace) => open -= 1,
                TokenKind::Eof => {
                    self.report(errors::unterminated_block(construct, head));
                    return;
                }
                _ => {}
            }
        }
    }
}
