/// Checker core types and entrypoint.
///
/// This chunk defines the [`Checker`] type, its top-level `check()` loop and the
/// [`CheckReport`] it produces.
///
/// ## Notes
/// - This file is `include!`'d into `crate::checker`.
/// - `lookahead` is always the token immediately after `current`; [`Checker::advance`]
///   is the only place either field changes.
pub struct Checker<'a> {
    lexer: Lexer<'a>,
    current: Token,
    lookahead: Token,
    /// Number of blocks currently open.
    depth: usize,
    errors: Vec<SyntaxError>,
}

impl<'a> Checker<'a> {
    /// Create a checker over a lexer, pulling the first two tokens.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let lookahead = lexer.next_token();
        Self {
            lexer,
            current,
            lookahead,
            depth: 0,
            errors: Vec::new(),
        }
    }

    /// Check every statement up to end of input.
    ///
    /// Errors never stop the pass; the report carries all of them in detection order.
    pub fn check(mut self) -> CheckReport {
        while !self.current.is_eof() {
            self.statement();
            self.advance();
        }

        tracing::debug!(errors = self.errors.len(), "syntax check finished");
        CheckReport { errors: self.errors }
    }
}

/// Outcome of one syntax check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    errors: Vec<SyntaxError>,
}

impl CheckReport {
    /// `true` when no error was recorded.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in the order they were detected.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// The human-readable message of every error, in detection order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Convert into the `Result` shape used by the rest of the frontend.
    pub fn into_result(self) -> Result<(), Vec<SyntaxError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
