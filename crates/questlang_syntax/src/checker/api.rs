/// Check a source string.
///
/// This is the main public entrypoint: it builds a [`Lexer`] and a [`Checker`] for one pass.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn check(source: &str) -> CheckReport {
    Checker::new(Lexer::new(source)).check()
}
