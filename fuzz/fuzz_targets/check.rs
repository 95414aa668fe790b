#![no_main]

use libfuzzer_sys::fuzz_target;
use questlang::{TokenKind, check, lex};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let tokens = lex(s);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));

        let report = check(s);
        assert_eq!(report.passed(), report.errors().is_empty());
    }
});
