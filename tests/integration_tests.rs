//! Integration tests for the QuestLang frontend

use std::fs;
use std::path::Path;

use questlang::{CheckReport, SyntaxErrorKind, TokenKind, check, lex};
use questlang::lang::keywords::KeywordId;
use questlang::lang::punctuation::PunctuationId;

/// Helper to run the checker on a fixture file
fn check_file(path: &Path) -> CheckReport {
    let source = fs::read_to_string(path).unwrap();
    check(&source)
}

fn fixtures(dir: &str) -> Vec<std::path::PathBuf> {
    let mut paths: Vec<_> = fs::read_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join(dir))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "ql"))
        .collect();
    paths.sort();
    paths
}

/// Test that all valid fixtures pass
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("tests/fixtures/valid");
    assert!(!paths.is_empty());
    for path in paths {
        let report = check_file(&path);
        assert!(
            report.passed(),
            "Expected {} to pass, got errors: {:?}",
            path.display(),
            report.messages()
        );
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("tests/fixtures/invalid");
    assert!(!paths.is_empty());
    for path in paths {
        let report = check_file(&path);
        assert!(!report.passed(), "Expected {} to fail", path.display());
    }
}

#[test]
fn test_command_alone() {
    let tokens = lex("move_up");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordId::MoveUp));
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    let report = check("move_up");
    assert!(report.passed());
    assert!(report.errors().is_empty());
}

#[test]
fn test_if_with_allowed_subject() {
    let tokens = lex("if (hero) { move_up }");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword(KeywordId::If),
            TokenKind::Punctuation(PunctuationId::LParen),
            TokenKind::Ident,
            TokenKind::Punctuation(PunctuationId::RParen),
            TokenKind::Punctuation(PunctuationId::LBrace),
            TokenKind::Keyword(KeywordId::MoveUp),
            TokenKind::Punctuation(PunctuationId::RBrace),
            TokenKind::Eof,
        ]
    );
    assert!(check("if (hero) { move_up }").passed());
}

#[test]
fn test_if_with_unknown_subject() {
    let report = check("if (dragon) { move_up }");
    assert!(!report.passed());
    assert_eq!(report.errors().len(), 1);
    assert_eq!(report.errors()[0].kind, SyntaxErrorKind::InvalidSubject);
    assert!(report.errors()[0].message.contains("dragon"));
}

#[test]
fn test_unterminated_while() {
    let report = check("while (hero) { attack");
    assert_eq!(report.errors().len(), 1);
    assert_eq!(report.errors()[0].kind, SyntaxErrorKind::UnterminatedBlock);
    assert!(report.errors()[0].message.contains("'while'"));
}

#[test]
fn test_for_header() {
    assert!(check("for (treasure; trap; hero) { defend }").passed());
}

#[test]
fn test_illegal_character() {
    let tokens = lex("move_up move_down $");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].text, "$");

    let report = check("move_up move_down $");
    assert_eq!(report.messages(), vec!["unexpected token '$'".to_string()]);
}

#[test]
fn test_independent_violations_are_all_reported() {
    let report = check("if (ghost) { jump } while (hero) { 5 } for (a; b; 9) { defend } $");
    assert_eq!(report.errors().len(), 4);
    let kinds: Vec<_> = report.errors().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxErrorKind::InvalidSubject,
            SyntaxErrorKind::UnexpectedToken,
            SyntaxErrorKind::InvalidForClause,
            SyntaxErrorKind::UnexpectedToken,
        ]
    );
}

#[test]
fn test_errors_are_in_source_order() {
    let report = check("# move_up @ jump %");
    let starts: Vec<_> = report.errors().iter().map(|e| e.span.start).collect();
    assert_eq!(starts, vec![0, 10, 17]);
}

#[test]
fn test_result_facade() {
    assert!(check("jump").into_result().is_ok());
    let errs = check("if (hero) jump").into_result().unwrap_err();
    assert_eq!(errs[0].to_string(), "expected '{', found 'jump'");
}
