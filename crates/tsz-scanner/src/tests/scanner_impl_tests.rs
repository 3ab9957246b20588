use crate::*;

fn scan_all(source: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = ScannerState::new(source.to_string(), true);
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.get_token_text().to_string()));
    }
    tokens
}

#[test]
fn test_scan_empty() {
    let mut scanner = ScannerState::new(String::new(), true);
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    // EOF is sticky.
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_scan_whitespace() {
    let mut scanner = ScannerState::new("   ".to_string(), false);
    assert_eq!(scanner.scan(), SyntaxKind::WhitespaceTrivia);
    assert_eq!(scanner.get_token_end(), 3);
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_scan_whitespace_skip() {
    let mut scanner = ScannerState::new("   foo".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value_ref(), "foo");
    assert_eq!(scanner.get_token_full_start(), 0);
    assert_eq!(scanner.get_token_start(), 3);
    assert_eq!(scanner.get_token_end(), 6);
}

#[test]
fn test_scan_newline() {
    let mut scanner = ScannerState::new("\r\n".to_string(), false);
    assert_eq!(scanner.scan(), SyntaxKind::NewLineTrivia);
    assert_eq!(scanner.get_token_end(), 2);
    assert!(scanner.has_preceding_line_break());
}

#[test]
fn test_preceding_line_break_when_skipping_trivia() {
    let mut scanner = ScannerState::new("a\n  b c".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(!scanner.has_preceding_line_break());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(scanner.has_preceding_line_break());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(!scanner.has_preceding_line_break());
}

#[test]
fn test_scan_punctuation() {
    let mut scanner = ScannerState::new("{}()[];,:?!|*<>=".to_string(), true);
    for expected in [
        SyntaxKind::OpenBraceToken,
        SyntaxKind::CloseBraceToken,
        SyntaxKind::OpenParenToken,
        SyntaxKind::CloseParenToken,
        SyntaxKind::OpenBracketToken,
        SyntaxKind::CloseBracketToken,
        SyntaxKind::SemicolonToken,
        SyntaxKind::CommaToken,
        SyntaxKind::ColonToken,
        SyntaxKind::QuestionToken,
        SyntaxKind::ExclamationToken,
        SyntaxKind::BarToken,
        SyntaxKind::AsteriskToken,
        SyntaxKind::LessThanToken,
        SyntaxKind::GreaterThanToken,
        SyntaxKind::EqualsToken,
    ] {
        assert_eq!(scanner.scan(), expected);
    }
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_scan_dots_and_arrow() {
    let tokens = scan_all("a.<b> ...c => d");
    let kinds: Vec<SyntaxKind> = tokens.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::DotToken,
            SyntaxKind::LessThanToken,
            SyntaxKind::Identifier,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::Identifier,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_compound_operators_are_split() {
    // `*=`, `?=` and `>>` stay separate tokens so `{*=}` and `{?=}` parse.
    let kinds: Vec<SyntaxKind> = scan_all("*=?=>>").iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::AsteriskToken,
            SyntaxKind::EqualsToken,
            SyntaxKind::QuestionToken,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::GreaterThanToken,
        ]
    );
}

#[test]
fn test_scan_keywords_and_identifiers() {
    let tokens = scan_all("function this new var number $x _y");
    assert_eq!(tokens[0].0, SyntaxKind::FunctionKeyword);
    assert_eq!(tokens[1].0, SyntaxKind::ThisKeyword);
    assert_eq!(tokens[2].0, SyntaxKind::NewKeyword);
    assert_eq!(tokens[3].0, SyntaxKind::VarKeyword);
    assert_eq!(tokens[4].0, SyntaxKind::NumberKeyword);
    assert_eq!(tokens[5], (SyntaxKind::Identifier, "$x".to_string()));
    assert_eq!(tokens[6], (SyntaxKind::Identifier, "_y".to_string()));
}

#[test]
fn test_identifier_classification() {
    let mut scanner = ScannerState::new("number var foo".to_string(), true);
    scanner.scan();
    assert!(scanner.is_identifier());
    assert!(!scanner.is_reserved_word());
    scanner.scan();
    assert!(!scanner.is_identifier());
    assert!(scanner.is_reserved_word());
    scanner.scan();
    assert!(scanner.is_identifier());
}

#[test]
fn test_scan_unicode_identifier() {
    let mut scanner = ScannerState::new("{ñandú}".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::OpenBraceToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value_ref(), "ñandú");
    assert_eq!(scanner.get_token_start(), 1);
    assert_eq!(scanner.get_token_end(), 1 + "ñandú".len() as u32);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
}

#[test]
fn test_scan_string_literal() {
    let mut scanner = ScannerState::new("\"hello\" 'a\\'b'".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.get_token_value_ref(), "hello");
    assert_eq!(scanner.get_token_text(), "\"hello\"");
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.get_token_value_ref(), "a\\'b");
    assert!(!scanner.is_unterminated());
}

#[test]
fn test_scan_unterminated_string() {
    let mut scanner = ScannerState::new("'abc".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert!(scanner.is_unterminated());
    assert_eq!(scanner.get_token_value_ref(), "abc");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_scan_number() {
    let mut scanner = ScannerState::new("42 3.14 1e10 .5".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.get_token_text(), "42");
    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.get_token_text(), "3.14");
    assert!(
        scanner
            .get_token_flags()
            .contains(TokenFlags::SCIENTIFIC_OR_DECIMAL)
    );
    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.get_token_text(), "1e10");
    assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    assert_eq!(scanner.get_token_text(), ".5");
}

#[test]
fn test_scan_unknown_character() {
    let mut scanner = ScannerState::new("\\ §".to_string(), true);
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    assert_eq!(scanner.get_token_text(), "\\");
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    assert_eq!(scanner.get_token_text(), "§");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_save_and_restore_state() {
    let mut scanner = ScannerState::new("{a, b}".to_string(), true);
    scanner.scan();
    scanner.scan();
    let snapshot = scanner.save_state();
    assert_eq!(snapshot.token_full_start(), 1);
    assert_eq!(scanner.scan(), SyntaxKind::CommaToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    scanner.restore_state(snapshot);
    assert_eq!(scanner.get_token(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value_ref(), "a");
    assert_eq!(scanner.scan(), SyntaxKind::CommaToken);
}

#[test]
fn test_look_ahead_rewinds() {
    let mut scanner = ScannerState::new("a.<b>".to_string(), true);
    scanner.scan();
    scanner.scan();
    let next_is_less_than = scanner.look_ahead(|s| s.scan() == SyntaxKind::LessThanToken);
    assert!(next_is_less_than);
    assert_eq!(scanner.get_token(), SyntaxKind::DotToken);
    assert_eq!(scanner.scan(), SyntaxKind::LessThanToken);
}

#[test]
fn test_reset_token_state_is_idempotent() {
    let mut scanner = ScannerState::new("xx {foo}".to_string(), true);
    for _ in 0..2 {
        scanner.reset_token_state(3);
        assert_eq!(scanner.scan(), SyntaxKind::OpenBraceToken);
        assert_eq!(scanner.get_token_full_start(), 3);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.get_token_span(), tsz_common::Span::new(4, 7));
    }
}

#[test]
fn test_reset_inside_multibyte_character_moves_forward() {
    let mut scanner = ScannerState::new("é}".to_string(), true);
    scanner.reset_token_state(1);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.get_token_start(), 2);
}

#[test]
fn test_set_text_end_limits_scanning() {
    let mut scanner = ScannerState::new("{a} trailing".to_string(), true);
    scanner.set_text_end(3);
    assert_eq!(scanner.scan(), SyntaxKind::OpenBraceToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    assert_eq!(scanner.get_token_start(), 3);
}
