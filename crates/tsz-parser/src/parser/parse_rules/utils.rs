use tsz_scanner::{ScannerState, SyntaxKind};

/// True when `kind` closes the context around a type: the point where a
/// bare `?` is the unknown type and a bare `*` is the all type.
#[inline]
pub fn is_type_terminator(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::CloseBraceToken
            | SyntaxKind::CloseParenToken
            | SyntaxKind::CommaToken
            | SyntaxKind::EqualsToken
            | SyntaxKind::BarToken
            | SyntaxKind::GreaterThanToken
            | SyntaxKind::EndOfFileToken
    )
}

/// True when a type production can begin at `kind`.
pub fn can_start_jsdoc_type(kind: SyntaxKind) -> bool {
    match kind {
        SyntaxKind::QuestionToken
        | SyntaxKind::AsteriskToken
        | SyntaxKind::ExclamationToken
        | SyntaxKind::OpenBraceToken
        | SyntaxKind::OpenParenToken
        | SyntaxKind::DotDotDotToken
        | SyntaxKind::FunctionKeyword
        | SyntaxKind::ThisKeyword
        | SyntaxKind::NewKeyword
        | SyntaxKind::Identifier => true,
        _ => kind > SyntaxKind::LAST_RESERVED_WORD && kind <= SyntaxKind::LAST_KEYWORD,
    }
}

/// Scan one token ahead and test it, leaving the scanner untouched.
pub fn look_ahead_is(scanner: &mut ScannerState, check: impl FnOnce(SyntaxKind) -> bool) -> bool {
    scanner.look_ahead(|scanner| check(scanner.scan()))
}
