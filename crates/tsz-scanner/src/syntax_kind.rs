//! Token kinds and keyword tables.
//!
//! Discriminants follow the TypeScript compiler's `SyntaxKind` numbering so
//! that kinds printed in traces and diagnostics line up with `tsc` output.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Kinds the scanner can produce. Gaps in the numbering belong to host
/// compiler kinds this scanner never emits (comments, templates, JSX and
/// compound operators).
#[repr(u16)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SyntaxKind {
    #[default]
    Unknown = 0,
    EndOfFileToken = 1,
    // Trivia, only produced when trivia is not skipped
    NewLineTrivia = 4,
    WhitespaceTrivia = 5,
    // Literals
    NumericLiteral = 9,
    StringLiteral = 11,
    // Punctuation
    OpenBraceToken = 19,
    CloseBraceToken = 20,
    OpenParenToken = 21,
    CloseParenToken = 22,
    OpenBracketToken = 23,
    CloseBracketToken = 24,
    DotToken = 25,
    DotDotDotToken = 26,
    SemicolonToken = 27,
    CommaToken = 28,
    LessThanToken = 30,
    GreaterThanToken = 32,
    EqualsGreaterThanToken = 39,
    PlusToken = 40,
    MinusToken = 41,
    AsteriskToken = 42,
    SlashToken = 44,
    PercentToken = 45,
    AmpersandToken = 51,
    BarToken = 52,
    CaretToken = 53,
    ExclamationToken = 54,
    TildeToken = 55,
    QuestionToken = 58,
    ColonToken = 59,
    AtToken = 60,
    BacktickToken = 62,
    HashToken = 63,
    EqualsToken = 64,
    // Identifiers
    Identifier = 80,
    // Reserved words
    BreakKeyword = 83,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,
    // Strict mode reserved words
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    StaticKeyword,
    YieldKeyword,
    // Contextual keywords
    AbstractKeyword,
    AccessorKeyword,
    AsKeyword,
    AssertsKeyword,
    AssertKeyword,
    AnyKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BooleanKeyword,
    ConstructorKeyword,
    DeclareKeyword,
    GetKeyword,
    InferKeyword,
    IntrinsicKeyword,
    IsKeyword,
    KeyOfKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    NeverKeyword,
    OutKeyword,
    ReadonlyKeyword,
    RequireKeyword,
    NumberKeyword,
    ObjectKeyword,
    SatisfiesKeyword,
    SetKeyword,
    StringKeyword,
    SymbolKeyword,
    TypeKeyword,
    UndefinedKeyword,
    UniqueKeyword,
    UnknownKeyword,
    UsingKeyword,
    FromKeyword,
    GlobalKeyword,
    BigIntKeyword,
    OverrideKeyword,
    OfKeyword,
}

impl SyntaxKind {
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::EqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_RESERVED_WORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_RESERVED_WORD: SyntaxKind = SyntaxKind::WithKeyword;
    pub const FIRST_TRIVIA: SyntaxKind = SyntaxKind::NewLineTrivia;
    pub const LAST_TRIVIA: SyntaxKind = SyntaxKind::WhitespaceTrivia;
}

/// Keyword spellings, in `SyntaxKind` order.
static KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("break", SyntaxKind::BreakKeyword),
    ("case", SyntaxKind::CaseKeyword),
    ("catch", SyntaxKind::CatchKeyword),
    ("class", SyntaxKind::ClassKeyword),
    ("const", SyntaxKind::ConstKeyword),
    ("continue", SyntaxKind::ContinueKeyword),
    ("debugger", SyntaxKind::DebuggerKeyword),
    ("default", SyntaxKind::DefaultKeyword),
    ("delete", SyntaxKind::DeleteKeyword),
    ("do", SyntaxKind::DoKeyword),
    ("else", SyntaxKind::ElseKeyword),
    ("enum", SyntaxKind::EnumKeyword),
    ("export", SyntaxKind::ExportKeyword),
    ("extends", SyntaxKind::ExtendsKeyword),
    ("false", SyntaxKind::FalseKeyword),
    ("finally", SyntaxKind::FinallyKeyword),
    ("for", SyntaxKind::ForKeyword),
    ("function", SyntaxKind::FunctionKeyword),
    ("if", SyntaxKind::IfKeyword),
    ("import", SyntaxKind::ImportKeyword),
    ("in", SyntaxKind::InKeyword),
    ("instanceof", SyntaxKind::InstanceOfKeyword),
    ("new", SyntaxKind::NewKeyword),
    ("null", SyntaxKind::NullKeyword),
    ("return", SyntaxKind::ReturnKeyword),
    ("super", SyntaxKind::SuperKeyword),
    ("switch", SyntaxKind::SwitchKeyword),
    ("this", SyntaxKind::ThisKeyword),
    ("throw", SyntaxKind::ThrowKeyword),
    ("true", SyntaxKind::TrueKeyword),
    ("try", SyntaxKind::TryKeyword),
    ("typeof", SyntaxKind::TypeOfKeyword),
    ("var", SyntaxKind::VarKeyword),
    ("void", SyntaxKind::VoidKeyword),
    ("while", SyntaxKind::WhileKeyword),
    ("with", SyntaxKind::WithKeyword),
    ("implements", SyntaxKind::ImplementsKeyword),
    ("interface", SyntaxKind::InterfaceKeyword),
    ("let", SyntaxKind::LetKeyword),
    ("package", SyntaxKind::PackageKeyword),
    ("private", SyntaxKind::PrivateKeyword),
    ("protected", SyntaxKind::ProtectedKeyword),
    ("public", SyntaxKind::PublicKeyword),
    ("static", SyntaxKind::StaticKeyword),
    ("yield", SyntaxKind::YieldKeyword),
    ("abstract", SyntaxKind::AbstractKeyword),
    ("accessor", SyntaxKind::AccessorKeyword),
    ("as", SyntaxKind::AsKeyword),
    ("asserts", SyntaxKind::AssertsKeyword),
    ("assert", SyntaxKind::AssertKeyword),
    ("any", SyntaxKind::AnyKeyword),
    ("async", SyntaxKind::AsyncKeyword),
    ("await", SyntaxKind::AwaitKeyword),
    ("boolean", SyntaxKind::BooleanKeyword),
    ("constructor", SyntaxKind::ConstructorKeyword),
    ("declare", SyntaxKind::DeclareKeyword),
    ("get", SyntaxKind::GetKeyword),
    ("infer", SyntaxKind::InferKeyword),
    ("intrinsic", SyntaxKind::IntrinsicKeyword),
    ("is", SyntaxKind::IsKeyword),
    ("keyof", SyntaxKind::KeyOfKeyword),
    ("module", SyntaxKind::ModuleKeyword),
    ("namespace", SyntaxKind::NamespaceKeyword),
    ("never", SyntaxKind::NeverKeyword),
    ("out", SyntaxKind::OutKeyword),
    ("readonly", SyntaxKind::ReadonlyKeyword),
    ("require", SyntaxKind::RequireKeyword),
    ("number", SyntaxKind::NumberKeyword),
    ("object", SyntaxKind::ObjectKeyword),
    ("satisfies", SyntaxKind::SatisfiesKeyword),
    ("set", SyntaxKind::SetKeyword),
    ("string", SyntaxKind::StringKeyword),
    ("symbol", SyntaxKind::SymbolKeyword),
    ("type", SyntaxKind::TypeKeyword),
    ("undefined", SyntaxKind::UndefinedKeyword),
    ("unique", SyntaxKind::UniqueKeyword),
    ("unknown", SyntaxKind::UnknownKeyword),
    ("using", SyntaxKind::UsingKeyword),
    ("from", SyntaxKind::FromKeyword),
    ("global", SyntaxKind::GlobalKeyword),
    ("bigint", SyntaxKind::BigIntKeyword),
    ("override", SyntaxKind::OverrideKeyword),
    ("of", SyntaxKind::OfKeyword),
];

static TEXT_TO_KEYWORD: Lazy<FxHashMap<&'static str, SyntaxKind>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

/// Look up the keyword spelled by `text` (case sensitive).
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    // No keyword is shorter than 2 or longer than 11 characters.
    if text.len() < 2 || text.len() > 11 {
        return None;
    }
    TEXT_TO_KEYWORD.get(text).copied()
}

/// Classify identifier-like text: a keyword kind, or `Identifier`.
pub fn string_to_token(text: &str) -> SyntaxKind {
    text_to_keyword(text).unwrap_or(SyntaxKind::Identifier)
}

pub fn keyword_to_text(kind: SyntaxKind) -> Option<&'static str> {
    if !token_is_keyword(kind) {
        return None;
    }
    KEYWORDS
        .iter()
        .find(|(_, keyword)| *keyword == kind)
        .map(|(text, _)| *text)
}

pub fn punctuation_to_text(kind: SyntaxKind) -> Option<&'static str> {
    let text = match kind {
        SyntaxKind::OpenBraceToken => "{",
        SyntaxKind::CloseBraceToken => "}",
        SyntaxKind::OpenParenToken => "(",
        SyntaxKind::CloseParenToken => ")",
        SyntaxKind::OpenBracketToken => "[",
        SyntaxKind::CloseBracketToken => "]",
        SyntaxKind::DotToken => ".",
        SyntaxKind::DotDotDotToken => "...",
        SyntaxKind::SemicolonToken => ";",
        SyntaxKind::CommaToken => ",",
        SyntaxKind::LessThanToken => "<",
        SyntaxKind::GreaterThanToken => ">",
        SyntaxKind::EqualsGreaterThanToken => "=>",
        SyntaxKind::PlusToken => "+",
        SyntaxKind::MinusToken => "-",
        SyntaxKind::AsteriskToken => "*",
        SyntaxKind::SlashToken => "/",
        SyntaxKind::PercentToken => "%",
        SyntaxKind::AmpersandToken => "&",
        SyntaxKind::BarToken => "|",
        SyntaxKind::CaretToken => "^",
        SyntaxKind::ExclamationToken => "!",
        SyntaxKind::TildeToken => "~",
        SyntaxKind::QuestionToken => "?",
        SyntaxKind::ColonToken => ":",
        SyntaxKind::AtToken => "@",
        SyntaxKind::BacktickToken => "`",
        SyntaxKind::HashToken => "#",
        SyntaxKind::EqualsToken => "=",
        _ => return None,
    };
    Some(text)
}

#[inline]
fn in_range(kind: SyntaxKind, first: SyntaxKind, last: SyntaxKind) -> bool {
    (first as u16) <= (kind as u16) && (kind as u16) <= (last as u16)
}

#[inline]
pub fn token_is_keyword(kind: SyntaxKind) -> bool {
    in_range(kind, SyntaxKind::FIRST_KEYWORD, SyntaxKind::LAST_KEYWORD)
}

/// Reserved words can never be identifiers (`break` through `with`).
#[inline]
pub fn token_is_reserved_word(kind: SyntaxKind) -> bool {
    in_range(
        kind,
        SyntaxKind::FIRST_RESERVED_WORD,
        SyntaxKind::LAST_RESERVED_WORD,
    )
}

#[inline]
pub fn token_is_identifier_or_keyword(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::Identifier || token_is_keyword(kind)
}

#[inline]
pub fn token_is_punctuation(kind: SyntaxKind) -> bool {
    in_range(
        kind,
        SyntaxKind::FIRST_PUNCTUATION,
        SyntaxKind::LAST_PUNCTUATION,
    )
}

#[inline]
pub fn token_is_trivia(kind: SyntaxKind) -> bool {
    in_range(kind, SyntaxKind::FIRST_TRIVIA, SyntaxKind::LAST_TRIVIA)
}
