//! Diagnostic message table used by the scanner and parser.

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const IDENTIFIER_EXPECTED: u32 = 1003;
    pub const EXPECTED: u32 = 1005;
    pub const TRAILING_COMMA_NOT_ALLOWED: u32 = 1009;
    pub const UNEXPECTED_TOKEN: u32 = 1012;
    pub const TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY: u32 = 1099;
    pub const TYPE_EXPECTED: u32 = 1110;
    pub const IDENTIFIER_EXPECTED_IS_A_RESERVED_WORD_THAT_CANNOT_BE_USED_HERE: u32 = 1359;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::IDENTIFIER_EXPECTED,
        category: DiagnosticCategory::Error,
        message: "Identifier expected.",
    };
    pub const EXPECTED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXPECTED,
        category: DiagnosticCategory::Error,
        message: "'{0}' expected.",
    };
    pub const TRAILING_COMMA_NOT_ALLOWED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TRAILING_COMMA_NOT_ALLOWED,
        category: DiagnosticCategory::Error,
        message: "Trailing comma not allowed.",
    };
    pub const UNEXPECTED_TOKEN: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::UNEXPECTED_TOKEN,
        category: DiagnosticCategory::Error,
        message: "Unexpected token.",
    };
    pub const TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY,
        category: DiagnosticCategory::Error,
        message: "Type argument list cannot be empty.",
    };
    pub const TYPE_EXPECTED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_EXPECTED,
        category: DiagnosticCategory::Error,
        message: "Type expected.",
    };
    pub const IDENTIFIER_EXPECTED_IS_A_RESERVED_WORD_THAT_CANNOT_BE_USED_HERE: DiagnosticMessage =
        DiagnosticMessage {
            code: diagnostic_codes::IDENTIFIER_EXPECTED_IS_A_RESERVED_WORD_THAT_CANNOT_BE_USED_HERE,
            category: DiagnosticCategory::Error,
            message: "Identifier expected. '{0}' is a reserved word that cannot be used here.",
        };
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::IDENTIFIER_EXPECTED,
    diagnostic_messages::EXPECTED,
    diagnostic_messages::TRAILING_COMMA_NOT_ALLOWED,
    diagnostic_messages::UNEXPECTED_TOKEN,
    diagnostic_messages::TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY,
    diagnostic_messages::TYPE_EXPECTED,
    diagnostic_messages::IDENTIFIER_EXPECTED_IS_A_RESERVED_WORD_THAT_CANNOT_BE_USED_HERE,
];
