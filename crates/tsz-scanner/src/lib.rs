//! Scanner/tokenizer for tsz JSDoc type expressions.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine with save/restore and re-scan
//! - `char_codes` - Character classification utilities

pub mod char_codes;

mod syntax_kind;
pub use syntax_kind::{
    SyntaxKind, keyword_to_text, punctuation_to_text, string_to_token, text_to_keyword,
    token_is_identifier_or_keyword, token_is_keyword, token_is_punctuation,
    token_is_reserved_word, token_is_trivia,
};

mod scanner_impl;
pub use scanner_impl::{ScannerSnapshot, ScannerState, TokenFlags};

#[cfg(test)]
mod tests;
