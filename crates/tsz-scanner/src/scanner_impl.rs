//! Scanner state machine.
//!
//! `ScannerState` turns source text into positioned tokens on demand. It keeps
//! a single cursor; the parser drives it with `scan()` and rewinds it either
//! with `save_state`/`restore_state` (cheap field copy) or with
//! `reset_token_state` (re-lex from an arbitrary offset).
//!
//! All positions are UTF-8 byte offsets into the full source text.

use bitflags::bitflags;
use tracing::trace;
use tsz_common::Span;

use crate::char_codes::{
    CARRIAGE_RETURN, LINE_FEED, is_digit, is_identifier_part, is_identifier_start, is_line_break,
    is_white_space_single_line,
};
use crate::syntax_kind::{SyntaxKind, string_to_token, token_is_reserved_word};

bitflags! {
    /// Per-token flags collected while scanning.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u32 {
        /// A line break occurred between the previous token and this one.
        const PRECEDING_LINE_BREAK = 1 << 0;
        /// A string literal ran into a line break or the end of input.
        const UNTERMINATED = 1 << 2;
        /// A numeric literal has a fraction or exponent part.
        const SCIENTIFIC_OR_DECIMAL = 1 << 4;
    }
}

/// Saved scanner cursor, restorable with [`ScannerState::restore_state`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannerSnapshot {
    pos: usize,
    full_start_pos: usize,
    token_start: usize,
    token: SyntaxKind,
    value_start: usize,
    value_end: usize,
    token_flags: TokenFlags,
}

impl ScannerSnapshot {
    /// Full start of the token that was current when the snapshot was taken.
    #[inline]
    pub fn token_full_start(&self) -> u32 {
        self.full_start_pos as u32
    }
}

#[derive(Clone, Debug)]
pub struct ScannerState {
    text: String,
    /// Scanning stops here (exclusive); `EndOfFileToken` is produced at it.
    end: usize,
    /// Current scan position (end of the current token).
    pos: usize,
    /// Start of the current token including leading trivia.
    full_start_pos: usize,
    /// Start of the current token excluding trivia.
    token_start: usize,
    token: SyntaxKind,
    value_start: usize,
    value_end: usize,
    token_flags: TokenFlags,
    skip_trivia: bool,
}

impl ScannerState {
    pub fn new(text: String, skip_trivia: bool) -> ScannerState {
        let end = text.len();
        ScannerState {
            text,
            end,
            pos: 0,
            full_start_pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            value_start: 0,
            value_end: 0,
            token_flags: TokenFlags::empty(),
            skip_trivia,
        }
    }

    // =========================================================================
    // Text and range
    // =========================================================================

    #[inline]
    pub fn source_text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn text_len(&self) -> u32 {
        self.text.len() as u32
    }

    /// Restrict scanning to text before `end`. Offsets past the text are clamped.
    pub fn set_text_end(&mut self, end: u32) {
        let mut end = (end as usize).min(self.text.len());
        while !self.text.is_char_boundary(end) {
            end -= 1;
        }
        self.end = end;
    }

    /// Re-lex from `pos`: the next `scan()` starts there.
    ///
    /// Only the cursor changes, so resetting to the same offset twice and
    /// scanning yields the same token both times.
    pub fn reset_token_state(&mut self, pos: u32) {
        let mut pos = (pos as usize).min(self.end);
        while !self.text.is_char_boundary(pos) {
            pos += 1;
        }
        trace!(pos, "scanner reset");
        self.pos = pos;
        self.full_start_pos = pos;
        self.token_start = pos;
        self.value_start = pos;
        self.value_end = pos;
        self.token = SyntaxKind::Unknown;
        self.token_flags = TokenFlags::empty();
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    #[inline]
    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            full_start_pos: self.full_start_pos,
            token_start: self.token_start,
            token: self.token,
            value_start: self.value_start,
            value_end: self.value_end,
            token_flags: self.token_flags,
        }
    }

    #[inline]
    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.full_start_pos = snapshot.full_start_pos;
        self.token_start = snapshot.token_start;
        self.token = snapshot.token;
        self.value_start = snapshot.value_start;
        self.value_end = snapshot.value_end;
        self.token_flags = snapshot.token_flags;
    }

    /// Run `callback` and rewind the scanner afterwards, whatever it returns.
    pub fn look_ahead<T>(&mut self, callback: impl FnOnce(&mut ScannerState) -> T) -> T {
        let snapshot = self.save_state();
        let result = callback(self);
        self.restore_state(snapshot);
        result
    }

    // =========================================================================
    // Current token
    // =========================================================================

    #[inline]
    pub fn get_token(&self) -> SyntaxKind {
        self.token
    }

    #[inline]
    pub fn get_token_full_start(&self) -> u32 {
        self.full_start_pos as u32
    }

    #[inline]
    pub fn get_token_start(&self) -> u32 {
        self.token_start as u32
    }

    #[inline]
    pub fn get_token_end(&self) -> u32 {
        self.pos as u32
    }

    #[inline]
    pub fn get_token_span(&self) -> Span {
        Span::new(self.token_start as u32, self.pos as u32)
    }

    /// Raw source text of the current token.
    #[inline]
    pub fn get_token_text(&self) -> &str {
        &self.text[self.token_start..self.pos]
    }

    /// Identifier text, or the raw contents of a string literal.
    #[inline]
    pub fn get_token_value_ref(&self) -> &str {
        &self.text[self.value_start..self.value_end]
    }

    #[inline]
    pub fn get_token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    #[inline]
    pub fn is_unterminated(&self) -> bool {
        self.token_flags.contains(TokenFlags::UNTERMINATED)
    }

    /// True for identifiers and for keywords that may be used as identifiers.
    #[inline]
    pub fn is_identifier(&self) -> bool {
        self.token == SyntaxKind::Identifier
            || (self.token > SyntaxKind::LAST_RESERVED_WORD
                && self.token <= SyntaxKind::LAST_KEYWORD)
    }

    #[inline]
    pub fn is_reserved_word(&self) -> bool {
        token_is_reserved_word(self.token)
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    #[inline]
    fn peek_char(&self, pos: usize) -> Option<char> {
        if pos >= self.end {
            return None;
        }
        self.text[pos..self.end].chars().next()
    }

    #[inline]
    fn peek_byte(&self, pos: usize) -> Option<u8> {
        if pos >= self.end {
            None
        } else {
            Some(self.text.as_bytes()[pos])
        }
    }

    #[inline]
    fn finish_token(&mut self, kind: SyntaxKind, len: usize) -> SyntaxKind {
        self.pos += len;
        self.value_start = self.token_start;
        self.value_end = self.pos;
        self.token = kind;
        kind
    }

    /// Advance to the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.full_start_pos = self.pos;
        self.token_flags = TokenFlags::empty();

        loop {
            self.token_start = self.pos;
            let Some(ch) = self.peek_char(self.pos) else {
                self.value_start = self.pos;
                self.value_end = self.pos;
                self.token = SyntaxKind::EndOfFileToken;
                return self.token;
            };

            if is_line_break(ch) {
                self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                let mut len = ch.len_utf8();
                if ch == CARRIAGE_RETURN && self.peek_char(self.pos + 1) == Some(LINE_FEED) {
                    len += 1;
                }
                if self.skip_trivia {
                    self.pos += len;
                    continue;
                }
                return self.finish_token(SyntaxKind::NewLineTrivia, len);
            }

            if is_white_space_single_line(ch) {
                let mut end = self.pos + ch.len_utf8();
                while let Some(next) = self.peek_char(end) {
                    if !is_white_space_single_line(next) {
                        break;
                    }
                    end += next.len_utf8();
                }
                if self.skip_trivia {
                    self.pos = end;
                    continue;
                }
                let len = end - self.pos;
                return self.finish_token(SyntaxKind::WhitespaceTrivia, len);
            }

            return match ch {
                '{' => self.finish_token(SyntaxKind::OpenBraceToken, 1),
                '}' => self.finish_token(SyntaxKind::CloseBraceToken, 1),
                '(' => self.finish_token(SyntaxKind::OpenParenToken, 1),
                ')' => self.finish_token(SyntaxKind::CloseParenToken, 1),
                '[' => self.finish_token(SyntaxKind::OpenBracketToken, 1),
                ']' => self.finish_token(SyntaxKind::CloseBracketToken, 1),
                ';' => self.finish_token(SyntaxKind::SemicolonToken, 1),
                ',' => self.finish_token(SyntaxKind::CommaToken, 1),
                ':' => self.finish_token(SyntaxKind::ColonToken, 1),
                '?' => self.finish_token(SyntaxKind::QuestionToken, 1),
                '!' => self.finish_token(SyntaxKind::ExclamationToken, 1),
                '|' => self.finish_token(SyntaxKind::BarToken, 1),
                '&' => self.finish_token(SyntaxKind::AmpersandToken, 1),
                '*' => self.finish_token(SyntaxKind::AsteriskToken, 1),
                '<' => self.finish_token(SyntaxKind::LessThanToken, 1),
                // `>` is never combined; `a.<b.<c>>` needs two closing tokens.
                '>' => self.finish_token(SyntaxKind::GreaterThanToken, 1),
                '@' => self.finish_token(SyntaxKind::AtToken, 1),
                '#' => self.finish_token(SyntaxKind::HashToken, 1),
                '+' => self.finish_token(SyntaxKind::PlusToken, 1),
                '-' => self.finish_token(SyntaxKind::MinusToken, 1),
                '/' => self.finish_token(SyntaxKind::SlashToken, 1),
                '%' => self.finish_token(SyntaxKind::PercentToken, 1),
                '^' => self.finish_token(SyntaxKind::CaretToken, 1),
                '~' => self.finish_token(SyntaxKind::TildeToken, 1),
                '`' => self.finish_token(SyntaxKind::BacktickToken, 1),
                '=' => {
                    if self.peek_byte(self.pos + 1) == Some(b'>') {
                        self.finish_token(SyntaxKind::EqualsGreaterThanToken, 2)
                    } else {
                        self.finish_token(SyntaxKind::EqualsToken, 1)
                    }
                }
                '.' => {
                    if self.peek_byte(self.pos + 1) == Some(b'.')
                        && self.peek_byte(self.pos + 2) == Some(b'.')
                    {
                        self.finish_token(SyntaxKind::DotDotDotToken, 3)
                    } else if self.peek_char(self.pos + 1).is_some_and(is_digit) {
                        self.scan_number()
                    } else {
                        self.finish_token(SyntaxKind::DotToken, 1)
                    }
                }
                '"' | '\'' => self.scan_string(ch),
                c if is_digit(c) => self.scan_number(),
                c if is_identifier_start(c) => self.scan_identifier(),
                c => self.finish_token(SyntaxKind::Unknown, c.len_utf8()),
            };
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let mut end = self.pos;
        while let Some(ch) = self.peek_char(end) {
            if !is_identifier_part(ch) {
                break;
            }
            end += ch.len_utf8();
        }
        let kind = string_to_token(&self.text[self.pos..end]);
        let len = end - self.pos;
        self.finish_token(kind, len)
    }

    fn scan_digits(&self, mut pos: usize) -> usize {
        while self.peek_byte(pos).is_some_and(|b| b.is_ascii_digit()) {
            pos += 1;
        }
        pos
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let mut end = self.scan_digits(self.pos);
        if self.peek_byte(end) == Some(b'.') {
            self.token_flags |= TokenFlags::SCIENTIFIC_OR_DECIMAL;
            end = self.scan_digits(end + 1);
        }
        if matches!(self.peek_byte(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(self.peek_byte(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            if self.peek_byte(exp).is_some_and(|b| b.is_ascii_digit()) {
                self.token_flags |= TokenFlags::SCIENTIFIC_OR_DECIMAL;
                end = self.scan_digits(exp);
            }
        }
        let len = end - self.pos;
        self.finish_token(SyntaxKind::NumericLiteral, len)
    }

    fn scan_string(&mut self, quote: char) -> SyntaxKind {
        let start = self.pos;
        let mut pos = self.pos + 1;
        let value_start = pos;
        let value_end;
        loop {
            match self.peek_char(pos) {
                None => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    value_end = pos;
                    break;
                }
                Some(ch) if ch == quote => {
                    value_end = pos;
                    pos += 1;
                    break;
                }
                Some(ch) if is_line_break(ch) => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    value_end = pos;
                    break;
                }
                Some('\\') => {
                    pos += 1;
                    if let Some(escaped) = self.peek_char(pos) {
                        pos += escaped.len_utf8();
                    }
                }
                Some(ch) => pos += ch.len_utf8(),
            }
        }
        self.pos = pos;
        self.token_start = start;
        self.value_start = value_start;
        self.value_end = value_end;
        self.token = SyntaxKind::StringLiteral;
        self.token
    }
}
