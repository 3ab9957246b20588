//! Character classification utilities.
//!
//! ASCII is handled with direct comparisons; everything else falls back to
//! Unicode properties from the standard library.

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const LINE_SEPARATOR: char = '\u{2028}';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';
pub const NEXT_LINE: char = '\u{0085}';
pub const TAB: char = '\t';
pub const VERTICAL_TAB: char = '\u{000B}';
pub const FORM_FEED: char = '\u{000C}';
pub const NON_BREAKING_SPACE: char = '\u{00A0}';
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

#[inline]
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        LINE_FEED | CARRIAGE_RETURN | LINE_SEPARATOR | PARAGRAPH_SEPARATOR
    )
}

/// Whitespace that does not end a line.
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    match ch {
        ' ' | TAB | VERTICAL_TAB | FORM_FEED | NON_BREAKING_SPACE | NEXT_LINE | BYTE_ORDER_MARK => {
            true
        }
        '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => true,
        _ => false,
    }
}

#[inline]
pub fn is_white_space_like(ch: char) -> bool {
    is_white_space_single_line(ch) || is_line_break(ch)
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    if ch.is_ascii() {
        ch.is_ascii_alphabetic() || ch == '$' || ch == '_'
    } else {
        ch.is_alphabetic()
    }
}

#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    if ch.is_ascii() {
        ch.is_ascii_alphanumeric() || ch == '$' || ch == '_'
    } else {
        // ZWNJ and ZWJ are allowed inside identifiers.
        ch.is_alphanumeric() || ch == '\u{200C}' || ch == '\u{200D}'
    }
}
