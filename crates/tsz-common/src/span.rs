//! Source spans.
//!
//! Positions are UTF-8 byte offsets into the full source text, stored as `u32`
//! like every other position in the tsz crates. A span is half-open:
//! `[start, end)`.

use serde::Serialize;

/// A half-open byte range `[start, end)` in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Span {
        Span { start, end }
    }

    /// A zero-width span at `pos`.
    #[inline]
    pub const fn at(pos: u32) -> Span {
        Span { start: pos, end: pos }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True if `other` lies entirely within this span.
    #[inline]
    pub const fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Slice the covered text out of `source`, or `""` when out of bounds.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or("")
    }
}

/// Anything that occupies a `[pos, end)` range of the source.
pub trait TextRange {
    fn pos(&self) -> u32;
    fn end(&self) -> u32;

    #[inline]
    fn span(&self) -> Span {
        Span::new(self.pos(), self.end())
    }
}

impl TextRange for Span {
    #[inline]
    fn pos(&self) -> u32 {
        self.start
    }

    #[inline]
    fn end(&self) -> u32 {
        self.end
    }
}
