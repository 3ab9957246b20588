//! Spanned node lists.

use std::ops::Index;

use serde::Serialize;
use tsz_common::TextRange;

/// An ordered list of child nodes with its own source range.
///
/// A non-empty list spans `[first.pos, last.end)`. An empty list is a
/// zero-width range at the position where its first element would have begun.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeList<T> {
    pub pos: u32,
    pub end: u32,
    pub nodes: Vec<T>,
}

impl<T> NodeList<T> {
    /// An empty list anchored at `pos`.
    pub fn empty_at(pos: u32) -> NodeList<T> {
        NodeList {
            pos,
            end: pos,
            nodes: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.nodes.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.nodes.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.nodes.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.nodes.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.nodes
    }
}

impl<T: TextRange> NodeList<T> {
    /// Build a list whose range is derived from its elements, falling back to
    /// a zero-width range at `empty_pos` when there are none.
    pub fn from_nodes(nodes: Vec<T>, empty_pos: u32) -> NodeList<T> {
        match (nodes.first(), nodes.last()) {
            (Some(first), Some(last)) => NodeList {
                pos: first.pos(),
                end: last.end(),
                nodes,
            },
            _ => NodeList::empty_at(empty_pos),
        }
    }
}

impl<T> TextRange for NodeList<T> {
    #[inline]
    fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    fn end(&self) -> u32 {
        self.end
    }
}

impl<T> Index<usize> for NodeList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.nodes[index]
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
