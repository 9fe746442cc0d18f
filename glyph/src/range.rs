// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A run of characters expressed as flat, zero-based offsets.
///
/// `CharacterRange` is the integer view of a document position: a `start`
/// offset plus a `len`. The derived [`end`](Self::end) is exclusive and is
/// never less than `start`. A zero `len` describes a caret position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CharacterRange {
    /// The offset of the first character.
    pub start: usize,
    /// The number of characters covered.
    pub len: usize,
}

impl CharacterRange {
    /// Creates a range covering `len` characters from `start`.
    #[inline]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Creates a range from exclusive bounds.
    ///
    /// An `end` before `start` collapses to an empty range at `start`.
    #[inline]
    pub const fn from_bounds(start: usize, end: usize) -> Self {
        Self {
            start,
            len: end.saturating_sub(start),
        }
    }

    /// The exclusive end offset.
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.start + self.len
    }

    /// Returns `true` if the range covers no characters.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `index` lies in `start..end`.
    #[must_use]
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }

    /// Returns `true` if both ranges share at least one character.
    ///
    /// Empty ranges never intersect anything.
    #[must_use]
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// The characters shared by both ranges, if any.
    #[must_use]
    pub fn intersection(self, other: Self) -> Option<Self> {
        self.intersects(other).then(|| {
            Self::from_bounds(self.start.max(other.start), self.end().min(other.end()))
        })
    }

    /// Returns this range shifted forward by `offset` characters.
    ///
    /// Used to move a range local to a layout fragment into document space.
    #[must_use]
    #[inline]
    pub const fn offset_by(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            len: self.len,
        }
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub const fn as_range(self) -> Range<usize> {
        self.start..self.end()
    }
}

impl From<Range<usize>> for CharacterRange {
    #[inline]
    fn from(value: Range<usize>) -> Self {
        Self::from_bounds(value.start, value.end)
    }
}

impl From<CharacterRange> for Range<usize> {
    #[inline]
    fn from(value: CharacterRange) -> Self {
        value.as_range()
    }
}

/// A range between two opaque document locations.
///
/// Unlike [`CharacterRange`], the bounds only support comparison. Converting
/// to offsets requires a [`LocationProvider`](crate::LocationProvider).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange<L> {
    start: L,
    end: L,
}

impl<L: Ord> TextRange<L> {
    /// Returns a range from `start` to `end`, or `None` if `end` precedes
    /// `start`.
    pub fn new(start: L, end: L) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Returns `true` if `location` is in `start..end`.
    pub fn contains(&self, location: &L) -> bool {
        *location >= self.start && *location < self.end
    }

    /// Returns `true` if the bounds are equal.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<L: Clone> TextRange<L> {
    /// An empty range at `location`.
    pub fn empty(location: L) -> Self {
        Self {
            start: location.clone(),
            end: location,
        }
    }
}

impl<L> TextRange<L> {
    /// The inclusive start location.
    pub fn start(&self) -> &L {
        &self.start
    }

    /// The exclusive end location.
    pub fn end(&self) -> &L {
        &self.end
    }
}
