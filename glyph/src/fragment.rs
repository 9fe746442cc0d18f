// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Point, Rect};

use crate::{CharacterRange, TextRange};

/// One visual line of laid out text, as produced by a layout engine.
///
/// Geometry is local to the owning [`LayoutFragment`]; offset it by the
/// fragment's [`frame`](LayoutFragment::frame) origin to get document
/// coordinates.
pub trait LineFragment {
    /// The typographic bounds of the line in its layout fragment's space.
    fn typographic_bounds(&self) -> Rect;

    /// The characters on this line, relative to the start of the owning
    /// layout fragment.
    fn character_range(&self) -> CharacterRange;

    /// The position of the leading edge of the character at `index`, counted
    /// from the start of this line.
    ///
    /// Must accept `0..=character_range().len`; the final index is the
    /// trailing edge of the line.
    fn location_for_character(&self, index: usize) -> Point;

    /// The number of characters with a position on this line.
    fn character_count(&self) -> usize {
        self.character_range().len
    }
}

/// A unit of incrementally computed layout holding one or more lines.
///
/// Engines own their fragments and may discard or recompute them after each
/// callback, so fragments are only ever borrowed.
pub trait LayoutFragment {
    /// The engine's location type.
    type Location;

    /// The line type stored in this fragment.
    type Line: LineFragment;

    /// The frame of this fragment in document coordinates.
    fn frame(&self) -> Rect;

    /// The span of the document this fragment lays out.
    fn range_in_element(&self) -> TextRange<Self::Location>;

    /// The lines of this fragment, top to bottom.
    fn line_fragments(&self) -> &[Self::Line];
}
