// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The glyph range backend.
//!
//! Older layout systems expose their lines through flat glyph ranges instead
//! of an incremental engine with opaque locations. [`GlyphLayout`] describes
//! that interface, and `GlyphWalker` answers the same queries as the
//! incremental [`Walker`](crate::Walker) on top of it, with integer offsets
//! throughout.

use peniko::kurbo::Rect;

use crate::query::{LineSource, overlaps};
use crate::walker::keeps_line;
use crate::{CharacterRange, EnumerationOptions};

/// A run of glyphs. Glyph ranges use the same representation as character
/// ranges but index the layout's glyph storage.
pub type GlyphRange = CharacterRange;

/// A layout system addressed by flat glyph ranges.
pub trait GlyphLayout {
    /// The total number of glyphs.
    fn glyph_count(&self) -> usize;

    /// The glyphs generated for `range`.
    fn glyph_range_for_character_range(&self, range: CharacterRange) -> GlyphRange;

    /// The characters that produced `glyphs`.
    fn character_range_for_glyph_range(&self, glyphs: GlyphRange) -> CharacterRange;

    /// The smallest glyph range holding every glyph inside `rect`.
    ///
    /// When `ensure_layout` is `false`, only already laid out text is
    /// considered. Returns an empty range when nothing is inside.
    fn glyph_range_for_bounding_rect(&self, rect: Rect, ensure_layout: bool) -> GlyphRange;

    /// Walks the lines holding `glyphs`, reporting each line's rect and
    /// glyph range until `visit` returns `false`.
    ///
    /// An empty `glyphs` selects the line containing its location.
    fn enumerate_line_fragments<F>(&self, glyphs: GlyphRange, reverse: bool, visit: F)
    where
        F: FnMut(Rect, GlyphRange) -> bool;

    /// The union of the per-line rects covering `glyphs`.
    fn bounding_rect_for_glyph_range(&self, glyphs: GlyphRange) -> Option<Rect>;
}

/// Answers line fragment queries over a [`GlyphLayout`].
pub(crate) struct GlyphWalker<'a, G> {
    layout: &'a G,
}

impl<G> core::fmt::Debug for GlyphWalker<'_, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphWalker").finish_non_exhaustive()
    }
}

impl<'a, G: GlyphLayout> GlyphWalker<'a, G> {
    pub(crate) fn new(layout: &'a G) -> Self {
        Self { layout }
    }
}

impl<G: GlyphLayout> LineSource for GlyphWalker<'_, G> {
    fn lines_in_rect(
        &self,
        rect: Rect,
        strict_intersection: bool,
        options: EnumerationOptions,
        visit: &mut dyn FnMut(Rect, CharacterRange) -> bool,
    ) {
        let layout = self.layout;
        let glyphs = layout.glyph_range_for_bounding_rect(rect, true);
        if glyphs.is_empty() {
            return;
        }
        layout.enumerate_line_fragments(glyphs, options.reverse, |line_rect, line_glyphs| {
            if !overlaps(line_rect, rect) {
                return true;
            }
            if !strict_intersection {
                return visit(line_rect, layout.character_range_for_glyph_range(line_glyphs));
            }
            let clipped = line_rect.intersect(rect);
            let inside = layout.glyph_range_for_bounding_rect(clipped, false);
            visit(clipped, layout.character_range_for_glyph_range(inside))
        });
    }

    fn lines_in_range(
        &self,
        range: CharacterRange,
        options: EnumerationOptions,
        visit: &mut dyn FnMut(Rect, CharacterRange) -> bool,
    ) {
        let layout = self.layout;
        let glyphs = layout.glyph_range_for_character_range(range);
        layout.enumerate_line_fragments(glyphs, options.reverse, |line_rect, line_glyphs| {
            visit(line_rect, layout.character_range_for_glyph_range(line_glyphs))
        });
    }

    fn lines_from(
        &self,
        index: usize,
        options: EnumerationOptions,
        visit: &mut dyn FnMut(Rect, CharacterRange) -> bool,
    ) {
        let layout = self.layout;
        let count = layout.glyph_count();
        let at = layout
            .glyph_range_for_character_range(CharacterRange::new(index, 0))
            .start;
        let reverse = options.reverse;
        let glyphs = if reverse {
            GlyphRange::from_bounds(0, at)
        } else {
            GlyphRange::from_bounds(at, count)
        };
        layout.enumerate_line_fragments(glyphs, reverse, |line_rect, line_glyphs| {
            let range = layout.character_range_for_glyph_range(line_glyphs);
            if !keeps_line(range, index, reverse) {
                return true;
            }
            visit(line_rect, range)
        });
    }

    fn bounding_rect(&self, range: CharacterRange) -> Option<Rect> {
        let glyphs = self.layout.glyph_range_for_character_range(range);
        self.layout.bounding_rect_for_glyph_range(glyphs)
    }
}
