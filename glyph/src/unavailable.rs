// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Point, Rect};

use crate::glyphs::{GlyphLayout, GlyphRange};
use crate::location::FlatLocation;
use crate::{
    CharacterRange, EnumerationOptions, Error, LayoutEngine, LayoutFragment, LineFragment,
    LocationProvider, TextRange,
};

/// Stands in for a backend that does not exist.
///
/// This type has no values. It fills the unused backend parameter of a
/// [`TextContainer`](crate::TextContainer) built over a single backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unavailable {}

impl LocationProvider for Unavailable {
    type Location = FlatLocation;

    fn document_range(&self) -> TextRange<FlatLocation> {
        match *self {}
    }

    fn offset(&self, _: &FlatLocation, _: &FlatLocation) -> Result<isize, Error> {
        match *self {}
    }

    fn location(&self, _: &FlatLocation, _: isize) -> Result<FlatLocation, Error> {
        match *self {}
    }
}

impl LayoutEngine for Unavailable {
    type Fragment = Self;

    fn enumerate_fragments_from<F>(&self, _: &FlatLocation, _: EnumerationOptions, _: F)
    where
        F: FnMut(&Self) -> bool,
    {
        match *self {}
    }

    fn fragment_at<R, F>(&self, _: &FlatLocation, _: F) -> Option<R>
    where
        F: FnOnce(&Self) -> R,
    {
        match *self {}
    }
}

impl LayoutFragment for Unavailable {
    type Location = FlatLocation;
    type Line = Self;

    fn frame(&self) -> Rect {
        match *self {}
    }

    fn range_in_element(&self) -> TextRange<FlatLocation> {
        match *self {}
    }

    fn line_fragments(&self) -> &[Self] {
        match *self {}
    }
}

impl LineFragment for Unavailable {
    fn typographic_bounds(&self) -> Rect {
        match *self {}
    }

    fn character_range(&self) -> CharacterRange {
        match *self {}
    }

    fn location_for_character(&self, _: usize) -> Point {
        match *self {}
    }
}

impl GlyphLayout for Unavailable {
    fn glyph_count(&self) -> usize {
        match *self {}
    }

    fn glyph_range_for_character_range(&self, _: CharacterRange) -> GlyphRange {
        match *self {}
    }

    fn character_range_for_glyph_range(&self, _: GlyphRange) -> CharacterRange {
        match *self {}
    }

    fn glyph_range_for_bounding_rect(&self, _: Rect, _: bool) -> GlyphRange {
        match *self {}
    }

    fn enumerate_line_fragments<F>(&self, _: GlyphRange, _: bool, _: F)
    where
        F: FnMut(Rect, GlyphRange) -> bool,
    {
        match *self {}
    }

    fn bounding_rect_for_glyph_range(&self, _: GlyphRange) -> Option<Rect> {
        match *self {}
    }
}
