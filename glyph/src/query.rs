// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry queries built on a [`Walker`].

use core::ops::Range;

use peniko::kurbo::Rect;

use crate::walker::{LineVisit, Walker};
use crate::{CharacterRange, EnumerationOptions, LayoutEngine, LayoutFragment, LineFragment};

/// The per-backend operations a [`TextContainer`](crate::TextContainer)
/// dispatches to.
pub(crate) trait LineSource {
    fn lines_in_rect(
        &self,
        rect: Rect,
        strict_intersection: bool,
        options: EnumerationOptions,
        visit: &mut dyn FnMut(Rect, CharacterRange) -> bool,
    );

    fn lines_in_range(
        &self,
        range: CharacterRange,
        options: EnumerationOptions,
        visit: &mut dyn FnMut(Rect, CharacterRange) -> bool,
    );

    fn lines_from(
        &self,
        index: usize,
        options: EnumerationOptions,
        visit: &mut dyn FnMut(Rect, CharacterRange) -> bool,
    );

    fn bounding_rect(&self, range: CharacterRange) -> Option<Rect>;
}

/// Returns `true` if the two rects overlap.
///
/// Vertical overlap must have positive extent. Horizontal contact is enough,
/// since empty lines have zero width.
pub(crate) fn overlaps(a: Rect, b: Rect) -> bool {
    a.y0 < b.y1 && b.y0 < a.y1 && a.x0 <= b.x1 && b.x0 <= a.x1
}

/// Finds the characters of `line` whose leading edge lies in `lo..hi`.
///
/// `lo` and `hi` are horizontal positions in the layout fragment's space.
/// The start is the first character at or right of `lo`; the end follows the
/// last character strictly left of `hi`, so a character starting exactly at
/// `hi` is excluded. Returns `None` when either bound does not exist, such
/// as for a line without characters or a span right of every character.
///
/// The returned range is relative to the start of the line.
pub fn clip_character_span<L: LineFragment + ?Sized>(
    line: &L,
    lo: f64,
    hi: f64,
) -> Option<Range<usize>> {
    let count = line.character_count();
    let x = |index: usize| line.location_for_character(index).x;
    let start = (0..count).find(|index| x(*index) >= lo)?;
    let end = (0..count).rev().find(|index| x(*index) < hi)? + 1;
    Some(start..end.max(start))
}

impl<E: LayoutEngine> Walker<'_, E> {
    fn clip(line: &LineVisit<'_, E>, rect: Rect) -> Option<(Rect, CharacterRange)> {
        let clipped = line.rect.intersect(rect);
        let origin_x = line.fragment.frame().x0;
        let span = clip_character_span(line.line, clipped.x0 - origin_x, clipped.x1 - origin_x)?;
        Some((clipped, CharacterRange::from(span).offset_by(line.range.start)))
    }
}

impl<E: LayoutEngine> LineSource for Walker<'_, E> {
    fn lines_in_rect(
        &self,
        rect: Rect,
        strict_intersection: bool,
        options: EnumerationOptions,
        visit: &mut dyn FnMut(Rect, CharacterRange) -> bool,
    ) {
        self.enumerate_in_rect(rect, options, |line| {
            if !overlaps(line.rect, rect) {
                return true;
            }
            if !strict_intersection {
                return visit(line.rect, line.range);
            }
            match Self::clip(&line, rect) {
                Some((clipped, range)) => visit(clipped, range),
                None => true,
            }
        });
    }

    fn lines_in_range(
        &self,
        range: CharacterRange,
        options: EnumerationOptions,
        visit: &mut dyn FnMut(Rect, CharacterRange) -> bool,
    ) {
        self.enumerate_in_range(range, options, |line| visit(line.rect, line.range));
    }

    fn lines_from(
        &self,
        index: usize,
        options: EnumerationOptions,
        visit: &mut dyn FnMut(Rect, CharacterRange) -> bool,
    ) {
        self.enumerate_from_index(index, options, |line| visit(line.rect, line.range));
    }

    fn bounding_rect(&self, range: CharacterRange) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        let options = EnumerationOptions::new().with_ensures_layout(true);
        self.enumerate_in_range(range, options, |line| {
            let line_start = line.range.start;
            // Both are relative to the start of the line.
            let start = range.start.max(line_start) - line_start;
            let end = range.end().min(line.range.end()) - line_start;
            let start_x = line.line.location_for_character(start).x;
            let end_x = line.line.location_for_character(end).x;
            let origin_x = line.fragment.frame().x0;
            let rect = Rect::new(
                start_x + origin_x,
                line.rect.y0,
                end_x + origin_x,
                line.rect.y1,
            )
            .abs();
            bounds = Some(bounds.map_or(rect, |bounds| bounds.union(rect)));
            true
        });
        bounds
    }
}
