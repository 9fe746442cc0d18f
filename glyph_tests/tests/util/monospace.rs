// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fixed width document that lays out every paragraph eagerly.
//!
//! Each paragraph ends after a newline (or at the end of the text) and becomes
//! one layout fragment, wrapped into lines of at most `columns` characters.
//! The newline itself belongs to the last line of its paragraph and has no
//! width. When the text ends with a newline, the last fragment can carry an
//! extra empty line below it.
//!
//! The same document implements [`GlyphLayout`] with one glyph per character,
//! so both backends of a [`TextContainer`](glyph::TextContainer) can run over
//! identical geometry.

use std::cell::Cell;
use std::ops::Range;

use glyph::kurbo::{Point, Rect};
use glyph::{
    CharacterRange, EnumerationOptions, Error, FlatLocation, FlatProvider, GlyphLayout,
    GlyphRange, LayoutEngine, LayoutFragment, LineFragment, LineRecord, LocationProvider,
    TextRange, Viewport,
};

pub(crate) const CHAR_WIDTH: f64 = 7.0;
pub(crate) const LINE_HEIGHT: f64 = 14.0;

#[derive(Clone, Debug)]
pub(crate) struct MonoLine {
    bounds: Rect,
    range: CharacterRange,
}

impl LineFragment for MonoLine {
    fn typographic_bounds(&self) -> Rect {
        self.bounds
    }

    fn character_range(&self) -> CharacterRange {
        self.range
    }

    fn location_for_character(&self, index: usize) -> Point {
        Point::new(self.bounds.x0 + index as f64 * CHAR_WIDTH, self.bounds.y0)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Paragraph {
    frame: Rect,
    range: TextRange<FlatLocation>,
    lines: Vec<MonoLine>,
}

impl Paragraph {
    fn start(&self) -> usize {
        self.range.start().offset()
    }

    fn contains(&self, offset: usize) -> bool {
        self.range.contains(&FlatLocation(offset))
    }
}

impl LayoutFragment for Paragraph {
    type Location = FlatLocation;
    type Line = MonoLine;

    fn frame(&self) -> Rect {
        self.frame
    }

    fn range_in_element(&self) -> TextRange<FlatLocation> {
        self.range
    }

    fn line_fragments(&self) -> &[MonoLine] {
        &self.lines
    }
}

/// A document of fixed width characters, see the module docs.
#[derive(Debug)]
pub(crate) struct MonospaceDocument {
    provider: FlatProvider,
    columns: usize,
    paragraphs: Vec<Paragraph>,
    /// The last paragraph with the extra line fragment appended.
    trailing: Option<Paragraph>,
    viewport: Option<Viewport<FlatLocation>>,
    visited: Cell<usize>,
}

impl MonospaceDocument {
    /// Lays out `text` wrapped at `columns` characters.
    pub(crate) fn new(text: &str, columns: usize) -> Self {
        assert!(columns > 0, "a document needs at least one column");
        let chars: Vec<char> = text.chars().collect();
        let width = columns as f64 * CHAR_WIDTH;
        let mut paragraphs = Vec::new();
        let mut start = 0;
        let mut y = 0.0;
        while start < chars.len() {
            let end = chars[start..]
                .iter()
                .position(|c| *c == '\n')
                .map_or(chars.len(), |newline| start + newline + 1);
            let has_newline = chars[end - 1] == '\n';
            let visible = end - start - usize::from(has_newline);
            let mut lines = Vec::new();
            let mut local = 0;
            loop {
                let take = (visible - local).min(columns);
                let last = local + take == visible;
                let len = take + usize::from(last && has_newline);
                let top = lines.len() as f64 * LINE_HEIGHT;
                lines.push(MonoLine {
                    bounds: Rect::new(0.0, top, take as f64 * CHAR_WIDTH, top + LINE_HEIGHT),
                    range: CharacterRange::new(local, len),
                });
                local += take;
                if last {
                    break;
                }
            }
            let height = lines.len() as f64 * LINE_HEIGHT;
            paragraphs.push(Paragraph {
                frame: Rect::new(0.0, y, width, y + height),
                range: TextRange::new(FlatLocation(start), FlatLocation(end))
                    .expect("paragraph bounds are ordered"),
                lines,
            });
            y += height;
            start = end;
        }
        let trailing = match (chars.last(), paragraphs.last()) {
            (Some('\n'), Some(last)) => {
                let mut trailing = last.clone();
                let top = trailing.frame.height();
                let len = chars.len() - trailing.start();
                trailing.lines.push(MonoLine {
                    bounds: Rect::new(0.0, top, 0.0, top + LINE_HEIGHT),
                    range: CharacterRange::new(len, 0),
                });
                trailing.frame.y1 += LINE_HEIGHT;
                Some(trailing)
            }
            _ => None,
        };
        Self {
            provider: FlatProvider::new(chars.len()),
            columns,
            paragraphs,
            trailing,
            viewport: None,
            visited: Cell::new(0),
        }
    }

    /// Reports `paragraphs` as the materialized viewport.
    pub(crate) fn with_viewport(self, paragraphs: Range<usize>) -> Self {
        self.with_stale_viewport(paragraphs.clone(), paragraphs)
    }

    /// Reports a viewport whose range covers the `range` paragraphs while its
    /// bounds cover the `bounds` paragraphs, as after the layout moved on.
    pub(crate) fn with_stale_viewport(
        mut self,
        range: Range<usize>,
        bounds: Range<usize>,
    ) -> Self {
        let first = &self.paragraphs[range.start];
        let last = &self.paragraphs[range.end - 1];
        let range = TextRange::new(*first.range.start(), *last.range.end())
            .expect("viewport bounds are ordered");
        let top = self.paragraphs[bounds.start].frame.y0;
        let bottom = self.paragraphs[bounds.end - 1].frame.y1;
        self.viewport = Some(Viewport {
            range,
            bounds: Rect::new(0.0, top, self.width(), bottom),
        });
        self
    }

    pub(crate) fn len(&self) -> usize {
        self.provider.len()
    }

    pub(crate) fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// The frame of the paragraph at `index`.
    pub(crate) fn paragraph_frame(&self, index: usize) -> Rect {
        self.paragraphs[index].frame
    }

    pub(crate) fn width(&self) -> f64 {
        self.columns as f64 * CHAR_WIDTH
    }

    pub(crate) fn height(&self) -> f64 {
        self.paragraphs.last().map_or(0.0, |last| last.frame.y1)
    }

    /// How many layout fragments have been handed to callbacks so far.
    pub(crate) fn visited(&self) -> usize {
        self.visited.get()
    }

    /// Every line in document order and document space, without the extra
    /// line fragment.
    pub(crate) fn global_lines(&self) -> Vec<LineRecord> {
        self.paragraphs
            .iter()
            .flat_map(|paragraph| {
                let origin = paragraph.frame.origin().to_vec2();
                let base = paragraph.start();
                paragraph.lines.iter().map(move |line| LineRecord {
                    rect: line.bounds + origin,
                    range: line.range.offset_by(base),
                })
            })
            .collect()
    }

    fn paragraph_index(&self, location: &FlatLocation) -> Option<usize> {
        self.paragraphs
            .iter()
            .position(|paragraph| paragraph.contains(location.offset()))
    }

    fn fragment(&self, index: usize, options: EnumerationOptions) -> &Paragraph {
        match &self.trailing {
            Some(trailing)
                if options.ensures_extra_line_fragment && index + 1 == self.paragraphs.len() =>
            {
                trailing
            }
            _ => &self.paragraphs[index],
        }
    }

    /// Lines selected by a glyph range: those sharing a glyph with it, or for
    /// an empty range the line containing it, or the last line at the end.
    fn selected_lines(&self, glyphs: GlyphRange) -> Vec<LineRecord> {
        let lines = self.global_lines();
        if !glyphs.is_empty() {
            return lines
                .into_iter()
                .filter(|line| line.range.intersects(glyphs))
                .collect();
        }
        let at = glyphs.start;
        let found = lines.iter().find(|line| line.range.contains(at)).copied();
        let at_end = (at == self.len()).then(|| lines.last().copied()).flatten();
        found.or(at_end).into_iter().collect()
    }
}

impl LocationProvider for MonospaceDocument {
    type Location = FlatLocation;

    fn document_range(&self) -> TextRange<FlatLocation> {
        self.provider.document_range()
    }

    fn offset(&self, from: &FlatLocation, to: &FlatLocation) -> Result<isize, Error> {
        self.provider.offset(from, to)
    }

    fn location(&self, from: &FlatLocation, offset: isize) -> Result<FlatLocation, Error> {
        self.provider.location(from, offset)
    }
}

impl LayoutEngine for MonospaceDocument {
    type Fragment = Paragraph;

    fn enumerate_fragments_from<F>(
        &self,
        location: &FlatLocation,
        options: EnumerationOptions,
        mut visit: F,
    ) where
        F: FnMut(&Paragraph) -> bool,
    {
        let Some(first) = self.paragraph_index(location) else {
            return;
        };
        let order: Box<dyn Iterator<Item = usize>> = if options.reverse {
            Box::new((0..=first).rev())
        } else {
            Box::new(first..self.paragraphs.len())
        };
        for index in order {
            self.visited.set(self.visited.get() + 1);
            if !visit(self.fragment(index, options)) {
                break;
            }
        }
    }

    fn fragment_at<R, F>(&self, location: &FlatLocation, f: F) -> Option<R>
    where
        F: FnOnce(&Paragraph) -> R,
    {
        let index = self.paragraph_index(location)?;
        Some(f(&self.paragraphs[index]))
    }

    fn viewport(&self) -> Option<Viewport<FlatLocation>> {
        self.viewport.clone()
    }
}

impl GlyphLayout for MonospaceDocument {
    fn glyph_count(&self) -> usize {
        self.len()
    }

    fn glyph_range_for_character_range(&self, range: CharacterRange) -> GlyphRange {
        range
    }

    fn character_range_for_glyph_range(&self, glyphs: GlyphRange) -> CharacterRange {
        glyphs
    }

    fn glyph_range_for_bounding_rect(&self, rect: Rect, _ensure_layout: bool) -> GlyphRange {
        let mut hull: Option<Range<usize>> = None;
        for line in self.global_lines() {
            if line.rect.y0 >= rect.y1 || rect.y0 >= line.rect.y1 {
                continue;
            }
            for local in 0..line.range.len {
                let x = line.rect.x0 + local as f64 * CHAR_WIDTH;
                if x < rect.x0 || x >= rect.x1 {
                    continue;
                }
                let index = line.range.start + local;
                hull = Some(match hull {
                    Some(hull) => hull.start.min(index)..hull.end.max(index + 1),
                    None => index..index + 1,
                });
            }
        }
        hull.map_or(GlyphRange::new(0, 0), GlyphRange::from)
    }

    fn enumerate_line_fragments<F>(&self, glyphs: GlyphRange, reverse: bool, mut visit: F)
    where
        F: FnMut(Rect, GlyphRange) -> bool,
    {
        let mut lines = self.selected_lines(glyphs);
        if reverse {
            lines.reverse();
        }
        for line in lines {
            if !visit(line.rect, line.range) {
                break;
            }
        }
    }

    fn bounding_rect_for_glyph_range(&self, glyphs: GlyphRange) -> Option<Rect> {
        self.selected_lines(glyphs)
            .into_iter()
            .map(|line| {
                let start = glyphs.start.max(line.range.start) - line.range.start;
                let end = glyphs.end().min(line.range.end()) - line.range.start;
                Rect::new(
                    line.rect.x0 + start as f64 * CHAR_WIDTH,
                    line.rect.y0,
                    line.rect.x0 + end as f64 * CHAR_WIDTH,
                    line.rect.y1,
                )
            })
            .reduce(|bounds, rect| bounds.union(rect))
    }
}
