// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::debug;
use peniko::kurbo::{Rect, Vec2};
use smallvec::SmallVec;

use crate::glyphs::{GlyphLayout, GlyphWalker};
use crate::query::LineSource;
use crate::{CharacterRange, EnumerationOptions, IndexSet, LayoutEngine, Unavailable, Walker};

/// One line fragment in document space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineRecord {
    /// The line's bounds.
    pub rect: Rect,
    /// The line's characters.
    pub range: CharacterRange,
}

enum Backend<'a, E, G> {
    Incremental(Walker<'a, E>),
    Glyphs(GlyphWalker<'a, G>),
}

/// Line fragment queries over whichever layout backend is available.
///
/// The backend is chosen once, when the container is built: an incremental
/// [`LayoutEngine`] when there is one, a [`GlyphLayout`] otherwise. Both
/// answer every query with the same semantics.
///
/// All callbacks receive a rect and a range in document space and return
/// `true` to keep going.
pub struct TextContainer<'a, E = Unavailable, G = Unavailable> {
    backend: Backend<'a, E, G>,
}

impl<E, G> core::fmt::Debug for TextContainer<'_, E, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let backend = match self.backend {
            Backend::Incremental(_) => "incremental",
            Backend::Glyphs(_) => "glyphs",
        };
        f.debug_struct("TextContainer")
            .field("backend", &backend)
            .finish()
    }
}

impl<'a, E: LayoutEngine> TextContainer<'a, E, Unavailable> {
    /// A container backed by an incremental layout engine.
    pub fn with_engine(engine: &'a E) -> Self {
        Self {
            backend: Backend::Incremental(Walker::new(engine)),
        }
    }
}

impl<'a, G: GlyphLayout> TextContainer<'a, Unavailable, G> {
    /// A container backed by a glyph range layout.
    pub fn with_glyph_layout(layout: &'a G) -> Self {
        Self {
            backend: Backend::Glyphs(GlyphWalker::new(layout)),
        }
    }
}

impl<'a, E: LayoutEngine, G: GlyphLayout> TextContainer<'a, E, G> {
    /// Picks the incremental `engine` when present, else the glyph `layout`.
    ///
    /// Returns `None` when neither is available.
    pub fn new(engine: Option<&'a E>, layout: Option<&'a G>) -> Option<Self> {
        let backend = match (engine, layout) {
            (Some(engine), _) => Backend::Incremental(Walker::new(engine)),
            (None, Some(layout)) => {
                debug!("no incremental layout engine, using glyph ranges");
                Backend::Glyphs(GlyphWalker::new(layout))
            }
            (None, None) => return None,
        };
        Some(Self { backend })
    }

    /// Returns `true` if queries run on the incremental engine.
    pub fn is_incremental(&self) -> bool {
        matches!(self.backend, Backend::Incremental(_))
    }

    /// The incremental walker, when that is the active backend.
    pub fn walker(&self) -> Option<Walker<'a, E>> {
        match &self.backend {
            Backend::Incremental(walker) => Some(walker.clone()),
            Backend::Glyphs(_) => None,
        }
    }

    fn source(&self) -> &dyn LineSource {
        match &self.backend {
            Backend::Incremental(walker) => walker,
            Backend::Glyphs(walker) => walker,
        }
    }

    /// Enumerates the line fragments that intersect `rect`.
    ///
    /// With `strict_intersection`, each rect is clipped to `rect` and each
    /// range to the characters whose leading edge lies within it. This is
    /// more expensive. Otherwise whole lines are reported.
    pub fn enumerate_line_fragments_in_rect<F>(
        &self,
        rect: Rect,
        strict_intersection: bool,
        options: EnumerationOptions,
        mut visit: F,
    ) where
        F: FnMut(Rect, CharacterRange) -> bool,
    {
        self.source()
            .lines_in_rect(rect, strict_intersection, options, &mut visit);
    }

    /// Enumerates the line fragments overlapping `range`, with their full
    /// rects and ranges.
    pub fn enumerate_line_fragments_in_range<F>(
        &self,
        range: CharacterRange,
        options: EnumerationOptions,
        mut visit: F,
    ) where
        F: FnMut(Rect, CharacterRange) -> bool,
    {
        self.source().lines_in_range(range, options, &mut visit);
    }

    /// Enumerates line fragments starting at the caret `index`, moving toward
    /// the document end when `forward` is set and toward the start otherwise.
    pub fn enumerate_line_fragments_from<F>(&self, index: usize, forward: bool, mut visit: F)
    where
        F: FnMut(Rect, CharacterRange) -> bool,
    {
        let options = EnumerationOptions::new()
            .with_ensures_layout(true)
            .with_reverse(!forward);
        self.source().lines_from(index, options, &mut visit);
    }

    /// The offsets of the characters inside `rect`.
    pub fn character_indexes(&self, rect: Rect) -> IndexSet {
        let mut set = IndexSet::new();
        self.enumerate_line_fragments_in_rect(
            rect,
            true,
            EnumerationOptions::default(),
            |_, range| {
                set.insert_range(range.as_range());
                true
            },
        );
        set
    }

    /// The offsets of the characters visible through a view.
    ///
    /// `visible_rect` is in view coordinates, and `container_origin` is where
    /// the container sits in the view.
    pub fn visible_character_indexes(&self, visible_rect: Rect, container_origin: Vec2) -> IndexSet {
        self.character_indexes(visible_rect - container_origin)
    }

    /// The smallest rect covering `range`, or `None` if no line holds it.
    pub fn bounding_rect(&self, range: CharacterRange) -> Option<Rect> {
        self.source().bounding_rect(range)
    }

    /// [`bounding_rect`](Self::bounding_rect) in view coordinates.
    pub fn bounding_rect_in_view(
        &self,
        range: CharacterRange,
        container_origin: Vec2,
    ) -> Option<Rect> {
        self.bounding_rect(range).map(|rect| rect + container_origin)
    }

    /// The line after the one at `index`, for moving the caret by lines.
    ///
    /// Returns `None` when there is no such line.
    pub fn line_fragment_after(&self, index: usize, forward: bool) -> Option<LineRecord> {
        let mut lines: SmallVec<[LineRecord; 2]> = SmallVec::new();
        self.enumerate_line_fragments_from(index, forward, |rect, range| {
            lines.push(LineRecord { rect, range });
            lines.len() < 2
        });
        lines.get(1).copied()
    }
}
