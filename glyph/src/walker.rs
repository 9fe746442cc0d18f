// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line fragment traversal over an incremental [`LayoutEngine`].
//!
//! The [`Walker`] is the one place that pulls layout fragments out of an
//! engine. Every query in this crate is a filtered walk:
//!
//! - [`Walker::enumerate`] visits every line from a location onward.
//! - [`Walker::enumerate_in_rect`] starts near a rectangle using the engine's
//!   viewport and stops once fragments move past it.
//! - [`Walker::enumerate_in_range`] starts at a character range and stops
//!   once fragments move past its end.
//! - [`Walker::enumerate_from_index`] visits lines on one side of a
//!   character index.
//!
//! Each line is reported in document space: its rect offset by the fragment
//! frame origin, and its range offset by the fragment's start offset.
//! Visitors return `false` to stop, which unwinds every level of the walk.

use log::{debug, trace};
use peniko::kurbo::Rect;

use crate::location::{self, LocationProvider};
use crate::{CharacterRange, EnumerationOptions, LayoutEngine, LayoutFragment, LineFragment};

/// The line type of an engine's layout fragments.
pub type LineOf<E> = <<E as LayoutEngine>::Fragment as LayoutFragment>::Line;

/// A line fragment reached during a walk, in document space.
pub struct LineVisit<'v, E: LayoutEngine> {
    /// The layout fragment holding the line.
    pub fragment: &'v E::Fragment,
    /// The line itself, with local geometry and range.
    pub line: &'v LineOf<E>,
    /// The line's typographic bounds in document coordinates.
    pub rect: Rect,
    /// The line's characters as document offsets.
    pub range: CharacterRange,
}

impl<E: LayoutEngine> core::fmt::Debug for LineVisit<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineVisit")
            .field("rect", &self.rect)
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

/// Walks the line fragments of a [`LayoutEngine`].
pub struct Walker<'a, E> {
    engine: &'a E,
}

impl<E> Clone for Walker<'_, E> {
    fn clone(&self) -> Self {
        Self { engine: self.engine }
    }
}

impl<E> core::fmt::Debug for Walker<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Walker").finish_non_exhaustive()
    }
}

impl<'a, E: LayoutEngine> Walker<'a, E> {
    /// Creates a walker over `engine`.
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    /// Visits every line from the fragment containing `start` onward, in the
    /// direction given by `options.reverse`.
    pub fn enumerate<F>(&self, start: &E::Location, options: EnumerationOptions, mut visit: F)
    where
        F: FnMut(LineVisit<'_, E>) -> bool,
    {
        self.walk_fragments(start, options, |fragment| {
            self.visit_lines(fragment, options.reverse, &mut visit)
        });
    }

    /// Visits the lines of the fragments that may intersect `rect`.
    ///
    /// The walk starts from the viewport when the rectangle lies at or past
    /// its leading edge, and otherwise from the document boundary. It stops
    /// after the first fragment reaching the far edge of `rect`. Lines are
    /// not filtered against `rect`; that is left to the visitor.
    ///
    /// A viewport that no longer matches the layout only costs a second walk
    /// from the document boundary.
    pub fn enumerate_in_rect<F>(&self, rect: Rect, options: EnumerationOptions, mut visit: F)
    where
        F: FnMut(LineVisit<'_, E>) -> bool,
    {
        let (start, seeded) = self.rect_start(rect, options.reverse);
        if self.walk_rect(&start, seeded, rect, options, &mut visit) {
            return;
        }
        debug!("viewport start lies past {rect:?}, walking from the document boundary");
        let document = self.engine.document_range();
        let boundary = if options.reverse {
            document.end()
        } else {
            document.start()
        };
        self.walk_rect(boundary, false, rect, options, &mut visit);
    }

    /// Visits the lines overlapping `range`, with their full ranges.
    ///
    /// An empty `range` visits the line containing its offset. With
    /// `options.reverse` the walk runs from the end of `range` back to its
    /// start.
    pub fn enumerate_in_range<F>(
        &self,
        range: CharacterRange,
        options: EnumerationOptions,
        mut visit: F,
    ) where
        F: FnMut(LineVisit<'_, E>) -> bool,
    {
        let engine = self.engine;
        let bounds = location::document_len(engine).and_then(|len| {
            let target = location::text_range(engine, range)?;
            Ok((len, target))
        });
        let (document_len, target) = match bounds {
            Ok(bounds) => bounds,
            Err(err) => {
                debug!("cannot locate range {:?}: {err}", range.as_range());
                return;
            }
        };
        let reverse = options.reverse;
        let from = if reverse { target.end() } else { target.start() };
        self.walk_fragments(from, options, |fragment| {
            let keep_going = self.visit_lines(fragment, reverse, &mut |line: LineVisit<'_, E>| {
                if !line_touches(line.range, range, document_len) {
                    return true;
                }
                visit(line)
            });
            if !keep_going {
                return false;
            }
            let fragment_range = fragment.range_in_element();
            if reverse {
                fragment_range.start() > target.start()
            } else {
                fragment_range.end() < target.end()
            }
        });
    }

    /// Visits the lines on one side of the caret at `index`.
    ///
    /// Going forward, lines ending at or before `index` are skipped; going in
    /// reverse, lines starting at or after it are. An empty line sitting
    /// exactly at `index` is kept either way.
    pub fn enumerate_from_index<F>(&self, index: usize, options: EnumerationOptions, mut visit: F)
    where
        F: FnMut(LineVisit<'_, E>) -> bool,
    {
        let start = match location::location_at(self.engine, index) {
            Ok(start) => start,
            Err(err) => {
                debug!("cannot locate index {index}: {err}");
                return;
            }
        };
        let reverse = options.reverse;
        self.walk_fragments(&start, options, |fragment| {
            self.visit_lines(fragment, reverse, &mut |line: LineVisit<'_, E>| {
                if !keeps_line(line.range, index, reverse) {
                    return true;
                }
                visit(line)
            })
        });
    }

    fn walk_fragments<F>(&self, start: &E::Location, options: EnumerationOptions, visit: F)
    where
        F: FnMut(&E::Fragment) -> bool,
    {
        if let Some(start) = self.resolve_start(start) {
            self.engine.enumerate_fragments_from(&start, options, visit);
        }
    }

    /// The document end is a boundary rather than a position inside a
    /// fragment, so engines may not find anything there. Fall back to the
    /// fragment holding the last character.
    fn resolve_start(&self, start: &E::Location) -> Option<E::Location> {
        let document = self.engine.document_range();
        if start != document.end() {
            return Some(start.clone());
        }
        if self.engine.fragment_at(start, |_| ()).is_some() {
            return Some(start.clone());
        }
        match self.engine.location(start, -1) {
            Ok(last) => {
                trace!("starting at the fragment before the document end");
                Some(last)
            }
            Err(err) => {
                debug!("document has no fragment before its end: {err}");
                None
            }
        }
    }

    /// Walks the fragments from `start` that may intersect `rect`.
    ///
    /// With `check_start`, the walk is abandoned before visiting anything if
    /// the first fragment already lies past the leading edge of `rect`, and
    /// `false` is returned.
    fn walk_rect<F>(
        &self,
        start: &E::Location,
        check_start: bool,
        rect: Rect,
        options: EnumerationOptions,
        visit: &mut F,
    ) -> bool
    where
        F: FnMut(LineVisit<'_, E>) -> bool,
    {
        let reverse = options.reverse;
        let mut first = check_start;
        let mut misplaced = false;
        self.walk_fragments(start, options, |fragment| {
            let frame = fragment.frame();
            if core::mem::take(&mut first) {
                misplaced = if reverse {
                    frame.max_y() < rect.max_y()
                } else {
                    frame.min_y() > rect.min_y()
                };
                if misplaced {
                    return false;
                }
            }
            let beyond = if reverse {
                frame.max_y() <= rect.min_y()
            } else {
                frame.min_y() >= rect.max_y()
            };
            if beyond {
                return false;
            }
            if !self.visit_lines(fragment, reverse, visit) {
                return false;
            }
            if reverse {
                frame.min_y() > rect.min_y()
            } else {
                frame.max_y() < rect.max_y()
            }
        });
        !misplaced
    }

    /// Where a rect walk starts, and whether that start came from the
    /// viewport.
    fn rect_start(&self, rect: Rect, reverse: bool) -> (E::Location, bool) {
        let document = self.engine.document_range();
        let Some(viewport) = self.engine.viewport() else {
            let boundary = if reverse {
                document.end()
            } else {
                document.start()
            };
            return (boundary.clone(), false);
        };
        let bounds = viewport.bounds;
        let (start, seeded) = if reverse {
            if rect.max_y() <= bounds.min_y() {
                (viewport.range.start(), true)
            } else if rect.max_y() <= bounds.max_y() {
                (viewport.range.end(), true)
            } else {
                (document.end(), false)
            }
        } else if rect.min_y() >= bounds.max_y() {
            (viewport.range.end(), true)
        } else if rect.min_y() >= bounds.min_y() {
            (viewport.range.start(), true)
        } else {
            (document.start(), false)
        };
        trace!("walking rect {rect:?} from {start:?}");
        (start.clone(), seeded)
    }

    /// Reports each line of `fragment` to `visit`. Returns `false` once the
    /// visitor asks to stop or the fragment cannot be placed in the document.
    fn visit_lines<F>(&self, fragment: &E::Fragment, reverse: bool, visit: &mut F) -> bool
    where
        F: FnMut(LineVisit<'_, E>) -> bool,
    {
        let Some(base) = self.fragment_offset(fragment) else {
            return false;
        };
        let origin = fragment.frame().origin().to_vec2();
        let mut each = |line: &LineOf<E>| {
            visit(LineVisit {
                fragment,
                line,
                rect: line.typographic_bounds() + origin,
                range: line.character_range().offset_by(base),
            })
        };
        let lines = fragment.line_fragments();
        if reverse {
            lines.iter().rev().all(&mut each)
        } else {
            lines.iter().all(&mut each)
        }
    }

    fn fragment_offset(&self, fragment: &E::Fragment) -> Option<usize> {
        let document = self.engine.document_range();
        let range = fragment.range_in_element();
        match self.engine.offset(document.start(), range.start()) {
            Ok(offset) => {
                debug_assert!(
                    offset >= 0,
                    "layout fragment starts {offset} characters before the document"
                );
                usize::try_from(offset).ok()
            }
            Err(err) => {
                debug!("cannot place fragment at {:?}: {err}", range.start());
                None
            }
        }
    }
}

/// Whether a line at `line` belongs to a range query for `target`.
///
/// An empty target selects the line containing it, or the last line when it
/// sits at the document end.
pub(crate) fn line_touches(
    line: CharacterRange,
    target: CharacterRange,
    document_len: usize,
) -> bool {
    if !target.is_empty() {
        return line.intersects(target);
    }
    let at = target.start;
    line.contains(at)
        || (line.is_empty() && line.start == at)
        || (at == document_len && line.end() == at)
}

/// Whether a line at `line` lies on the walked side of the caret at `index`.
pub(crate) fn keeps_line(line: CharacterRange, index: usize, reverse: bool) -> bool {
    if line.is_empty() && line.start == index {
        return true;
    }
    if reverse {
        line.start < index
    } else {
        line.end() > index
    }
}
