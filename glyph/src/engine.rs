// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability interface required from an incremental layout engine.

use peniko::kurbo::Rect;

use crate::{LayoutFragment, LocationProvider, TextRange};

/// Flags controlling how an engine walks its layout fragments.
///
/// ```
/// use glyph::EnumerationOptions;
///
/// let options = EnumerationOptions::new()
///     .with_reverse(true)
///     .with_ensures_layout(true);
/// assert!(options.reverse);
/// assert!(!options.ensures_extra_line_fragment);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumerationOptions {
    /// Walk backward through the document.
    pub reverse: bool,
    /// Lay out fragments that have not been laid out yet, instead of
    /// skipping them.
    pub ensures_layout: bool,
    /// Include the synthetic empty line that follows a final newline.
    pub ensures_extra_line_fragment: bool,
}

impl EnumerationOptions {
    /// Options with every flag cleared.
    pub const fn new() -> Self {
        Self {
            reverse: false,
            ensures_layout: false,
            ensures_extra_line_fragment: false,
        }
    }

    /// Sets [`reverse`](Self::reverse).
    #[must_use]
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Sets [`ensures_layout`](Self::ensures_layout).
    #[must_use]
    pub const fn with_ensures_layout(mut self, ensures_layout: bool) -> Self {
        self.ensures_layout = ensures_layout;
        self
    }

    /// Sets [`ensures_extra_line_fragment`](Self::ensures_extra_line_fragment).
    #[must_use]
    pub const fn with_extra_line_fragment(mut self, ensures_extra_line_fragment: bool) -> Self {
        self.ensures_extra_line_fragment = ensures_extra_line_fragment;
        self
    }
}

/// The window of layout an engine currently has materialized.
///
/// Only used to pick a cheaper place to start walking; results never depend
/// on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport<L> {
    /// The span of the document inside the viewport.
    pub range: TextRange<L>,
    /// The bounds of the viewport in document coordinates.
    pub bounds: Rect,
}

/// An incremental layout engine.
///
/// The engine lays out text lazily and hands out [`LayoutFragment`]s through
/// callbacks. Callbacks must not mutate the document or trigger new layout.
pub trait LayoutEngine: LocationProvider {
    /// The layout fragment type produced by this engine.
    type Fragment: LayoutFragment<Location = Self::Location>;

    /// Walks layout fragments starting with the one containing `location`.
    ///
    /// Walks toward the document end, or toward the start when
    /// `options.reverse` is set. Stops as soon as `visit` returns `false`.
    fn enumerate_fragments_from<F>(
        &self,
        location: &Self::Location,
        options: EnumerationOptions,
        visit: F,
    ) where
        F: FnMut(&Self::Fragment) -> bool;

    /// Calls `f` with the fragment containing `location`, if there is one.
    fn fragment_at<R, F>(&self, location: &Self::Location, f: F) -> Option<R>
    where
        F: FnOnce(&Self::Fragment) -> R;

    /// The currently materialized viewport, if the engine tracks one.
    fn viewport(&self) -> Option<Viewport<Self::Location>> {
        None
    }
}
