// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line fragment queries over incremental text layout.
//!
//! This crate answers geometric questions about laid out text without doing
//! any layout itself: which characters lie inside a rectangle, what rect
//! covers a character range, and which line comes after the caret. It walks
//! the line fragments an external engine produces, translating between the
//! engine's opaque locations and flat character offsets along the way.
//!
//! The pieces, leaves first:
//! - [`LocationProvider`] and the [`location`] helpers convert between
//!   opaque locations and offsets. [`FlatLocation`] and [`FlatProvider`]
//!   cover documents without an incremental engine.
//! - [`LayoutEngine`], [`LayoutFragment`] and [`LineFragment`] describe what
//!   an incremental engine must provide.
//! - [`Walker`] enumerates line fragments from a location, a character range,
//!   a rectangle or a caret index.
//! - [`TextContainer`] is the query surface. It runs on a [`Walker`] or, for
//!   layout systems addressed by glyph ranges, on a [`GlyphLayout`].
//!
//! Nothing is cached. Fragments are borrowed only for the duration of the
//! callback that receives them, and every callback returns `true` to keep
//! going or `false` to stop the whole walk.
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library for geometry math.
//! - `libm`: Use `libm` for geometry math in `no_std` builds.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("glyph requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod container;
mod engine;
mod error;
mod fragment;
mod glyphs;
mod index_set;
mod query;
mod range;
mod unavailable;
mod walker;

pub mod location;

pub use peniko::kurbo;

pub use container::{LineRecord, TextContainer};
pub use engine::{EnumerationOptions, LayoutEngine, Viewport};
pub use error::{Error, ErrorKind};
pub use fragment::{LayoutFragment, LineFragment};
pub use glyphs::{GlyphLayout, GlyphRange};
pub use index_set::IndexSet;
pub use location::{FlatLocation, FlatProvider, LocationProvider};
pub use query::clip_character_span;
pub use range::{CharacterRange, TextRange};
pub use unavailable::Unavailable;
pub use walker::{LineOf, LineVisit, Walker};
