// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation between opaque document locations and flat character offsets.
//!
//! Incremental layout engines address text with their own location type,
//! which can be compared but not subtracted. A [`LocationProvider`] measures
//! the distance between two such locations and moves a location by a number
//! of characters. The free functions in this module build the offset and
//! range conversions on top of those two primitives, always measured from
//! the start of the document.
//!
//! [`FlatLocation`] and [`FlatProvider`] are the trivial realization for
//! documents without an incremental engine: a location is its offset.

use core::fmt::Debug;

use crate::{CharacterRange, Error, TextRange};

/// Position arithmetic over a document's opaque locations.
///
/// Implementations must be consistent: `offset(a, b) == -offset(b, a)`, and
/// `location(a, offset(a, b)) == b` whenever both succeed.
pub trait LocationProvider {
    /// The location type. Only ordering is assumed.
    type Location: Ord + Clone + Debug;

    /// The full extent of the document.
    fn document_range(&self) -> TextRange<Self::Location>;

    /// The signed number of characters from `from` to `to`.
    ///
    /// Fails with [`ErrorKind::UnresolvableOffset`](crate::ErrorKind::UnresolvableOffset)
    /// if the two locations cannot be related.
    fn offset(&self, from: &Self::Location, to: &Self::Location) -> Result<isize, Error>;

    /// The location `offset` characters away from `from`.
    ///
    /// Fails with [`ErrorKind::OutOfBounds`](crate::ErrorKind::OutOfBounds)
    /// if the result would fall outside the document.
    fn location(&self, from: &Self::Location, offset: isize) -> Result<Self::Location, Error>;
}

/// The number of characters between the document start and `location`.
pub fn character_offset<P: LocationProvider + ?Sized>(
    provider: &P,
    location: &P::Location,
) -> Result<usize, Error> {
    let document = provider.document_range();
    let offset = provider.offset(document.start(), location)?;
    usize::try_from(offset).map_err(|_| Error::out_of_bounds(offset, None))
}

/// The location `offset` characters after the document start.
pub fn location_at<P: LocationProvider + ?Sized>(
    provider: &P,
    offset: usize,
) -> Result<P::Location, Error> {
    let document = provider.document_range();
    let offset = isize::try_from(offset).map_err(|_| Error::out_of_bounds(isize::MAX, None))?;
    provider.location(document.start(), offset)
}

/// The length of the document in characters.
pub fn document_len<P: LocationProvider + ?Sized>(provider: &P) -> Result<usize, Error> {
    let document = provider.document_range();
    character_offset(provider, document.end())
}

/// Converts an abstract range into flat offsets.
pub fn character_range<P: LocationProvider + ?Sized>(
    provider: &P,
    range: &TextRange<P::Location>,
) -> Result<CharacterRange, Error> {
    let start = character_offset(provider, range.start())?;
    let end = character_offset(provider, range.end())?;
    Ok(CharacterRange::from_bounds(start, end))
}

/// Converts flat offsets into an abstract range.
///
/// The end is located relative to the start rather than to the document
/// start, so only one translation walks from the document boundary.
pub fn text_range<P: LocationProvider + ?Sized>(
    provider: &P,
    range: CharacterRange,
) -> Result<TextRange<P::Location>, Error> {
    let start = location_at(provider, range.start)?;
    let len = isize::try_from(range.len).map_err(|_| Error::out_of_bounds(isize::MAX, None))?;
    let end = provider.location(&start, len)?;
    TextRange::new(start, end).ok_or_else(Error::unresolvable_offset)
}

/// A location that is simply a character offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlatLocation(pub usize);

impl FlatLocation {
    /// The character offset of this location.
    pub const fn offset(self) -> usize {
        self.0
    }
}

/// A [`LocationProvider`] over [`FlatLocation`]s for a document of fixed
/// length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatProvider {
    len: usize,
}

impl FlatProvider {
    /// Creates a provider for a document of `len` characters.
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// The document length this provider was created with.
    pub const fn len(self) -> usize {
        self.len
    }

    /// Returns `true` if the document has no characters.
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

impl LocationProvider for FlatProvider {
    type Location = FlatLocation;

    fn document_range(&self) -> TextRange<FlatLocation> {
        TextRange::new(FlatLocation(0), FlatLocation(self.len))
            .unwrap_or_else(|| TextRange::empty(FlatLocation(0)))
    }

    fn offset(&self, from: &FlatLocation, to: &FlatLocation) -> Result<isize, Error> {
        let from = isize::try_from(from.0).map_err(|_| Error::unresolvable_offset())?;
        let to = isize::try_from(to.0).map_err(|_| Error::unresolvable_offset())?;
        Ok(to - from)
    }

    fn location(&self, from: &FlatLocation, offset: isize) -> Result<FlatLocation, Error> {
        from.0
            .checked_add_signed(offset)
            .filter(|target| *target <= self.len)
            .map(FlatLocation)
            .ok_or(Error::out_of_bounds(offset, Some(self.len)))
    }
}
