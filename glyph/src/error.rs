// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error produced when translating between locations and character offsets.
///
/// Carries a non-exhaustive [`ErrorKind`] plus whatever context the provider
/// had at the time: the requested offset and the document length.
///
/// These errors are expected at document boundaries. Queries in this crate
/// never surface them; they end the affected enumeration early instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    offset: Option<isize>,
    len: Option<usize>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offset that was requested, when known.
    pub fn offset(&self) -> Option<isize> {
        self.offset
    }

    /// The length of the document at the time of failure, when known.
    pub fn document_len(&self) -> Option<usize> {
        self.len
    }

    /// Two locations could not be related to each other.
    pub fn unresolvable_offset() -> Self {
        Self {
            kind: ErrorKind::UnresolvableOffset,
            offset: None,
            len: None,
        }
    }

    /// A location `offset` characters away would fall outside a document of
    /// `len` characters.
    pub fn out_of_bounds(offset: isize, len: Option<usize>) -> Self {
        Self {
            kind: ErrorKind::OutOfBounds,
            offset: Some(offset),
            len,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::UnresolvableOffset => write!(f, "locations cannot be related"),
            ErrorKind::OutOfBounds => match (self.offset, self.len) {
                (Some(offset), Some(len)) => {
                    write!(f, "offset {offset} out of bounds for document of len {len}")
                }
                (Some(offset), None) => write!(f, "offset {offset} out of bounds"),
                _ => write!(f, "location out of bounds"),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The provider cannot measure the distance between the two locations,
    /// for example because they belong to different documents.
    UnresolvableOffset,

    /// The resulting location would be before the document start or past its
    /// end.
    OutOfBounds,
}
