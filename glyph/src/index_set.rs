// Copyright 2026 the Glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

/// An ordered set of character offsets.
///
/// Stored as sorted, disjoint runs; touching runs are merged on insert, so
/// inserting every line of a region costs one run per contiguous span.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexSet {
    runs: Vec<Range<usize>>,
}

impl IndexSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Inserts every offset in `range`.
    pub fn insert_range(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        // First run that ends at or after the new start; runs before it
        // cannot touch the new range.
        let first = self.runs.partition_point(|run| run.end < range.start);
        // First run that starts strictly after the new end.
        let last = self.runs.partition_point(|run| run.start <= range.end);
        if first == last {
            self.runs.insert(first, range);
            return;
        }
        let start = range.start.min(self.runs[first].start);
        let end = range.end.max(self.runs[last - 1].end);
        self.runs.splice(first..last, [start..end]);
    }

    /// Inserts a single offset.
    pub fn insert(&mut self, index: usize) {
        self.insert_range(index..index + 1);
    }

    /// Returns `true` if `index` is in the set.
    pub fn contains(&self, index: usize) -> bool {
        let ix = self.runs.partition_point(|run| run.end <= index);
        self.runs.get(ix).is_some_and(|run| run.start <= index)
    }

    /// The number of offsets in the set.
    pub fn len(&self) -> usize {
        self.runs.iter().map(ExactSizeIterator::len).sum()
    }

    /// Returns `true` if the set holds no offsets.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The contiguous runs of the set, in ascending order.
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.runs
    }

    /// The offsets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.runs.iter().flat_map(Clone::clone)
    }
}

impl Extend<Range<usize>> for IndexSet {
    fn extend<T: IntoIterator<Item = Range<usize>>>(&mut self, iter: T) {
        for range in iter {
            self.insert_range(range);
        }
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = Self::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}
