// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Growable accumulator for search hits.

use alloc::vec::Vec;

/// Initial capacity of a [`SearchResults`] buffer.
pub const SEARCH_INITIAL_CAPACITY: usize = 64;

/// Ids collected by [`RTree::search_into`](crate::RTree::search_into).
///
/// Starts with room for [`SEARCH_INITIAL_CAPACITY`] ids and doubles its
/// capacity each time the length reaches a power of two past that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResults {
    ids: Vec<i64>,
}

impl SearchResults {
    /// An empty buffer with the initial capacity.
    pub fn new() -> Self {
        Self {
            ids: Vec::with_capacity(SEARCH_INITIAL_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, id: i64) {
        let n = self.ids.len();
        if n >= SEARCH_INITIAL_CAPACITY && n.is_power_of_two() {
            self.ids.reserve_exact(n);
        }
        self.ids.push(id);
    }

    /// Number of ids collected.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Collected ids, in discovery order.
    pub fn as_slice(&self) -> &[i64] {
        &self.ids
    }

    /// Iterate over the collected ids.
    pub fn iter(&self) -> core::slice::Iter<'_, i64> {
        self.ids.iter()
    }

    /// Forget every id, keeping the allocation for the next search.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Hand the ids over as a plain vector.
    pub fn into_vec(self) -> Vec<i64> {
        self.ids
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a i64;
    type IntoIter = core::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

impl IntoIterator for SearchResults {
    type Item = i64;
    type IntoIter = alloc::vec::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}
