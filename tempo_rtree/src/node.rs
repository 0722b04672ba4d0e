// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes: fixed-capacity entry arrays, guided split, and recursive insert/search.

use alloc::vec::Vec;

use crate::geometry::{BoxGeometry, enlargement, largest_axis};
use crate::results::SearchResults;

/// Maximum number of entries in a node.
pub const MAX_ITEMS: usize = 64;

/// Minimum number of entries in a non-root node (10% of [`MAX_ITEMS`], plus one).
pub const MIN_ITEMS: usize = MAX_ITEMS * 10 / 100 + 1;

/// A node: `boxes[i]` bounds entry `i` of `entries`.
pub(crate) struct Node<B> {
    boxes: Vec<B>,
    entries: Entries<B>,
}

/// Leaf nodes hold caller ids, inner nodes own their children.
pub(crate) enum Entries<B> {
    Leaf(Vec<i64>),
    Inner(Vec<Node<B>>),
}

/// Result of pushing an entry down a subtree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Insertion {
    /// The entry was stored; every box on the path has been grown to cover it.
    Absorbed,
    /// A full node was hit and the entry was not stored; the caller must split.
    Overflow,
}

impl<B: BoxGeometry> Node<B> {
    pub(crate) fn leaf() -> Self {
        Self {
            boxes: Vec::with_capacity(MAX_ITEMS),
            entries: Entries::Leaf(Vec::with_capacity(MAX_ITEMS)),
        }
    }

    pub(crate) fn inner() -> Self {
        Self {
            boxes: Vec::with_capacity(MAX_ITEMS),
            entries: Entries::Inner(Vec::with_capacity(MAX_ITEMS)),
        }
    }

    /// Build an inner node over exactly two subtrees.
    pub(crate) fn with_children(left: Self, right: Self) -> Self {
        let mut node = Self::inner();
        node.push_child(left);
        node.push_child(right);
        node
    }

    fn empty_like(&self) -> Self {
        match self.entries {
            Entries::Leaf(_) => Self::leaf(),
            Entries::Inner(_) => Self::inner(),
        }
    }

    fn push_child(&mut self, child: Self) {
        if let Entries::Inner(children) = &mut self.entries {
            self.boxes.push(child.union_box());
            children.push(child);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.boxes.len()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.entries, Entries::Leaf(_))
    }

    /// Levels from this node down to its leaves, counting both ends.
    pub(crate) fn height(&self) -> usize {
        match &self.entries {
            Entries::Leaf(_) => 1,
            Entries::Inner(children) => 1 + children.first().map_or(0, Self::height),
        }
    }

    /// Union of every entry box. The node must not be empty.
    pub(crate) fn union_box(&self) -> B {
        let mut acc = self.boxes[0];
        for b in &self.boxes[1..] {
            acc.expand(b);
        }
        acc
    }

    /// Exchange entries `i` and `j`.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.boxes.swap(i, j);
        match &mut self.entries {
            Entries::Leaf(ids) => ids.swap(i, j),
            Entries::Inner(children) => children.swap(i, j),
        }
    }

    /// Move entry `i` to the end of `into`; our last entry takes its place.
    pub(crate) fn move_entry(&mut self, i: usize, into: &mut Self) {
        into.boxes.push(self.boxes.swap_remove(i));
        match (&mut self.entries, &mut into.entries) {
            (Entries::Leaf(from), Entries::Leaf(to)) => to.push(from.swap_remove(i)),
            (Entries::Inner(from), Entries::Inner(to)) => to.push(from.swap_remove(i)),
            _ => unreachable!("entries only move between nodes of the same kind"),
        }
    }

    /// Sort entries by one bound along `axis`, ascending unless `descending`.
    pub(crate) fn sort_by_axis(&mut self, axis: usize, upper: bool, descending: bool) {
        self.quicksort(axis, upper, descending, 0, self.len());
    }

    fn quicksort(&mut self, axis: usize, upper: bool, descending: bool, start: usize, end: usize) {
        let n = end - start;
        if n < 2 {
            return;
        }
        let last = end - 1;
        self.swap(start + n / 2, last);
        let pivot = self.boxes[last].axis(axis, upper);
        let mut store = start;
        for i in start..last {
            let v = self.boxes[i].axis(axis, upper);
            let before = if descending { v > pivot } else { v < pivot };
            if before {
                self.swap(i, store);
                store += 1;
            }
        }
        self.swap(store, last);
        self.quicksort(axis, upper, descending, start, store);
        self.quicksort(axis, upper, descending, store + 1, end);
    }

    /// Split a full node in two along the longest axis of `bounds`.
    ///
    /// Entries whose upper bound sits closer to the upper edge of `bounds` than
    /// their lower bound sits to the lower edge move to the returned sibling.
    /// Both halves end up with at least [`MIN_ITEMS`] entries.
    pub(crate) fn split(&mut self, bounds: &B, dims: usize) -> Self {
        let axis = largest_axis(bounds, dims);
        let lo = bounds.axis(axis, false);
        let hi = bounds.axis(axis, true);
        let mut sibling = self.empty_like();
        let mut i = 0;
        while i < self.len() {
            let min_dist = self.boxes[i].axis(axis, false) - lo;
            let max_dist = hi - self.boxes[i].axis(axis, true);
            if max_dist < min_dist {
                // The last entry now sits at `i`; look at it next.
                self.move_entry(i, &mut sibling);
            } else {
                i += 1;
            }
        }

        if self.len() < MIN_ITEMS {
            // Hand back the sibling's lowest entries.
            sibling.sort_by_axis(axis, false, true);
            while self.len() < MIN_ITEMS {
                sibling.move_entry(sibling.len() - 1, self);
            }
        } else if sibling.len() < MIN_ITEMS {
            // Hand over our highest entries.
            self.sort_by_axis(axis, true, false);
            while sibling.len() < MIN_ITEMS {
                self.move_entry(self.len() - 1, &mut sibling);
            }
        }

        if !self.is_leaf() {
            self.sort_by_axis(0, false, false);
            sibling.sort_by_axis(0, false, false);
        }
        sibling
    }

    /// Store `(new_box, id)` in this subtree.
    ///
    /// On [`Insertion::Overflow`] the entry was not stored: a leaf on the
    /// chosen path was full and so was its parent. Splits already made below
    /// stay in place and keep every box exact, and the caller has to split
    /// this node and try again.
    pub(crate) fn insert(&mut self, new_box: &B, id: i64, dims: usize) -> Insertion {
        match &mut self.entries {
            Entries::Leaf(ids) => {
                if ids.len() == MAX_ITEMS {
                    return Insertion::Overflow;
                }
                self.boxes.push(*new_box);
                ids.push(id);
                return Insertion::Absorbed;
            }
            Entries::Inner(children) => {
                let i = choose(&self.boxes, new_box, dims);
                if children[i].insert(new_box, id, dims) == Insertion::Absorbed {
                    self.boxes[i].expand(new_box);
                    return Insertion::Absorbed;
                }
                if children.len() == MAX_ITEMS {
                    return Insertion::Overflow;
                }
                let sibling = children[i].split(&self.boxes[i], dims);
                self.boxes[i] = children[i].union_box();
                self.boxes.push(sibling.union_box());
                children.push(sibling);
                log::trace!("split child {i}; inner node now has {} entries", children.len());
            }
        }
        // There is room for one more child now, so this settles below us.
        self.insert(new_box, id, dims)
    }

    /// Collect ids of every leaf entry whose box overlaps `query`.
    pub(crate) fn search(&self, query: &B, out: &mut SearchResults) {
        match &self.entries {
            Entries::Leaf(ids) => {
                for (b, &id) in self.boxes.iter().zip(ids) {
                    if query.overlaps(b) {
                        out.push(id);
                    }
                }
            }
            Entries::Inner(children) => {
                for (b, child) in self.boxes.iter().zip(children) {
                    if query.overlaps(b) {
                        child.search(query, out);
                    }
                }
            }
        }
    }
}

/// Pick the child to descend into for `new_box`.
///
/// The first child whose box already covers `new_box` wins; otherwise the one
/// whose box grows least.
fn choose<B: BoxGeometry>(boxes: &[B], new_box: &B, dims: usize) -> usize {
    if let Some(i) = boxes.iter().position(|b| b.contains(new_box)) {
        return i;
    }
    let mut best = 0;
    let mut best_growth = f64::INFINITY;
    for (i, b) in boxes.iter().enumerate() {
        let growth = enlargement(b, new_box, dims);
        if growth < best_growth {
            best = i;
            best_growth = growth;
        }
    }
    best
}

#[cfg(test)]
impl<B: BoxGeometry> Node<B> {
    /// Walk the subtree checking occupancy, bounds containment, and leaf depth.
    ///
    /// Returns the ids stored below this node.
    pub(crate) fn check(&self, is_root: bool, depth: usize, leaf_depths: &mut Vec<usize>) -> Vec<i64> {
        assert!(self.len() <= MAX_ITEMS, "node over capacity");
        if !is_root {
            assert!(self.len() >= MIN_ITEMS, "non-root node under {MIN_ITEMS}: {}", self.len());
        }
        match &self.entries {
            Entries::Leaf(ids) => {
                assert_eq!(ids.len(), self.boxes.len());
                leaf_depths.push(depth);
                ids.clone()
            }
            Entries::Inner(children) => {
                assert_eq!(children.len(), self.boxes.len());
                if is_root {
                    assert!(self.len() >= 2, "inner root needs two children");
                }
                let mut all = Vec::new();
                for (b, child) in self.boxes.iter().zip(children) {
                    assert!(b.contains(&child.union_box()), "child escapes its parent box");
                    all.extend(child.check(false, depth + 1, leaf_depths));
                }
                all
            }
        }
    }

    pub(crate) fn axis_values(&self, axis: usize, upper: bool) -> Vec<f64> {
        self.boxes.iter().map(|b| b.axis(axis, upper)).collect()
    }

    pub(crate) fn ids(&self) -> Vec<i64> {
        match &self.entries {
            Entries::Leaf(ids) => ids.clone(),
            Entries::Inner(_) => Vec::new(),
        }
    }
}
