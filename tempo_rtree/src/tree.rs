// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public [`RTree`] handle.

use alloc::vec::Vec;
use core::fmt;

use tempo_box::{BigIntSpan, DateSpan, FloatSpan, IntSpan, STBox, TBox, TstzSpan};

use crate::geometry::BoxGeometry;
use crate::node::{Insertion, Node};
use crate::results::SearchResults;

/// An append-only R-tree mapping bounding boxes to caller ids.
///
/// Build it with repeated [`insert`](Self::insert) calls, then ask which ids
/// overlap a query box with [`search`](Self::search). Ids are opaque to the
/// tree and may repeat; every inserted `(box, id)` pair is reported once per
/// matching query.
pub struct RTree<B: BoxGeometry> {
    root: Option<Root<B>>,
    len: usize,
}

/// Top node plus what the first insert fixed about the tree.
struct Root<B> {
    node: Node<B>,
    /// Union of every inserted box.
    bounds: B,
    dims: usize,
}

/// Tree over integer spans.
pub type IntSpanRTree = RTree<IntSpan>;
/// Tree over big integer spans.
pub type BigIntSpanRTree = RTree<BigIntSpan>;
/// Tree over float spans.
pub type FloatSpanRTree = RTree<FloatSpan>;
/// Tree over date spans.
pub type DateSpanRTree = RTree<DateSpan>;
/// Tree over timestamp spans.
pub type TstzSpanRTree = RTree<TstzSpan>;
/// Tree over value × time boxes.
pub type TBoxRTree = RTree<TBox>;
/// Tree over space × time boxes.
pub type STBoxRTree = RTree<STBox>;

impl<B: BoxGeometry> Default for RTree<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BoxGeometry> fmt::Debug for RTree<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .field("dims", &self.dims())
            .field("bounds", &self.bounds())
            .finish_non_exhaustive()
    }
}

impl<B: BoxGeometry> RTree<B> {
    /// An empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Store `id` under `bbox`.
    ///
    /// Every box in one tree must carry the same dimensions as the first: the
    /// same [`TBoxFlags`](tempo_box::TBoxFlags) for a [`TBox`] tree, and the
    /// same [`STBoxFlags`](tempo_box::STBoxFlags) apart from `GEODETIC` for an
    /// [`STBox`] tree, which also fixes whether z is indexed from its first
    /// box. A union box keeps only the dimensions of the box it started
    /// from, so mixing a time-only box with value × time boxes can hide
    /// entries from value-only queries. This is not checked.
    pub fn insert(&mut self, bbox: &B, id: i64) {
        let Some(root) = self.root.as_mut() else {
            let dims = bbox.dims();
            let mut node = Node::leaf();
            let planted = node.insert(bbox, id, dims);
            debug_assert_eq!(planted, Insertion::Absorbed, "an empty leaf has room");
            self.root = Some(Root {
                node,
                bounds: *bbox,
                dims,
            });
            self.len = 1;
            log::debug!("planted first leaf; indexing {dims} dimensions");
            return;
        };
        while root.node.insert(bbox, id, root.dims) == Insertion::Overflow {
            let sibling = root.node.split(&root.bounds, root.dims);
            let old = core::mem::replace(&mut root.node, Node::inner());
            root.node = Node::with_children(old, sibling);
            log::trace!("root split; height is now {}", root.node.height());
        }
        root.bounds.expand(bbox);
        self.len += 1;
    }

    /// Ids of every stored box that overlaps `query`, in no particular order.
    pub fn search(&self, query: &B) -> Vec<i64> {
        let mut out = SearchResults::new();
        self.search_into(query, &mut out);
        out.into_vec()
    }

    /// Like [`search`](Self::search), appending into a reusable buffer.
    pub fn search_into(&self, query: &B, out: &mut SearchResults) {
        if let Some(root) = &self.root {
            root.node.search(query, out);
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Levels in the tree: 0 when empty, 1 while the root is a leaf.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.node.height())
    }

    /// Axes in use, fixed by the first inserted box.
    pub fn dims(&self) -> Option<usize> {
        self.root.as_ref().map(|r| r.dims)
    }

    /// Union of every inserted box.
    pub fn bounds(&self) -> Option<&B> {
        self.root.as_ref().map(|r| &r.bounds)
    }

    /// Drop every node. The next insert picks the dimensionality afresh.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
