// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tempo R-tree: an in-memory index over temporal and spatiotemporal boxes.
//!
//! Build an [`RTree`] once from `(box, id)` pairs, ask it which ids overlap a
//! query box as often as needed, then drop it. There is no update or delete.
//!
//! - The tree is generic over any [`BoxGeometry`]: every [`Span`](tempo_box::Span),
//!   [`TBox`](tempo_box::TBox) (value × time), and [`STBox`](tempo_box::STBox)
//!   (x, y, time, and optionally z).
//! - Nodes hold up to [`MAX_ITEMS`] entries and, except for the root, at
//!   least [`MIN_ITEMS`]. Overflowing nodes are split in one pass along the
//!   longest axis of their box, and every leaf stays at the same depth.
//! - [`AnyRTree`] wraps one tree per box kind for callers that choose the kind
//!   at runtime.
//!
//! # Example
//!
//! ```rust
//! use tempo_box::FloatSpan;
//! use tempo_rtree::FloatSpanRTree;
//!
//! let mut tree = FloatSpanRTree::new();
//! tree.insert(&FloatSpan::closed_open(0.0, 10.0)?, 1);
//! tree.insert(&FloatSpan::closed_open(5.0, 15.0)?, 2);
//! tree.insert(&FloatSpan::closed_open(20.0, 30.0)?, 3);
//!
//! let mut hits = tree.search(&FloatSpan::closed_open(8.0, 9.0)?);
//! hits.sort_unstable();
//! assert_eq!(hits, [1, 2]);
//! assert!(tree.search(&FloatSpan::closed_open(100.0, 200.0)?).is_empty());
//! # Ok::<(), tempo_box::BoxError>(())
//! ```
//!
//! Searches only read the tree, so a finished tree can be shared across
//! threads for querying.

#![no_std]

extern crate alloc;

pub mod any;
pub mod error;
pub mod geometry;
mod node;
pub mod results;
pub mod tree;

pub use any::{AnyBox, AnyRTree, BoxKind};
pub use error::RTreeError;
pub use geometry::BoxGeometry;
pub use node::{MAX_ITEMS, MIN_ITEMS};
pub use results::{SEARCH_INITIAL_CAPACITY, SearchResults};
pub use tree::{
    BigIntSpanRTree, DateSpanRTree, FloatSpanRTree, IntSpanRTree, RTree, STBoxRTree, TBoxRTree,
    TstzSpanRTree,
};
