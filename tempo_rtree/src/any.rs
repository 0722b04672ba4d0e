// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One tree type for every box kind, picked at runtime.
//!
//! Callers that only learn which kind of box they index while running (a
//! query planner, a scripting layer) can hold an [`AnyRTree`] and pass
//! [`AnyBox`] values. Handing it a box of another kind is an error rather
//! than a compile failure.

use alloc::vec::Vec;

use tempo_box::{BigIntSpan, DateSpan, FloatSpan, IntSpan, STBox, TBox, TstzSpan};

use crate::error::RTreeError;
use crate::tree::{
    BigIntSpanRTree, DateSpanRTree, FloatSpanRTree, IntSpanRTree, STBoxRTree, TBoxRTree,
    TstzSpanRTree,
};

/// The box kinds an [`AnyRTree`] can index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoxKind {
    /// [`IntSpan`].
    IntSpan,
    /// [`BigIntSpan`].
    BigIntSpan,
    /// [`FloatSpan`].
    FloatSpan,
    /// [`DateSpan`].
    DateSpan,
    /// [`TstzSpan`].
    TstzSpan,
    /// [`TBox`].
    TBox,
    /// [`STBox`].
    STBox,
}

/// A box of any indexable kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AnyBox {
    /// Integer span.
    IntSpan(IntSpan),
    /// Big integer span.
    BigIntSpan(BigIntSpan),
    /// Float span.
    FloatSpan(FloatSpan),
    /// Date span.
    DateSpan(DateSpan),
    /// Timestamp span.
    TstzSpan(TstzSpan),
    /// Value × time box.
    TBox(TBox),
    /// Space × time box.
    STBox(STBox),
}

impl AnyBox {
    /// Which kind of box this is.
    pub fn kind(&self) -> BoxKind {
        match self {
            Self::IntSpan(_) => BoxKind::IntSpan,
            Self::BigIntSpan(_) => BoxKind::BigIntSpan,
            Self::FloatSpan(_) => BoxKind::FloatSpan,
            Self::DateSpan(_) => BoxKind::DateSpan,
            Self::TstzSpan(_) => BoxKind::TstzSpan,
            Self::TBox(_) => BoxKind::TBox,
            Self::STBox(_) => BoxKind::STBox,
        }
    }
}

macro_rules! impl_from_box {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for AnyBox {
                fn from(b: $variant) -> Self {
                    Self::$variant(b)
                }
            }
        )*
    };
}

impl_from_box!(IntSpan, BigIntSpan, FloatSpan, DateSpan, TstzSpan, TBox, STBox);

/// An [`RTree`](crate::RTree) over whichever box kind was chosen at creation.
#[derive(Debug)]
pub enum AnyRTree {
    /// Tree over integer spans.
    IntSpan(IntSpanRTree),
    /// Tree over big integer spans.
    BigIntSpan(BigIntSpanRTree),
    /// Tree over float spans.
    FloatSpan(FloatSpanRTree),
    /// Tree over date spans.
    DateSpan(DateSpanRTree),
    /// Tree over timestamp spans.
    TstzSpan(TstzSpanRTree),
    /// Tree over value × time boxes.
    TBox(TBoxRTree),
    /// Tree over space × time boxes.
    STBox(STBoxRTree),
}

/// Run `$body` with `$t` bound to the inner tree, whatever its kind.
macro_rules! with_tree {
    ($tree:expr, $t:ident => $body:expr) => {
        match $tree {
            AnyRTree::IntSpan($t) => $body,
            AnyRTree::BigIntSpan($t) => $body,
            AnyRTree::FloatSpan($t) => $body,
            AnyRTree::DateSpan($t) => $body,
            AnyRTree::TstzSpan($t) => $body,
            AnyRTree::TBox($t) => $body,
            AnyRTree::STBox($t) => $body,
        }
    };
}

impl AnyRTree {
    /// An empty tree for boxes of `kind`.
    pub fn create(kind: BoxKind) -> Self {
        match kind {
            BoxKind::IntSpan => Self::IntSpan(IntSpanRTree::new()),
            BoxKind::BigIntSpan => Self::BigIntSpan(BigIntSpanRTree::new()),
            BoxKind::FloatSpan => Self::FloatSpan(FloatSpanRTree::new()),
            BoxKind::DateSpan => Self::DateSpan(DateSpanRTree::new()),
            BoxKind::TstzSpan => Self::TstzSpan(TstzSpanRTree::new()),
            BoxKind::TBox => Self::TBox(TBoxRTree::new()),
            BoxKind::STBox => Self::STBox(STBoxRTree::new()),
        }
    }

    /// The box kind this tree accepts.
    pub fn kind(&self) -> BoxKind {
        match self {
            Self::IntSpan(_) => BoxKind::IntSpan,
            Self::BigIntSpan(_) => BoxKind::BigIntSpan,
            Self::FloatSpan(_) => BoxKind::FloatSpan,
            Self::DateSpan(_) => BoxKind::DateSpan,
            Self::TstzSpan(_) => BoxKind::TstzSpan,
            Self::TBox(_) => BoxKind::TBox,
            Self::STBox(_) => BoxKind::STBox,
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        with_tree!(self, t => t.len())
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        with_tree!(self, t => t.is_empty())
    }

    /// Store `id` under `bbox`. A box of the wrong kind leaves the tree untouched.
    pub fn insert(&mut self, bbox: &AnyBox, id: i64) -> Result<(), RTreeError> {
        match (self, bbox) {
            (Self::IntSpan(t), AnyBox::IntSpan(b)) => t.insert(b, id),
            (Self::BigIntSpan(t), AnyBox::BigIntSpan(b)) => t.insert(b, id),
            (Self::FloatSpan(t), AnyBox::FloatSpan(b)) => t.insert(b, id),
            (Self::DateSpan(t), AnyBox::DateSpan(b)) => t.insert(b, id),
            (Self::TstzSpan(t), AnyBox::TstzSpan(b)) => t.insert(b, id),
            (Self::TBox(t), AnyBox::TBox(b)) => t.insert(b, id),
            (Self::STBox(t), AnyBox::STBox(b)) => t.insert(b, id),
            (tree, b) => return Err(mismatch(tree, b)),
        }
        Ok(())
    }

    /// Ids of every stored box that overlaps `query`.
    pub fn search(&self, query: &AnyBox) -> Result<Vec<i64>, RTreeError> {
        Ok(match (self, query) {
            (Self::IntSpan(t), AnyBox::IntSpan(q)) => t.search(q),
            (Self::BigIntSpan(t), AnyBox::BigIntSpan(q)) => t.search(q),
            (Self::FloatSpan(t), AnyBox::FloatSpan(q)) => t.search(q),
            (Self::DateSpan(t), AnyBox::DateSpan(q)) => t.search(q),
            (Self::TstzSpan(t), AnyBox::TstzSpan(q)) => t.search(q),
            (Self::TBox(t), AnyBox::TBox(q)) => t.search(q),
            (Self::STBox(t), AnyBox::STBox(q)) => t.search(q),
            (tree, q) => return Err(mismatch(tree, q)),
        })
    }
}

fn mismatch(tree: &AnyRTree, b: &AnyBox) -> RTreeError {
    RTreeError::KindMismatch {
        expected: tree.kind(),
        found: b.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use tempo_box::{Date, Timestamp};

    #[test]
    fn create_fixes_the_kind() {
        for kind in [
            BoxKind::IntSpan,
            BoxKind::BigIntSpan,
            BoxKind::FloatSpan,
            BoxKind::DateSpan,
            BoxKind::TstzSpan,
            BoxKind::TBox,
            BoxKind::STBox,
        ] {
            let t = AnyRTree::create(kind);
            assert_eq!(t.kind(), kind);
            assert!(t.is_empty());
        }
    }

    #[test]
    fn matching_kind_round_trips() {
        let mut t = AnyRTree::create(BoxKind::BigIntSpan);
        for i in 0..100_i64 {
            let b = BigIntSpan::closed_open(i * 10, i * 10 + 5).unwrap();
            t.insert(&b.into(), i).unwrap();
        }
        assert_eq!(t.len(), 100);
        let q = AnyBox::from(BigIntSpan::closed(42, 51).unwrap());
        let mut hits = t.search(&q).unwrap();
        hits.sort_unstable();
        assert_eq!(hits, vec![4, 5]);
    }

    #[test]
    fn mismatched_kind_is_rejected_and_ignored() {
        let mut t = AnyRTree::create(BoxKind::TstzSpan);
        let day = TstzSpan::closed(Timestamp::from_seconds(0), Timestamp::from_seconds(86_400)).unwrap();
        t.insert(&day.into(), 1).unwrap();

        let wrong = AnyBox::from(DateSpan::closed(Date::from_days(0), Date::from_days(1)).unwrap());
        assert_eq!(
            t.insert(&wrong, 2),
            Err(RTreeError::KindMismatch {
                expected: BoxKind::TstzSpan,
                found: BoxKind::DateSpan,
            })
        );
        assert_eq!(t.len(), 1);
        assert!(t.search(&wrong).is_err());
        assert_eq!(t.search(&day.into()), Ok(vec![1]));
    }

    #[test]
    fn spatial_boxes_through_the_erased_interface() {
        let mut t = AnyRTree::create(BoxKind::STBox);
        let a = STBox::xy(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = STBox::xy(5.0, 5.0, 6.0, 6.0).unwrap();
        t.insert(&a.into(), 10).unwrap();
        t.insert(&b.into(), 20).unwrap();
        let q = STBox::xy(0.5, 0.5, 2.0, 2.0).unwrap();
        assert_eq!(t.search(&q.into()), Ok(vec![10]));
        let tb = AnyBox::from(TBox::from_span(FloatSpan::closed(0.0, 1.0).unwrap()));
        assert_eq!(tb.kind(), BoxKind::TBox);
        assert!(t.search(&tb).is_err());
    }
}
