// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box geometry abstraction used by [`RTree`](crate::RTree).

use core::fmt::Debug;

use tempo_box::{STBox, Span, SpanBase, TBox};

/// What the tree needs to know about a bounding box type.
///
/// All axis values are reported as `f64`. Implementations must agree on one
/// notion of dimensionality: every axis below [`dims`](Self::dims) is valid
/// for [`axis`](Self::axis), and `expand`/`contains`/`overlaps` look at the
/// same axes.
pub trait BoxGeometry: Copy + Debug {
    /// Number of axes this box spans.
    ///
    /// A tree reads this from the first box it receives and keeps it.
    fn dims(&self) -> usize;

    /// Lower (`upper == false`) or upper bound along `axis`.
    fn axis(&self, axis: usize, upper: bool) -> f64;

    /// Grow `self` in place to the union of `self` and `other`.
    fn expand(&mut self, other: &Self);

    /// Whether `self` fully covers `other`.
    fn contains(&self, other: &Self) -> bool;

    /// Whether `self` and `other` intersect.
    fn overlaps(&self, other: &Self) -> bool;
}

impl<T: SpanBase> BoxGeometry for Span<T> {
    fn dims(&self) -> usize {
        1
    }

    #[inline]
    fn axis(&self, axis: usize, upper: bool) -> f64 {
        debug_assert_eq!(axis, 0, "spans have a single axis");
        if upper {
            self.upper().to_f64()
        } else {
            self.lower().to_f64()
        }
    }

    #[inline]
    fn expand(&mut self, other: &Self) {
        Self::expand(self, other);
    }

    #[inline]
    fn contains(&self, other: &Self) -> bool {
        Self::contains(self, other)
    }

    #[inline]
    fn overlaps(&self, other: &Self) -> bool {
        Self::overlaps(self, other)
    }
}

/// Axis 0 is the value span, axis 1 is time in microseconds.
impl BoxGeometry for TBox {
    fn dims(&self) -> usize {
        2
    }

    #[inline]
    fn axis(&self, axis: usize, upper: bool) -> f64 {
        match axis {
            0 => self.span().map_or(0.0, |s| s.axis(0, upper)),
            _ => self.period().map_or(0.0, |p| p.axis(0, upper)),
        }
    }

    #[inline]
    fn expand(&mut self, other: &Self) {
        Self::expand(self, other);
    }

    #[inline]
    fn contains(&self, other: &Self) -> bool {
        Self::contains(self, other)
    }

    #[inline]
    fn overlaps(&self, other: &Self) -> bool {
        Self::overlaps(self, other)
    }
}

/// Axes are x, y, time (microseconds), and z when the box has one.
impl BoxGeometry for STBox {
    fn dims(&self) -> usize {
        if self.has_z() { 4 } else { 3 }
    }

    #[inline]
    fn axis(&self, axis: usize, upper: bool) -> f64 {
        match (axis, upper) {
            (0, false) => self.xmin(),
            (0, true) => self.xmax(),
            (1, false) => self.ymin(),
            (1, true) => self.ymax(),
            (2, _) => self.period().map_or(0.0, |p| p.axis(0, upper)),
            (_, false) => self.zmin(),
            (_, true) => self.zmax(),
        }
    }

    #[inline]
    fn expand(&mut self, other: &Self) {
        Self::expand(self, other);
    }

    #[inline]
    fn contains(&self, other: &Self) -> bool {
        Self::contains(self, other)
    }

    #[inline]
    fn overlaps(&self, other: &Self) -> bool {
        Self::overlaps(self, other)
    }
}

#[inline]
pub(crate) fn axis_length<B: BoxGeometry>(b: &B, axis: usize) -> f64 {
    b.axis(axis, true) - b.axis(axis, false)
}

/// Length, area, volume, or hyper-volume over the first `dims` axes.
pub(crate) fn area<B: BoxGeometry>(b: &B, dims: usize) -> f64 {
    (0..dims).map(|d| axis_length(b, d)).product()
}

/// Growth in [`area`] if `b` had to cover `add` too.
pub(crate) fn enlargement<B: BoxGeometry>(b: &B, add: &B, dims: usize) -> f64 {
    let mut u = *b;
    u.expand(add);
    area(&u, dims) - area(b, dims)
}

/// The axis along which `b` is longest. Ties keep the lowest axis.
pub(crate) fn largest_axis<B: BoxGeometry>(b: &B, dims: usize) -> usize {
    let mut best = 0;
    let mut best_len = axis_length(b, 0);
    for d in 1..dims {
        let len = axis_length(b, d);
        if best_len < len {
            best = d;
            best_len = len;
        }
    }
    best
}
