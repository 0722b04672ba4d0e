// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-dimensional spans with inclusive or exclusive bounds.

use core::cmp::Ordering;
use core::fmt::Debug;

use crate::error::BoxError;
use crate::time::{Date, Timestamp};

/// Base values a [`Span`] can range over.
///
/// Discrete bases (`i32`, `i64`, [`Date`]) are canonicalized to the
/// half-open form `[lower, upper)` on construction.
pub trait SpanBase: Copy + PartialOrd + Debug {
    /// Whether spans over this base are canonicalized to `[lower, upper)`.
    const DISCRETE: bool;

    /// The next representable value. Only called for discrete bases.
    fn successor(self) -> Option<Self>;

    /// The value as a coordinate on an index axis.
    fn to_f64(self) -> f64;

    /// Whether the value is NaN.
    fn is_nan(self) -> bool {
        false
    }
}

impl SpanBase for i32 {
    const DISCRETE: bool = true;

    #[inline]
    fn successor(self) -> Option<Self> {
        self.checked_add(1)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl SpanBase for i64 {
    const DISCRETE: bool = true;

    #[inline]
    fn successor(self) -> Option<Self> {
        self.checked_add(1)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl SpanBase for f64 {
    const DISCRETE: bool = false;

    #[inline]
    fn successor(self) -> Option<Self> {
        Some(self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_nan(self) -> bool {
        Self::is_nan(self)
    }
}

impl SpanBase for Date {
    const DISCRETE: bool = true;

    #[inline]
    fn successor(self) -> Option<Self> {
        self.days().checked_add(1).map(Self::from_days)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self.days())
    }
}

impl SpanBase for Timestamp {
    const DISCRETE: bool = false;

    #[inline]
    fn successor(self) -> Option<Self> {
        Some(self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self.micros() as f64
    }
}

/// A non-empty range of values with per-bound inclusivity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Span<T> {
    lower: T,
    upper: T,
    lower_inc: bool,
    upper_inc: bool,
}

/// Span of 32-bit integers.
pub type IntSpan = Span<i32>;
/// Span of 64-bit integers.
pub type BigIntSpan = Span<i64>;
/// Span of floats.
pub type FloatSpan = Span<f64>;
/// Span of dates.
pub type DateSpan = Span<Date>;
/// Span of timestamps (a period).
pub type TstzSpan = Span<Timestamp>;

#[inline]
pub(crate) fn order<T: PartialOrd>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl<T> Span<T> {
    /// Build a span without validating or canonicalizing it.
    pub(crate) const fn new_unchecked(lower: T, upper: T, lower_inc: bool, upper_inc: bool) -> Self {
        Self {
            lower,
            upper,
            lower_inc,
            upper_inc,
        }
    }
}

impl<T: SpanBase> Span<T> {
    /// Build a span, rejecting inverted, empty, or NaN bounds.
    ///
    /// Discrete spans come back canonicalized to `[lower, upper)`, so
    /// `IntSpan::new(1, 5, false, true)` equals `IntSpan::closed_open(2, 6)`.
    pub fn new(lower: T, upper: T, lower_inc: bool, upper_inc: bool) -> Result<Self, BoxError> {
        if lower.is_nan() || upper.is_nan() {
            return Err(BoxError::NotANumber);
        }
        match order(lower, upper) {
            Ordering::Greater => return Err(BoxError::InvertedBounds),
            Ordering::Equal if !(lower_inc && upper_inc) => return Err(BoxError::EmptySpan),
            _ => {}
        }
        let mut span = Self::new_unchecked(lower, upper, lower_inc, upper_inc);
        if T::DISCRETE {
            span.canonicalize()?;
        }
        Ok(span)
    }

    /// Build `[lower, upper)`.
    pub fn closed_open(lower: T, upper: T) -> Result<Self, BoxError> {
        Self::new(lower, upper, true, false)
    }

    /// Build `[lower, upper]`.
    pub fn closed(lower: T, upper: T) -> Result<Self, BoxError> {
        Self::new(lower, upper, true, true)
    }

    fn canonicalize(&mut self) -> Result<(), BoxError> {
        if !self.lower_inc {
            self.lower = self.lower.successor().ok_or(BoxError::BoundOverflow)?;
            self.lower_inc = true;
        }
        if self.upper_inc {
            self.upper = self.upper.successor().ok_or(BoxError::BoundOverflow)?;
            self.upper_inc = false;
        }
        if order(self.lower, self.upper) != Ordering::Less {
            return Err(BoxError::EmptySpan);
        }
        Ok(())
    }

    /// Lower bound.
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Upper bound.
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Whether the lower bound is part of the span.
    pub fn lower_inc(&self) -> bool {
        self.lower_inc
    }

    /// Whether the upper bound is part of the span.
    pub fn upper_inc(&self) -> bool {
        self.upper_inc
    }

    /// Distance between the bounds as `f64`.
    pub fn width(&self) -> f64 {
        self.upper.to_f64() - self.lower.to_f64()
    }

    /// Whether `other` lies entirely inside this span.
    pub fn contains(&self, other: &Self) -> bool {
        let c1 = order(self.lower, other.lower);
        let c2 = order(self.upper, other.upper);
        (c1 == Ordering::Less || (c1 == Ordering::Equal && (self.lower_inc || !other.lower_inc)))
            && (c2 == Ordering::Greater
                || (c2 == Ordering::Equal && (self.upper_inc || !other.upper_inc)))
    }

    /// Whether the two spans share at least one value.
    pub fn overlaps(&self, other: &Self) -> bool {
        let c1 = order(self.lower, other.upper);
        let c2 = order(other.lower, self.upper);
        (c1 == Ordering::Less || (c1 == Ordering::Equal && self.lower_inc && other.upper_inc))
            && (c2 == Ordering::Less
                || (c2 == Ordering::Equal && other.lower_inc && self.upper_inc))
    }

    /// Grow this span in place to cover `other` as well.
    ///
    /// At equal bound values the inclusive bound wins.
    pub fn expand(&mut self, other: &Self) {
        let c1 = order(self.lower, other.lower);
        let c2 = order(self.upper, other.upper);
        let keep_lower =
            c1 == Ordering::Less || (c1 == Ordering::Equal && (self.lower_inc || !other.lower_inc));
        let keep_upper = c2 == Ordering::Greater
            || (c2 == Ordering::Equal && (self.upper_inc || !other.upper_inc));
        if !keep_lower {
            self.lower = other.lower;
            self.lower_inc = other.lower_inc;
        }
        if !keep_upper {
            self.upper = other.upper;
            self.upper_inc = other.upper_inc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_empty_and_nan() {
        assert_eq!(FloatSpan::closed_open(2.0, 1.0), Err(BoxError::InvertedBounds));
        assert_eq!(FloatSpan::closed_open(1.0, 1.0), Err(BoxError::EmptySpan));
        assert_eq!(FloatSpan::closed(f64::NAN, 1.0), Err(BoxError::NotANumber));
        assert!(FloatSpan::closed(1.0, 1.0).is_ok());
    }

    #[test]
    fn discrete_spans_are_canonical() {
        let s = IntSpan::new(1, 5, false, true).unwrap();
        assert_eq!(s, IntSpan::closed_open(2, 6).unwrap());
        assert!(s.lower_inc() && !s.upper_inc());
        // (3, 4) holds no integer.
        assert_eq!(IntSpan::new(3, 4, false, false), Err(BoxError::EmptySpan));
        assert_eq!(IntSpan::closed(0, i32::MAX), Err(BoxError::BoundOverflow));
        let d = DateSpan::closed(Date::from_days(1), Date::from_days(3)).unwrap();
        assert_eq!(d.upper(), Date::from_days(4));
    }

    #[test]
    fn overlap_respects_inclusivity() {
        let a = FloatSpan::closed_open(0.0, 10.0).unwrap();
        let b = FloatSpan::closed_open(10.0, 20.0).unwrap();
        let c = FloatSpan::closed(5.0, 10.0).unwrap();
        let d = FloatSpan::closed(10.0, 12.0).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&d));
        assert!(d.overlaps(&b));
    }

    #[test]
    fn containment_respects_inclusivity() {
        let open = FloatSpan::new(0.0, 10.0, false, false).unwrap();
        let closed = FloatSpan::closed(0.0, 10.0).unwrap();
        let inner = FloatSpan::closed(2.0, 3.0).unwrap();
        assert!(closed.contains(&open));
        assert!(!open.contains(&closed));
        assert!(open.contains(&inner));
        assert!(closed.contains(&closed));
    }

    #[test]
    fn expand_keeps_the_more_inclusive_bound() {
        let mut s = FloatSpan::new(0.0, 5.0, false, false).unwrap();
        s.expand(&FloatSpan::closed(0.0, 3.0).unwrap());
        assert!(s.lower_inc());
        assert!(!s.upper_inc());
        s.expand(&FloatSpan::closed_open(4.0, 9.0).unwrap());
        assert_eq!(s.upper(), 9.0);
        assert!((s.width() - 9.0).abs() < f64::EPSILON);
        let before = s;
        s.expand(&FloatSpan::closed(1.0, 2.0).unwrap());
        assert_eq!(s, before);
    }
}
