// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value × time boxes, the bounding box of temporal numbers.

use crate::span::{FloatSpan, Span, TstzSpan};
use crate::time::Timestamp;

bitflags::bitflags! {
    /// Dimensions present in a [`TBox`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TBoxFlags: u8 {
        /// The value span is present.
        const HAS_X = 0b0000_0001;
        /// The time span is present.
        const HAS_T = 0b0000_0010;
    }
}

/// A box over a value span and a time span. Either dimension may be absent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TBox {
    flags: TBoxFlags,
    span: FloatSpan,
    period: TstzSpan,
}

const NO_SPAN: FloatSpan = Span::new_unchecked(0.0, 0.0, true, true);
const NO_PERIOD: TstzSpan = Span::new_unchecked(Timestamp::EPOCH, Timestamp::EPOCH, true, true);

impl TBox {
    /// Box with both a value span and a period.
    pub const fn new(span: FloatSpan, period: TstzSpan) -> Self {
        Self {
            flags: TBoxFlags::all(),
            span,
            period,
        }
    }

    /// Box with only a value span.
    pub const fn from_span(span: FloatSpan) -> Self {
        Self {
            flags: TBoxFlags::HAS_X,
            span,
            period: NO_PERIOD,
        }
    }

    /// Box with only a period.
    pub const fn from_period(period: TstzSpan) -> Self {
        Self {
            flags: TBoxFlags::HAS_T,
            span: NO_SPAN,
            period,
        }
    }

    /// Dimensions present in the box.
    pub fn flags(&self) -> TBoxFlags {
        self.flags
    }

    /// The value span, if present.
    pub fn span(&self) -> Option<&FloatSpan> {
        self.flags.contains(TBoxFlags::HAS_X).then_some(&self.span)
    }

    /// The period, if present.
    pub fn period(&self) -> Option<&TstzSpan> {
        self.flags.contains(TBoxFlags::HAS_T).then_some(&self.period)
    }

    fn common(&self, other: &Self) -> TBoxFlags {
        self.flags & other.flags
    }

    /// Whether `other` lies inside this box on every dimension both boxes have.
    ///
    /// Boxes with no dimension in common never contain one another.
    pub fn contains(&self, other: &Self) -> bool {
        let common = self.common(other);
        if common.is_empty() {
            return false;
        }
        if common.contains(TBoxFlags::HAS_X) && !self.span.contains(&other.span) {
            return false;
        }
        if common.contains(TBoxFlags::HAS_T) && !self.period.contains(&other.period) {
            return false;
        }
        true
    }

    /// Whether the boxes intersect on every dimension both boxes have.
    pub fn overlaps(&self, other: &Self) -> bool {
        let common = self.common(other);
        if common.is_empty() {
            return false;
        }
        if common.contains(TBoxFlags::HAS_X) && !self.span.overlaps(&other.span) {
            return false;
        }
        if common.contains(TBoxFlags::HAS_T) && !self.period.overlaps(&other.period) {
            return false;
        }
        true
    }

    /// Grow this box to cover `other` on the dimensions this box has.
    pub fn expand(&mut self, other: &Self) {
        if self.flags.contains(TBoxFlags::HAS_X) {
            self.span.expand(&other.span);
        }
        if self.flags.contains(TBoxFlags::HAS_T) {
            self.period.expand(&other.period);
        }
    }
}
