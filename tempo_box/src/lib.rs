// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tempo Box: bounding boxes for temporal and spatiotemporal values.
//!
//! These are the boxes that summarize moving objects for indexing:
//!
//! - [`Span`]: a one-dimensional range with inclusive/exclusive bounds over
//!   integers, big integers, floats, [`Date`]s, or [`Timestamp`]s.
//!   Discrete spans are canonicalized to `[lower, upper)`.
//! - [`TBox`]: a value span × a time span, the box of temporal numbers.
//! - [`STBox`]: an x/y (optionally z) extent × a time span, the box of
//!   temporal points. The planar extent is a [`kurbo::Rect`].
//!
//! Every box offers the same three predicates the index needs: `contains`,
//! `overlaps`, and an in-place `expand` (union).
//!
//! # Example
//!
//! ```rust
//! use tempo_box::{FloatSpan, TBox, Timestamp, TstzSpan};
//!
//! let period = TstzSpan::closed_open(Timestamp::from_seconds(0), Timestamp::from_seconds(60))?;
//! let mut a = TBox::new(FloatSpan::closed(1.0, 2.0)?, period);
//! let b = TBox::from_span(FloatSpan::closed(1.5, 8.0)?);
//! assert!(a.overlaps(&b));
//!
//! a.expand(&b);
//! assert_eq!(a.span().map(|s| s.upper()), Some(8.0));
//! # Ok::<(), tempo_box::BoxError>(())
//! ```
//!
//! Construction rejects inverted or empty bounds and NaN coordinates with a
//! [`BoxError`].

#![no_std]

pub mod error;
pub mod span;
pub mod stbox;
pub mod tbox;
pub mod time;

pub use error::BoxError;
pub use span::{BigIntSpan, DateSpan, FloatSpan, IntSpan, Span, SpanBase, TstzSpan};
pub use stbox::{STBox, STBoxFlags};
pub use tbox::{TBox, TBoxFlags};
pub use time::{Date, Timestamp};
