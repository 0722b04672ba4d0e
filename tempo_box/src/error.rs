// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while constructing boxes.

use thiserror::Error;

/// Reasons a span or box cannot be built from the given bounds.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoxError {
    /// The lower bound is above the upper bound on some axis.
    #[error("lower bound must be less than or equal to upper bound")]
    InvertedBounds,

    /// Equal bounds that are not both inclusive, or a discrete span with no values.
    #[error("span cannot be empty")]
    EmptySpan,

    /// A floating-point coordinate is NaN.
    #[error("coordinate is NaN")]
    NotANumber,

    /// Canonicalizing a discrete bound stepped past the representable range.
    #[error("bound overflows its base type after canonicalization")]
    BoundOverflow,
}
