// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`AnyRTree`](crate::AnyRTree).

use thiserror::Error;

use crate::any::BoxKind;

/// Failures of the kind-erased tree interface.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RTreeError {
    /// A box of one kind was handed to a tree built for another.
    #[error("tree indexes {expected:?} boxes, got a {found:?} box")]
    KindMismatch {
        /// Kind the tree was created for.
        expected: BoxKind,
        /// Kind of the rejected box.
        found: BoxKind,
    },
}
