// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span index basics.
//!
//! Index a thousand unit intervals, watch the tree grow, and run a few
//! overlap queries.
//!
//! Run:
//! - `cargo run -p tempo_demos --example span_index`

use tempo_box::{FloatSpan, IntSpan};
use tempo_rtree::{FloatSpanRTree, IntSpanRTree, MAX_ITEMS};

fn main() {
    let mut tree = FloatSpanRTree::new();
    for i in 0..1000 {
        let lo = f64::from(i);
        tree.insert(&FloatSpan::closed_open(lo, lo + 1.0).unwrap(), i64::from(i));
        if i as usize == MAX_ITEMS {
            println!("after {} entries the root split: height {}", i + 1, tree.height());
        }
    }
    println!("{tree:?}");

    let everything = tree.search(&FloatSpan::closed_open(0.0, 1000.0).unwrap());
    assert_eq!(everything.len(), 1000);

    // Only [500, 501) covers 500.5.
    let hits = tree.search(&FloatSpan::closed_open(500.5, 500.6).unwrap());
    println!("[500.5, 500.6) overlaps ids {hits:?}");
    assert_eq!(hits, [500]);

    // Discrete spans are canonical: [1, 3] is stored as [1, 4).
    let mut ints = IntSpanRTree::new();
    ints.insert(&IntSpan::closed(1, 3).unwrap(), 7);
    let touching = ints.search(&IntSpan::closed(4, 9).unwrap());
    println!("[4, 9] overlaps ids {touching:?}");
    assert!(touching.is_empty());
}
