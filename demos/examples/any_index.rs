// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing the box kind at runtime.
//!
//! Build value × time trees through the kind-erased interface and see a
//! wrong-kind box get rejected.
//!
//! Run:
//! - `cargo run -p tempo_demos --example any_index`

use tempo_box::{FloatSpan, TBox, Timestamp, TstzSpan};
use tempo_rtree::{AnyBox, AnyRTree, BoxKind, RTreeError};

fn hour(h: i64) -> TstzSpan {
    let start = Timestamp::from_seconds(h * 3600);
    TstzSpan::closed_open(start, Timestamp::from_seconds((h + 1) * 3600)).unwrap()
}

fn main() -> Result<(), RTreeError> {
    let kind = BoxKind::TBox;
    let mut tree = AnyRTree::create(kind);

    // Hourly temperature ranges for one day.
    for h in 0..24 {
        let low = 16.0 - (h as f64 - 12.0).abs() * 0.5;
        let b = TBox::new(FloatSpan::closed(low, low + 3.0).unwrap(), hour(h));
        tree.insert(&AnyBox::from(b), h)?;
    }
    println!("{} hourly boxes in a {:?} tree", tree.len(), tree.kind());

    let warm = AnyBox::from(TBox::from_span(FloatSpan::closed(18.0, 30.0).unwrap()));
    let mut hours = tree.search(&warm)?;
    hours.sort_unstable();
    println!("hours reaching 18 degrees: {hours:?}");

    let wrong = AnyBox::from(FloatSpan::closed(18.0, 30.0).unwrap());
    match tree.search(&wrong) {
        Err(e) => println!("rejected: {e}"),
        Ok(_) => unreachable!("a float span cannot query a TBox tree"),
    }
    Ok(())
}
