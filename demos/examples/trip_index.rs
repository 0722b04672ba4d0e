// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Space × time boxes.
//!
//! Index the bounding boxes of vehicle trips and ask which trips passed
//! through a district during the morning.
//!
//! Run:
//! - `cargo run -p tempo_demos --example trip_index`

use kurbo::Rect;
use tempo_box::{STBox, Timestamp, TstzSpan};
use tempo_rtree::{STBoxRTree, SearchResults};

const MINUTE: i64 = 60;

fn at(minutes: i64) -> Timestamp {
    Timestamp::from_seconds(minutes * MINUTE)
}

fn trip(r: Rect, from: i64, to: i64) -> STBox {
    let period = TstzSpan::closed(at(from), at(to)).unwrap();
    STBox::xyt(r.x0, r.y0, r.x1, r.y1, period)
        .unwrap()
        .with_srid(3857)
}

fn main() {
    let mut trips = STBoxRTree::new();
    // A bus line crossing town every 20 minutes.
    for run in 0..72 {
        let start = run * 20;
        let b = trip(Rect::new(0.0, 450.0, 1000.0, 550.0), start, start + 35);
        trips.insert(&b, run);
    }
    // Taxis around the station.
    for i in 0..200 {
        let x = 100.0 + f64::from(i % 20) * 10.0;
        let y = 100.0 + f64::from(i / 20) * 10.0;
        let start = i64::from(i) * 7;
        let b = trip(Rect::new(x, y, x + 40.0, y + 40.0), start, start + 15);
        trips.insert(&b, 1000 + i64::from(i));
    }
    println!("{} trips, height {}, {:?} dimensions", trips.len(), trips.height(), trips.dims());

    let district = Rect::new(120.0, 120.0, 200.0, 200.0);
    let morning = trip(district, 8 * 60, 9 * 60);
    let mut hits = SearchResults::new();
    trips.search_into(&morning, &mut hits);
    let mut ids: Vec<i64> = hits.iter().copied().collect();
    ids.sort_unstable();
    println!("trips through the district between 08:00 and 09:00: {ids:?}");
    assert!(ids.iter().all(|&id| id >= 1000), "the bus never enters the district");

    // The same window without time matches every taxi that ever passed by.
    let anytime = STBox::xy(120.0, 120.0, 200.0, 200.0).unwrap().with_srid(3857);
    hits.clear();
    trips.search_into(&anytime, &mut hits);
    println!("trips through the district at any time: {}", hits.len());
    assert!(hits.len() >= ids.len());

    // Boxes in another spatial reference never match.
    let elsewhere = STBox::xy(120.0, 120.0, 200.0, 200.0).unwrap().with_srid(4326);
    assert!(trips.search(&elsewhere).is_empty());
}
