// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tempo_box::{FloatSpan, TBox, Timestamp, TstzSpan};
use tempo_rtree::TBoxRTree;

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree};

/// Value × time boxes laid out on an `n × n` grid; time is in microseconds.
fn gen_grid_tboxes(n: usize, cell: f64) -> Vec<TBox> {
    let mut out = Vec::with_capacity(n * n);
    for t in 0..n {
        for v in 0..n {
            let v0 = v as f64 * cell;
            let t0 = (t as f64 * cell) as i64;
            let period = TstzSpan::closed(
                Timestamp::from_micros(t0),
                Timestamp::from_micros(t0 + cell as i64),
            )
            .unwrap();
            out.push(TBox::new(FloatSpan::closed(v0, v0 + cell).unwrap(), period));
        }
    }
    out
}

fn corners(b: &TBox) -> ([f64; 2], [f64; 2]) {
    let (s, p) = (b.span().unwrap(), b.period().unwrap());
    (
        [s.lower(), p.lower().micros() as f64],
        [s.upper(), p.upper().micros() as f64],
    )
}

fn to_rstar_rects(v: &[TBox]) -> Vec<GeomWithData<Rectangle<[f64; 2]>, i64>> {
    v.iter()
        .enumerate()
        .map(|(i, b)| {
            let (lo, hi) = corners(b);
            GeomWithData::new(Rectangle::from_corners(lo, hi), i as i64)
        })
        .collect()
}

fn bench_rtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_tbox");
    for &n in &[64usize, 128] {
        let boxes = gen_grid_tboxes(n, 10.0);
        let query = TBox::new(
            FloatSpan::closed(100.0, 500.0).unwrap(),
            TstzSpan::closed(Timestamp::from_micros(100), Timestamp::from_micros(500)).unwrap(),
        );
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("tempo_build_query_n{}", n), |b| {
            b.iter_batched(
                TBoxRTree::new,
                |mut tree| {
                    for (i, bx) in boxes.iter().enumerate() {
                        tree.insert(bx, i as i64);
                    }
                    black_box(tree.search(&query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_incremental_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&boxes),
                |rects| {
                    let mut tree = RTree::new();
                    for r in rects {
                        tree.insert(r);
                    }
                    let (lo, hi) = corners(&query);
                    let hits = tree
                        .locate_in_envelope_intersecting(&AABB::from_corners(lo, hi))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&boxes),
                |rects| {
                    let tree = RTree::bulk_load(rects);
                    let (lo, hi) = corners(&query);
                    let hits = tree
                        .locate_in_envelope_intersecting(&AABB::from_corners(lo, hi))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare);
criterion_main!(benches);
