// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tempo_box::{FloatSpan, STBox, TBox, Timestamp, TstzSpan};
use tempo_rtree::{FloatSpanRTree, STBoxRTree, SearchResults, TBoxRTree};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

const HOUR: i64 = 3_600_000_000;

fn period(start: i64, len: i64) -> TstzSpan {
    TstzSpan::closed_open(Timestamp::from_micros(start), Timestamp::from_micros(start + len))
        .unwrap()
}

fn gen_unit_spans(count: usize) -> Vec<FloatSpan> {
    (0..count)
        .map(|i| FloatSpan::closed_open(i as f64, i as f64 + 1.0).unwrap())
        .collect()
}

fn gen_random_spans(count: usize, domain: f64, max_len: f64) -> Vec<FloatSpan> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let lo = rng.next_f64() * domain;
            FloatSpan::closed(lo, lo + rng.next_f64() * max_len).unwrap()
        })
        .collect()
}

/// Readings of a temporal number: value bands over a day of hourly windows.
fn gen_tboxes(count: usize) -> Vec<TBox> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            let v = rng.next_f64() * 100.0;
            let start = (rng.next_f64() * 24.0) as i64 * HOUR;
            TBox::new(FloatSpan::closed(v, v + 2.0).unwrap(), period(start, HOUR))
        })
        .collect()
}

/// Trips clustered around a few depots, each a few minutes long.
fn gen_trips(n_clusters: usize, per_cluster: usize, with_z: bool) -> Vec<STBox> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let (cx, cy) = (rng.next_f64() * 2000.0, rng.next_f64() * 2000.0);
        for _ in 0..per_cluster {
            let x = cx + (rng.next_f64() - 0.5) * 100.0;
            let y = cy + (rng.next_f64() - 0.5) * 100.0;
            let start = (rng.next_f64() * 86_400.0) as i64 * 1_000_000;
            let p = period(start, 300_000_000);
            let b = if with_z {
                let z = rng.next_f64() * 50.0;
                STBox::xyzt(x, y, z, x + 12.0, y + 12.0, z + 3.0, p)
            } else {
                STBox::xyt(x, y, x + 12.0, y + 12.0, p)
            };
            out.push(b.unwrap());
        }
    }
    out
}

fn bench_span_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("float_span_rtree");
    for &n in &[1_000usize, 10_000, 100_000] {
        let spans = gen_unit_spans(n);
        let query = FloatSpan::closed_open(n as f64 * 0.25, n as f64 * 0.25 + 100.0).unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_sequential_n{}", n), |b| {
            b.iter_batched(
                FloatSpanRTree::new,
                |mut tree| {
                    for (i, s) in spans.iter().enumerate() {
                        tree.insert(s, i as i64);
                    }
                    black_box(tree.height());
                },
                BatchSize::SmallInput,
            )
        });

        let mut tree = FloatSpanRTree::new();
        for (i, s) in spans.iter().enumerate() {
            tree.insert(s, i as i64);
        }
        group.bench_function(format!("query_window_n{}", n), |b| {
            b.iter(|| black_box(tree.search(&query).len()))
        });
    }

    let random = gen_random_spans(50_000, 1_000_000.0, 500.0);
    group.bench_function("insert_random_n50000", |b| {
        b.iter_batched(
            FloatSpanRTree::new,
            |mut tree| {
                for (i, s) in random.iter().enumerate() {
                    tree.insert(s, i as i64);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_tbox_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("tbox_rtree");
    let boxes = gen_tboxes(20_000);
    let mut tree = TBoxRTree::new();
    for (i, b) in boxes.iter().enumerate() {
        tree.insert(b, i as i64);
    }
    let value_band = TBox::from_span(FloatSpan::closed(40.0, 45.0).unwrap());
    let morning = TBox::new(FloatSpan::closed(40.0, 45.0).unwrap(), period(6 * HOUR, 3 * HOUR));
    group.throughput(Throughput::Elements(boxes.len() as u64));
    group.bench_function("build_n20000", |b| {
        b.iter_batched(
            TBoxRTree::new,
            |mut t| {
                for (i, b) in boxes.iter().enumerate() {
                    t.insert(b, i as i64);
                }
                black_box(t.height());
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("query_value_only", |b| {
        b.iter(|| black_box(tree.search(&value_band).len()))
    });
    group.bench_function("query_value_and_time", |b| {
        b.iter(|| black_box(tree.search(&morning).len()))
    });
    group.finish();
}

fn bench_stbox_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("stbox_rtree");
    for (label, with_z) in [("xyt", false), ("xyzt", true)] {
        let trips = gen_trips(40, 500, with_z);
        let mut tree = STBoxRTree::new();
        for (i, b) in trips.iter().enumerate() {
            tree.insert(b, i as i64);
        }
        let window = STBox::xyt(500.0, 500.0, 900.0, 900.0, period(0, 6 * HOUR)).unwrap();
        group.throughput(Throughput::Elements(trips.len() as u64));
        group.bench_function(format!("build_{label}"), |b| {
            b.iter_batched(
                STBoxRTree::new,
                |mut t| {
                    for (i, b) in trips.iter().enumerate() {
                        t.insert(b, i as i64);
                    }
                    black_box(t.height());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("query_window_{label}"), |b| {
            b.iter(|| black_box(tree.search(&window).len()))
        });
        group.bench_function(format!("query_window_reused_buffer_{label}"), |b| {
            let mut out = SearchResults::new();
            b.iter(|| {
                out.clear();
                tree.search_into(&window, &mut out);
                black_box(out.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_span_tree, bench_tbox_tree, bench_stbox_tree);
criterion_main!(benches);
