//! Basic benchmarks for the `fixed_pool` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use criterion::{Criterion, criterion_group, criterion_main};
use fixed_pool::FixedPool;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;

const CAPACITY: usize = 128;

type TestPool = FixedPool<TestItem, CAPACITY>;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_basic");

    group.bench_function("build_empty", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(TestPool::new()));
            }

            start.elapsed()
        });
    });

    group.bench_function("construct_first", |b| {
        b.iter_custom(|iters| {
            let mut pools = iter::repeat_with(TestPool::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let start = Instant::now();

            for pool in &mut pools {
                _ = black_box(pool.construct(black_box(TEST_VALUE)));
            }

            start.elapsed()
        });
    });

    group.bench_function("construct_destroy", |b| {
        b.iter_custom(|iters| {
            let mut pool = TestPool::new();

            let start = Instant::now();

            for _ in 0..iters {
                let handle = pool.construct(black_box(TEST_VALUE)).unwrap();
                pool.destroy(black_box(handle));
            }

            start.elapsed()
        });
    });

    group.bench_function("construct_destroy_ptr", |b| {
        b.iter_custom(|iters| {
            let mut pool = TestPool::new();

            let start = Instant::now();

            for _ in 0..iters {
                let handle = pool.construct(black_box(TEST_VALUE)).unwrap();
                pool.destroy_ptr(black_box(handle.as_ptr().as_ptr()));
            }

            start.elapsed()
        });
    });

    // Baseline for construct_destroy: one heap allocation per object.
    group.bench_function("box_new_drop", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(Box::new(black_box(TEST_VALUE))));
            }

            start.elapsed()
        });
    });

    group.bench_function("read_one", |b| {
        b.iter_custom(|iters| {
            let mut pool = TestPool::new();
            let handle = pool.construct(TEST_VALUE).unwrap();

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(pool.get(handle));
            }

            start.elapsed()
        });
    });

    group.bench_function("construct_when_full", |b| {
        b.iter_custom(|iters| {
            let mut pool = TestPool::new();

            while !pool.is_full() {
                _ = pool.construct(TEST_VALUE);
            }

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(pool.construct(black_box(TEST_VALUE)));
            }

            start.elapsed()
        });
    });

    group.finish();

    let mut group = c.benchmark_group("fixed_slow");

    group.bench_function("fill_and_clear", |b| {
        b.iter_custom(|iters| {
            let mut pool = TestPool::new();

            let start = Instant::now();

            for _ in 0..iters {
                while !pool.is_full() {
                    _ = black_box(pool.construct(black_box(TEST_VALUE)));
                }

                pool.clear();
            }

            start.elapsed()
        });
    });

    group.finish();
}
