use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use firn::{FirnGenerator, UnixClock};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

// Number of IDs generated per benchmark iteration (split across threads for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

/// Benchmarks a single caller driving one generator off the wall clock.
///
/// Bursts past the per-millisecond sequence capacity spin until the next tick,
/// so this measures realistic sustained throughput, not just the packing
/// cost.
fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator/sequential");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = FirnGenerator::new(1, 1, UnixClock);
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id().expect("clock went backwards"));
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks a clone-shared generator contended by multiple threads.
fn bench_generator_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator/contended");

    for thread_count in [2, 4, 8] {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(
            format!("elems/{TOTAL_IDS}/threads/{thread_count}"),
            |b| {
                b.iter_custom(|iters| {
                    let start = Instant::now();

                    for _ in 0..iters {
                        let generator = FirnGenerator::new(1, 1, UnixClock);
                        let barrier = Arc::new(Barrier::new(thread_count + 1));
                        scope(|s| {
                            for _ in 0..thread_count {
                                let generator = generator.clone();
                                let barrier = Arc::clone(&barrier);
                                s.spawn(move || {
                                    barrier.wait();
                                    for _ in 0..ids_per_thread {
                                        black_box(
                                            generator.next_id().expect("clock went backwards"),
                                        );
                                    }
                                });
                            }
                            barrier.wait();
                        });
                    }

                    start.elapsed()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generator, bench_generator_contended);
criterion_main!(benches);
