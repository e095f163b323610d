use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::prelude::*;
use workpool::{Pool, Task};

const THREADS: [u32; 2] = [2, 4];
const TASKS_PER_ITER: usize = 100;

fn spin(n: u64) -> u64 {
    let mut acc = 0u64;
    for i in 0..n {
        acc = acc.wrapping_add(i * i);
    }
    acc
}

fn pool_throughput_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_throughput_bench");
    group.sample_size(50);
    for threads in THREADS {
        group.bench_with_input(BenchmarkId::new("workpool", threads), &threads, |b, threads| {
            b.iter_batched(
                || {
                    Pool::start(
                        |arg: &u64| {
                            black_box(spin(*arg));
                        },
                        *threads,
                    )
                    .unwrap()
                },
                |pool| {
                    let mut rng = SmallRng::from_seed([0; 32]);
                    for _ in 0..TASKS_PER_ITER {
                        pool.enqueue(Task::Owned(rng.gen_range(100..200u64)));
                    }
                    pool.wait();
                    pool.end();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("rayon", threads), &threads, |b, threads| {
            b.iter_batched(
                || {
                    rayon::ThreadPoolBuilder::new()
                        .num_threads(*threads as usize)
                        .build()
                        .unwrap()
                },
                |pool| {
                    let mut rng = SmallRng::from_seed([0; 32]);
                    pool.scope(|s| {
                        for _ in 0..TASKS_PER_ITER {
                            let arg = rng.gen_range(100..200u64);
                            s.spawn(move |_| {
                                black_box(spin(arg));
                            });
                        }
                    });
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, pool_throughput_bench);
criterion_main!(benches);
