//! Benchmarks for the monotonic scans.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use linea_monotonic::{
    daily_temperatures, largest_rectangle_area, next_greater_element, sliding_window_maximum,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [256, 4096, 65_536];

fn input(n: usize) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(7);
    (0..n).map(|_| rng.gen_range(-1_000..1_000)).collect()
}

fn bench_stack_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_scans");

    for &n in &SIZES {
        let nums = input(n);
        let heights: Vec<u64> = nums.iter().map(|v| v.unsigned_abs()).collect();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("next_greater", n), &nums, |b, nums| {
            b.iter(|| black_box(next_greater_element(black_box(nums))));
        });

        group.bench_with_input(BenchmarkId::new("daily_temperatures", n), &nums, |b, nums| {
            b.iter(|| black_box(daily_temperatures(black_box(nums))));
        });

        group.bench_with_input(BenchmarkId::new("largest_rectangle", n), &heights, |b, h| {
            b.iter(|| black_box(largest_rectangle_area(black_box(h))));
        });
    }

    group.finish();
}

fn bench_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("sliding_window_maximum");
    let nums = input(65_536);

    for k in [4usize, 64, 1024] {
        group.throughput(Throughput::Elements(nums.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| black_box(sliding_window_maximum(black_box(&nums), k).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stack_scans, bench_windows);
criterion_main!(benches);
