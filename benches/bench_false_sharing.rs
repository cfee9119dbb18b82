//! False sharing benchmark with Criterion
//!
//! Same three scenarios as the binary, at a reduced iteration count so
//! Criterion can take enough samples.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use false_sharing::{concurrent_trial, sequential_trial, SameLine, Scenario, SplitLines};

const ITERATIONS: u64 = 1_000_000;

fn benchmark_scenarios(c: &mut Criterion) {
    let mut group = c.benchmark_group("False Sharing (1M iterations)");
    group.throughput(Throughput::Elements(ITERATIONS));
    group.sample_size(20);

    let mut same_line = Box::<SameLine>::default();
    let mut split_lines = Box::<SplitLines>::default();

    group.bench_function("false_sharing", |b| {
        b.iter(|| concurrent_trial(&mut *same_line, ITERATIONS, Scenario::FalseSharing).unwrap())
    });

    group.bench_function("no_false_sharing", |b| {
        b.iter(|| {
            concurrent_trial(&mut *split_lines, ITERATIONS, Scenario::NoFalseSharing).unwrap()
        })
    });

    group.bench_function("sequential", |b| {
        b.iter(|| sequential_trial(&mut *same_line, ITERATIONS))
    });

    group.finish();
}

criterion_group!(benches, benchmark_scenarios);
criterion_main!(benches);
