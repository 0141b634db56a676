//! Active part set benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use partset_bench::{leaf_names, shuffled, tiered_history};
use partset_core::{ActivePartSet, FormatVersion, PartInfo};
use rand::Rng;

/// Benchmark seeding from a shuffled merge history.
fn bench_seed(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed");

    for count in [256i64, 4096, 65536].iter() {
        let names = shuffled(tiered_history("all", *count, 4));
        group.throughput(Throughput::Elements(names.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &names, |b, names| {
            b.iter(|| {
                let set =
                    ActivePartSet::new(FormatVersion::CUSTOM_PARTITIONING, names.iter().cloned())
                        .unwrap();
                black_box(set.size());
            });
        });
    }
    group.finish();
}

/// Benchmark adding a disjoint part to a populated set.
fn bench_add_disjoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_disjoint");

    for count in [1000i64, 10000, 100000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let set = ActivePartSet::new(FormatVersion::CUSTOM_PARTITIONING, leaf_names("all", count))
                .unwrap();
            let mut block = count;

            b.iter(|| {
                block += 1;
                set.add(format!("all_{block}_{block}_0")).unwrap();
            });
        });
    }
    group.finish();
}

/// Benchmark a merge superseding a run of parts.
fn bench_add_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_merge");

    for width in [2i64, 16, 128].iter() {
        group.throughput(Throughput::Elements(*width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, &width| {
            let leaves = leaf_names("all", 10000);

            b.iter_batched(
                || ActivePartSet::new(FormatVersion::CUSTOM_PARTITIONING, leaves.iter().cloned()).unwrap(),
                |set| {
                    let merged = format!("all_5000_{}_1", 5000 + width - 1);
                    set.add(black_box(merged)).unwrap();
                    set
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

/// Benchmark containing-part lookups.
fn bench_containing(c: &mut Criterion) {
    let mut group = c.benchmark_group("containing");

    for count in [1000i64, 10000, 100000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let set = ActivePartSet::new(
                FormatVersion::CUSTOM_PARTITIONING,
                tiered_history("all", count, 10),
            )
            .unwrap();
            let mut rng = rand::thread_rng();

            b.iter(|| {
                let block = rng.gen_range(1..=count);
                let info = PartInfo::new("all", block, block, 0);
                black_box(set.get_containing_part_info(&info));
            });
        });
    }
    group.finish();
}

/// Benchmark covered-by range queries.
fn bench_covered_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("covered_by");

    for width in [1i64, 64, 1024].iter() {
        group.throughput(Throughput::Elements(*width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, &width| {
            let set =
                ActivePartSet::new(FormatVersion::CUSTOM_PARTITIONING, leaf_names("all", 10000))
                    .unwrap();
            let query = PartInfo::new("all", 4000, 4000 + width - 1, 9);

            b.iter(|| {
                black_box(set.get_parts_covered_by(black_box(&query)));
            });
        });
    }
    group.finish();
}

/// Benchmark full listings.
fn bench_get_parts(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_parts");

    for count in [100i64, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let set =
                ActivePartSet::new(FormatVersion::CUSTOM_PARTITIONING, leaf_names("all", count))
                    .unwrap();

            b.iter(|| {
                black_box(set.get_parts());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_seed,
    bench_add_disjoint,
    bench_add_merge,
    bench_containing,
    bench_covered_by,
    bench_get_parts,
);

criterion_main!(benches);
