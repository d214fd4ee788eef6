// benches/strategies.rs
use std::{hint::black_box, io::Cursor};

use countline_core::{CounterConfig, Strategy};
use countline_gen::write_lines;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: [(&str, u64); 3] = [("1KiB", 1024), ("1MiB", 1024 * 1024), ("16MiB", 16 * 1024 * 1024)];

fn benchmark_strategies(c: &mut Criterion) {
    let config = CounterConfig::default();
    let mut group = c.benchmark_group("count_lines");

    for (label, size) in SIZES {
        let mut data = Vec::new();
        write_lines(&mut data, size).unwrap();
        group.throughput(Throughput::Bytes(data.len() as u64));

        for strategy in Strategy::ALL {
            let counter = strategy.counter(&config).unwrap();
            group.bench_with_input(BenchmarkId::new(strategy.as_str(), label), &data, |b, data| {
                b.iter(|| {
                    let mut reader = Cursor::new(data.as_slice());
                    black_box(counter.count(Some(&mut reader)).unwrap())
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_strategies);
criterion_main!(benches);
