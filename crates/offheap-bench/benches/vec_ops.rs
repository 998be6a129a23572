//! Criterion micro-benchmarks for vector allocation, append, and scans.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use offheap_bench::filled_byte_vec;
use offheap_vec::{ByteVec, DoubleVec};

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_push");

    group.bench_function("1k_bytes_default_capacity", |b| {
        let engine = ByteVec::new();
        b.iter(|| {
            let mut handle = engine.allocate().unwrap();
            for i in 0..1024u32 {
                engine.push(&mut handle, black_box(i as u8)).unwrap();
            }
            engine.free(handle);
        });
    });

    group.bench_function("1k_bytes_presized", |b| {
        let engine = ByteVec::with_initial_capacity(1024);
        b.iter(|| {
            let mut handle = engine.allocate().unwrap();
            for i in 0..1024u32 {
                engine.push(&mut handle, black_box(i as u8)).unwrap();
            }
            engine.free(handle);
        });
    });

    group.bench_function("1k_doubles_default_capacity", |b| {
        let engine = DoubleVec::new();
        b.iter(|| {
            let mut handle = engine.allocate().unwrap();
            for i in 0..1024u32 {
                engine.push(&mut handle, black_box(f64::from(i))).unwrap();
            }
            engine.free(handle);
        });
    });

    group.finish();
}

fn bench_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_scan");
    let engine = ByteVec::new();
    let handle = filled_byte_vec(&engine, 4096);

    group.bench_function("index_of_worst_case", |b| {
        // 255 never appears in the fill pattern, so the scan runs full length.
        b.iter(|| black_box(engine.index_of(&handle, black_box(255))));
    });

    group.bench_function("last_index_of_worst_case", |b| {
        b.iter(|| black_box(engine.last_index_of(&handle, black_box(255))));
    });

    group.bench_function("sequential_get", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..4096 {
                sum += u64::from(engine.get(&handle, i).unwrap());
            }
            black_box(sum)
        });
    });

    group.bench_function("iterate", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for value in engine.iter(&handle) {
                sum += u64::from(value);
            }
            black_box(sum)
        });
    });

    group.finish();
    engine.free(handle);
}

fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_bulk");
    let engine = ByteVec::new();
    let data = vec![0x5au8; 64 * 1024];

    group.bench_function("from_slice_64k", |b| {
        b.iter(|| {
            let handle = engine.from_slice(black_box(&data)).unwrap();
            engine.free(handle);
        });
    });

    group.bench_function("extend_64k", |b| {
        b.iter(|| {
            let mut handle = engine.allocate().unwrap();
            engine.extend(&mut handle, black_box(&data)).unwrap();
            engine.free(handle);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_scans, bench_bulk);
criterion_main!(benches);
