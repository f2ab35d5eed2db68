use bounded_max_heap::{heapsort, BinaryMaxHeap, Record};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(17);
    let priorities: Vec<u32> = (0..1023).map(|_| rng.gen()).collect();

    c.bench_function("insert_extract", |b| {
        b.iter(|| {
            let mut heap = BinaryMaxHeap::default();
            for (i, &p) in priorities.iter().enumerate() {
                heap.insert(p, i).unwrap();
            }
            while let Some(e) = heap.extract_max() {
                black_box(e);
            }
        })
    });

    c.bench_function("heapsort", |b| {
        b.iter(|| {
            let mut data = Vec::with_capacity(priorities.len() + 1);
            data.push(Record::new(0, 0));
            data.extend(priorities.iter().enumerate().map(|(i, &p)| Record::new(p, i)));
            black_box(heapsort(data));
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
