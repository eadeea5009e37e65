use criterion::{criterion_group, criterion_main, Criterion};
use snowgen::{IdCodec, Snowgen};
use std::hint::black_box;

pub fn generation_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generation");
    let generator = Snowgen::new(1).unwrap();

    group.bench_function("generate", |b| {
        b.iter(|| black_box(generator.generate().unwrap()));
    });

    group.bench_function("generate_string", |b| {
        b.iter(|| black_box(generator.generate_string().unwrap()));
    });

    group.finish();
}

pub fn codec_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codec");
    let generator = Snowgen::new(1).unwrap();
    let id = generator.generate().unwrap();
    let codec = IdCodec::new(generator.config().epoch());

    group.bench_function("unpack", |b| {
        b.iter(|| black_box(codec.unpack(black_box(id))));
    });

    group.finish();
}

pub fn concurrent_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            b.iter(|| {
                let generator = std::sync::Arc::new(Snowgen::new(1).unwrap());
                let mut handles = Vec::with_capacity(thread_count);

                for _ in 0..thread_count {
                    let generator = std::sync::Arc::clone(&generator);
                    handles.push(std::thread::spawn(move || {
                        for _ in 0..100 {
                            black_box(generator.generate().unwrap());
                        }
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    generation_benchmarks,
    codec_benchmarks,
    concurrent_benchmarks
);
criterion_main!(benches);
