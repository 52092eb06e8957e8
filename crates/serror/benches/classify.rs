// Classification and trace benchmarks for serror
// Run with: cargo bench -p serror

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serror::{codes, FailureContext, StatusCode};

/// The sign test behind every `*_if_failed!` macro.
fn bench_is_failed(c: &mut Criterion) {
    let sample: Vec<StatusCode> = (0..1024u32)
        .map(|i| StatusCode::from_bits(i.wrapping_mul(0x0400_0001)))
        .collect();

    c.bench_function("status_is_failed", |b| {
        b.iter(|| sample.iter().filter(|c| black_box(**c).is_failed()).count());
    });

    c.bench_function("status_severity", |b| {
        b.iter(|| {
            for code in &sample {
                black_box(black_box(*code).severity());
            }
        });
    });
}

fn bench_raise(c: &mut Criterion) {
    c.bench_function("context_raise", |b| {
        b.iter(|| {
            let ctx = FailureContext::new("bench.rs", 1, black_box(codes::ERR_PARSE), "bad token");
            black_box(ctx);
        });
    });

    c.bench_function("context_reraise_x8", |b| {
        b.iter(|| {
            let mut ctx = FailureContext::new("bench.rs", 1, codes::ERR_PARSE, "bad token");
            for line in 2..10 {
                ctx.reraise("bench.rs", line, black_box(codes::ERR_EXECUTE), "step");
            }
            black_box(ctx);
        });
    });
}

fn bench_trace(c: &mut Criterion) {
    let mut ctx = FailureContext::new("bench.rs", 1, codes::ERR_PARSE, "bad token");
    for line in 2..10 {
        ctx.reraise("bench.rs", line, codes::ERR_EXECUTE, "step");
    }

    c.bench_function("context_trace_9_entries", |b| {
        b.iter(|| black_box(ctx.trace()));
    });
}

criterion_group!(benches, bench_is_failed, bench_raise, bench_trace);
criterion_main!(benches);
