//! Criterion benchmarks for service_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use service_logger::prelude::*;
use std::sync::Arc;

fn discard_logger(level: Level, pretty: bool) -> Logger {
    Logger::builder()
        .level(level)
        .pretty(pretty)
        .no_color(true)
        .service_name("bench")
        .output(Sink::from_writer(std::io::sink()))
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder", |b| {
        b.iter(|| black_box(discard_logger(Level::Info, false)));
    });

    let parent = discard_logger(Level::Info, false).with_field("app", "bench");
    group.bench_function("with_fields", |b| {
        b.iter(|| black_box(parent.with_fields([("request_id", "r-1"), ("user", "u-9")])));
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(Level::Warn, false);

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger
                .at_debug()
                .string("op", "charge")
                .integer("cents", 1250)
                .message(black_box("filtered"));
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger
                .at_error()
                .string("op", "charge")
                .integer("cents", 1250)
                .message(black_box("written"));
        });
    });

    group.finish();
}

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));

    let json = discard_logger(Level::Info, false).with_fields([("app", "bench"), ("env", "ci")]);
    let pretty = discard_logger(Level::Info, true).with_fields([("app", "bench"), ("env", "ci")]);

    group.bench_function("json", |b| {
        b.iter(|| {
            json.at_info()
                .string("op", "charge")
                .float("amount", 12.5)
                .boolean("retry", false)
                .message(black_box("done"));
        });
    });

    group.bench_function("pretty", |b| {
        b.iter(|| {
            pretty
                .at_info()
                .string("op", "charge")
                .float("amount", 12.5)
                .boolean("retry", false)
                .message(black_box("done"));
        });
    });

    group.bench_function("json_generic_field", |b| {
        let items = vec![1u32, 2, 3, 4];
        b.iter(|| {
            json.at_info().generic("items", &items).message(black_box("done"));
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");
    group.throughput(Throughput::Elements(400));

    let logger = Arc::new(discard_logger(Level::Info, false));

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            logger.at_info().integer("i", i).message("tick");
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_level_filtering,
    bench_encoding,
    bench_concurrent_logging
);
criterion_main!(benches);
