//! Criterion benchmarks for rust_logops

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_logops::prelude::*;
use rust_logops::printf::sprintf;
use std::io;
use std::sync::Arc;
use std::thread;

fn sink_logger() -> Logger {
    let logger = Logger::with_writer(io::sink());
    logger.set_flags(Flags::empty());
    logger
}

// ============================================================================
// Level Gating Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger();
    logger.set_level(Level::Error);
    logger.set_context_fn(|| Context::from([("pid", std::process::id().to_string())]));

    group.bench_function("gated_out_debug", |b| {
        b.iter(|| {
            logger.debugf(black_box("skipped %d"), &params![1]);
        });
    });

    group.bench_function("accepted_error", |b| {
        b.iter(|| {
            logger.error(black_box("written"));
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_json_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_formatting");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger();

    group.bench_function("plain_message", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("structured_error", |b| {
        let err = Structured(serde_json::json!({"code": 503, "reason": "upstream"}));
        b.iter(|| {
            logger.error_e(black_box(&err), None, "request failed", &[]);
        });
    });

    group.bench_function("fallback_error", |b| {
        let err = Plain("disk full");
        b.iter(|| {
            logger.error_e(black_box(&err), None, "write failed", &[]);
        });
    });

    group.bench_function("short_file_flag", |b| {
        let annotated = Logger::with_writer(io::sink());
        annotated.set_flags(Flags::SHORT_FILE);
        b.iter(|| {
            annotated.info(black_box("annotated"));
        });
    });

    group.finish();
}

fn bench_context_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("context_merge");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger();
    logger.set_context(
        (0..8)
            .map(|i| (format!("static_{}", i), "value".to_string()))
            .collect(),
    );
    logger.set_context_fn(|| Context::from([("dynamic", "value"), ("static_0", "override")]));
    let local = Context::from([("local", "x"), ("static_1", "override")]);

    group.bench_function("three_tiers", |b| {
        b.iter(|| {
            logger.info_c(black_box(&local), "merged", &[]);
        });
    });

    group.finish();
}

fn bench_printf(c: &mut Criterion) {
    let mut group = c.benchmark_group("printf");
    group.throughput(Throughput::Elements(1));

    let args = params!["disk", 93.27, 42, true];

    group.bench_function("mixed_verbs", |b| {
        b.iter(|| sprintf(black_box("%s at %.1f%% after %d tries (%t)"), black_box(&args)));
    });

    group.bench_function("verbatim", |b| {
        b.iter(|| {
            render_verbatim(black_box("no directives here"));
        });
    });

    group.finish();
}

fn render_verbatim(message: &str) -> String {
    let record = LogRecord::new(Level::Info, message);
    record.render_message().into_owned()
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            let logger = Arc::new(sink_logger());
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for i in 0..100 {
                                logger.infof("message %d", &params![i]);
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_level_filtering,
    bench_json_formatting,
    bench_context_merge,
    bench_printf,
    bench_concurrent_logging
);

criterion_main!(benches);
