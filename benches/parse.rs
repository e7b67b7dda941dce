//! Benchmarks for header parsing and ranking.
//!
//! Run with: `cargo bench`
//! Compare with baseline: `cargo bench -- --save-baseline main`
//! Compare against baseline: `cargo bench -- --baseline main`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use accept_codings::{Codings, CodingsParser};

/// Typical browser `Accept` value.
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

/// `Accept` value from RFC 7231 §5.3.2.
const RFC_ACCEPT: &str = "text/*;q=0.3, text/html;q=0.7, text/html;level=1, text/html;level=2;q=0.4, */*;q=0.5";

const ACCEPT_LANGUAGE: &str = "da, en-gb;q=0.8, en;q=0.7, de;q=0.5, fr-ch, fr;q=0.9, *;q=0.1";

/// Benchmark parsing alone.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, value) in [
        ("browser_accept", BROWSER_ACCEPT),
        ("rfc_accept", RFC_ACCEPT),
        ("accept_language", ACCEPT_LANGUAGE),
    ] {
        group.throughput(Throughput::Bytes(value.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| CodingsParser::parse(black_box(value)));
        });
    }

    group.finish();
}

/// Benchmark the full negotiation path: parse, sort, filter.
fn bench_negotiate(c: &mut Criterion) {
    let mut group = c.benchmark_group("negotiate");

    group.bench_function("sorted_like", |b| {
        b.iter(|| {
            let mut codings = Codings::parse(black_box(RFC_ACCEPT)).expect("valid header");
            let like = codings.sorted().like("text/");
            black_box(like)
        });
    });

    let parsed = Codings::parse(ACCEPT_LANGUAGE).expect("valid header");
    group.bench_function("ranked", |b| {
        b.iter(|| black_box(parsed.ranked()));
    });

    group.bench_function("to_string", |b| {
        b.iter(|| black_box(parsed.to_string()));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_negotiate);
criterion_main!(benches);
