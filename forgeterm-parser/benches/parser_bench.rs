//! Parser throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use forgeterm_parser::AnsiParser;

fn bench_plain_text(c: &mut Criterion) {
    let input = "The quick brown fox jumps over the lazy dog. ".repeat(100);

    let mut group = c.benchmark_group("parser");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("plain_text", |b| {
        b.iter(|| {
            let mut parser = AnsiParser::new();
            black_box(parser.parse(black_box(&input)))
        })
    });
    group.finish();
}

fn bench_sgr_heavy(c: &mut Criterion) {
    let input = "\x1b[1;32mok\x1b[0m \x1b[31mfail\x1b[39m \x1b[4;96mlink\x1b[0m\n".repeat(100);

    let mut group = c.benchmark_group("parser");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("sgr_heavy", |b| {
        b.iter(|| {
            let mut parser = AnsiParser::new();
            black_box(parser.parse(black_box(&input)))
        })
    });
    group.finish();
}

fn bench_chunked(c: &mut Criterion) {
    let input = "\x1b[35mstatus\x1b[0m line\n".repeat(200);

    c.bench_function("parser/chunked_7_bytes", |b| {
        b.iter(|| {
            let mut parser = AnsiParser::new();
            let mut total = 0;
            for chunk in input.as_bytes().chunks(7) {
                // Input is ASCII, so chunk boundaries are char boundaries
                let chunk = std::str::from_utf8(chunk).unwrap();
                total += parser.parse(chunk).len();
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_plain_text, bench_sgr_heavy, bench_chunked);
criterion_main!(benches);
