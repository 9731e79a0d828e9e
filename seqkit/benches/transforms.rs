use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use seqkit::{
    format_sum, inject_sum_after_first_negative, parse_integers_or_zero, shout_filter_exclaim,
    strip_dollars_and_parse, triple_all,
};

const SIZES: [usize; 3] = [16, 256, 4096];

fn random_numbers(len: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
}

fn random_amounts(len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| match rng.gen_range(0..3) {
            0 => format!("${}", rng.gen_range(0..10_000)),
            1 => rng.gen_range(-500.0..500.0_f64).to_string(),
            _ => "n/a".to_string(),
        })
        .collect()
}

fn random_messages(len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let endings = ["!", "?", "."];
    (0..len)
        .map(|i| format!("message {i}{}", endings[rng.gen_range(0..endings.len())]))
        .collect()
}

fn bench_numeric(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric");
    for size in SIZES {
        let numbers = random_numbers(size);
        group.bench_with_input(BenchmarkId::new("triple_all", size), &numbers, |b, n| {
            b.iter(|| triple_all(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("format_sum", size), &numbers, |b, n| {
            b.iter(|| format_sum(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("inject", size), &numbers, |b, n| {
            b.iter(|| inject_sum_after_first_negative(black_box(n)))
        });
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    for size in SIZES {
        let amounts = random_amounts(size);
        let messages = random_messages(size);
        group.bench_with_input(BenchmarkId::new("parse", size), &amounts, |b, a| {
            b.iter(|| parse_integers_or_zero(black_box(a)))
        });
        group.bench_with_input(BenchmarkId::new("strip_dollars", size), &amounts, |b, a| {
            b.iter(|| strip_dollars_and_parse(black_box(a)))
        });
        group.bench_with_input(BenchmarkId::new("shout", size), &messages, |b, m| {
            b.iter(|| shout_filter_exclaim(black_box(m)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_numeric, bench_text);
criterion_main!(benches);
