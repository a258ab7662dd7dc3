use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rpncalc::{classify, parse_literal, Calculator};

fn lexer_benchmark(c: &mut Criterion) {
    let tokens = ["3.14159", "-2.5e-3", "sqrt", "pow", "+", "foo", "3.5x"];

    c.bench_function("classify mixed tokens", |b| {
        b.iter(|| {
            for token in tokens {
                black_box(classify(black_box(token)));
            }
        })
    });

    c.bench_function("parse literal", |b| {
        b.iter(|| parse_literal(black_box("-12345.6789e-2")))
    });
}

fn evaluator_benchmark(c: &mut Criterion) {
    let line = "5 1 + 3 1 - * 4 / 2 10 pow 90 sin 16 sqrt * + c";

    c.bench_function("evaluate line", |b| {
        let mut calc = Calculator::new();
        b.iter(|| calc.process_line(black_box(line)))
    });
}

criterion_group!(benches, lexer_benchmark, evaluator_benchmark);
criterion_main!(benches);
