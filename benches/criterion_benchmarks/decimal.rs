use criterion::{black_box, Criterion, criterion_group};

use rebi::Big;

pub fn parse_small(c: &mut Criterion) {
    c.bench_function("parse a single word value", |b| b.iter(|| {
        black_box("123456789").parse::<Big>()
    }));
}

pub fn parse_large(c: &mut Criterion) {
    let text = "9876543210".repeat(10);
    c.bench_function("parse a hundred digit value", |b| b.iter(|| {
        black_box(text.as_str()).parse::<Big>()
    }));
}

pub fn format_large(c: &mut Criterion) {
    let value = "9876543210".repeat(10).parse::<Big>().unwrap();
    c.bench_function("format a hundred digit value", |b| b.iter(|| {
        black_box(&value).to_string()
    }));
}

criterion_group!(decimal,
    parse_small,
    parse_large,
    format_large,
);
