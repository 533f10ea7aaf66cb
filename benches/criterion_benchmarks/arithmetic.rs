use criterion::{black_box, Criterion, criterion_group};

use rebi::Big;

fn hundred_digits() -> Big {
    "9876543210".repeat(10).parse().unwrap()
}

pub fn add_small(c: &mut Criterion) {
    let lhs = "123456789".parse::<Big>().unwrap();
    let rhs = "987654321".parse::<Big>().unwrap();
    c.bench_function("add two single word values", |b| b.iter(|| {
        black_box(&lhs) + black_box(&rhs)
    }));
}

pub fn add_large(c: &mut Criterion) {
    let lhs = hundred_digits();
    let rhs = hundred_digits();
    c.bench_function("add two hundred digit values", |b| b.iter(|| {
        black_box(&lhs) + black_box(&rhs)
    }));
}

pub fn mul_large(c: &mut Criterion) {
    let lhs = hundred_digits();
    let rhs = hundred_digits();
    c.bench_function("multiply two hundred digit values", |b| b.iter(|| {
        black_box(&lhs) * black_box(&rhs)
    }));
}

criterion_group!(arithmetic,
    add_small,
    add_large,
    mul_large,
);
