use criterion::criterion_main;

mod arithmetic;
mod decimal;

criterion_main!(arithmetic::arithmetic, decimal::decimal);
