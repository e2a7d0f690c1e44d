use criterion::{black_box, Criterion, criterion_group, criterion_main};
use tmatrix::{DynamicMatrix, DynamicVector};

fn bench_products(c: &mut Criterion) {
    let n = 100;
    let a = DynamicMatrix::from_fn(n, |i, j| ((i * n + j) as f64).sin()).unwrap();
    let b = DynamicMatrix::from_fn(n, |i, j| ((i * n + j) as f64).cos()).unwrap();
    let x = DynamicVector::from_fn(n, |i| (i as f64).cos()).unwrap();

    c.bench_function("matrix x matrix", |ben| {
        ben.iter(|| black_box(&a).try_mul(black_box(&b)).unwrap())
    });

    c.bench_function("matrix x vector", |ben| {
        ben.iter(|| black_box(&a).mul_vector(black_box(&x)).unwrap())
    });
}

criterion_group!(benches, bench_products);
criterion_main!(benches);
