use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kernelkit::{
    Example, Kernel, Label, LinearKernel, NormalizedKernel, PolynomialKernel, Representation,
    SimpleExample, SparseVector,
};

fn sparse_example(dimensions: usize, stride: usize) -> Example {
    let indices: Vec<usize> = (0..dimensions).map(|i| i * stride + 1).collect();
    let values: Vec<f64> = (0..dimensions).map(|i| (i % 7) as f64 * 0.25 + 0.1).collect();

    let mut example = SimpleExample::new();
    example.add_representation("bow", Representation::Vector(SparseVector::new(indices, values)));
    example.add_label(Label::new("bench"));
    example.into()
}

fn bench_linear_kernel(c: &mut Criterion) {
    let kernel = LinearKernel::new("bow");
    let a = sparse_example(1000, 2);
    let b = sparse_example(1000, 3);

    c.bench_function("linear_kernel_1000_features", |bencher| {
        bencher.iter(|| kernel.compute(black_box(&a), black_box(&b)).unwrap())
    });
}

fn bench_polynomial_kernel(c: &mut Criterion) {
    let kernel = PolynomialKernel::quadratic("bow");
    let a = sparse_example(1000, 2);
    let b = sparse_example(1000, 3);

    c.bench_function("polynomial_kernel_1000_features", |bencher| {
        bencher.iter(|| kernel.compute(black_box(&a), black_box(&b)).unwrap())
    });
}

fn bench_normalized_kernel_cached(c: &mut Criterion) {
    let kernel = NormalizedKernel::new(LinearKernel::new("bow"));
    let a = sparse_example(1000, 2);
    let b = sparse_example(1000, 3);

    // Warm the squared-norm cache so the loop measures the cached path
    kernel.compute(&a, &b).unwrap();

    c.bench_function("normalized_kernel_cached_norms", |bencher| {
        bencher.iter(|| kernel.compute(black_box(&a), black_box(&b)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_linear_kernel,
    bench_polynomial_kernel,
    bench_normalized_kernel_cached
);
criterion_main!(benches);
