use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kernel_bench::benchmarks::suites::create_signal;
use kernel_bench::kernels::dft::{transform_into, DftVariant};
use kernel_bench::kernels::dgemm::{multiply_accumulate, multiply_accumulate_bulk};
use kernel_bench::kernels::gauss_seidel::relax;
use kernel_bench::kernels::stream::{StreamBuffers, StreamOp};
use kernel_bench::{DynamicBuffer, NumericBuffer, PackedBuffer, ScalarField, VectorizedBuffer};

fn bench_dgemm_for<B: NumericBuffer>(c: &mut Criterion, label: &str) {
    let mut group = c.benchmark_group(format!("dgemm/{}", label));
    for &n in &[16usize, 32, 64] {
        let a = B::filled(n * n, 1.0).unwrap();
        let b = B::filled(n * n, 5.0).unwrap();
        let mut c_mat = B::zeros(n * n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                multiply_accumulate(&a, &b, &mut c_mat, n).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_dgemm(c: &mut Criterion) {
    bench_dgemm_for::<DynamicBuffer>(c, "dynamic");
    bench_dgemm_for::<PackedBuffer>(c, "packed");
    bench_dgemm_for::<VectorizedBuffer>(c, "vectorized");

    let mut group = c.benchmark_group("dgemm/vectorized_bulk");
    for &n in &[16usize, 32, 64] {
        let a = VectorizedBuffer::filled(n * n, 1.0).unwrap();
        let b = VectorizedBuffer::filled(n * n, 5.0).unwrap();
        let mut c_mat = VectorizedBuffer::zeros(n * n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                multiply_accumulate_bulk(&a, &b, &mut c_mat, n).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_dft(c: &mut Criterion) {
    for variant in [DftVariant::Naive, DftVariant::Twiddle] {
        let mut group = c.benchmark_group(format!("dft/{}", variant));
        for &n in &[64usize, 256] {
            let (real, imag) = create_signal(n, 42);
            let real_in = PackedBuffer::from_values(&real).unwrap();
            let imag_in = PackedBuffer::from_values(&imag).unwrap();
            let mut real_out = PackedBuffer::zeros(n).unwrap();
            let mut imag_out = PackedBuffer::zeros(n).unwrap();
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
                bench.iter(|| {
                    transform_into(&real_in, &imag_in, &mut real_out, &mut imag_out, variant)
                        .unwrap();
                });
            });
        }
        group.finish();
    }
}

fn bench_gauss_seidel(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_seidel/packed");
    for &n in &[32usize, 128] {
        let field = ScalarField::<PackedBuffer>::filled(n, n, 1.0).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(relax(&field).unwrap()));
        });
    }
    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    for op in StreamOp::ALL {
        let mut group = c.benchmark_group(format!("stream/{}", op));
        for &len in &[1024usize, 16384] {
            let mut packed = StreamBuffers::<PackedBuffer>::standard(len).unwrap();
            group.bench_with_input(BenchmarkId::new("packed", len), &len, |bench, _| {
                bench.iter(|| packed.apply(op, 2.0).unwrap());
            });
            let mut bulk = StreamBuffers::<VectorizedBuffer>::standard(len).unwrap();
            group.bench_with_input(BenchmarkId::new("vectorized_bulk", len), &len, |bench, _| {
                bench.iter(|| bulk.apply_bulk(op, 2.0).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(
    benches,
    bench_dgemm,
    bench_dft,
    bench_gauss_seidel,
    bench_stream
);
criterion_main!(benches);
