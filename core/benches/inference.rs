//! Inference benchmarks for the reference models.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fxcnn_core::models::{baseline, gsc};
use fxcnn_core::{conv1d, Number, Tensor};

fn frame() -> Tensor<{ gsc::INPUT_LEN }> {
    let mut input = Tensor::zeros();
    for (i, v) in input.as_mut_slice().iter_mut().enumerate() {
        *v = (((i * 37) % 201) as Number - 100) * 8;
    }
    input
}

fn benchmark_gsc_forward(c: &mut Criterion) {
    let model = gsc::variant_a().unwrap();
    let mut scratch = [0 as Number; gsc::SCRATCH_LEN];
    let mut arena = model.arena(&mut scratch).unwrap();
    let input = frame();
    let mut output = Tensor::zeros();

    c.bench_function("gsc_forward", |b| {
        b.iter(|| {
            arena.forward(black_box(&input), &mut output);
            black_box(output.get(0))
        });
    });
}

fn benchmark_gsc_conv_stage(c: &mut Criterion) {
    let pooled = [100 as Number; gsc::POOL_SAMPLES];
    let mut output = [0 as Number; gsc::FLAT_FEATURES];

    c.bench_function("gsc_conv1d", |b| {
        b.iter(|| {
            conv1d::<{ fxcnn_core::FIXED_POINT }>(
                black_box(&pooled),
                &fxcnn_core::models::weights::CONV_KERNEL_A,
                &fxcnn_core::models::weights::CONV_BIAS_A,
                &mut output,
                &gsc::CONV,
            );
            black_box(output[0])
        });
    });
}

fn benchmark_baseline_forward(c: &mut Criterion) {
    let model = baseline::model().unwrap();
    let mut arena = model.arena(&mut []).unwrap();
    let input = frame();
    let mut output = Tensor::zeros();

    c.bench_function("baseline_forward", |b| {
        b.iter(|| {
            arena.forward(black_box(&input), &mut output);
            black_box(output.get(0))
        });
    });
}

criterion_group!(
    benches,
    benchmark_gsc_forward,
    benchmark_gsc_conv_stage,
    benchmark_baseline_forward
);
criterion_main!(benches);
