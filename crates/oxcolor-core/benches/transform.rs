//! Transform Benchmarks
//!
//! Chain evaluation, LUT population and batch pixel application.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxcolor_core::apply_rgb8;
use oxcolor_core::color::white_point::{D50, D65};
use oxcolor_core::color::{Rgb, Triple};
use oxcolor_core::lut::{Lut3d, LutOptions, PopulateMode};
use oxcolor_core::math::{AdaptationBasis, ChromaticAdapter};
use oxcolor_core::pipeline::{Chain, Filter, grayscale, invert};
use oxcolor_core::space::{ROMM, SRGB};

/// sRGB → ProPhoto through D65 → D50 adaptation
fn srgb_to_romm() -> Chain {
    Chain::new([
        SRGB.decoder().unwrap(),
        ChromaticAdapter::between(&D65, &D50, AdaptationBasis::Bradford)
            .unwrap()
            .filter(),
        ROMM.encoder().unwrap(),
    ])
}

fn generate_rgb8_data(count: usize) -> Vec<u8> {
    (0..count * 3).map(|i| ((i * 37) % 256) as u8).collect()
}

// ============================================================================
// Chain Evaluation
// ============================================================================

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    let space = srgb_to_romm();
    let simple = Chain::new([Filter::from(grayscale()), Filter::from(invert())]);
    let input = Triple::Rgb(Rgb::new(0.5, 0.3, 0.7));

    group.bench_function("srgb_to_romm", |b| {
        b.iter(|| space.apply(black_box(input)))
    });

    group.bench_function("grayscale_invert", |b| {
        b.iter(|| simple.apply(black_box(input)))
    });

    group.finish();
}

// ============================================================================
// LUT Population
// ============================================================================

fn bench_lut_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut_populate");
    group.sample_size(10);

    for depth in [5u32, 6, 7].iter() {
        let points = 1u64 << (3 * depth);
        group.throughput(Throughput::Elements(points));

        group.bench_with_input(BenchmarkId::new("srgb_to_romm_u16", depth), depth, |b, &d| {
            let options = LutOptions::default().with_input_depth([d, d, d]);
            b.iter(|| {
                let mut lut = Lut3d::new(&options).unwrap();
                lut.populate(srgb_to_romm(), PopulateMode::Pipeline).unwrap();
                black_box(lut)
            })
        });
    }

    group.finish();
}

// ============================================================================
// Batch Pixel Application
// ============================================================================

fn bench_apply_rgb8(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_rgb8");

    for pixel_count in [1024usize, 65536, 1 << 20].iter() {
        let src = generate_rgb8_data(*pixel_count);
        group.throughput(Throughput::Elements(*pixel_count as u64));

        group.bench_with_input(
            BenchmarkId::new("srgb_to_romm", pixel_count),
            pixel_count,
            |b, _| {
                let mut data = src.clone();
                b.iter(|| apply_rgb8(black_box(&mut data), srgb_to_romm()).unwrap())
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_chain, bench_lut_populate, bench_apply_rgb8);
criterion_main!(benches);
