//! Property sweeps over seeded random samples
//!
//! Each property runs over a few thousand samples drawn by the generators in
//! `oxcolor_tests::patterns`, so failures are reproducible.

use oxcolor_core::color::white_point::{self, D50, D65};
use oxcolor_core::pipeline::{
    Chain, Clamp, Filter, Scale, Swap, SwapMode, grayscale, identity, invert, xyz_to_yxy,
    yxy_to_xyz,
};
use oxcolor_core::space::{ADOBE_RGB_98, ROMM, SRGB};
use oxcolor_core::{AdaptationBasis, ChromaticAdapter, Curve, LStarMode, Triple};
use oxcolor_tests::{ErrorStats, channel_error, random_rgb, random_xyz};
use rayon::prelude::*;

const SAMPLES: usize = 4096;

#[test]
fn xyz_yxy_round_trip() -> anyhow::Result<()> {
    let there_and_back = Chain::new([xyz_to_yxy(), yxy_to_xyz()]);
    let errors = random_xyz(1, SAMPLES)
        .into_iter()
        .map(|xyz| {
            let input = Triple::Xyz(xyz);
            Ok(channel_error(&input, &there_and_back.apply(input)?))
        })
        .collect::<oxcolor_core::Result<Vec<_>>>()?;

    let stats = ErrorStats::from_errors(errors);
    assert_eq!(stats.count, SAMPLES);
    assert!(stats.within(1e-5), "{stats:?}");
    Ok(())
}

#[test]
fn yxy_keeps_luminance() -> anyhow::Result<()> {
    let f = xyz_to_yxy();
    for xyz in random_xyz(2, SAMPLES) {
        match f.apply(Triple::Xyz(xyz))? {
            Triple::Yxy(yxy) => assert_eq!(yxy.big_y, xyz.y),
            other => panic!("expected Yxy, got {:?}", other.kind()),
        }
    }
    Ok(())
}

#[test]
fn invert_is_an_involution() -> anyhow::Result<()> {
    let twice = Chain::new([invert(), invert()]);
    for rgb in random_rgb(3, SAMPLES) {
        let input = Triple::Rgb(rgb);
        assert!(twice.apply(input)?.approx_eq(&input, 1e-12));
    }
    Ok(())
}

#[test]
fn identity_is_exact() -> anyhow::Result<()> {
    let id = Filter::from(identity());
    for xyz in random_xyz(4, 256) {
        assert_eq!(id.apply(Triple::Xyz(xyz))?, Triple::Xyz(xyz));
    }
    Ok(())
}

#[test]
fn swaps_compose_to_permutations() -> anyhow::Result<()> {
    // AB then BC moves the first channel to the end
    let rotate = Swap(vec![SwapMode::AB, SwapMode::BC]);
    let undo = Swap(vec![SwapMode::BC, SwapMode::AB]);
    let chain = Chain::new([Filter::from(rotate.clone()), Filter::from(undo)]);
    for rgb in random_rgb(5, 512) {
        let input = Triple::Rgb(rgb);
        let (a, b, c) = input.decompose();
        assert_eq!(rotate.filter().apply(input)?.decompose(), (b, c, a));
        assert_eq!(chain.apply(input)?, input);
    }
    Ok(())
}

#[test]
fn clamp_and_scale_bounds() -> anyhow::Result<()> {
    let clamp = Filter::from(Clamp::new(0.25, 0.75));
    let scale = Filter::from(Scale::new(16.0 / 255.0, 235.0 / 255.0));
    for rgb in random_rgb(6, SAMPLES) {
        let (a, b, c) = clamp.apply(Triple::Rgb(rgb))?.decompose();
        assert!([a, b, c].iter().all(|v| (0.25..=0.75).contains(v)));

        let (a, b, c) = scale.apply(Triple::Rgb(rgb))?.decompose();
        assert!(
            [a, b, c]
                .iter()
                .all(|v| (16.0 / 255.0..=235.0 / 255.0).contains(v))
        );
    }
    Ok(())
}

#[test]
fn grayscale_is_idempotent() -> anyhow::Result<()> {
    let once = grayscale();
    let twice = Chain::new([grayscale(), grayscale()]);
    for rgb in random_rgb(7, SAMPLES) {
        let input = Triple::Rgb(rgb);
        let a = once.apply(input)?;
        let b = twice.apply(input)?;
        let (r, g, bl) = a.decompose();
        assert_eq!(r, g);
        assert_eq!(g, bl);
        assert!(a.approx_eq(&b, 1e-12));
    }
    Ok(())
}

#[test]
fn curves_round_trip() {
    let curves = [
        (Curve::Srgb, 1e-9),
        (Curve::PurePower(2.2), 1e-9),
        (Curve::PurePower(2.35), 1e-9),
        (Curve::LStar(LStarMode::Exact), 1e-9),
        // The rounded constants leave a sliver between the two breakpoints
        (Curve::LStar(LStarMode::Standard), 1e-4),
    ];
    let samples: Vec<f64> = random_rgb(8, SAMPLES).iter().map(|rgb| rgb.r).collect();

    for (curve, tolerance) in curves {
        let stats = ErrorStats::from_errors(
            samples
                .par_iter()
                .map(|&v| (curve.decode(curve.encode(v)) - v).abs())
                .collect::<Vec<_>>(),
        );
        assert!(stats.within(tolerance), "{curve:?}: {stats:?}");
    }
}

#[test]
fn curves_are_monotonic() {
    for curve in [
        Curve::Srgb,
        Curve::PurePower(2.2),
        Curve::LStar(LStarMode::Exact),
    ] {
        let mut prev = curve.encode(0.0);
        for i in 1..=1000 {
            let next = curve.encode(i as f64 / 1000.0);
            assert!(next >= prev, "{curve:?} at {i}");
            prev = next;
        }
    }
}

#[test]
fn adaptation_to_same_white_is_identity() -> anyhow::Result<()> {
    for basis in [
        AdaptationBasis::Bradford,
        AdaptationBasis::VonKries,
        AdaptationBasis::Identity,
    ] {
        for wp in white_point::ALL {
            let adapter = ChromaticAdapter::between(&wp, &wp, basis)?;
            assert!(adapter.matrix().is_identity(1e-9), "{} {basis:?}", wp.name);
        }
    }
    Ok(())
}

#[test]
fn adaptation_maps_white_to_white() -> anyhow::Result<()> {
    let adapter = ChromaticAdapter::between(&D65, &D50, AdaptationBasis::Bradford)?;
    assert!(adapter.adapt(D65.xyz()).approx_eq(&D50.xyz(), 1e-9));

    let back = ChromaticAdapter::between(&D50, &D65, AdaptationBasis::Bradford)?;
    for xyz in random_xyz(9, 512) {
        assert!(back.adapt(adapter.adapt(xyz)).approx_eq(&xyz, 1e-9));
    }
    Ok(())
}

#[test]
fn space_encode_decode_round_trip() -> anyhow::Result<()> {
    for space in [SRGB, ADOBE_RGB_98, ROMM] {
        let round = Chain::new([space.decoder()?, space.encoder()?]);
        let errors = random_rgb(10, SAMPLES)
            .into_par_iter()
            .map(|rgb| {
                let input = Triple::Rgb(rgb);
                Ok(channel_error(&input, &round.apply(input)?))
            })
            .collect::<oxcolor_core::Result<Vec<_>>>()?;
        let stats = ErrorStats::from_errors(errors);
        assert!(stats.within(1e-6), "{stats:?}");
    }
    Ok(())
}
