//! 3DL2 file format tests

use oxcolor_core::color::white_point::{D50, D65};
use oxcolor_core::lut::header::{HEADER_SIZE, LUT_FILE_OFFSET, PARAMETERS_FILE_OFFSET};
use oxcolor_core::lut::{ColorEncoding, LutData, LutState, OutputDepth, ValueRange};
use oxcolor_core::pipeline::{Chain, Clamp, Filter, identity, invert};
use oxcolor_core::space::{ROMM, SRGB};
use oxcolor_core::{
    AdaptationBasis, ChromaticAdapter, Error, Lut3d, LutOptions, PopulateMode, Rgb, Triple,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

fn srgb_to_romm() -> anyhow::Result<Chain> {
    Ok(Chain::new([
        SRGB.decoder()?,
        ChromaticAdapter::between(&D65, &D50, AdaptationBasis::Bradford)?.filter(),
        ROMM.encoder()?,
    ])
    .then(Clamp::new(0.0, 1.0)))
}

#[test]
fn file_layout() -> anyhow::Result<()> {
    let params = b"source=sRGB target=ProPhoto".to_vec();
    let opts = LutOptions::default()
        .with_input_depth([5, 6, 7])
        .with_output_depth(16)
        .with_spaces(Some(SRGB), Some(ROMM))
        .with_program("lutgen", 3)
        .with_parameters(params.clone());
    let mut lut = Lut3d::new(&opts)?;
    assert_eq!(lut.state(), LutState::Header);
    lut.populate(srgb_to_romm()?, PopulateMode::Pipeline)?;

    let bytes = lut.to_bytes();
    let payload = 3 * (1usize << 18) * 2;
    assert_eq!(bytes.len(), LUT_FILE_OFFSET + payload);

    // Header, zero gap, parameters, zero gap, payload
    assert_eq!(&bytes[0..4], b"3DL2");
    assert!(bytes[HEADER_SIZE..PARAMETERS_FILE_OFFSET].iter().all(|&b| b == 0));
    assert_eq!(&bytes[PARAMETERS_FILE_OFFSET..][..params.len()], &params[..]);
    assert!(
        bytes[PARAMETERS_FILE_OFFSET + params.len()..LUT_FILE_OFFSET]
            .iter()
            .all(|&b| b == 0)
    );
    assert_eq!(&bytes[48..60], &[5, 0, 0, 0, 6, 0, 0, 0, 7, 0, 0, 0]);

    // Little-endian primaries: sRGB red x at 104, ProPhoto red x at 168
    let red_in = f64::from_le_bytes(bytes[104..112].try_into()?);
    let red_out = f64::from_le_bytes(bytes[168..176].try_into()?);
    assert!((red_in - 0.64).abs() < 1e-12);
    assert!((red_out - 0.7347).abs() < 1e-12);
    Ok(())
}

#[test]
fn file_round_trip() -> anyhow::Result<()> {
    for bits in [8, 16, 32, 64] {
        let opts = LutOptions::default()
            .with_input_depth([4, 5, 3])
            .with_output_depth(bits)
            .with_ranges(ValueRange::Limited, ValueRange::Limited);
        let mut lut = Lut3d::new(&opts)?;
        lut.populate(invert(), PopulateMode::Pipeline)?;

        let mut file = Vec::new();
        lut.write_to(&mut file)?;
        let parsed = Lut3d::from_bytes(&file)?;

        assert_eq!(parsed.output_depth(), OutputDepth::from_bits(bits)?);
        assert_eq!(parsed.input_depth(), [4, 5, 3]);
        assert_eq!(parsed.header(), lut.header());
        assert_eq!(parsed.data(), lut.data());
        assert_eq!(parsed.to_bytes(), file);
    }
    Ok(())
}

#[test]
fn lattice_matches_direct_evaluation() -> anyhow::Result<()> {
    let depth = 5u32;
    let max = ((1 << depth) - 1) as f64;
    let opts = LutOptions::default()
        .with_input_depth([depth; 3])
        .with_output_depth(16);
    let mut lut = Lut3d::new(&opts)?;
    let transform = srgb_to_romm()?;
    lut.populate(transform.clone(), PopulateMode::Pipeline)?;

    let mut rng = ChaCha8Rng::seed_from_u64(0x3d12);
    for _ in 0..2000 {
        let (a, b, c) = (
            rng.gen_range(0..1usize << depth),
            rng.gen_range(0..1usize << depth),
            rng.gen_range(0..1usize << depth),
        );
        let input = Triple::Rgb(Rgb::new(c as f64 / max, b as f64 / max, a as f64 / max));
        let (r, g, bl) = transform.apply(input)?.decompose();
        let (lr, lg, lb) = lut.get_output_raw(lut.offset(a, b, c))?.decompose();

        for (direct, stored) in [(r, lr), (g, lg), (bl, lb)] {
            assert!(
                (direct * 65535.0 - stored).abs() <= 1.0,
                "({a}, {b}, {c}): {direct} vs {stored}"
            );
        }
    }
    Ok(())
}

#[test]
fn identity_lattice_is_monotonic() -> anyhow::Result<()> {
    let opts = LutOptions::default()
        .with_input_depth([6, 6, 6])
        .with_output_depth(8);
    let mut lut = Lut3d::new(&opts)?;
    lut.populate(identity(), PopulateMode::Pipeline)?;

    let LutData::U8(values) = lut.data() else {
        panic!("8-bit output should store u8");
    };
    // Stored B, G, R: the first element follows axis A, which varies fastest
    let violations = values
        .par_chunks(3 * 64)
        .filter(|row| row.chunks_exact(3).zip(row.chunks_exact(3).skip(1)).any(|(p, q)| q[0] < p[0]))
        .count();
    assert_eq!(violations, 0);

    assert_eq!(&values[..3], &[0, 0, 0]);
    assert_eq!(&values[values.len() - 3..], &[255, 255, 255]);
    Ok(())
}

#[test]
fn raw_writes_after_population() -> anyhow::Result<()> {
    let mut lut = Lut3d::new(&LutOptions::default().with_input_depth([3, 3, 3]))?;
    lut.populate(identity(), PopulateMode::Pipeline)?;
    let pos = lut.offset(1, 2, 3);
    lut.set_output_raw(pos, Triple::Rgb(Rgb::new(1.0, 2.0, 3.0)))?;
    assert_eq!(lut.get_output_raw(pos)?, Triple::Rgb(Rgb::new(1.0, 2.0, 3.0)));
    assert_eq!(lut.state(), LutState::Populated);

    let bytes = lut.to_bytes();
    // 16-bit BGR: blue first
    assert_eq!(&bytes[LUT_FILE_OFFSET + 2 * pos..][..6], &[3, 0, 2, 0, 1, 0]);
    Ok(())
}

#[test]
fn xyz_output_file() -> anyhow::Result<()> {
    let opts = LutOptions::default()
        .with_input_depth([4, 4, 4])
        .with_output_depth(32)
        .with_encodings(ColorEncoding::Bgr, ColorEncoding::Xyz)
        .with_spaces(Some(SRGB), Some(ROMM));
    let mut lut = Lut3d::new(&opts)?;
    lut.populate(SRGB.decoder()?, PopulateMode::Pipeline)?;

    let parsed = Lut3d::from_bytes(&lut.to_bytes())?;
    assert_eq!(parsed.output_encoding(), ColorEncoding::Xyz);
    assert_eq!(parsed.header().output_color_space, [0.0; 8]);
    let white = parsed.get_output_raw(parsed.offset(15, 15, 15))?;
    assert!(white.approx_eq(&Triple::Xyz(SRGB.white), 1e-6));
    Ok(())
}

#[test]
fn filter_errors_abort_population() -> anyhow::Result<()> {
    let mut lut = Lut3d::new(&LutOptions::default().with_input_depth([3, 3, 3]))?;
    // The RGB decoder refuses XYZ input
    let bad = Chain::new([SRGB.decoder()?, SRGB.decoder()?]);
    let err = lut.populate(bad, PopulateMode::Pipeline).unwrap_err();
    assert!(matches!(err, Error::UnsupportedColorKind { .. }));
    assert_eq!(lut.state(), LutState::Header);

    let ok = Filter::from(identity());
    lut.populate(ok, PopulateMode::Raw)?;
    assert_eq!(lut.state(), LutState::Populated);
    Ok(())
}
