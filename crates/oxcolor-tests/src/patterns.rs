//! Test pattern and sample generation
//!
//! Everything random is driven by a seeded ChaCha8 generator, so every run
//! sees the same samples.

use oxcolor_core::{Rgb, Xyz};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Synthetic 8-bit RGB images
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Gray ramp across each row
    GradientH,
    /// The 8 corners of the RGB cube, repeating
    ColorCube,
    /// Primaries, secondaries and two in-between hues, repeating
    GamutBoundary,
    /// Uniform noise from a seed
    Random(u64),
    Black,
    White,
}

const GAMUT_EDGE: [[u8; 3]; 8] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
    [255, 128, 0],
    [128, 0, 255],
];

/// Interleaved RGB8 buffer of `width × height` pixels
pub fn generate_pattern(pattern: TestPattern, width: usize, height: usize) -> Vec<u8> {
    let pixels = width * height;
    let pixel: fn(usize, usize) -> [u8; 3] = match pattern {
        TestPattern::Random(seed) => {
            let mut data = vec![0u8; pixels * 3];
            ChaCha8Rng::seed_from_u64(seed).fill_bytes(&mut data);
            return data;
        }
        TestPattern::GradientH => |i, w| [(255 * (i % w) / w) as u8; 3],
        TestPattern::ColorCube => {
            |i, _| [0, 1, 2].map(|bit| if (i % 8) >> bit & 1 == 1 { 255 } else { 0 })
        }
        TestPattern::GamutBoundary => |i, _| GAMUT_EDGE[i % GAMUT_EDGE.len()],
        TestPattern::Black => |_, _| [0; 3],
        TestPattern::White => |_, _| [255; 3],
    };
    (0..pixels).flat_map(|i| pixel(i, width)).collect()
}

/// `count` RGB samples uniform in [0, 1)³
pub fn random_rgb(seed: u64, count: usize) -> Vec<Rgb> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
        .collect()
}

/// `count` XYZ samples in [0.01, 1)³, so the channel sum is never zero
pub fn random_xyz(seed: u64, count: usize) -> Vec<Xyz> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Xyz::new(
                rng.gen_range(0.01..1.0),
                rng.gen_range(0.01..1.0),
                rng.gen_range(0.01..1.0),
            )
        })
        .collect()
}

/// Image sizes used across the suites
pub mod sizes {
    pub const TINY: (usize, usize) = (8, 8);
    pub const SMALL: (usize, usize) = (64, 64);
    pub const MEDIUM: (usize, usize) = (256, 256);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_black() {
        let data = generate_pattern(TestPattern::Black, 2, 2);
        assert!(data.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_generate_white() {
        let data = generate_pattern(TestPattern::White, 2, 2);
        assert!(data.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_color_cube_corners() {
        let data = generate_pattern(TestPattern::ColorCube, 8, 1);
        assert_eq!(&data[..3], &[0, 0, 0]);
        assert_eq!(&data[3..6], &[255, 0, 0]);
        assert_eq!(&data[21..24], &[255, 255, 255]);
    }

    #[test]
    fn test_random_deterministic() {
        let a = generate_pattern(TestPattern::Random(42), 10, 10);
        let b = generate_pattern(TestPattern::Random(42), 10, 10);
        assert_eq!(a, b);
        assert_eq!(random_rgb(7, 5), random_rgb(7, 5));
    }

    #[test]
    fn test_random_ranges() {
        for rgb in random_rgb(1, 1000) {
            assert!(rgb.to_array().iter().all(|v| (0.0..1.0).contains(v)));
        }
        for xyz in random_xyz(2, 1000) {
            assert!(xyz.x + xyz.y + xyz.z > 0.0);
        }
    }
}
