//! Tone reproduction curves
//!
//! Each curve is a pure encode/decode pair over scalars:
//! - encode: linear light → storage value
//! - decode: storage value → linear light
//!
//! The two directions are built to be mutually inverse within floating-point
//! tolerance. Curves plug into filter chains through [`Curve::encoder`] and
//! [`Curve::decoder`], which yield single-channel filters.

use crate::pipeline::SingleFilter;

/// Constant set for the CIE L* curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LStarMode {
    /// Rounded constants as printed in the CIE standard (E = 0.008856, K = 903.3)
    #[default]
    Standard,
    /// Exact rational constants the standard intended (E = 216/24389, K = 24389/27)
    Exact,
}

impl LStarMode {
    /// Breakpoint E and slope K
    #[inline]
    pub fn params(&self) -> (f64, f64) {
        match self {
            LStarMode::Standard => (0.008856, 903.3),
            LStarMode::Exact => (216.0 / 24389.0, 24389.0 / 27.0),
        }
    }
}

/// A gamma / tone reproduction curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// v^(1/γ) to encode, v^γ to decode; non-positive input maps to 0
    PurePower(f64),
    /// IEC 61966-2-1 piecewise curve
    Srgb,
    /// CIE L* lightness curve, rescaled to [0, 1]
    LStar(LStarMode),
}

impl Curve {
    /// Encode (linear → storage)
    #[inline]
    pub fn encode(&self, v: f64) -> f64 {
        match *self {
            Curve::PurePower(gamma) => {
                if v > 0.0 {
                    v.powf(1.0 / gamma)
                } else {
                    0.0
                }
            }
            Curve::Srgb => {
                if v > 0.0031308 {
                    1.055 * v.powf(1.0 / 2.4) - 0.055
                } else {
                    v * 12.92
                }
            }
            Curve::LStar(mode) => {
                let (e, k) = mode.params();
                if v > e {
                    v.cbrt() * 1.16 - 0.16
                } else {
                    v * k / 100.0
                }
            }
        }
    }

    /// Decode (storage → linear)
    #[inline]
    pub fn decode(&self, v: f64) -> f64 {
        match *self {
            Curve::PurePower(gamma) => {
                if v > 0.0 {
                    v.powf(gamma)
                } else {
                    0.0
                }
            }
            Curve::Srgb => {
                if v > 0.04045 {
                    ((v + 0.055) / 1.055).powf(2.4)
                } else {
                    v / 12.92
                }
            }
            Curve::LStar(mode) => {
                let (e, k) = mode.params();
                let crossover = e * k / 100.0;
                if v > crossover {
                    ((v + 0.16) / 1.16).powi(3)
                } else {
                    v * 100.0 / k
                }
            }
        }
    }

    /// Single-channel filter applying [`Curve::encode`]
    pub fn encoder(&self) -> SingleFilter {
        let curve = *self;
        SingleFilter::new(move |v| curve.encode(v))
    }

    /// Single-channel filter applying [`Curve::decode`]
    pub fn decoder(&self) -> SingleFilter {
        let curve = *self;
        SingleFilter::new(move |v| curve.decode(v))
    }
}
