//! CIE XYZ tristimulus values
//!
//! The hub every colorimetric transform passes through: space encoders
//! consume XYZ, decoders and chromatic adaptation produce it.

use super::Yxy;
use crate::{Error, Result};

/// CIE 1931 XYZ, nominally scaled so the reference white has Y = 1
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    /// Luminance
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_array([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.y
    }

    /// Chromaticity plus luminance
    ///
    /// Black has no chromaticity, so a zero channel sum is
    /// [`Error::DegenerateGeometry`].
    pub fn to_yxy(&self) -> Result<Yxy> {
        let sum = self.x + self.y + self.z;
        if sum == 0.0 {
            return Err(Error::DegenerateGeometry("XYZ channel sum is zero"));
        }
        Ok(Yxy::new(self.y, self.x / sum, self.y / sum))
    }

    /// Every channel within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}
