//! CIE Yxy (luminance plus chromaticity)

use super::Xyz;
use crate::{Error, Result};

/// Luminance Y with CIE 1931 chromaticity coordinates x, y
///
/// Channel order when decomposed is (Y, x, y).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Yxy {
    /// Luminance
    pub big_y: f64,
    /// Chromaticity x
    pub x: f64,
    /// Chromaticity y
    pub y: f64,
}

impl Yxy {
    /// Create a new Yxy value
    #[inline]
    pub const fn new(big_y: f64, x: f64, y: f64) -> Self {
        Self { big_y, x, y }
    }

    /// Chromaticity point with unit luminance
    #[inline]
    pub const fn from_chromaticity(x: f64, y: f64) -> Self {
        Self::new(1.0, x, y)
    }

    /// Convert to XYZ
    ///
    /// X = Y·x/y, Z = Y·(1−x−y)/y. Fails when y = 0.
    #[inline]
    pub fn to_xyz(&self) -> Result<Xyz> {
        if self.y == 0.0 {
            return Err(Error::DegenerateGeometry("chromaticity y is zero"));
        }
        Ok(self.to_xyz_unchecked())
    }

    /// Convert to XYZ without the y = 0 check
    ///
    /// Only for compile-time tables whose chromaticities are known good.
    pub(crate) const fn to_xyz_unchecked(&self) -> Xyz {
        Xyz::new(
            self.big_y * self.x / self.y,
            self.big_y,
            self.big_y * (1.0 - self.x - self.y) / self.y,
        )
    }

    /// Check if approximately equal to another Yxy value
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.big_y - other.big_y).abs() < epsilon
            && (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
    }
}
