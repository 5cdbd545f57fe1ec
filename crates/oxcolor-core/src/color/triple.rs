//! Three-channel color samples
//!
//! [`Triple`] is the value that flows through every filter. Generic filters
//! never look at the variant: they [`decompose`](Triple::decompose) it into
//! three scalars and rebuild a value of the same kind with
//! [`make_like`](Triple::make_like). Variant-specific operations match on it
//! and reject kinds they cannot handle.

use std::fmt;

use super::{Rgb, Xyz, Yxy};
use crate::{Error, Result};

/// Variant tag of a [`Triple`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    /// Device RGB
    Rgb,
    /// CIE XYZ
    Xyz,
    /// CIE Yxy
    Yxy,
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorKind::Rgb => "RGB",
            ColorKind::Xyz => "XYZ",
            ColorKind::Yxy => "Yxy",
        };
        f.write_str(name)
    }
}

/// A color sample in one of the supported coordinate systems
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Triple {
    /// Device RGB
    Rgb(Rgb),
    /// CIE XYZ
    Xyz(Xyz),
    /// CIE Yxy
    Yxy(Yxy),
}

impl Triple {
    /// Variant tag
    #[inline]
    pub const fn kind(&self) -> ColorKind {
        match self {
            Triple::Rgb(_) => ColorKind::Rgb,
            Triple::Xyz(_) => ColorKind::Xyz,
            Triple::Yxy(_) => ColorKind::Yxy,
        }
    }

    /// Split into three scalars in the variant's channel order
    ///
    /// RGB → (r, g, b), XYZ → (X, Y, Z), Yxy → (Y, x, y).
    #[inline]
    pub const fn decompose(&self) -> (f64, f64, f64) {
        match self {
            Triple::Rgb(c) => (c.r, c.g, c.b),
            Triple::Xyz(c) => (c.x, c.y, c.z),
            Triple::Yxy(c) => (c.big_y, c.x, c.y),
        }
    }

    /// Build a triple of the same kind as `self` from three scalars
    #[inline]
    pub const fn make_like(&self, a: f64, b: f64, c: f64) -> Self {
        match self {
            Triple::Rgb(_) => Triple::Rgb(Rgb::new(a, b, c)),
            Triple::Xyz(_) => Triple::Xyz(Xyz::new(a, b, c)),
            Triple::Yxy(_) => Triple::Yxy(Yxy::new(a, b, c)),
        }
    }

    /// View as XYZ, converting Yxy on the way
    ///
    /// `operation` names the caller in the error raised for RGB input.
    pub fn to_xyz(&self, operation: &'static str) -> Result<Xyz> {
        match self {
            Triple::Xyz(xyz) => Ok(*xyz),
            Triple::Yxy(yxy) => yxy.to_xyz(),
            Triple::Rgb(_) => Err(Error::unsupported(operation, self.kind())),
        }
    }

    /// Channel-wise comparison regardless of kind
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let (a0, b0, c0) = self.decompose();
        let (a1, b1, c1) = other.decompose();
        (a0 - a1).abs() < epsilon && (b0 - b1).abs() < epsilon && (c0 - c1).abs() < epsilon
    }
}

impl From<Rgb> for Triple {
    fn from(c: Rgb) -> Self {
        Triple::Rgb(c)
    }
}

impl From<Xyz> for Triple {
    fn from(c: Xyz) -> Self {
        Triple::Xyz(c)
    }
}

impl From<Yxy> for Triple {
    fn from(c: Yxy) -> Self {
        Triple::Yxy(c)
    }
}

/// Luminance of a triple
///
/// Y for XYZ and Yxy; Rec. 709 weighting for device RGB.
#[inline]
pub fn luminance(triple: &Triple) -> f64 {
    match triple {
        Triple::Rgb(c) => c.luminance(),
        Triple::Xyz(c) => c.luminance(),
        Triple::Yxy(c) => c.big_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_like_preserves_kind() {
        let samples = [
            Triple::Rgb(Rgb::new(0.1, 0.2, 0.3)),
            Triple::Xyz(Xyz::new(0.1, 0.2, 0.3)),
            Triple::Yxy(Yxy::new(0.1, 0.2, 0.3)),
        ];
        for t in samples {
            let (a, b, c) = t.decompose();
            let rebuilt = t.make_like(a, b, c);
            assert_eq!(rebuilt, t);
            assert_eq!(t.make_like(1.0, 2.0, 3.0).kind(), t.kind());
        }
    }

    #[test]
    fn test_yxy_channel_order() {
        let t = Triple::Yxy(Yxy::new(0.9, 0.3, 0.4));
        assert_eq!(t.decompose(), (0.9, 0.3, 0.4));
    }

    #[test]
    fn test_luminance() {
        assert_eq!(luminance(&Triple::Xyz(Xyz::new(0.2, 0.7, 0.1))), 0.7);
        assert_eq!(luminance(&Triple::Yxy(Yxy::new(0.4, 0.3, 0.3))), 0.4);
        let rgb = luminance(&Triple::Rgb(Rgb::new(0.0, 1.0, 0.0)));
        assert!((rgb - 0.7152).abs() < 1e-12);
    }

    #[test]
    fn test_to_xyz_rejects_rgb() {
        let err = Triple::Rgb(Rgb::default()).to_xyz("test").unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedColorKind {
                operation: "test",
                kind: ColorKind::Rgb
            }
        ));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ColorKind::Yxy.to_string(), "Yxy");
    }
}
