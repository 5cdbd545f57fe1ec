//! RGB working spaces
//!
//! A space is three primaries and a white point in XYZ, plus an optional
//! tone curve. The RGB → XYZ matrix is derived the usual way:
//!
//! ```text
//! P = [R G B]          (primaries as columns)
//! S = P⁻¹ · W
//! M = P · diag(S)
//! ```
//!
//! The named spaces below are compile-time constants.

use crate::color::white_point::{C, D50, D65, E};
use crate::color::{Rgb, Triple, Xyz, Yxy};
use crate::math::{Curve, LStarMode, Matrix3x3};
use crate::pipeline::TripleFilter;
use crate::{Error, Result};

/// An RGB working space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Space {
    pub red: Xyz,
    pub green: Xyz,
    pub blue: Xyz,
    /// White point; its Y is the reference luminosity
    pub white: Xyz,
    /// Tone curve, `None` for linear light
    pub curve: Option<Curve>,
}

impl Space {
    /// Build a space from primary chromaticities (Y = 1) and a white point
    ///
    /// No chromaticity y may be zero. A space built from a zero y carries
    /// non-finite coordinates and fails with
    /// [`Error::DegenerateGeometry`] when its matrices are derived.
    #[allow(clippy::too_many_arguments)]
    pub const fn from_xy(
        rx: f64,
        ry: f64,
        gx: f64,
        gy: f64,
        bx: f64,
        by: f64,
        white: Yxy,
        curve: Option<Curve>,
    ) -> Self {
        Self {
            red: Yxy::from_chromaticity(rx, ry).to_xyz_unchecked(),
            green: Yxy::from_chromaticity(gx, gy).to_xyz_unchecked(),
            blue: Yxy::from_chromaticity(bx, by).to_xyz_unchecked(),
            white: white.to_xyz_unchecked(),
            curve,
        }
    }

    /// Same primaries and white, different curve
    pub const fn with_curve(&self, curve: Option<Curve>) -> Self {
        Self {
            red: self.red,
            green: self.green,
            blue: self.blue,
            white: self.white,
            curve,
        }
    }

    /// Same primaries and white, no curve
    pub const fn linear(&self) -> Self {
        self.with_curve(None)
    }

    /// Reference luminosity (white Y)
    #[inline]
    pub const fn luminosity(&self) -> f64 {
        self.white.y
    }

    /// Linear RGB → XYZ matrix
    pub fn to_xyz_matrix(&self) -> Result<Matrix3x3> {
        let p = Matrix3x3::from_columns(
            self.red.to_array(),
            self.green.to_array(),
            self.blue.to_array(),
        );
        let p_inv = p
            .inverse()
            .ok_or(Error::DegenerateGeometry("primaries are linearly dependent"))?;
        let s = p_inv.multiply_vec(self.white.to_array());
        Ok(p.scale_columns(s))
    }

    /// XYZ → linear RGB matrix
    pub fn from_xyz_matrix(&self) -> Result<Matrix3x3> {
        self.to_xyz_matrix()?
            .inverse()
            .ok_or(Error::DegenerateGeometry("white point lies on a primary edge"))
    }

    /// XYZ or Yxy → device RGB, curve applied last
    pub fn encoder(&self) -> Result<TripleFilter> {
        let m = self.from_xyz_matrix()?;
        let curve = self.curve;
        Ok(TripleFilter::new(move |t| {
            let xyz = t.to_xyz("space encoder")?;
            let [r, g, b] = m.multiply_vec(xyz.to_array());
            let rgb = match curve {
                Some(c) => Rgb::new(c.encode(r), c.encode(g), c.encode(b)),
                None => Rgb::new(r, g, b),
            };
            Ok(Triple::Rgb(rgb))
        }))
    }

    /// Device RGB → XYZ, curve removed first
    pub fn decoder(&self) -> Result<TripleFilter> {
        let m = self.to_xyz_matrix()?;
        let curve = self.curve;
        Ok(TripleFilter::new(move |t| {
            let Triple::Rgb(rgb) = t else {
                return Err(Error::unsupported("space decoder", t.kind()));
            };
            let linear = match curve {
                Some(c) => [c.decode(rgb.r), c.decode(rgb.g), c.decode(rgb.b)],
                None => rgb.to_array(),
            };
            Ok(Triple::Xyz(Xyz::from_array(m.multiply_vec(linear))))
        }))
    }

    /// Chromaticity triangle area, for comparing gamut sizes
    pub fn area(&self) -> Result<f64> {
        let (r, g, b) = (self.red.to_yxy()?, self.green.to_yxy()?, self.blue.to_yxy()?);

        let rg = (g.x - r.x).hypot(g.y - r.y);
        let gb = (g.x - b.x).hypot(g.y - b.y);
        let br = (r.x - b.x).hypot(r.y - b.y);

        // Heron
        Ok(((rg + gb - br) * (rg - gb + br) * (gb + br - rg) * (rg + gb + br)).sqrt() / 4.0)
    }

    /// Primary and white chromaticities: rx, ry, gx, gy, bx, by, wx, wy
    pub fn primaries(&self) -> Result<[f64; 8]> {
        let (r, g, b, w) = (
            self.red.to_yxy()?,
            self.green.to_yxy()?,
            self.blue.to_yxy()?,
            self.white.to_yxy()?,
        );
        Ok([r.x, r.y, g.x, g.y, b.x, b.y, w.x, w.y])
    }

    /// Look up a named space, accepting common aliases
    ///
    /// Matching ignores ASCII case, spaces, `-`, `_` and `.`.
    pub fn from_name(name: &str) -> Option<Space> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_' | '.'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let space = match key.as_str() {
            "bt709" | "rec709" => BT709,
            "srgb" | "scrgb" => SRGB,
            "hdtv" => HDTV,
            "madvr" => MADVR,
            "romm" | "prophoto" | "prophotorgb" => ROMM,
            "adobergb" | "adobergb98" | "adobergb1998" => ADOBE_RGB_98,
            "applergb" => APPLE_RGB,
            "ntsc53" | "ntsc1953" | "fcc1953" | "bt470m" => NTSC_53,
            "ntsc87" | "ntsc1987" | "smptec" | "smpterp145" | "smpte170m" => NTSC_87,
            "secam" | "pal" | "ebutech3213" | "ebu3213" | "bt470b" => SECAM,
            "adobewidergb" | "adobewidegamut" => ADOBE_WIDE_RGB,
            "cie1931" | "ciergb" => CIE1931,
            "aces" => ACES,
            _ => return None,
        };
        Some(space)
    }
}

// ============================================================================
// Named spaces
// ============================================================================

/// ITU-R BT.709 primaries, D65, gamma 2.35
pub const BT709: Space = Space::from_xy(
    0.64,
    0.33,
    0.30,
    0.60,
    0.15,
    0.06,
    D65.chromaticity,
    Some(Curve::PurePower(2.35)),
);
/// IEC 61966-2-1 sRGB
pub const SRGB: Space = BT709.with_curve(Some(Curve::Srgb));
/// BT.709 primaries with the L* curve
pub const HDTV: Space = BT709.with_curve(Some(Curve::LStar(LStarMode::Standard)));
/// BT.709 primaries with gamma 2.2
pub const MADVR: Space = BT709.with_curve(Some(Curve::PurePower(2.2)));
/// ROMM / ProPhoto RGB (linear)
pub const ROMM: Space = Space::from_xy(
    0.7347,
    0.2653,
    0.1596,
    0.8404,
    0.0366,
    0.0001,
    D50.chromaticity,
    None,
);
/// Adobe RGB (1998) primaries (linear)
pub const ADOBE_RGB_98: Space =
    Space::from_xy(0.64, 0.33, 0.21, 0.71, 0.15, 0.06, D65.chromaticity, None);
/// Apple RGB, gamma 1.8
pub const APPLE_RGB: Space = Space::from_xy(
    0.625,
    0.34,
    0.28,
    0.595,
    0.115,
    0.07,
    D65.chromaticity,
    Some(Curve::PurePower(1.8)),
);
/// NTSC 1953 (FCC 1953, BT.470 M), illuminant C
pub const NTSC_53: Space =
    Space::from_xy(0.67, 0.33, 0.21, 0.71, 0.14, 0.08, C.chromaticity, None);
/// NTSC 1987 (SMPTE-C, RP 145, 170M), gamma 2.2
pub const NTSC_87: Space = Space::from_xy(
    0.63,
    0.34,
    0.31,
    0.595,
    0.155,
    0.07,
    D65.chromaticity,
    Some(Curve::PurePower(2.2)),
);
/// SECAM (PAL, EBU Tech 3213, BT.470 B), gamma 2.8
pub const SECAM: Space = Space::from_xy(
    0.64,
    0.33,
    0.29,
    0.60,
    0.15,
    0.06,
    D65.chromaticity,
    Some(Curve::PurePower(2.8)),
);
/// Adobe Wide Gamut RGB (linear)
pub const ADOBE_WIDE_RGB: Space = Space::from_xy(
    0.735,
    0.265,
    0.115,
    0.826,
    0.157,
    0.018,
    D50.chromaticity,
    None,
);
/// CIE 1931 RGB, equal-energy white (linear)
pub const CIE1931: Space = Space::from_xy(
    0.7347,
    0.2653,
    0.2738,
    0.7174,
    0.1666,
    0.0089,
    E.chromaticity,
    None,
);
/// ACES AP0 (linear)
pub const ACES: Space = Space::from_xy(
    0.73470,
    0.26530,
    0.0,
    1.0,
    0.00010,
    -0.07700,
    Yxy::from_chromaticity(0.32168, 0.33767),
    None,
);
