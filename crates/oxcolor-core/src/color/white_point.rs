//! CIE Standard Illuminant White Points
//!
//! White points are stored as CIE 1931 chromaticities with unit luminance.
//! The table is a set of compile-time constants, read-only for the life of
//! the process.

use super::{Xyz, Yxy};
use crate::{Error, Result};

/// A named white point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// Chromaticity with Y = 1.0
    pub chromaticity: Yxy,
}

impl WhitePoint {
    /// Create a new white point from chromaticity coordinates
    pub const fn new(name: &'static str, x: f64, y: f64) -> Self {
        Self {
            name,
            chromaticity: Yxy::from_chromaticity(x, y),
        }
    }

    /// Tristimulus values of this white (Y = 1.0)
    pub const fn xyz(&self) -> Xyz {
        self.chromaticity.to_xyz_unchecked()
    }
}

// ============================================================================
// Standard CIE Illuminants
// ============================================================================

/// Incandescent, ~2856K
pub const A: WhitePoint = WhitePoint::new("A", 0.44757, 0.40735);
/// Direct sunlight at noon (obsolete)
pub const B: WhitePoint = WhitePoint::new("B", 0.34842, 0.35161);
/// Average daylight (obsolete), NTSC 1953 white
pub const C: WhitePoint = WhitePoint::new("C", 0.31006, 0.31616);
/// Horizon light, ~5003K
pub const D50: WhitePoint = WhitePoint::new("D50", 0.34567, 0.35850);
/// Mid-morning daylight, ~5503K
pub const D55: WhitePoint = WhitePoint::new("D55", 0.33242, 0.34743);
/// Noon daylight, ~6504K
///
/// Full-precision chromaticity, so that sRGB matrices derived from it match
/// the published IEC 61966-2-1 values.
pub const D65: WhitePoint = WhitePoint::new("D65", 0.312_726_614_681_012_09, 0.329_023_130_326_061_95);
/// North sky daylight, ~7504K
pub const D75: WhitePoint = WhitePoint::new("D75", 0.29902, 0.31485);
/// Equal energy
pub const E: WhitePoint = WhitePoint::new("E", 1.0 / 3.0, 1.0 / 3.0);
/// Daylight fluorescent
pub const F1: WhitePoint = WhitePoint::new("F1", 0.31310, 0.33727);
/// Cool white fluorescent
pub const F2: WhitePoint = WhitePoint::new("F2", 0.37208, 0.37529);
/// White fluorescent
pub const F3: WhitePoint = WhitePoint::new("F3", 0.40910, 0.39430);
/// Warm white fluorescent
pub const F4: WhitePoint = WhitePoint::new("F4", 0.44018, 0.40329);
/// Daylight fluorescent
pub const F5: WhitePoint = WhitePoint::new("F5", 0.31379, 0.34531);
/// Lite white fluorescent
pub const F6: WhitePoint = WhitePoint::new("F6", 0.37790, 0.38835);
/// D65 simulator, broadband daylight fluorescent
pub const F7: WhitePoint = WhitePoint::new("F7", 0.31292, 0.32933);
/// D50 simulator
pub const F8: WhitePoint = WhitePoint::new("F8", 0.34588, 0.35875);
/// Cool white deluxe fluorescent
pub const F9: WhitePoint = WhitePoint::new("F9", 0.37417, 0.37281);
/// Philips TL85
pub const F10: WhitePoint = WhitePoint::new("F10", 0.34609, 0.35986);
/// Philips TL84, narrow band
pub const F11: WhitePoint = WhitePoint::new("F11", 0.38052, 0.37713);
/// Philips TL83
pub const F12: WhitePoint = WhitePoint::new("F12", 0.43695, 0.40441);

/// Every named white point
pub const ALL: [WhitePoint; 20] = [
    A, B, C, D50, D55, D65, D75, E, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
];

/// Get a standard white point by name (case-insensitive)
pub fn from_name(name: &str) -> Option<WhitePoint> {
    ALL.iter()
        .find(|wp| wp.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Chromaticity of the CIE daylight locus at a correlated color temperature
///
/// Valid from 4000K to 25000K. Returns unit luminance.
pub fn from_temperature(kelvin: f64) -> Result<Yxy> {
    if !(4000.0..=25000.0).contains(&kelvin) {
        return Err(Error::InvalidParameter(format!(
            "daylight temperature {kelvin}K outside 4000K..=25000K"
        )));
    }

    let t = kelvin;
    let (a, b, c, d) = if t <= 7000.0 {
        (-4.6070e9, 2.9678e6, 0.09911e3, 0.244063)
    } else {
        (-2.0064e9, 1.9018e6, 0.24748e3, 0.237040)
    };
    let x = a / (t * t * t) + b / (t * t) + c / t + d;
    let y = -3.0 * x * x + 2.870 * x - 0.275;

    Ok(Yxy::new(1.0, x, y))
}
