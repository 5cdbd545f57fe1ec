//! Device RGB samples

/// Rec. 709 luma weights
const LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Device RGB triple
///
/// Normalized working values live in [0, 1]. Inside a bit-depth pipeline the
/// same type also carries pulled-up fixed-point values (e.g. 0..=255), so no
/// range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// 8-bit storage values as is, not normalized
    #[inline]
    pub fn from_u8(rgb: [u8; 3]) -> Self {
        Self::from(rgb.map(f64::from))
    }

    /// Floor into 8-bit storage; `as` saturates at 0 and 255
    #[inline]
    pub fn to_u8_floor(&self) -> [u8; 3] {
        self.to_array().map(|v| v.floor() as u8)
    }

    /// Rec. 709 weighted sum
    #[inline]
    pub fn luminance(&self) -> f64 {
        LUMA[0] * self.r + LUMA[1] * self.g + LUMA[2] * self.b
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}
