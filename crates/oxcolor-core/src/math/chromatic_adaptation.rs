//! Chromatic Adaptation Transforms
//!
//! Chromatic adaptation maps colors seen under one white point to how they
//! appear under another. The transform is built in a cone-response space:
//!
//! ```text
//! T = M⁻¹ · diag(M·Wd ./ M·Ws) · M
//! ```
//!
//! References:
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use crate::color::{Triple, WhitePoint, Xyz};
use crate::math::Matrix3x3;
use crate::pipeline::{Filter, TripleFilter};
use crate::{Error, Result};

/// Cone response basis used for adaptation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdaptationBasis {
    /// XYZ scaling (identity basis)
    Identity,
    /// Bradford (ICC default)
    #[default]
    Bradford,
    /// Von Kries
    VonKries,
}

/// Bradford matrix: XYZ → LMS (cone response)
const BRADFORD_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8951000, 0.2664000, -0.1614000],
    [-0.7502000, 1.7135000, 0.0367000],
    [0.0389000, -0.0685000, 1.0296000],
]);

/// Von Kries matrix: XYZ → LMS
const VON_KRIES_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.4002400, 0.7076000, -0.0808100],
    [-0.2263000, 1.1653200, 0.0457000],
    [0.0000000, 0.0000000, 0.9182200],
]);

impl AdaptationBasis {
    /// XYZ → cone response matrix M
    pub const fn matrix(&self) -> Matrix3x3 {
        match self {
            AdaptationBasis::Identity => Matrix3x3::identity(),
            AdaptationBasis::Bradford => BRADFORD_XYZ_TO_LMS,
            AdaptationBasis::VonKries => VON_KRIES_XYZ_TO_LMS,
        }
    }
}

/// A precomputed adaptation from one white point to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaticAdapter {
    matrix: Matrix3x3,
}

impl ChromaticAdapter {
    /// Build the adaptation from `src_white` to `dst_white` (both XYZ)
    pub fn new(src_white: Xyz, dst_white: Xyz, basis: AdaptationBasis) -> Result<Self> {
        let m = basis.matrix();
        let m_inv = m
            .inverse()
            .ok_or(Error::DegenerateGeometry("singular cone response matrix"))?;

        let src = m.multiply_vec(src_white.to_array());
        let dst = m.multiply_vec(dst_white.to_array());
        if src.iter().any(|&v| v == 0.0) {
            return Err(Error::DegenerateGeometry(
                "source white has a zero cone response",
            ));
        }

        let scale = Matrix3x3::diagonal(dst[0] / src[0], dst[1] / src[1], dst[2] / src[2]);

        Ok(Self {
            matrix: m_inv.multiply(&scale.multiply(&m)),
        })
    }

    /// Build the adaptation between two named white points
    pub fn between(src: &WhitePoint, dst: &WhitePoint, basis: AdaptationBasis) -> Result<Self> {
        Self::new(src.xyz(), dst.xyz(), basis)
    }

    /// The combined adaptation matrix; XYZ_dst = T × XYZ_src
    #[inline]
    pub fn matrix(&self) -> Matrix3x3 {
        self.matrix
    }

    /// Adapt an XYZ color
    #[inline]
    pub fn adapt(&self, xyz: Xyz) -> Xyz {
        Xyz::from_array(self.matrix.multiply_vec(xyz.to_array()))
    }

    /// Adapt an XYZ or Yxy triple, producing XYZ
    pub fn apply(&self, input: Triple) -> Result<Triple> {
        let xyz = input.to_xyz("chromatic adapter")?;
        Ok(Triple::Xyz(self.adapt(xyz)))
    }

    /// Whole-triple filter applying this adaptation
    pub fn filter(&self) -> TripleFilter {
        let adapter = *self;
        TripleFilter::new(move |t| adapter.apply(t))
    }
}

impl From<ChromaticAdapter> for Filter {
    fn from(adapter: ChromaticAdapter) -> Self {
        Filter::Triple(adapter.filter())
    }
}
