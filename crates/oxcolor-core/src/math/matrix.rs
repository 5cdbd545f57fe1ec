//! 3×3 matrices for tristimulus transforms
//!
//! Row-major, f64 throughout. A space's RGB → XYZ matrix has the primaries'
//! XYZ as its columns; adaptation matrices are products of a cone basis,
//! a diagonal gain and the basis inverse.

use std::ops::Mul;

type Vec3 = [f64; 3];

#[inline]
fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Row-major 3×3 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::diagonal(1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self::new([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Matrix with `c0`, `c1`, `c2` as its columns
    #[inline]
    pub const fn from_columns(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::new([
            [c0[0], c1[0], c2[0]],
            [c0[1], c1[1], c2[1]],
            [c0[2], c1[2], c2[2]],
        ])
    }

    /// Column `j`
    #[inline]
    pub const fn column(&self, j: usize) -> Vec3 {
        [self.m[0][j], self.m[1][j], self.m[2][j]]
    }

    /// M × v
    #[inline]
    pub fn multiply_vec(&self, v: Vec3) -> Vec3 {
        self.m.map(|row| dot(row, v))
    }

    /// self × other
    pub fn multiply(&self, other: &Self) -> Self {
        let cols = [other.column(0), other.column(1), other.column(2)];
        Self::new(self.m.map(|row| cols.map(|col| dot(row, col))))
    }

    /// Scalar triple product of the columns
    #[inline]
    pub fn determinant(&self) -> f64 {
        dot(self.column(0), cross(self.column(1), self.column(2)))
    }

    /// Inverse, or `None` when the determinant is non-finite or below 1e-14
    ///
    /// With columns a, b, c the inverse has rows b×c, c×a, a×b over the
    /// determinant.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < 1e-14 {
            return None;
        }
        let (a, b, c) = (self.column(0), self.column(1), self.column(2));
        Some(Self::new(
            [cross(b, c), cross(c, a), cross(a, b)].map(|row| row.map(|v| v / det)),
        ))
    }

    /// self × diag(s)
    #[inline]
    pub fn scale_columns(&self, s: Vec3) -> Self {
        Self::new(self.m.map(|row| [row[0] * s[0], row[1] * s[1], row[2] * s[2]]))
    }

    /// Every element within `epsilon` of `other`'s
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Matrix3x3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.multiply_vec(rhs)
    }
}

/// IEC 61966-2-1 linear sRGB → XYZ (D65), as published
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);
