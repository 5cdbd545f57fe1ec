//! Error measurement between triples and pixel buffers

use oxcolor_core::Triple;

/// Statistics over a set of absolute errors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorStats {
    /// Mean error
    pub mean: f64,
    /// Largest error
    pub max: f64,
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// Collect statistics from individual errors
    pub fn from_errors(errors: impl IntoIterator<Item = f64>) -> Self {
        let (mut sum, mut max, mut count) = (0.0, 0.0f64, 0usize);
        for e in errors {
            sum += e;
            max = max.max(e);
            count += 1;
        }
        Self {
            mean: if count > 0 { sum / count as f64 } else { 0.0 },
            max,
            count,
        }
    }

    /// Every error below `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max < tolerance
    }
}

/// Largest per-channel absolute difference; infinite when kinds differ
pub fn channel_error(a: &Triple, b: &Triple) -> f64 {
    if a.kind() != b.kind() {
        return f64::INFINITY;
    }
    let (a0, a1, a2) = a.decompose();
    let (b0, b1, b2) = b.decompose();
    (a0 - b0).abs().max((a1 - b1).abs()).max((a2 - b2).abs())
}

/// Per-byte differences between two 8-bit buffers of equal length
pub fn compare_rgb8(a: &[u8], b: &[u8]) -> ErrorStats {
    assert_eq!(a.len(), b.len(), "buffer lengths differ");
    ErrorStats::from_errors(a.iter().zip(b).map(|(&x, &y)| (x as f64 - y as f64).abs()))
}
