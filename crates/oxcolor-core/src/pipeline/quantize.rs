//! Fixed-point ↔ normalized conversion
//!
//! Integer samples of a given bit depth live in `[bottom, bottom + span]`:
//!
//! | range   | bottom           | span                  |
//! |---------|------------------|-----------------------|
//! | full    | 0                | 2^depth − 1           |
//! | limited | 16 · 2^(depth−8) | 219 · 2^(depth−8)     |
//!
//! [`Pulldown`] maps that interval onto [0, 1], [`Pullup`] maps it back.

use super::chain::Chain;
use super::filter::{Filter, SingleFilter};

/// Bottom and span of the integer range for `depth` bits
#[inline]
pub fn quantization_range(depth: u32, full_range: bool) -> (f64, f64) {
    if full_range {
        (0.0, 2f64.powi(depth as i32) - 1.0)
    } else {
        let unit = 2f64.powi(depth as i32 - 8);
        (16.0 * unit, 219.0 * unit)
    }
}

/// Fixed-point sample → [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulldown {
    pub depth: u32,
    pub full_range: bool,
}

impl Pulldown {
    pub const fn new(depth: u32, full_range: bool) -> Self {
        Self { depth, full_range }
    }

    /// Single-channel filter form
    pub fn single(&self) -> SingleFilter {
        let (bottom, span) = quantization_range(self.depth, self.full_range);
        SingleFilter::new(move |v| (v - bottom) / span)
    }
}

impl From<Pulldown> for Filter {
    fn from(p: Pulldown) -> Self {
        Filter::Single(p.single())
    }
}

/// [0, 1] → fixed-point sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pullup {
    pub depth: u32,
    pub full_range: bool,
}

impl Pullup {
    pub const fn new(depth: u32, full_range: bool) -> Self {
        Self { depth, full_range }
    }

    /// Single-channel filter form
    pub fn single(&self) -> SingleFilter {
        let (bottom, span) = quantization_range(self.depth, self.full_range);
        SingleFilter::new(move |v| v * span + bottom)
    }
}

impl From<Pullup> for Filter {
    fn from(p: Pullup) -> Self {
        Filter::Single(p.single())
    }
}

/// `[pulldown, inner, pullup]` at one depth and range
///
/// The inner filter sees normalized values; the result is back in
/// fixed-point units (not rounded).
pub fn pipeline(depth: u32, full_range: bool, inner: impl Into<Filter>) -> Chain {
    Chain::new([
        Filter::from(Pulldown::new(depth, full_range)),
        inner.into(),
        Filter::from(Pullup::new(depth, full_range)),
    ])
}
