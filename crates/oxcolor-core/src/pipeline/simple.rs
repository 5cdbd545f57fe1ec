//! Basic filters

use super::filter::{Filter, SingleFilter, TripleFilter};
use crate::color::luminance;

/// Returns its argument unchanged
pub fn identity() -> SingleFilter {
    SingleFilter::new(|v| v)
}

/// 1 − v, inverting a value on the [0, 1] scale
pub fn invert() -> SingleFilter {
    SingleFilter::new(|v| 1.0 - v)
}

/// Replace every channel with the triple's luminance
pub fn grayscale() -> TripleFilter {
    TripleFilter::new(|t| {
        let l = luminance(&t);
        Ok(t.make_like(l, l, l))
    })
}

/// Clamp each channel to [lower, upper]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamp {
    pub lower: f64,
    pub upper: f64,
}

impl Clamp {
    /// Clamp to [lower, upper]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Single-channel filter form
    pub fn single(&self) -> SingleFilter {
        let Self { lower, upper } = *self;
        SingleFilter::new(move |v| v.min(upper).max(lower))
    }
}

impl From<Clamp> for Filter {
    fn from(c: Clamp) -> Self {
        Filter::Single(c.single())
    }
}

/// Map [0, 1] linearly onto [lower, upper]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub lower: f64,
    pub upper: f64,
}

impl Scale {
    /// Map [0, 1] onto [lower, upper]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Single-channel filter form
    pub fn single(&self) -> SingleFilter {
        let Self { lower, upper } = *self;
        SingleFilter::new(move |v| v * (upper - lower) + lower)
    }
}

impl From<Scale> for Filter {
    fn from(s: Scale) -> Self {
        Filter::Single(s.single())
    }
}

/// A pair of channel positions to exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapMode {
    AB,
    AC,
    BC,
}

/// Channel swaps applied in order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Swap(pub Vec<SwapMode>);

impl Swap {
    /// Whole-triple filter form
    pub fn filter(&self) -> TripleFilter {
        let modes = self.0.clone();
        TripleFilter::new(move |t| {
            let (mut a, mut b, mut c) = t.decompose();
            for mode in &modes {
                match mode {
                    SwapMode::AB => std::mem::swap(&mut a, &mut b),
                    SwapMode::AC => std::mem::swap(&mut a, &mut c),
                    SwapMode::BC => std::mem::swap(&mut b, &mut c),
                }
            }
            Ok(t.make_like(a, b, c))
        })
    }
}

impl From<Swap> for Filter {
    fn from(s: Swap) -> Self {
        Filter::Triple(s.filter())
    }
}
