//! Filter capability shapes
//!
//! A filter is either single-channel (`f64 → f64`, broadcast to all three
//! channels) or whole-triple (`Triple → Result<Triple>`). Both are cheap to
//! clone; the closures sit behind an [`Arc`] and capture only immutable state.

use std::fmt;
use std::sync::Arc;

use crate::Result;
use crate::color::Triple;

/// Shared single-channel function
pub type SingleFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Shared whole-triple function
pub type TripleFn = Arc<dyn Fn(Triple) -> Result<Triple> + Send + Sync>;

/// A scalar filter applied identically to each channel
#[derive(Clone)]
pub struct SingleFilter(SingleFn);

impl SingleFilter {
    /// Wrap a scalar function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Evaluate on one scalar
    #[inline]
    pub fn eval(&self, v: f64) -> f64 {
        (self.0)(v)
    }

    /// The shared function
    #[inline]
    pub fn function(&self) -> SingleFn {
        Arc::clone(&self.0)
    }

    /// Whole-triple form: decompose, apply to each channel, rebuild same kind
    pub fn broadcast(&self) -> TripleFilter {
        let f = self.function();
        TripleFilter::new(move |t| {
            let (a, b, c) = t.decompose();
            Ok(t.make_like(f(a), f(b), f(c)))
        })
    }

    /// Compose: `self` first, then `next`
    pub fn then(&self, next: &SingleFilter) -> SingleFilter {
        let (f, g) = (self.function(), next.function());
        SingleFilter::new(move |v| g(f(v)))
    }
}

impl fmt::Debug for SingleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SingleFilter(..)")
    }
}

/// A filter over a whole triple
#[derive(Clone)]
pub struct TripleFilter(TripleFn);

impl TripleFilter {
    /// Wrap a whole-triple function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Triple) -> Result<Triple> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Evaluate on one triple
    #[inline]
    pub fn apply(&self, input: Triple) -> Result<Triple> {
        (self.0)(input)
    }

    /// The shared function
    #[inline]
    pub fn function(&self) -> TripleFn {
        Arc::clone(&self.0)
    }
}

impl fmt::Debug for TripleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TripleFilter(..)")
    }
}

/// Any filter-like element of a chain
#[derive(Debug, Clone)]
pub enum Filter {
    /// Per-channel scalar filter
    Single(SingleFilter),
    /// Whole-triple filter
    Triple(TripleFilter),
}

impl Filter {
    /// Single-channel filter from a closure
    pub fn single<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Filter::Single(SingleFilter::new(f))
    }

    /// Whole-triple filter from a closure
    pub fn triple<F>(f: F) -> Self
    where
        F: Fn(Triple) -> Result<Triple> + Send + Sync + 'static,
    {
        Filter::Triple(TripleFilter::new(f))
    }

    /// Resolve to a whole-triple function
    pub fn resolve(&self) -> TripleFn {
        match self {
            Filter::Single(s) => s.broadcast().function(),
            Filter::Triple(t) => t.function(),
        }
    }

    /// Evaluate on one triple
    pub fn apply(&self, input: Triple) -> Result<Triple> {
        match self {
            Filter::Single(s) => {
                let (a, b, c) = input.decompose();
                Ok(input.make_like(s.eval(a), s.eval(b), s.eval(c)))
            }
            Filter::Triple(t) => t.apply(input),
        }
    }
}

impl From<SingleFilter> for Filter {
    fn from(f: SingleFilter) -> Self {
        Filter::Single(f)
    }
}

impl From<TripleFilter> for Filter {
    fn from(f: TripleFilter) -> Self {
        Filter::Triple(f)
    }
}

impl From<SingleFilter> for TripleFilter {
    fn from(f: SingleFilter) -> Self {
        f.broadcast()
    }
}

impl From<Filter> for TripleFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Single(s) => s.broadcast(),
            Filter::Triple(t) => t,
        }
    }
}
