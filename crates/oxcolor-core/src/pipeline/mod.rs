//! Filter composition
//!
//! Everything that transforms a [`Triple`](crate::color::Triple) is a filter
//! of one of two shapes:
//!
//! ```text
//! SingleFilter:  f64 → f64, broadcast over channels a, b, c
//! TripleFilter:  Triple → Result<Triple>
//! ```
//!
//! [`Chain`] composes any mix of both into one callable transform,
//! [`Multiplex`] applies three single-channel filters positionally, and
//! [`pipeline`] wraps a transform between fixed-point pull-down and pull-up.

mod chain;
mod convert;
mod filter;
mod quantize;
mod simple;

pub use chain::{Chain, Multiplex, chain_single};
pub use convert::{xyz_to_yxy, yxy_to_xyz};
pub use filter::{Filter, SingleFilter, SingleFn, TripleFilter, TripleFn};
pub use quantize::{Pulldown, Pullup, pipeline, quantization_range};
pub use simple::{Clamp, Scale, Swap, SwapMode, grayscale, identity, invert};
