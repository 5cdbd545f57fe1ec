//! Color value types
//!
//! This module provides:
//! - Device RGB, CIE XYZ and CIE Yxy value types
//! - [`Triple`], the sum type carried through filters
//! - Named white points

pub mod rgb;
pub mod triple;
pub mod white_point;
pub mod xyz;
pub mod yxy;

pub use rgb::Rgb;
pub use triple::{ColorKind, Triple, luminance};
pub use white_point::{D50, D65, WhitePoint};
pub use xyz::Xyz;
pub use yxy::Yxy;
