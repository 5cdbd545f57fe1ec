//! Mathematical operations for color management
//!
//! This module provides the building blocks every colorimetric transform uses:
//! - 3x3 matrix operations for RGB↔XYZ transforms
//! - Tone reproduction curves
//! - Chromatic adaptation

pub mod chromatic_adaptation;
pub mod curves;
pub mod matrix;

pub use chromatic_adaptation::{AdaptationBasis, ChromaticAdapter};
pub use curves::{Curve, LStarMode};
pub use matrix::Matrix3x3;
