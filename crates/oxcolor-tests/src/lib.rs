//! # oxcolor-tests
//!
//! Property and integration tests for oxcolor.
//!
//! This crate provides:
//! - Seeded sample and pattern generators
//! - Error statistics for comparing triples and pixel buffers
//!
//! ## Test Categories
//!
//! 1. **Properties**: round trips, involutions, identities over random samples
//! 2. **Spaces**: derived matrices and white points of the named spaces
//! 3. **LUT format**: addressing, sizes, serialization and population
//! 4. **Pixel apply**: buffer paths against direct evaluation

pub mod accuracy;
pub mod patterns;

pub use accuracy::{ErrorStats, channel_error, compare_rgb8};
pub use patterns::{TestPattern, generate_pattern, random_rgb, random_xyz};
