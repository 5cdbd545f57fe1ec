//! 3DL2 lookup tables
//!
//! A header, an optional parameters blob and a flat payload of output
//! triples addressed by quantized input coordinates. See [`header`] for the
//! byte layout.

pub mod header;
mod lut3d;
mod payload;

pub use header::{ColorEncoding, OutputDepth, RawHeader, ValueRange};
pub use lut3d::{Lut3d, LutOptions, LutState, MAX_INPUT_DEPTH, PopulateMode};
pub use payload::{Element, LutData};
