//! # oxcolor - color-space algebra and 3D LUT generation
//!
//! Colors as RGB, XYZ or Yxy triples; matrix-based conversions between RGB
//! working spaces; tone curves; chromatic adaptation; and a filter protocol
//! that composes all of these into one transform. A transform can run on
//! pixel buffers directly or be baked into a 3DL2 lookup table.
//!
//! ## Quick Start
//!
//! ```no_run
//! use oxcolor_core::lut::{Lut3d, LutOptions, PopulateMode};
//! use oxcolor_core::math::{AdaptationBasis, ChromaticAdapter};
//! use oxcolor_core::color::white_point::{D50, D65};
//! use oxcolor_core::pipeline::Chain;
//! use oxcolor_core::space::{ROMM, SRGB};
//!
//! // sRGB → ProPhoto, adapting D65 to D50 in between
//! let transform = Chain::new([
//!     SRGB.decoder()?,
//!     ChromaticAdapter::between(&D65, &D50, AdaptationBasis::Bradford)?.filter(),
//!     ROMM.encoder()?,
//! ]);
//!
//! let mut lut = Lut3d::new(&LutOptions::default().with_spaces(Some(SRGB), Some(ROMM)))?;
//! lut.populate(transform, PopulateMode::Pipeline)?;
//! let bytes = lut.to_bytes();
//! # Ok::<(), oxcolor_core::Error>(())
//! ```

pub mod apply;
pub mod color;
pub mod error;
pub mod lut;
pub mod math;
pub mod pipeline;
pub mod space;

pub use apply::{PixelBuffer, apply_rgb8, apply_to_buffer};
pub use color::{ColorKind, Rgb, Triple, WhitePoint, Xyz, Yxy, luminance};
pub use error::{Error, Result};
pub use lut::{Lut3d, LutOptions, PopulateMode};
pub use math::{AdaptationBasis, ChromaticAdapter, Curve, LStarMode, Matrix3x3};
pub use pipeline::{Chain, Filter, Multiplex, SingleFilter, TripleFilter, pipeline};
pub use space::Space;

/// Version of oxcolor
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
