//! Error types for oxcolor

use crate::color::ColorKind;
use thiserror::Error;

/// Result type for oxcolor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxcolor operations
///
/// All of these are configuration errors raised where they are detected.
/// Nothing in the crate retries or recovers from them.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An operation received a triple variant it cannot process
    #[error("{operation}: unsupported color kind {kind}")]
    UnsupportedColorKind {
        operation: &'static str,
        kind: ColorKind,
    },

    /// LUT output bit depth outside {8, 16, 32, 64}
    #[error("Unsupported output bit depth: {0}")]
    UnsupportedBitDepth(i32),

    /// Unknown color encoding code in a LUT header
    #[error("Unsupported color encoding: {0}")]
    UnsupportedEncoding(i32),

    /// LUT payload compression other than "none"
    #[error("Unsupported LUT compression method: {0}")]
    UnsupportedCompression(i32),

    /// Zero chromaticity denominator or singular primaries
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    /// Parameter outside the domain of an operation
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed 3DL2 data
    #[error("Invalid LUT: {0}")]
    InvalidLut(String),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for [`Error::UnsupportedColorKind`]
    pub(crate) fn unsupported(operation: &'static str, kind: ColorKind) -> Self {
        Self::UnsupportedColorKind { operation, kind }
    }
}
