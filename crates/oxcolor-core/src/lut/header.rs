//! 3DL2 file header
//!
//! The header is a fixed 232-byte record at offset 0. Every multi-byte field
//! is little-endian on disk.
//!
//! ```text
//! 0    signature             [u8; 4]   "3DL2"
//! 4    file_version          i32       2
//! 8    program_name          [u8; 32]  NUL padded
//! 40   program_version       i64
//! 48   input_bit_depth       [i32; 3]  channels A, B, C
//! 60   input_color_encoding  i32       0 = BGR, 1 = YCbCr
//! 64   input_value_range     i32       0 = full, 1 = limited
//! 68   output_bit_depth      i32       8, 16, 32, 64
//! 72   output_color_encoding i32       0 = BGR, 1 = YCbCr, 2 = XYZ
//! 76   output_value_range    i32
//! 80   parameters_offset     i32
//! 84   parameters_size       i32
//! 88   lut_offset            i32
//! 92   compression_method    i32       0 = none, 1 = LZO
//! 96   compressed_size       i32
//! 100  uncompressed_size     i32
//! 104  input_color_space     [f64; 8]  rx ry gx gy bx by wx wy, zero = unknown
//! 168  output_color_space    [f64; 8]
//! ```

use bytemuck::{Pod, Zeroable};

use crate::{Error, Result};

/// File signature
pub const SIGNATURE: [u8; 4] = *b"3DL2";

/// Supported format version
pub const FILE_VERSION: i32 = 2;

/// Encoded header size in bytes
pub const HEADER_SIZE: usize = std::mem::size_of::<RawHeader>();

/// Where the parameters blob starts
pub const PARAMETERS_FILE_OFFSET: usize = 256;

/// Where the payload starts (16 KiB aligned)
pub const LUT_FILE_OFFSET: usize = 16384;

/// Payload stored as is
pub const COMPRESSION_NONE: i32 = 0;

/// LZO-compressed payload; declared by the format, never produced or read
pub const COMPRESSION_LZO: i32 = 1;

/// Channel encoding of LUT input or output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorEncoding {
    /// Device RGB stored B, G, R
    #[default]
    Bgr,
    /// Y′CbCr (declared only)
    YCbCr,
    /// CIE XYZ, output only
    Xyz,
}

impl ColorEncoding {
    /// Header code
    pub const fn code(&self) -> i32 {
        match self {
            ColorEncoding::Bgr => 0,
            ColorEncoding::YCbCr => 1,
            ColorEncoding::Xyz => 2,
        }
    }

    /// Parse a header code
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(ColorEncoding::Bgr),
            1 => Ok(ColorEncoding::YCbCr),
            2 => Ok(ColorEncoding::Xyz),
            other => Err(Error::UnsupportedEncoding(other)),
        }
    }
}

/// Sample value range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueRange {
    /// 0 ..= 2^depth − 1 (integers), 0 ..= 1 (floats)
    #[default]
    Full,
    /// 16 ..= 235 shifted to the bit depth (integers), 16/255 ..= 235/255 (floats)
    Limited,
}

impl ValueRange {
    /// Header code
    pub const fn code(&self) -> i32 {
        match self {
            ValueRange::Full => 0,
            ValueRange::Limited => 1,
        }
    }

    /// Parse a header code
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(ValueRange::Full),
            1 => Ok(ValueRange::Limited),
            other => Err(Error::InvalidLut(format!("unknown value range {other}"))),
        }
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        matches!(self, ValueRange::Full)
    }
}

/// Payload element type, selected by the output bit depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDepth {
    U8,
    U16,
    F32,
    F64,
}

impl OutputDepth {
    /// Select by bit depth (8, 16, 32 or 64)
    pub fn from_bits(bits: i32) -> Result<Self> {
        match bits {
            8 => Ok(OutputDepth::U8),
            16 => Ok(OutputDepth::U16),
            32 => Ok(OutputDepth::F32),
            64 => Ok(OutputDepth::F64),
            other => Err(Error::UnsupportedBitDepth(other)),
        }
    }

    pub const fn bits(&self) -> u32 {
        match self {
            OutputDepth::U8 => 8,
            OutputDepth::U16 => 16,
            OutputDepth::F32 => 32,
            OutputDepth::F64 => 64,
        }
    }

    /// Element width in bytes
    pub const fn bytes(&self) -> usize {
        self.bits() as usize / 8
    }

    /// Float payloads hold normalized values rather than integer codes
    pub const fn is_float(&self) -> bool {
        matches!(self, OutputDepth::F32 | OutputDepth::F64)
    }
}

/// The header record exactly as laid out on disk
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RawHeader {
    pub signature: [u8; 4],
    pub file_version: i32,
    pub program_name: [u8; 32],
    pub program_version: i64,
    pub input_bit_depth: [i32; 3],
    pub input_color_encoding: i32,
    pub input_value_range: i32,
    pub output_bit_depth: i32,
    pub output_color_encoding: i32,
    pub output_value_range: i32,
    pub parameters_file_offset: i32,
    pub parameters_size: i32,
    pub lut_file_offset: i32,
    pub lut_compression_method: i32,
    pub lut_compressed_size: i32,
    pub lut_uncompressed_size: i32,
    pub input_color_space: [f64; 8],
    pub output_color_space: [f64; 8],
}

const _: () = assert!(std::mem::size_of::<RawHeader>() == 232);

impl RawHeader {
    /// Encode as little-endian bytes
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let le = self.swap_to_little_endian();
        let mut out = [0u8; HEADER_SIZE];
        out.copy_from_slice(bytemuck::bytes_of(&le));
        out
    }

    /// Decode from little-endian bytes; no field validation
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::InvalidLut(format!(
                "{} bytes is shorter than the {HEADER_SIZE}-byte header",
                data.len()
            )));
        }
        let raw: RawHeader = bytemuck::pod_read_unaligned(&data[..HEADER_SIZE]);
        Ok(raw.swap_to_little_endian())
    }

    /// Program name up to the first NUL
    pub fn program_name(&self) -> String {
        let end = self
            .program_name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.program_name.len());
        String::from_utf8_lossy(&self.program_name[..end]).into_owned()
    }

    /// Byte order conversion between native and little-endian; its own inverse
    fn swap_to_little_endian(&self) -> Self {
        let f = |v: [f64; 8]| v.map(|x| f64::from_bits(x.to_bits().to_le()));
        Self {
            signature: self.signature,
            file_version: self.file_version.to_le(),
            program_name: self.program_name,
            program_version: self.program_version.to_le(),
            input_bit_depth: self.input_bit_depth.map(i32::to_le),
            input_color_encoding: self.input_color_encoding.to_le(),
            input_value_range: self.input_value_range.to_le(),
            output_bit_depth: self.output_bit_depth.to_le(),
            output_color_encoding: self.output_color_encoding.to_le(),
            output_value_range: self.output_value_range.to_le(),
            parameters_file_offset: self.parameters_file_offset.to_le(),
            parameters_size: self.parameters_size.to_le(),
            lut_file_offset: self.lut_file_offset.to_le(),
            lut_compression_method: self.lut_compression_method.to_le(),
            lut_compressed_size: self.lut_compressed_size.to_le(),
            lut_uncompressed_size: self.lut_uncompressed_size.to_le(),
            input_color_space: f(self.input_color_space),
            output_color_space: f(self.output_color_space),
        }
    }
}

/// Copy `name` into a NUL-padded 32-byte field, truncating if needed
pub(crate) fn encode_program_name(name: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    let bytes = name.as_bytes();
    let n = bytes.len().min(out.len());
    out[..n].copy_from_slice(&bytes[..n]);
    out
}
