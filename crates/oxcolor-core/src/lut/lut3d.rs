//! 3D lookup table generation
//!
//! A [`Lut3d`] goes through three states:
//!
//! ```text
//! new()        → header filled, payload zeroed
//! populate()   → every lattice point evaluated
//! to_bytes()   → serialized 3DL2 file
//! ```
//!
//! Raw writes through [`Lut3d::set_output_raw`] are allowed at any time.

use std::io::Write;

use tracing::{debug, warn};

use super::header::{
    COMPRESSION_NONE, ColorEncoding, FILE_VERSION, HEADER_SIZE, LUT_FILE_OFFSET, OutputDepth,
    PARAMETERS_FILE_OFFSET, RawHeader, SIGNATURE, ValueRange, encode_program_name,
};
use super::payload::LutData;
use crate::color::{ColorKind, Rgb, Triple, Xyz};
use crate::pipeline::{Chain, Filter, Multiplex, Pulldown, Pullup, Scale, TripleFn};
use crate::space::Space;
use crate::{Error, Result};

/// Largest accepted per-channel input depth
pub const MAX_INPUT_DEPTH: u32 = 16;

/// Construction options for a [`Lut3d`]
#[derive(Debug, Clone, PartialEq)]
pub struct LutOptions {
    /// Bits per input channel A, B, C
    pub input_depth: [u32; 3],
    /// 8, 16, 32 or 64
    pub output_depth: i32,
    pub input_encoding: ColorEncoding,
    pub output_encoding: ColorEncoding,
    pub input_range: ValueRange,
    pub output_range: ValueRange,
    /// Recorded in the header, not used for evaluation
    pub input_space: Option<Space>,
    /// Recorded in the header unless the output is XYZ
    pub output_space: Option<Space>,
    pub program_name: String,
    pub program_version: i64,
    /// Opaque metadata stored after the header
    pub parameters: Vec<u8>,
}

impl Default for LutOptions {
    fn default() -> Self {
        Self {
            input_depth: [8, 8, 8],
            output_depth: 16,
            input_encoding: ColorEncoding::Bgr,
            output_encoding: ColorEncoding::Bgr,
            input_range: ValueRange::Full,
            output_range: ValueRange::Full,
            input_space: None,
            output_space: None,
            program_name: "oxcolor".to_string(),
            program_version: 100,
            parameters: Vec::new(),
        }
    }
}

impl LutOptions {
    /// Set the per-channel input depths
    pub fn with_input_depth(mut self, depth: [u32; 3]) -> Self {
        self.input_depth = depth;
        self
    }

    /// Set the output depth
    pub fn with_output_depth(mut self, bits: i32) -> Self {
        self.output_depth = bits;
        self
    }

    /// Set input and output encodings
    pub fn with_encodings(mut self, input: ColorEncoding, output: ColorEncoding) -> Self {
        self.input_encoding = input;
        self.output_encoding = output;
        self
    }

    /// Set input and output value ranges
    pub fn with_ranges(mut self, input: ValueRange, output: ValueRange) -> Self {
        self.input_range = input;
        self.output_range = output;
        self
    }

    /// Set input and output spaces for the header
    pub fn with_spaces(mut self, input: Option<Space>, output: Option<Space>) -> Self {
        self.input_space = input;
        self.output_space = output;
        self
    }

    /// Set program identity
    pub fn with_program(mut self, name: impl Into<String>, version: i64) -> Self {
        self.program_name = name.into();
        self.program_version = version;
        self
    }

    /// Set the parameters blob
    pub fn with_parameters(mut self, parameters: Vec<u8>) -> Self {
        self.parameters = parameters;
        self
    }
}

/// How [`Lut3d::populate`] feeds the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopulateMode {
    /// Normalize lattice coordinates to [0, 1] and re-quantize the result to
    /// the output depth and range
    #[default]
    Pipeline,
    /// Evaluate on raw lattice coordinates and store the result as is
    Raw,
}

/// Lifecycle of a [`Lut3d`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutState {
    /// Header filled, payload zeroed
    Header,
    /// Every lattice point written
    Populated,
}

/// A 3DL2 lookup table
#[derive(Debug, Clone)]
pub struct Lut3d {
    header: RawHeader,
    input_depth: [u32; 3],
    output_depth: OutputDepth,
    input_encoding: ColorEncoding,
    output_encoding: ColorEncoding,
    input_range: ValueRange,
    output_range: ValueRange,
    parameters: Vec<u8>,
    data: LutData,
    state: LutState,
}

impl Lut3d {
    /// Build the header and a zeroed payload
    pub fn new(options: &LutOptions) -> Result<Self> {
        let output_depth = OutputDepth::from_bits(options.output_depth)?;
        let uncompressed = payload_size(options.input_depth, output_depth)?;
        if options.parameters.len() > LUT_FILE_OFFSET - PARAMETERS_FILE_OFFSET {
            return Err(Error::InvalidParameter(format!(
                "parameters blob of {} bytes does not fit before the payload",
                options.parameters.len()
            )));
        }

        let input_space = match &options.input_space {
            Some(space) => space.primaries()?,
            None => [0.0; 8],
        };
        let output_space = match (&options.output_space, options.output_encoding) {
            (Some(space), enc) if enc != ColorEncoding::Xyz => space.primaries()?,
            _ => [0.0; 8],
        };

        let header = RawHeader {
            signature: SIGNATURE,
            file_version: FILE_VERSION,
            program_name: encode_program_name(&options.program_name),
            program_version: options.program_version,
            input_bit_depth: options.input_depth.map(|d| d as i32),
            input_color_encoding: options.input_encoding.code(),
            input_value_range: options.input_range.code(),
            output_bit_depth: options.output_depth,
            output_color_encoding: options.output_encoding.code(),
            output_value_range: options.output_range.code(),
            parameters_file_offset: PARAMETERS_FILE_OFFSET as i32,
            parameters_size: options.parameters.len() as i32,
            lut_file_offset: LUT_FILE_OFFSET as i32,
            lut_compression_method: COMPRESSION_NONE,
            lut_compressed_size: uncompressed as i32,
            lut_uncompressed_size: uncompressed as i32,
            input_color_space: input_space,
            output_color_space: output_space,
        };

        let elements = uncompressed / output_depth.bytes();
        debug!(
            input_depth = ?options.input_depth,
            output_depth = options.output_depth,
            bytes = uncompressed,
            "created 3D LUT"
        );

        Ok(Self {
            header,
            input_depth: options.input_depth,
            output_depth,
            input_encoding: options.input_encoding,
            output_encoding: options.output_encoding,
            input_range: options.input_range,
            output_range: options.output_range,
            parameters: options.parameters.clone(),
            data: LutData::zeroed(output_depth, elements),
            state: LutState::Header,
        })
    }

    pub fn header(&self) -> &RawHeader {
        &self.header
    }

    pub fn data(&self) -> &LutData {
        &self.data
    }

    pub fn parameters(&self) -> &[u8] {
        &self.parameters
    }

    pub fn state(&self) -> LutState {
        self.state
    }

    pub fn input_depth(&self) -> [u32; 3] {
        self.input_depth
    }

    pub fn output_depth(&self) -> OutputDepth {
        self.output_depth
    }

    pub fn output_encoding(&self) -> ColorEncoding {
        self.output_encoding
    }

    /// Number of lattice points
    pub fn lattice_points(&self) -> usize {
        1 << self.input_depth.iter().sum::<u32>()
    }

    /// Payload index of the output triple for input coordinates (a, b, c)
    ///
    /// `3 · (c << (d0 + d1) + b << d0 + a)`
    #[inline]
    pub fn offset(&self, a: usize, b: usize, c: usize) -> usize {
        let [d0, d1, _] = self.input_depth;
        3 * ((c << (d0 + d1)) + (b << d0) + a)
    }

    /// Lattice coordinates (a, b, c) of a point index
    #[inline]
    fn coordinates(&self, point: usize) -> (usize, usize, usize) {
        let [d0, d1, _] = self.input_depth;
        let a = point & ((1 << d0) - 1);
        let b = (point >> d0) & ((1 << d1) - 1);
        let c = point >> (d0 + d1);
        (a, b, c)
    }

    /// Store an output triple at a payload index
    ///
    /// BGR output takes an RGB triple, stored B, G, R. XYZ output takes XYZ
    /// or Yxy, stored X, Y, Z.
    pub fn set_output_raw(&mut self, pos: usize, output: Triple) -> Result<()> {
        let values = storage_order(self.output_encoding, output)?;
        let start = self.triple_start(pos)?;
        for (i, v) in values.into_iter().enumerate() {
            self.data.set(start + i, v);
        }
        Ok(())
    }

    /// Read the output triple at a payload index
    pub fn get_output_raw(&self, pos: usize) -> Result<Triple> {
        if self.output_encoding == ColorEncoding::YCbCr {
            return Err(Error::UnsupportedEncoding(self.output_encoding.code()));
        }
        let start = self.triple_start(pos)?;
        let read = |i: usize| self.data.get(start + i).unwrap_or_default();
        let (a, b, c) = (read(0), read(1), read(2));
        Ok(match self.output_encoding {
            ColorEncoding::Xyz => Triple::Xyz(Xyz::new(a, b, c)),
            _ => Triple::Rgb(Rgb::new(c, b, a)),
        })
    }

    /// `pos` when three elements starting there fit in the payload
    fn triple_start(&self, pos: usize) -> Result<usize> {
        let len = self.data.len();
        match pos.checked_add(3) {
            Some(end) if end <= len => Ok(pos),
            end => Err(Error::BufferSize {
                expected: end.unwrap_or(usize::MAX),
                actual: len,
            }),
        }
    }

    /// Evaluate `filter` at every lattice point and fill the payload
    pub fn populate(&mut self, filter: impl Into<Filter>, mode: PopulateMode) -> Result<()> {
        // Rejects input encodings without a lattice mapping
        self.lattice_input(0, 0, 0)?;

        let function: TripleFn = match mode {
            PopulateMode::Pipeline => self.pipeline_chain(filter.into()).filter().function(),
            PopulateMode::Raw => filter.into().resolve(),
        };

        debug!(
            points = self.lattice_points(),
            ?mode,
            "populating 3D LUT"
        );

        let [d0, d1, _] = self.input_depth;
        let encoding = self.output_encoding;
        self.data.par_fill(|point| {
            let a = point & ((1 << d0) - 1);
            let b = (point >> d0) & ((1 << d1) - 1);
            let c = point >> (d0 + d1);
            // A is blue, C is red
            let input = Triple::Rgb(Rgb::new(c as f64, b as f64, a as f64));
            storage_order(encoding, function(input)?)
        })?;

        self.state = LutState::Populated;
        debug!("3D LUT populated");
        Ok(())
    }

    /// The lattice input triple at coordinates (a, b, c)
    pub fn lattice_input(&self, a: usize, b: usize, c: usize) -> Result<Triple> {
        match self.input_encoding {
            ColorEncoding::Bgr => Ok(Triple::Rgb(Rgb::new(c as f64, b as f64, a as f64))),
            ColorEncoding::YCbCr => {
                Err(Error::unsupported("YCbCr lattice input", ColorKind::Rgb))
            }
            ColorEncoding::Xyz => Err(Error::unsupported("XYZ lattice input", ColorKind::Rgb)),
        }
    }

    /// Lattice input of a point index, for callers iterating points in order
    pub fn lattice_input_at(&self, point: usize) -> Result<Triple> {
        let (a, b, c) = self.coordinates(point);
        self.lattice_input(a, b, c)
    }

    /// `[pulldown per input channel, filter, output quantization]`
    fn pipeline_chain(&self, filter: Filter) -> Chain {
        let full_in = self.input_range.is_full();
        let [d0, d1, d2] = self.input_depth;
        // Channel a of an RGB triple is red, which sits at lattice axis C
        let pulldown = Multiplex::new(
            Pulldown::new(d2, full_in).single(),
            Pulldown::new(d1, full_in).single(),
            Pulldown::new(d0, full_in).single(),
        );

        let chain = Chain::new([Filter::from(pulldown), filter]);
        match (self.output_depth.is_float(), self.output_range) {
            (true, ValueRange::Full) => chain,
            (true, ValueRange::Limited) => chain.then(Scale::new(16.0 / 255.0, 235.0 / 255.0)),
            (false, range) => chain.then(Pullup::new(self.output_depth.bits(), range.is_full())),
        }
    }

    /// Encode the whole file
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.state != LutState::Populated {
            warn!("serializing a 3D LUT whose payload was never populated");
        }

        let payload = self.data.to_le_bytes();
        let mut out = vec![0u8; LUT_FILE_OFFSET];
        out[..HEADER_SIZE].copy_from_slice(&self.header.to_bytes());
        out[PARAMETERS_FILE_OFFSET..PARAMETERS_FILE_OFFSET + self.parameters.len()]
            .copy_from_slice(&self.parameters);
        out.extend_from_slice(&payload);

        debug!(bytes = out.len(), "serialized 3D LUT");
        out
    }

    /// Write the whole file
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Parse and validate a 3DL2 file
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header = RawHeader::parse(data)?;

        if header.signature != SIGNATURE {
            return Err(Error::InvalidLut(format!(
                "bad signature {:?}",
                header.signature
            )));
        }
        if header.file_version != FILE_VERSION {
            return Err(Error::InvalidLut(format!(
                "unsupported file version {}",
                header.file_version
            )));
        }
        if header.lut_compression_method != COMPRESSION_NONE {
            return Err(Error::UnsupportedCompression(header.lut_compression_method));
        }

        let output_depth = OutputDepth::from_bits(header.output_bit_depth)?;
        let input_encoding = ColorEncoding::from_code(header.input_color_encoding)?;
        let output_encoding = ColorEncoding::from_code(header.output_color_encoding)?;
        let input_range = ValueRange::from_code(header.input_value_range)?;
        let output_range = ValueRange::from_code(header.output_value_range)?;

        let mut input_depth = [0u32; 3];
        for (dst, &src) in input_depth.iter_mut().zip(&header.input_bit_depth) {
            *dst = u32::try_from(src)
                .map_err(|_| Error::InvalidLut(format!("negative input depth {src}")))?;
        }
        let expected = payload_size(input_depth, output_depth)?;
        if header.lut_uncompressed_size as usize != expected
            || header.lut_compressed_size != header.lut_uncompressed_size
        {
            return Err(Error::InvalidLut(format!(
                "payload size {} / {} does not match {expected} implied by the depths",
                header.lut_compressed_size, header.lut_uncompressed_size
            )));
        }

        if usize::try_from(header.parameters_size)
            .is_ok_and(|n| n > LUT_FILE_OFFSET - PARAMETERS_FILE_OFFSET)
        {
            return Err(Error::InvalidLut(format!(
                "parameters blob of {} bytes does not fit before the payload",
                header.parameters_size
            )));
        }
        let params = region(data, header.parameters_file_offset, header.parameters_size)?;
        let payload = region(data, header.lut_file_offset, header.lut_compressed_size)?;
        let parsed = LutData::from_le_bytes(output_depth, payload)?;

        // Re-serialization always uses the fixed layout
        let mut header = header;
        header.parameters_file_offset = PARAMETERS_FILE_OFFSET as i32;
        header.lut_file_offset = LUT_FILE_OFFSET as i32;

        debug!(bytes = data.len(), "parsed 3D LUT");

        Ok(Self {
            header,
            input_depth,
            output_depth,
            input_encoding,
            output_encoding,
            input_range,
            output_range,
            parameters: params.to_vec(),
            data: parsed,
            state: LutState::Populated,
        })
    }
}

/// Output values in payload order for an encoding
fn storage_order(encoding: ColorEncoding, output: Triple) -> Result<[f64; 3]> {
    match encoding {
        ColorEncoding::Bgr => match output {
            Triple::Rgb(rgb) => Ok([rgb.b, rgb.g, rgb.r]),
            other => Err(Error::unsupported("BGR output", other.kind())),
        },
        ColorEncoding::Xyz => {
            let xyz = output.to_xyz("XYZ output")?;
            Ok(xyz.to_array())
        }
        ColorEncoding::YCbCr => Err(Error::unsupported("YCbCr output", output.kind())),
    }
}

/// Uncompressed payload size: 3 · 2^(d0 + d1 + d2) · element width
fn payload_size(input_depth: [u32; 3], output_depth: OutputDepth) -> Result<usize> {
    if let Some(bad) = input_depth
        .iter()
        .find(|&&d| d == 0 || d > MAX_INPUT_DEPTH)
    {
        return Err(Error::InvalidParameter(format!(
            "input depth {bad} outside 1..={MAX_INPUT_DEPTH}"
        )));
    }
    let bits: u32 = input_depth.iter().sum();
    3usize
        .checked_shl(bits)
        .filter(|&n| n >> bits == 3)
        .and_then(|n| n.checked_mul(output_depth.bytes()))
        .filter(|&n| n <= i32::MAX as usize)
        .ok_or_else(|| {
            Error::InvalidParameter(format!(
                "payload for depths {input_depth:?} at {} bits exceeds the format limit",
                output_depth.bits()
            ))
        })
}

/// `data[offset .. offset + size]` with bounds checks
fn region(data: &[u8], offset: i32, size: i32) -> Result<&[u8]> {
    let (Ok(offset), Ok(size)) = (usize::try_from(offset), usize::try_from(size)) else {
        return Err(Error::InvalidLut(format!(
            "negative region {offset} + {size}"
        )));
    };
    let end = offset + size;
    data.get(offset..end).ok_or(Error::BufferSize {
        expected: end,
        actual: data.len(),
    })
}
