//! LUT payload storage
//!
//! One flat array of output values, three per lattice point. The element
//! type is fixed by the output bit depth when the payload is created.

use rayon::prelude::*;

use super::header::OutputDepth;
use crate::{Error, Result};

/// A payload element type
pub trait Element: Copy + Default + Send + Sync + 'static {
    /// Width in bytes
    const SIZE: usize;

    /// Store a value; integer types floor and saturate
    fn from_f64(v: f64) -> Self;

    fn to_f64(self) -> f64;

    fn extend_le(self, out: &mut Vec<u8>);

    /// Decode one element from exactly `SIZE` little-endian bytes
    fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! int_element {
    ($t:ty) => {
        impl Element for $t {
            const SIZE: usize = std::mem::size_of::<$t>();

            #[inline]
            fn from_f64(v: f64) -> Self {
                // `as` saturates out-of-range values and maps NaN to 0
                v.floor() as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn extend_le(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            #[inline]
            fn read_le(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$t>()];
                buf.copy_from_slice(bytes);
                <$t>::from_le_bytes(buf)
            }
        }
    };
}

macro_rules! float_element {
    ($t:ty) => {
        impl Element for $t {
            const SIZE: usize = std::mem::size_of::<$t>();

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn extend_le(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            #[inline]
            fn read_le(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$t>()];
                buf.copy_from_slice(bytes);
                <$t>::from_le_bytes(buf)
            }
        }
    };
}

int_element!(u8);
int_element!(u16);
float_element!(f32);
float_element!(f64);

/// Output values of every lattice point
#[derive(Debug, Clone, PartialEq)]
pub enum LutData {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

/// Run `$body` with `$v` bound to the inner vector, whatever its type
macro_rules! with_data {
    ($data:expr, $v:ident => $body:expr) => {
        match $data {
            LutData::U8($v) => $body,
            LutData::U16($v) => $body,
            LutData::F32($v) => $body,
            LutData::F64($v) => $body,
        }
    };
}

impl LutData {
    /// Zero-filled payload of `len` elements
    pub fn zeroed(depth: OutputDepth, len: usize) -> Self {
        match depth {
            OutputDepth::U8 => LutData::U8(vec![0; len]),
            OutputDepth::U16 => LutData::U16(vec![0; len]),
            OutputDepth::F32 => LutData::F32(vec![0.0; len]),
            OutputDepth::F64 => LutData::F64(vec![0.0; len]),
        }
    }

    pub fn depth(&self) -> OutputDepth {
        match self {
            LutData::U8(_) => OutputDepth::U8,
            LutData::U16(_) => OutputDepth::U16,
            LutData::F32(_) => OutputDepth::F32,
            LutData::F64(_) => OutputDepth::F64,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        with_data!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encoded size in bytes
    pub fn byte_len(&self) -> usize {
        self.len() * self.depth().bytes()
    }

    /// Element at `index` as f64
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        with_data!(self, v => v.get(index).map(|e| e.to_f64()))
    }

    /// Store `value` at `index`; false when out of bounds
    #[inline]
    pub fn set(&mut self, index: usize, value: f64) -> bool {
        with_data!(self, v => set_element(v, index, value))
    }

    /// Fill every 3-element group in parallel
    ///
    /// `f` receives the group index (lattice point) and returns the three
    /// values to store. Stops at an error, whichever point raised it.
    pub fn par_fill<F>(&mut self, f: F) -> Result<()>
    where
        F: Fn(usize) -> Result<[f64; 3]> + Send + Sync,
    {
        with_data!(self, v => fill_chunks(v, &f))
    }

    /// Little-endian encoding
    pub fn to_le_bytes(&self) -> Vec<u8> {
        with_data!(self, v => encode(v))
    }

    /// Decode a little-endian payload of `depth` elements
    pub fn from_le_bytes(depth: OutputDepth, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % depth.bytes() != 0 {
            return Err(Error::InvalidLut(format!(
                "payload of {} bytes is not a whole number of {}-byte elements",
                bytes.len(),
                depth.bytes()
            )));
        }
        Ok(match depth {
            OutputDepth::U8 => LutData::U8(bytes.to_vec()),
            OutputDepth::U16 => LutData::U16(decode(bytes)),
            OutputDepth::F32 => LutData::F32(decode(bytes)),
            OutputDepth::F64 => LutData::F64(decode(bytes)),
        })
    }
}

#[inline]
fn set_element<T: Element>(v: &mut [T], index: usize, value: f64) -> bool {
    match v.get_mut(index) {
        Some(slot) => {
            *slot = T::from_f64(value);
            true
        }
        None => false,
    }
}

fn fill_chunks<T, F>(v: &mut [T], f: &F) -> Result<()>
where
    T: Element,
    F: Fn(usize) -> Result<[f64; 3]> + Send + Sync,
{
    v.par_chunks_mut(3)
        .enumerate()
        .try_for_each(|(point, chunk)| {
            let values = f(point)?;
            for (slot, value) in chunk.iter_mut().zip(values) {
                *slot = T::from_f64(value);
            }
            Ok(())
        })
}

fn encode<T: Element>(v: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(v.len() * T::SIZE);
    for &e in v {
        e.extend_le(&mut out);
    }
    out
}

fn decode<T: Element>(bytes: &[u8]) -> Vec<T> {
    bytes.chunks_exact(T::SIZE).map(T::read_le).collect()
}
