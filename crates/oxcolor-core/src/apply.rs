//! Applying filters to pixel buffers
//!
//! Pixels are device RGB in storage units (0..=255 for 8-bit). Every entry
//! point wraps the caller's filter as
//!
//! ```text
//! pulldown(depth, full) → filter → clamp(0, 1) → pullup(depth, full) → floor
//! ```
//!
//! so the filter always sees normalized values.

use multiversion::multiversion;
use rayon::prelude::*;

use crate::color::{Rgb, Triple};
use crate::pipeline::{Chain, Clamp, Filter, TripleFn, pipeline};
use crate::{Error, Result};

/// Pixels per parallel work item in [`apply_rgb8`]
const BLOCK_PIXELS: usize = 4096;

/// A 2D buffer of device RGB samples
pub trait PixelBuffer {
    /// Width and height
    fn dimensions(&self) -> (u32, u32);

    /// Sample at (x, y) in storage units
    fn get_rgb(&self, x: u32, y: u32) -> [f64; 3];

    /// Store a sample at (x, y); values are already floored
    fn set_rgb(&mut self, x: u32, y: u32, rgb: [f64; 3]);
}

/// `pipeline(depth, full, [filter, clamp(0, 1)])`, resolved
fn pixel_function(filter: Filter, depth: u32) -> TripleFn {
    let inner = Chain::new([filter, Filter::from(Clamp::new(0.0, 1.0))]);
    pipeline(depth, true, inner).filter().function()
}

#[inline]
fn expect_rgb(t: Triple) -> Result<Rgb> {
    match t {
        Triple::Rgb(rgb) => Ok(rgb),
        other => Err(Error::unsupported("pixel output", other.kind())),
    }
}

/// Run `filter` over every pixel of `buffer` at bit depth `depth`
pub fn apply_to_buffer<B>(buffer: &mut B, filter: impl Into<Filter>, depth: u32) -> Result<()>
where
    B: PixelBuffer + ?Sized,
{
    let f = pixel_function(filter.into(), depth);
    let (width, height) = buffer.dimensions();
    for y in 0..height {
        for x in 0..width {
            let input = Triple::Rgb(Rgb::from(buffer.get_rgb(x, y)));
            let out = expect_rgb(f(input)?)?;
            buffer.set_rgb(x, y, [out.r.floor(), out.g.floor(), out.b.floor()]);
        }
    }
    Ok(())
}

/// Run `filter` over interleaved 8-bit RGB, in place and in parallel
pub fn apply_rgb8(data: &mut [u8], filter: impl Into<Filter>) -> Result<()> {
    if data.len() % 3 != 0 {
        return Err(Error::BufferSize {
            expected: data.len() / 3 * 3,
            actual: data.len(),
        });
    }
    let f = pixel_function(filter.into(), 8);
    data.par_chunks_mut(3 * BLOCK_PIXELS)
        .try_for_each(|block| transform_rgb8_block(block, |t| f(t)))
}

/// Transform a block of interleaved 8-bit RGB in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn transform_rgb8_block<F>(block: &mut [u8], f: F) -> Result<()>
where
    F: Fn(Triple) -> Result<Triple>,
{
    for px in block.chunks_exact_mut(3) {
        let input = Triple::Rgb(Rgb::from_u8([px[0], px[1], px[2]]));
        let out = expect_rgb(f(input)?)?.to_u8_floor();
        px.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(feature = "image")]
impl PixelBuffer for image::RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        image::RgbImage::dimensions(self)
    }

    fn get_rgb(&self, x: u32, y: u32) -> [f64; 3] {
        let [r, g, b] = self.get_pixel(x, y).0;
        [r as f64, g as f64, b as f64]
    }

    fn set_rgb(&mut self, x: u32, y: u32, rgb: [f64; 3]) {
        self.put_pixel(x, y, image::Rgb(Rgb::from(rgb).to_u8_floor()));
    }
}
