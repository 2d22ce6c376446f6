//! Fixed-size RGBA raster buffer.
//!
//! A `Raster` is a value-like grid of 8-bit RGBA samples stored as an
//! `(height, width, 4)` array in row-major order. Every operation in this
//! crate takes a raster by reference and returns a freshly allocated output
//! of the same dimensions; inputs are never mutated and input/output buffers
//! are never aliased.
//!
//! ## Invariants
//!
//! - `width >= 1` and `height >= 1`, enforced at construction.
//! - The alpha channel is fully opaque (255) after every operation; the
//!   write API forces it. Alpha is never used for blending here.
//! - Coordinates passed to `get`/`rgb`/`set_rgb` must already be clamped to
//!   `[0, W) x [0, H)` by the caller; out-of-range access is a contract
//!   violation and panics via the underlying bounds check.

use image::{Rgba, RgbaImage};
use ndarray::{s, Array3};

use crate::error::{Error, Result};

/// Owned RGBA pixel grid, stored as `(height, width, 4)` u8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    data: Array3<u8>,
}

impl Raster {
    /// Allocate a zero-filled raster with opaque alpha.
    ///
    /// # Arguments
    /// * `width` - Grid width in pixels, must be >= 1
    /// * `height` - Grid height in pixels, must be >= 1
    pub fn new(width: usize, height: usize) -> Result<Raster> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyRaster(width, height));
        }
        let mut data = Array3::<u8>::zeros((height, width, 4));
        data.slice_mut(s![.., .., 3]).fill(255);
        Ok(Raster { data })
    }

    /// Blank raster with the same dimensions as `self`.
    pub(crate) fn blank_like(&self) -> Raster {
        let mut data = Array3::<u8>::zeros(self.data.raw_dim());
        data.slice_mut(s![.., .., 3]).fill(255);
        Raster { data }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Full RGBA sample at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        [
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
            self.data[[y, x, 3]],
        ]
    }

    /// Color channels at `(x, y)`.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> (u8, u8, u8) {
        (
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
        )
    }

    /// Write the color channels at `(x, y)`; alpha is forced opaque.
    #[inline]
    pub fn set_rgb(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8) {
        self.data[[y, x, 0]] = r;
        self.data[[y, x, 1]] = g;
        self.data[[y, x, 2]] = b;
        self.data[[y, x, 3]] = 255;
    }

    /// Sample with the flat-index boundary policy used by convolution.
    ///
    /// The flat pixel index `y * W + x` is clamped into `[0, W*H - 1]` as a
    /// whole, not per axis. Reads past the left edge of a row land on the
    /// previous row's last pixel and reads past either end of the buffer
    /// land on its first/last pixel. The wrap is deliberate; edge output
    /// depends on it, so it must not be replaced with a per-axis
    /// neighbor-replication clamp.
    pub fn sample_flat(&self, x: isize, y: isize) -> (u8, u8, u8) {
        let w = self.width() as isize;
        let h = self.height() as isize;
        let flat = (y * w + x).clamp(0, w * h - 1);
        self.rgb((flat % w) as usize, (flat / w) as usize)
    }

    /// Scale into a new raster by direct index mapping.
    ///
    /// Each destination pixel `(x, y)` copies the source pixel at
    /// `(x * srcW / dstW, y * srcH / dstH)`; no interpolation. Source reads
    /// cannot go out of range because the indices are computed from
    /// destination coordinates scaled into source space.
    pub fn resized(&self, width: usize, height: usize) -> Result<Raster> {
        let mut out = Raster::new(width, height)?;
        for y in 0..height {
            let sy = y * self.height() / height;
            for x in 0..width {
                let sx = x * self.width() / width;
                let (r, g, b) = self.rgb(sx, sy);
                out.set_rgb(x, y, r, g, b);
            }
        }
        Ok(out)
    }

    /// Import a frame handed over by the source-frame provider.
    pub fn from_rgba_image(img: &RgbaImage) -> Result<Raster> {
        let mut out = Raster::new(img.width() as usize, img.height() as usize)?;
        for (x, y, px) in img.enumerate_pixels() {
            out.set_rgb(x as usize, y as usize, px[0], px[1], px[2]);
        }
        Ok(out)
    }

    /// Export for the driver's display layer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width() as u32, self.height() as u32);
        for y in 0..self.height() {
            for x in 0..self.width() {
                img.put_pixel(x as u32, y as u32, Rgba(self.get(x, y)));
            }
        }
        img
    }

    pub(crate) fn pixels(&self) -> &Array3<u8> {
        &self.data
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut Array3<u8> {
        &mut self.data
    }
}
