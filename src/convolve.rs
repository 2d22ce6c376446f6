//! Generic 2D convolution with the flat-index boundary policy, plus the
//! Sobel edge-detection and Gaussian blur passes built on it.
//!
//! Boundary handling clamps the computed flat pixel index into the buffer
//! as a whole (`Raster::sample_flat`), not each coordinate independently.
//! Samples past an edge wrap toward the start or end of the buffer.
//! Downstream effects depend on this exact policy; do not replace it with
//! neighbor replication.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::raster::Raster;

/// Odd-sized square convolution matrix.
///
/// Index convention: `weight(i, j)` where `i` walks the x axis and `j` the
/// y axis of the footprint.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Build a kernel from row-flattened weights.
    ///
    /// # Arguments
    /// * `size` - Footprint side length, must be odd
    /// * `weights` - `size * size` values
    pub fn new(size: usize, weights: Vec<f32>) -> Result<Kernel> {
        if size % 2 == 0 {
            return Err(Error::EvenKernel(size));
        }
        if weights.len() != size * size {
            return Err(Error::WeightCount {
                size,
                got: weights.len(),
            });
        }
        Ok(Kernel { size, weights })
    }

    pub fn from_3x3(m: [[f32; 3]; 3]) -> Kernel {
        Kernel {
            size: 3,
            weights: m.iter().flatten().copied().collect(),
        }
    }

    /// Normalized 3x3 Gaussian (weights sum to 1).
    pub fn gaussian_3x3() -> Kernel {
        Kernel::from_3x3([
            [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
            [2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0],
            [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
        ])
    }

    /// Horizontal Sobel gradient kernel.
    pub fn sobel_x() -> Kernel {
        Kernel::from_3x3([[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]])
    }

    /// Vertical Sobel gradient kernel.
    pub fn sobel_y() -> Kernel {
        Kernel::from_3x3([[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]])
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn weight(&self, i: usize, j: usize) -> f32 {
        self.weights[i * self.size + j]
    }
}

/// Accumulate the kernel over the neighborhood of `(x, y)`.
///
/// Sums `sample(x + i - offset, y + j - offset) * weight(i, j)` over the
/// footprint with `offset = size / 2`, sampling through the flat-index
/// clamp described in the module docs.
///
/// # Returns
/// Unclamped per-channel accumulators `(r, g, b)`
pub fn convolve(src: &Raster, kernel: &Kernel, x: usize, y: usize) -> (f32, f32, f32) {
    let size = kernel.size();
    let offset = (size / 2) as isize;

    let mut total_r = 0.0f32;
    let mut total_g = 0.0f32;
    let mut total_b = 0.0f32;

    for i in 0..size {
        for j in 0..size {
            let sx = x as isize + i as isize - offset;
            let sy = y as isize + j as isize - offset;
            let (r, g, b) = src.sample_flat(sx, sy);

            let w = kernel.weight(i, j);
            total_r += r as f32 * w;
            total_g += g as f32 * w;
            total_b += b as f32 * w;
        }
    }

    (total_r, total_g, total_b)
}

/// Sobel edge magnitude, written as a grayscale raster.
///
/// Combines the two gradient responses as `|gx| + |gy|` (L1, red-channel
/// accumulators), caps the sum at 1020, rescales into [0, 255] and zeroes
/// everything below `threshold`. A threshold of 0 keeps the full response.
///
/// # Arguments
/// * `threshold` - Cutoff in [0, 255]; values below it become 0
pub fn detect_edges(src: &Raster, threshold: f32) -> Raster {
    let threshold = threshold.clamp(0.0, 255.0);
    let kx = Kernel::sobel_x();
    let ky = Kernel::sobel_y();

    let width = src.width();
    let mut out = src.blank_like();

    out.pixels_mut()
        .outer_iter_mut()
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for x in 0..width {
                let (gx, _, _) = convolve(src, &kx, x, y);
                let (gy, _, _) = convolve(src, &ky, x, y);

                let mag = (gx.abs() + gy.abs()).min(1020.0);
                let mut val = mag * 255.0 / 1020.0;
                if val < threshold {
                    val = 0.0;
                }

                let v = val.round() as u8;
                row[[x, 0]] = v;
                row[[x, 1]] = v;
                row[[x, 2]] = v;
            }
        });

    out
}

/// Normalized 3x3 Gaussian blur over a clean copy of the input.
pub fn blur(src: &Raster) -> Raster {
    let kernel = Kernel::gaussian_3x3();
    let mut out = src.blank_like();

    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = convolve(src, &kernel, x, y);
            out.set_rgb(
                x,
                y,
                r.clamp(0.0, 255.0).round() as u8,
                g.clamp(0.0, 255.0).round() as u8,
                b.clamp(0.0, 255.0).round() as u8,
            );
        }
    }

    out
}
