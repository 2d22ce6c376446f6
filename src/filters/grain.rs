//! Film grain: luma-proportional multiplicative noise.
//!
//! The noise source is a seeded linear congruential generator so tests can
//! pin the stream and check statistical bounds instead of exact pixels.

use crate::color::luma;
use crate::raster::Raster;

/// Simple MINSTD-style LCG, deterministic for a given seed.
pub(crate) struct NoiseRng {
    state: u64,
}

impl NoiseRng {
    pub(crate) fn new(seed: u64) -> Self {
        NoiseRng {
            state: seed.wrapping_add(1), // avoid the zero fixed point
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(48271).wrapping_add(1) % 2147483647;
        self.state as u32
    }

    /// Uniform f32 in [0, 1).
    fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 / 2147483647.0
    }

    /// Uniform f32 in [-1, 1).
    pub(crate) fn next_signed(&mut self) -> f32 {
        self.next_f32() * 2.0 - 1.0
    }
}

/// Add monochrome grain scaled by the pixel's own luma.
///
/// Per pixel, the luma is perturbed by `uniform(-1, 1) * amount * 255` and
/// all three channels are rescaled by `new_luma / luma` to keep the color
/// ratios; black pixels (luma 0) keep ratio 1. `amount` is clamped to
/// [0, 1].
pub fn film_grain(src: &Raster, amount: f32, seed: u64) -> Raster {
    let amount = amount.clamp(0.0, 1.0);
    let scale = amount * 255.0;
    let mut rng = NoiseRng::new(seed);
    let mut out = src.blank_like();

    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.rgb(x, y);
            let l = luma(r, g, b);

            let shifted = l + rng.next_signed() * scale;
            let ratio = if l > 0.0 { shifted / l } else { 1.0 };

            out.set_rgb(
                x,
                y,
                (r as f32 * ratio).clamp(0.0, 255.0).round() as u8,
                (g as f32 * ratio).clamp(0.0, 255.0).round() as u8,
                (b as f32 * ratio).clamp(0.0, 255.0).round() as u8,
            );
        }
    }

    out
}
