//! Film emulation: white balance, halation and grain in a fixed chain.

use tracing::debug;

use crate::effects::halation::halation;
use crate::filters::grain::film_grain;
use crate::raster::Raster;

/// Halation edge threshold used inside the film chain.
const HALATION_THRESHOLD: f32 = 50.0;
/// Grain amount used inside the film chain.
const GRAIN_AMOUNT: f32 = 0.08;

/// Per-channel white-balance gain from a bias in [-1, 1].
///
/// A positive bias warms the image (more red, slightly more green, less
/// blue); a negative bias cools it through the same formula. Bias 0 leaves
/// every channel untouched.
pub fn white_balance(src: &Raster, bias: f32) -> Raster {
    let bias = bias.clamp(-1.0, 1.0);

    let r_gain = 1.0 + 0.25 * bias;
    let g_gain = 1.0 + 0.1 * bias;
    let b_gain = 1.0 - 0.2 * bias;

    let mut out = src.blank_like();
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.rgb(x, y);
            out.set_rgb(
                x,
                y,
                (r as f32 * r_gain).clamp(0.0, 255.0).round() as u8,
                (g as f32 * g_gain).clamp(0.0, 255.0).round() as u8,
                (b as f32 * b_gain).clamp(0.0, 255.0).round() as u8,
            );
        }
    }

    out
}

/// Analog-film look: white balance, then halation, then grain.
///
/// The stage order is fixed. `seed` feeds the grain stage's noise source.
pub fn film_emulation(src: &Raster, bias: f32, seed: u64) -> Raster {
    debug!(bias, "film emulation chain");

    let balanced = white_balance(src, bias);
    let glowing = halation(&balanced, HALATION_THRESHOLD);
    film_grain(&glowing, GRAIN_AMOUNT, seed)
}
