//! Color-space visualization filters.
//!
//! The HSV filters discard saturation and value to show hue alone; the
//! YCbCr filters store the converted components directly in the R/G/B
//! output slots as a false-color visualization, not a color-correct
//! transform.

use crate::color::{hsv_to_rgb, rgb_to_hsv, rgb_to_ycbcr};
use crate::raster::Raster;

/// Recolor every pixel to its pure hue at full saturation and brightness.
///
/// Achromatic pixels carry an undefined hue reported as 0, so grays land
/// on pure red.
pub fn hsv_recolor(src: &Raster) -> Raster {
    let mut out = src.blank_like();

    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.rgb(x, y);
            let (h, _, _) = rgb_to_hsv(r, g, b);
            let (nr, ng, nb) = hsv_to_rgb(h, 1.0, 1.0);
            out.set_rgb(x, y, nr, ng, nb);
        }
    }

    out
}

/// Pure-hue color where the pixel's value passes the threshold, else black.
///
/// A pixel is kept when `v >= level / 255`.
pub fn hsv_threshold(src: &Raster, level: u8) -> Raster {
    let cutoff = level as f32 / 255.0;
    let mut out = src.blank_like();

    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.rgb(x, y);
            let (h, _, v) = rgb_to_hsv(r, g, b);
            if v >= cutoff {
                let (nr, ng, nb) = hsv_to_rgb(h, 1.0, 1.0);
                out.set_rgb(x, y, nr, ng, nb);
            } else {
                out.set_rgb(x, y, 0, 0, 0);
            }
        }
    }

    out
}

/// Store Y/Cb/Cr directly in the R/G/B output channels.
pub fn ycbcr_encode(src: &Raster) -> Raster {
    let mut out = src.blank_like();

    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.rgb(x, y);
            let (luma, cb, cr) = rgb_to_ycbcr(r, g, b);
            out.set_rgb(
                x,
                y,
                luma.round() as u8,
                cb.round() as u8,
                cr.round() as u8,
            );
        }
    }

    out
}

/// YCbCr false color where `Y >= level`, else black.
///
/// The comparison happens on the unrounded luma, so level boundaries gate
/// on the exact value rather than its u8 rounding.
pub fn ycbcr_threshold(src: &Raster, level: u8) -> Raster {
    let cutoff = level as f32;
    let mut out = src.blank_like();

    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.rgb(x, y);
            let (luma, cb, cr) = rgb_to_ycbcr(r, g, b);
            if luma >= cutoff {
                out.set_rgb(
                    x,
                    y,
                    luma.round() as u8,
                    cb.round() as u8,
                    cr.round() as u8,
                );
            } else {
                out.set_rgb(x, y, 0, 0, 0);
            }
        }
    }

    out
}

/// Recolor every pixel to a single hue, preserving saturation and value.
///
/// `hue_degrees` is wrapped into [0, 360).
pub fn hue_override(src: &Raster, hue_degrees: f32) -> Raster {
    let hue = hue_degrees.rem_euclid(360.0);
    let mut out = src.blank_like();

    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.rgb(x, y);
            let (_, s, v) = rgb_to_hsv(r, g, b);
            let (nr, ng, nb) = hsv_to_rgb(hue, s, v);
            out.set_rgb(x, y, nr, ng, nb);
        }
    }

    out
}
