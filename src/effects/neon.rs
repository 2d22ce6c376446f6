//! Neon: black image with glowing edges tinted by a vertical rainbow.

use crate::color::hsv_to_rgb;
use crate::convolve::detect_edges;
use crate::raster::Raster;

const EDGE_THRESHOLD: f32 = 80.0;
const GLOW_STRENGTH: f32 = 2.0;
const GLOW_GAMMA: f32 = 1.5;
const SATURATION: f32 = 1.0;
const BRIGHTNESS: f32 = 1.0;
/// Masks below this go fully black.
const MASK_EPSILON: f32 = 0.001;

/// Rainbow-tinted edge glow.
///
/// Edges are detected at a fixed threshold, then every output pixel takes
/// a full-saturation color whose hue depends only on its row
/// (`hue = y / (H - 1) * 360`), scaled by the gamma-shaped edge mask.
/// Only edges glow; everything else is black. Single-row rasters use
/// hue 0.
pub fn neon(src: &Raster) -> Raster {
    let edges = detect_edges(src, EDGE_THRESHOLD);
    let (w, h) = (src.width(), src.height());
    let mut out = src.blank_like();

    for y in 0..h {
        let hue = if h > 1 {
            y as f32 / (h - 1) as f32 * 360.0
        } else {
            0.0
        };
        let (rc, gc, bc) = hsv_to_rgb(hue, SATURATION, BRIGHTNESS);

        for x in 0..w {
            let mut m = (edges.rgb(x, y).0 as f32 / 255.0).powf(GLOW_GAMMA) * GLOW_STRENGTH;
            if m < MASK_EPSILON {
                m = 0.0;
            } else if m > 1.0 {
                m = 1.0;
            }

            out.set_rgb(
                x,
                y,
                (rc as f32 * m).round() as u8,
                (gc as f32 * m).round() as u8,
                (bc as f32 * m).round() as u8,
            );
        }
    }

    out
}
