//! Halation: a warm glow bled onto the image around its edges, like the
//! red halo certain film stocks develop around highlights.

use crate::convolve::detect_edges;
use crate::raster::Raster;

/// Overall glow strength.
const GLOW_STRENGTH: f32 = 0.7;

/// Warm tint multipliers.
const WARM_R: f32 = 1.0;
const WARM_G: f32 = 0.1;
const WARM_B: f32 = 0.1;

/// Blend a warm tint onto the source proportional to its edge response.
///
/// Runs an unthresholded edge pass, normalizes each edge value through
/// `(edge - threshold) / (255 - threshold)` into [0, 1], scales by the
/// fixed glow strength and adds the tint, clamped at white. `threshold` is
/// clamped to [0, 254] to keep the divisor positive.
pub fn halation(src: &Raster, threshold: f32) -> Raster {
    let threshold = threshold.clamp(0.0, 254.0);
    let edges = detect_edges(src, 0.0);
    let mut out = src.blank_like();

    for y in 0..src.height() {
        for x in 0..src.width() {
            let edge_val = edges.rgb(x, y).0 as f32;

            let m = ((edge_val - threshold) / (255.0 - threshold)).clamp(0.0, 1.0)
                * GLOW_STRENGTH;

            let (r, g, b) = src.rgb(x, y);
            let nr = (r as f32 + 255.0 * m * WARM_R).min(255.0);
            let ng = (g as f32 + 255.0 * m * WARM_G).min(255.0);
            let nb = (b as f32 + 255.0 * m * WARM_B).min(255.0);

            out.set_rgb(x, y, nr.round() as u8, ng.round() as u8, nb.round() as u8);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_raster_gains_no_glow() {
        let mut img = Raster::new(8, 8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                img.set_rgb(x, y, 60, 80, 100);
            }
        }
        assert_eq!(halation(&img, 50.0), img);
    }

    #[test]
    fn test_edges_pick_up_warm_tint() {
        let mut img = Raster::new(8, 8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                let v = if x < 4 { 0 } else { 200 };
                img.set_rgb(x, y, v, v, v);
            }
        }

        let out = halation(&img, 0.0);
        let (r, g, b) = out.rgb(4, 4);
        let (sr, sg, sb) = img.rgb(4, 4);
        // red gains the most, green and blue only a little
        assert!(r > sr);
        assert!(r as i32 - sr as i32 > g as i32 - sg as i32);
        assert!(g >= sg);
        assert!(b >= sb);
    }

    #[test]
    fn test_threshold_gates_weak_edges() {
        let mut img = Raster::new(8, 8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                let v = if x < 4 { 100 } else { 130 };
                img.set_rgb(x, y, v, v, v);
            }
        }

        // the step's edge response is ~30, far below a 200 threshold
        let gated = halation(&img, 200.0);
        assert_eq!(gated, img);
    }

    #[test]
    fn test_out_of_range_threshold_is_clamped() {
        let mut img = Raster::new(4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                img.set_rgb(x, y, 10, 20, 30);
            }
        }
        // must not divide by zero or panic
        let out = halation(&img, 400.0);
        assert_eq!(out, img);
    }
}
