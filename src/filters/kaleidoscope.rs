//! Kaleidoscopic polar remap around the raster center.

use rayon::prelude::*;

use crate::raster::Raster;

/// Fold the image into `segments` mirrored wedges.
///
/// Each output pixel is mapped to polar coordinates around the center, its
/// angle folded into a `2*pi / segments` wedge and mirrored about the
/// wedge's half-angle, then mapped back to the source pixel at that radius
/// and angle (floored, clamped to bounds). `segments` is clamped to >= 1;
/// a single full-circle wedge maps the image onto itself.
pub fn kaleidoscope(src: &Raster, segments: u32) -> Raster {
    let segments = segments.max(1);
    if segments == 1 {
        return src.clone();
    }

    let (w, h) = (src.width(), src.height());
    let cx = w as f32 / 2.0;
    let cy = h as f32 / 2.0;
    let wedge = std::f32::consts::TAU / segments as f32;

    let mut out = src.blank_like();
    out.pixels_mut()
        .outer_iter_mut()
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for x in 0..w {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;

                let radius = (dx * dx + dy * dy).sqrt();
                let mut theta = dy.atan2(dx).rem_euclid(wedge);
                if theta > wedge / 2.0 {
                    theta = wedge - theta;
                }

                let sx = ((cx + radius * theta.cos()).floor() as isize)
                    .clamp(0, w as isize - 1) as usize;
                let sy = ((cy + radius * theta.sin()).floor() as isize)
                    .clamp(0, h as isize - 1) as usize;

                let (r, g, b) = src.rgb(sx, sy);
                row[[x, 0]] = r;
                row[[x, 1]] = g;
                row[[x, 2]] = b;
            }
        });

    out
}
