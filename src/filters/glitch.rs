//! Chromatic-shift glitch: the red and blue channels are sampled from
//! horizontally displaced positions, green stays put.

use crate::raster::Raster;

const RED_SHIFT_X: isize = 6;
const BLUE_SHIFT_X: isize = -6;

/// Split the color channels horizontally.
///
/// Red is sampled 6 px to the right, blue 6 px to the left, green in
/// place. Shifted coordinates are clamped at the raster edges, never
/// wrapped.
pub fn chromatic_shift(src: &Raster) -> Raster {
    let (w, h) = (src.width(), src.height());
    let max_x = w as isize - 1;
    let mut out = src.blank_like();

    for y in 0..h {
        for x in 0..w {
            let rx = (x as isize + RED_SHIFT_X).clamp(0, max_x) as usize;
            let bx = (x as isize + BLUE_SHIFT_X).clamp(0, max_x) as usize;

            let r = src.rgb(rx, y).0;
            let g = src.rgb(x, y).1;
            let b = src.rgb(bx, y).2;
            out.set_rgb(x, y, r, g, b);
        }
    }

    out
}
