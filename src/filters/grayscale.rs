//! Grayscale conversion with a fixed brightness boost.

use crate::color::luma;
use crate::raster::Raster;

/// Brightness gain applied on top of the luma conversion.
pub(crate) const BRIGHTNESS_BOOST: f32 = 1.2;

/// Convert to grayscale and brighten by 20%.
///
/// Each pixel becomes its BT.601 luma scaled by 1.2, clamped to 255 and
/// written to all three color channels.
pub fn grayscale_bright(src: &Raster) -> Raster {
    let mut out = src.blank_like();

    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.rgb(x, y);
            let gray = (luma(r, g, b) * BRIGHTNESS_BOOST).min(255.0);
            let v = gray.round() as u8;
            out.set_rgb(x, y, v, v, v);
        }
    }

    out
}
