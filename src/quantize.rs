//! Block quantizer: spatial block averaging (pixelate) and per-channel
//! level quantization (posterize).

use crate::raster::Raster;

/// Replace each `block_size` x `block_size` tile with its per-channel mean.
///
/// The last tile in a row or column may be partial; its mean is taken over
/// the in-bounds pixels only. `block_size` is clamped to >= 1, and a block
/// size of 1 is the identity transform.
pub fn pixelate(src: &Raster, block_size: usize) -> Raster {
    let step = block_size.max(1);
    let (w, h) = (src.width(), src.height());
    let mut out = src.blank_like();

    let mut bx = 0;
    while bx < w {
        let x_end = (bx + step).min(w);
        let mut by = 0;
        while by < h {
            let y_end = (by + step).min(h);

            let mut sum_r = 0u32;
            let mut sum_g = 0u32;
            let mut sum_b = 0u32;
            let mut count = 0u32;
            for x in bx..x_end {
                for y in by..y_end {
                    let (r, g, b) = src.rgb(x, y);
                    sum_r += r as u32;
                    sum_g += g as u32;
                    sum_b += b as u32;
                    count += 1;
                }
            }

            let avg_r = (sum_r as f32 / count as f32).round() as u8;
            let avg_g = (sum_g as f32 / count as f32).round() as u8;
            let avg_b = (sum_b as f32 / count as f32).round() as u8;

            for x in bx..x_end {
                for y in by..y_end {
                    out.set_rgb(x, y, avg_r, avg_g, avg_b);
                }
            }

            by += step;
        }
        bx += step;
    }

    out
}

/// Quantize every channel to `levels` evenly spaced values.
///
/// Each channel becomes `round(v / step) * step` with
/// `step = 255 / (levels - 1)`. `levels` is clamped to >= 2. The transform
/// is idempotent.
pub fn posterize(src: &Raster, levels: u8) -> Raster {
    let levels = levels.max(2);
    let step = 255.0 / (levels - 1) as f32;
    let mut out = src.blank_like();

    let quantize = |v: u8| ((v as f32 / step).round() * step).round().clamp(0.0, 255.0) as u8;

    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.rgb(x, y);
            out.set_rgb(x, y, quantize(r), quantize(g), quantize(b));
        }
    }

    out
}
