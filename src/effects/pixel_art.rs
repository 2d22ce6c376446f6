//! Pixel art: block averaging followed by palette quantization.

use crate::quantize::{pixelate, posterize};
use crate::raster::Raster;

/// Retro pixel-art look: pixelate into blocks, then posterize the result.
pub fn pixel_art(src: &Raster, block_size: usize, levels: u8) -> Raster {
    posterize(&pixelate(src, block_size), levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_manual_chain() {
        let mut img = Raster::new(10, 10).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                img.set_rgb(x, y, (x * 25) as u8, (y * 25) as u8, 77);
            }
        }

        let out = pixel_art(&img, 2, 8);
        assert_eq!(out, posterize(&pixelate(&img, 2), 8));
    }

    #[test]
    fn test_blocks_are_flat() {
        let mut img = Raster::new(8, 8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                img.set_rgb(x, y, (x * 31) as u8, (y * 29) as u8, 50);
            }
        }

        let out = pixel_art(&img, 4, 4);
        for by in [0, 4] {
            for bx in [0, 4] {
                let anchor = out.rgb(bx, by);
                for y in by..by + 4 {
                    for x in bx..bx + 4 {
                        assert_eq!(out.rgb(x, y), anchor);
                    }
                }
            }
        }
    }
}
