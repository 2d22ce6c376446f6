//! Region-aware masking driven by an external detector.
//!
//! The detector is an injected capability: the kernel never computes
//! regions itself, it only consumes them to select sub-areas for localized
//! filtering. A missing or unavailable detector is modeled by an empty
//! region list. Regions whose confidence is 4 or below are ignored
//! entirely, for both pixel effects and outlines.

use tracing::debug;

use crate::color::{luma, rgb_to_ycbcr};
use crate::convolve::{convolve, Kernel};
use crate::filters::grayscale::BRIGHTNESS_BOOST;
use crate::raster::Raster;

/// Axis-aligned detector box with a confidence score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub confidence: f32,
}

/// External region detector, injected so tests can script region lists.
pub trait RegionDetector {
    fn detect(&self, raster: &Raster) -> Vec<Region>;
}

/// Stand-in for a missing or unavailable detector.
pub struct NoDetector;

impl RegionDetector for NoDetector {
    fn detect(&self, _raster: &Raster) -> Vec<Region> {
        Vec::new()
    }
}

/// Effect substituted inside each detected region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RegionEffect {
    /// Mode 0: regions left untouched.
    #[default]
    Passthrough,
    /// Mode 1: grayscale with the brightness boost.
    GrayscaleBright,
    /// Mode 2: 3x3 normalized blur convolution.
    Blur,
    /// Mode 3: YCbCr false color.
    FalseColor,
    /// Mode 4: grayscale, then 5x5 block pixelation.
    PixelateGray,
    /// Mode 5: 5x5 per-channel block pixelation.
    PixelateColor,
}

impl RegionEffect {
    /// Map a driver key (0-5) to an effect; unknown keys are passthrough.
    pub fn from_mode(mode: u8) -> RegionEffect {
        match mode {
            1 => RegionEffect::GrayscaleBright,
            2 => RegionEffect::Blur,
            3 => RegionEffect::FalseColor,
            4 => RegionEffect::PixelateGray,
            5 => RegionEffect::PixelateColor,
            _ => RegionEffect::Passthrough,
        }
    }
}

/// Regions at or below this confidence are ignored.
const CONFIDENCE_FLOOR: f32 = 4.0;
/// Block side for the pixelation modes.
const REGION_BLOCK: usize = 5;

/// Integer pixel footprint of a region, clamped to the raster.
///
/// Returns `(x0, y0, x1, y1)` half-open; empty footprints collapse so that
/// `x0 >= x1` or `y0 >= y1`.
fn footprint(region: &Region, raster: &Raster) -> (usize, usize, usize, usize) {
    let w = raster.width() as isize;
    let h = raster.height() as isize;

    let x0 = (region.x.floor() as isize).clamp(0, w) as usize;
    let y0 = (region.y.floor() as isize).clamp(0, h) as usize;
    let x1 = ((region.x + region.width).ceil() as isize).clamp(0, w) as usize;
    let y1 = ((region.y + region.height).ceil() as isize).clamp(0, h) as usize;

    (x0, y0, x1, y1)
}

/// Apply `effect` to every confident region, baked into a copy of `src`.
pub fn apply_region_effects(src: &Raster, regions: &[Region], effect: RegionEffect) -> Raster {
    let mut out = src.clone();
    if effect == RegionEffect::Passthrough {
        return out;
    }

    for region in regions {
        if region.confidence <= CONFIDENCE_FLOOR {
            continue;
        }

        let (x0, y0, x1, y1) = footprint(region, src);
        if x0 >= x1 || y0 >= y1 {
            continue;
        }

        match effect {
            RegionEffect::Passthrough => {}
            RegionEffect::GrayscaleBright => gray_region(&mut out, x0, y0, x1, y1),
            RegionEffect::Blur => blur_region(&mut out, x0, y0, x1, y1),
            RegionEffect::FalseColor => false_color_region(&mut out, x0, y0, x1, y1),
            RegionEffect::PixelateGray => {
                gray_region(&mut out, x0, y0, x1, y1);
                pixelate_region_gray(&mut out, x0, y0, x1, y1);
            }
            RegionEffect::PixelateColor => pixelate_region_color(&mut out, x0, y0, x1, y1),
        }
    }

    out
}

/// Detect, substitute the chosen effect per region, then outline.
///
/// Outlines are drawn for every confident region regardless of the chosen
/// effect, including passthrough.
pub fn face_mask<D>(src: &Raster, detector: &D, effect: RegionEffect) -> Raster
where
    D: RegionDetector + ?Sized,
{
    let regions = detector.detect(src);
    debug!(regions = regions.len(), ?effect, "region masking pass");

    let mut out = apply_region_effects(src, &regions, effect);
    for region in &regions {
        if region.confidence > CONFIDENCE_FLOOR {
            draw_region_outline(&mut out, region);
        }
    }
    out
}

/// Draw a 2-px unfilled white rectangle over the region's footprint.
///
/// The stroke straddles the box edges, one pixel on each side, clamped to
/// the raster bounds.
pub fn draw_region_outline(raster: &mut Raster, region: &Region) {
    let w = raster.width() as isize;
    let h = raster.height() as isize;

    let x0 = region.x.floor() as isize;
    let y0 = region.y.floor() as isize;
    let x1 = (region.x + region.width).ceil() as isize;
    let y1 = (region.y + region.height).ceil() as isize;

    for y in (y0 - 1).max(0)..(y1 + 1).min(h) {
        for x in (x0 - 1).max(0)..(x1 + 1).min(w) {
            let on_vertical = x < x0 + 1 || x >= x1 - 1;
            let on_horizontal = y < y0 + 1 || y >= y1 - 1;
            if on_vertical || on_horizontal {
                raster.set_rgb(x as usize, y as usize, 255, 255, 255);
            }
        }
    }
}

// ============================================================================
// Per-region passes
// ============================================================================

/// Truncating grayscale + brighten over the footprint.
fn gray_region(out: &mut Raster, x0: usize, y0: usize, x1: usize, y1: usize) {
    for x in x0..x1 {
        for y in y0..y1 {
            let (r, g, b) = out.rgb(x, y);
            let v = (luma(r, g, b) * BRIGHTNESS_BOOST).min(255.0) as u8;
            out.set_rgb(x, y, v, v, v);
        }
    }
}

/// In-place 3x3 blur over the footprint.
///
/// Convolves against the buffer being written, column-major, so already
/// blurred neighbors feed later pixels. The feedback is intentional; a
/// clean-buffer convolution produces different output.
fn blur_region(out: &mut Raster, x0: usize, y0: usize, x1: usize, y1: usize) {
    let kernel = Kernel::gaussian_3x3();
    for x in x0..x1 {
        for y in y0..y1 {
            let (r, g, b) = convolve(out, &kernel, x, y);
            out.set_rgb(
                x,
                y,
                r.clamp(0.0, 255.0).round() as u8,
                g.clamp(0.0, 255.0).round() as u8,
                b.clamp(0.0, 255.0).round() as u8,
            );
        }
    }
}

/// YCbCr false color over the footprint.
fn false_color_region(out: &mut Raster, x0: usize, y0: usize, x1: usize, y1: usize) {
    for x in x0..x1 {
        for y in y0..y1 {
            let (r, g, b) = out.rgb(x, y);
            let (y_val, cb, cr) = rgb_to_ycbcr(r, g, b);
            out.set_rgb(
                x,
                y,
                y_val.round() as u8,
                cb.round() as u8,
                cr.round() as u8,
            );
        }
    }
}

/// 5x5 single-channel block means over the footprint.
///
/// Runs after `gray_region`, so averaging the red channel is averaging the
/// gray value.
fn pixelate_region_gray(out: &mut Raster, x0: usize, y0: usize, x1: usize, y1: usize) {
    let mut bx = x0;
    while bx < x1 {
        let x_end = (bx + REGION_BLOCK).min(x1);
        let mut by = y0;
        while by < y1 {
            let y_end = (by + REGION_BLOCK).min(y1);

            let mut sum = 0u32;
            let mut count = 0u32;
            for x in bx..x_end {
                for y in by..y_end {
                    sum += out.rgb(x, y).0 as u32;
                    count += 1;
                }
            }
            let avg = (sum as f32 / count as f32).round() as u8;

            for x in bx..x_end {
                for y in by..y_end {
                    out.set_rgb(x, y, avg, avg, avg);
                }
            }

            by += REGION_BLOCK;
        }
        bx += REGION_BLOCK;
    }
}

/// 5x5 per-channel block means over the footprint.
fn pixelate_region_color(out: &mut Raster, x0: usize, y0: usize, x1: usize, y1: usize) {
    let mut bx = x0;
    while bx < x1 {
        let x_end = (bx + REGION_BLOCK).min(x1);
        let mut by = y0;
        while by < y1 {
            let y_end = (by + REGION_BLOCK).min(y1);

            let mut sum_r = 0u32;
            let mut sum_g = 0u32;
            let mut sum_b = 0u32;
            let mut count = 0u32;
            for x in bx..x_end {
                for y in by..y_end {
                    let (r, g, b) = out.rgb(x, y);
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

            by += REGION_BLOCK;
        }
        bx += REGION_BLOCK;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedDetector(Vec<Region>);

    impl RegionDetector for ScriptedDetector {
        fn detect(&self, _raster: &Raster) -> Vec<Region> {
            self.0.clone()
        }
    }

    fn colorful(w: usize, h: usize) -> Raster {
        let mut img = Raster::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                img.set_rgb(x, y, (x * 13 % 256) as u8, (y * 17 % 256) as u8, 60);
            }
        }
        img
    }

    fn region(x: f32, y: f32, w: f32, h: f32, confidence: f32) -> Region {
        Region {
            x,
            y,
            width: w,
            height: h,
            confidence,
        }
    }

    #[test]
    fn test_low_confidence_region_is_inert() {
        let img = colorful(20, 20);
        let detector = ScriptedDetector(vec![region(2.0, 2.0, 10.0, 10.0, 4.0)]);

        for mode in 0u8..=5 {
            let out = face_mask(&img, &detector, RegionEffect::from_mode(mode));
            assert_eq!(out, img, "mode {mode}");
        }
    }

    #[test]
    fn test_no_detector_means_no_change() {
        let img = colorful(12, 12);
        let out = face_mask(&img, &NoDetector, RegionEffect::PixelateColor);
        assert_eq!(out, img);
    }

    #[test]
    fn test_passthrough_still_outlines_confident_region() {
        let img = colorful(20, 20);
        let detector = ScriptedDetector(vec![region(5.0, 5.0, 8.0, 8.0, 9.0)]);

        let out = face_mask(&img, &detector, RegionEffect::Passthrough);
        assert_ne!(out, img);
        // stroke pixels are white, interior untouched
        assert_eq!(out.rgb(5, 5), (255, 255, 255));
        assert_eq!(out.rgb(9, 9), img.rgb(9, 9));
        // well outside the region nothing changes
        assert_eq!(out.rgb(0, 0), img.rgb(0, 0));
        assert_eq!(out.rgb(18, 18), img.rgb(18, 18));
    }

    #[test]
    fn test_effect_is_confined_to_the_footprint() {
        let img = colorful(30, 30);
        let regions = vec![region(10.0, 10.0, 10.0, 10.0, 8.0)];

        let out = apply_region_effects(&img, &regions, RegionEffect::GrayscaleBright);
        // inside: achromatic
        let (r, g, b) = out.rgb(15, 15);
        assert_eq!(r, g);
        assert_eq!(g, b);
        // outside: untouched
        assert_eq!(out.rgb(5, 5), img.rgb(5, 5));
        assert_eq!(out.rgb(25, 25), img.rgb(25, 25));
    }

    #[test]
    fn test_pixelate_color_flattens_blocks() {
        let img = colorful(30, 30);
        let regions = vec![region(10.0, 10.0, 10.0, 10.0, 8.0)];

        let out = apply_region_effects(&img, &regions, RegionEffect::PixelateColor);
        // a 5x5 block inside the region is flat
        let anchor = out.rgb(10, 10);
        for y in 10..15 {
            for x in 10..15 {
                assert_eq!(out.rgb(x, y), anchor);
            }
        }
        assert_eq!(out.rgb(9, 10), img.rgb(9, 10));
    }

    #[test]
    fn test_pixelate_gray_produces_gray_blocks() {
        let img = colorful(30, 30);
        let regions = vec![region(10.0, 10.0, 10.0, 10.0, 8.0)];

        let out = apply_region_effects(&img, &regions, RegionEffect::PixelateGray);
        for y in 10..20 {
            for x in 10..20 {
                let (r, g, b) = out.rgb(x, y);
                assert_eq!(r, g, "({x},{y})");
                assert_eq!(g, b, "({x},{y})");
            }
        }
    }

    #[test]
    fn test_fractional_box_rounds_outward() {
        let img = colorful(20, 20);
        let regions = vec![region(4.3, 4.6, 3.2, 3.1, 8.0)];

        let out = apply_region_effects(&img, &regions, RegionEffect::FalseColor);
        // footprint is floor(4.3)=4 .. ceil(7.5)=8, floor(4.6)=4 .. ceil(7.7)=8
        assert_ne!(out.rgb(4, 4), img.rgb(4, 4));
        assert_ne!(out.rgb(7, 7), img.rgb(7, 7));
        assert_eq!(out.rgb(8, 8), img.rgb(8, 8));
        assert_eq!(out.rgb(3, 4), img.rgb(3, 4));
    }

    #[test]
    fn test_region_clipped_to_raster() {
        let img = colorful(10, 10);
        let regions = vec![region(-5.0, -5.0, 30.0, 30.0, 9.0)];

        // must not panic; the whole raster is fair game
        let out = apply_region_effects(&img, &regions, RegionEffect::Blur);
        assert_eq!(out.width(), 10);
        assert_eq!(out.height(), 10);
    }

    #[test]
    fn test_outline_drawn_only_with_high_confidence() {
        let img = colorful(20, 20);
        let mut with_outline = img.clone();
        draw_region_outline(&mut with_outline, &region(5.0, 5.0, 6.0, 6.0, 9.0));
        assert_ne!(with_outline, img);

        let detector = ScriptedDetector(vec![
            region(5.0, 5.0, 6.0, 6.0, 9.0),
            region(1.0, 1.0, 2.0, 2.0, 1.0),
        ]);
        let out = face_mask(&img, &detector, RegionEffect::Passthrough);
        // the low-confidence region's corner is untouched
        assert_eq!(out.rgb(1, 1), img.rgb(1, 1));
        assert_eq!(out.rgb(2, 2), img.rgb(2, 2));
    }
}
