//! Color model codec: RGB <-> HSV and RGB <-> YCbCr.
//!
//! All conversions are pure, deterministic functions shared by several
//! filters. HSV uses `h` in degrees [0, 360) with `s`, `v` in [0, 1];
//! YCbCr uses the fixed ITU-R BT.601 linear coefficients with every output
//! clamped to [0, 255]. YCbCr values stay in f32 so threshold comparisons
//! happen before any u8 rounding.

/// BT.601 luminance of an RGB sample.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

// ============================================================================
// RGB <-> HSV
// ============================================================================

/// Convert RGB to HSV.
///
/// Hue is resolved by a six-way branch on which channel holds the max/min,
/// evaluated in r-max, g-max, b-max order. At the achromatic point (s = 0)
/// hue is undefined and reported as 0.
///
/// # Returns
/// `(h, s, v)` with h in [0, 360), s and v in [0, 1]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { d / max };

    if s == 0.0 {
        return (0.0, 0.0, v);
    }

    // exact compares are safe: every operand derives from the same u8 inputs
    let red = (max - r) / d;
    let green = (max - g) / d;
    let blue = (max - b) / d;

    let hue = if r == max && g == min {
        5.0 + blue
    } else if r == max {
        1.0 - green
    } else if g == max && b == min {
        1.0 + red
    } else if g == max {
        3.0 - blue
    } else if b == max && r == min {
        3.0 + green
    } else {
        5.0 - red
    };

    let mut h = (hue * 60.0) % 360.0;
    if h < 0.0 {
        h += 360.0;
    }

    (h, s, v)
}

/// Convert HSV back to RGB.
///
/// Sector-based interpolation on `floor(h / 60)`. The hue is wrapped with
/// `rem_euclid(360)` first, so sector 6 (h = 360 exactly) aliases sector 0.
/// `s` and `v` are clamped to [0, 1].
///
/// # Returns
/// `(r, g, b)` rounded to [0, 255]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    if s == 0.0 {
        let val = (v * 255.0).round() as u8;
        return (val, val, val);
    }

    let hex = h.rem_euclid(360.0) / 60.0;
    let sector = hex.floor();
    let frac = hex - sector;

    let a = (1.0 - s) * v;
    let b = (1.0 - s * frac) * v;
    let c = (1.0 - s * (1.0 - frac)) * v;

    let (nr, ng, nb) = match sector as u32 {
        0 => (v, c, a),
        1 => (b, v, a),
        2 => (a, v, c),
        3 => (a, b, v),
        4 => (c, a, v),
        _ => (v, a, b),
    };

    (
        (nr * 255.0).round() as u8,
        (ng * 255.0).round() as u8,
        (nb * 255.0).round() as u8,
    )
}

// ============================================================================
// RGB <-> YCbCr
// ============================================================================

/// Convert RGB to YCbCr (BT.601), each component clamped to [0, 255].
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32;
    let g = g as f32;
    let b = b as f32;

    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = -0.168736 * r - 0.331264 * g + 0.5 * b + 128.0;
    let cr = 0.5 * r - 0.418688 * g - 0.081312 * b + 128.0;

    (
        y.clamp(0.0, 255.0),
        cb.clamp(0.0, 255.0),
        cr.clamp(0.0, 255.0),
    )
}

/// Convert YCbCr back to RGB (BT.601 inverse), rounded to [0, 255].
pub fn ycbcr_to_rgb(y: f32, cb: f32, cr: f32) -> (u8, u8, u8) {
    let y = y.clamp(0.0, 255.0);
    let cb = cb.clamp(0.0, 255.0) - 128.0;
    let cr = cr.clamp(0.0, 255.0) - 128.0;

    let r = y + 1.402 * cr;
    let g = y - 0.344136 * cb - 0.714136 * cr;
    let b = y + 1.772 * cb;

    (
        r.clamp(0.0, 255.0).round() as u8,
        g.clamp(0.0, 255.0).round() as u8,
        b.clamp(0.0, 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: u8, b: u8, tol: i32) {
        assert!(
            (a as i32 - b as i32).abs() <= tol,
            "{a} vs {b} (tol {tol})"
        );
    }

    #[test]
    fn test_hsv_roundtrip_within_one() {
        for &(r, g, b) in &[
            (200u8, 100u8, 50u8),
            (10, 250, 30),
            (12, 34, 200),
            (255, 0, 0),
            (0, 255, 255),
            (77, 77, 200),
        ] {
            let (h, s, v) = rgb_to_hsv(r, g, b);
            let (nr, ng, nb) = hsv_to_rgb(h, s, v);
            assert_close(nr, r, 1);
            assert_close(ng, g, 1);
            assert_close(nb, b, 1);
        }
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        let (h, s, v) = rgb_to_hsv(128, 128, 128);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((v - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(rgb_to_hsv(255, 0, 0).0, 0.0);
        assert_eq!(rgb_to_hsv(0, 255, 0).0, 120.0);
        assert_eq!(rgb_to_hsv(0, 0, 255).0, 240.0);
    }

    #[test]
    fn test_hue_360_aliases_sector_zero() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
    }

    #[test]
    fn test_hsv_saturation_value_clamped() {
        assert_eq!(hsv_to_rgb(0.0, 2.0, 2.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, -1.0, 0.5), (128, 128, 128));
    }

    #[test]
    fn test_ycbcr_gray_has_neutral_chroma() {
        let (y, cb, cr) = rgb_to_ycbcr(128, 128, 128);
        assert!((y - 128.0).abs() < 0.01);
        assert!((cb - 128.0).abs() < 0.01);
        assert!((cr - 128.0).abs() < 0.01);
    }

    #[test]
    fn test_ycbcr_roundtrip() {
        for &(r, g, b) in &[(200u8, 100u8, 50u8), (30, 60, 90), (255, 255, 0)] {
            let (y, cb, cr) = rgb_to_ycbcr(r, g, b);
            let (nr, ng, nb) = ycbcr_to_rgb(y, cb, cr);
            assert_close(nr, r, 2);
            assert_close(ng, g, 2);
            assert_close(nb, b, 2);
        }
    }

    #[test]
    fn test_luma_weights() {
        assert!((luma(255, 0, 0) - 76.245).abs() < 0.01);
        assert!((luma(0, 255, 0) - 149.685).abs() < 0.01);
        assert!((luma(0, 0, 255) - 29.07).abs() < 0.01);
        assert!((luma(255, 255, 255) - 255.0).abs() < 0.01);
    }
}
