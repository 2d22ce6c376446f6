//! Channel isolation and per-channel thresholding.

use crate::raster::Raster;

/// One of the three color channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Keep only the selected channel; the other two are zeroed.
pub fn isolate(src: &Raster, channel: Channel) -> Raster {
    let mut out = src.blank_like();
    let idx = channel.index();

    for y in 0..src.height() {
        for x in 0..src.width() {
            let px = src.get(x, y);
            let mut rgb = [0u8; 3];
            rgb[idx] = px[idx];
            out.set_rgb(x, y, rgb[0], rgb[1], rgb[2]);
        }
    }

    out
}

/// Binarize the selected channel against `level`.
///
/// The selected channel becomes 255 where its value is >= `level` and 0
/// otherwise; the other two output channels are forced to 0. Raising
/// `level` never increases the count of lit pixels.
pub fn threshold(src: &Raster, channel: Channel, level: u8) -> Raster {
    let mut out = src.blank_like();
    let idx = channel.index();

    for y in 0..src.height() {
        for x in 0..src.width() {
            let px = src.get(x, y);
            let v = if px[idx] >= level { 255 } else { 0 };
            let mut rgb = [0u8; 3];
            rgb[idx] = v;
            out.set_rgb(x, y, rgb[0], rgb[1], rgb[2]);
        }
    }

    out
}
