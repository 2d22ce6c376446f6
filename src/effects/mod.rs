//! Composite effects built by sequencing the primitive transforms.
//!
//! Each composite chains two or three simpler stages, feeding one stage's
//! output raster to the next. Like the primitive filters, every entry
//! point is a pure function of (input raster, parameters); nothing is
//! cached between calls.

pub mod film;
pub mod halation;
pub mod neon;
pub mod pixel_art;
pub mod region;
