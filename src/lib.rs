//! snapfx: a deterministic snapshot-effects kernel.
//!
//! A library of stateless pixel-transform operations over fixed-size RGBA
//! rasters: color-space codecs, 2D convolution with a preserved flat-index
//! boundary policy, block quantization, the independent filters and the
//! composite effects built from them (halation, neon, film emulation,
//! pixel art, detector-driven region masking).
//!
//! ## Image format
//!
//! All operations work on [`Raster`], an owned `(height, width, 4)` RGBA
//! u8 grid. The alpha channel is always fully opaque; it is carried, not
//! blended.
//!
//! ## Architecture
//!
//! - **Pure value flow** - every operation is `(input raster, parameters)
//!   -> output raster`; inputs are never mutated and nothing persists
//!   between calls.
//! - **Clamped boundaries** - scalar parameters are clamped at each entry
//!   point; numeric edge cases (zero saturation, zero luma, degenerate
//!   divisors) take explicit fallback branches instead of producing
//!   NaN/Inf.
//! - **Driver owns orchestration** - the external driver resizes its live
//!   snapshot into the working cell dimensions once (`Raster::resized`)
//!   and fans that cell raster out to the entry points; display, capture
//!   and scheduling live outside this crate.
//! - **Injected detector** - region masking takes a [`RegionDetector`]
//!   capability so tests can script region lists.
//! - **Safe parallelism** - whole-frame spatial passes split by output
//!   row via rayon; workers read immutable input only.

pub mod color;
pub mod convolve;
pub mod effects;
pub mod error;
pub mod filters;
pub mod quantize;
pub mod raster;

pub use convolve::Kernel;
pub use effects::region::{NoDetector, Region, RegionDetector, RegionEffect};
pub use error::{Error, Result};
pub use raster::Raster;
