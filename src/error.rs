//! Error taxonomy for construction-time precondition violations.
//!
//! Filters themselves are infallible: every numeric path is clamped at its
//! boundary, so once a `Raster` or `Kernel` exists, operations on it cannot
//! fail. The variants below cover the only rejectable inputs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("raster dimensions must be non-zero: width={0}, height={1}")]
    EmptyRaster(usize, usize),

    #[error("convolution kernels must have odd size, got {0}")]
    EvenKernel(usize),

    #[error("kernel weight count {got} does not match size {size}x{size}")]
    WeightCount { size: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
