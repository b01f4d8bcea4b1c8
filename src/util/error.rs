//! Error types for haarlike.

use thiserror::Error;

/// Result alias for haarlike operations.
pub type HaarResult<T> = std::result::Result<T, HaarError>;

/// Errors that can occur when building tables, patterns, or images.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HaarError {
    /// A channel plane does not hold exactly `width * height` samples, or a
    /// dimension is zero.
    #[error("dimension mismatch: {width}x{height} image with {len} samples")]
    DimensionMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    /// A weight matrix is empty or not rectangular.
    #[error("invalid pattern: {reason}")]
    InvalidPattern { reason: &'static str },
    /// A crop bound has no pixels in common with the image.
    #[error("bound {bound} lies outside the {width}x{height} image")]
    BoundOutOfImage {
        bound: String,
        width: usize,
        height: usize,
    },
    /// Decoding or encoding an image file failed.
    #[error("image io failed: {reason}")]
    ImageIo { reason: String },
}
