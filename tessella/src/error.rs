//! Error types for image probing.
//!
//! ## Usage
//!
//! Returned by [`ImageLoader`](crate::probe::ImageLoader) implementations.
//! Probe errors are never fatal to a gallery: a failed probe degrades the
//! affected item to a square fallback ratio and the batch keeps going.
use thiserror::Error;

/// Failure modes of an intrinsic-size probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The image bytes could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The loader does not know how to resolve this source.
    #[error("unsupported image source: {0}")]
    UnsupportedSource(String),
}
