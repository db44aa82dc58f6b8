use otsu_mix_core::SegmentError;

/// Errors produced by the facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum MixError {
    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidGrayBuffer { expected: usize, got: usize },

    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidGrayDimensions { width: usize, height: usize },

    #[error(transparent)]
    Segment(#[from] SegmentError),

    #[cfg(feature = "image")]
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
