use crate::image::Dims;

/// Errors returned by the thresholding and compositing stages.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("histogram is empty (zero pixels), cannot normalize")]
    EmptyHistogram,
    #[error("{role} dimensions {got} do not match expected {expected}")]
    DimensionMismatch {
        role: &'static str,
        expected: Dims,
        got: Dims,
    },
    #[error("invalid grayscale buffer length (expected at least {expected} bytes, got {got})")]
    InvalidBuffer { expected: usize, got: usize },
    #[error("row stride {stride} is smaller than image width {width}")]
    InvalidStride { width: usize, stride: usize },
}

impl SegmentError {
    pub(crate) fn check_dims(role: &'static str, expected: Dims, got: Dims) -> Result<(), Self> {
        if expected == got {
            Ok(())
        } else {
            Err(Self::DimensionMismatch {
                role,
                expected,
                got,
            })
        }
    }
}
