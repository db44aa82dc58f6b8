//! Single-channel 8-bit image buffers.
//!
//! `GrayImageView` borrows row-major samples with an explicit row stride, so it
//! can describe both contiguous buffers and sub-regions of a larger one.
//! `GrayImage` owns a contiguous buffer and is what every stage returns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SegmentError;

/// Image dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims {
    pub width: usize,
    pub height: usize,
}

impl Dims {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [u8],
}

impl<'a> GrayImageView<'a> {
    /// View a contiguous row-major buffer (`stride == width`).
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, SegmentError> {
        Self::with_stride(width, height, width, data)
    }

    /// View a buffer whose rows start `stride` bytes apart.
    ///
    /// Bytes between `width` and `stride` in each row are padding and are never read.
    /// The last row only needs `width` bytes.
    pub fn with_stride(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [u8],
    ) -> Result<Self, SegmentError> {
        if stride < width {
            return Err(SegmentError::InvalidStride { width, stride });
        }
        let expected = required_len(width, height, stride).ok_or(SegmentError::InvalidBuffer {
            expected: usize::MAX,
            got: data.len(),
        })?;
        if data.len() < expected {
            return Err(SegmentError::InvalidBuffer {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn dims(&self) -> Dims {
        Dims::new(self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width || self.height <= 1
    }

    /// Samples of row `y`, without stride padding.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        let view = *self;
        (0..view.height).map(move |y| view.row(y))
    }

    /// All samples as one slice when the view has no padding.
    pub fn as_contiguous(&self) -> Option<&'a [u8]> {
        self.is_contiguous()
            .then(|| &self.data[..self.pixel_count()])
    }

    /// Copy the visible pixels into an owned, contiguous image.
    pub fn to_owned_image(&self) -> GrayImage {
        let mut data = Vec::with_capacity(self.pixel_count());
        for row in self.rows() {
            data.extend_from_slice(row);
        }
        GrayImage {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    if height == 0 {
        return Some(0);
    }
    (height - 1).checked_mul(stride)?.checked_add(width)
}

/// Owned, contiguous row-major image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImage {
    /// Zero-filled image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Take ownership of a row-major buffer of exactly `width * height` bytes.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, SegmentError> {
        let expected = width
            .checked_mul(height)
            .ok_or(SegmentError::InvalidBuffer {
                expected: usize::MAX,
                got: data.len(),
            })?;
        if data.len() != expected {
            return Err(SegmentError::InvalidBuffer {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dims(&self) -> Dims {
        Dims::new(self.width, self.height)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Mutable rows top to bottom.
    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        // `max(1)` keeps `chunks_exact_mut` valid for zero-width images; the
        // buffer is empty then and yields no rows.
        self.data.chunks_exact_mut(self.width.max(1))
    }
}
