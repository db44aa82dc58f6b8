//! Global Otsu thresholding and mask-driven compositing of grayscale images.
//!
//! The crate works on single-channel 8-bit buffers only and does no image
//! decoding. Every stage is a pure function over its inputs:
//!
//! 1. [`build_histogram`] tallies intensities into a [`Histogram`].
//! 2. [`solve_otsu`] picks the level maximizing between-class variance.
//! 3. [`apply_threshold`] produces a 0/255 mask (`255` where `pixel > t`).
//! 4. [`mix_images`] selects per pixel from a white or a black source.
//!
//! ```
//! use otsu_mix_core::{otsu_mix, GrayImageView};
//!
//! # fn main() -> Result<(), otsu_mix_core::SegmentError> {
//! let white = [10u8, 200, 10, 200];
//! let black = [9u8, 9, 9, 9];
//! let out = otsu_mix(
//!     &GrayImageView::new(2, 2, &white)?,
//!     &GrayImageView::new(2, 2, &black)?,
//! )?;
//! assert_eq!(out.threshold.threshold, 10);
//! assert_eq!(out.mixed.as_raw(), &[9, 200, 9, 200]);
//! # Ok(())
//! # }
//! ```

mod binarize;
mod composite;
mod error;
mod histogram;
mod image;
mod logger;
mod otsu;
mod pipeline;

pub use binarize::{apply_threshold, apply_threshold_into, MASK_BLACK, MASK_WHITE};
pub use composite::{mix_images, mix_images_into};
pub use error::SegmentError;
pub use histogram::{build_histogram, Histogram, NormalizedHistogram, LEVELS};
pub use image::{Dims, GrayImage, GrayImageView};
pub use otsu::{otsu_threshold, solve_otsu, OtsuThreshold, DEGENERATE_THRESHOLD};
pub use pipeline::{mix_with_threshold, otsu_mix, segment, MixOutput, Segmentation};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
