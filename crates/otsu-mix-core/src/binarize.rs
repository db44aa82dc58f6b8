//! Fixed-threshold binarization into 0/255 masks.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{GrayImage, GrayImageView, SegmentError};

/// Mask value for pixels above the threshold.
pub const MASK_WHITE: u8 = 255;
/// Mask value for pixels at or below the threshold.
pub const MASK_BLACK: u8 = 0;

#[inline]
fn classify(v: u8, threshold: u8) -> u8 {
    if v > threshold {
        MASK_WHITE
    } else {
        MASK_BLACK
    }
}

/// Mask of `img`: `255` where `pixel > threshold`, else `0`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(img), fields(width = img.width(), height = img.height()))
)]
pub fn apply_threshold(img: &GrayImageView<'_>, threshold: u8) -> GrayImage {
    let mut out = GrayImage::new(img.width(), img.height());
    fill_mask(img, threshold, &mut out);
    out
}

/// Write the mask of `img` into `out`, which must have the same dimensions.
///
/// Dimensions are checked before the first write; on error `out` is unchanged.
pub fn apply_threshold_into(
    img: &GrayImageView<'_>,
    threshold: u8,
    out: &mut GrayImage,
) -> Result<(), SegmentError> {
    SegmentError::check_dims("mask output", img.dims(), out.dims())?;
    fill_mask(img, threshold, out);
    Ok(())
}

fn fill_mask(img: &GrayImageView<'_>, threshold: u8, out: &mut GrayImage) {
    for (src, dst) in img.rows().zip(out.rows_mut()) {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = classify(s, threshold);
        }
    }
}
