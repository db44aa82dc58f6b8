//! Mask-driven per-pixel selection between two images.
//!
//! This is a hard switch, not a blend: a zero mask sample takes the `black`
//! source, any other value takes the `white` source.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{GrayImage, GrayImageView, SegmentError};

/// Composite `white` and `black` through `mask` into a new image.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip_all, fields(width = black.width(), height = black.height()))
)]
pub fn mix_images(
    white: &GrayImageView<'_>,
    black: &GrayImageView<'_>,
    mask: &GrayImageView<'_>,
) -> Result<GrayImage, SegmentError> {
    check_sources(white, black, mask)?;
    let mut out = GrayImage::new(black.width(), black.height());
    fill_mix(white, black, mask, &mut out);
    Ok(out)
}

/// Composite into `out`. All dimensions are validated before any write.
pub fn mix_images_into(
    white: &GrayImageView<'_>,
    black: &GrayImageView<'_>,
    mask: &GrayImageView<'_>,
    out: &mut GrayImage,
) -> Result<(), SegmentError> {
    check_sources(white, black, mask)?;
    SegmentError::check_dims("mix output", black.dims(), out.dims())?;
    fill_mix(white, black, mask, out);
    Ok(())
}

fn check_sources(
    white: &GrayImageView<'_>,
    black: &GrayImageView<'_>,
    mask: &GrayImageView<'_>,
) -> Result<(), SegmentError> {
    SegmentError::check_dims("white source", black.dims(), white.dims())?;
    SegmentError::check_dims("mask", black.dims(), mask.dims())
}

fn fill_mix(
    white: &GrayImageView<'_>,
    black: &GrayImageView<'_>,
    mask: &GrayImageView<'_>,
    out: &mut GrayImage,
) {
    let rows = white.rows().zip(black.rows()).zip(mask.rows());
    for (((w, b), m), dst) in rows.zip(out.rows_mut()) {
        for (x, d) in dst.iter_mut().enumerate() {
            *d = if m[x] == 0 { b[x] } else { w[x] };
        }
    }
}
