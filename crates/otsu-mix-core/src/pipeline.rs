//! End-to-end segmentation and compositing.

use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    apply_threshold, build_histogram, mix_images, solve_otsu, GrayImage, GrayImageView, Histogram,
    OtsuThreshold, SegmentError,
};

/// Histogram, threshold and mask of one image.
#[derive(Clone, Debug)]
pub struct Segmentation {
    pub histogram: Histogram,
    pub threshold: OtsuThreshold,
    pub mask: GrayImage,
}

impl Segmentation {
    /// Fraction of mask pixels in the white class.
    pub fn white_fraction(&self) -> f64 {
        white_fraction(&self.histogram, self.threshold.threshold)
    }
}

/// Result of [`otsu_mix`] and [`mix_with_threshold`].
#[derive(Clone, Debug)]
pub struct MixOutput {
    pub threshold: OtsuThreshold,
    pub mask: GrayImage,
    pub mixed: GrayImage,
    /// Fraction of pixels taken from the white source.
    pub white_fraction: f64,
}

/// Threshold `img` with Otsu's method and build its mask.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img), fields(width = img.width(), height = img.height()))
)]
pub fn segment(img: &GrayImageView<'_>) -> Result<Segmentation, SegmentError> {
    let histogram = build_histogram(img);
    debug!(
        "histogram: {} pixels over {} levels",
        histogram.total(),
        histogram.nonzero_bins()
    );
    let threshold = solve_otsu(&histogram)?;
    let mask = apply_threshold(img, threshold.threshold);
    Ok(Segmentation {
        histogram,
        threshold,
        mask,
    })
}

/// Segment `white` and use its mask to pick between `white` and `black`.
///
/// Both sources must share dimensions; this is checked before any work.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip_all, fields(width = black.width(), height = black.height()))
)]
pub fn otsu_mix(
    white: &GrayImageView<'_>,
    black: &GrayImageView<'_>,
) -> Result<MixOutput, SegmentError> {
    SegmentError::check_dims("white source", black.dims(), white.dims())?;
    let seg = segment(white)?;
    let white_fraction = seg.white_fraction();
    let mixed = mix_images(white, black, &seg.mask.view())?;
    Ok(MixOutput {
        threshold: seg.threshold,
        mask: seg.mask,
        mixed,
        white_fraction,
    })
}

/// Like [`otsu_mix`] with a caller-chosen threshold instead of Otsu's.
///
/// The returned `threshold.variance` is not evaluated and is left at 0.
pub fn mix_with_threshold(
    white: &GrayImageView<'_>,
    black: &GrayImageView<'_>,
    threshold: u8,
) -> Result<MixOutput, SegmentError> {
    SegmentError::check_dims("white source", black.dims(), white.dims())?;
    let histogram = build_histogram(white);
    let mask = apply_threshold(white, threshold);
    let mixed = mix_images(white, black, &mask.view())?;
    Ok(MixOutput {
        threshold: OtsuThreshold {
            threshold,
            variance: 0.0,
            degenerate: false,
        },
        mask,
        mixed,
        white_fraction: white_fraction(&histogram, threshold),
    })
}

fn white_fraction(hist: &Histogram, threshold: u8) -> f64 {
    let total = hist.total();
    if total == 0 {
        return 0.0;
    }
    let above: u64 = hist.counts()[threshold as usize + 1..].iter().sum();
    above as f64 / total as f64
}
