//! Intensity histograms of 8-bit images.

use crate::{GrayImageView, SegmentError};

/// Number of intensity levels of an 8-bit sample.
pub const LEVELS: usize = 256;

/// Pixel counts per intensity level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; LEVELS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            counts: [0; LEVELS],
        }
    }
}

impl Histogram {
    /// Tally every visible pixel of `img` in a single pass.
    pub fn from_view(img: &GrayImageView<'_>) -> Self {
        let mut hist = Self::default();
        for row in img.rows() {
            hist.accumulate(row);
        }
        hist
    }

    /// Build a histogram directly from counts, e.g. one computed elsewhere.
    pub fn from_counts(counts: [u64; LEVELS]) -> Self {
        Self { counts }
    }

    /// Add a run of samples to the tally.
    pub fn accumulate(&mut self, samples: &[u8]) {
        for &v in samples {
            self.counts[v as usize] += 1;
        }
    }

    pub fn counts(&self) -> &[u64; LEVELS] {
        &self.counts
    }

    pub fn count(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    /// Sum of all counts, i.e. the pixel count of the source image.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    pub fn nonzero_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Divide every count by the total, giving a probability distribution.
    pub fn normalize(&self) -> Result<NormalizedHistogram, SegmentError> {
        let n = self.total();
        if n == 0 {
            return Err(SegmentError::EmptyHistogram);
        }
        let n = n as f64;
        let mut probabilities = [0f64; LEVELS];
        for (p, &c) in probabilities.iter_mut().zip(self.counts.iter()) {
            *p = c as f64 / n;
        }
        Ok(NormalizedHistogram { probabilities })
    }
}

/// Tally the intensities of `img`.
pub fn build_histogram(img: &GrayImageView<'_>) -> Histogram {
    Histogram::from_view(img)
}

/// Probability of each intensity level; sums to 1 up to rounding.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedHistogram {
    probabilities: [f64; LEVELS],
}

impl NormalizedHistogram {
    pub fn probabilities(&self) -> &[f64; LEVELS] {
        &self.probabilities
    }

    /// Global intensity mean `Σ i·p[i]`.
    pub fn mean(&self) -> f64 {
        let mut mean = 0f64;
        for (i, &p) in self.probabilities.iter().enumerate() {
            mean += i as f64 * p;
        }
        mean
    }
}
