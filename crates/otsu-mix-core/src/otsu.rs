//! Global threshold selection with Otsu's method.
//!
//! The sweep visits every level `i` in `0..=255`, accumulating the class
//! probability `ω(i)` and first moment `μ(i)` up to and including `i`. Where
//! `0 < ω(i) < 1` the between-class variance
//!
//! ```text
//! σ²(i) = (μ_T·ω(i) − μ(i))² / (ω(i)·(1 − ω(i)))
//! ```
//!
//! is evaluated, and the first level reaching the maximum wins.

use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Histogram, SegmentError};

/// Threshold returned for histograms where every level falls in one class.
pub const DEGENERATE_THRESHOLD: u8 = 0;

/// Outcome of the Otsu sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OtsuThreshold {
    /// Highest intensity of the dark class; pixels `> threshold` are white.
    pub threshold: u8,
    /// Between-class variance at `threshold` (0 when degenerate).
    pub variance: f64,
    /// `true` when no level split the histogram into two non-empty classes.
    pub degenerate: bool,
}

/// Run the Otsu sweep over `hist`.
///
/// Fails with [`SegmentError::EmptyHistogram`] when `hist` has no samples.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(hist), fields(total = hist.total()))
)]
pub fn solve_otsu(hist: &Histogram) -> Result<OtsuThreshold, SegmentError> {
    let norm = hist.normalize()?;
    let global_mean = norm.mean();

    let mut cumulative_sum = 0f64;
    let mut cumulative_mean = 0f64;
    let mut best_variance = 0f64;
    let mut best_t = DEGENERATE_THRESHOLD;
    let mut split_found = false;

    for (i, &p) in norm.probabilities().iter().enumerate() {
        cumulative_mean += i as f64 * p;
        cumulative_sum += p;

        if 0.0 < cumulative_sum && cumulative_sum < 1.0 {
            split_found = true;
            let num = global_mean * cumulative_sum - cumulative_mean;
            let variance = num * num / (cumulative_sum * (1.0 - cumulative_sum));
            if variance > best_variance {
                best_variance = variance;
                best_t = i as u8;
            }
        }
    }

    if !split_found {
        debug!(
            "degenerate histogram ({} non-empty bins), threshold defaults to {}",
            hist.nonzero_bins(),
            DEGENERATE_THRESHOLD
        );
    }
    debug!("otsu threshold = {best_t} (between-class variance {best_variance:.3})");

    Ok(OtsuThreshold {
        threshold: best_t,
        variance: best_variance,
        degenerate: !split_found,
    })
}

/// Otsu threshold of `hist`; see [`solve_otsu`].
pub fn otsu_threshold(hist: &Histogram) -> Result<u8, SegmentError> {
    solve_otsu(hist).map(|r| r.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::LEVELS;
    use approx::assert_relative_eq;

    fn hist_from(pairs: &[(usize, u64)]) -> Histogram {
        let mut counts = [0u64; LEVELS];
        for &(level, count) in pairs {
            counts[level] = count;
        }
        Histogram::from_counts(counts)
    }

    #[test]
    fn two_levels_pick_first_plateau_index() {
        let res = solve_otsu(&hist_from(&[(10, 2), (200, 2)])).expect("non-empty");
        assert_eq!(res.threshold, 10);
        assert!(!res.degenerate);
        // (105 * 0.5 - 5)^2 / 0.25
        assert_relative_eq!(res.variance, 9025.0, epsilon = 1e-9);
    }

    #[test]
    fn single_level_is_degenerate() {
        for level in [0usize, 17, 255] {
            let res = solve_otsu(&hist_from(&[(level, 1000)])).expect("non-empty");
            assert!(res.degenerate);
            assert_eq!(res.threshold, DEGENERATE_THRESHOLD);
            assert_eq!(res.variance, 0.0);
        }
    }

    #[test]
    fn empty_histogram_is_an_error() {
        assert_eq!(
            otsu_threshold(&Histogram::default()).unwrap_err(),
            SegmentError::EmptyHistogram
        );
    }

    #[test]
    fn threshold_separates_two_clusters() {
        // Dark cluster around 40, bright cluster around 180.
        let hist = hist_from(&[
            (38, 50),
            (40, 200),
            (42, 50),
            (178, 60),
            (180, 240),
            (182, 60),
        ]);
        let t = otsu_threshold(&hist).expect("non-empty");
        assert!((42..178).contains(&t), "threshold {t} should split clusters");
        assert_eq!(t, 42);
    }

    #[test]
    fn unbalanced_classes_still_split() {
        let hist = hist_from(&[(0, 1), (255, 999)]);
        let res = solve_otsu(&hist).expect("non-empty");
        assert_eq!(res.threshold, 0);
        assert!(!res.degenerate);
        assert!(res.variance > 0.0);
    }
}
