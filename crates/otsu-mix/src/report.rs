//! JSON summary of a compositing run.

use std::fs;
use std::path::Path;

use otsu_mix_core::{Dims, MixOutput};
use serde::{Deserialize, Serialize};

use crate::MixError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixReport {
    pub white_path: String,
    pub black_path: String,
    pub output_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_path: Option<String>,
    pub dims: Dims,
    pub threshold: u8,
    /// `true` when the threshold was supplied by the caller instead of Otsu.
    pub manual_threshold: bool,
    pub between_class_variance: f64,
    pub degenerate: bool,
    pub white_fraction: f64,
}

impl MixReport {
    /// Fill the threshold fields from an Otsu run; paths are left empty.
    pub fn from_output(out: &MixOutput) -> Self {
        Self {
            white_path: String::new(),
            black_path: String::new(),
            output_path: String::new(),
            mask_path: None,
            dims: out.mixed.dims(),
            threshold: out.threshold.threshold,
            manual_threshold: false,
            between_class_variance: out.threshold.variance,
            degenerate: out.threshold.degenerate,
            white_fraction: out.white_fraction,
        }
    }
}

/// Write `report` as pretty JSON, creating parent directories as needed.
pub fn write_report(path: impl AsRef<Path>, report: &MixReport) -> Result<(), MixError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use otsu_mix_core::{otsu_mix, GrayImageView};

    #[test]
    fn report_from_output_copies_threshold() {
        let white = [10u8, 200, 10, 200];
        let black = [0u8; 4];
        let out = otsu_mix(
            &GrayImageView::new(2, 2, &white).expect("white"),
            &GrayImageView::new(2, 2, &black).expect("black"),
        )
        .expect("mix");
        let report = MixReport::from_output(&out);
        assert_eq!(report.threshold, 10);
        assert_eq!(report.dims, Dims::new(2, 2));
        assert!(!report.degenerate);
        assert!(!report.manual_threshold);
        assert_eq!(report.white_fraction, 0.5);

        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["dims"]["width"], 2);
        assert!(json.get("mask_path").is_none());
    }
}
