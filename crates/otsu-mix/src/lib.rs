//! Facade crate for Otsu segmentation and mask-driven compositing.
//!
//! This crate provides:
//! - re-exports of `otsu-mix-core` as [`core`] and of its main entry points
//! - (feature `image`) adapters between `image::GrayImage` and the core view
//!   types, plus helpers that decode, mix and encode image files
//! - a serializable [`MixReport`] describing one compositing run
//!
//! ## Quickstart
//!
//! ```no_run
//! use otsu_mix::files::{load_gray, mix_gray_images, save_gray};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let white = load_gray("a.jpg")?;
//! let black = load_gray("b.jpg")?;
//! let out = mix_gray_images(&white, &black)?;
//! println!("threshold: {}", out.threshold.threshold);
//! save_gray("mix.png", &out.mixed)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod report;

pub use error::MixError;
pub use report::{write_report, MixReport};

pub use otsu_mix_core as core;
pub use otsu_mix_core::{
    apply_threshold, build_histogram, mix_images, otsu_mix, otsu_threshold, segment, solve_otsu,
    GrayImage, GrayImageView, Histogram, MixOutput, OtsuThreshold, SegmentError,
};

#[cfg(feature = "image")]
pub mod files;
