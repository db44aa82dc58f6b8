use std::path::Path;

use image::ImageReader;
use otsu_mix_core::{self as core, MixOutput};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::MixError;

/// Borrow an `image::GrayImage` as a core view.
pub fn gray_view(img: &::image::GrayImage) -> Result<core::GrayImageView<'_>, MixError> {
    Ok(core::GrayImageView::new(
        img.width() as usize,
        img.height() as usize,
        img.as_raw(),
    )?)
}

/// Convert a core image into an `image::GrayImage` for encoding.
pub fn to_gray_image(img: &core::GrayImage) -> Result<::image::GrayImage, MixError> {
    let (Ok(width), Ok(height)) = (u32::try_from(img.width()), u32::try_from(img.height())) else {
        return Err(MixError::InvalidGrayDimensions {
            width: img.width(),
            height: img.height(),
        });
    };
    ::image::GrayImage::from_raw(width, height, img.as_raw().to_vec()).ok_or(
        MixError::InvalidGrayBuffer {
            expected: img.width() * img.height(),
            got: img.as_raw().len(),
        },
    )
}

/// Build a core image from a raw grayscale buffer.
pub fn gray_image_from_slice(
    width: usize,
    height: usize,
    pixels: &[u8],
) -> Result<core::GrayImage, MixError> {
    let Some(expected) = width.checked_mul(height) else {
        return Err(MixError::InvalidGrayDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(MixError::InvalidGrayBuffer {
            expected,
            got: pixels.len(),
        });
    }
    Ok(core::GrayImage::from_raw(width, height, pixels.to_vec())?)
}

/// Decode an image file and convert it to 8-bit luma.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(path), fields(path = %path.as_ref().display())))]
pub fn load_gray(path: impl AsRef<Path>) -> Result<::image::GrayImage, MixError> {
    let img = ImageReader::open(path.as_ref())?.decode()?.to_luma8();
    log::debug!(
        "loaded {} ({}x{})",
        path.as_ref().display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Encode a core image; the format follows the file extension.
pub fn save_gray(path: impl AsRef<Path>, img: &core::GrayImage) -> Result<(), MixError> {
    to_gray_image(img)?.save(path.as_ref())?;
    Ok(())
}

/// Threshold `white` with Otsu's method and composite it over `black`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(white, black), fields(width = black.width(), height = black.height()))
)]
pub fn mix_gray_images(
    white: &::image::GrayImage,
    black: &::image::GrayImage,
) -> Result<MixOutput, MixError> {
    Ok(core::otsu_mix(&gray_view(white)?, &gray_view(black)?)?)
}
