#![cfg(feature = "image")]

use otsu_mix::files::{gray_image_from_slice, load_gray, mix_gray_images, save_gray};
use otsu_mix::MixError;

fn scene(width: u32, height: u32) -> image::GrayImage {
    image::GrayImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Luma([40])
        } else {
            image::Luma([210])
        }
    })
}

#[test]
fn png_round_trip_through_core_image() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gray.png");
    let img = gray_image_from_slice(3, 2, &[0, 50, 100, 150, 200, 250]).expect("image");
    save_gray(&path, &img).expect("save");

    let loaded = load_gray(&path).expect("load");
    assert_eq!(loaded.dimensions(), (3, 2));
    assert_eq!(loaded.as_raw(), img.as_raw());
}

#[test]
fn color_input_is_converted_to_luma() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rgb.png");
    image::RgbImage::from_pixel(4, 4, image::Rgb([128, 128, 128]))
        .save(&path)
        .expect("save rgb");

    let loaded = load_gray(&path).expect("load");
    assert_eq!(loaded.dimensions(), (4, 4));
    assert!(loaded.pixels().all(|p| p.0[0] == 128));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_gray(dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, MixError::Io(_)), "got {err:?}");
}

#[test]
fn mix_takes_bright_half_from_white_source() {
    let white = scene(8, 4);
    let black = image::GrayImage::from_pixel(8, 4, image::Luma([7]));
    let out = mix_gray_images(&white, &black).expect("mix");

    assert_eq!(out.threshold.threshold, 40);
    assert_eq!(out.white_fraction, 0.5);
    for y in 0..4 {
        let row = &out.mixed.as_raw()[y * 8..(y + 1) * 8];
        assert_eq!(row, &[7, 7, 7, 7, 210, 210, 210, 210]);
    }
}
