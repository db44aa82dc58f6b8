#![cfg(feature = "cli")]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_inputs(dir: &Path) {
    image::GrayImage::from_fn(6, 4, |x, _| image::Luma([if x < 3 { 20 } else { 230 }]))
        .save(dir.join("a.png"))
        .expect("save white");
    image::GrayImage::from_pixel(6, 4, image::Luma([99]))
        .save(dir.join("b.png"))
        .expect("save black");
}

fn otsu_mix_cmd() -> Command {
    Command::cargo_bin("otsu-mix").expect("binary")
}

#[test]
fn composites_and_writes_outputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_inputs(dir.path());

    otsu_mix_cmd()
        .current_dir(dir.path())
        .args([
            "--white", "a.png", "--black", "b.png", "--output", "mix.png", "--mask",
            "mask.png", "--report", "out/report.json",
        ])
        .assert()
        .success();

    let mixed = image::open(dir.path().join("mix.png"))
        .expect("mix")
        .to_luma8();
    assert_eq!(mixed.dimensions(), (6, 4));
    for (x, _, p) in mixed.enumerate_pixels() {
        assert_eq!(p.0[0], if x < 3 { 99 } else { 230 });
    }

    let mask = image::open(dir.path().join("mask.png"))
        .expect("mask")
        .to_luma8();
    for (x, _, p) in mask.enumerate_pixels() {
        assert_eq!(p.0[0], if x < 3 { 0 } else { 255 });
    }

    let raw = std::fs::read_to_string(dir.path().join("out/report.json")).expect("report");
    let report: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(report["threshold"], 20);
    assert_eq!(report["manual_threshold"], false);
    assert_eq!(report["degenerate"], false);
    assert_eq!(report["white_fraction"], 0.5);
}

#[test]
fn manual_threshold_overrides_otsu() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_inputs(dir.path());

    otsu_mix_cmd()
        .current_dir(dir.path())
        .args([
            "--white", "a.png", "--black", "b.png", "--threshold", "250", "--report",
            "report.json",
        ])
        .assert()
        .success();

    let mixed = image::open(dir.path().join("mix.png"))
        .expect("default output path")
        .to_luma8();
    assert!(mixed.pixels().all(|p| p.0[0] == 99));

    let raw = std::fs::read_to_string(dir.path().join("report.json")).expect("report");
    let report: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(report["threshold"], 250);
    assert_eq!(report["manual_threshold"], true);
}

#[test]
fn mismatched_inputs_fail() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_inputs(dir.path());
    image::GrayImage::new(5, 5)
        .save(dir.path().join("small.png"))
        .expect("save small");

    otsu_mix_cmd()
        .current_dir(dir.path())
        .args(["--white", "a.png", "--black", "small.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DimensionMismatch"));
    assert!(!dir.path().join("mix.png").exists());
}

#[test]
fn out_of_range_threshold_is_rejected() {
    otsu_mix_cmd()
        .args(["--threshold", "256"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--threshold"));
}
