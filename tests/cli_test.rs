//! End-to-end tests for the `stone-classifier` binary.
//!
//! Each test runs the binary inside its own temporary working directory, since
//! the model is looked up there.

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use tempfile::TempDir;

use stone_classifier::{config::MODEL_FILE, logging::LOG_ENV};

fn classifier_cmd(dir: &TempDir) -> Command {
    let mut cmd =
        Command::cargo_bin("stone-classifier").expect("stone-classifier binary should be built");
    cmd.current_dir(dir.path()).env_remove(LOG_ENV);
    cmd
}

fn write_image(dir: &TempDir, name: &str) {
    RgbImage::from_pixel(64, 64, Rgb([90, 60, 30]))
        .save(dir.path().join(name))
        .unwrap();
}

#[test]
fn test_no_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    classifier_cmd(&dir)
        .assert()
        .code(1)
        .stdout("Usage: stone-classifier <path_to_image>\n");
}

#[test]
fn test_two_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    classifier_cmd(&dir)
        .args(["a.png", "b.png"])
        .assert()
        .code(1)
        .stdout("Usage: stone-classifier <path_to_image>\n");
}

#[test]
fn test_hyphen_leading_image_is_classified() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(MODEL_FILE), b"this is not a model").unwrap();
    write_image(&dir, "-scan.png");

    let output = classifier_cmd(&dir).arg("-scan.png").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("Error: Model error"), "unexpected stdout: {stdout}");
    assert_eq!(stdout.lines().count(), 1, "stdout must be one line: {stdout}");
}

#[test]
fn test_help_flag_is_treated_as_image_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(MODEL_FILE), b"placeholder").unwrap();

    for arg in ["--help", "-V"] {
        classifier_cmd(&dir)
            .arg(arg)
            .assert()
            .code(1)
            .stdout(predicate::str::diff(format!(
                "Error: Image file not found at '{arg}'\n"
            )));
    }
}

#[test]
fn test_missing_model_is_reported_before_image() {
    let dir = TempDir::new().unwrap();
    classifier_cmd(&dir)
        .arg("missing.png")
        .assert()
        .code(1)
        .stdout(predicate::str::diff(format!(
            "Error: Model file not found at '{MODEL_FILE}'\n"
        )));
}

#[test]
fn test_missing_image() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(MODEL_FILE), b"placeholder").unwrap();

    classifier_cmd(&dir)
        .arg("missing.png")
        .assert()
        .code(1)
        .stdout("Error: Image file not found at 'missing.png'\n");
}

#[test]
fn test_corrupt_model_reports_error_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(MODEL_FILE), b"this is not a model").unwrap();
    write_image(&dir, "scan.png");

    let output = classifier_cmd(&dir).arg("scan.png").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("Error: "), "unexpected stdout: {stdout}");
    assert_eq!(stdout.lines().count(), 1, "stdout must be one line: {stdout}");
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(MODEL_FILE), b"this is not a model").unwrap();
    write_image(&dir, "scan.png");

    let output = classifier_cmd(&dir)
        .env(LOG_ENV, "debug")
        .arg("scan.png")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(stdout.lines().count(), 1, "stdout must be one line: {stdout}");
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_onnx_model_prints_label() {
    let dir = TempDir::new().unwrap();
    std::fs::copy(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/mean_sigmoid.onnx"),
        dir.path().join(MODEL_FILE),
    )
    .unwrap();
    RgbImage::from_pixel(64, 64, Rgb([0, 0, 0]))
        .save(dir.path().join("dark.png"))
        .unwrap();
    RgbImage::from_pixel(64, 64, Rgb([255, 255, 255]))
        .save(dir.path().join("bright.png"))
        .unwrap();

    classifier_cmd(&dir)
        .arg("dark.png")
        .assert()
        .code(0)
        .stdout("No Stone\n");
    classifier_cmd(&dir)
        .arg("bright.png")
        .assert()
        .code(0)
        .stdout("Stone\n");
}

