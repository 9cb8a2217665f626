//! Runs the `panorama` binary.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use std::process::{Command, Output};

fn panorama(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_panorama"))
        .args(args)
        .current_dir(dir)
        .env_remove("PANORAMA_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run panorama")
}

#[test]
fn test_writes_default_output() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "in.ppm", &uniform_ppm(8, 4, colors::TEAL));

    let out = panorama(dir.path(), &["4x2", "in.ppm"]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let bytes = std::fs::read(dir.path().join("output.ppm")).unwrap();
    assert_uniform(assert_ppm(&bytes, 4, 2), colors::TEAL, 1);
}

#[test]
fn test_output_and_strategy_flags() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "in.ppm", &stripes_4x2());

    let out = panorama(
        dir.path(),
        &["2x2", "in.ppm", "--strategy", "nearest", "--output", "small.ppm"],
    );

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(!dir.path().join("output.ppm").exists());
    let bytes = std::fs::read(dir.path().join("small.ppm")).unwrap();
    for pixel in assert_ppm(&bytes, 2, 2).chunks_exact(3) {
        assert!(is_pure_red_or_blue(pixel), "blended pixel {pixel:?}");
    }
}

#[test]
fn test_config_file_sets_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "in.ppm", &stripes_4x2());
    write_fixture(
        dir.path(),
        "panorama.yaml",
        b"strategy: nearest\noutput: from-config.ppm\n",
    );

    let out = panorama(dir.path(), &["2x2", "in.ppm", "--config", "panorama.yaml"]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let bytes = std::fs::read(dir.path().join("from-config.ppm")).unwrap();
    for pixel in assert_ppm(&bytes, 2, 2).chunks_exact(3) {
        assert!(is_pure_red_or_blue(pixel), "blended pixel {pixel:?}");
    }
}

#[test]
fn test_upsampling_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "in.ppm", &stripes_4x2());

    let out = panorama(dir.path(), &["8x4", "in.ppm"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("must be smaller or equal"), "{stderr}");
    assert!(!dir.path().join("output.ppm").exists());
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = panorama(dir.path(), &["2x1", "absent.ppm"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("absent.ppm"), "{stderr}");
}

#[test]
fn test_bad_arguments_fail() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "in.ppm", &stripes_4x2());

    for args in [&["in.ppm"][..], &["2by1", "in.ppm"], &["0x1", "in.ppm"], &["2x1", "in.ppm", "extra"]] {
        let out = panorama(dir.path(), args);
        assert_eq!(out.status.code(), Some(1), "{args:?}");
    }
    assert!(!dir.path().join("output.ppm").exists());
}
