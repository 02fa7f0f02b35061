//! CLI end-to-end tests
//!
//! Tests for the bdmux command-line interface.

mod common;

use assert_cmd::prelude::*;
use common::{secs, DiscFixture};
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the bdmux binary
#[allow(deprecated)]
fn bdmux_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bdmux").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = bdmux_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = bdmux_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bdmux"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = bdmux_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bdmux "));
}

#[test]
fn test_cli_scan_lists_playlists() {
    let disc = DiscFixture::feature_disc();

    let mut cmd = bdmux_cmd();
    cmd.arg("scan")
        .arg(disc.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Playlists: 3"))
        .stdout(predicate::str::contains("00800.mpls"));
}

#[test]
fn test_cli_scan_missing_stream_dir() {
    let disc = DiscFixture::feature_disc();
    fs::remove_dir_all(disc.path("STREAM")).unwrap();

    let mut cmd = bdmux_cmd();
    cmd.arg("scan")
        .arg(disc.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("STREAM directory not found"));
}

#[test]
fn test_cli_scan_nonexistent_root() {
    let mut cmd = bdmux_cmd();
    cmd.args(["scan", "/nonexistent/BDMV"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a disc root"));
}

#[test]
fn test_cli_select_picks_feature() {
    let disc = DiscFixture::feature_disc();

    let mut cmd = bdmux_cmd();
    cmd.arg("select")
        .arg(disc.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("00800.mpls"))
        .stdout(predicate::str::contains("Segments: 3"))
        .stdout(predicate::str::contains("Skipped playlists: 1"))
        .stderr(predicate::str::contains("Failed to parse playlist"))
        .stderr(predicate::str::contains("00002.mpls"));
}

#[test]
fn test_cli_select_json() {
    let disc = DiscFixture::feature_disc();

    let output = bdmux_cmd()
        .args(["select", "--json"])
        .arg(disc.root())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["selected"]["total_duration_ms"], 2_100_000);
    assert_eq!(json["selected"]["segment_count"], 3);
    assert!(json["warning"].is_null());
    assert_eq!(json["rejected"].as_array().unwrap().len(), 1);
}

#[test]
fn test_cli_select_single_segment_warns() {
    let disc = DiscFixture::new()
        .with_clips(&[1])
        .with_playlist("00000.mpls", &[(1, 0, secs(90))]);

    let mut cmd = bdmux_cmd();
    cmd.arg("select")
        .arg(disc.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("No playlist with segment count > 1"));
}

#[test]
fn test_cli_select_no_usable_playlists() {
    let disc = DiscFixture::new().with_raw_playlist("00000.mpls", b"garbage");

    let mut cmd = bdmux_cmd();
    cmd.arg("select")
        .arg(disc.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could be decoded"));
}

#[test]
fn test_cli_inspect_named_playlist() {
    let disc = DiscFixture::feature_disc();

    let mut cmd = bdmux_cmd();
    cmd.args(["inspect", "--playlist", "00001"])
        .arg(disc.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("00001.mpls"))
        .stdout(predicate::str::contains("00010.m2ts"))
        .stdout(predicate::str::contains("Chapters: 1"));
}

#[test]
fn test_cli_inspect_json_chapter_marks() {
    let disc = DiscFixture::feature_disc();

    let output = bdmux_cmd()
        .args(["inspect", "--json"])
        .arg(disc.root())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["chapter_marks_ms"],
        serde_json::json!([0, 600_000, 1_800_000, 2_100_000])
    );
    assert_eq!(json["segments"][1]["start_ms"], 1000);
}

#[test]
fn test_cli_inspect_missing_segment() {
    let disc = DiscFixture::feature_disc();
    fs::remove_file(disc.path("STREAM/00002.m2ts")).unwrap();

    let mut cmd = bdmux_cmd();
    cmd.args(["inspect", "-p", "00800.mpls"])
        .arg(disc.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("00002.m2ts"));
}

#[test]
fn test_cli_chapters_to_stdout() {
    let disc = DiscFixture::feature_disc();

    let mut cmd = bdmux_cmd();
    cmd.arg("chapters")
        .arg(disc.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("CHAPTER01=00:00:00.000"))
        .stdout(predicate::str::contains("CHAPTER02=00:10:00.000"))
        .stdout(predicate::str::contains("CHAPTER03NAME=Chapter 3"));
}

#[test]
fn test_cli_chapters_to_file_with_config_titles() {
    let disc = DiscFixture::feature_disc();
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("bdmux.toml");
    let output_file = temp.path().join("chapters.txt");

    fs::write(
        &config_file,
        r#"
[playlist]
default = "00800.mpls"

[chapters]
title_template = "Part {nn}"
"#,
    )
    .unwrap();

    let mut cmd = bdmux_cmd();
    cmd.arg("--config")
        .arg(&config_file)
        .arg("chapters")
        .arg(disc.root())
        .arg("--output")
        .arg(&output_file)
        .assert()
        .success();

    let ogm = fs::read_to_string(&output_file).unwrap();
    assert!(ogm.contains("CHAPTER03=00:30:00.000\n"));
    assert!(ogm.contains("CHAPTER01NAME=Part 01\n"));
    assert_eq!(ogm.lines().count(), 6);
}

#[test]
fn test_cli_validate_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("bdmux.toml");
    fs::write(&config_file, "[general]\nlog_level = \"debug\"\n").unwrap();

    let mut cmd = bdmux_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("bdmux.toml");
    fs::write(&config_file, "[playlist]\ndefault = \"00800.m2ts\"\n").unwrap();

    let mut cmd = bdmux_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be \"auto\""));
}
