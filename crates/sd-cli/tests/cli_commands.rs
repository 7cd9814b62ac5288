//! Integration tests for the sd CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spider() -> Command {
    Command::cargo_bin("spider").unwrap()
}

/// Write a layout file into a temp directory.
fn layout_file(radius: f64) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bowl.json");
    fs::write(
        &path,
        format!(
            r#"{{
    "center": {{ "x": 340.0, "y": 195.0 }},
    "radius": {radius},
    "stick": {{ "a": {{ "x": 400.0, "y": 260.0 }}, "b": {{ "x": 420.0, "y": 220.0 }} }},
    "stone": {{ "center": {{ "x": 263.0, "y": 137.0 }}, "radius": 12.0 }},
    "hole": {{ "center": {{ "x": 370.0, "y": 155.0 }}, "radius": 15.0 }}
}}"#
        ),
    )
    .unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// interpret
// ---------------------------------------------------------------------------

#[test]
fn interpret_card_over_stick() {
    spider()
        .args(["interpret", "--x", "410", "--y", "240"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("mask:    9")
                .and(predicate::str::contains("is over stick is pointing to stick")),
        );
}

#[test]
fn interpret_card_on_hole() {
    spider()
        .args(["interpret", "--x", "370", "--y", "155", "--angle", "37"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is over hole"));
}

#[test]
fn interpret_card_with_no_reading() {
    spider()
        .args(["interpret", "--x", "320", "--y", "230", "--angle", "180"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No special position"));
}

// ---------------------------------------------------------------------------
// cast
// ---------------------------------------------------------------------------

#[test]
fn cast_prints_table() {
    spider()
        .args(["cast", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cast")
                .and(predicate::str::contains("Reading"))
                .and(predicate::str::contains("leaves")),
        );
}

#[test]
fn cast_is_reproducible() {
    let first = spider().args(["cast", "--seed", "11", "--json"]).output().unwrap();
    let second = spider().args(["cast", "--seed", "11", "--json"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn cast_lottery_json_has_no_repeats() {
    let output = spider()
        .args(["cast", "--lottery", "--draws", "7", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let casts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let casts = casts.as_array().unwrap();
    assert_eq!(casts.len(), 7);

    let mut leaves: Vec<u64> = casts
        .iter()
        .flat_map(|c| c["cards"].as_array().unwrap().iter())
        .map(|card| card["leaf"].as_u64().unwrap())
        .collect();
    assert_eq!(leaves.len(), 42);
    leaves.sort_unstable();
    leaves.dedup();
    assert_eq!(leaves.len(), 42);

    for cast in casts {
        assert_eq!(cast["policy"], "Lottery");
        for card in cast["cards"].as_array().unwrap() {
            assert!(card["mask"].as_u64().unwrap() < 64);
            assert!(card["message"].is_string());
        }
    }
}

#[test]
fn cast_rejects_zero_draws() {
    spider()
        .args(["cast", "--draws", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn cast_with_custom_layout() {
    let (_dir, path) = layout_file(120.0);
    spider()
        .args(["cast", "--layout", path.to_str().unwrap()])
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// layout
// ---------------------------------------------------------------------------

#[test]
fn layout_prints_standard_bowl() {
    spider()
        .arg("layout")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"radius\": 95.0")
                .and(predicate::str::contains("\"stick\"")),
        );
}

#[test]
fn layout_rejects_small_bowl() {
    let (_dir, path) = layout_file(45.0);
    spider()
        .args(["layout", "--layout", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid bowl layout"));
}

#[test]
fn layout_reports_missing_file() {
    spider()
        .args(["layout", "--layout", "/nonexistent/bowl.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read layout"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_session_from_stdin() {
    spider()
        .args(["play", "--seed", "3"])
        .write_stdin("cast\nselect 1\nshow\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cast ")
                .and(predicate::str::contains("(#1)"))
                .and(predicate::str::contains("Casts: 1"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_quit_with_trailing_words_exits() {
    spider()
        .arg("play")
        .write_stdin("QUIT now\ncast\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!").and(predicate::str::contains("Cast ").not()));
}

#[test]
fn play_reports_errors_and_continues() {
    spider()
        .arg("play")
        .write_stdin("show\nfly\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("no tableau cast yet")
                .and(predicate::str::contains("unknown command: fly"))
                .and(predicate::str::contains("Goodbye!")),
        );
}
