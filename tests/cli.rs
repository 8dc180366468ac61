use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

const FIXTURE: &str = "tests/data/movies_small.json";

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("treemap").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("treemap"));
}

#[test]
fn render_writes_an_html_page_from_a_local_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("index.html");
    let mut cmd = Command::cargo_bin("treemap").unwrap();
    cmd.args(["render", "--input", FIXTURE, "--out"]).arg(&out);
    cmd.assert().success();
    let html = std::fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches(r#"class="tile""#).count(), 7);
    assert!(html.contains(r#"id="legend""#));
    assert!(!html.contains(r#"id="tooltip""#));
}

#[test]
fn render_with_hover_includes_a_tooltip() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("chart.svg");
    let mut cmd = Command::cargo_bin("treemap").unwrap();
    cmd.args(["render", "--input", FIXTURE, "--hover", "100,100", "--out"])
        .arg(&out);
    cmd.assert().success();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert_eq!(svg.matches(r#"id="tooltip""#).count(), 1);
}

#[test]
fn render_rejects_padding_larger_than_canvas() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("treemap").unwrap();
    cmd.args(["render", "--input", FIXTURE, "--padding", "400", "--out"])
        .arg(dir.path().join("x.svg"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("leaves no room"));
}

#[test]
fn render_rejects_padding_that_overflows_the_margins() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("treemap").unwrap();
    cmd.args(["render", "--input", FIXTURE, "--padding", "3000000000", "--out"])
        .arg(dir.path().join("x.svg"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("leaves no room"))
        .stderr(predicate::str::contains("overflow").not());
}

#[test]
fn stats_prints_one_line_per_genre() {
    let mut cmd = Command::cargo_bin("treemap").unwrap();
    cmd.args(["stats", "--input", FIXTURE]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Action"))
        .stdout(predicate::str::contains("1,917,101,455"));
}

#[test]
fn fetch_from_file_exports_csv() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tiles.csv");
    let mut cmd = Command::cargo_bin("treemap").unwrap();
    cmd.args(["fetch", "--input", FIXTURE, "--out"]).arg(&out);
    cmd.assert().success();
    assert_eq!(std::fs::read_to_string(&out).unwrap().lines().count(), 8);
}

#[test]
fn missing_input_fails_with_context() {
    let mut cmd = Command::cargo_bin("treemap").unwrap();
    cmd.args(["stats", "--input", "tests/data/nope.json"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("load dataset"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn render_online_dataset() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("treemap").unwrap();
    cmd.args(["render", "--out"]).arg(dir.path().join("index.html"));
    cmd.assert().success();
}
