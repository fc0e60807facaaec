use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/city.json")
        .canonicalize()
        .expect("fixture map present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("cityroute-cli");
    cmd.env("RUST_LOG", "error").env_remove("CITYROUTE_MAP");
    cmd
}

#[test]
fn streets_lists_each_street_once() {
    let output = cli()
        .arg("--map")
        .arg(fixture_path())
        .arg("streets")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).expect("utf8");
    assert_eq!(text.lines().count(), 49);
    assert!(text.contains("The street between 0.5 and 1 takes 1"));
}

#[test]
fn places_json_lists_labels() {
    let output = cli()
        .arg("--map")
        .arg(fixture_path())
        .args(["--format", "json", "places"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let places: Vec<String> = serde_json::from_slice(&output).expect("json array");
    assert_eq!(places.len(), 33);
    assert_eq!(places[0], "Cinema");
    assert!(places.contains(&"Fire Station".to_string()));
}

#[test]
fn exported_graph_reloads_with_graph_flag() {
    let dir = tempdir().unwrap();
    let graph_path = dir.path().join("city-graph.json");

    cli()
        .arg("--map")
        .arg(fixture_path())
        .args(["export", "--as", "json", "--output"])
        .arg(&graph_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    cli()
        .arg("--graph")
        .arg(&graph_path)
        .args(["route", "--from", "Cinema", "--to", "Police"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(time: 5)"));
}

#[test]
fn geojson_export_has_lines_and_points() {
    let dir = tempdir().unwrap();
    let geo_path = dir.path().join("city.geojson");

    cli()
        .arg("--map")
        .arg(fixture_path())
        .args(["export", "--as", "geojson", "--output"])
        .arg(&geo_path)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&geo_path).unwrap()).unwrap();
    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 49 + 33);
    assert_eq!(features[0]["geometry"]["type"], "LineString");
    assert_eq!(features[49]["geometry"]["type"], "Point");
}

#[test]
fn map_and_graph_flags_conflict() {
    cli()
        .arg("--map")
        .arg(fixture_path())
        .arg("--graph")
        .arg(fixture_path())
        .arg("places")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be combined"));
}

#[test]
fn neighbours_json_carries_street_times() {
    let output = cli()
        .arg("--map")
        .arg(fixture_path())
        .args(["--format", "json", "neighbours", "--place", "Cinema"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).expect("json array");
    assert_eq!(
        rows,
        serde_json::json!([{"place": "0.5", "time": 1.0}, {"place": "2", "time": 1.0}])
    );
}

#[test]
fn neighbours_of_unknown_place_fail() {
    cli()
        .arg("--map")
        .arg(fixture_path())
        .args(["neighbours", "--place", "Cinmea"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown place 'Cinmea'"));
}
