use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn hexagram() -> Command {
    let mut cmd = Command::cargo_bin("hexagram").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("HEXAGRAM_REGISTRY")
        .env_remove("HEXAGRAM_ARRANGEMENT")
        .env_remove("HEXAGRAM_CONFIG");
    cmd
}

fn json_output(args: &[&str]) -> serde_json::Value {
    let out = hexagram().args(args).args(["-o", "json"]).output().unwrap();
    assert!(out.status.success(), "{:?}", out);
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn show_resolves_opposite() {
    let report = json_output(&["show", "1"]);
    assert_eq!(report["name"], "Qian");
    assert_eq!(report["lines"], "111111");
    assert_eq!(report["relationships"]["opposite"], 2);
    assert_eq!(report["relationships"]["inverse"], 1);
    assert_eq!(report["relationships"]["sequential"]["previous"], 64);
}

#[test]
fn show_table_lists_relations() {
    hexagram()
        .args(["show", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hexagram 5 Xu"))
        .stdout(predicate::str::contains("6 Song"))
        .stdout(predicate::str::contains("symmetrical"));
}

#[test]
fn show_unknown_id_fails() {
    hexagram()
        .args(["show", "65"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found: hexagram 65"));
}

#[test]
fn grid_places_index_nine_at_row_one_col_one() {
    let report = json_output(&["grid"]);
    assert_eq!(report["mode"], "registry");
    assert_eq!(report["rows"].as_array().unwrap().len(), 8);
    assert_eq!(report["rows"][1][1]["id"], 10);
}

#[test]
fn grid_with_arrangement_keeps_empty_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arrangement.json");
    fs::write(&path, "[[64, 99], [1]]").unwrap();

    let out = hexagram()
        .args(["grid", "-o", "json", "--arrangement"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["mode"], "arrangement");
    assert_eq!(report["rows"][0][0]["name"], "Wei Ji");
    assert!(report["rows"][0][1].is_null());
    assert_eq!(report["rows"][1][0]["id"], 1);
}

#[test]
fn find_reports_misses_without_failing() {
    hexagram()
        .args(["find", "000101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no hexagram with lines 000101"));

    let report = json_output(&["find", "111000"]);
    assert_eq!(report["hexagram"], "11 Tai");
    assert_eq!(report["symmetrical"].as_array().unwrap().len(), 3);
}

#[test]
fn find_rejects_malformed_lines() {
    hexagram()
        .args(["find", "1110"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn trigrams_yaml() {
    hexagram()
        .args(["trigrams", "-o", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("label: Qian (Heaven)"))
        .stdout(predicate::str::contains("lines: '000'").or(predicate::str::contains("lines: \"000\"")));
}

#[test]
fn annotate_depth_one() {
    let report = json_output(&["annotate", "1", "x", "v", "--depth", "1"]);
    assert_eq!(report["writes"], 41);
    assert_eq!(report["value"], "v");
    let annotated = report["annotated"].as_array().unwrap();
    let kun = annotated.iter().find(|row| row["id"] == 2).unwrap();
    assert!(kun["keys"].as_str().unwrap().contains("x_opposite"));
    assert!(annotated
        .iter()
        .all(|row| !row["keys"].as_str().unwrap().contains("_opposite_opposite")));
}

#[test]
fn annotate_parses_typed_values() {
    let report = json_output(&["annotate", "2", "weight", "2.5", "--depth", "0"]);
    assert_eq!(report["writes"], 1);
    assert_eq!(report["value"], 2.5);
}

#[test]
fn fingerprint_is_stable() {
    let first = json_output(&["fingerprint"]);
    let second = json_output(&["fingerprint"]);
    assert_eq!(first, second);
    assert_eq!(first["fingerprint"].as_str().unwrap().len(), 64);
    assert_eq!(first["hexagrams"], 64);
    assert_eq!(first["distinct_patterns"], 43);
}

#[test]
fn fingerprint_expect_checks_digest() {
    let report = json_output(&["fingerprint"]);
    let digest = report["fingerprint"].as_str().unwrap().to_string();

    hexagram()
        .args(["fingerprint", "--expect", &digest[..16]])
        .assert()
        .success();

    hexagram()
        .args(["fingerprint", "--expect", "000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fingerprint mismatch"));
}

#[test]
fn custom_registry_and_config() {
    let dir = tempfile::tempdir().unwrap();
    let registry = dir.path().join("registry.json");
    fs::write(
        &registry,
        r#"[
            {"id": 1, "name": "Up", "lines": ["Yang", "Yin", "Yin", "Yin", "Yin", "Yin"]},
            {"id": 2, "name": "Down", "lines": ["Yin", "Yin", "Yin", "Yin", "Yin", "Yang"]}
        ]"#,
    )
    .unwrap();
    let config = dir.path().join("engine.toml");
    fs::write(&config, "grid_columns = 1\n").unwrap();

    let out = hexagram()
        .args(["grid", "-o", "json", "--registry"])
        .arg(&registry)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(out.status.success(), "{:?}", out);
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["rows"].as_array().unwrap().len(), 2);
    assert_eq!(report["rows"][1][0]["name"], "Down");

    let out = hexagram()
        .args(["show", "1", "-o", "json", "--registry"])
        .arg(&registry)
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["relationships"]["inverse"], 2);
}

#[test]
fn malformed_registry_entry_fails() {
    let dir = tempfile::tempdir().unwrap();
    let registry = dir.path().join("registry.json");
    fs::write(&registry, r#"[{"id": 1, "name": "Short", "lines": ["Yang"]}]"#).unwrap();

    hexagram()
        .args(["fingerprint", "--registry"])
        .arg(&registry)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid registry entry 1"));
}

#[test]
fn annotate_ignores_seeded_keys_sharing_a_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let registry = dir.path().join("registry.json");
    fs::write(
        &registry,
        r#"[
            {"id": 1, "name": "Up", "lines": ["Yang", "Yin", "Yin", "Yin", "Yin", "Yin"],
             "data": {"xyz": 1}},
            {"id": 2, "name": "Down", "lines": ["Yin", "Yin", "Yin", "Yin", "Yin", "Yang"]}
        ]"#,
    )
    .unwrap();

    let out = hexagram()
        .args(["annotate", "2", "x", "v", "--depth", "0", "-o", "json", "--registry"])
        .arg(&registry)
        .output()
        .unwrap();
    assert!(out.status.success(), "{:?}", out);
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let annotated = report["annotated"].as_array().unwrap();
    assert_eq!(annotated.len(), 1);
    assert_eq!(annotated[0]["id"], 2);
    assert_eq!(annotated[0]["keys"], "x");
}
