//! CLI catalog command integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const ITEMS: &str = r#"[
    {"uid": "etcd", "name": "etcd", "provider": "CNCF", "categories": ["Database"],
     "packageName": "etcd", "version": "0.9.4", "tags": ["kv"]},
    {"uid": "mongo", "name": "MongoDB", "provider": "MongoDB, Inc.", "categories": ["Database"],
     "description": "Enterprise document store"},
    {"uid": "prom", "name": "Prometheus", "provider": "Red Hat, Inc.", "categories": ["Monitoring"]}
]"#;

const SUBSCRIPTIONS: &str = r#"[{"metadata": {"name": "etcd"}, "spec": {"name": "etcd"}}]"#;

fn catalog_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("items.json"), ITEMS).unwrap();
    std::fs::write(dir.path().join("subs.json"), SUBSCRIPTIONS).unwrap();
    dir
}

fn ophub(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ophub").unwrap();
    cmd.env("OPHUB_ITEMS", dir.join("items.json"))
        .env("OPHUB_SUBSCRIPTIONS", dir.join("subs.json"));
    cmd
}

#[test]
fn test_list_simple_sorted_by_name() {
    let dir = catalog_dir();
    ophub(dir.path())
        .args(["list", "--simple"])
        .assert()
        .success()
        .stdout("MongoDB\nPrometheus\netcd\n");
}

#[test]
fn test_list_provider_filter_uses_synonyms() {
    let dir = catalog_dir();
    ophub(dir.path())
        .args(["list", "--simple", "--provider", "Red Hat"])
        .assert()
        .success()
        .stdout("Prometheus\n");
}

#[test]
fn test_list_json_reports_enabled() {
    let dir = catalog_dir();
    ophub(dir.path())
        .args(["list", "--json", "--search", "kv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"enabled\": true"))
        .stdout(predicate::str::contains("\"id\": \"etcd\""));
}

#[test]
fn test_list_unknown_category_fails() {
    let dir = catalog_dir();
    ophub(dir.path())
        .args(["list", "--category", "Networking"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: Networking"));
}

#[test]
fn test_list_without_items_fails_with_hint() {
    Command::cargo_bin("ophub")
        .unwrap()
        .env_remove("OPHUB_ITEMS")
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ophub --help"));
}

#[test]
fn test_filters_json() {
    let dir = catalog_dir();
    ophub(dir.path())
        .args(["filters", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"Red Hat\""))
        .stdout(predicate::str::contains("\"Monitoring\""));
}

#[test]
fn test_filters_unknown_field_rejected() {
    let dir = catalog_dir();
    ophub(dir.path())
        .args(["filters", "--field", "vendor"])
        .assert()
        .failure();
}

#[test]
fn test_show_by_uid_prints_url() {
    let dir = catalog_dir();
    ophub(dir.path())
        .args(["show", "etcd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("URL: /operatorhub?details-item=etcd"))
        .stdout(predicate::str::contains("Enabled (etcd)"));
}

#[test]
fn test_show_from_location_preserves_hash() {
    let dir = catalog_dir();
    ophub(dir.path())
        .args(["show", "--location", "/operatorhub/ns/demo?details-item=mongo#overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enterprise document store"))
        .stdout(predicate::str::contains(
            "URL: /operatorhub/ns/demo?details-item=mongo#overview",
        ));
}

#[test]
fn test_show_unknown_item_fails() {
    let dir = catalog_dir();
    ophub(dir.path())
        .args(["show", "--location", "/operatorhub?details-item=nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item not found: nope"));
}
