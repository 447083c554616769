use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const FIXTURE: &str = include_str!("fixtures/edge_detection.build.gradle");
const DECLARATION: &str = "    namespace \"com.sample.edgedetection\"";

fn parse_jsonl(stdout: &[u8]) -> Vec<Value> {
    let s = String::from_utf8_lossy(stdout);
    s.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<Value>(l).expect("valid jsonl line"))
        .collect()
}

fn gradle_path(cache: &Path) -> PathBuf {
    cache
        .join("hosted")
        .join("pub.dev")
        .join("edge_detection-1.1.3")
        .join("android")
        .join("build.gradle")
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn backup_of(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}

fn nsfix(cache: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nsfix"));
    cmd.arg("--pub-cache")
        .arg(cache)
        .arg("--no-pause")
        .arg("--no-color")
        .arg("--format")
        .arg("jsonl");
    cmd
}

#[test]
fn patches_cached_package() {
    let temp = tempdir().unwrap();
    let gradle = gradle_path(temp.path());
    write_file(&gradle, FIXTURE);

    let assert = nsfix(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Namespace added successfully!"))
        .stderr(predicate::str::contains("flutter build apk --debug"));
    let items = parse_jsonl(&assert.get_output().stdout);

    let kinds: Vec<_> = items
        .iter()
        .map(|v| v["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["target", "backup", "patch"]);
    assert_eq!(items[2]["data"]["outcome"], "added");

    let patched = fs::read_to_string(&gradle).unwrap();
    assert_eq!(patched.matches(DECLARATION).count(), 1);
    assert!(patched.contains(&format!("android {{\n{}\n", DECLARATION)));
    assert_eq!(fs::read_to_string(backup_of(&gradle)).unwrap(), FIXTURE);
}

#[test]
fn rerun_yields_identical_content() {
    let temp = tempdir().unwrap();
    let gradle = gradle_path(temp.path());
    write_file(&gradle, FIXTURE);

    nsfix(temp.path()).assert().success();
    let first = fs::read_to_string(&gradle).unwrap();

    let assert = nsfix(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Restoring from backup..."));
    let second = fs::read_to_string(&gradle).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.matches(DECLARATION).count(), 1);
    assert_eq!(fs::read_to_string(backup_of(&gradle)).unwrap(), FIXTURE);

    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items[1]["data"]["action"], "restored");
}

#[test]
fn already_configured_is_left_alone() {
    let temp = tempdir().unwrap();
    let gradle = gradle_path(temp.path());
    let configured = FIXTURE.replacen(
        "android {\n",
        "android {\n    namespace 'com.sample.edgedetection'\n",
        1,
    );
    write_file(&gradle, &configured);

    let assert = nsfix(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Namespace already properly configured!"));
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[2]["data"]["outcome"], "already_configured");
    assert_eq!(fs::read_to_string(&gradle).unwrap(), configured);
}

#[test]
fn missing_package_exits_with_one_and_writes_nothing() {
    let temp = tempdir().unwrap();

    let assert = nsfix(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Package not found at:"))
        .stderr(predicate::str::contains("flutter pub get"));
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "error");
    assert_eq!(items[0]["errors"][0]["code"], "NOT_FOUND");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn dry_run_leaves_files_untouched() {
    let temp = tempdir().unwrap();
    let gradle = gradle_path(temp.path());
    write_file(&gradle, FIXTURE);

    let assert = nsfix(temp.path()).arg("--dry-run").assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[2]["data"]["outcome"], "added");
    assert_eq!(items[2]["meta"]["dry_run"], true);
    assert_eq!(fs::read_to_string(&gradle).unwrap(), FIXTURE);
    assert!(!backup_of(&gradle).exists());
}

#[test]
fn pub_cache_env_locates_package() {
    let temp = tempdir().unwrap();
    let gradle = gradle_path(temp.path());
    write_file(&gradle, FIXTURE);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nsfix"));
    cmd.env("PUB_CACHE", temp.path())
        .env("NSFIX_NO_PAUSE", "true")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Steps"))
        .stderr(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&gradle).unwrap().matches(DECLARATION).count(), 1);
}

#[test]
fn explicit_file_and_namespace() {
    let temp = tempdir().unwrap();
    let gradle = temp.path().join("build.gradle");
    write_file(&gradle, "android{\n    compileSdkVersion 34\n}\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nsfix"));
    cmd.arg("--file")
        .arg(&gradle)
        .arg("--namespace")
        .arg("com.example.plugin")
        .arg("--no-pause")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&gradle).unwrap(),
        "android{\n    namespace \"com.example.plugin\"\n\n    compileSdkVersion 34\n}\n"
    );
}

#[test]
fn missing_anchor_reports_error_item() {
    let temp = tempdir().unwrap();
    let gradle = gradle_path(temp.path());
    write_file(&gradle, "buildscript {\n}\n");

    let assert = nsfix(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No Fix Applied"));
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[2]["data"]["outcome"], "anchor_missing");
    assert_eq!(items[2]["errors"][0]["code"], "NO_ANCHOR");
    assert_eq!(fs::read_to_string(&gradle).unwrap(), "buildscript {\n}\n");
}
