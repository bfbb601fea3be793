//! Exit codes and suggestions surfaced by the binary.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn proser(config_dir: &TempDir) -> assert_cmd::Command {
    let config = config_dir.path().join("config.toml");
    fs::write(&config, "").unwrap();
    let mut cmd = cargo::cargo_bin_cmd!("proser");
    cmd.env("NO_COLOR", "1").arg("--config").arg(config);
    cmd
}

#[test]
fn missing_target_is_a_user_error() {
    let cfg = TempDir::new().unwrap();
    proser(&cfg)
        .args(["setup", "/definitely/not/a/project", "-y"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid target"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn target_file_is_rejected() {
    let cfg = TempDir::new().unwrap();
    let file = cfg.path().join("not-a-dir.txt");
    fs::write(&file, "x").unwrap();
    proser(&cfg)
        .arg("scan")
        .arg(&file)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn missing_answers_file_is_not_found() {
    let cfg = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    proser(&cfg)
        .arg("setup")
        .arg(project.path())
        .args(["--answers", "/no/such/answers.toml", "-y"])
        .assert()
        .failure()
        .code(3);
    assert_eq!(fs::read_dir(project.path()).unwrap().count(), 0);
}

#[test]
fn malformed_answers_file_is_configuration_error() {
    let cfg = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let answers = cfg.path().join("answers.toml");
    fs::write(&answers, "project_name = [1, 2]\n").unwrap();
    proser(&cfg)
        .arg("setup")
        .arg(project.path())
        .arg("--answers")
        .arg(&answers)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("project_name"));
}

#[test]
fn malformed_config_is_configuration_error() {
    let cfg = TempDir::new().unwrap();
    let config = cfg.path().join("config.toml");
    fs::write(&config, "[scan]\nmax_depth = \"deep\"\n").unwrap();
    cargo::cargo_bin_cmd!("proser")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config)
        .arg("types")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn unknown_config_key_is_not_found() {
    let cfg = TempDir::new().unwrap();
    proser(&cfg)
        .args(["config", "get", "scan.nope"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("config list"));
}

#[test]
fn bad_arguments_exit_two() {
    let cfg = TempDir::new().unwrap();
    proser(&cfg)
        .args(["scan", "--format", "yaml"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn verbose_run_omits_verbose_hint() {
    let cfg = TempDir::new().unwrap();
    proser(&cfg)
        .args(["-v", "setup", "/definitely/not/a/project", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Re-run with -v").not());
}
