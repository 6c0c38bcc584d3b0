//! Shared harness plus top-level CLI behaviour.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated environment for one test.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.path().join("settings.yaml")
    }

    pub fn deployment(&self) -> PathBuf {
        self.dir.path().join("Postiz")
    }

    /// A `postiz` command with isolated settings, deployment directory and
    /// an unavailable runtime.
    pub fn postiz(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("postiz"));
        cmd.env("POSTIZ_SETTINGS", self.settings_path())
            .env("POSTIZ_HOME", self.deployment())
            .env("POSTIZ_RUNTIME", missing_runtime(self.dir.path()))
            .env_remove("POSTIZ_LOG");
        cmd
    }

    pub fn write_env(&self, content: &str) {
        std::fs::create_dir_all(self.deployment()).unwrap();
        std::fs::write(self.deployment().join(".env"), content).unwrap();
    }
}

fn missing_runtime(root: &Path) -> PathBuf {
    root.join("no-such-runtime")
}

#[test]
fn help_lists_lifecycle_commands() {
    let sandbox = Sandbox::new();
    sandbox
        .postiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("redeploy"))
        .stdout(predicate::str::contains("providers"));
}

#[test]
fn version_prints_package_version() {
    let sandbox = Sandbox::new();
    sandbox
        .postiz()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_json_is_valid() {
    let sandbox = Sandbox::new();
    let out = sandbox.postiz().args(["version", "--json"]).output().unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn status_json_reports_runtime_unavailable() {
    let sandbox = Sandbox::new();
    let out = sandbox.postiz().args(["status", "--json"]).output().unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["state"], "runtime_unavailable");
    assert_eq!(value["runtime"]["installed"], false);
    assert_eq!(value["runtime"]["running"], false);
    assert_eq!(
        value["deployment_dir"],
        sandbox.deployment().display().to_string()
    );
    assert_eq!(value["app_url"], "http://localhost:5000");
}

#[test]
fn status_human_points_at_runtime_install() {
    let sandbox = Sandbox::new();
    sandbox
        .postiz()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("runtime unavailable"))
        .stdout(predicate::str::contains("docker.com"));
}
