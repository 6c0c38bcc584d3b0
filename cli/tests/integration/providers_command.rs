//! `postiz providers` end to end.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use predicates::prelude::*;

use crate::cli_tests::Sandbox;

#[test]
fn list_json_has_every_provider() {
    let sandbox = Sandbox::new();
    sandbox.write_env("LINKEDIN_CLIENT_ID=\"id\"\nLINKEDIN_CLIENT_SECRET=\"secret\"\n");

    let out = sandbox
        .postiz()
        .args(["providers", "list", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    let providers = value.as_array().expect("array");
    assert_eq!(providers.len(), 13);
    let configured: Vec<_> = providers
        .iter()
        .filter(|p| p["configured"] == true)
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(configured, vec!["LinkedIn"]);
}

#[test]
fn set_unknown_provider_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox
        .postiz()
        .args(["providers", "set", "myspace", "--client-id", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown provider 'myspace'"))
        .stderr(predicate::str::contains("LinkedIn"));
}

#[test]
fn set_without_values_is_rejected() {
    let sandbox = Sandbox::new();
    let out = sandbox
        .postiz()
        .args(["providers", "set", "github", "--json"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["code"], "invalid_provider_edit");
}

#[test]
fn set_valid_provider_needs_runtime() {
    let sandbox = Sandbox::new();
    sandbox
        .postiz()
        .args(["providers", "set", "github", "--client-id", "abc", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("runtime_not_available"));
}

#[test]
fn clear_unknown_provider_is_rejected_before_prompting() {
    let sandbox = Sandbox::new();
    sandbox
        .postiz()
        .args(["providers", "clear", "myspace"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown provider"));
}

#[test]
fn clear_with_yes_skips_the_prompt_and_reaches_the_runtime_check() {
    let sandbox = Sandbox::new();
    sandbox.write_env("GITHUB_CLIENT_ID=\"id\"\nGITHUB_CLIENT_SECRET=\"secret\"\n");

    sandbox
        .postiz()
        .args(["-y", "providers", "clear", "github", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("runtime_not_available"))
        .stdout(predicate::str::contains("Nothing changed").not());

    let env = std::fs::read_to_string(sandbox.deployment().join(".env")).unwrap();
    assert!(env.contains("GITHUB_CLIENT_ID=\"id\""), "precondition failed before any write");
}

#[test]
fn clear_under_postiz_yes_is_non_interactive() {
    let sandbox = Sandbox::new();
    sandbox.write_env("GITHUB_CLIENT_ID=\"id\"\nGITHUB_CLIENT_SECRET=\"secret\"\n");

    sandbox
        .postiz()
        .env("POSTIZ_YES", "1")
        .args(["providers", "clear", "github"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Container runtime is not available"));
}
