//! `EnvFileStore` against a real temporary directory.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use postiz_cli::application::ports::EnvStore;
use postiz_cli::domain::env_file::EnvMap;
use postiz_cli::infra::env_store::EnvFileStore;
use tempfile::TempDir;

#[tokio::test]
async fn missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let vars = EnvFileStore.read(&dir.path().join(".env")).await.unwrap();
    assert!(vars.is_empty());
}

#[tokio::test]
async fn write_then_read_keeps_values_and_drops_unknown_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    let mut vars = EnvMap::new();
    vars.insert("JWT_SECRET".to_string(), "abc".to_string());
    vars.insert("SLACK_ID".to_string(), "slack id with spaces".to_string());
    vars.insert("NOT_IN_SCHEMA".to_string(), "x".to_string());

    EnvFileStore.write(&path, &vars).await.unwrap();
    let back = EnvFileStore.read(&path).await.unwrap();

    assert_eq!(back["JWT_SECRET"], "abc");
    assert_eq!(back["SLACK_ID"], "slack id with spaces");
    assert!(!back.contains_key("NOT_IN_SCHEMA"));
}

#[tokio::test]
async fn hand_edited_file_is_read_tolerantly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(
        &path,
        "# comment\n\nJWT_SECRET='single'\ngarbage line\nAPI_LIMIT=30 # per hour\n=orphan\n",
    )
    .unwrap();

    let vars = EnvFileStore.read(&path).await.unwrap();

    assert_eq!(vars["JWT_SECRET"], "single");
    assert_eq!(vars["API_LIMIT"], "30");
    assert_eq!(vars.len(), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn env_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    EnvFileStore.write(&path, &EnvMap::new()).await.unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[tokio::test]
async fn rewrite_leaves_no_temp_files_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    EnvFileStore.write(&path, &EnvMap::new()).await.unwrap();
    EnvFileStore.write(&path, &EnvMap::new()).await.unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![".env".to_string()]);
}
