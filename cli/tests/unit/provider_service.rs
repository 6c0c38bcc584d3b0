//! Provider use-cases end to end over in-memory ports.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use postiz_cli::application::Orchestrator;
use postiz_cli::application::services::providers::{clear_provider, list_providers, set_provider};
use postiz_cli::domain::error::ProviderError;
use postiz_cli::domain::{ComposeStep, ProviderEdit};

use crate::helpers::target;
use crate::mocks::{MemDisk, RecordingCompose, RecordingReporter, ScriptedProbe};

#[tokio::test]
async fn list_reports_every_provider_in_catalog_order() {
    let t = target("providers-list");
    let disk = MemDisk::configured(
        &t,
        &[("LINKEDIN_CLIENT_ID", "id"), ("LINKEDIN_CLIENT_SECRET", "secret")],
    );

    let views = list_providers(&disk, &t).await.unwrap();

    assert_eq!(views.len(), 13);
    assert_eq!(views[0].definition.name, "X");
    let linkedin = views.iter().find(|v| v.definition.name == "LinkedIn").unwrap();
    assert!(linkedin.is_configured());
    assert_eq!(views.iter().filter(|v| v.is_configured()).count(), 1);
}

#[tokio::test]
async fn list_without_env_file_shows_nothing_configured() {
    let t = target("providers-list-empty");
    let views = list_providers(&MemDisk::new(), &t).await.unwrap();
    assert!(views.iter().all(|v| !v.is_configured()));
}

#[tokio::test]
async fn set_trims_values_and_redeploys() {
    let t = target("providers-set");
    let disk = MemDisk::configured(&t, &[]);
    let compose = RecordingCompose::new();
    let probe = ScriptedProbe::up();
    let orch = Orchestrator::new(&probe, &compose, &disk, &disk, t.clone());
    let edit = ProviderEdit {
        extra: Some(" https://fosstodon.org ".to_string()),
        ..ProviderEdit::default()
    };

    let outcome = set_provider(&orch, "mastodon", &edit, &RecordingReporter::default())
        .await
        .unwrap();

    assert!(outcome.is_success());
    assert_eq!(disk.env(&t)["MASTODON_URL"], "https://fosstodon.org");
    assert_eq!(compose.mutations(), vec![ComposeStep::ForceRecreate]);
}

#[tokio::test]
async fn unknown_provider_writes_nothing() {
    let t = target("providers-unknown");
    let disk = MemDisk::configured(&t, &[("JWT_SECRET", "s")]);
    let before = disk.file(&t.env_path());
    let compose = RecordingCompose::new();
    let probe = ScriptedProbe::up();
    let orch = Orchestrator::new(&probe, &compose, &disk, &disk, t.clone());
    let edit = ProviderEdit {
        client_id: Some("id".to_string()),
        ..ProviderEdit::default()
    };

    let err = set_provider(&orch, "myspace", &edit, &RecordingReporter::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProviderError>(),
        Some(ProviderError::Unknown { .. })
    ));
    assert_eq!(disk.file(&t.env_path()), before);
    assert!(compose.calls().is_empty());
}

#[tokio::test]
async fn clear_resets_credentials_and_extra_default() {
    let t = target("providers-clear");
    let disk = MemDisk::configured(
        &t,
        &[
            ("MASTODON_CLIENT_ID", "id"),
            ("MASTODON_CLIENT_SECRET", "secret"),
            ("MASTODON_URL", "https://fosstodon.org"),
        ],
    );
    let compose = RecordingCompose::new();
    let probe = ScriptedProbe::up();
    let orch = Orchestrator::new(&probe, &compose, &disk, &disk, t.clone());

    clear_provider(&orch, "Mastodon", &RecordingReporter::default())
        .await
        .unwrap();

    let env = disk.env(&t);
    assert_eq!(env["MASTODON_CLIENT_ID"], "");
    assert_eq!(env["MASTODON_CLIENT_SECRET"], "");
    assert_eq!(env["MASTODON_URL"], "https://mastodon.social");
}
