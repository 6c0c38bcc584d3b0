//! Application service: provider management use-cases.

use anyhow::Result;

use crate::application::ports::{ComposeExecutor, EnvStore, LocalFs, ProgressReporter, RuntimeProbe};
use crate::application::services::orchestrator::Orchestrator;
use crate::domain::env_file::EnvMap;
use crate::domain::lifecycle::DeployOutcome;
use crate::domain::provider::{self, ProviderEdit, ProviderView};
use crate::domain::target::DeploymentTarget;

/// Project every provider against the current env file. Never takes the
/// operation gate.
///
/// # Errors
///
/// Returns an error only for I/O faults reading the env file.
pub async fn list_providers(env: &impl EnvStore, target: &DeploymentTarget) -> Result<Vec<ProviderView>> {
    let vars = env.read(&target.env_path()).await?;
    Ok(provider::project_all(&vars))
}

/// Apply submitted values for one provider and redeploy.
///
/// # Errors
///
/// Fails on an unknown provider or an empty edit before anything is
/// written, and otherwise as [`Orchestrator::save_and_redeploy`].
pub async fn set_provider<P, C, E, F>(
    orchestrator: &Orchestrator<'_, P, C, E, F>,
    name: &str,
    edit: &ProviderEdit,
    reporter: &impl ProgressReporter,
) -> Result<DeployOutcome>
where
    P: RuntimeProbe,
    C: ComposeExecutor,
    E: EnvStore,
    F: LocalFs,
{
    let request = provider::edit_request(name, edit)?;
    orchestrator.save_and_redeploy(&request, reporter).await
}

/// Empty a provider's credentials and redeploy.
///
/// # Errors
///
/// Fails on an unknown provider, and otherwise as
/// [`Orchestrator::save_and_redeploy`].
pub async fn clear_provider<P, C, E, F>(
    orchestrator: &Orchestrator<'_, P, C, E, F>,
    name: &str,
    reporter: &impl ProgressReporter,
) -> Result<DeployOutcome>
where
    P: RuntimeProbe,
    C: ComposeExecutor,
    E: EnvStore,
    F: LocalFs,
{
    let request = provider::clear_request(name)?;
    orchestrator.save_and_redeploy(&request, reporter).await
}

/// Read the env file for display.
///
/// # Errors
///
/// Returns an error only for I/O faults.
pub async fn read_env(env: &impl EnvStore, target: &DeploymentTarget) -> Result<EnvMap> {
    env.read(&target.env_path()).await
}
