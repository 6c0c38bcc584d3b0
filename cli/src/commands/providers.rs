//! `postiz providers`: list, edit and clear OAuth provider credentials.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::application::services::providers as provider_service;
use crate::domain::provider::ProviderEdit;

/// Providers subcommands.
#[derive(Subcommand)]
pub enum ProvidersCommand {
    /// List every supported provider and whether it is configured
    List,
    /// Set credentials for one provider, save them and redeploy
    Set(SetArgs),
    /// Remove credentials for one provider and redeploy
    Clear {
        /// Provider name, e.g. `linkedin`
        name: String,
    },
}

/// Arguments for `providers set`. Omitted values are left unchanged.
#[derive(Args)]
pub struct SetArgs {
    /// Provider name, e.g. `linkedin`
    pub name: String,
    /// OAuth client id
    #[arg(long)]
    pub client_id: Option<String>,
    /// OAuth client secret
    #[arg(long)]
    pub client_secret: Option<String>,
    /// Extra value: Discord bot token, Slack signing secret or Mastodon URL
    #[arg(long)]
    pub extra: Option<String>,
}

/// Run a providers subcommand.
///
/// # Errors
///
/// Returns an error for unknown providers, empty edits and failed
/// preconditions.
pub async fn run(app: &AppContext, cmd: ProvidersCommand) -> Result<ExitCode> {
    match cmd {
        ProvidersCommand::List => list(app).await,
        ProvidersCommand::Set(args) => set(app, args).await,
        ProvidersCommand::Clear { name } => clear(app, &name).await,
    }
}

async fn list(app: &AppContext) -> Result<ExitCode> {
    let views = provider_service::list_providers(&app.env_store, &app.target).await?;
    let statuses: Vec<_> = views.iter().map(|v| v.status()).collect();
    app.renderer().render_providers(&statuses)?;
    Ok(ExitCode::SUCCESS)
}

async fn set(app: &AppContext, args: SetArgs) -> Result<ExitCode> {
    let edit = ProviderEdit {
        client_id: args.client_id,
        client_secret: args.client_secret,
        extra: args.extra,
    };
    let outcome = {
        let reporter = app.reporter();
        provider_service::set_provider(&app.orchestrator(), &args.name, &edit, &reporter).await?
    };
    super::finish(app, "provider update", &outcome)
}

async fn clear(app: &AppContext, name: &str) -> Result<ExitCode> {
    let provider = crate::domain::provider::resolve(name)?;
    let prompt = format!(
        "Remove {} credentials and redeploy Postiz?",
        provider.display_name
    );
    if !app.non_interactive && !app.confirm(&prompt, false)? {
        app.output.info("Nothing changed.");
        return Ok(ExitCode::SUCCESS);
    }
    let outcome = {
        let reporter = app.reporter();
        provider_service::clear_provider(&app.orchestrator(), name, &reporter).await?
    };
    super::finish(app, "provider clear", &outcome)
}
