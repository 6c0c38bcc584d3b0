//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Run a self-hosted Postiz stack with Docker Compose
#[derive(Parser)]
#[command(
    name = "postiz",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to every prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show deployment state and what to do next
    Status,

    /// Create the deployment files and start Postiz
    Setup,

    /// Start a configured deployment
    Start,

    /// Stop the deployment (data is kept)
    Stop,

    /// Recreate containers so they pick up configuration changes
    Redeploy,

    /// Pull newer images and recreate containers
    Update(commands::update::UpdateArgs),

    /// Manage OAuth provider credentials
    #[command(subcommand)]
    Providers(commands::providers::ProvidersCommand),

    /// Inspect the deployment env file
    #[command(subcommand)]
    Env(commands::env::EnvCommand),

    /// Manage CLI settings
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Install a `postiz` launcher on your PATH
    Shortcut(commands::shortcut::ShortcutArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the context cannot be built or the command fails
    /// before producing an outcome.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            yes,
            command,
        } = self;

        let app = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes },
        })?;

        match command {
            Command::Status => commands::status::run(&app).await,
            Command::Setup => commands::setup::run(&app).await,
            Command::Start => commands::start::run(&app).await,
            Command::Stop => commands::stop::run(&app).await,
            Command::Redeploy => commands::redeploy::run(&app).await,
            Command::Update(args) => commands::update::run(&app, &args).await,
            Command::Providers(cmd) => commands::providers::run(&app, cmd).await,
            Command::Env(cmd) => commands::env::run(&app, cmd).await,
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Shortcut(args) => commands::shortcut::run(&app, args),
            Command::Version => commands::version::run(&app),
        }
    }
}
