//! Postiz CLI - run a self-hosted Postiz stack with Docker Compose

use std::process::ExitCode;

use clap::Parser;
use postiz_cli::cli::Cli;
use postiz_cli::logging;
use postiz_cli::output::json::{error_code, format_error};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let json = cli.json;

    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if json {
                match format_error(&format!("{e:#}"), error_code(&e)) {
                    Ok(body) => println!("{body}"),
                    Err(_) => eprintln!("Error: {e:#}"),
                }
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
