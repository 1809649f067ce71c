mod config;
mod constants;
mod error;
mod models;
mod publish;
mod roster;
mod services;
mod utils;
mod workflow;

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    config::Config,
    constants::LOG_DIRECTIVE,
    models::RunOutcome,
    publish::VkWall,
    roster::GristRoster,
    utils::datetime::today_utc,
    workflow::{BirthdayWorkflow, WorkflowSettings},
};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    initialize_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = run_once(config).await;
    report(&outcome)
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Build the collaborators from configuration and run the check for today
async fn run_once(config: Config) -> RunOutcome {
    let roster = match GristRoster::new(&config.grist, config.http_timeout) {
        Ok(roster) => roster,
        Err(e) => return RunOutcome::unexpected(e.to_string()),
    };
    let wall = match VkWall::new(&config.vk, config.http_timeout) {
        Ok(wall) => wall,
        Err(e) => return RunOutcome::unexpected(e.to_string()),
    };

    let settings = WorkflowSettings {
        doc_id: config.grist.doc_id,
        table_id: config.grist.table_id,
        columns: config.grist.columns,
        owner_id: config.vk.owner_id,
    };

    Arc::new(BirthdayWorkflow::new(roster, wall, settings))
        .run(today_utc())
        .await
}

/// Print the outcome as JSON on stdout and map it to the exit status
fn report(outcome: &RunOutcome) -> ExitCode {
    match serde_json::to_string_pretty(outcome) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize run outcome: {}", e),
    }

    if !outcome.success {
        error!("Birthday check failed: {}", outcome.message);
        return ExitCode::FAILURE;
    }

    if outcome.error.is_some() {
        warn!("Birthday check finished with errors: {}", outcome.message);
    } else {
        info!("Birthday check finished: {}", outcome.message);
    }
    ExitCode::SUCCESS
}
