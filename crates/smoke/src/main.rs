//! `mycofind-smoke` -- runs the smoke suite against a deployed API.
//!
//! Prints one PASS/FAIL line per check and exits non-zero if any failed.
//! See [`SmokeConfig`] for the environment variables.

use std::process::ExitCode;

use mycofind_smoke::client::SmokeClient;
use mycofind_smoke::config::SmokeConfig;
use mycofind_smoke::suite::run_suite;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mycofind_smoke=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SmokeConfig::from_env();
    let client = SmokeClient::new(&config)?;

    let report = run_suite(&client).await;
    for check in &report.checks {
        println!("{check}");
    }

    let failed = report.failures().count();
    println!(
        "{} checks, {} passed, {failed} failed",
        report.checks.len(),
        report.checks.len() - failed
    );

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
