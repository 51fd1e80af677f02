//! The "Vehicles API Submission Probe's" entry point.

use std::env;
use std::error::Error;
use vehicles_api_common::cli::helpers::{init_logger, print_report};
use vehicles_api_common::config::{get_base_url, BASE_URL_ENV};
use vehicles_api_submit_cli::logic::{build_client, run_all};

/// The "Vehicles API Submission Probe's" entry point.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logger("vehicles_api_submit_cli");

    let base_url = get_base_url(env::var(BASE_URL_ENV).ok());
    let client = build_client()?;

    run_all(&client, &base_url, print_report).await;

    Ok(())
}
