//! CLI entry-point for the headline dashboard counters.

use anyhow::Result;
use tracing::{info, instrument};

use crate::{cli::print_json, client::ApiClient, config::Settings};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    let stats = client.dashboard_stats().await?;
    info!(
        patients = stats.total_patients,
        admissions = stats.total_admissions,
        "fetched dashboard stats"
    );
    print_json(&stats)
}
