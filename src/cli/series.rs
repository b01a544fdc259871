//! CLI entry-points for the tabular chart series.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    charts::{pyramid, HeatmapGrid},
    cli::print_json,
    client::ApiClient,
    config::Settings,
};

/// Args for the `age` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct AgeArgs {
    /// One row per year of age (18 to 90) instead of ranges.
    #[arg(long)]
    pub detailed: bool,
}

#[instrument(skip(settings))]
pub async fn age(args: AgeArgs, settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    let envelope = client.age_distribution(args.detailed).await?;
    let rows = pyramid(&envelope.data);
    info!(groups = rows.len(), total = ?envelope.total_records, "built age pyramid");
    print_json(&rows)
}

#[instrument(skip(settings))]
pub async fn heatmap(settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    let cells = client.admission_heatmap().await?;
    let grid = HeatmapGrid::from_cells(&cells);
    if let Some((day, hour, count)) = grid.peak() {
        info!(%day, hour, count, "busiest admission slot");
    }
    print_json(&grid)
}

#[instrument(skip(settings))]
pub async fn icu(settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    let stays = client.icu_stays().await?;
    info!(units = stays.len(), "fetched icu stays");
    print_json(&stays)
}
