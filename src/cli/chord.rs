//! CLI entry-point for transfers between care units.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument, warn};

use crate::{
    api::types::ChordDto, cli::print_json, client::ApiClient, config::Settings,
    hierarchy::LeafRange,
};

/// Args for the `chord` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Minimum transfers per link (defaults to CHORD_MIN_COUNT).
    #[arg(long)]
    pub min_count: Option<f64>,
    /// Maximum transfers per link (defaults to CHORD_MAX_COUNT).
    #[arg(long, conflicts_with = "unbounded")]
    pub max_count: Option<f64>,
    /// Drop the upper bound entirely.
    #[arg(long)]
    pub unbounded: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    let graph = client.transfers().await?;
    let defaults = settings.chord_range;
    let range = LeafRange {
        min: args.min_count.unwrap_or(defaults.min).max(0.0),
        max: if args.unbounded {
            None
        } else {
            args.max_count.or(defaults.max)
        },
    };
    let filtered = graph.filter_links(&range);
    if filtered.is_empty() {
        warn!(min = range.min, max = ?range.max, "no transfers inside range");
    } else {
        info!(
            units = filtered.nodes.len(),
            links = filtered.links.len(),
            "filtered transfers"
        );
    }
    print_json(&ChordDto::from(filtered))
}
