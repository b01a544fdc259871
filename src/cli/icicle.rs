//! CLI entry-point for the diagnosis icicle.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    cli::{print_tree, TreeFormat},
    client::ApiClient,
    config::Settings,
    hierarchy::LeafRange,
    view::HierarchyView,
};

/// Args for the `icicle` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Minimum diagnosis count per leaf (defaults to ICICLE_MIN_COUNT).
    #[arg(long)]
    pub min_count: Option<f64>,
    /// Optional maximum diagnosis count per leaf.
    #[arg(long)]
    pub max_count: Option<f64>,
    #[arg(long, value_enum, default_value_t)]
    pub format: TreeFormat,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    // lowest upstream threshold so every local threshold can be applied
    let tree = client.diagnosis_icicle(1).await?;
    let range = LeafRange {
        min: args.min_count.unwrap_or(settings.icicle_min_count).max(0.0),
        max: args.max_count,
    };
    let view = HierarchyView::new(tree, range);
    info!(
        chapters = view.filtered().children().len(),
        leaves = view.filtered().leaves().len(),
        total = view.original().leaves().len(),
        "filtered diagnosis hierarchy"
    );
    print_tree(view.filtered(), args.format)
}
