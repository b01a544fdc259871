//! CLI entry-point for medications by route.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    cli::{print_tree, TreeFormat},
    client::ApiClient,
    config::Settings,
    hierarchy::{medication_hierarchy, LeafRange},
    view::HierarchyView,
};

/// Args for the `sunburst` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Minimum prescriptions per drug (defaults to SUNBURST_MIN_COUNT).
    #[arg(long)]
    pub min_count: Option<f64>,
    /// Maximum prescriptions per drug (defaults to SUNBURST_MAX_COUNT).
    #[arg(long, conflicts_with = "unbounded")]
    pub max_count: Option<f64>,
    /// Drop the upper bound entirely.
    #[arg(long)]
    pub unbounded: bool,
    #[arg(long, value_enum, default_value_t)]
    pub format: TreeFormat,
}

impl Args {
    pub fn range(&self, defaults: LeafRange) -> LeafRange {
        LeafRange {
            min: self.min_count.unwrap_or(defaults.min).max(0.0),
            max: if self.unbounded {
                None
            } else {
                self.max_count.or(defaults.max)
            },
        }
    }
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    let routes = client.medications().await?;
    let range = args.range(settings.sunburst_range);
    let view = HierarchyView::new(medication_hierarchy(&routes), range);
    info!(
        routes = view.filtered().children().len(),
        drugs = view.filtered().leaves().len(),
        min = range.min,
        max = ?range.max,
        "filtered medications"
    );
    print_tree(view.filtered(), args.format)
}
