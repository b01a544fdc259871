//! CLI entry-point for filtering a hierarchy saved on disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    cli::{print_tree, TreeFormat},
    hierarchy::{filter_tree_range, LeafRange, TreeEnvelope, TreeNode},
};

/// Args for the `filter` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// JSON file holding either `{ "data": tree }` or a bare tree.
    pub input: PathBuf,
    #[arg(long, default_value_t = 0.0)]
    pub min_count: f64,
    #[arg(long)]
    pub max_count: Option<f64>,
    #[arg(long, value_enum, default_value_t)]
    pub format: TreeFormat,
}

#[instrument]
pub async fn run(args: Args) -> Result<()> {
    let tree = load_tree(&args.input)?;
    let range = LeafRange {
        min: args.min_count.max(0.0),
        max: args.max_count,
    };
    let filtered = filter_tree_range(&tree, &range);
    info!(
        kept = filtered.leaves().len(),
        total = tree.leaves().len(),
        "filtered hierarchy file"
    );
    print_tree(&filtered, args.format)
}

/// Read a hierarchy written by `snapshot` or saved from the API.
pub fn load_tree(path: &Path) -> Result<TreeNode> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("read {path:?}"))?;
    if let Ok(envelope) = serde_json::from_str::<TreeEnvelope>(&raw) {
        return Ok(envelope.data);
    }
    serde_json::from_str(&raw).with_context(|| format!("parse hierarchy in {path:?}"))
}
