//! Count-threshold pruning of hierarchies.
//!
//! Both filters are pure: they read the original tree and build a fresh one,
//! so re-filtering the same snapshot with a different bound never depends on
//! an earlier result.

use serde::{Deserialize, Serialize};

use super::{NodeKind, TreeNode};

/// Closed interval a leaf count must fall in to survive. `max = None` is
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LeafRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl LeafRange {
    pub fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// Keep only leaves with `value >= threshold`, eliding branches left empty.
pub fn filter_tree(root: &TreeNode, threshold: f64) -> TreeNode {
    filter_tree_range(root, &LeafRange::at_least(threshold))
}

/// Keep only leaves inside `range`, eliding branches left empty.
///
/// The root itself is always returned, with an empty child list when nothing
/// survives.
pub fn filter_tree_range(root: &TreeNode, range: &LeafRange) -> TreeNode {
    let children = root
        .children()
        .iter()
        .filter_map(|child| prune(child, range))
        .collect();
    TreeNode::branch(root.name.clone(), children)
}

fn prune(node: &TreeNode, range: &LeafRange) -> Option<TreeNode> {
    match &node.kind {
        NodeKind::Leaf { value } => range.contains(*value).then(|| node.clone()),
        NodeKind::Branch { children } => {
            let kept: Vec<TreeNode> = children
                .iter()
                .filter_map(|child| prune(child, range))
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some(TreeNode::branch(node.name.clone(), kept))
            }
        }
    }
}
