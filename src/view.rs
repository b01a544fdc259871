//! Per-chart state: the fetch outcome and the filtered hierarchy derived from
//! an immutable snapshot.

use std::{fmt::Display, sync::Arc};

use serde::Serialize;
use tracing::debug;

use crate::hierarchy::{filter_tree_range, LeafRange, TreeNode};

/// Outcome of a chart's fetch. Each chart owns one and degrades on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Original hierarchy plus the tree currently shown for `range`.
#[derive(Debug, Clone)]
pub struct HierarchyView {
    original: Arc<TreeNode>,
    range: LeafRange,
    filtered: TreeNode,
}

impl HierarchyView {
    pub fn new(original: TreeNode, range: LeafRange) -> Self {
        let original = Arc::new(original);
        let filtered = filter_tree_range(&original, &range);
        Self {
            original,
            range,
            filtered,
        }
    }

    pub fn original(&self) -> &TreeNode {
        &self.original
    }

    pub fn filtered(&self) -> &TreeNode {
        &self.filtered
    }

    pub fn range(&self) -> LeafRange {
        self.range
    }

    pub fn set_min(&mut self, min: f64) {
        self.set_range(LeafRange { min, ..self.range });
    }

    pub fn set_max(&mut self, max: Option<f64>) {
        self.set_range(LeafRange { max, ..self.range });
    }

    /// Re-derive from the original snapshot, never from the current view.
    pub fn set_range(&mut self, range: LeafRange) {
        self.range = range;
        self.filtered = filter_tree_range(&self.original, &range);
        debug!(
            min = range.min,
            max = ?range.max,
            leaves = self.filtered.leaves().len(),
            "hierarchy view refiltered"
        );
    }
}
