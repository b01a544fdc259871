//! Shared DTOs for JSON responses.

use serde::{Deserialize, Serialize};

use crate::{
    charts::{TransferGraph, TransferLink, UnitTotals},
    hierarchy::LeafRange,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub upstream: bool,
}

/// `?min_count=&max_count=&unbounded=` on the chart routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RangeQuery {
    pub min_count: Option<f64>,
    pub max_count: Option<f64>,
    #[serde(default)]
    pub unbounded: bool,
}

impl RangeQuery {
    /// Missing bounds fall back to the configured `defaults`; `unbounded`
    /// drops the upper bound.
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordDto {
    pub nodes: Vec<String>,
    pub links: Vec<TransferLink>,
    pub matrix: Vec<Vec<f64>>,
    pub totals: Vec<UnitTotals>,
}

impl From<TransferGraph> for ChordDto {
    fn from(graph: TransferGraph) -> Self {
        let matrix = graph.matrix();
        let totals = graph.unit_totals();
        ChordDto {
            nodes: graph.nodes,
            links: graph.links,
            matrix,
            totals,
        }
    }
}
