//! Hospital transfer flows between care units.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::hierarchy::LeafRange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

/// Directed transfer edges as served by the chord endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransferGraph {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub links: Vec<TransferLink>,
}

/// Totals shown when hovering a unit's arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTotals {
    pub name: String,
    pub outgoing: f64,
    pub incoming: f64,
}

impl TransferGraph {
    /// Keep links whose count is inside `range`. Units are re-derived from the
    /// surviving links: sources first, then targets, in first-seen order.
    pub fn filter_links(&self, range: &LeafRange) -> TransferGraph {
        let links: Vec<TransferLink> = self
            .links
            .iter()
            .filter(|link| range.contains(link.value))
            .cloned()
            .collect();
        let mut names: IndexSet<String> = IndexSet::new();
        for link in &links {
            names.insert(link.source.clone());
        }
        for link in &links {
            names.insert(link.target.clone());
        }
        TransferGraph {
            nodes: names.into_iter().collect(),
            links,
        }
    }

    /// Square matrix where `m[i][j]` sums flows from node `i` to node `j`.
    pub fn matrix(&self) -> Vec<Vec<f64>> {
        let index: IndexSet<&str> = self.nodes.iter().map(String::as_str).collect();
        let n = index.len();
        let mut matrix = vec![vec![0.0; n]; n];
        for link in &self.links {
            let (Some(i), Some(j)) = (
                index.get_index_of(link.source.as_str()),
                index.get_index_of(link.target.as_str()),
            ) else {
                continue;
            };
            matrix[i][j] += link.value;
        }
        matrix
    }

    pub fn unit_totals(&self) -> Vec<UnitTotals> {
        let matrix = self.matrix();
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, name)| UnitTotals {
                name: name.clone(),
                outgoing: matrix.get(i).map(|row| row.iter().sum()).unwrap_or(0.0),
                incoming: matrix.iter().filter_map(|row| row.get(i)).sum(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(source: &str, target: &str, value: f64) -> TransferLink {
        TransferLink {
            source: source.into(),
            target: target.into(),
            value,
        }
    }

    #[test]
    fn matrix_sums_duplicate_edges() {
        let graph = TransferGraph {
            nodes: vec!["ED".into(), "MICU".into()],
            links: vec![link("ED", "MICU", 3.0), link("ED", "MICU", 2.0)],
        };
        assert_eq!(graph.matrix(), vec![vec![0.0, 5.0], vec![0.0, 0.0]]);
    }

    #[test]
    fn unknown_units_are_skipped() {
        let graph = TransferGraph {
            nodes: vec!["ED".into()],
            links: vec![link("ED", "Ward", 4.0)],
        };
        assert_eq!(graph.matrix(), vec![vec![0.0]]);
    }
}
