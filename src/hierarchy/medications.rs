//! Prescriptions grouped by administration route.

use serde::{Deserialize, Serialize};

use super::TreeNode;

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugCount {
    #[serde(default)]
    pub drug: String,
    #[serde(default)]
    pub count: u64,
}

/// One route with its per-drug prescription counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationRoute {
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub drugs: Vec<DrugCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationsEnvelope {
    pub data: Vec<MedicationRoute>,
    #[serde(default)]
    pub total_routes: Option<usize>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Build the `routes -> route -> drug` hierarchy drawn by the sunburst.
pub fn medication_hierarchy(routes: &[MedicationRoute]) -> TreeNode {
    let children = routes
        .iter()
        .map(|route| {
            let drugs = route
                .drugs
                .iter()
                .map(|d| TreeNode::leaf(label(&d.drug), d.count as f64))
                .collect();
            TreeNode::branch(label(&route.route), drugs)
        })
        .collect();
    TreeNode::branch("routes", children)
}

fn label(name: &str) -> &str {
    if name.trim().is_empty() {
        UNKNOWN
    } else {
        name
    }
}
