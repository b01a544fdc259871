//! Weighted categorical hierarchies consumed by the icicle and sunburst views.

pub mod filter;
pub mod medications;

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

pub use filter::{filter_tree, filter_tree_range, LeafRange};
pub use medications::{medication_hierarchy, DrugCount, MedicationRoute};

/// One level of a strictly nested hierarchy.
///
/// Leaves carry a count; internal nodes carry children and derive their weight
/// from the leaves below them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Leaf { value: f64 },
    Branch { children: Vec<TreeNode> },
}

/// Envelope used by the upstream hierarchy endpoints: `{ "data": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnvelope {
    pub data: TreeNode,
}

/// A node seen from the root, as shown in hover overlays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatNode {
    pub path: Vec<String>,
    pub depth: usize,
    pub weight: f64,
    pub is_leaf: bool,
}

impl FlatNode {
    pub fn name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    pub fn full_path(&self, separator: &str) -> String {
        self.path.join(separator)
    }
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Leaf { value },
        }
    }

    pub fn branch(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Branch { children },
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Stored count of a leaf; `None` for internal nodes.
    pub fn value(&self) -> Option<f64> {
        match self.kind {
            NodeKind::Leaf { value } => Some(value),
            NodeKind::Branch { .. } => None,
        }
    }

    /// Children of an internal node; empty for leaves.
    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::Leaf { .. } => &[],
            NodeKind::Branch { children } => children,
        }
    }

    /// Leaf value, or the sum of every descendant leaf.
    pub fn weight(&self) -> f64 {
        match &self.kind {
            NodeKind::Leaf { value } => *value,
            NodeKind::Branch { children } => children.iter().map(TreeNode::weight).sum(),
        }
    }

    /// Number of edges on the longest path down to a leaf.
    pub fn height(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Leaves in depth-first order.
    pub fn leaves(&self) -> Vec<&TreeNode> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }

    /// Every node with its ancestry, pre-order.
    pub fn flatten(&self) -> Vec<FlatNode> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        flatten_into(self, &mut path, &mut out);
        out
    }

    /// Copy ordered the way partition layouts expect: taller subtrees first,
    /// then heavier ones.
    pub fn sorted_by_weight(&self) -> TreeNode {
        match &self.kind {
            NodeKind::Leaf { .. } => self.clone(),
            NodeKind::Branch { children } => {
                let mut sorted: Vec<(usize, f64, TreeNode)> = children
                    .iter()
                    .map(|child| (child.height(), child.weight(), child.sorted_by_weight()))
                    .collect();
                sorted.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| cmp_desc(a.1, b.1)));
                TreeNode::branch(
                    self.name.clone(),
                    sorted.into_iter().map(|(_, _, node)| node).collect(),
                )
            }
        }
    }
}

fn cmp_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn collect_leaves<'a>(node: &'a TreeNode, out: &mut Vec<&'a TreeNode>) {
    match &node.kind {
        NodeKind::Leaf { .. } => out.push(node),
        NodeKind::Branch { children } => {
            for child in children {
                collect_leaves(child, out);
            }
        }
    }
}

fn flatten_into(node: &TreeNode, path: &mut Vec<String>, out: &mut Vec<FlatNode>) {
    path.push(node.name.clone());
    out.push(FlatNode {
        path: path.clone(),
        depth: path.len() - 1,
        weight: node.weight(),
        is_leaf: node.is_leaf(),
    });
    for child in node.children() {
        flatten_into(child, path, out);
    }
    path.pop();
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_outline(self, 0, f)
    }
}

fn write_outline(node: &TreeNode, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
        f,
        "{indent}{name} ({weight})",
        indent = "  ".repeat(depth),
        name = node.name,
        weight = node.weight()
    )?;
    for child in node.children() {
        write_outline(child, depth + 1, f)?;
    }
    Ok(())
}

/// Wire shape. Upstream aggregations sometimes store a running `value` on
/// chapters next to their `children`; weights are always re-derived instead.
#[derive(Serialize, Deserialize)]
struct RawNode {
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<TreeNode>>,
}

impl From<RawNode> for TreeNode {
    fn from(raw: RawNode) -> Self {
        let kind = match (raw.children, raw.value) {
            (Some(children), _) if !children.is_empty() => NodeKind::Branch { children },
            (_, Some(value)) => NodeKind::Leaf { value },
            (Some(children), None) => NodeKind::Branch { children },
            (None, None) => NodeKind::Leaf { value: 0.0 },
        };
        TreeNode {
            name: raw.name,
            kind,
        }
    }
}

impl From<TreeNode> for RawNode {
    fn from(node: TreeNode) -> Self {
        match node.kind {
            NodeKind::Leaf { value } => RawNode {
                name: node.name,
                value: Some(value),
                children: None,
            },
            NodeKind::Branch { children } => RawNode {
                name: node.name,
                value: None,
                children: Some(children),
            },
        }
    }
}
