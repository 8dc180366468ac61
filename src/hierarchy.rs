//! Arena representation of the dataset tree with summed values.
//!
//! Building a [`Hierarchy`] sums values bottom-up and sorts every sibling list
//! by descending height, then descending value, then ascending name. The name
//! tie-break keeps layouts reproducible when two movies gross the same amount.

use crate::models::DatasetNode;
use std::cmp::Ordering;

/// Index into [`Hierarchy::nodes`].
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub name: String,
    pub category: Option<String>,
    /// Value carried by the dataset node itself (0 when absent).
    pub own_value: f64,
    /// Own value plus the summed value of all descendants.
    pub value: f64,
    /// Distance from the root (root = 0).
    pub depth: usize,
    /// Longest distance to a descendant leaf (leaf = 0).
    pub height: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl HierarchyNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
}

impl Hierarchy {
    pub const ROOT: NodeId = 0;

    /// Build, sum, and sort the hierarchy for `root`.
    pub fn from_dataset(root: &DatasetNode) -> Self {
        let mut nodes = Vec::with_capacity(count_nodes(root));
        push_node(&mut nodes, root, None, 0);
        let mut h = Self { nodes };
        h.sum_values(Self::ROOT);
        h.sort_children();
        h
    }

    pub fn nodes(&self) -> &[HierarchyNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &HierarchyNode {
        &self.nodes[id]
    }

    pub fn root(&self) -> &HierarchyNode {
        &self.nodes[Self::ROOT]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in pre-order (parent before children, children in sorted order).
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id].children.iter().rev().copied());
        }
        out
    }

    /// Leaves in pre-order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.pre_order()
            .into_iter()
            .filter(|&id| self.nodes[id].is_leaf())
            .collect()
    }

    fn sum_values(&mut self, id: NodeId) -> (f64, usize) {
        let children = self.nodes[id].children.clone();
        let mut sum = self.nodes[id].own_value;
        let mut height = 0;
        for child in children {
            let (v, h) = self.sum_values(child);
            sum += v;
            height = height.max(h + 1);
        }
        let node = &mut self.nodes[id];
        node.value = sum;
        node.height = height;
        (sum, height)
    }

    fn sort_children(&mut self) {
        for id in 0..self.nodes.len() {
            let mut children = std::mem::take(&mut self.nodes[id].children);
            children.sort_by(|&a, &b| sibling_order(&self.nodes[a], &self.nodes[b]));
            self.nodes[id].children = children;
        }
    }
}

/// Descending height, then descending value, then ascending name.
fn sibling_order(a: &HierarchyNode, b: &HierarchyNode) -> Ordering {
    b.height
        .cmp(&a.height)
        .then_with(|| b.value.total_cmp(&a.value))
        .then_with(|| a.name.cmp(&b.name))
}

fn count_nodes(node: &DatasetNode) -> usize {
    1 + node.children.iter().map(count_nodes).sum::<usize>()
}

fn push_node(
    nodes: &mut Vec<HierarchyNode>,
    data: &DatasetNode,
    parent: Option<NodeId>,
    depth: usize,
) -> NodeId {
    let id = nodes.len();
    nodes.push(HierarchyNode {
        name: data.name.clone(),
        category: data.category.clone(),
        own_value: data.value.unwrap_or(0.0),
        value: 0.0,
        depth,
        height: 0,
        parent,
        children: Vec::with_capacity(data.children.len()),
    });
    for child in &data.children {
        let cid = push_node(nodes, child, Some(id), depth + 1);
        nodes[id].children.push(cid);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DatasetNode {
        DatasetNode::group(
            "Movies",
            vec![
                DatasetNode::group(
                    "Drama",
                    vec![
                        DatasetNode::leaf("Zeta", "Drama", 5.0),
                        DatasetNode::leaf("Alpha", "Drama", 5.0),
                    ],
                ),
                DatasetNode::leaf("Loose", "Comedy", 100.0),
                DatasetNode::group(
                    "Action",
                    vec![DatasetNode::leaf("Big", "Action", 50.0)],
                ),
            ],
        )
    }

    #[test]
    fn sums_depth_and_height() {
        let h = Hierarchy::from_dataset(&sample());
        assert_eq!(h.root().value, 160.0);
        assert_eq!(h.root().height, 2);
        assert_eq!(h.root().depth, 0);
        let leaf_sum: f64 = h.leaves().iter().map(|&id| h.node(id).value).sum();
        assert_eq!(leaf_sum, h.root().value);
    }

    #[test]
    fn siblings_sort_by_height_then_value_then_name() {
        let h = Hierarchy::from_dataset(&sample());
        let names: Vec<&str> = h
            .root()
            .children
            .iter()
            .map(|&id| h.node(id).name.as_str())
            .collect();
        // Groups (height 1) come first, ordered by value; the loose leaf last.
        assert_eq!(names, ["Action", "Drama", "Loose"]);

        let leaves: Vec<&str> = h.leaves().iter().map(|&id| h.node(id).name.as_str()).collect();
        assert_eq!(leaves, ["Big", "Alpha", "Zeta", "Loose"]);
    }
}
