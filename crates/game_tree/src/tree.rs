//! Tree arena and the perfect binary tree builder

use std::collections::HashSet;

use tracing::info;

use crate::error::TreeError;
use crate::label::LabelGenerator;
use crate::source::{FixedValues, LeafValueSource};
use crate::types::{Node, NodeId, Role};

/// Deepest tree `build` accepts (2^24 - 1 nodes).
pub const MAX_DEPTH: u8 = 24;

/// Fixed branching factor of built trees.
pub const BRANCHING: usize = 2;

/// A game tree stored as an index-addressed arena.
///
/// Children always sit at higher indices than their parent and every node
/// except the root has exactly one parent, so the arena is acyclic and can be
/// walked with explicit stacks instead of native recursion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    nodes: Vec<Node>,
}

impl GameTree {
    /// Builds a perfect binary tree with `depth` levels, root on level 1.
    ///
    /// Levels alternate MAX/MIN starting with MAX at the root. Labels are
    /// handed out in preorder, so a node is labeled before its children.
    pub fn build(depth: i64) -> Result<Self, TreeError> {
        let levels = u8::try_from(depth)
            .ok()
            .filter(|d| (1..=MAX_DEPTH).contains(d))
            .ok_or(TreeError::InvalidDepth(depth))?;

        let total = (1usize << levels) - 1;
        let mut nodes: Vec<Node> = Vec::with_capacity(total);
        let mut labels = LabelGenerator::new();

        // (parent, level, role) still to create; LIFO order yields preorder
        let mut pending: Vec<(Option<NodeId>, u8, Role)> = vec![(None, 1, Role::Max)];
        while let Some((parent, level, role)) = pending.pop() {
            let id = NodeId(nodes.len());
            nodes.push(Node::new(labels.next_label(), role));
            if let Some(parent) = parent {
                nodes[parent.idx()].children.push(id);
            }
            if level < levels {
                for _ in 0..BRANCHING {
                    pending.push((Some(id), level + 1, role.other()));
                }
            }
        }

        info!(depth = levels, nodes = nodes.len(), "built game tree");
        Ok(Self { nodes })
    }

    /// Adopts a caller-made arena with the root at index 0.
    ///
    /// Links must point forward, stay in range, and give every non-root node
    /// exactly one parent; labels must be unique and every child must have
    /// the opposite role of its parent. Child counts are not
    /// checked here; the evaluators reject nodes with other than 0 or 2.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self, TreeError> {
        if nodes.is_empty() {
            return Err(TreeError::malformed("<none>", "tree has no nodes"));
        }

        let mut labels = HashSet::with_capacity(nodes.len());
        let mut has_parent = vec![false; nodes.len()];
        for (i, node) in nodes.iter().enumerate() {
            if !labels.insert(node.label.as_str()) {
                return Err(TreeError::malformed(&node.label, "duplicate label"));
            }
            for child in &node.children {
                let c = child.idx();
                if c >= nodes.len() {
                    return Err(TreeError::malformed(
                        &node.label,
                        format!("child index {c} out of range"),
                    ));
                }
                if c <= i {
                    return Err(TreeError::malformed(
                        &node.label,
                        format!("child index {c} does not follow parent index {i}"),
                    ));
                }
                if has_parent[c] {
                    return Err(TreeError::malformed(
                        &nodes[c].label,
                        "node has more than one parent",
                    ));
                }
                has_parent[c] = true;
                if nodes[c].role == node.role {
                    return Err(TreeError::malformed(
                        &nodes[c].label,
                        "role does not alternate",
                    ));
                }
            }
        }
        if let Some(orphan) = (1..nodes.len()).find(|&i| !has_parent[i]) {
            return Err(TreeError::malformed(
                &nodes[orphan].label,
                "node is not reachable from the root",
            ));
        }

        Ok(Self { nodes })
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.idx())
    }

    /// Every node, in construction order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut level = vec![1usize; self.nodes.len()];
        for (i, node) in self.nodes.iter().enumerate() {
            for child in &node.children {
                level[child.idx()] = level[i] + 1;
            }
        }
        level.into_iter().max().unwrap_or(0)
    }

    /// Leaves from left to right.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.idx()];
            if node.is_leaf() {
                leaves.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        leaves
    }

    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.label == label)
            .map(NodeId)
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.idx()).map(|n| n.label.as_str())
    }

    pub fn set_leaf_value(&mut self, id: NodeId, value: i32) -> Result<(), TreeError> {
        let node = self
            .nodes
            .get_mut(id.idx())
            .ok_or(TreeError::UnknownNode(id.idx()))?;
        if !node.is_leaf() {
            return Err(TreeError::NotALeaf(node.label.clone()));
        }
        node.value = Some(value);
        Ok(())
    }

    /// Assigns one value per leaf, left to right.
    pub fn assign_leaf_values(&mut self, values: &[i32]) -> Result<(), TreeError> {
        self.assign_leaves(&mut FixedValues::new(values))
    }

    /// Asks `source` for every leaf value, then writes them all.
    ///
    /// Nothing is written if the source fails part way through.
    pub fn assign_leaves<S: LeafValueSource>(&mut self, source: &mut S) -> Result<(), S::Error> {
        let leaves = self.leaves();
        source.expect_leaves(leaves.len())?;
        let mut values = Vec::with_capacity(leaves.len());
        for &id in &leaves {
            values.push(source.value_for(&self.nodes[id.idx()])?);
        }
        for (id, value) in leaves.into_iter().zip(values) {
            self.nodes[id.idx()].value = Some(value);
        }
        Ok(())
    }

    /// Checks that an evaluator can run: every node has 0 or 2 children and
    /// every leaf has a value. Reports the first offender in preorder.
    pub fn check_ready(&self) -> Result<(), TreeError> {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let node = self.node(id).ok_or(TreeError::UnknownNode(id.idx()))?;
            match node.children.len() {
                0 if node.value.is_none() => {
                    return Err(TreeError::UnassignedLeaf(node.label.clone()));
                }
                0 | BRANCHING => {}
                n => return Err(arity_error(node, n)),
            }
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(())
    }

    pub fn clear_internal_values(&mut self) {
        for node in self.nodes.iter_mut().filter(|n| !n.is_leaf()) {
            node.value = None;
        }
    }

    pub fn clear_values(&mut self) {
        for node in &mut self.nodes {
            node.value = None;
        }
    }

    /// Replaces every internal value with the evaluator's result.
    pub(crate) fn commit(&mut self, computed: Vec<Option<i32>>) {
        for (node, value) in self.nodes.iter_mut().zip(computed) {
            if !node.is_leaf() {
                node.value = value;
            }
        }
    }
}

pub(crate) fn arity_error(node: &Node, children: usize) -> TreeError {
    TreeError::malformed(
        &node.label,
        format!("{children} children, expected 0 or {BRANCHING}"),
    )
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
