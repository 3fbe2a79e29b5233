use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::tree::GameTree;

/// Which side a node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Max,
    Min,
}

impl Role {
    pub fn other(self) -> Role {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    /// The value this side prefers.
    pub fn pick(self, a: i32, b: i32) -> i32 {
        match self {
            Role::Max => a.max(b),
            Role::Min => a.min(b),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Max => f.write_str("MAX"),
            Role::Min => f.write_str("MIN"),
        }
    }
}

/// Construction index of a node inside its tree's arena.
///
/// Indices follow preorder, so the root is always `NodeId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn idx(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub label: String,
    /// Supplied for leaves, computed for internal nodes.
    pub value: Option<i32>,
    pub role: Role,
    /// Empty for a leaf, exactly two entries for an internal node.
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn new(label: impl Into<String>, role: Role) -> Self {
        Self {
            label: label.into(),
            value: None,
            role,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Alpha-beta search window. Bounds are `i64` so `i64::MIN`/`i64::MAX` can
/// stand in for the infinities around any `i32` leaf value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub alpha: i64,
    pub beta: i64,
}

impl Window {
    pub const FULL: Window = Window {
        alpha: i64::MIN,
        beta: i64::MAX,
    };

    pub fn new(alpha: i64, beta: i64) -> Self {
        Self { alpha, beta }
    }

    pub fn is_closed(&self) -> bool {
        self.beta <= self.alpha
    }
}

impl Default for Window {
    fn default() -> Self {
        Window::FULL
    }
}

/// Result of evaluating a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Backed-up value of the root
    pub value: i32,
    /// Nodes skipped at a cutoff (never visited); empty for plain minimax
    pub pruned: BTreeSet<NodeId>,
    /// Nodes in the order the search entered them
    pub visited: Vec<NodeId>,
}

impl SearchOutcome {
    /// Number of nodes the search entered.
    pub fn nodes(&self) -> u64 {
        self.visited.len() as u64
    }

    pub fn is_pruned(&self, id: NodeId) -> bool {
        self.pruned.contains(&id)
    }

    /// Labels of the pruned nodes, in construction order.
    pub fn pruned_labels<'t>(&self, tree: &'t GameTree) -> Vec<&'t str> {
        self.pruned.iter().filter_map(|&id| tree.label(id)).collect()
    }
}
