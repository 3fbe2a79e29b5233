//! Serializable view of an evaluated tree, for renderers.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::tree::GameTree;
use crate::types::{NodeId, Role, SearchOutcome};
use crate::{alphabeta, minimax};

/// Which evaluator produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    pub fn run(self, tree: &mut GameTree) -> Result<SearchOutcome, TreeError> {
        match self {
            Algorithm::Minimax => minimax::evaluate(tree),
            Algorithm::AlphaBeta => alphabeta::evaluate(tree),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => f.write_str("minimax"),
            Algorithm::AlphaBeta => f.write_str("alpha-beta"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" | "plain" => Ok(Algorithm::Minimax),
            "alpha-beta" | "alphabeta" | "ab" => Ok(Algorithm::AlphaBeta),
            _ => Err(format!("unknown algorithm '{s}' (expected minimax or alpha-beta)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub label: String,
    pub role: Role,
    pub value: Option<i32>,
    /// Skipped at a cutoff
    pub pruned: bool,
    /// Entered by the search
    pub visited: bool,
    pub children: Vec<NodeSnapshot>,
}

/// An evaluated tree together with what the evaluator reported about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub algorithm: Algorithm,
    pub value: i32,
    pub nodes_visited: u64,
    /// Labels of the pruned nodes, in construction order
    pub pruned: Vec<String>,
    pub root: NodeSnapshot,
}

impl TreeSnapshot {
    pub fn new(tree: &GameTree, algorithm: Algorithm, outcome: &SearchOutcome) -> Self {
        let visited: HashSet<NodeId> = outcome.visited.iter().copied().collect();

        // Children sit after their parent, so filling back to front always
        // finds a node's children already built.
        let mut built: Vec<Option<NodeSnapshot>> = vec![None; tree.len()];
        for (i, node) in tree.nodes().iter().enumerate().rev() {
            let id = NodeId(i);
            let children = node
                .children
                .iter()
                .filter_map(|c| built.get_mut(c.idx()).and_then(Option::take))
                .collect();
            built[i] = Some(NodeSnapshot {
                label: node.label.clone(),
                role: node.role,
                value: node.value,
                pruned: outcome.is_pruned(id),
                visited: visited.contains(&id),
                children,
            });
        }

        let root = built
            .into_iter()
            .next()
            .flatten()
            .unwrap_or_else(|| NodeSnapshot {
                label: String::new(),
                role: Role::Max,
                value: None,
                pruned: false,
                visited: false,
                children: Vec::new(),
            });

        Self {
            algorithm,
            value: outcome.value,
            nodes_visited: outcome.nodes(),
            pruned: outcome
                .pruned_labels(tree)
                .into_iter()
                .map(str::to_string)
                .collect(),
            root,
        }
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
