//! Plain minimax: every node is visited exactly once, nothing is pruned.

use std::collections::BTreeSet;

use tracing::{info, trace};

use crate::error::TreeError;
use crate::tree::{arity_error, GameTree, BRANCHING};
use crate::types::{NodeId, SearchOutcome};

struct Frame {
    id: NodeId,
    next: usize,
    best: Option<i32>,
}

impl Frame {
    fn new(id: NodeId) -> Self {
        Self {
            id,
            next: 0,
            best: None,
        }
    }
}

/// Backs values up from the leaves and stores them on every internal node.
///
/// Fails without touching the tree if a leaf has no value or a node has a
/// child count other than 0 or 2.
pub fn evaluate(tree: &mut GameTree) -> Result<SearchOutcome, TreeError> {
    tree.check_ready()?;
    let (outcome, computed) = search(tree)?;
    tree.commit(computed);

    info!(
        value = outcome.value,
        nodes = outcome.nodes(),
        "minimax evaluation finished"
    );
    Ok(outcome)
}

/// Post-order walk over the arena; returns the outcome and per-node values.
fn search(tree: &GameTree) -> Result<(SearchOutcome, Vec<Option<i32>>), TreeError> {
    let mut computed = vec![None; tree.len()];
    let mut visited = Vec::with_capacity(tree.len());
    let mut stack = vec![Frame::new(tree.root())];
    visited.push(tree.root());

    let mut returned: Option<i32> = None;
    while let Some(frame) = stack.last_mut() {
        let node = tree.node(frame.id).ok_or(TreeError::UnknownNode(frame.id.idx()))?;
        if let Some(v) = returned.take() {
            frame.best = Some(frame.best.map_or(v, |b| node.role.pick(b, v)));
        }

        match node.children.len() {
            0 => {
                let v = node
                    .value
                    .ok_or_else(|| TreeError::UnassignedLeaf(node.label.clone()))?;
                trace!(node = %node.label, value = v, "leaf");
                stack.pop();
                returned = Some(v);
            }
            BRANCHING if frame.next < BRANCHING => {
                let child = node.children[frame.next];
                frame.next += 1;
                stack.push(Frame::new(child));
                visited.push(child);
            }
            BRANCHING => {
                let v = frame.best.ok_or_else(|| arity_error(node, 0))?;
                trace!(node = %node.label, role = %node.role, value = v, "backed up");
                computed[frame.id.idx()] = Some(v);
                stack.pop();
                returned = Some(v);
            }
            n => return Err(arity_error(node, n)),
        }
    }

    let value = returned.ok_or(TreeError::UnknownNode(tree.root().idx()))?;
    let outcome = SearchOutcome {
        value,
        pruned: BTreeSet::new(),
        visited,
    };
    Ok((outcome, computed))
}

#[cfg(test)]
#[path = "minimax_tests.rs"]
mod minimax_tests;
