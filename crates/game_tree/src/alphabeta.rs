//! Minimax with alpha-beta pruning
//!
//! Children are searched left to right. Each child gets the parent's window
//! as it stands at that moment; only the parent's own frame narrows it. Once
//! `beta <= alpha`, every sibling after the current child goes into the
//! pruned set without being entered, so nothing below it is ever visited.

use std::collections::BTreeSet;

use tracing::{debug, info, trace};

use crate::error::TreeError;
use crate::tree::{arity_error, GameTree, BRANCHING};
use crate::types::{NodeId, Role, SearchOutcome, Window};

struct Frame {
    id: NodeId,
    window: Window,
    next: usize,
    best: Option<i32>,
}

impl Frame {
    fn new(id: NodeId, window: Window) -> Self {
        Self {
            id,
            window,
            next: 0,
            best: None,
        }
    }

    /// Folds a finished child's value into this frame.
    fn absorb(&mut self, role: Role, v: i32) {
        self.best = Some(self.best.map_or(v, |b| role.pick(b, v)));
        match role {
            Role::Max => self.window.alpha = self.window.alpha.max(v as i64),
            Role::Min => self.window.beta = self.window.beta.min(v as i64),
        }
    }
}

/// Alpha-beta over the full window.
pub fn evaluate(tree: &mut GameTree) -> Result<SearchOutcome, TreeError> {
    evaluate_with_window(tree, Window::FULL)
}

/// Alpha-beta starting from an explicit root window.
///
/// Internal nodes inside pruned subtrees are left without a value; leaves
/// keep whatever was assigned to them. Fails without touching the tree if a
/// leaf has no value or a node has a child count other than 0 or 2.
pub fn evaluate_with_window(
    tree: &mut GameTree,
    window: Window,
) -> Result<SearchOutcome, TreeError> {
    tree.check_ready()?;
    let (outcome, computed) = search(tree, window)?;
    tree.commit(computed);

    info!(
        value = outcome.value,
        nodes = outcome.nodes(),
        pruned = outcome.pruned.len(),
        "alpha-beta evaluation finished"
    );
    Ok(outcome)
}

fn search(
    tree: &GameTree,
    window: Window,
) -> Result<(SearchOutcome, Vec<Option<i32>>), TreeError> {
    let mut computed = vec![None; tree.len()];
    let mut visited = Vec::with_capacity(tree.len());
    let mut pruned = BTreeSet::new();
    let mut stack = vec![Frame::new(tree.root(), window)];
    visited.push(tree.root());

    let mut returned: Option<i32> = None;
    while let Some(frame) = stack.last_mut() {
        let node = tree.node(frame.id).ok_or(TreeError::UnknownNode(frame.id.idx()))?;
        if let Some(v) = returned.take() {
            frame.absorb(node.role, v);
            if frame.window.is_closed() && frame.next < node.children.len() {
                let skipped = &node.children[frame.next..];
                pruned.extend(skipped.iter().copied());
                debug!(
                    node = %node.label,
                    alpha = frame.window.alpha,
                    beta = frame.window.beta,
                    skipped = ?skipped.iter().filter_map(|&c| tree.label(c)).collect::<Vec<_>>(),
                    "cutoff"
                );
                frame.next = node.children.len();
            }
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
                let child_window = frame.window;
                frame.next += 1;
                stack.push(Frame::new(child, child_window));
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
        pruned,
        visited,
    };
    Ok((outcome, computed))
}

#[cfg(test)]
#[path = "alphabeta_tests.rs"]
mod alphabeta_tests;
