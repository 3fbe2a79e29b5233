//! Error types for tree construction and evaluation

use thiserror::Error;

use crate::tree::MAX_DEPTH;

/// Everything that can go wrong inside the core.
///
/// Each variant aborts the operation that raised it; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("invalid depth {0}: expected an integer between 1 and {max}", max = MAX_DEPTH)]
    InvalidDepth(i64),

    #[error("malformed tree at node '{label}': {reason}")]
    MalformedTree { label: String, reason: String },

    #[error("leaf '{0}' has no value assigned")]
    UnassignedLeaf(String),

    #[error("expected {expected} leaf values, got {got}")]
    LeafCountMismatch { expected: usize, got: usize },

    #[error("node '{0}' is not a leaf")]
    NotALeaf(String),

    #[error("no node with index {0}")]
    UnknownNode(usize),
}

impl TreeError {
    pub(crate) fn malformed(label: &str, reason: impl Into<String>) -> Self {
        TreeError::MalformedTree {
            label: label.to_string(),
            reason: reason.into(),
        }
    }
}
