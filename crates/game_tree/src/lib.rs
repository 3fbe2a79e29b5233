//! Binary minimax game trees
//!
//! This crate provides:
//! - A perfect binary tree builder with alternating MAX/MIN levels
//! - Deterministic node labels (`A1`, `B1`, ... `Z1`, `AA2`, ...)
//! - Plain minimax and alpha-beta evaluation over an index-addressed arena
//! - A serializable snapshot of an evaluated tree for rendering
//!
//! # Usage
//!
//! ```
//! use game_tree::{alphabeta, GameTree};
//!
//! let mut tree = GameTree::build(3).unwrap();
//! tree.assign_leaf_values(&[3, 5, 2, 9]).unwrap();
//! let outcome = alphabeta::evaluate(&mut tree).unwrap();
//! assert_eq!(outcome.value, 3);
//! assert_eq!(outcome.pruned_labels(&tree), vec!["G1"]);
//! ```

pub mod alphabeta;
pub mod error;
pub mod label;
pub mod minimax;
pub mod snapshot;
pub mod source;
pub mod tree;
pub mod types;

pub use error::TreeError;
pub use label::{label_for, LabelGenerator};
pub use snapshot::{Algorithm, NodeSnapshot, TreeSnapshot};
pub use source::{FixedValues, LeafValueSource, RandomValues};
pub use tree::{GameTree, MAX_DEPTH};
pub use types::*;
