//! Terminal prompt for leaf values

use dialoguer::Input;
use game_tree::{LeafValueSource, Node};

/// Asks on the terminal for each leaf value.
///
/// Non-integer answers are rejected and the same leaf is asked again, so
/// only parsed integers ever reach the tree.
#[derive(Debug, Default)]
pub struct PromptValues;

impl LeafValueSource for PromptValues {
    type Error = dialoguer::Error;

    fn value_for(&mut self, leaf: &Node) -> Result<i32, dialoguer::Error> {
        Input::<i32>::new()
            .with_prompt(format!("Value for leaf {}", leaf.label))
            .interact_text()
    }
}
