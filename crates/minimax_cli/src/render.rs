//! Text and JSON output for evaluated trees

use anyhow::Result;
use game_tree::{NodeSnapshot, TreeSnapshot};
use serde::Serialize;

/// Both evaluators run over the same leaves.
#[derive(Debug, Serialize)]
pub struct Comparison {
    pub minimax: TreeSnapshot,
    pub alpha_beta: TreeSnapshot,
}

pub fn summary(snap: &TreeSnapshot) -> String {
    let mut line = format!(
        "{}: root value {}, {} nodes visited",
        snap.algorithm, snap.value, snap.nodes_visited
    );
    if !snap.pruned.is_empty() {
        line.push_str(&format!(", pruned: {}", snap.pruned.join(", ")));
    }
    line
}

/// Indented tree, one node per line.
pub fn text(snap: &TreeSnapshot) -> String {
    let mut out = summary(snap);
    out.push('\n');
    out.push_str(&node_line(&snap.root));
    out.push('\n');
    push_children(&mut out, &snap.root, "");
    out
}

fn node_line(node: &NodeSnapshot) -> String {
    let value = node.value.map_or_else(|| "-".to_string(), |v| v.to_string());
    let mut line = format!("{} [{}] = {}", node.label, node.role, value);
    if node.pruned {
        line.push_str("  (pruned)");
    } else if !node.visited {
        line.push_str("  (not searched)");
    }
    line
}

fn push_children(out: &mut String, node: &NodeSnapshot, prefix: &str) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let last = i + 1 == count;
        let (branch, indent) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(prefix);
        out.push_str(branch);
        out.push_str(&node_line(child));
        out.push('\n');
        push_children(out, child, &format!("{prefix}{indent}"));
    }
}

pub fn comparison_text(cmp: &Comparison) -> String {
    let saved = cmp
        .minimax
        .nodes_visited
        .saturating_sub(cmp.alpha_beta.nodes_visited);
    let mut out = format!(
        "{}\n{}\nalpha-beta skipped {} of {} nodes\n\n",
        summary(&cmp.minimax),
        summary(&cmp.alpha_beta),
        saved,
        cmp.minimax.nodes_visited
    );
    out.push_str(&text(&cmp.alpha_beta));
    out
}

pub fn json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
