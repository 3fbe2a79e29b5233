use super::*;
use game_tree::{Algorithm, GameTree};

fn snapshot(algorithm: Algorithm) -> TreeSnapshot {
    let mut tree = GameTree::build(3).unwrap();
    tree.assign_leaf_values(&[3, 5, 2, 9]).unwrap();
    let outcome = algorithm.run(&mut tree).unwrap();
    TreeSnapshot::new(&tree, algorithm, &outcome)
}

#[test]
fn test_text_marks_pruned_leaf() {
    let out = text(&snapshot(Algorithm::AlphaBeta));
    let expected = "\
alpha-beta: root value 3, 6 nodes visited, pruned: G1
A1 [MAX] = 3
├── B1 [MIN] = 3
│   ├── C1 [MAX] = 3
│   └── D1 [MAX] = 5
└── E1 [MIN] = 2
    ├── F1 [MAX] = 2
    └── G1 [MAX] = 9  (pruned)
";
    assert_eq!(out, expected);
}

#[test]
fn test_summary_without_pruning() {
    assert_eq!(
        summary(&snapshot(Algorithm::Minimax)),
        "minimax: root value 3, 7 nodes visited"
    );
}

#[test]
fn test_comparison_counts_skipped_nodes() {
    let cmp = Comparison {
        minimax: snapshot(Algorithm::Minimax),
        alpha_beta: snapshot(Algorithm::AlphaBeta),
    };
    let out = comparison_text(&cmp);
    assert!(out.contains("alpha-beta skipped 1 of 7 nodes"));

    let parsed: serde_json::Value = serde_json::from_str(&json(&cmp).unwrap()).unwrap();
    assert_eq!(parsed["alpha_beta"]["pruned"][0], "G1");
    assert_eq!(parsed["minimax"]["value"], 3);
}
