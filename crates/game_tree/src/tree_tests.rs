use super::*;

fn labels(tree: &GameTree) -> Vec<&str> {
    tree.nodes().iter().map(|n| n.label.as_str()).collect()
}

#[test]
fn test_build_depth_three() {
    let tree = GameTree::build(3).unwrap();
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.depth(), 3);
    assert_eq!(labels(&tree), ["A1", "B1", "C1", "D1", "E1", "F1", "G1"]);

    let root = tree.node(tree.root()).unwrap();
    assert_eq!(root.role, Role::Max);
    assert_eq!(root.children, [NodeId(1), NodeId(4)]);
    assert_eq!(tree.node(NodeId(1)).unwrap().role, Role::Min);
    assert_eq!(tree.node(NodeId(2)).unwrap().role, Role::Max);

    let leaves: Vec<&str> = tree
        .leaves()
        .into_iter()
        .filter_map(|id| tree.label(id))
        .collect();
    assert_eq!(leaves, ["C1", "D1", "F1", "G1"]);
}

#[test]
fn test_build_depth_one_is_single_leaf() {
    let tree = GameTree::build(1).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.leaves(), [NodeId::ROOT]);
    assert!(tree.node(NodeId::ROOT).unwrap().is_leaf());
}

#[test]
fn test_build_rejects_bad_depth() {
    assert_eq!(GameTree::build(0), Err(TreeError::InvalidDepth(0)));
    assert_eq!(GameTree::build(-3), Err(TreeError::InvalidDepth(-3)));
    let too_deep = MAX_DEPTH as i64 + 1;
    assert_eq!(GameTree::build(too_deep), Err(TreeError::InvalidDepth(too_deep)));
    assert_eq!(GameTree::build(1000), Err(TreeError::InvalidDepth(1000)));
}

#[test]
fn test_labels_roll_into_second_cycle() {
    let tree = GameTree::build(5).unwrap();
    assert_eq!(tree.len(), 31);
    assert_eq!(tree.label(NodeId(25)), Some("Z1"));
    assert_eq!(tree.label(NodeId(26)), Some("AA2"));
    assert_eq!(tree.label(NodeId(31)), None);
    assert_eq!(tree.find("AE2"), Some(NodeId(30)));
    assert_eq!(tree.find("A2"), None);
}

#[test]
fn test_assign_leaf_values() {
    let mut tree = GameTree::build(3).unwrap();
    tree.assign_leaf_values(&[3, 5, 2, 9]).unwrap();
    let values: Vec<Option<i32>> = tree.nodes().iter().map(|n| n.value).collect();
    assert_eq!(
        values,
        [None, None, Some(3), Some(5), None, Some(2), Some(9)]
    );
}

#[test]
fn test_assign_leaf_values_count_mismatch() {
    let mut tree = GameTree::build(3).unwrap();
    assert_eq!(
        tree.assign_leaf_values(&[1, 2, 3]),
        Err(TreeError::LeafCountMismatch {
            expected: 4,
            got: 3
        })
    );
    assert!(tree.nodes().iter().all(|n| n.value.is_none()));
}

#[test]
fn test_fixed_source_rejects_extra_values() {
    let mut tree = GameTree::build(3).unwrap();
    let values = [1, 2, 3, 4, 5, 6];
    assert_eq!(
        tree.assign_leaves(&mut FixedValues::new(&values)),
        Err(TreeError::LeafCountMismatch {
            expected: 4,
            got: 6
        })
    );
    assert!(tree.nodes().iter().all(|n| n.value.is_none()));
}

#[test]
fn test_fixed_source_rejects_missing_values() {
    let mut tree = GameTree::build(3).unwrap();
    assert_eq!(
        tree.assign_leaves(&mut FixedValues::new(&[1])),
        Err(TreeError::LeafCountMismatch {
            expected: 4,
            got: 1
        })
    );
    assert!(tree.nodes().iter().all(|n| n.value.is_none()));
}

struct FailsOnThird(usize);

impl LeafValueSource for FailsOnThird {
    type Error = String;

    fn value_for(&mut self, leaf: &Node) -> Result<i32, String> {
        self.0 += 1;
        if self.0 == 3 {
            Err(format!("gave up at {}", leaf.label))
        } else {
            Ok(self.0 as i32)
        }
    }
}

#[test]
fn test_failing_source_writes_nothing() {
    let mut tree = GameTree::build(3).unwrap();
    let err = tree.assign_leaves(&mut FailsOnThird(0)).unwrap_err();
    assert_eq!(err, "gave up at F1");
    assert!(tree.nodes().iter().all(|n| n.value.is_none()));
}

#[test]
fn test_set_leaf_value() {
    let mut tree = GameTree::build(2).unwrap();
    tree.set_leaf_value(NodeId(1), 4).unwrap();
    assert_eq!(tree.node(NodeId(1)).unwrap().value, Some(4));
    assert_eq!(
        tree.set_leaf_value(NodeId::ROOT, 4),
        Err(TreeError::NotALeaf("A1".to_string()))
    );
    assert_eq!(tree.set_leaf_value(NodeId(3), 4), Err(TreeError::UnknownNode(3)));
}

#[test]
fn test_check_ready() {
    let mut tree = GameTree::build(2).unwrap();
    assert_eq!(
        tree.check_ready(),
        Err(TreeError::UnassignedLeaf("B1".to_string()))
    );
    tree.set_leaf_value(NodeId(1), 1).unwrap();
    assert_eq!(
        tree.check_ready(),
        Err(TreeError::UnassignedLeaf("C1".to_string()))
    );
    tree.set_leaf_value(NodeId(2), 1).unwrap();
    assert_eq!(tree.check_ready(), Ok(()));
}

#[test]
fn test_clear_values() {
    let mut tree = GameTree::build(2).unwrap();
    tree.assign_leaf_values(&[1, 2]).unwrap();
    tree.commit(vec![Some(2), None, None]);
    assert_eq!(tree.node(NodeId::ROOT).unwrap().value, Some(2));

    tree.clear_internal_values();
    assert_eq!(tree.node(NodeId::ROOT).unwrap().value, None);
    assert_eq!(tree.node(NodeId(1)).unwrap().value, Some(1));

    tree.clear_values();
    assert!(tree.nodes().iter().all(|n| n.value.is_none()));
}

fn node(label: &str, role: Role, children: &[usize]) -> Node {
    let mut node = Node::new(label, role);
    node.children = children.iter().copied().map(NodeId).collect();
    node
}

#[test]
fn test_from_nodes_accepts_valid_arena() {
    let tree = GameTree::from_nodes(vec![
        node("R", Role::Max, &[1, 2]),
        node("L", Role::Min, &[]),
        node("X", Role::Min, &[]),
    ])
    .unwrap();
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.leaves(), [NodeId(1), NodeId(2)]);
}

#[test]
fn test_from_nodes_rejects_bad_links() {
    let empty = GameTree::from_nodes(Vec::new());
    assert!(matches!(empty, Err(TreeError::MalformedTree { .. })));

    let out_of_range =
        GameTree::from_nodes(vec![node("R", Role::Max, &[1, 5]), node("L", Role::Min, &[])]);
    assert!(matches!(out_of_range, Err(TreeError::MalformedTree { label, .. }) if label == "R"));

    let backward = GameTree::from_nodes(vec![
        node("R", Role::Max, &[1, 2]),
        node("L", Role::Min, &[0]),
        node("X", Role::Min, &[]),
    ]);
    assert!(matches!(backward, Err(TreeError::MalformedTree { label, .. }) if label == "L"));

    let shared = GameTree::from_nodes(vec![
        node("R", Role::Max, &[1, 2]),
        node("L", Role::Min, &[2]),
        node("X", Role::Min, &[]),
    ]);
    assert!(matches!(shared, Err(TreeError::MalformedTree { label, .. }) if label == "X"));

    let orphan =
        GameTree::from_nodes(vec![node("R", Role::Max, &[]), node("L", Role::Min, &[])]);
    assert!(matches!(orphan, Err(TreeError::MalformedTree { label, .. }) if label == "L"));

    let duplicate = GameTree::from_nodes(vec![
        node("R", Role::Max, &[1, 2]),
        node("L", Role::Min, &[]),
        node("L", Role::Min, &[]),
    ]);
    assert!(matches!(duplicate, Err(TreeError::MalformedTree { label, .. }) if label == "L"));

    let same_role = GameTree::from_nodes(vec![
        node("R", Role::Max, &[1, 2]),
        node("L", Role::Max, &[]),
        node("X", Role::Max, &[]),
    ]);
    assert_eq!(
        same_role,
        Err(TreeError::MalformedTree {
            label: "L".to_string(),
            reason: "role does not alternate".to_string()
        })
    );
}

#[test]
fn test_check_ready_rejects_single_child() {
    let lone = node("R", Role::Max, &[1]);
    let mut leaf = node("L", Role::Min, &[]);
    leaf.value = Some(1);
    let tree = GameTree::from_nodes(vec![lone, leaf]).unwrap();
    assert!(
        matches!(tree.check_ready(), Err(TreeError::MalformedTree { label, .. }) if label == "R")
    );
}
