use super::*;
use crate::models::{NodeStatus, MAX_EDIT_HISTORY};

fn add_root(tree: &TreeData, content: &str) -> (TreeData, String) {
    let node = PlanNode::new(content, None, NodeStatus::Pending);
    let id = node.id.clone();
    (add_node(tree, node), id)
}

fn add_child(tree: &TreeData, parent_id: &str, content: &str) -> (TreeData, String) {
    let node = PlanNode::new(content, Some(parent_id.to_string()), NodeStatus::Pending);
    let id = node.id.clone();
    (add_node(tree, node), id)
}

#[test]
fn test_add_node_as_root() {
    let (tree, root_id) = add_root(&TreeData::new(), "Root");

    assert_eq!(tree.root_node_ids, vec![root_id.clone()]);
    assert_eq!(tree.get(&root_id).unwrap().content, "Root");
}

#[test]
fn test_add_node_links_parent_and_bumps_updated_at() {
    let (tree, root_id) = add_root(&TreeData::new(), "Root");
    let parent_updated_at = tree.get(&root_id).unwrap().updated_at;
    let (tree, child_id) = add_child(&tree, &root_id, "Child");

    let parent = tree.get(&root_id).unwrap();
    assert_eq!(parent.children_ids, vec![child_id.clone()]);
    assert!(parent.updated_at >= parent_updated_at);
    assert_eq!(tree.get(&child_id).unwrap().parent_id, Some(root_id.clone()));
    // The child is not a root.
    assert_eq!(tree.root_node_ids, vec![root_id]);
}

#[test]
fn test_add_node_with_missing_parent_inserts_orphan() {
    let node = PlanNode::new("Orphan", Some("missing".to_string()), NodeStatus::Pending);
    let orphan_id = node.id.clone();
    let tree = add_node(&TreeData::new(), node);

    // Present in the node map but reachable from no root and no parent.
    assert!(tree.contains(&orphan_id));
    assert!(tree.root_node_ids.is_empty());
}

#[test]
fn test_add_node_root_insertion_is_idempotent() {
    let node = PlanNode::new("Root", None, NodeStatus::Pending);
    let id = node.id.clone();
    let tree = add_node(&TreeData::new(), node.clone());
    let tree = add_node(&tree, node);

    assert_eq!(tree.root_node_ids, vec![id]);
}

#[test]
fn test_add_node_does_not_mutate_input() {
    let original = TreeData::new();
    let _ = add_root(&original, "Root");
    assert!(original.is_empty());
}

#[test]
fn test_update_node_content_records_replaced_content() {
    let (tree, id) = add_root(&TreeData::new(), "first");
    let tree = update_node(&tree, &id, &UpdateNodeRequest::content("second"));

    let node = tree.get(&id).unwrap();
    assert_eq!(node.content, "second");
    // History trails current content by one version: the newest entry is
    // the content that was replaced, not the new content.
    assert_eq!(node.edit_history.len(), 2);
    assert_eq!(node.edit_history.last().unwrap().content, "first");
}

#[test]
fn test_update_node_same_content_skips_history() {
    let (tree, id) = add_root(&TreeData::new(), "same");
    let before = tree.get(&id).unwrap().updated_at;
    let tree = update_node(&tree, &id, &UpdateNodeRequest::content("same"));

    let node = tree.get(&id).unwrap();
    assert_eq!(node.edit_history.len(), 1);
    // updated_at is refreshed even for a no-change update.
    assert!(node.updated_at >= before);
}

#[test]
fn test_update_node_status_only() {
    let (tree, id) = add_root(&TreeData::new(), "Root");
    let tree = update_node(&tree, &id, &UpdateNodeRequest::status(NodeStatus::Running));

    let node = tree.get(&id).unwrap();
    assert_eq!(node.status, NodeStatus::Running);
    assert_eq!(node.edit_history.len(), 1);
}

#[test]
fn test_update_node_absent_id_is_noop() {
    let (tree, _) = add_root(&TreeData::new(), "Root");
    let updated = update_node(&tree, "missing", &UpdateNodeRequest::content("x"));
    assert_eq!(updated, tree);
}

#[test]
fn test_update_node_history_capped_at_ten() {
    let (mut tree, id) = add_root(&TreeData::new(), "v0");
    for i in 1..=15 {
        tree = update_node(&tree, &id, &UpdateNodeRequest::content(format!("v{i}")));
    }

    let node = tree.get(&id).unwrap();
    assert_eq!(node.content, "v15");
    assert_eq!(node.edit_history.len(), MAX_EDIT_HISTORY);
    // The ten most recent prior-content snapshots, oldest first.
    let contents: Vec<&str> = node
        .edit_history
        .iter()
        .map(|record| record.content.as_str())
        .collect();
    let expected: Vec<String> = (5..=14).map(|i| format!("v{i}")).collect();
    assert_eq!(contents, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn test_delete_node_cascades_three_levels() {
    let (tree, root_id) = add_root(&TreeData::new(), "Root");
    let (tree, mid_id) = add_child(&tree, &root_id, "Mid");
    let (tree, leaf_id) = add_child(&tree, &mid_id, "Leaf");
    let (tree, deep_id) = add_child(&tree, &leaf_id, "Deep");
    let (tree, sibling_id) = add_child(&tree, &root_id, "Sibling");

    let tree = delete_node(&tree, &mid_id);

    for id in [&mid_id, &leaf_id, &deep_id] {
        assert!(!tree.contains(id), "descendant {id} should be deleted");
    }
    let root = tree.get(&root_id).unwrap();
    assert_eq!(root.children_ids, vec![sibling_id.clone()]);
    assert!(tree.contains(&sibling_id));
}

#[test]
fn test_delete_root_removes_from_root_list() {
    let (tree, root_id) = add_root(&TreeData::new(), "Root");
    let (tree, other_id) = add_root(&tree, "Other");

    let tree = delete_node(&tree, &root_id);

    assert!(!tree.contains(&root_id));
    assert_eq!(tree.root_node_ids, vec![other_id]);
}

#[test]
fn test_delete_node_absent_id_is_noop() {
    let (tree, _) = add_root(&TreeData::new(), "Root");
    let deleted = delete_node(&tree, "missing");
    assert_eq!(deleted, tree);
}

#[test]
fn test_extract_scopes_to_subtree() {
    // Root A -> children B, C; B -> child D.
    let (tree, a) = add_root(&TreeData::new(), "A");
    let (tree, b) = add_child(&tree, &a, "B");
    let (tree, c) = add_child(&tree, &a, "C");
    let (tree, d) = add_child(&tree, &b, "D");

    let projection = extract_for_execution(&tree.nodes, &b);

    assert_eq!(projection.len(), 2);
    assert!(projection.contains_key(&b));
    assert!(projection.contains_key(&d));
    assert!(!projection.contains_key(&a));
    assert!(!projection.contains_key(&c));
}

#[test]
fn test_extract_unknown_start_yields_empty() {
    let (tree, _) = add_root(&TreeData::new(), "Root");
    let projection = extract_for_execution(&tree.nodes, "missing");
    assert!(projection.is_empty());
}

#[test]
fn test_extract_copies_children_and_status() {
    let (tree, root_id) = add_root(&TreeData::new(), "Root");
    let (tree, child_id) = add_child(&tree, &root_id, "Child");
    let tree = update_node(
        &tree,
        &root_id,
        &UpdateNodeRequest::status(NodeStatus::Decomposed),
    );

    let projection = extract_for_execution(&tree.nodes, &root_id);
    let root_view = &projection[&root_id];
    assert_eq!(root_view.status, NodeStatus::Decomposed);
    assert_eq!(root_view.children_ids, vec![child_id]);
}

#[test]
fn test_extract_tolerates_cycles() {
    // Break the forest invariant on purpose; traversal must terminate.
    let (tree, a) = add_root(&TreeData::new(), "A");
    let (mut tree, b) = add_child(&tree, &a, "B");
    tree.nodes.get_mut(&b).unwrap().children_ids.push(a.clone());

    let projection = extract_for_execution(&tree.nodes, &a);
    assert_eq!(projection.len(), 2);
}
