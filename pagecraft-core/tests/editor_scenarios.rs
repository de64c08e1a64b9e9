//! Editor scenario tests
//!
//! End-to-end gesture sequences against the public API:
//! - Adding and cascade-removing nested nodes
//! - Cycle rejection on drag/drop

use pagecraft_core::{
    BuilderError, DragController, DropOutcome, EditorState, NodeId, NodeKind, Position,
    RejectReason, Tool,
};

fn at(x: f32, y: f32) -> Position {
    Position::new(x, y)
}

// ============================================================================
// Add / remove
// ============================================================================

#[test]
fn test_add_nested_then_remove_root_empties_store() {
    let mut editor = EditorState::new();

    let div = editor.add(NodeKind::Div, at(0.0, 0.0), None).expect("div");
    assert_eq!(div, NodeId::new(1));
    assert_eq!(editor.store().roots().count(), 1);
    assert!(editor.node(div).is_some_and(|n| n.children.is_empty()));

    let button = editor.add(NodeKind::Button, at(0.0, 0.0), Some(div)).expect("button");
    assert_eq!(editor.node(button).and_then(|n| n.parent), Some(div));
    assert_eq!(editor.node(div).map(|n| n.children.clone()), Some(vec![button]));

    editor.remove(div).expect("remove");
    assert!(editor.store().is_empty());
    assert_eq!(editor.selected(), None);
}

#[test]
fn test_remove_deletes_exactly_the_subtree() {
    let mut editor = EditorState::new();
    let keep_root = editor.add(NodeKind::Container, at(0.0, 0.0), None).expect("keep");
    let keep_leaf = editor.add(NodeKind::Span, at(0.0, 0.0), Some(keep_root)).expect("leaf");
    let doomed = editor.add(NodeKind::Div, at(50.0, 0.0), Some(keep_root)).expect("doomed");
    let doomed_a = editor.add(NodeKind::Div, at(0.0, 0.0), Some(doomed)).expect("a");
    let doomed_b = editor.add(NodeKind::Image, at(0.0, 0.0), Some(doomed_a)).expect("b");

    let mut removed = editor.remove(doomed).expect("remove");
    removed.sort();
    assert_eq!(removed, vec![doomed, doomed_a, doomed_b]);

    let left: Vec<_> = editor.store().nodes().map(|n| n.id).collect();
    assert_eq!(left, vec![keep_root, keep_leaf]);
    assert_eq!(editor.store().check_invariants(), Ok(()));
}

#[test]
fn test_removing_a_selected_descendant_clears_selection() {
    let mut editor = EditorState::new();
    let root = editor.add(NodeKind::Div, at(0.0, 0.0), None).expect("root");
    let child = editor.add(NodeKind::Paragraph, at(0.0, 0.0), Some(root)).expect("child");
    assert_eq!(editor.selected(), Some(child));

    editor.remove(root).expect("remove");
    assert_eq!(editor.selected(), None);
}

#[test]
fn test_ids_are_never_reused() {
    let mut editor = EditorState::new();
    let first = editor.add(NodeKind::Div, at(0.0, 0.0), None).expect("first");
    editor.remove(first).expect("remove");
    let second = editor.add(NodeKind::Div, at(0.0, 0.0), None).expect("second");
    assert_eq!(second, NodeId::new(2));
}

#[test]
fn test_style_update_is_idempotent() {
    let mut editor = EditorState::new();
    let id = editor.add(NodeKind::Button, at(0.0, 0.0), None).expect("add");

    editor.update_style(id, "borderRadius", "12px");
    let once = editor.clone();
    editor.update_style(id, "borderRadius", "12px");
    assert_eq!(editor, once);
}

// ============================================================================
// Drag and drop
// ============================================================================

#[test]
fn test_reparent_into_own_descendant_is_rejected() {
    let mut editor = EditorState::new();
    let outer = editor.add(NodeKind::Div, at(0.0, 0.0), None).expect("1");
    let inner = editor.add(NodeKind::Div, at(0.0, 0.0), Some(outer)).expect("2");
    let leaf = editor.add(NodeKind::Container, at(0.0, 0.0), Some(inner)).expect("3");
    let before = serde_json::to_string(&editor).expect("serialize");

    let outcome = editor.reparent(outer, leaf);
    assert!(!outcome.is_moved());
    assert_eq!(serde_json::to_string(&editor).expect("serialize"), before);
}

#[test]
fn test_drag_flow_moves_root_into_container() {
    let mut editor = EditorState::new();
    let mut drag = DragController::new();

    editor.set_tool(Tool::Place(NodeKind::Container));
    let target = editor.click_canvas(at(10.0, 10.0)).expect("target");
    editor.set_tool(Tool::Place(NodeKind::Heading));
    let heading = editor.click_canvas(at(300.0, 40.0)).expect("heading");

    editor.set_tool(Tool::Select);
    assert!(drag.begin(&editor, heading));
    assert_eq!(
        drag.drop_on(&mut editor, target),
        DropOutcome::Committed { source: heading, target }
    );

    let roots: Vec<_> = editor.store().root_ids().to_vec();
    assert_eq!(roots, vec![target]);
    assert_eq!(editor.parent_kind(heading), Some(NodeKind::Container));
}

#[test]
fn test_drop_on_leaf_is_rejected() {
    let mut editor = EditorState::new();
    let mut drag = DragController::new();
    let a = editor.add(NodeKind::Paragraph, at(0.0, 0.0), None).expect("a");
    let b = editor.add(NodeKind::Select, at(0.0, 0.0), None).expect("b");

    assert!(drag.begin(&editor, a));
    assert_eq!(
        drag.drop_on(&mut editor, b),
        DropOutcome::Rejected { source: a, reason: RejectReason::NotContainer }
    );
    assert!(editor.node(a).is_some_and(|n| n.parent.is_none()));
}

#[test]
fn test_drag_source_removed_before_drop() {
    let mut editor = EditorState::new();
    let mut drag = DragController::new();
    let target = editor.add(NodeKind::Div, at(0.0, 0.0), None).expect("target");
    let source = editor.add(NodeKind::Span, at(0.0, 0.0), None).expect("source");

    assert!(drag.begin(&editor, source));
    editor.remove(source);
    assert_eq!(
        drag.drop_on(&mut editor, target),
        DropOutcome::Rejected { source, reason: RejectReason::SourceMissing }
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_placement_click_on_missing_node() {
    let mut editor = EditorState::new();
    editor.set_tool(Tool::Place(NodeKind::Button));
    let result = editor.click_node(NodeId::new(3), at(0.0, 0.0));
    assert!(matches!(result, Err(BuilderError::InvalidParent(_))));
}

#[test]
fn test_docs_link_for_every_kind() {
    for kind in NodeKind::ALL {
        assert!(kind.docs_url().starts_with("https://vuejs.org/"));
    }
}
