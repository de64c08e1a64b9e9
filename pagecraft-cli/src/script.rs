//! Gesture scripts.
//!
//! A script is a JSON array of steps that stand in for the host UI's
//! pointer and form events:
//!
//! ```json
//! [
//!   { "step": "set_tool", "tool": { "place": "container" } },
//!   { "step": "click_canvas", "x": 40, "y": 60 },
//!   { "step": "pick_component", "name": "button" },
//!   { "step": "click_node", "id": 1 },
//!   { "step": "update_content", "id": 2, "content": "Buy now" }
//! ]
//! ```

use anyhow::Context;
use pagecraft_core::{DragController, DropOutcome, EditorState, NodeId, NodeKind, Position, Tool};
use serde::{Deserialize, Serialize};

/// One host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Pick a toolbar tool.
    SetTool {
        /// The tool.
        tool: Tool,
    },
    /// Pick a component from the palette by its toolbar name
    /// (`"h1"`, `"img"`, `"container"`, ...).
    PickComponent {
        /// Toolbar name.
        name: String,
    },
    /// Click empty canvas.
    ClickCanvas {
        /// Pointer x relative to the canvas.
        x: f32,
        /// Pointer y relative to the canvas.
        y: f32,
    },
    /// Click a node.
    ClickNode {
        /// Clicked node.
        id: NodeId,
        /// Pointer x relative to the node.
        #[serde(default)]
        x: f32,
        /// Pointer y relative to the node.
        #[serde(default)]
        y: f32,
    },
    /// Select a node from the layer list.
    Select {
        /// Node to select.
        id: NodeId,
    },
    /// Deselect.
    ClearSelection,
    /// Delete a node and its subtree.
    Remove {
        /// Node to delete.
        id: NodeId,
    },
    /// Edit one style field in the property panel.
    UpdateStyle {
        /// Node to edit.
        id: NodeId,
        /// Style property name.
        key: String,
        /// New value.
        value: String,
    },
    /// Edit the content field in the property panel.
    UpdateContent {
        /// Node to edit.
        id: NodeId,
        /// New content.
        content: String,
    },
    /// Start dragging a node.
    DragStart {
        /// Node picked up.
        id: NodeId,
    },
    /// Drop the dragged node onto a node.
    Drop {
        /// Drop target.
        target: NodeId,
    },
    /// Release the drag outside any container.
    DragCancel,
}

/// Parse a script from JSON text.
///
/// # Errors
///
/// Returns an error if the text is not a valid step array.
pub fn parse(json: &str) -> anyhow::Result<Vec<Step>> {
    serde_json::from_str(json).context("Failed to parse gesture script")
}

/// Counts from a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Steps that changed the session.
    pub applied: usize,
    /// Steps that were refused and left the session unchanged.
    pub refused: usize,
}

/// Replay `steps` against `editor`.
///
/// Refused gestures are logged and counted. A click that names a missing
/// parent aborts the replay.
///
/// # Errors
///
/// Returns an error if a step fails with a builder error.
pub fn replay(editor: &mut EditorState, steps: &[Step]) -> anyhow::Result<ReplaySummary> {
    let mut drag = DragController::new();
    let mut summary = ReplaySummary::default();

    for (index, step) in steps.iter().enumerate() {
        let applied = apply(editor, &mut drag, step)
            .with_context(|| format!("Step {index} ({step:?}) failed"))?;
        if applied {
            summary.applied += 1;
        } else {
            tracing::debug!(index, ?step, "Step refused");
            summary.refused += 1;
        }
    }

    if drag.is_dragging() {
        tracing::debug!("Script ended mid-drag; cancelling");
        drag.cancel();
    }
    Ok(summary)
}

fn apply(editor: &mut EditorState, drag: &mut DragController, step: &Step) -> anyhow::Result<bool> {
    let applied = match step {
        Step::SetTool { tool } => {
            editor.set_tool(*tool);
            true
        }
        Step::PickComponent { name } => match NodeKind::from_tool_name(name) {
            Some(kind) => {
                editor.set_tool(Tool::Place(kind));
                true
            }
            None => {
                tracing::warn!(%name, "Unknown component name");
                false
            }
        },
        Step::ClickCanvas { x, y } => editor.click_canvas(Position::new(*x, *y)).is_some(),
        Step::ClickNode { id, x, y } => {
            let added = editor.click_node(*id, Position::new(*x, *y))?;
            added.is_some() || (editor.tool() == Tool::Select && editor.store().contains(*id))
        }
        Step::Select { id } => editor.select(*id),
        Step::ClearSelection => {
            editor.clear_selection();
            true
        }
        Step::Remove { id } => editor.remove(*id).is_some(),
        Step::UpdateStyle { id, key, value } => editor.update_style(*id, key, value),
        Step::UpdateContent { id, content } => editor.update_content(*id, content),
        Step::DragStart { id } => drag.begin(editor, *id),
        Step::Drop { target } => match drag.drop_on(editor, *target) {
            DropOutcome::Committed { .. } => true,
            DropOutcome::Rejected { source, reason } => {
                tracing::debug!(%source, %target, %reason, "Drop rejected");
                false
            }
            DropOutcome::NotDragging => false,
        },
        Step::DragCancel => {
            drag.cancel();
            true
        }
    };
    Ok(applied)
}
