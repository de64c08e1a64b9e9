//! # Drag and drop
//!
//! Turns a two-phase pointer gesture into one reparent mutation.
//!
//! ```text
//! Idle ──begin(source)──▶ Dragging(source) ──drop(target)──▶ Idle
//!                                   │
//!                                   └──────cancel()────────▶ Idle
//! ```
//!
//! A drag can only start while the select tool is active. The drop is
//! validated and applied in a single call, so no other mutation can slip
//! in between the cycle check and the commit.

use crate::editor::{RejectReason, ReparentOutcome};
use crate::{EditorState, NodeId, Tool};

/// Current phase of the gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A node has been picked up.
    Dragging {
        /// The node being carried.
        source: NodeId,
    },
}

/// Result of a drop gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// A drop arrived with nothing being dragged.
    NotDragging,
    /// The source was moved under the target.
    Committed {
        /// The moved node.
        source: NodeId,
        /// Its new parent.
        target: NodeId,
    },
    /// The drop was refused; the forest is unchanged.
    Rejected {
        /// The node that was being dragged.
        source: NodeId,
        /// Why the drop was refused.
        reason: RejectReason,
    },
}

/// Drag/drop gesture controller.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a node is currently being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The node being dragged, if any.
    #[must_use]
    pub const fn source(&self) -> Option<NodeId> {
        match self.state {
            DragState::Dragging { source } => Some(source),
            DragState::Idle => None,
        }
    }

    /// Pick up `source`.
    ///
    /// Returns `false` and stays put unless the select tool is active and
    /// the node exists. Starting a new drag replaces any drag in progress.
    pub fn begin(&mut self, editor: &EditorState, source: NodeId) -> bool {
        if editor.tool() != Tool::Select {
            tracing::debug!(%source, "Drag ignored: select tool not active");
            return false;
        }
        if editor.node(source).is_none() {
            tracing::debug!(%source, "Drag ignored: no such node");
            return false;
        }
        self.state = DragState::Dragging { source };
        true
    }

    /// Drop the carried node onto `target`.
    ///
    /// The controller returns to idle whatever the outcome.
    pub fn drop_on(&mut self, editor: &mut EditorState, target: NodeId) -> DropOutcome {
        let DragState::Dragging { source } = std::mem::take(&mut self.state) else {
            return DropOutcome::NotDragging;
        };
        match editor.reparent(source, target) {
            ReparentOutcome::Moved => DropOutcome::Committed { source, target },
            ReparentOutcome::Rejected(reason) => DropOutcome::Rejected { source, reason },
        }
    }

    /// Abandon the drag, for example when it ends outside any container.
    pub fn cancel(&mut self) {
        if let DragState::Dragging { source } = self.state {
            tracing::debug!(%source, "Drag cancelled");
        }
        self.state = DragState::Idle;
    }
}
