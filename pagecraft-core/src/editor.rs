//! Editor state and the mutation engine.
//!
//! [`EditorState`] bundles the node store with the session's selection,
//! active tool and id counter. Every write to the forest goes through its
//! methods, and each one either leaves the store consistent or changes
//! nothing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    BuilderError, BuilderResult, ComponentNode, NodeId, NodeKind, NodeStore, Position,
    NESTED_ORIGIN,
};

/// The active toolbar tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Select and move existing nodes.
    #[default]
    Select,
    /// Place new nodes of the given kind on click.
    Place(NodeKind),
}

/// Why a reparent was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The node being moved no longer exists.
    SourceMissing,
    /// The drop target does not exist.
    TargetMissing,
    /// The node was dropped onto itself.
    SelfDrop,
    /// The target kind cannot hold children.
    NotContainer,
    /// The target lies inside the moved node's subtree.
    WouldCycle,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::SourceMissing => "source node does not exist",
            Self::TargetMissing => "target node does not exist",
            Self::SelfDrop => "node dropped onto itself",
            Self::NotContainer => "target cannot hold children",
            Self::WouldCycle => "target is a descendant of the source",
        };
        f.write_str(text)
    }
}

/// Result of a reparent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReparentOutcome {
    /// The node now lives under the requested parent.
    Moved,
    /// Nothing changed.
    Rejected(RejectReason),
}

impl ReparentOutcome {
    /// Whether the store was changed.
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// A complete editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    /// The component forest.
    store: NodeStore,
    /// Next id to hand out.
    next_id: u64,
    /// Node shown in the property panel.
    selected: Option<NodeId>,
    /// Tool chosen on the toolbar.
    tool: Tool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Create an empty session with the select tool active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: NodeStore::new(),
            next_id: 1,
            selected: None,
            tool: Tool::Select,
        }
    }

    /// Read-only view of the forest.
    #[must_use]
    pub const fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Get a node by ID.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&ComponentNode> {
        self.store.get(id)
    }

    /// The active tool.
    #[must_use]
    pub const fn tool(&self) -> Tool {
        self.tool
    }

    /// Change the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// The currently selected node id.
    #[must_use]
    pub const fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// The currently selected node.
    #[must_use]
    pub fn selected_node(&self) -> Option<&ComponentNode> {
        self.selected.and_then(|id| self.store.get(id))
    }

    /// Select a node. Returns `false` and leaves the selection alone if the
    /// node does not exist.
    pub fn select(&mut self, id: NodeId) -> bool {
        if self.store.contains(id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Kind of the container holding `id`, if it is nested.
    #[must_use]
    pub fn parent_kind(&self, id: NodeId) -> Option<NodeKind> {
        let parent = self.store.get(id)?.parent?;
        self.store.get(parent).map(|p| p.kind)
    }

    /// Add a node and select it.
    ///
    /// With a parent the node is appended to that parent's children and
    /// `position` is kept only as a record of where the click landed;
    /// without one it becomes a new root at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidParent`] if `parent` does not exist.
    pub fn add(
        &mut self,
        kind: NodeKind,
        position: Position,
        parent: Option<NodeId>,
    ) -> BuilderResult<NodeId> {
        if let Some(parent_id) = parent {
            if !self.store.contains(parent_id) {
                return Err(BuilderError::InvalidParent(parent_id));
            }
        }

        let id = NodeId::new(self.next_id);
        self.next_id += 1;

        let mut node = ComponentNode::new(id, kind, position);
        node.parent = parent;
        if let Some(parent_node) = parent.and_then(|p| self.store.get_mut(p)) {
            parent_node.children.push(id);
        }
        self.store.insert(node);
        self.selected = Some(id);

        tracing::debug!(%id, ?kind, parent = ?parent.map(NodeId::get), "Added node");
        Ok(id)
    }

    /// Remove a node together with its whole subtree.
    ///
    /// Returns the removed ids (the node first, then its descendants in
    /// depth-first order), or `None` if the node did not exist.
    pub fn remove(&mut self, id: NodeId) -> Option<Vec<NodeId>> {
        let former_parent = self.store.get(id)?.parent;

        let mut doomed = vec![id];
        doomed.extend(self.store.descendants(id));
        let doomed_set: HashSet<NodeId> = doomed.iter().copied().collect();

        match former_parent.and_then(|p| self.store.get_mut(p)) {
            Some(parent) => parent.children.retain(|&c| c != id),
            None => self.store.remove_root(id),
        }
        for gone in &doomed {
            self.store.take(*gone);
        }

        // Survivors still pointing into the removed set become roots.
        let mut orphans = Vec::new();
        for node in self.store.nodes_mut() {
            node.children.retain(|c| !doomed_set.contains(c));
            if node.parent.is_some_and(|p| doomed_set.contains(&p)) {
                node.parent = None;
                orphans.push(node.id);
            }
        }
        for orphan in orphans {
            tracing::warn!(%orphan, "Promoting orphaned node to root");
            self.store.push_root(orphan);
        }

        if self.selected.is_some_and(|s| doomed_set.contains(&s)) {
            self.selected = None;
        }

        tracing::debug!(%id, removed = doomed.len(), "Removed subtree");
        Some(doomed)
    }

    /// Set one style declaration. Returns `false` if the node does not exist.
    ///
    /// Values are stored verbatim; interpreting them is left to whatever
    /// renders the page.
    pub fn update_style(&mut self, id: NodeId, key: &str, value: &str) -> bool {
        let Some(node) = self.store.get_mut(id) else {
            return false;
        };
        node.styles.insert(key.to_string(), value.to_string());
        true
    }

    /// Replace a node's content. Returns `false` if the node does not exist.
    pub fn update_content(&mut self, id: NodeId, content: &str) -> bool {
        let Some(node) = self.store.get_mut(id) else {
            return false;
        };
        node.content = content.to_string();
        true
    }

    /// Move `child` to the end of `new_parent`'s children.
    ///
    /// Refused when either node is missing, when the two are the same node,
    /// when the target cannot hold children, or when the target sits inside
    /// `child`'s own subtree.
    pub fn reparent(&mut self, child: NodeId, new_parent: NodeId) -> ReparentOutcome {
        match self.check_reparent(child, new_parent) {
            Ok(old_parent) => {
                match old_parent.and_then(|p| self.store.get_mut(p)) {
                    Some(parent) => parent.children.retain(|&c| c != child),
                    None => self.store.remove_root(child),
                }
                if let Some(node) = self.store.get_mut(child) {
                    node.parent = Some(new_parent);
                    node.position = NESTED_ORIGIN;
                }
                if let Some(target) = self.store.get_mut(new_parent) {
                    target.children.push(child);
                }
                tracing::debug!(%child, %new_parent, "Reparented node");
                ReparentOutcome::Moved
            }
            Err(reason) => {
                tracing::debug!(%child, %new_parent, %reason, "Reparent refused");
                ReparentOutcome::Rejected(reason)
            }
        }
    }

    /// Validate a reparent and return the child's current parent.
    fn check_reparent(
        &self,
        child: NodeId,
        new_parent: NodeId,
    ) -> Result<Option<NodeId>, RejectReason> {
        let source = self.store.get(child).ok_or(RejectReason::SourceMissing)?;
        if child == new_parent {
            return Err(RejectReason::SelfDrop);
        }
        let target = self
            .store
            .get(new_parent)
            .ok_or(RejectReason::TargetMissing)?;
        if !target.kind.is_container() {
            return Err(RejectReason::NotContainer);
        }
        if self.store.is_descendant(child, new_parent) {
            return Err(RejectReason::WouldCycle);
        }
        Ok(source.parent)
    }

    /// Handle a click on empty canvas.
    ///
    /// With a placement tool this adds a root node at `position` and
    /// returns its id; with the select tool nothing happens.
    pub fn click_canvas(&mut self, position: Position) -> Option<NodeId> {
        let Tool::Place(kind) = self.tool else {
            return None;
        };
        self.add(kind, position, None).ok()
    }

    /// Handle a click on a node.
    ///
    /// The select tool selects the node. A placement tool adds a child when
    /// the node is a container and otherwise does nothing. `position` is
    /// the click offset relative to the clicked node.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidParent`] if a placement click names a
    /// node that does not exist.
    pub fn click_node(&mut self, id: NodeId, position: Position) -> BuilderResult<Option<NodeId>> {
        match self.tool {
            Tool::Select => {
                self.select(id);
                Ok(None)
            }
            Tool::Place(kind) => {
                let target = self.store.get(id).ok_or(BuilderError::InvalidParent(id))?;
                if target.kind.is_container() {
                    self.add(kind, position, Some(id)).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Serialize the session to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> BuilderResult<String> {
        serde_json::to_string_pretty(self).map_err(BuilderError::Serialization)
    }

    /// Restore a session from JSON.
    ///
    /// A dangling selection is dropped and the id counter is advanced past
    /// every stored id.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the forest it describes
    /// is not well formed.
    pub fn from_json(json: &str) -> BuilderResult<Self> {
        let mut state: Self = serde_json::from_str(json)?;
        state
            .store
            .check_invariants()
            .map_err(BuilderError::CorruptSnapshot)?;

        if let Some(max) = state.store.max_id() {
            if state.next_id <= max.get() {
                tracing::warn!(next_id = state.next_id, %max, "Advancing stale id counter");
                state.next_id = max.get() + 1;
            }
        }
        if state.selected.is_some_and(|s| !state.store.contains(s)) {
            state.selected = None;
        }
        tracing::info!(nodes = state.store.len(), "Loaded editor snapshot");
        Ok(state)
    }
}
