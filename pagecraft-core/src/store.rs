//! Node store holding the component forest.
//!
//! The store is a flat arena keyed by [`NodeId`] plus an ordered list of
//! root ids. It answers queries but does not police the parent/child
//! invariants on its own; [`EditorState`](crate::EditorState) is the only
//! writer and keeps both directions of every link in step.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{ComponentNode, NodeId};

/// All nodes of one editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStore {
    /// All nodes, indexed by ID.
    nodes: BTreeMap<NodeId, ComponentNode>,
    /// Top-level node IDs in canvas order.
    roots: Vec<NodeId>,
}

impl NodeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a node by ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&ComponentNode> {
        self.nodes.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut ComponentNode> {
        self.nodes.get_mut(&id)
    }

    /// Check whether a node exists.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &ComponentNode> {
        self.nodes.values()
    }

    /// Root nodes in canvas order.
    pub fn roots(&self) -> impl Iterator<Item = &ComponentNode> {
        self.roots.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Root node IDs in canvas order.
    #[must_use]
    pub fn root_ids(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children of a node in display order. Empty if the node is unknown.
    pub fn children_of(&self, id: NodeId) -> impl Iterator<Item = &ComponentNode> {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|child| self.nodes.get(child))
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every transitive descendant of `id`, depth-first pre-order, excluding
    /// `id` itself.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut stack: Vec<NodeId> = self
            .nodes
            .get(&id)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();

        while let Some(next) = stack.pop() {
            if !seen.insert(next) {
                continue;
            }
            out.push(next);
            if let Some(node) = self.nodes.get(&next) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Whether `candidate` lies somewhere below `ancestor`.
    ///
    /// Walks the same explicit stack as [`Self::descendants`], so deep
    /// chains do not grow the call stack.
    #[must_use]
    pub fn is_descendant(&self, ancestor: NodeId, candidate: NodeId) -> bool {
        self.descendants(ancestor).contains(&candidate)
    }

    /// Verify the forest invariants.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        for (id, node) in &self.nodes {
            if node.id != *id {
                return Err(format!("node keyed {id} carries id {}", node.id));
            }
            match node.parent {
                Some(parent_id) => {
                    let parent = self
                        .nodes
                        .get(&parent_id)
                        .ok_or_else(|| format!("node {id} points at missing parent {parent_id}"))?;
                    if !parent.children.contains(id) {
                        return Err(format!("parent {parent_id} does not list child {id}"));
                    }
                    if self.roots.contains(id) {
                        return Err(format!("nested node {id} is listed as a root"));
                    }
                }
                None => {
                    let count = self.roots.iter().filter(|r| *r == id).count();
                    if count != 1 {
                        return Err(format!("root {id} appears {count} times in the root list"));
                    }
                }
            }

            let mut unique = HashSet::new();
            for child_id in &node.children {
                if !unique.insert(*child_id) {
                    return Err(format!("node {id} lists child {child_id} twice"));
                }
                let child = self
                    .nodes
                    .get(child_id)
                    .ok_or_else(|| format!("node {id} lists missing child {child_id}"))?;
                if child.parent != Some(*id) {
                    return Err(format!("child {child_id} does not point back at {id}"));
                }
            }

            // Walking up must reach a root within len() steps.
            let mut cursor = node.parent;
            let mut steps = 0;
            while let Some(up) = cursor {
                if up == *id || steps > self.nodes.len() {
                    return Err(format!("node {id} is its own ancestor"));
                }
                steps += 1;
                cursor = self.nodes.get(&up).and_then(|n| n.parent);
            }
        }

        if let Some(stray) = self.roots.iter().find(|r| !self.nodes.contains_key(r)) {
            return Err(format!("root list names missing node {stray}"));
        }
        Ok(())
    }

    /// Insert a node, registering it as a root when it has no parent.
    pub(crate) fn insert(&mut self, node: ComponentNode) {
        if node.parent.is_none() && !self.roots.contains(&node.id) {
            self.roots.push(node.id);
        }
        self.nodes.insert(node.id, node);
    }

    /// Remove a node from the arena and the root list. Links held by other
    /// nodes are left for the caller to repair.
    pub(crate) fn take(&mut self, id: NodeId) -> Option<ComponentNode> {
        self.roots.retain(|&r| r != id);
        self.nodes.remove(&id)
    }

    pub(crate) fn push_root(&mut self, id: NodeId) {
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
    }

    pub(crate) fn remove_root(&mut self, id: NodeId) {
        self.roots.retain(|&r| r != id);
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut ComponentNode> {
        self.nodes.values_mut()
    }

    /// Highest id currently present.
    pub(crate) fn max_id(&self) -> Option<NodeId> {
        self.nodes.keys().next_back().copied()
    }
}
