// SPDX-License-Identifier: MPL-2.0
//! The outline tree and the structural operations behind drag gestures.
//!
//! All operations use the same depth-first, pre-order traversal: each root's
//! subtree is searched completely before the next root, and the first match
//! wins. Lookup misses are ordinary `None`/`NotFound` results, never errors;
//! during a continuous drag most hovered targets are transient and expected
//! to be rejected.

use super::node::{Node, NodeId};

/// Result of a [`Outline::reparent`] attempt.
///
/// Every variant except `Moved` leaves the tree structurally unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The node was detached and appended as the last child of the target.
    Moved,
    /// Active and target are the same node.
    SameNode,
    /// The target is the active node itself or one of its descendants;
    /// completing the move would create a cycle.
    WouldCycle,
    /// Either the active node or the target is not in the tree.
    NotFound,
}

impl MoveOutcome {
    /// Returns whether the tree was structurally changed.
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }
}

/// A node removed from the tree, together with the site it came from so an
/// aborted move can put it back exactly where it was.
#[derive(Debug)]
pub struct Detached {
    node: Node,
    /// Parent id, or `None` when the node was a root.
    parent: Option<NodeId>,
    /// Index in the parent's (or root) sequence at detach time.
    index: usize,
}

impl Detached {
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }

    #[must_use]
    pub fn into_node(self) -> Node {
        self.node
    }
}

/// An ordered sequence of root-level nodes: the whole structure the widget
/// edits. One viewer, one tree, no persistence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    roots: Vec<Node>,
}

impl Outline {
    #[must_use]
    pub fn new(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    #[must_use]
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Total node count across all roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.iter().map(Node::count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Finds the first node (pre-order) with the given id.
    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        find_in(&self.roots, id)
    }

    #[must_use]
    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        find_in_mut(&mut self.roots, id)
    }

    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// All ids in pre-order. Mainly used to check the uniqueness invariant.
    #[must_use]
    pub fn ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.len());
        collect_ids(&self.roots, &mut ids);
        ids
    }

    /// Detaches the first node (pre-order) with the given id, preserving the
    /// relative order of its remaining siblings. The detached node keeps its
    /// whole subtree and remembers where it came from.
    ///
    /// Returns `None` and leaves the tree untouched when no node matches.
    pub fn detach(&mut self, id: &NodeId) -> Option<Detached> {
        detach_from(&mut self.roots, None, id)
    }

    /// Re-parents `active` onto `over`: detaches the active node and appends
    /// it as the last child of the target. Append-only; no positional
    /// insertion among the target's existing children.
    ///
    /// The move is rejected without touching the tree when the target is
    /// missing, is the active node itself, or lies inside the active node's
    /// subtree (cycle guard). A detached node is reinserted at exactly one
    /// location or restored to its original site.
    pub fn reparent(&mut self, active: &NodeId, over: &NodeId) -> MoveOutcome {
        if active == over {
            return MoveOutcome::SameNode;
        }
        let Some(dragged) = self.find(active) else {
            return MoveOutcome::NotFound;
        };
        if dragged.contains(over) {
            return MoveOutcome::WouldCycle;
        }
        if !self.contains(over) {
            return MoveOutcome::NotFound;
        }

        let Some(detached) = self.detach(active) else {
            return MoveOutcome::NotFound;
        };
        match self.find_mut(over) {
            Some(target) => {
                target.children.push(detached.into_node());
                MoveOutcome::Moved
            }
            None => {
                // The target was checked above and cannot be inside the
                // detached subtree, so this branch is unreachable in
                // practice; restore rather than lose the node.
                self.restore(detached);
                MoveOutcome::NotFound
            }
        }
    }

    /// Puts a detached node back at its recorded site. Falls back to the end
    /// of the root sequence if the original parent no longer exists.
    fn restore(&mut self, detached: Detached) {
        let Detached {
            node,
            parent,
            index,
        } = detached;
        match parent {
            None => {
                let at = index.min(self.roots.len());
                self.roots.insert(at, node);
            }
            Some(parent_id) => match self.find_mut(&parent_id) {
                Some(parent) => {
                    let at = index.min(parent.children.len());
                    parent.children.insert(at, node);
                }
                None => self.roots.push(node),
            },
        }
    }
}

fn find_in<'a>(nodes: &'a [Node], id: &NodeId) -> Option<&'a Node> {
    for node in nodes {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_in(&node.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_in_mut<'a>(nodes: &'a mut [Node], id: &NodeId) -> Option<&'a mut Node> {
    for node in nodes {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_in_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

fn collect_ids(nodes: &[Node], out: &mut Vec<NodeId>) {
    for node in nodes {
        out.push(node.id.clone());
        collect_ids(&node.children, out);
    }
}

fn detach_from(nodes: &mut Vec<Node>, parent: Option<&NodeId>, id: &NodeId) -> Option<Detached> {
    for index in 0..nodes.len() {
        if nodes[index].id == *id {
            let node = nodes.remove(index);
            return Some(Detached {
                node,
                parent: parent.cloned(),
                index,
            });
        }
        let child_parent = nodes[index].id.clone();
        if let Some(detached) = detach_from(&mut nodes[index].children, Some(&child_parent), id) {
            return Some(detached);
        }
    }
    None
}
