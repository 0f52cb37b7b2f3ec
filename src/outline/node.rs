// SPDX-License-Identifier: MPL-2.0
//! Node types for the outline tree.

use std::fmt;

/// Stable identity of one outline entry, unique across the whole tree.
///
/// Ids are opaque strings; the widget never derives meaning from them and
/// only compares them for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One entry in the outline: an id, a display title, and an ordered
/// sequence of child entries owned exclusively by this node.
///
/// `children` is always a valid (possibly empty) collection, so traversals
/// never have to defend against a missing child list.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    pub children: Vec<Node>,
}

impl Node {
    #[must_use]
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(
        id: impl Into<NodeId>,
        title: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            children,
        }
    }

    /// Returns whether `id` is this node itself or anywhere in its
    /// descendant set.
    ///
    /// Used as the cycle guard before re-parenting: dropping a node onto
    /// itself or onto one of its own descendants would make it its own
    /// ancestor. A leaf has an empty descendant set, so only the self-check
    /// applies.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.id == *id || self.children.iter().any(|child| child.contains(id))
    }

    /// Total number of nodes in this subtree, including this node.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::with_children(
            "a",
            "A",
            vec![
                Node::with_children("a-1", "A.1", vec![Node::new("a-1-1", "A.1.1")]),
                Node::new("a-2", "A.2"),
            ],
        )
    }

    #[test]
    fn contains_matches_self() {
        let node = sample();
        assert!(node.contains(&NodeId::from("a")));
    }

    #[test]
    fn contains_matches_deep_descendant() {
        let node = sample();
        assert!(node.contains(&NodeId::from("a-1-1")));
    }

    #[test]
    fn contains_rejects_unrelated_id() {
        let node = sample();
        assert!(!node.contains(&NodeId::from("b")));
    }

    #[test]
    fn contains_on_leaf_only_checks_self() {
        let leaf = Node::new("x", "X");
        assert!(leaf.contains(&NodeId::from("x")));
        assert!(!leaf.contains(&NodeId::from("y")));
    }

    #[test]
    fn count_includes_whole_subtree() {
        assert_eq!(sample().count(), 4);
        assert_eq!(Node::new("x", "X").count(), 1);
    }

    #[test]
    fn node_id_display_matches_inner_string() {
        assert_eq!(NodeId::from("1-2").to_string(), "1-2");
    }
}
