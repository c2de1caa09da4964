//! Arbre queries: pre-order walks and lookups by name, handle, container flag.
//!
//! Every search visits children before siblings and returns the first
//! match, so with duplicate names the earlier node in pre-order wins.

use crate::handle::WidgetHandle;

use super::node::{Node, NodeId};
use super::tree::Arbre;

/// Pre-order iterator over a subtree. See [`Arbre::walk_pre_order`].
///
/// Holds at most one pending sibling per level, so its stack is bounded by
/// the tree depth.
pub struct PreOrder<'a> {
    arbre: &'a Arbre,
    start: Option<NodeId>,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        // The start node's own siblings are outside the subtree.
        if Some(current) != self.start {
            if let Some(sibling) = self.arbre.next_sibling(current) {
                self.stack.push(sibling);
            }
        }
        if let Some(child) = self.arbre.first_child(current) {
            self.stack.push(child);
        }
        Some(current)
    }
}

impl Arbre {
    /// Walk the subtree rooted at `start`, children before siblings.
    pub fn walk_pre_order(&self, start: NodeId) -> PreOrder<'_> {
        let stack = if self.contains(start) {
            vec![start]
        } else {
            Vec::new()
        };
        PreOrder {
            arbre: self,
            start: Some(start),
            stack,
        }
    }

    /// Walk the whole tree from the root. Detached nodes are not visited.
    pub fn iter_pre_order(&self) -> PreOrder<'_> {
        match self.root() {
            Some(root) => self.walk_pre_order(root),
            None => PreOrder {
                arbre: self,
                start: None,
                stack: Vec::new(),
            },
        }
    }

    /// First node matching `predicate`, in pre-order.
    pub fn find(&self, predicate: impl Fn(&Node) -> bool) -> Option<NodeId> {
        self.iter_pre_order()
            .find(|&id| self.nodes.get(id).is_some_and(&predicate))
    }

    /// First node named exactly `name`.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.find(|node| node.name == name)
    }

    /// First node named exactly `name` that accepts children.
    pub fn find_container(&self, name: &str) -> Option<NodeId> {
        self.find(|node| node.is_container && node.name == name)
    }

    /// First node mirroring the widget `handle`.
    pub fn find_by_handle(&self, handle: WidgetHandle) -> Option<NodeId> {
        self.find(|node| node.handle == Some(handle))
    }

    /// Widget handle of the first node named `name`.
    pub fn find_widget_handle_by_name(&self, name: &str) -> Option<WidgetHandle> {
        self.find_by_name(name)
            .and_then(|id| self.nodes.get(id))
            .and_then(|node| node.handle)
    }

    /// Name of the first node mirroring `handle`.
    pub fn find_name_by_widget_handle(&self, handle: WidgetHandle) -> Option<&str> {
        self.find_by_handle(handle)
            .and_then(|id| self.nodes.get(id))
            .map(|node| node.name.as_str())
    }

    /// Names of all container nodes in pre-order, at most
    /// `limits().max_containers` of them.
    pub fn list_container_names(&self) -> Vec<String> {
        let cap = self.limits().max_containers;
        let mut names = Vec::new();
        for id in self.iter_pre_order() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if !node.is_container {
                continue;
            }
            if names.len() == cap {
                tracing::debug!(cap, "container listing truncated");
                break;
            }
            names.push(node.name.clone());
        }
        names
    }
}
