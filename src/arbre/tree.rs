//! Tree operations: allocate, insert by parent name, remove, walk links.

use slotmap::{SecondaryMap, SlotMap};

use crate::config::ArbreLimits;
use crate::data::WidgetData;
use crate::handle::WidgetHandle;

use super::error::ArbreError;
use super::node::{Node, NodeId};

/// Name of the sentinel root standing for the preview canvas.
pub const PREVIEW_AREA: &str = "preview_area";

/// The canonical widget tree, backed by a slotmap arena.
///
/// Nodes are linked first-child / next-sibling: a parent knows only its
/// first child, and each child knows the sibling after it. The links live in
/// secondary maps next to a parent index, so detaching is a local splice and
/// freeing a subtree never recurses through destructors.
///
/// Nodes are allocated detached and become part of the tree only through
/// [`insert`](Self::insert) (under a named container) or
/// [`set_root`](Self::set_root).
#[derive(Debug, Clone)]
pub struct Arbre {
    pub(crate) nodes: SlotMap<NodeId, Node>,
    first_child: SecondaryMap<NodeId, NodeId>,
    next_sibling: SecondaryMap<NodeId, NodeId>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
    limits: ArbreLimits,
}

impl Arbre {
    /// Create an empty Arbre with no root.
    pub fn new(limits: ArbreLimits) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            first_child: SecondaryMap::new(),
            next_sibling: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
            limits,
        }
    }

    /// Create an Arbre whose root is the [`PREVIEW_AREA`] sentinel container.
    ///
    /// The sentinel is created even when `limits.max_nodes` is zero.
    pub fn with_preview_root(limits: ArbreLimits) -> Self {
        let mut arbre = Self::new(limits);
        let root = arbre
            .nodes
            .insert(Node::new(PREVIEW_AREA, None, true, &arbre.limits));
        arbre.root = Some(root);
        arbre
    }

    /// Create a detached node with empty property lists and no data record.
    ///
    /// Fails with [`ArbreError::Allocation`] once `max_nodes` live nodes
    /// exist.
    pub fn allocate(
        &mut self,
        name: &str,
        handle: Option<WidgetHandle>,
        is_container: bool,
    ) -> Result<NodeId, ArbreError> {
        if self.nodes.len() >= self.limits.max_nodes {
            return Err(ArbreError::Allocation {
                capacity: self.limits.max_nodes,
            });
        }
        let id = self
            .nodes
            .insert(Node::new(name, handle, is_container, &self.limits));
        tracing::debug!(name, is_container, "allocated arbre node");
        Ok(id)
    }

    /// Make a detached node the root. Fails if the tree already has one.
    pub fn set_root(&mut self, id: NodeId) -> Result<(), ArbreError> {
        if !self.nodes.contains_key(id) {
            return Err(ArbreError::StaleNode);
        }
        if self.root.is_some() || self.parent.contains_key(id) {
            return Err(ArbreError::Attached);
        }
        self.root = Some(id);
        Ok(())
    }

    /// Attach a detached node as the last child of the first container named
    /// `parent_name`, searching pre-order from the root.
    ///
    /// Returns the parent it was attached under. On
    /// [`ArbreError::ParentNotFound`] the node stays allocated and detached;
    /// retry, [`discard`](Self::discard) it, or use
    /// [`insert_or_sentinel`](Self::insert_or_sentinel).
    pub fn insert(&mut self, id: NodeId, parent_name: &str) -> Result<NodeId, ArbreError> {
        if !self.nodes.contains_key(id) {
            return Err(ArbreError::StaleNode);
        }
        if self.is_attached(id) {
            return Err(ArbreError::Attached);
        }
        let parent = self
            .find_container(parent_name)
            .ok_or_else(|| ArbreError::ParentNotFound(parent_name.to_owned()))?;
        self.append_child(parent, id);
        tracing::debug!(
            name = %self.nodes[id].name,
            parent = parent_name,
            "inserted arbre node"
        );
        Ok(parent)
    }

    /// [`insert`](Self::insert), falling back to the [`PREVIEW_AREA`]
    /// sentinel when no container is named `parent_name`.
    pub fn insert_or_sentinel(
        &mut self,
        id: NodeId,
        parent_name: &str,
    ) -> Result<NodeId, ArbreError> {
        match self.insert(id, parent_name) {
            Err(ArbreError::ParentNotFound(_)) if parent_name != PREVIEW_AREA => {
                tracing::warn!(
                    parent = parent_name,
                    "no container with this name, attaching under {PREVIEW_AREA}"
                );
                self.insert(id, PREVIEW_AREA)
            }
            other => other,
        }
    }

    /// Free a node that was never attached.
    pub fn discard(&mut self, id: NodeId) -> Result<Node, ArbreError> {
        if self.is_attached(id) {
            return Err(ArbreError::Attached);
        }
        self.nodes.remove(id).ok_or(ArbreError::StaleNode)
    }

    /// Remove the first node named `name` (pre-order) and its whole subtree.
    ///
    /// See [`remove`](Self::remove) for how the parent's child chain is
    /// repaired.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Node> {
        let id = self.find_by_name(name)?;
        self.remove(id)
    }

    /// Remove a node and every node below it.
    ///
    /// The node's next sibling takes its slot in the parent's child chain.
    /// Its own children are freed with it, not handed to the parent.
    /// Returns the removed node, or `None` if `id` is not in the arena.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        let next = self.next_sibling.remove(id);
        if let Some(parent) = self.parent.remove(id) {
            if self.first_child.get(parent) == Some(&id) {
                match next {
                    Some(n) => {
                        self.first_child.insert(parent, n);
                    }
                    None => {
                        self.first_child.remove(parent);
                    }
                }
            } else if let Some(prev) = self.previous_sibling(parent, id) {
                match next {
                    Some(n) => {
                        self.next_sibling.insert(prev, n);
                    }
                    None => {
                        self.next_sibling.remove(prev);
                    }
                }
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        // Free everything reachable through the first-child link.
        let mut stack: Vec<NodeId> = self.first_child.remove(id).into_iter().collect();
        let mut freed = 0usize;
        while let Some(current) = stack.pop() {
            stack.extend(self.first_child.remove(current));
            stack.extend(self.next_sibling.remove(current));
            self.parent.remove(current);
            self.nodes.remove(current);
            freed += 1;
        }

        let removed = self.nodes.remove(id);
        if let Some(node) = &removed {
            tracing::debug!(name = %node.name, descendants = freed, "removed arbre node");
        }
        removed
    }

    // -- Node data ----------------------------------------------------------

    /// Set (or overwrite) a generic property on a node.
    pub fn set_property(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), ArbreError> {
        let node = self.nodes.get_mut(id).ok_or(ArbreError::StaleNode)?;
        node.properties.set(name, value)?;
        Ok(())
    }

    /// Set (or overwrite) a style property on a node.
    pub fn set_style_property(
        &mut self,
        id: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), ArbreError> {
        let node = self.nodes.get_mut(id).ok_or(ArbreError::StaleNode)?;
        node.style_properties.set(name, value)?;
        Ok(())
    }

    /// Attach a data record to a node and populate its properties.
    pub fn set_widget_data(&mut self, id: NodeId, data: WidgetData) -> Result<usize, ArbreError> {
        let node = self.nodes.get_mut(id).ok_or(ArbreError::StaleNode)?;
        Ok(node.set_data(data)?)
    }

    // -- Structure ----------------------------------------------------------

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn limits(&self) -> &ArbreLimits {
        &self.limits
    }

    /// Whether the node is the root or hangs below a parent.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.root == Some(id) || self.parent.contains_key(id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.first_child.get(id).copied()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.next_sibling.get(id).copied()
    }

    /// Iterate the child chain of `id`, first child first.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            arbre: self,
            next: self.first_child(id),
        }
    }

    /// Number of ancestors between `id` and the root (root is depth 0).
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(p) = self.parent(current) {
            depth += 1;
            current = p;
        }
        depth
    }

    fn last_child(&self, parent: NodeId) -> Option<NodeId> {
        self.children(parent).last()
    }

    fn previous_sibling(&self, parent: NodeId, id: NodeId) -> Option<NodeId> {
        self.children(parent)
            .find(|&child| self.next_sibling(child) == Some(id))
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        match self.last_child(parent) {
            Some(last) => {
                self.next_sibling.insert(last, child);
            }
            None => {
                self.first_child.insert(parent, child);
            }
        }
        self.parent.insert(child, parent);
    }
}

impl Default for Arbre {
    fn default() -> Self {
        Self::with_preview_root(ArbreLimits::default())
    }
}

/// Iterator over a node's child chain. See [`Arbre::children`].
pub struct Children<'a> {
    arbre: &'a Arbre,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.arbre.next_sibling(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a small test tree:
    /// ```text
    ///   preview_area
    ///    /        \
    ///  box1        box2
    ///  /  \
    /// a    b
    /// ```
    fn build_tree() -> (Arbre, NodeId, NodeId, NodeId, NodeId) {
        let mut arbre = Arbre::default();
        let box1 = arbre.allocate("box1", None, true).unwrap();
        arbre.insert(box1, PREVIEW_AREA).unwrap();
        let box2 = arbre.allocate("box2", None, true).unwrap();
        arbre.insert(box2, PREVIEW_AREA).unwrap();
        let a = arbre.allocate("a", None, false).unwrap();
        arbre.insert(a, "box1").unwrap();
        let b = arbre.allocate("b", None, false).unwrap();
        arbre.insert(b, "box1").unwrap();
        (arbre, box1, box2, a, b)
    }

    fn names(arbre: &Arbre, ids: impl Iterator<Item = NodeId>) -> Vec<String> {
        ids.map(|id| arbre.get(id).unwrap().name.clone()).collect()
    }

    #[test]
    fn preview_root_is_container() {
        let arbre = Arbre::default();
        let root = arbre.root().unwrap();
        let node = arbre.get(root).unwrap();
        assert_eq!(node.name, PREVIEW_AREA);
        assert!(node.is_container);
        assert_eq!(arbre.len(), 1);
    }

    #[test]
    fn allocate_is_detached() {
        let mut arbre = Arbre::default();
        let id = arbre.allocate("x", None, false).unwrap();
        assert!(arbre.contains(id));
        assert!(!arbre.is_attached(id));
        assert_eq!(arbre.parent(id), None);
    }

    #[test]
    fn allocate_past_limit_fails() {
        let mut arbre = Arbre::with_preview_root(ArbreLimits::new().with_max_nodes(2));
        arbre.allocate("one", None, false).unwrap();
        let err = arbre.allocate("two", None, false).unwrap_err();
        assert_eq!(err, ArbreError::Allocation { capacity: 2 });
    }

    #[test]
    fn insert_appends_as_last_child() {
        let (arbre, box1, box2, a, b) = build_tree();
        let root = arbre.root().unwrap();
        assert_eq!(arbre.children(root).collect::<Vec<_>>(), vec![box1, box2]);
        assert_eq!(arbre.children(box1).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(arbre.first_child(box1), Some(a));
        assert_eq!(arbre.next_sibling(a), Some(b));
        assert_eq!(arbre.next_sibling(b), None);
        assert_eq!(arbre.parent(b), Some(box1));
    }

    #[test]
    fn insert_returns_parent() {
        let mut arbre = Arbre::default();
        let id = arbre.allocate("x", None, false).unwrap();
        assert_eq!(arbre.insert(id, PREVIEW_AREA), Ok(arbre.root().unwrap()));
    }

    #[test]
    fn insert_under_missing_parent_leaves_node_detached() {
        let mut arbre = Arbre::default();
        let id = arbre.allocate("x", None, false).unwrap();
        let err = arbre.insert(id, "nowhere").unwrap_err();
        assert_eq!(err, ArbreError::ParentNotFound("nowhere".into()));
        assert!(arbre.contains(id));
        assert!(!arbre.is_attached(id));
        assert_eq!(arbre.discard(id).unwrap().name, "x");
        assert!(!arbre.contains(id));
    }

    #[test]
    fn insert_skips_non_container_with_matching_name() {
        let mut arbre = Arbre::default();
        let leaf = arbre.allocate("target", None, false).unwrap();
        arbre.insert(leaf, PREVIEW_AREA).unwrap();
        let x = arbre.allocate("x", None, false).unwrap();
        assert_eq!(
            arbre.insert(x, "target"),
            Err(ArbreError::ParentNotFound("target".into()))
        );

        let container = arbre.allocate("target", None, true).unwrap();
        arbre.insert(container, PREVIEW_AREA).unwrap();
        assert_eq!(arbre.insert(x, "target"), Ok(container));
    }

    #[test]
    fn insert_twice_is_rejected() {
        let (mut arbre, _box1, _box2, a, _b) = build_tree();
        assert_eq!(arbre.insert(a, "box2"), Err(ArbreError::Attached));
    }

    #[test]
    fn insert_or_sentinel_falls_back() {
        let mut arbre = Arbre::default();
        let id = arbre.allocate("x", None, false).unwrap();
        let parent = arbre.insert_or_sentinel(id, "missing").unwrap();
        assert_eq!(Some(parent), arbre.root());
    }

    #[test]
    fn insert_or_sentinel_without_sentinel_fails() {
        let mut arbre = Arbre::new(ArbreLimits::default());
        let id = arbre.allocate("x", None, false).unwrap();
        assert_eq!(
            arbre.insert_or_sentinel(id, "missing"),
            Err(ArbreError::ParentNotFound(PREVIEW_AREA.into()))
        );
    }

    #[test]
    fn discard_attached_is_rejected() {
        let (mut arbre, box1, ..) = build_tree();
        assert_eq!(arbre.discard(box1).unwrap_err(), ArbreError::Attached);
    }

    #[test]
    fn set_root_on_empty_tree() {
        let mut arbre = Arbre::new(ArbreLimits::default());
        let id = arbre.allocate("top", None, true).unwrap();
        arbre.set_root(id).unwrap();
        assert_eq!(arbre.root(), Some(id));
        let other = arbre.allocate("other", None, true).unwrap();
        assert_eq!(arbre.set_root(other), Err(ArbreError::Attached));
    }

    #[test]
    fn remove_first_child_promotes_sibling() {
        let (mut arbre, box1, _box2, a, b) = build_tree();
        let removed = arbre.remove(a).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(arbre.first_child(box1), Some(b));
        assert_eq!(arbre.children(box1).collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn remove_middle_child_splices_chain() {
        let (mut arbre, box1, _box2, a, b) = build_tree();
        let c = arbre.allocate("c", None, false).unwrap();
        arbre.insert(c, "box1").unwrap();
        arbre.remove(b).unwrap();
        assert_eq!(arbre.children(box1).collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn remove_last_child_clears_link() {
        let (mut arbre, box1, _box2, a, b) = build_tree();
        arbre.remove(b).unwrap();
        assert_eq!(arbre.next_sibling(a), None);
        let c = arbre.allocate("c", None, false).unwrap();
        arbre.insert(c, "box1").unwrap();
        assert_eq!(arbre.children(box1).collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn remove_container_frees_children_keeps_siblings() {
        let (mut arbre, box1, box2, a, b) = build_tree();
        let root = arbre.root().unwrap();
        arbre.remove(box1).unwrap();
        assert!(!arbre.contains(a));
        assert!(!arbre.contains(b));
        assert!(arbre.contains(box2));
        assert_eq!(arbre.children(root).collect::<Vec<_>>(), vec![box2]);
        assert_eq!(arbre.len(), 2);
    }

    #[test]
    fn remove_root_empties_tree() {
        let (mut arbre, ..) = build_tree();
        let root = arbre.root().unwrap();
        arbre.remove(root).unwrap();
        assert!(arbre.is_empty());
        assert_eq!(arbre.root(), None);
    }

    #[test]
    fn remove_stale_is_none() {
        let (mut arbre, _box1, _box2, a, _b) = build_tree();
        arbre.remove(a).unwrap();
        assert!(arbre.remove(a).is_none());
    }

    #[test]
    fn remove_by_name_uses_first_match() {
        let (mut arbre, box1, box2, ..) = build_tree();
        let dup = arbre.allocate("a", None, false).unwrap();
        arbre.insert(dup, "box2").unwrap();
        let removed = arbre.remove_by_name("a").unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(names(&arbre, arbre.children(box1)), vec!["b"]);
        assert_eq!(arbre.children(box2).collect::<Vec<_>>(), vec![dup]);
        assert!(arbre.remove_by_name("zzz").is_none());
    }

    #[test]
    fn depth_counts_ancestors() {
        let (arbre, box1, _box2, a, _b) = build_tree();
        assert_eq!(arbre.depth(arbre.root().unwrap()), 0);
        assert_eq!(arbre.depth(box1), 1);
        assert_eq!(arbre.depth(a), 2);
    }

    #[test]
    fn node_data_setters() {
        let (mut arbre, _box1, _box2, a, _b) = build_tree();
        arbre.set_property(a, "visible", "1").unwrap();
        arbre.set_style_property(a, "color", "red").unwrap();
        let node = arbre.get(a).unwrap();
        assert_eq!(node.properties.get("visible"), Some("1"));
        assert_eq!(node.style_properties.get("color"), Some("red"));
    }

    #[test]
    fn style_overflow_surfaces_as_property_error() {
        let mut arbre = Arbre::with_preview_root(ArbreLimits::new().with_max_style_properties(1));
        let id = arbre.allocate("x", None, false).unwrap();
        arbre.set_style_property(id, "color", "red").unwrap();
        let err = arbre.set_style_property(id, "font", "mono").unwrap_err();
        assert!(matches!(err, ArbreError::Property(_)));
    }

    #[test]
    fn setters_on_stale_node() {
        let (mut arbre, _box1, _box2, a, _b) = build_tree();
        arbre.remove(a);
        assert_eq!(arbre.set_property(a, "x", "1"), Err(ArbreError::StaleNode));
        assert_eq!(
            arbre.set_widget_data(a, WidgetData::Box),
            Err(ArbreError::StaleNode)
        );
    }
}
