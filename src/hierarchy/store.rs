//! Row store for the hierarchy view: true parent/children storage.

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::handle::WidgetHandle;

new_key_type! {
    /// Identifier of a row in the hierarchy view.
    pub struct RowId;
}

/// One visible row: a label and the widget it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub handle: WidgetHandle,
    pub expanded: bool,
}

/// The model behind the on-screen hierarchy view.
///
/// Unlike the Arbre this stores an explicit child list per row and any
/// number of top-level rows, which is the shape toolkit tree views bind to.
#[derive(Debug, Clone, Default)]
pub struct HierarchyStore {
    rows: SlotMap<RowId, Row>,
    children: SecondaryMap<RowId, Vec<RowId>>,
    parent: SecondaryMap<RowId, RowId>,
    top_level: Vec<RowId>,
}

impl HierarchyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row as the last child of `parent`, or as the last top-level
    /// row when `parent` is `None` or no longer exists.
    pub fn append(
        &mut self,
        parent: Option<RowId>,
        label: impl Into<String>,
        handle: WidgetHandle,
    ) -> RowId {
        let id = self.rows.insert(Row {
            label: label.into(),
            handle,
            expanded: false,
        });
        self.children.insert(id, Vec::new());

        match parent.filter(|p| self.rows.contains_key(*p)) {
            Some(p) => {
                self.parent.insert(id, p);
                if let Some(siblings) = self.children.get_mut(p) {
                    siblings.push(id);
                }
            }
            None => {
                if parent.is_some() {
                    tracing::warn!(%handle, "hierarchy parent row is gone, appending at top level");
                }
                self.top_level.push(id);
            }
        }
        id
    }

    /// First row (depth-first, top-level order) whose handle is `handle`.
    pub fn find_row(&self, handle: WidgetHandle) -> Option<RowId> {
        self.walk_depth_first()
            .into_iter()
            .find(|&id| self.rows.get(id).is_some_and(|row| row.handle == handle))
    }

    /// Remove a row and all rows below it.
    ///
    /// Returns the removed row, or `None` if it did not exist.
    pub fn remove(&mut self, id: RowId) -> Option<Row> {
        let doomed = self.walk_from(&[id]);
        let removed = self.rows.get(id).cloned()?;

        match self.parent.get(id).copied() {
            Some(p) => {
                if let Some(siblings) = self.children.get_mut(p) {
                    siblings.retain(|&child| child != id);
                }
            }
            None => self.top_level.retain(|&row| row != id),
        }
        for row in doomed {
            self.rows.remove(row);
            self.children.remove(row);
            self.parent.remove(row);
        }
        Some(removed)
    }

    /// Drop every row.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.children.clear();
        self.parent.clear();
        self.top_level.clear();
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.get(id)
    }

    pub fn parent(&self, id: RowId) -> Option<RowId> {
        self.parent.get(id).copied()
    }

    /// Child rows of `id`; empty if it has none or does not exist.
    pub fn children(&self, id: RowId) -> &[RowId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn top_level(&self) -> &[RowId] {
        &self.top_level
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.rows.contains_key(id)
    }

    pub fn set_expanded(&mut self, id: RowId, expanded: bool) {
        if let Some(row) = self.rows.get_mut(id) {
            row.expanded = expanded;
        }
    }

    pub fn is_expanded(&self, id: RowId) -> bool {
        self.rows.get(id).is_some_and(|row| row.expanded)
    }

    /// Expand every row.
    pub fn expand_all(&mut self) {
        for (_, row) in self.rows.iter_mut() {
            row.expanded = true;
        }
    }

    /// Pre-order traversal over all rows, top-level rows in order.
    pub fn walk_depth_first(&self) -> Vec<RowId> {
        self.walk_from(&self.top_level)
    }

    /// Pre-order traversal of the subtrees rooted at `starts`, in order.
    fn walk_from(&self, starts: &[RowId]) -> Vec<RowId> {
        let mut result = Vec::new();
        let mut stack: Vec<RowId> = starts.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            if !self.rows.contains_key(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        result
    }
}
