//! AppState: the Arbre and the hierarchy view, mutated together.
//!
//! Every widget creation and destruction goes through [`AppState`], which
//! applies it to both trees so they never drift. The state is owned by the
//! UI thread and passed by reference; nothing here is shared.

use crate::arbre::node::truncate_name;
use crate::arbre::{Arbre, Node, NodeId, PREVIEW_AREA};
use crate::config::BuilderConfig;
use crate::data::WidgetData;
use crate::handle::WidgetHandle;
use crate::hierarchy::{HierarchyStore, Row};
use crate::markup::export_document;

use super::error::SyncError;
use super::host::WidgetHost;
use super::widget_spec::{widget_name, WidgetSpec};

/// What [`AppState::remove_widget`] took out of each tree.
#[derive(Debug, Clone)]
pub struct Removed {
    pub node: Option<Node>,
    pub row: Option<Row>,
}

/// The builder's live model.
pub struct AppState {
    /// The canonical widget tree.
    pub arbre: Arbre,
    /// The visualization tree shown to the user.
    pub hierarchy: HierarchyStore,
    pub config: BuilderConfig,
    root_canvas: WidgetHandle,
    /// Toolkit callbacks. `None` in headless mode.
    host: Option<Box<dyn WidgetHost>>,
    arbre_view: String,
}

impl AppState {
    /// Create a headless state whose preview canvas is `root_canvas`.
    ///
    /// The Arbre starts with the [`PREVIEW_AREA`] sentinel, which mirrors
    /// the canvas widget.
    pub fn new(root_canvas: WidgetHandle, config: BuilderConfig) -> Self {
        let mut arbre = Arbre::with_preview_root(config.limits.clone());
        if let Some(root) = arbre.root().and_then(|id| arbre.get_mut(id)) {
            root.handle = Some(root_canvas);
        }
        let arbre_view = arbre.dump();
        Self {
            arbre,
            hierarchy: HierarchyStore::new(),
            config,
            root_canvas,
            host: None,
            arbre_view,
        }
    }

    /// Attach toolkit callbacks (builder).
    pub fn with_host(mut self, host: Box<dyn WidgetHost>) -> Self {
        self.host = Some(host);
        self
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    pub fn root_canvas(&self) -> WidgetHandle {
        self.root_canvas
    }

    /// The last rendering of the Arbre debug view.
    pub fn arbre_view(&self) -> &str {
        &self.arbre_view
    }

    /// Register a newly created widget in both trees.
    ///
    /// The node is inserted under the Arbre node of `spec.parent`. When that
    /// parent is unknown or not a container, the node lands under the
    /// sentinel root instead (with a warning), and its hierarchy row goes to
    /// the top level to match.
    pub fn add_widget(&mut self, spec: WidgetSpec) -> Result<NodeId, SyncError> {
        if spec.handle == self.root_canvas {
            return Err(SyncError::RootCanvas(spec.handle));
        }
        let full_name = widget_name(&spec.label, spec.handle);
        let name = truncate_name(&full_name, self.arbre.limits().max_name_len).to_owned();
        if let Some(host) = self.host.as_mut() {
            host.set_widget_name(spec.handle, &name);
        }

        let parent_name = self.resolve_parent_name(spec.parent);
        let id = self
            .arbre
            .allocate(&name, Some(spec.handle), spec.is_container)?;
        if let Some(data) = spec.data {
            if let Err(err) = self.arbre.set_widget_data(id, data) {
                tracing::warn!(%err, node = %name, "widget properties truncated");
            }
        }

        let parent_id = match self.arbre.insert_or_sentinel(id, &parent_name) {
            Ok(parent_id) => parent_id,
            Err(err) => {
                let _ = self.arbre.discard(id);
                return Err(err.into());
            }
        };

        let parent_row = self
            .arbre
            .get(parent_id)
            .and_then(|parent| parent.handle)
            .and_then(|handle| self.hierarchy.find_row(handle));
        self.hierarchy.append(parent_row, name.as_str(), spec.handle);

        tracing::debug!(node = %name, parent = %parent_name, "widget added");
        self.refresh_views();
        Ok(id)
    }

    /// Remove a widget, and everything inside it, from both trees.
    ///
    /// The canvas itself cannot be removed: it is the sentinel root.
    pub fn remove_widget(&mut self, handle: WidgetHandle) -> Result<Removed, SyncError> {
        if handle == self.root_canvas {
            tracing::warn!(%handle, "refusing to remove the preview canvas");
            return Err(SyncError::RootCanvas(handle));
        }
        let row = self.hierarchy.find_row(handle);
        let node = self.arbre.find_by_handle(handle);
        if row.is_none() && node.is_none() {
            tracing::warn!(%handle, "remove requested for an untracked widget");
            return Err(SyncError::UnknownWidget(handle));
        }

        let removed = Removed {
            row: row.and_then(|r| self.hierarchy.remove(r)),
            node: node.and_then(|n| self.arbre.remove(n)),
        };
        tracing::debug!(%handle, "widget removed");
        self.refresh_views();
        Ok(removed)
    }

    /// Replace a widget's data record after a property edit and repopulate.
    ///
    /// The record must keep the widget's kind. A widget created without a
    /// record may be given one of any kind.
    pub fn update_widget(
        &mut self,
        handle: WidgetHandle,
        data: WidgetData,
    ) -> Result<usize, SyncError> {
        if handle == self.root_canvas {
            return Err(SyncError::RootCanvas(handle));
        }
        let id = self
            .arbre
            .find_by_handle(handle)
            .ok_or(SyncError::UnknownWidget(handle))?;
        if let Some(current) = self.arbre.get(id).and_then(|node| node.data()) {
            let (from, to) = (current.widget_type(), data.widget_type());
            if from != to {
                return Err(SyncError::KindChanged { handle, from, to });
            }
        }
        let written = self.arbre.set_widget_data(id, data)?;
        self.refresh_views();
        Ok(written)
    }

    /// Widget handle of the container named `name`, for use as a parent.
    pub fn container_handle(&self, name: &str) -> Option<WidgetHandle> {
        self.arbre
            .find_container(name)
            .and_then(|id| self.arbre.get(id))
            .and_then(|node| node.handle)
    }

    /// Names of containers a new widget can be placed in.
    pub fn container_names(&self) -> Vec<String> {
        self.arbre.list_container_names()
    }

    /// The full markup document for the current tree.
    pub fn export(&self) -> String {
        export_document(&self.arbre, &self.config.window, &self.config.export)
    }

    /// Whether both trees describe the same widgets under the same parents.
    ///
    /// Each attached non-root node must have exactly one row with its
    /// handle, and that row's parent must mirror the node's parent (a
    /// top-level row mirrors a node directly under the sentinel).
    pub fn is_consistent(&self) -> bool {
        let root = self.arbre.root();
        let mut nodes = 0usize;
        for id in self.arbre.iter_pre_order() {
            if Some(id) == root {
                continue;
            }
            nodes += 1;
            let Some(handle) = self.arbre.get(id).and_then(|n| n.handle) else {
                return false;
            };
            let Some(row) = self.hierarchy.find_row(handle) else {
                return false;
            };
            let node_parent = self.arbre.parent(id).filter(|&p| Some(p) != root);
            let expected = node_parent.and_then(|p| self.arbre.get(p)).and_then(|p| p.handle);
            let actual = self
                .hierarchy
                .parent(row)
                .and_then(|r| self.hierarchy.get(r))
                .map(|r| r.handle);
            if expected != actual {
                return false;
            }
        }
        nodes == self.hierarchy.len()
    }

    fn resolve_parent_name(&self, parent: Option<WidgetHandle>) -> String {
        let Some(parent) = parent.filter(|&p| p != self.root_canvas) else {
            return PREVIEW_AREA.to_owned();
        };
        match self.arbre.find_name_by_widget_handle(parent) {
            Some(name) => name.to_owned(),
            None => {
                tracing::warn!(%parent, "parent widget is not in the arbre, using {PREVIEW_AREA}");
                PREVIEW_AREA.to_owned()
            }
        }
    }

    /// Rebuild the Arbre debug view and re-expand the hierarchy.
    fn refresh_views(&mut self) {
        self.arbre_view = self.arbre.dump();
        self.hierarchy.expand_all();
        if let Some(host) = self.host.as_mut() {
            host.show_arbre(&self.arbre_view);
            host.hierarchy_changed(&self.hierarchy);
        }
    }
}
