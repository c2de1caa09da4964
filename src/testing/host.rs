//! A [`WidgetHost`] that records every callback instead of touching a toolkit.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::handle::WidgetHandle;
use crate::hierarchy::{Guides, HierarchyStore};
use crate::sync::WidgetHost;

/// Everything a [`RecordingHost`] has been told so far.
#[derive(Debug, Clone, Default)]
pub struct HostLog {
    /// Names assigned to widgets, latest wins.
    pub names: HashMap<WidgetHandle, String>,
    /// Number of Arbre view refreshes.
    pub arbre_views: usize,
    pub last_arbre_view: String,
    /// Number of hierarchy refreshes.
    pub hierarchy_refreshes: usize,
    /// ASCII rendering of the hierarchy at the last refresh.
    pub last_hierarchy: String,
}

/// Recording host. Clones share one log, so a test can keep a clone after
/// handing the host to an [`AppState`](crate::sync::AppState).
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the log.
    pub fn log(&self) -> HostLog {
        self.log.borrow().clone()
    }

    /// Name the host was told for `handle`.
    pub fn name_of(&self, handle: WidgetHandle) -> Option<String> {
        self.log.borrow().names.get(&handle).cloned()
    }
}

impl WidgetHost for RecordingHost {
    fn set_widget_name(&mut self, handle: WidgetHandle, name: &str) {
        self.log.borrow_mut().names.insert(handle, name.to_owned());
    }

    fn show_arbre(&mut self, dump: &str) {
        let mut log = self.log.borrow_mut();
        log.arbre_views += 1;
        log.last_arbre_view = dump.to_owned();
    }

    fn hierarchy_changed(&mut self, store: &HierarchyStore) {
        let mut log = self.log.borrow_mut();
        log.hierarchy_refreshes += 1;
        log.last_hierarchy = store.render(Guides::Ascii);
    }
}
