//! The toolkit side of synchronization.

use crate::handle::WidgetHandle;
use crate::hierarchy::HierarchyStore;

/// Callbacks into the GUI layer that owns the real widgets.
///
/// Only [`set_widget_name`](Self::set_widget_name) is required; the view
/// refresh hooks default to no-ops for hosts without debug panes.
pub trait WidgetHost {
    /// Give the toolkit widget its builder name, so later lookups by the
    /// externally visible name succeed.
    fn set_widget_name(&mut self, handle: WidgetHandle, name: &str);

    /// Replace the auxiliary Arbre view with a fresh rendering.
    fn show_arbre(&mut self, _dump: &str) {}

    /// The hierarchy model changed and has been fully expanded.
    fn hierarchy_changed(&mut self, _store: &HierarchyStore) {}
}
