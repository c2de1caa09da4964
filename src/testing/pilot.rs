//! Pilot: drive a headless [`AppState`] the way a toolkit front end would.
//!
//! The `Pilot` hands out fresh widget handles, wires a [`RecordingHost`] in,
//! and offers one-call helpers for placing widgets on the canvas or inside
//! containers.

use crate::config::BuilderConfig;
use crate::data::WidgetData;
use crate::handle::WidgetHandle;
use crate::sync::{AppState, Removed, SyncError, WidgetSpec};

use super::host::RecordingHost;

/// Raw value of the canvas handle every pilot starts with.
pub const CANVAS_RAW: u64 = 0x5000;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless builder driver for testing.
///
/// # Examples
///
/// ```
/// use arbre_forge::data::WidgetData;
/// use arbre_forge::testing::Pilot;
///
/// let mut pilot = Pilot::new();
/// let sidebar = pilot.place("Box", WidgetData::Box).unwrap();
/// pilot.place_in(sidebar, "Label", WidgetData::Label(Default::default())).unwrap();
/// assert!(pilot.state().is_consistent());
/// ```
pub struct Pilot {
    state: AppState,
    host: RecordingHost,
    next_raw: u64,
}

impl Pilot {
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        let host = RecordingHost::new();
        let state = AppState::new(WidgetHandle::from_raw(CANVAS_RAW), config)
            .with_host(Box::new(host.clone()));
        Self {
            state,
            host,
            next_raw: CANVAS_RAW,
        }
    }

    /// A handle no widget in this pilot has used yet.
    pub fn fresh_handle(&mut self) -> WidgetHandle {
        self.next_raw += 0x10;
        WidgetHandle::from_raw(self.next_raw)
    }

    pub fn canvas(&self) -> WidgetHandle {
        self.state.root_canvas()
    }

    // ── Widget creation ──────────────────────────────────────────────

    /// Create a widget directly on the canvas.
    pub fn place(&mut self, label: &str, data: WidgetData) -> Result<WidgetHandle, SyncError> {
        let handle = self.fresh_handle();
        self.add(WidgetSpec::new(handle, label, data))
    }

    /// Create a widget inside `parent`.
    pub fn place_in(
        &mut self,
        parent: WidgetHandle,
        label: &str,
        data: WidgetData,
    ) -> Result<WidgetHandle, SyncError> {
        let handle = self.fresh_handle();
        self.add(WidgetSpec::new(handle, label, data).parent(parent))
    }

    /// Create a widget known only by its palette label.
    pub fn place_label(
        &mut self,
        parent: Option<WidgetHandle>,
        label: &str,
    ) -> Result<WidgetHandle, SyncError> {
        let handle = self.fresh_handle();
        let mut spec = WidgetSpec::from_label(handle, label);
        spec.parent = parent;
        self.add(spec)
    }

    /// Submit a prepared spec.
    pub fn add(&mut self, spec: WidgetSpec) -> Result<WidgetHandle, SyncError> {
        let handle = spec.handle;
        self.state.add_widget(spec)?;
        Ok(handle)
    }

    pub fn remove(&mut self, handle: WidgetHandle) -> Result<Removed, SyncError> {
        self.state.remove_widget(handle)
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    /// Full markup document for the current tree.
    pub fn export(&self) -> String {
        self.state.export()
    }

    /// Node name the builder gave `handle`.
    pub fn name_of(&self, handle: WidgetHandle) -> Option<&str> {
        self.state.arbre.find_name_by_widget_handle(handle)
    }
}

impl Default for Pilot {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
