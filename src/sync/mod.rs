//! Dual-tree synchronizer: the single entry point for widget creation and
//! removal.

pub mod error;
pub mod host;
pub mod state;
pub mod widget_spec;

pub use error::SyncError;
pub use host::WidgetHost;
pub use state::{AppState, Removed};
pub use widget_spec::{widget_name, WidgetSpec};
