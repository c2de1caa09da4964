//! Headless testing support: a Pilot and a recording host.
//!
//! Use the [`Pilot`] to drive an [`AppState`](crate::sync::AppState) without
//! a GUI toolkit. The [`RecordingHost`] captures the names and view refreshes
//! a real front end would receive.

pub mod host;
pub mod pilot;

pub use host::{HostLog, RecordingHost};
pub use pilot::Pilot;
