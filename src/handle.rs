//! Opaque identity of a toolkit widget.

use std::fmt;

/// Non-owning reference to a widget that lives in the GUI toolkit.
///
/// The core only compares handles for identity; it never dereferences them,
/// and a handle may outlive the widget it names. Hosts typically build one
/// from the widget's address or an object id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetHandle(u64);

impl WidgetHandle {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
