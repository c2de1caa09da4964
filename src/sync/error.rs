//! Synchronizer errors.

use crate::arbre::ArbreError;
use crate::catalog::WidgetType;
use crate::handle::WidgetHandle;

/// Errors from [`AppState`](super::AppState) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Arbre(#[from] ArbreError),
    #[error("widget {0} is not tracked")]
    UnknownWidget(WidgetHandle),
    #[error("widget {0} is the preview canvas")]
    RootCanvas(WidgetHandle),
    #[error("widget {handle} is a {from}, cannot take a {to} record")]
    KindChanged {
        handle: WidgetHandle,
        from: WidgetType,
        to: WidgetType,
    },
}
