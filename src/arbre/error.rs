//! Arbre errors.

use crate::property::PropertyError;

/// Errors from Arbre mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArbreError {
    #[error("arbre is full: cannot allocate more than {capacity} nodes")]
    Allocation { capacity: usize },
    #[error("no container named `{0}`")]
    ParentNotFound(String),
    #[error("node is not in the arbre")]
    StaleNode,
    #[error("node is already attached to the tree")]
    Attached,
    #[error(transparent)]
    Property(#[from] PropertyError),
}
