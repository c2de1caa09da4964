//! The visualization tree: the hierarchy view kept in lockstep with the Arbre.

pub mod render;
pub mod store;

pub use render::Guides;
pub use store::{HierarchyStore, Row, RowId};
