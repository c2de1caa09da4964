//! The Arbre: slotmap-backed first-child/next-sibling widget tree.

pub mod dump;
pub mod error;
pub mod node;
pub mod query;
pub mod tree;

pub use error::ArbreError;
pub use node::{Node, NodeId};
pub use query::PreOrder;
pub use tree::{Arbre, Children, PREVIEW_AREA};
