//! Markup serializer: Arbre → nested, indented tag document.

pub mod document;
pub mod serialize;
pub mod writer;

pub use document::{export_document, export_tree, TREE_LEVEL};
pub use serialize::serialize;
pub use writer::MarkupWriter;
