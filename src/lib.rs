//! # arbre-forge
//!
//! The model behind a visual GUI builder: an arena-backed widget tree (the
//! Arbre), a hierarchy view kept in step with it, and a serializer that turns
//! the tree into declarative interface markup.
//!
//! Every widget placed on the preview canvas is registered through
//! [`sync::AppState`], which inserts it into both trees at once. The Arbre is
//! the source of truth for export; the hierarchy is what the user browses.
//!
//! ## Core Systems
//!
//! - **[`arbre`]**: Slotmap-backed node arena: insertion by parent name, subtree removal, queries
//! - **[`hierarchy`]**: Parent/child row store with expansion state and a text renderer
//! - **[`sync`]**: Dual-tree synchronizer and the [`sync::WidgetHost`] seam to the toolkit
//! - **[`markup`]**: Indented markup writer and document export
//! - **[`catalog`]**: Widget tags and label classification
//! - **[`data`]**: Typed per-widget data records and the property populator
//! - **[`property`]**: Bounded name/value property lists
//! - **[`config`]**: Limits, export and window settings
//! - **[`testing`]**: Headless Pilot and recording host
//!
//! ## Example
//!
//! ```
//! use arbre_forge::config::BuilderConfig;
//! use arbre_forge::data::WidgetData;
//! use arbre_forge::handle::WidgetHandle;
//! use arbre_forge::sync::{AppState, WidgetSpec};
//!
//! let canvas = WidgetHandle::from_raw(0x1000);
//! let mut state = AppState::new(canvas, BuilderConfig::default());
//! state
//!     .add_widget(WidgetSpec::new(WidgetHandle::from_raw(0x1010), "Box", WidgetData::Box))
//!     .unwrap();
//! assert!(state.export().contains("<box>"));
//! ```

// Foundation
pub mod config;
pub mod handle;
pub mod property;

// Widget model
pub mod catalog;
pub mod data;

// Trees
pub mod arbre;
pub mod hierarchy;
pub mod sync;

// Output
pub mod markup;

// Test support
pub mod testing;
