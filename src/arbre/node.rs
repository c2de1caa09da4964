//! Node types: NodeId, Node.

use slotmap::new_key_type;

use crate::catalog::WidgetType;
use crate::config::ArbreLimits;
use crate::data::{populate, populated_fields, WidgetData};
use crate::handle::WidgetHandle;
use crate::property::{PropertyError, PropertyList};

new_key_type! {
    /// Unique identifier for an Arbre node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// One widget instance in the Arbre.
///
/// Structural links (first child, next sibling) live in the owning
/// [`Arbre`](super::Arbre), not here.
#[derive(Debug, Clone)]
pub struct Node {
    /// Lookup key for insertion and removal. Not required to be unique.
    pub name: String,
    /// The toolkit widget this node mirrors. `None` for nodes built directly
    /// (tests, the sentinel root).
    pub handle: Option<WidgetHandle>,
    /// Whether other nodes may be inserted under this one.
    pub is_container: bool,
    /// Generic properties (position, size, visibility...).
    pub properties: PropertyList,
    /// Presentation attributes (color, font, border...).
    pub style_properties: PropertyList,
    data: Option<WidgetData>,
}

impl Node {
    pub(crate) fn new(
        name: &str,
        handle: Option<WidgetHandle>,
        is_container: bool,
        limits: &ArbreLimits,
    ) -> Self {
        Self {
            name: truncate_name(name, limits.max_name_len).to_owned(),
            handle,
            is_container,
            properties: PropertyList::with_capacity(limits.max_properties),
            style_properties: PropertyList::with_capacity(limits.max_style_properties),
            data: None,
        }
    }

    /// The widget tag, derived from the data record. Nodes without a record
    /// are [`WidgetType::Unknown`].
    pub fn widget_type(&self) -> WidgetType {
        self.data
            .as_ref()
            .map_or(WidgetType::Unknown, WidgetData::widget_type)
    }

    pub fn data(&self) -> Option<&WidgetData> {
        self.data.as_ref()
    }

    /// Attach `data` and run the populator over it.
    ///
    /// Fields the previous record populated and the new one does not are
    /// removed first. The record is attached even when population overflows
    /// the property list; the error reports the first field that did not fit.
    pub fn set_data(&mut self, data: WidgetData) -> Result<usize, PropertyError> {
        if let Some(old) = self.data.take() {
            let kept = populated_fields(&data);
            for name in populated_fields(&old) {
                if !kept.contains(name) {
                    self.properties.remove(name);
                }
            }
        }
        let data = self.data.insert(data);
        populate(data, &mut self.properties)
    }

    /// Drop the data record. Populated properties stay.
    pub fn take_data(&mut self) -> Option<WidgetData> {
        self.data.take()
    }
}

/// Cut `name` to at most `max` bytes without splitting a character.
pub(crate) fn truncate_name(name: &str, max: usize) -> &str {
    if name.len() <= max {
        return name;
    }
    let mut end = max;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}
