//! What a widget factory hands the synchronizer for each new widget.

use crate::catalog::{classify, WidgetType};
use crate::data::WidgetData;
use crate::handle::WidgetHandle;

/// Description of a freshly created toolkit widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSpec {
    pub handle: WidgetHandle,
    /// Display label; prefixes the generated node name.
    pub label: String,
    /// Widget the new one was placed in. `None` means the preview canvas.
    pub parent: Option<WidgetHandle>,
    pub is_container: bool,
    pub data: Option<WidgetData>,
}

impl WidgetSpec {
    /// A widget with an explicit data record. Container-ness defaults to
    /// what the record's kind normally is.
    pub fn new(handle: WidgetHandle, label: impl Into<String>, data: WidgetData) -> Self {
        Self {
            handle,
            label: label.into(),
            parent: None,
            is_container: data.widget_type().is_container_kind(),
            data: Some(data),
        }
    }

    /// A widget known only by its display label. The kind is classified
    /// from the label and given a default record; unrecognised labels get
    /// no record at all.
    pub fn from_label(handle: WidgetHandle, label: impl Into<String>) -> Self {
        let label = label.into();
        let kind = classify(&label);
        if kind == WidgetType::Unknown {
            tracing::debug!(label = %label, "label names no known widget type");
        }
        Self {
            handle,
            label,
            parent: None,
            is_container: kind.is_container_kind(),
            data: WidgetData::default_for(kind),
        }
    }

    /// Set the parent widget (builder).
    pub fn parent(mut self, parent: WidgetHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Override whether the widget accepts children (builder).
    pub fn container(mut self, is_container: bool) -> Self {
        self.is_container = is_container;
        self
    }

    pub fn widget_type(&self) -> WidgetType {
        self.data
            .as_ref()
            .map_or(WidgetType::Unknown, WidgetData::widget_type)
    }
}

/// Node name for a widget: `"{label}_{handle}"`.
pub fn widget_name(label: &str, handle: WidgetHandle) -> String {
    format!("{label}_{handle}")
}
