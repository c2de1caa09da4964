//! Widget-type catalog: the closed tag enumeration and label classification.

pub mod label;
pub mod widget_type;

pub use label::classify;
pub use widget_type::WidgetType;
