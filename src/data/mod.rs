//! Widget-data records and the property populator.

pub mod populate;
pub mod records;

pub use populate::{populate, populated_fields};
pub use records::{
    ButtonData, ComboData, EntryData, ImageData, LabelData, MenuData, PasswordData, Placement,
    RadioData, RadioListData, RangeData, SpinData, SpinnerData, ToggleData, WidgetData,
};
