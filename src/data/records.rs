//! Typed widget-data records, one variant per widget kind.
//!
//! A node's tag is derived from its record, so the two can never disagree.

use crate::catalog::WidgetType;

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// Position and size of a widget on the preview canvas, in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Placement {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Plain push button.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonData {
    pub placement: Placement,
    pub label: String,
    pub tooltip: Option<String>,
}

impl ButtonData {
    pub fn new(placement: Placement, label: impl Into<String>) -> Self {
        Self {
            placement,
            label: label.into(),
            tooltip: None,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// A button with an on/off state: checkbox, toggle, switch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToggleData {
    pub button: ButtonData,
    pub active: bool,
}

impl ToggleData {
    pub fn new(button: ButtonData, active: bool) -> Self {
        Self { button, active }
    }
}

/// A radio button, optionally joined to a named group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RadioData {
    pub button: ButtonData,
    pub active: bool,
    pub group: Option<String>,
}

/// Numeric spin control.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinData {
    pub placement: Placement,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub digits: u32,
    pub value: f64,
}

impl Default for SpinData {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            min: 0.0,
            max: 100.0,
            step: 1.0,
            digits: 0,
            value: 0.0,
        }
    }
}

/// Single-line text entry.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryData {
    pub placement: Placement,
    pub editable: bool,
    pub visible: bool,
    pub placeholder: Option<String>,
    /// Zero means unlimited.
    pub max_length: u32,
    pub default_text: Option<String>,
}

impl Default for EntryData {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            editable: true,
            visible: true,
            placeholder: None,
            max_length: 0,
            default_text: None,
        }
    }
}

/// Entry whose text is hidden behind a mask character.
#[derive(Clone, Debug, PartialEq)]
pub struct PasswordData {
    pub entry: EntryData,
    pub mask_char: char,
}

impl Default for PasswordData {
    fn default() -> Self {
        Self {
            entry: EntryData::default(),
            mask_char: '*',
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelData {
    pub placement: Placement,
    pub text: String,
}

/// Group of mutually exclusive options shown as one widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RadioListData {
    pub placement: Placement,
    pub items: Vec<String>,
    pub selected: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageData {
    pub placement: Placement,
    pub path: Option<String>,
}

/// Drop-down choice list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComboData {
    pub items: Vec<String>,
    pub active: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuData {
    pub items: Vec<String>,
}

/// Bounded value: scale and progress bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeData {
    pub placement: Placement,
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpinnerData {
    pub placement: Placement,
    pub active: bool,
}

// ---------------------------------------------------------------------------
// WidgetData
// ---------------------------------------------------------------------------

/// The configuration record of one widget, tagged by kind.
///
/// Container kinds carry no record of their own; anything they need in the
/// export goes through the node's generic property list.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetData {
    Window,
    Box,
    Fixed,
    Grid,
    Frame,
    ScrolledWindow,
    Label(LabelData),
    Button(ButtonData),
    CheckButton(ToggleData),
    RadioButton(RadioData),
    ToggleButton(ToggleData),
    SwitchButton(ToggleData),
    SpinButton(SpinData),
    Entry(EntryData),
    PasswordEntry(PasswordData),
    ComboBox(ComboData),
    Scale(RangeData),
    Checkbox(ToggleData),
    Radio(RadioData),
    Switch(ToggleData),
    Spinner(SpinnerData),
    ProgressBar(RangeData),
    RadioList(RadioListData),
    Image(ImageData),
    Menu(MenuData),
}

impl WidgetData {
    /// The catalog tag this record belongs to.
    pub fn widget_type(&self) -> WidgetType {
        match self {
            Self::Window => WidgetType::Window,
            Self::Box => WidgetType::Box,
            Self::Fixed => WidgetType::Fixed,
            Self::Grid => WidgetType::Grid,
            Self::Frame => WidgetType::Frame,
            Self::ScrolledWindow => WidgetType::ScrolledWindow,
            Self::Label(_) => WidgetType::Label,
            Self::Button(_) => WidgetType::ButtonNormal,
            Self::CheckButton(_) => WidgetType::ButtonCheckbox,
            Self::RadioButton(_) => WidgetType::ButtonRadio,
            Self::ToggleButton(_) => WidgetType::ButtonToggle,
            Self::SwitchButton(_) => WidgetType::ButtonSwitch,
            Self::SpinButton(_) => WidgetType::ButtonSpin,
            Self::Entry(_) => WidgetType::EntryBasic,
            Self::PasswordEntry(_) => WidgetType::EntryPassword,
            Self::ComboBox(_) => WidgetType::ComboBox,
            Self::Scale(_) => WidgetType::Scale,
            Self::Checkbox(_) => WidgetType::Checkbox,
            Self::Radio(_) => WidgetType::Radio,
            Self::Switch(_) => WidgetType::Switch,
            Self::Spinner(_) => WidgetType::Spinner,
            Self::ProgressBar(_) => WidgetType::ProgressBar,
            Self::RadioList(_) => WidgetType::RadioList,
            Self::Image(_) => WidgetType::Image,
            Self::Menu(_) => WidgetType::Menu,
        }
    }

    /// A default record for `kind`, used when a factory supplies only a type
    /// label. `None` for [`WidgetType::Unknown`].
    pub fn default_for(kind: WidgetType) -> Option<Self> {
        let data = match kind {
            WidgetType::Unknown => return None,
            WidgetType::Window => Self::Window,
            WidgetType::Box => Self::Box,
            WidgetType::Fixed => Self::Fixed,
            WidgetType::Grid => Self::Grid,
            WidgetType::Frame => Self::Frame,
            WidgetType::ScrolledWindow => Self::ScrolledWindow,
            WidgetType::Label => Self::Label(LabelData::default()),
            WidgetType::Button | WidgetType::ButtonNormal => Self::Button(ButtonData::default()),
            WidgetType::ButtonCheckbox => Self::CheckButton(ToggleData::default()),
            WidgetType::ButtonRadio => Self::RadioButton(RadioData::default()),
            WidgetType::ButtonToggle => Self::ToggleButton(ToggleData::default()),
            WidgetType::ButtonSwitch => Self::SwitchButton(ToggleData::default()),
            WidgetType::ButtonSpin => Self::SpinButton(SpinData::default()),
            WidgetType::EntryBasic => Self::Entry(EntryData::default()),
            WidgetType::EntryPassword => Self::PasswordEntry(PasswordData::default()),
            WidgetType::ComboBox => Self::ComboBox(ComboData::default()),
            WidgetType::Scale => Self::Scale(RangeData::default()),
            WidgetType::Checkbox => Self::Checkbox(ToggleData::default()),
            WidgetType::Radio => Self::Radio(RadioData::default()),
            WidgetType::Switch => Self::Switch(ToggleData::default()),
            WidgetType::Spinner => Self::Spinner(SpinnerData::default()),
            WidgetType::ProgressBar => Self::ProgressBar(RangeData::default()),
            WidgetType::RadioList => Self::RadioList(RadioListData::default()),
            WidgetType::Image => Self::Image(ImageData::default()),
            WidgetType::Menu => Self::Menu(MenuData::default()),
        };
        Some(data)
    }

    /// The canvas placement, for kinds that have one.
    pub fn placement(&self) -> Option<Placement> {
        match self {
            Self::Label(d) => Some(d.placement),
            Self::Button(d) => Some(d.placement),
            Self::CheckButton(d)
            | Self::ToggleButton(d)
            | Self::SwitchButton(d)
            | Self::Checkbox(d)
            | Self::Switch(d) => Some(d.button.placement),
            Self::RadioButton(d) | Self::Radio(d) => Some(d.button.placement),
            Self::SpinButton(d) => Some(d.placement),
            Self::Entry(d) => Some(d.placement),
            Self::PasswordEntry(d) => Some(d.entry.placement),
            Self::Scale(d) | Self::ProgressBar(d) => Some(d.placement),
            Self::Spinner(d) => Some(d.placement),
            Self::RadioList(d) => Some(d.placement),
            Self::Image(d) => Some(d.placement),
            _ => None,
        }
    }
}
