//! The closed set of widget kinds and their markup names.

use std::fmt;

/// Widget-type tag carried by every Arbre node.
///
/// Several tags share a markup name (`ButtonNormal` and `Button` both write
/// `button`; `ButtonCheckbox` and `Checkbox` both write `checkbox`), so the
/// name → tag direction is lossy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetType {
    #[default]
    Unknown,
    Window,
    Box,
    Fixed,
    Grid,
    Frame,
    ScrolledWindow,
    Label,
    Button,
    ButtonNormal,
    ButtonCheckbox,
    ButtonRadio,
    ButtonToggle,
    ButtonSwitch,
    ButtonSpin,
    EntryBasic,
    EntryPassword,
    ComboBox,
    Scale,
    Checkbox,
    Radio,
    Switch,
    Spinner,
    ProgressBar,
    RadioList,
    Image,
    Menu,
}

impl WidgetType {
    /// Every tag, in declaration order. Name lookups scan this order, so the
    /// first tag producing a name is the one parsed back.
    pub const ALL: [WidgetType; 27] = [
        Self::Unknown,
        Self::Window,
        Self::Box,
        Self::Fixed,
        Self::Grid,
        Self::Frame,
        Self::ScrolledWindow,
        Self::Label,
        Self::Button,
        Self::ButtonNormal,
        Self::ButtonCheckbox,
        Self::ButtonRadio,
        Self::ButtonToggle,
        Self::ButtonSwitch,
        Self::ButtonSpin,
        Self::EntryBasic,
        Self::EntryPassword,
        Self::ComboBox,
        Self::Scale,
        Self::Checkbox,
        Self::Radio,
        Self::Switch,
        Self::Spinner,
        Self::ProgressBar,
        Self::RadioList,
        Self::Image,
        Self::Menu,
    ];

    /// Markup tag name, also used in debug output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Window => "window",
            Self::Box => "box",
            Self::Fixed => "fixed",
            Self::Grid => "grid",
            Self::Frame => "frame",
            Self::ScrolledWindow => "scrolledwindow",
            Self::Label => "label",
            Self::Button | Self::ButtonNormal => "button",
            Self::ButtonCheckbox | Self::Checkbox => "checkbox",
            Self::ButtonRadio | Self::Radio => "radio",
            Self::ButtonToggle => "togglebutton",
            Self::ButtonSwitch | Self::Switch => "switch",
            Self::ButtonSpin => "spinbutton",
            Self::EntryBasic => "entry",
            Self::EntryPassword => "password",
            Self::ComboBox => "combobox",
            Self::Scale => "scale",
            Self::Spinner => "spinner",
            Self::ProgressBar => "progressbar",
            Self::RadioList => "radiolist",
            Self::Image => "image",
            Self::Menu => "menu",
        }
    }

    /// Parse a markup name back into a tag. Unmapped names yield
    /// [`WidgetType::Unknown`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == name)
            .unwrap_or(Self::Unknown)
    }

    /// Whether widgets of this kind normally hold children.
    pub const fn is_container_kind(&self) -> bool {
        matches!(
            self,
            Self::Window
                | Self::Box
                | Self::Fixed
                | Self::Grid
                | Self::Frame
                | Self::ScrolledWindow
        )
    }

    /// Tag used for style lines in exported markup.
    pub const fn style_tag(&self) -> &'static str {
        match self {
            Self::Label => "labelstyle",
            Self::ButtonCheckbox | Self::Checkbox => "checkboxstyle",
            Self::Button
            | Self::ButtonNormal
            | Self::ButtonRadio
            | Self::ButtonToggle
            | Self::ButtonSwitch
            | Self::ButtonSpin => "buttonstyle",
            _ => "style",
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
