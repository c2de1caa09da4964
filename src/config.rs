//! Configuration: store limits, export formatting, window preamble.
//!
//! All configuration is plain data with `Default` and `with_*` builders.

use std::fmt;

// ---------------------------------------------------------------------------
// ArbreLimits
// ---------------------------------------------------------------------------

/// Capacity bounds for the Arbre and its per-node lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbreLimits {
    /// Maximum number of live nodes. Allocation past this fails.
    pub max_nodes: usize,
    /// Capacity of each node's generic property list.
    pub max_properties: usize,
    /// Capacity of each node's style property list.
    pub max_style_properties: usize,
    /// Maximum number of names returned by a container listing.
    pub max_containers: usize,
    /// Node names longer than this (in bytes) are truncated.
    pub max_name_len: usize,
}

impl Default for ArbreLimits {
    fn default() -> Self {
        Self {
            max_nodes: 4096,
            max_properties: 20,
            max_style_properties: 10,
            max_containers: 100,
            max_name_len: 128,
        }
    }
}

impl ArbreLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_max_properties(mut self, max_properties: usize) -> Self {
        self.max_properties = max_properties;
        self
    }

    pub fn with_max_style_properties(mut self, max_style_properties: usize) -> Self {
        self.max_style_properties = max_style_properties;
        self
    }

    pub fn with_max_containers(mut self, max_containers: usize) -> Self {
        self.max_containers = max_containers;
        self
    }

    pub fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }
}

// ---------------------------------------------------------------------------
// ExportConfig
// ---------------------------------------------------------------------------

/// Formatting options for the markup serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Text written once per indent level.
    pub indent_unit: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            indent_unit: " ".to_owned(),
        }
    }
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }
}

// ---------------------------------------------------------------------------
// WindowConfig
// ---------------------------------------------------------------------------

/// Initial placement policy of the exported window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPosition {
    None,
    #[default]
    Center,
    Mouse,
    CenterAlways,
}

impl WindowPosition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Center => "center",
            Self::Mouse => "mouse",
            Self::CenterAlways => "center-always",
        }
    }
}

impl fmt::Display for WindowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level window settings written before the widget tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub border: u32,
    pub position: WindowPosition,
    pub x: i32,
    pub y: i32,
    pub bg_color: Option<String>,
    pub icon: Option<String>,
    pub header_bar: bool,
    pub bg_image: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: 800,
            height: 600,
            resizable: true,
            border: 0,
            position: WindowPosition::Center,
            x: 0,
            y: 0,
            bg_color: None,
            icon: None,
            header_bar: false,
            bg_image: None,
        }
    }
}

impl WindowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Set the placement policy and the explicit origin.
    pub fn with_position(mut self, position: WindowPosition, x: i32, y: i32) -> Self {
        self.position = position;
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = Some(color.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_header_bar(mut self, header_bar: bool) -> Self {
        self.header_bar = header_bar;
        self
    }

    pub fn with_bg_image(mut self, path: impl Into<String>) -> Self {
        self.bg_image = Some(path.into());
        self
    }
}

// ---------------------------------------------------------------------------
// BuilderConfig
// ---------------------------------------------------------------------------

/// Everything an [`AppState`](crate::sync::AppState) is configured with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    pub limits: ArbreLimits,
    pub export: ExportConfig,
    pub window: WindowConfig,
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: ArbreLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }

    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }
}
