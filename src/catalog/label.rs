//! logos-based lexer for widget display labels.
//!
//! Widget factories that only know a display label ("Basic Entry",
//! "radioList", "Box:MyBox") go through [`classify`] to get a
//! [`WidgetType`]. Labels are split into case-insensitive keywords and
//! camel-case words, so compound labels resolve on whole tokens rather than
//! on substrings:
//!
//! - `radioList` lexes as one [`LabelToken::RadioList`] (longest match), never
//!   as `radio` followed by noise
//! - `CheckButton` beats `Check` + `Button` by length, and `Check Button`
//!   resolves through one-token lookahead to the same tag
//! - `MyBox` lexes as `My` + `Box` because words break on an upper-case letter

use logos::Logos;

use super::widget_type::WidgetType;

/// Token produced by the label lexer. Anything that is not an ASCII letter
/// separates tokens.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[^A-Za-z]+")]
pub enum LabelToken {
    // ── Compound keywords (longer matches) ───────────────────────────
    #[token("radiolist", ignore(case))]
    RadioList,
    #[token("checkbutton", ignore(case))]
    CheckButton,
    #[token("checkbox", ignore(case))]
    Checkbox,
    #[token("togglebutton", ignore(case))]
    ToggleButton,
    #[token("spinbutton", ignore(case))]
    SpinButton,
    #[token("spinner", ignore(case))]
    Spinner,
    #[token("scrolledwindow", ignore(case))]
    ScrolledWindow,
    #[token("combobox", ignore(case))]
    ComboBox,
    #[token("progressbar", ignore(case))]
    ProgressBar,
    #[token("menubar", ignore(case))]
    MenuBar,

    // ── Single keywords ──────────────────────────────────────────────
    #[token("radio", ignore(case))]
    Radio,
    #[token("list", ignore(case))]
    List,
    #[token("group", ignore(case))]
    Group,
    #[token("check", ignore(case))]
    Check,
    #[token("toggle", ignore(case))]
    Toggle,
    #[token("switch", ignore(case))]
    Switch,
    #[token("spin", ignore(case))]
    Spin,
    #[token("normal", ignore(case))]
    Normal,
    #[token("button", ignore(case))]
    Button,
    #[token("basic", ignore(case))]
    Basic,
    #[token("password", ignore(case))]
    Password,
    #[token("entry", ignore(case))]
    Entry,
    #[token("scrolled", ignore(case))]
    Scrolled,
    #[token("window", ignore(case))]
    Window,
    #[token("box", ignore(case))]
    Box,
    #[token("fixed", ignore(case))]
    Fixed,
    #[token("grid", ignore(case))]
    Grid,
    #[token("frame", ignore(case))]
    Frame,
    #[token("label", ignore(case))]
    Label,
    #[token("combo", ignore(case))]
    Combo,
    #[token("scale", ignore(case))]
    Scale,
    #[token("progress", ignore(case))]
    Progress,
    #[token("image", ignore(case))]
    Image,
    #[token("menu", ignore(case))]
    Menu,

    /// Any other word. Breaks before an upper-case letter that follows a
    /// lower-case one.
    #[regex(r"[A-Z]?[a-z]+|[A-Z]+")]
    Word,
}

/// Tokenize a label into `(token, text)` pairs.
pub fn tokenize(label: &str) -> Vec<(LabelToken, String)> {
    LabelToken::lexer(label)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, label[span].to_string())))
        .collect()
}

/// Best-effort mapping from a display label to a widget tag.
///
/// The first token that names a kind decides; it may look one token ahead to
/// resolve compounds such as `Basic Entry` or `Radio List`. Labels with no
/// recognised keyword yield [`WidgetType::Unknown`].
pub fn classify(label: &str) -> WidgetType {
    let tokens: Vec<LabelToken> = LabelToken::lexer(label).filter_map(Result::ok).collect();
    tokens
        .iter()
        .enumerate()
        .find_map(|(i, &token)| resolve(token, tokens.get(i + 1).copied()))
        .unwrap_or(WidgetType::Unknown)
}

fn resolve(token: LabelToken, next: Option<LabelToken>) -> Option<WidgetType> {
    use LabelToken as T;

    let kind = match (token, next) {
        (T::RadioList, _) | (T::Radio, Some(T::List | T::Group)) => WidgetType::RadioList,
        (T::Radio, Some(T::Button)) => WidgetType::ButtonRadio,
        (T::Radio, _) => WidgetType::Radio,

        (T::Password, _) | (T::Entry, Some(T::Password)) => WidgetType::EntryPassword,
        (T::Basic, Some(T::Entry)) | (T::Entry, _) => WidgetType::EntryBasic,

        (T::CheckButton, _) | (T::Check, Some(T::Button)) => WidgetType::ButtonCheckbox,
        (T::Checkbox, _) | (T::Check, _) => WidgetType::Checkbox,
        (T::ToggleButton, _) | (T::Toggle, _) => WidgetType::ButtonToggle,
        (T::Switch, Some(T::Button)) => WidgetType::ButtonSwitch,
        (T::Switch, _) => WidgetType::Switch,
        (T::SpinButton, _) | (T::Spin, _) => WidgetType::ButtonSpin,
        (T::Spinner, _) => WidgetType::Spinner,
        (T::Normal, Some(T::Button)) | (T::Button, _) => WidgetType::ButtonNormal,

        (T::ScrolledWindow, _) | (T::Scrolled, _) => WidgetType::ScrolledWindow,
        (T::Window, _) => WidgetType::Window,
        (T::Box, _) => WidgetType::Box,
        (T::Fixed, _) => WidgetType::Fixed,
        (T::Grid, _) => WidgetType::Grid,
        (T::Frame, _) => WidgetType::Frame,

        (T::Label, _) => WidgetType::Label,
        (T::ComboBox, _) | (T::Combo, _) => WidgetType::ComboBox,
        (T::Scale, _) => WidgetType::Scale,
        (T::ProgressBar, _) | (T::Progress, _) => WidgetType::ProgressBar,
        (T::Image, _) => WidgetType::Image,
        (T::MenuBar, _) | (T::Menu, _) => WidgetType::Menu,

        _ => return None,
    };
    Some(kind)
}
