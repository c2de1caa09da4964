//! Depth-first linearization of the Arbre into nested markup.
//!
//! A node at level `L` opens at `L`, writes its property lines at `L + 2`,
//! then its children: a container wraps its whole child chain once in
//! `<child>` at `L + 2` with the children at `L + 4`; any other node writes
//! its children bare at `L + 2`. Siblings follow at the same level, each
//! opened and closed in turn. The [`PREVIEW_AREA`] sentinel writes no tag of
//! its own.

use crate::arbre::{Arbre, NodeId, PREVIEW_AREA};
use crate::data::{ButtonData, Placement, WidgetData};
use crate::property::{format_bool, format_opt};

use super::writer::MarkupWriter;

/// Serialize `node` and the sibling chain that follows it.
pub fn serialize(writer: &mut MarkupWriter, arbre: &Arbre, node: Option<NodeId>, level: usize) {
    let mut current = node;
    while let Some(id) = current {
        let Some(n) = arbre.get(id) else {
            return;
        };

        if n.name == PREVIEW_AREA {
            serialize(writer, arbre, arbre.first_child(id), level);
            return;
        }

        let kind = n.widget_type();
        let tag = kind.as_str();
        writer.open(level, tag);

        if let Some(data) = n.data() {
            write_fixed_fields(writer, data, level + 2);
        }
        for p in &n.properties {
            writer.property(level + 2, &p.name, &p.value);
        }
        let style_tag = kind.style_tag();
        for p in &n.style_properties {
            writer.element(level + 2, style_tag, &p.name, &p.value);
        }

        if let Some(child) = arbre.first_child(id) {
            if n.is_container {
                writer.open(level + 2, "child");
                serialize(writer, arbre, Some(child), level + 4);
                writer.close(level + 2, "child");
            } else {
                serialize(writer, arbre, Some(child), level + 2);
            }
        }

        writer.close(level, tag);
        current = arbre.next_sibling(id);
    }
}

/// Type-specific property lines, read straight from the record.
fn write_fixed_fields(w: &mut MarkupWriter, data: &WidgetData, level: usize) {
    match data {
        WidgetData::Button(b) => write_button(w, b, level),
        WidgetData::CheckButton(t) | WidgetData::Checkbox(t) => {
            write_button(w, &t.button, level);
            w.property(level, "is_checked", format_bool(t.active));
        }
        WidgetData::ToggleButton(t) | WidgetData::SwitchButton(t) | WidgetData::Switch(t) => {
            write_button(w, &t.button, level);
            w.property(level, "is_active", format_bool(t.active));
        }
        WidgetData::RadioButton(r) | WidgetData::Radio(r) => {
            write_button(w, &r.button, level);
            w.property(level, "is_active", format_bool(r.active));
            w.property(level, "group", format_opt(r.group.as_deref()));
        }
        WidgetData::SpinButton(s) => {
            write_placement(w, s.placement, level);
            w.property(level, "min", &s.min.to_string());
            w.property(level, "max", &s.max.to_string());
            w.property(level, "step", &s.step.to_string());
            w.property(level, "digits", &s.digits.to_string());
            w.property(level, "value", &s.value.to_string());
        }
        WidgetData::Label(l) => {
            write_placement(w, l.placement, level);
            w.property(level, "text", &l.text);
        }
        WidgetData::RadioList(r) => {
            write_placement(w, r.placement, level);
            write_items(w, &r.items, level);
            w.property(level, "selected", &format_index(r.selected));
        }
        WidgetData::Image(i) => {
            write_placement(w, i.placement, level);
            w.property(level, "path", format_opt(i.path.as_deref()));
        }
        WidgetData::ComboBox(c) => {
            write_items(w, &c.items, level);
            w.property(level, "active", &format_index(c.active));
        }
        WidgetData::Menu(m) => write_items(w, &m.items, level),
        WidgetData::Scale(r) | WidgetData::ProgressBar(r) => {
            write_placement(w, r.placement, level);
            w.property(level, "min", &r.min.to_string());
            w.property(level, "max", &r.max.to_string());
            w.property(level, "value", &r.value.to_string());
        }
        WidgetData::Spinner(s) => {
            write_placement(w, s.placement, level);
            w.property(level, "is_active", format_bool(s.active));
        }
        // Entries export through their populated properties; containers
        // have no record fields.
        WidgetData::Entry(_)
        | WidgetData::PasswordEntry(_)
        | WidgetData::Window
        | WidgetData::Box
        | WidgetData::Fixed
        | WidgetData::Grid
        | WidgetData::Frame
        | WidgetData::ScrolledWindow => {}
    }
}

fn write_button(w: &mut MarkupWriter, button: &ButtonData, level: usize) {
    write_placement(w, button.placement, level);
    w.property(level, "label", &button.label);
    w.property(level, "tooltip", format_opt(button.tooltip.as_deref()));
}

fn write_placement(w: &mut MarkupWriter, placement: Placement, level: usize) {
    w.property(level, "x", &placement.x.to_string());
    w.property(level, "y", &placement.y.to_string());
    w.property(level, "width", &placement.width.to_string());
    w.property(level, "height", &placement.height.to_string());
}

fn write_items(w: &mut MarkupWriter, items: &[String], level: usize) {
    for item in items {
        w.property(level, "item", item);
    }
}

fn format_index(index: Option<usize>) -> String {
    index.map(|i| i.to_string()).unwrap_or_default()
}
