//! Full export document: window preamble around the serialized Arbre.

use crate::arbre::Arbre;
use crate::config::{ExportConfig, WindowConfig};
use crate::property::{format_bool, format_opt};

use super::serialize::serialize;
use super::writer::MarkupWriter;

/// Level at which the Arbre's top-level widgets are written.
pub const TREE_LEVEL: usize = 8;

/// Export the whole document:
///
/// ```text
/// <window>
///   <property name="title">...</property>  (window fields)
///   <child>
///     <fixed>
///       <children>
///         ... Arbre ...
///       </children>
///     </fixed>
///   </child>
/// </window>
/// ```
pub fn export_document(arbre: &Arbre, window: &WindowConfig, config: &ExportConfig) -> String {
    let mut w = MarkupWriter::new(config);
    w.open(0, "window");
    write_window_properties(&mut w, window, 2);
    w.open(2, "child");
    w.open(4, "fixed");
    w.open(6, "children");
    serialize(&mut w, arbre, arbre.root(), TREE_LEVEL);
    w.close(6, "children");
    w.close(4, "fixed");
    w.close(2, "child");
    w.close(0, "window");
    w.finish()
}

/// Export only the Arbre region, starting at level 0.
pub fn export_tree(arbre: &Arbre, config: &ExportConfig) -> String {
    let mut w = MarkupWriter::new(config);
    serialize(&mut w, arbre, arbre.root(), 0);
    w.finish()
}

fn write_window_properties(w: &mut MarkupWriter, window: &WindowConfig, level: usize) {
    w.property(level, "title", &window.title);
    w.property(level, "width", &window.width.to_string());
    w.property(level, "height", &window.height.to_string());
    w.property(level, "resizable", format_bool(window.resizable));
    w.property(level, "border", &window.border.to_string());
    w.property(level, "position", window.position.as_str());
    w.property(level, "x", &window.x.to_string());
    w.property(level, "y", &window.y.to_string());
    w.property(level, "bgColor", format_opt(window.bg_color.as_deref()));
    w.property(level, "icon", format_opt(window.icon.as_deref()));
    w.property(level, "headerBar", format_bool(window.header_bar));
    w.property(level, "bgImage", format_opt(window.bg_image.as_deref()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbre::PREVIEW_AREA;
    use crate::data::WidgetData;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_tree_document() {
        let window = WindowConfig::new().with_title("Empty");
        let config = ExportConfig::new().with_indent_unit("");
        let out = export_document(&Arbre::default(), &window, &config);
        assert_eq!(
            out,
            "<window>\n\
             <property name=\"title\">Empty</property>\n\
             <property name=\"width\">800</property>\n\
             <property name=\"height\">600</property>\n\
             <property name=\"resizable\">1</property>\n\
             <property name=\"border\">0</property>\n\
             <property name=\"position\">center</property>\n\
             <property name=\"x\">0</property>\n\
             <property name=\"y\">0</property>\n\
             <property name=\"bgColor\"></property>\n\
             <property name=\"icon\"></property>\n\
             <property name=\"headerBar\">0</property>\n\
             <property name=\"bgImage\"></property>\n\
             <child>\n\
             <fixed>\n\
             <children>\n\
             </children>\n\
             </fixed>\n\
             </child>\n\
             </window>\n"
        );
    }

    #[test]
    fn tree_sits_at_level_eight() {
        let mut arbre = Arbre::default();
        let b = arbre.allocate("b", None, true).unwrap();
        arbre.set_widget_data(b, WidgetData::Frame).unwrap();
        arbre.insert(b, PREVIEW_AREA).unwrap();
        let out = export_document(&arbre, &WindowConfig::default(), &ExportConfig::default());
        assert!(out.contains("\n      <children>\n        <frame>\n        </frame>\n      </children>\n"));
    }

    #[test]
    fn export_tree_starts_at_zero() {
        let mut arbre = Arbre::default();
        let b = arbre.allocate("g", None, true).unwrap();
        arbre.set_widget_data(b, WidgetData::Grid).unwrap();
        arbre.insert(b, PREVIEW_AREA).unwrap();
        assert_eq!(export_tree(&arbre, &ExportConfig::default()), "<grid>\n</grid>\n");
    }
}
