//! Integration tests for arbre-forge.
//!
//! These tests exercise the public API from outside the crate: building an
//! Arbre by hand, driving the synchronizer through the testing Pilot, and
//! checking the exported markup.

use arbre_forge::arbre::{Arbre, NodeId, PREVIEW_AREA};
use arbre_forge::catalog::{classify, WidgetType};
use arbre_forge::config::{ArbreLimits, BuilderConfig, ExportConfig, WindowConfig};
use arbre_forge::data::{ButtonData, EntryData, LabelData, Placement, SpinData, WidgetData};
use arbre_forge::handle::WidgetHandle;
use arbre_forge::markup::{export_document, export_tree};
use arbre_forge::sync::{AppState, SyncError, WidgetSpec};
use arbre_forge::testing::Pilot;
use pretty_assertions::assert_eq;

fn leaf(arbre: &mut Arbre, name: &str, parent: &str, data: WidgetData) -> NodeId {
    let id = arbre.allocate(name, None, false).unwrap();
    arbre.set_widget_data(id, data).unwrap();
    arbre.insert(id, parent).unwrap();
    id
}

fn container(arbre: &mut Arbre, name: &str, parent: &str, data: WidgetData) -> NodeId {
    let id = arbre.allocate(name, None, true).unwrap();
    arbre.set_widget_data(id, data).unwrap();
    arbre.insert(id, parent).unwrap();
    id
}

fn label(text: &str) -> WidgetData {
    WidgetData::Label(LabelData {
        placement: Placement::default(),
        text: text.to_owned(),
    })
}

// ---------------------------------------------------------------------------
// End-to-end export
// ---------------------------------------------------------------------------

#[test]
fn test_box_with_button_exports_full_document() {
    let mut arbre = Arbre::default();
    container(&mut arbre, "Box:MyBox", PREVIEW_AREA, WidgetData::Box);
    leaf(
        &mut arbre,
        "button1",
        "Box:MyBox",
        WidgetData::Button(ButtonData::new(Placement::new(10, 10, 120, 40), "Click Me")),
    );

    let doc = export_document(&arbre, &WindowConfig::default(), &ExportConfig::default());
    let expected = "\
<window>
  <property name=\"title\"></property>
  <property name=\"width\">800</property>
  <property name=\"height\">600</property>
  <property name=\"resizable\">1</property>
  <property name=\"border\">0</property>
  <property name=\"position\">center</property>
  <property name=\"x\">0</property>
  <property name=\"y\">0</property>
  <property name=\"bgColor\"></property>
  <property name=\"icon\"></property>
  <property name=\"headerBar\">0</property>
  <property name=\"bgImage\"></property>
  <child>
    <fixed>
      <children>
        <box>
          <child>
            <button>
              <property name=\"x\">10</property>
              <property name=\"y\">10</property>
              <property name=\"width\">120</property>
              <property name=\"height\">40</property>
              <property name=\"label\">Click Me</property>
              <property name=\"tooltip\"></property>
            </button>
          </child>
        </box>
      </children>
    </fixed>
  </child>
</window>
";
    assert_eq!(doc, expected);
}

#[test]
fn test_window_settings_reach_preamble() {
    let window = WindowConfig::new()
        .with_title("Tom & Jerry")
        .with_size(320, 240)
        .with_header_bar(true);
    let doc = export_document(&Arbre::default(), &window, &ExportConfig::default());
    assert!(doc.contains("  <property name=\"title\">Tom &amp; Jerry</property>\n"));
    assert!(doc.contains("  <property name=\"width\">320</property>\n"));
    assert!(doc.contains("  <property name=\"headerBar\">1</property>\n"));
}

#[test]
fn test_spin_button_exports_its_own_values() {
    let mut arbre = Arbre::default();
    leaf(
        &mut arbre,
        "spin",
        PREVIEW_AREA,
        WidgetData::SpinButton(SpinData {
            min: -5.0,
            max: 5.0,
            step: 0.5,
            digits: 1,
            value: 2.5,
            ..SpinData::default()
        }),
    );
    let out = export_tree(&arbre, &ExportConfig::new().with_indent_unit(""));
    assert_eq!(
        out,
        "<spinbutton>\n\
         <property name=\"x\">0</property>\n\
         <property name=\"y\">0</property>\n\
         <property name=\"width\">0</property>\n\
         <property name=\"height\">0</property>\n\
         <property name=\"min\">-5</property>\n\
         <property name=\"max\">5</property>\n\
         <property name=\"step\">0.5</property>\n\
         <property name=\"digits\">1</property>\n\
         <property name=\"value\">2.5</property>\n\
         </spinbutton>\n"
    );
}

// ---------------------------------------------------------------------------
// Sibling chains and wrapping
// ---------------------------------------------------------------------------

#[test]
fn test_three_leaves_share_one_child_wrapper() {
    let mut arbre = Arbre::default();
    container(&mut arbre, "frame", PREVIEW_AREA, WidgetData::Frame);
    leaf(&mut arbre, "a", "frame", label("A"));
    leaf(&mut arbre, "b", "frame", label("B"));
    leaf(&mut arbre, "c", "frame", label("C"));

    let out = export_tree(&arbre, &ExportConfig::default());
    assert_eq!(out.matches("<child>").count(), 1);
    assert_eq!(out.matches("<label>").count(), 3);

    let a = out.find("\">A<").unwrap();
    let b = out.find("\">B<").unwrap();
    let c = out.find("\">C<").unwrap();
    assert!(a < b && b < c);
    assert!(out.contains("    </label>\n    <label>\n"));
}

#[test]
fn test_non_container_never_gains_children() {
    let mut arbre = Arbre::with_preview_root(ArbreLimits::default());
    let host = leaf(&mut arbre, "host", PREVIEW_AREA, label("host"));
    let inner = arbre.allocate("inner", None, false).unwrap();
    arbre.set_widget_data(inner, label("inner")).unwrap();
    assert!(arbre.insert(inner, "host").is_err());
    arbre.discard(inner).unwrap();
    assert_eq!(arbre.first_child(host), None);

    let out = export_tree(&arbre, &ExportConfig::default());
    assert!(!out.contains("<child>"));
}

#[test]
fn test_sentinel_is_transparent() {
    let mut arbre = Arbre::default();
    leaf(&mut arbre, "only", PREVIEW_AREA, label("x"));
    let out = export_tree(&arbre, &ExportConfig::default());
    assert!(!out.contains(PREVIEW_AREA));
    assert!(out.starts_with("<label>\n"));
}

// ---------------------------------------------------------------------------
// Arbre structure
// ---------------------------------------------------------------------------

#[test]
fn test_insert_targets_exact_container() {
    let mut arbre = Arbre::default();
    let left = container(&mut arbre, "left", PREVIEW_AREA, WidgetData::Box);
    let right = container(&mut arbre, "right", PREVIEW_AREA, WidgetData::Box);
    let btn = leaf(&mut arbre, "btn", "right", label("b"));

    assert_eq!(arbre.parent(btn), Some(right));
    assert!(arbre.walk_pre_order(left).all(|id| id != btn));
    assert!(arbre.walk_pre_order(right).any(|id| id == btn));
}

#[test]
fn test_find_by_name_prefers_earlier_preorder() {
    let mut arbre = Arbre::default();
    container(&mut arbre, "outer", PREVIEW_AREA, WidgetData::Box);
    let deep = leaf(&mut arbre, "dup", "outer", label("deep"));
    leaf(&mut arbre, "dup", PREVIEW_AREA, label("shallow"));
    assert_eq!(arbre.find_by_name("dup"), Some(deep));
}

#[test]
fn test_remove_frees_subtree_and_promotes_sibling() {
    let mut arbre = Arbre::default();
    let a = container(&mut arbre, "a", PREVIEW_AREA, WidgetData::Box);
    container(&mut arbre, "b", PREVIEW_AREA, WidgetData::Box);
    let c = leaf(&mut arbre, "c", PREVIEW_AREA, label("c"));
    leaf(&mut arbre, "b1", "b", label("b1"));
    leaf(&mut arbre, "b2", "b", label("b2"));

    let removed = arbre.remove_by_name("b").unwrap();
    assert_eq!(removed.name, "b");
    // Children of a removed node go with it; they are not re-parented.
    assert_eq!(arbre.find_by_name("b1"), None);
    assert_eq!(arbre.find_by_name("b2"), None);
    assert_eq!(arbre.next_sibling(a), Some(c));
    assert_eq!(arbre.len(), 3);
    assert!(arbre.remove_by_name("b").is_none());
}

#[test]
fn test_missing_parent_is_reported() {
    let mut arbre = Arbre::default();
    let id = arbre.allocate("stray", None, false).unwrap();
    assert!(arbre.insert(id, "nowhere").is_err());
    assert!(!arbre.is_attached(id));
    assert_eq!(arbre.insert_or_sentinel(id, "nowhere").unwrap(), arbre.root().unwrap());
}

#[test]
fn test_container_listing_is_capped() {
    let mut arbre = Arbre::with_preview_root(ArbreLimits::new().with_max_containers(3));
    for name in ["c1", "c2", "c3", "c4"] {
        container(&mut arbre, name, PREVIEW_AREA, WidgetData::Fixed);
    }
    leaf(&mut arbre, "leaf", "c1", label("l"));
    assert_eq!(arbre.list_container_names(), vec![PREVIEW_AREA, "c1", "c2"]);
}

#[test]
fn test_dump_shows_structure() {
    let mut arbre = Arbre::default();
    container(&mut arbre, "Box:MyBox", PREVIEW_AREA, WidgetData::Box);
    leaf(
        &mut arbre,
        "button1",
        "Box:MyBox",
        WidgetData::Button(ButtonData::default()),
    );
    insta::assert_snapshot!(arbre.dump(), @r"
preview_area [unknown] +
  Box:MyBox [box] +
    button1 [button]
");
}

// ---------------------------------------------------------------------------
// Dual-tree synchronization
// ---------------------------------------------------------------------------

#[test]
fn test_add_and_remove_keep_trees_consistent() {
    let mut pilot = Pilot::new();
    let outer = pilot.place("Box", WidgetData::Box).unwrap();
    let inner = pilot.place_in(outer, "Grid", WidgetData::Grid).unwrap();
    let entry = pilot
        .place_in(inner, "Basic Entry", WidgetData::Entry(EntryData::default()))
        .unwrap();
    pilot.place("Label", label("hi")).unwrap();
    assert!(pilot.state().is_consistent());
    assert_eq!(pilot.state().hierarchy.len(), 4);

    pilot.remove(inner).unwrap();
    assert!(pilot.state().is_consistent());
    assert!(pilot.state().arbre.find_by_handle(entry).is_none());
    assert!(pilot.state().hierarchy.find_row(entry).is_none());
    assert_eq!(pilot.state().hierarchy.len(), 2);

    assert_eq!(
        pilot.remove(inner).unwrap_err(),
        SyncError::UnknownWidget(inner)
    );
}

#[test]
fn test_canvas_survives_remove_request() {
    let mut pilot = Pilot::new();
    pilot.place("Box", WidgetData::Box).unwrap();
    let canvas = pilot.canvas();
    assert_eq!(
        pilot.remove(canvas).unwrap_err(),
        SyncError::RootCanvas(canvas)
    );
    assert_eq!(pilot.name_of(canvas), Some(PREVIEW_AREA));
    assert!(pilot.place("Label", label("still works")).is_ok());
    assert!(pilot.state().is_consistent());
}

#[test]
fn test_form_edit_cannot_change_widget_kind() {
    let mut pilot = Pilot::new();
    let h = pilot.place_label(None, "Password Entry").unwrap();
    let err = pilot
        .state_mut()
        .update_widget(h, WidgetData::Entry(EntryData::default()))
        .unwrap_err();
    assert!(matches!(err, SyncError::KindChanged { .. }));
    let doc = pilot.export();
    assert!(doc.contains("<password>"));
    assert!(!doc.contains("<entry>"));
}

#[test]
fn test_export_through_state() {
    let canvas = WidgetHandle::from_raw(0x1000);
    let config = BuilderConfig::default()
        .with_window(WindowConfig::new().with_title("Login"))
        .with_export(ExportConfig::new().with_indent_unit("\t"));
    let mut state = AppState::new(canvas, config);
    let entry = EntryData {
        placeholder: Some("user".into()),
        ..EntryData::default()
    };
    state
        .add_widget(WidgetSpec::new(WidgetHandle::from_raw(0x1010), "Entry", WidgetData::Entry(entry)))
        .unwrap();

    let doc = state.export();
    assert!(doc.contains("\t\t<property name=\"title\">Login</property>\n"));
    assert!(doc.contains("\t\t\t\t\t\t\t\t<entry>\n"));
    assert!(doc.contains("\t\t\t\t\t\t\t\t\t\t<property name=\"placeholder\">user</property>\n"));
    assert_eq!(doc.matches("name=\"placeholder\"").count(), 1);
}

#[test]
fn test_parent_picked_by_name() {
    let mut pilot = Pilot::new();
    let frame = pilot.place("Frame", WidgetData::Frame).unwrap();
    let names = pilot.state().container_names();
    let frame_name = names.iter().find(|n| n.starts_with("Frame_")).unwrap();
    let parent = pilot.state().container_handle(frame_name).unwrap();
    assert_eq!(parent, frame);

    let child = pilot.place_in(parent, "Label", label("x")).unwrap();
    let id = pilot.state().arbre.find_by_handle(child).unwrap();
    let parent_id = pilot.state().arbre.parent(id).unwrap();
    assert_eq!(pilot.state().arbre.get(parent_id).unwrap().handle, Some(frame));
}

// ---------------------------------------------------------------------------
// Label classification
// ---------------------------------------------------------------------------

#[test]
fn test_label_classification() {
    assert_eq!(classify("radioList"), WidgetType::RadioList);
    assert_eq!(classify("Radio"), WidgetType::Radio);
    assert_eq!(classify("Password Entry"), WidgetType::EntryPassword);
    assert_eq!(classify("Basic Entry"), WidgetType::EntryBasic);
    assert_eq!(classify("Box:MyBox"), WidgetType::Box);
    assert_eq!(classify("Scrolled Window"), WidgetType::ScrolledWindow);
    assert_eq!(classify("Tree View"), WidgetType::Unknown);
}

#[test]
fn test_label_only_widgets_get_default_records() {
    let mut pilot = Pilot::new();
    let h = pilot.place_label(None, "Password Entry").unwrap();
    let id = pilot.state().arbre.find_by_handle(h).unwrap();
    let node = pilot.state().arbre.get(id).unwrap();
    assert_eq!(node.widget_type(), WidgetType::EntryPassword);
    assert_eq!(node.properties.get("mask_char"), Some("*"));
    assert!(pilot.export().contains("<password>"));
}
