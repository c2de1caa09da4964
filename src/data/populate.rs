//! Widget property populator: copies typed record fields into a node's
//! generic property list.
//!
//! Only entry kinds are populated; every other kind serializes its fields
//! straight from the record (see [`crate::markup`]), so populating them here
//! would export each field twice.

use crate::property::{format_bool, format_opt, PropertyError, PropertyList};

use super::records::{EntryData, Placement, WidgetData};

const ENTRY_FIELDS: &[&str] = &[
    "x",
    "y",
    "width",
    "height",
    "editable",
    "visible",
    "placeholder",
    "max_length",
    "text",
];

const PASSWORD_FIELDS: &[&str] = &[
    "x",
    "y",
    "width",
    "height",
    "editable",
    "visible",
    "placeholder",
    "max_length",
    "text",
    "mask_char",
];

/// Names [`populate`] writes for `data`, in write order.
pub fn populated_fields(data: &WidgetData) -> &'static [&'static str] {
    match data {
        WidgetData::Entry(_) => ENTRY_FIELDS,
        WidgetData::PasswordEntry(_) => PASSWORD_FIELDS,
        _ => &[],
    }
}

/// Copy the fields of `data` into `properties`.
///
/// Existing entries with the same name are overwritten in place, so running
/// the populator again after a record edit does not duplicate anything.
/// Returns the number of fields written; zero for kinds that are not
/// populated.
pub fn populate(data: &WidgetData, properties: &mut PropertyList) -> Result<usize, PropertyError> {
    match data {
        WidgetData::Entry(entry) => populate_entry(entry, properties),
        WidgetData::PasswordEntry(password) => {
            let written = populate_entry(&password.entry, properties)?;
            properties.set("mask_char", password.mask_char.to_string())?;
            Ok(written + 1)
        }
        other => {
            tracing::debug!(
                widget_type = %other.widget_type(),
                "populator has no fields for this widget type"
            );
            Ok(0)
        }
    }
}

fn populate_entry(entry: &EntryData, properties: &mut PropertyList) -> Result<usize, PropertyError> {
    let mut written = populate_placement(entry.placement, properties)?;

    properties.set("editable", format_bool(entry.editable))?;
    properties.set("visible", format_bool(entry.visible))?;
    properties.set("placeholder", format_opt(entry.placeholder.as_deref()))?;
    properties.set("max_length", entry.max_length.to_string())?;
    properties.set("text", format_opt(entry.default_text.as_deref()))?;
    written += 5;

    Ok(written)
}

fn populate_placement(
    placement: Placement,
    properties: &mut PropertyList,
) -> Result<usize, PropertyError> {
    properties.set("x", placement.x.to_string())?;
    properties.set("y", placement.y.to_string())?;
    properties.set("width", placement.width.to_string())?;
    properties.set("height", placement.height.to_string())?;
    Ok(4)
}
