//! Identifier writer: `identifier` elements.
//!
//! The type attribute passes through the identifier-type vocabulary; an
//! http(s) value forces type `uri` regardless of the declared type. An
//! `invalid` status becomes `invalid="yes"`.

use crate::models::{DescriptiveValue, Shape};
use crate::vocab::{mods_identifier_type, URI_IDENTIFIER_TYPE};
use crate::write::context::WriteContext;
use crate::xml::XmlElement;

/// Write all identifiers of one resource.
pub fn write_identifiers(
    parent: &mut XmlElement,
    identifiers: &[DescriptiveValue],
    _ctx: &mut WriteContext<'_>,
) {
    for identifier in identifiers {
        write_identifier(parent, identifier);
    }
}

fn write_identifier(parent: &mut XmlElement, identifier: &DescriptiveValue) {
    let value = match identifier.shape() {
        Some(Shape::Plain(value)) => value,
        _ => return,
    };
    let el = parent.child("identifier");
    el.set_attr("type", identifier_type(identifier, value));
    el.set_attr_opt("displayLabel", identifier.display_label.as_deref());
    if identifier.status.as_deref() == Some("invalid") {
        el.set_attr("invalid", "yes");
    }
    el.text(value);
}

fn identifier_type(identifier: &DescriptiveValue, value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        return URI_IDENTIFIER_TYPE.to_string();
    }
    identifier
        .value_type
        .as_deref()
        .map(mods_identifier_type)
        .unwrap_or_default()
        .to_string()
}
