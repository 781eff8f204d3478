//! The shared URI/authority attribute composer.
//!
//! About ten writers emit the same attribute triple from a value node:
//! `valueURI` from the node's own URI, `authorityURI` and `authority` from
//! its source. This is the one canonical implementation; writers must not
//! re-derive it.

use crate::models::{DescriptiveValue, Source};
use crate::xml::XmlElement;

/// Compose the `{valueURI, authorityURI, authority}` attribute set for a
/// value node. Keys with absent (or empty) values are omitted entirely -
/// an empty-string attribute never appears in output.
///
/// Pure function: composing twice yields identical output.
pub fn authority_attrs(value: &DescriptiveValue) -> Vec<(&'static str, String)> {
    authority_attrs_parts(value.uri.as_deref(), value.source.as_ref())
}

/// Same composition from loose parts, for model types that carry `uri` and
/// `source` outside a [`DescriptiveValue`] (e.g. languages).
pub fn authority_attrs_parts(
    uri: Option<&str>,
    source: Option<&Source>,
) -> Vec<(&'static str, String)> {
    let mut attrs = Vec::new();
    push_present(&mut attrs, "valueURI", uri);
    if let Some(source) = source {
        push_present(&mut attrs, "authorityURI", source.uri.as_deref());
        push_present(&mut attrs, "authority", source.code.as_deref());
    }
    attrs
}

/// Apply the composed attributes to an element.
pub fn apply_authority_attrs(element: &mut XmlElement, value: &DescriptiveValue) {
    element.set_attrs(authority_attrs(value));
}

fn push_present(attrs: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            attrs.push((name, value.to_string()));
        }
    }
}
