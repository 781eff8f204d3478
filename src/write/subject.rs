//! Subject writer: `subject` with topic/name/title/cartographic dispatch.
//!
//! Each sub-component maps through a small fixed vocabulary (time to
//! temporal, place to geographic, and so on) with structural special
//! cases: person subjects become `name` elements, title subjects become
//! `titleInfo`, map coordinates become `cartographics` (pulling scale and
//! projection from the sibling Form collection, passed in explicitly),
//! and place parts of a structured subject route through
//! `hierarchicalGeographic`.

use crate::diagnostics::Notice;
use crate::models::{DescriptiveValue, Shape};
use crate::vocab::{SUBJECT_TAG, SUBJECT_TOPIC_TAG};
use crate::write::attributes::{apply_authority_attrs, authority_attrs};
use crate::write::context::WriteContext;
use crate::xml::XmlElement;

const COMPONENT: &str = "subject";

/// Place sub-part types recognized inside `hierarchicalGeographic`.
const HIERARCHICAL_PLACE_TYPES: [&str; 2] = ["country", "city"];

/// Write all subjects of one resource. `forms` is the resource's Form
/// collection; cartographic subjects read map scale/projection from it.
pub fn write_subjects(
    parent: &mut XmlElement,
    subjects: &[DescriptiveValue],
    forms: &[DescriptiveValue],
    ctx: &mut WriteContext<'_>,
) {
    for subject in subjects {
        write_subject(parent, subject, None, forms, ctx);
    }
}

fn write_subject(
    parent: &mut XmlElement,
    subject: &DescriptiveValue,
    alt_rep_group: Option<&str>,
    forms: &[DescriptiveValue],
    ctx: &mut WriteContext<'_>,
) {
    match subject.shape() {
        None => {}
        Some(Shape::Plain(_)) => {
            let mut el = subject_shell(subject, alt_rep_group);
            write_subject_child(&mut el, subject, forms, ctx);
            if !el.is_empty() {
                parent.push(el);
            }
        }
        Some(Shape::Structured(parts)) => {
            let mut el = subject_shell(subject, alt_rep_group);
            inherit_authority(&mut el, subject, parts);
            if subject.type_is("place") {
                write_hierarchical_geographic(&mut el, parts, ctx);
            } else {
                for part in parts {
                    write_subject_child(&mut el, part, forms, ctx);
                }
            }
            if el.elements().next().is_some() {
                parent.push(el);
            }
        }
        Some(Shape::Parallel(variants)) => {
            let group = ctx.ids.next_alt_rep_group();
            for variant in variants {
                write_subject(parent, variant, Some(group.as_str()), forms, ctx);
            }
        }
        Some(Shape::Grouped(_)) => {
            ctx.notify(Notice::warning(COMPONENT, "Grouped subject values are not mapped"));
        }
    }
}

fn subject_shell(subject: &DescriptiveValue, alt_rep_group: Option<&str>) -> XmlElement {
    let mut el = XmlElement::new("subject");
    el.set_attr_opt("displayLabel", subject.display_label.as_deref());
    el.set_attr_opt("lang", subject.language_code());
    el.set_attr_opt("script", subject.script_code());
    if let Some(group) = alt_rep_group {
        el.set_attr("altRepGroup", group);
    }
    if let Some(source) = &subject.source {
        el.set_attr_opt("authority", source.code.as_deref());
        el.set_attr_opt("authorityURI", source.uri.as_deref());
    }
    el
}

/// Authority on the wrapper comes from the subject itself when present,
/// else from the first structured sub-part that has a source.
fn inherit_authority(el: &mut XmlElement, subject: &DescriptiveValue, parts: &[DescriptiveValue]) {
    if subject.source.is_some() || el.attr("authority").is_some() {
        return;
    }
    if let Some(code) = parts
        .iter()
        .filter_map(|p| p.source.as_ref())
        .filter_map(|s| s.code.as_deref())
        .next()
    {
        el.set_attr("authority", code);
    }
}

/// One topic-class child for one sub-component.
fn write_subject_child(
    el: &mut XmlElement,
    node: &DescriptiveValue,
    forms: &[DescriptiveValue],
    ctx: &mut WriteContext<'_>,
) {
    let Some(value) = node.value.as_deref() else {
        return;
    };
    match node.value_type.as_deref() {
        Some("person") => {
            let name = el.child("name");
            name.set_attr("type", "personal");
            apply_authority_attrs(name, node);
            name.child("namePart").text(value);
        }
        Some("title") => {
            let title_info = el.child("titleInfo");
            apply_authority_attrs(title_info, node);
            title_info.child("title").text(value);
        }
        Some("map coordinates") => {
            write_cartographics(el, value, forms);
        }
        Some(node_type) => {
            let tag = SUBJECT_TAG.get(node_type).copied().unwrap_or_else(|| {
                ctx.notify(Notice::info(
                    COMPONENT,
                    format!("Subject type {node_type} mapped to topic"),
                ));
                SUBJECT_TOPIC_TAG
            });
            let child = el.child(tag);
            child.set_attrs(authority_attrs(node));
            child.text(value);
        }
        None => {
            let child = el.child(SUBJECT_TOPIC_TAG);
            child.set_attrs(authority_attrs(node));
            child.text(value);
        }
    }
}

/// Cartographics pull scale and projection out of the Form collection -
/// the one cross-collection reference in the subject mapping.
fn write_cartographics(el: &mut XmlElement, coordinates: &str, forms: &[DescriptiveValue]) {
    let cartographics = el.child("cartographics");
    cartographics.child("coordinates").text(coordinates);
    if let Some(scale) = form_value(forms, "map scale") {
        cartographics.child("scale").text(scale);
    }
    if let Some(projection) = form_value(forms, "map projection") {
        cartographics.child("projection").text(projection);
    }
}

fn form_value<'a>(forms: &'a [DescriptiveValue], form_type: &str) -> Option<&'a str> {
    forms
        .iter()
        .find(|f| f.type_is(form_type))
        .and_then(|f| f.value.as_deref())
}

fn write_hierarchical_geographic(
    el: &mut XmlElement,
    parts: &[DescriptiveValue],
    ctx: &mut WriteContext<'_>,
) {
    let mut hierarchical = XmlElement::new("hierarchicalGeographic");
    for part in parts {
        let Some(value) = part.value.as_deref() else {
            continue;
        };
        match part.value_type.as_deref() {
            Some(place_type) if HIERARCHICAL_PLACE_TYPES.contains(&place_type) => {
                hierarchical.child(place_type).text(value);
            }
            other => {
                ctx.notify(Notice::warning(
                    COMPONENT,
                    format!(
                        "Unknown hierarchical place type: {}",
                        other.unwrap_or("(untyped)")
                    ),
                ));
            }
        }
    }
    if !hierarchical.is_empty() {
        el.push(hierarchical);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoticeLog;
    use serde_json::json;

    fn value(v: serde_json::Value) -> DescriptiveValue {
        serde_json::from_value(v).unwrap()
    }

    fn write(subjects: &[DescriptiveValue], forms: &[DescriptiveValue]) -> XmlElement {
        let mut log = NoticeLog::new();
        let mut parent = XmlElement::new("mods");
        let mut ctx = WriteContext::new(&mut log);
        write_subjects(&mut parent, subjects, forms, &mut ctx);
        parent
    }

    #[test]
    fn test_plain_topic_with_authority() {
        let parent = write(
            &[value(json!({
                "value": "Cats",
                "type": "topic",
                "uri": "http://id.loc.gov/authorities/subjects/sh85021262",
                "source": {"code": "lcsh"}
            }))],
            &[],
        );
        let subject = parent.first_named("subject").unwrap();
        assert_eq!(subject.attr("authority"), Some("lcsh"));
        let topic = subject.first_named("topic").unwrap();
        assert_eq!(topic.text_content(), "Cats");
        assert_eq!(
            topic.attr("valueURI"),
            Some("http://id.loc.gov/authorities/subjects/sh85021262")
        );
    }

    #[test]
    fn test_typed_children() {
        let parent = write(
            &[
                value(json!({"value": "1914-1918", "type": "time"})),
                value(json!({"value": "Europe", "type": "place"})),
                value(json!({"value": "Milne, A. A.", "type": "person"})),
                value(json!({"value": "Winnie the Pooh", "type": "title"})),
            ],
            &[],
        );
        let subjects: Vec<_> = parent.elements_named("subject").collect();
        assert!(subjects[0].first_named("temporal").is_some());
        assert!(subjects[1].first_named("geographic").is_some());
        let name = subjects[2].first_named("name").unwrap();
        assert_eq!(name.attr("type"), Some("personal"));
        assert_eq!(
            name.first_named("namePart").unwrap().text_content(),
            "Milne, A. A."
        );
        assert!(subjects[3].first_named("titleInfo").is_some());
    }

    #[test]
    fn test_structured_subject_children_in_order() {
        let parent = write(
            &[value(json!({
                "structuredValue": [
                    {"value": "Cats", "type": "topic", "source": {"code": "lcsh"}},
                    {"value": "Anatomy", "type": "topic"}
                ]
            }))],
            &[],
        );
        let subject = parent.first_named("subject").unwrap();
        // Authority inherited from the first sub-part with a source.
        assert_eq!(subject.attr("authority"), Some("lcsh"));
        let topics: Vec<_> = subject.elements_named("topic").collect();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[1].text_content(), "Anatomy");
    }

    #[test]
    fn test_structured_place_routes_through_hierarchical_geographic() {
        let parent = write(
            &[value(json!({
                "type": "place",
                "structuredValue": [
                    {"value": "Denmark", "type": "country"},
                    {"value": "Elsinore", "type": "city"}
                ]
            }))],
            &[],
        );
        let subject = parent.first_named("subject").unwrap();
        let hierarchical = subject.first_named("hierarchicalGeographic").unwrap();
        assert_eq!(
            hierarchical.first_named("country").unwrap().text_content(),
            "Denmark"
        );
        assert_eq!(
            hierarchical.first_named("city").unwrap().text_content(),
            "Elsinore"
        );
    }

    #[test]
    fn test_cartographics_pull_scale_and_projection_from_forms() {
        let parent = write(
            &[value(json!({"value": "W 120°/E 90°", "type": "map coordinates"}))],
            &[
                value(json!({"value": "1:22,000,000", "type": "map scale"})),
                value(json!({"value": "conic proj.", "type": "map projection"})),
            ],
        );
        let cartographics = parent
            .first_named("subject")
            .unwrap()
            .first_named("cartographics")
            .unwrap();
        assert_eq!(
            cartographics.first_named("coordinates").unwrap().text_content(),
            "W 120°/E 90°"
        );
        assert_eq!(
            cartographics.first_named("scale").unwrap().text_content(),
            "1:22,000,000"
        );
        assert_eq!(
            cartographics.first_named("projection").unwrap().text_content(),
            "conic proj."
        );
    }

    #[test]
    fn test_parallel_subjects_share_alt_rep_group() {
        let parent = write(
            &[value(json!({
                "parallelValue": [
                    {"value": "Moscow", "type": "place", "valueLanguage": {"code": "eng"}},
                    {"value": "Москва", "type": "place", "valueLanguage": {"code": "rus"}}
                ]
            }))],
            &[],
        );
        let subjects: Vec<_> = parent.elements_named("subject").collect();
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].attr("altRepGroup"), subjects[1].attr("altRepGroup"));
        assert_eq!(subjects[1].attr("lang"), Some("rus"));
    }

    #[test]
    fn test_empty_subjects_write_nothing() {
        let parent = write(&[value(json!({"type": "topic"}))], &[]);
        assert!(parent.is_empty());
    }
}
