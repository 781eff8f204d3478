//! Admin-metadata writer: `recordInfo`.
//!
//! This block describes the metadata record, not the resource. Admin
//! contributors become `recordContentSource`, admin events typed
//! creation/modification become the record dates, admin languages become
//! `languageOfCataloging` (same element shape as the language writer), and
//! `metadataStandard` entries become `descriptionStandard` children.

use crate::diagnostics::Notice;
use crate::models::{AdminMetadata, Event, Shape};
use crate::write::attributes::apply_authority_attrs;
use crate::write::context::WriteContext;
use crate::write::language::language_element;
use crate::xml::XmlElement;

const COMPONENT: &str = "adminMetadata";

/// Write the `recordInfo` block for one resource.
pub fn write_admin_metadata(
    parent: &mut XmlElement,
    admin: Option<&AdminMetadata>,
    ctx: &mut WriteContext<'_>,
) {
    let Some(admin) = admin else {
        return;
    };

    let mut record_info = XmlElement::new("recordInfo");

    for language in &admin.language {
        let el = language_element("languageOfCataloging", language);
        if !el.children().is_empty() {
            record_info.push(el);
        }
    }

    for contributor in &admin.contributor {
        if let Some(name) = contributor.primary_name() {
            if let Some(Shape::Plain(value)) = name.shape() {
                let el = record_info.child("recordContentSource");
                apply_authority_attrs(el, name);
                el.text(value);
            }
        }
    }

    write_record_date(&mut record_info, &admin.event, "creation", "recordCreationDate");
    write_record_date(&mut record_info, &admin.event, "modification", "recordChangeDate");

    for identifier in &admin.identifier {
        if let Some(Shape::Plain(value)) = identifier.shape() {
            let el = record_info.child("recordIdentifier");
            el.set_attr_opt(
                "source",
                identifier.source.as_ref().and_then(|s| s.value.as_deref()),
            );
            el.text(value);
        }
    }

    for note in &admin.note {
        let Some(Shape::Plain(value)) = note.shape() else {
            continue;
        };
        if note.type_is("record origin") {
            record_info.child("recordOrigin").text(value);
        } else {
            ctx.notify(Notice::warning(
                COMPONENT,
                format!(
                    "Unknown admin note type: {}",
                    note.value_type.as_deref().unwrap_or("(untyped)")
                ),
            ));
        }
    }

    for standard in &admin.metadata_standard {
        let el = record_info.child("descriptionStandard");
        apply_authority_attrs(el, standard);
        if let Some(code) = standard.code.as_deref() {
            el.text(code);
        } else if let Some(Shape::Plain(value)) = standard.shape() {
            el.text(value);
        }
    }

    if !record_info.is_empty() {
        parent.push(record_info);
    }
}

/// One record date per matching admin event, tagged with the date's
/// encoding code when declared.
fn write_record_date(record_info: &mut XmlElement, events: &[Event], event_type: &str, tag: &str) {
    for event in events.iter().filter(|e| e.value_type.as_deref() == Some(event_type)) {
        for date in &event.date {
            let Some(Shape::Plain(value)) = date.shape() else {
                continue;
            };
            let el = record_info.child(tag);
            el.set_attr_opt(
                "encoding",
                date.encoding.as_ref().and_then(|e| e.code.as_deref()),
            );
            el.text(value);
        }
    }
}
