//! Part writer: nested `part`/`detail`/`extent` structure.
//!
//! A note typed `part` carries its pieces as a groupedValue. Sub-parts
//! sort into three buckets by declared type: `number`/`caption`/`title`
//! become `detail` children, `text`/`date` attach directly to `part`, and
//! a `list` sub-part (with its companion `extent unit`) produces an
//! `extent`/`list` wrapper. The `detail` wrapper only appears when at
//! least one detail-class sub-part exists.

use crate::diagnostics::Notice;
use crate::models::{DescriptiveValue, Shape};
use crate::write::context::WriteContext;
use crate::xml::XmlElement;

const COMPONENT: &str = "part";

/// Sub-part types wrapped in a `detail` element.
const DETAIL_TYPES: [&str; 3] = ["number", "caption", "title"];

/// Sub-part types attached directly to `part`.
const DIRECT_TYPES: [&str; 2] = ["text", "date"];

/// Write one part note.
pub fn write_part(parent: &mut XmlElement, note: &DescriptiveValue, ctx: &mut WriteContext<'_>) {
    let pieces: &[DescriptiveValue] = match note.shape() {
        Some(Shape::Grouped(parts)) | Some(Shape::Structured(parts)) => parts,
        _ => return,
    };

    let detail_type = typed_value(pieces, "detail type");
    let extent_unit = typed_value(pieces, "extent unit");

    let mut detail = XmlElement::new("detail");
    detail.set_attr_opt("type", detail_type);

    let mut part = XmlElement::new("part");
    let mut extents: Vec<XmlElement> = Vec::new();
    let mut directs: Vec<XmlElement> = Vec::new();

    for piece in pieces {
        let Some(value) = piece.value.as_deref() else {
            continue;
        };
        match piece.value_type.as_deref() {
            Some(piece_type) if DETAIL_TYPES.contains(&piece_type) => {
                detail.child(piece_type).text(value);
            }
            Some(piece_type) if DIRECT_TYPES.contains(&piece_type) => {
                let mut el = XmlElement::new(piece_type);
                el.text(value);
                directs.push(el);
            }
            Some("list") => {
                let mut extent = XmlElement::new("extent");
                extent.set_attr_opt("unit", extent_unit);
                extent.child("list").text(value);
                extents.push(extent);
            }
            // Consumed as attributes above.
            Some("detail type") | Some("extent unit") => {}
            other => {
                ctx.notify(Notice::warning(
                    COMPONENT,
                    format!("Unknown part type: {}", other.unwrap_or("(untyped)")),
                ));
            }
        }
    }

    if detail.elements().next().is_some() {
        part.push(detail);
    }
    for extent in extents {
        part.push(extent);
    }
    for direct in directs {
        part.push(direct);
    }

    if !part.is_empty() {
        parent.push(part);
    }
}

fn typed_value<'a>(pieces: &'a [DescriptiveValue], piece_type: &str) -> Option<&'a str> {
    pieces
        .iter()
        .find(|p| p.type_is(piece_type))
        .and_then(|p| p.value.as_deref())
}
