//! Geographic writer: the `extension displayLabel="geo"` RDF block.
//!
//! Geospatial description does not fit native MODS; it rides in an
//! extension carrying an `rdf:RDF` graph about the resource's PURL.
//! Media types and resource types from the geographic forms become
//! `dc:format`/`dc:type`, and the subject's declared coordinate type
//! selects the inner shape: a bounding box becomes
//! `gml:boundedBy/gml:Envelope`, a point becomes
//! `gmd:centerPoint/gml:Point/gml:pos`.

use crate::diagnostics::Notice;
use crate::models::{DescriptiveValue, Geographic, Shape};
use crate::write::context::WriteContext;
use crate::xml::XmlElement;

const COMPONENT: &str = "geographic";

const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";
const GML_NAMESPACE: &str = "http://www.opengis.net/gml/3.2/";
const GMD_NAMESPACE: &str = "http://www.isotc211.org/2005/gmd";

/// Write all geographic blocks of one resource.
pub fn write_geographic(
    parent: &mut XmlElement,
    geographic: &[Geographic],
    purl: Option<&str>,
    ctx: &mut WriteContext<'_>,
) {
    for block in geographic {
        write_block(parent, block, purl, ctx);
    }
}

fn write_block(
    parent: &mut XmlElement,
    block: &Geographic,
    purl: Option<&str>,
    ctx: &mut WriteContext<'_>,
) {
    let mut description = XmlElement::new("rdf:Description");
    description.set_attr_opt("rdf:about", purl);

    for form in &block.form {
        let Some(Shape::Plain(value)) = form.shape() else {
            continue;
        };
        match form.value_type.as_deref() {
            Some("media type") => {
                description.child("dc:format").text(value);
            }
            Some("type") => {
                let el = description.child("dc:type");
                el.set_attr_opt("rdf:resource", form.uri.as_deref());
                el.text(value);
            }
            other => {
                ctx.notify(Notice::warning(
                    COMPONENT,
                    format!(
                        "Unknown geographic form type: {}",
                        other.unwrap_or("(untyped)")
                    ),
                ));
            }
        }
    }

    for subject in &block.subject {
        let Some(Shape::Structured(parts)) = subject.shape() else {
            continue;
        };
        match subject.value_type.as_deref() {
            Some("bounding box coordinates") => write_bounding_box(&mut description, subject, parts),
            Some("point coordinates") => write_center_point(&mut description, parts),
            other => {
                ctx.notify(Notice::warning(
                    COMPONENT,
                    format!(
                        "Unknown geographic subject type: {}",
                        other.unwrap_or("(untyped)")
                    ),
                ));
            }
        }
    }

    // rdf:about is set unconditionally; only child content justifies
    // emitting the extension.
    if description.children().is_empty() {
        return;
    }

    let extension = parent.child("extension");
    extension.set_attr("displayLabel", "geo");
    let rdf = extension.child("rdf:RDF");
    rdf.set_attr("xmlns:rdf", RDF_NAMESPACE);
    rdf.set_attr("xmlns:dc", DC_NAMESPACE);
    rdf.set_attr("xmlns:gml", GML_NAMESPACE);
    rdf.set_attr("xmlns:gmd", GMD_NAMESPACE);
    rdf.push(description);
}

/// `gml:lowerCorner` is "west south", `gml:upperCorner` is "east north".
fn write_bounding_box(
    description: &mut XmlElement,
    subject: &DescriptiveValue,
    parts: &[DescriptiveValue],
) {
    let west = coordinate(parts, "west");
    let south = coordinate(parts, "south");
    let east = coordinate(parts, "east");
    let north = coordinate(parts, "north");
    let (Some(west), Some(south), Some(east), Some(north)) = (west, south, east, north) else {
        return;
    };

    let envelope = description.child("gml:boundedBy").child("gml:Envelope");
    envelope.set_attr_opt(
        "gml:srsName",
        subject.standard.as_ref().and_then(|s| s.code.as_deref()),
    );
    envelope.child("gml:lowerCorner").text(format!("{west} {south}"));
    envelope.child("gml:upperCorner").text(format!("{east} {north}"));
}

fn write_center_point(description: &mut XmlElement, parts: &[DescriptiveValue]) {
    let latitude = coordinate(parts, "latitude");
    let longitude = coordinate(parts, "longitude");
    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        return;
    };
    description
        .child("gmd:centerPoint")
        .child("gml:Point")
        .child("gml:pos")
        .text(format!("{latitude} {longitude}"));
}

fn coordinate<'a>(parts: &'a [DescriptiveValue], part_type: &str) -> Option<&'a str> {
    parts
        .iter()
        .find(|p| p.type_is(part_type))
        .and_then(|p| p.value.as_deref())
}
