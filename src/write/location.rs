//! Location writer: `location` blocks from access data and the PURL.
//!
//! The PURL always wins: when present it gets its own `location/url` with
//! `usage="primary display"`, and no generic URL may claim that usage. The
//! remaining access data collects into one `location` element, with shelf
//! locators split from generic physical locations by type.

use crate::models::{Access, DescriptiveValue, Shape};
use crate::write::attributes::apply_authority_attrs;
use crate::write::context::WriteContext;
use crate::xml::XmlElement;

/// Physical-location type routed to `shelfLocator` instead of
/// `physicalLocation`.
const SHELF_LOCATOR_TYPE: &str = "shelf locator";

/// Write location output for one resource.
pub fn write_location(
    parent: &mut XmlElement,
    access: Option<&Access>,
    purl: Option<&str>,
    _ctx: &mut WriteContext<'_>,
) {
    if let Some(purl) = purl {
        let location = parent.child("location");
        let url = location.child("url");
        url.set_attr("usage", "primary display");
        url.text(purl);
    }

    let Some(access) = access else {
        return;
    };
    if access.is_empty() {
        return;
    }

    let mut location = XmlElement::new("location");
    for physical in &access.physical_location {
        write_physical_location(&mut location, physical);
    }
    for contact in &access.access_contact {
        if let Some(Shape::Plain(value)) = contact.shape() {
            let el = location.child("physicalLocation");
            el.set_attr_opt("type", contact.value_type.as_deref());
            el.set_attr_opt("displayLabel", contact.display_label.as_deref());
            apply_authority_attrs(el, contact);
            el.text(value);
        }
    }
    for url in &access.url {
        if let Some(Shape::Plain(value)) = url.shape() {
            let el = location.child("url");
            // The PURL owns primary display when present.
            if url.is_primary() && purl.is_none() {
                el.set_attr("usage", "primary display");
            }
            el.set_attr_opt("displayLabel", url.display_label.as_deref());
            el.set_attr_opt(
                "note",
                url.note_of_type("purpose").and_then(|n| n.value.as_deref()),
            );
            el.text(value);
        }
    }
    if !location.is_empty() {
        parent.push(location);
    }
}

fn write_physical_location(location: &mut XmlElement, physical: &DescriptiveValue) {
    let Some(Shape::Plain(value)) = physical.shape() else {
        return;
    };
    if physical.type_is(SHELF_LOCATOR_TYPE) {
        location.child("shelfLocator").text(value);
        return;
    }
    let el = location.child("physicalLocation");
    el.set_attr_opt("type", physical.value_type.as_deref());
    el.set_attr_opt("displayLabel", physical.display_label.as_deref());
    el.set_attr_opt("lang", physical.language_code());
    el.set_attr_opt("script", physical.script_code());
    apply_authority_attrs(el, physical);
    el.text(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoticeLog;
    use serde_json::json;

    fn access(v: serde_json::Value) -> Access {
        serde_json::from_value(v).unwrap()
    }

    fn write(access: Option<&Access>, purl: Option<&str>) -> XmlElement {
        let mut log = NoticeLog::new();
        let mut parent = XmlElement::new("mods");
        let mut ctx = WriteContext::new(&mut log);
        write_location(&mut parent, access, purl, &mut ctx);
        parent
    }

    #[test]
    fn test_purl_gets_primary_display() {
        let parent = write(None, Some("https://purl.example.org/bc123df4567"));
        let url = parent
            .first_named("location")
            .unwrap()
            .first_named("url")
            .unwrap();
        assert_eq!(url.attr("usage"), Some("primary display"));
        assert_eq!(url.text_content(), "https://purl.example.org/bc123df4567");
    }

    #[test]
    fn test_purl_precedence_over_primary_url() {
        let access = access(json!({
            "url": [{"value": "https://example.org/viewer", "status": "primary"}]
        }));
        let parent = write(Some(&access), Some("https://purl.example.org/bc123df4567"));
        let locations: Vec<_> = parent.elements_named("location").collect();
        assert_eq!(locations.len(), 2);
        // Only the PURL url carries primary display.
        let generic = locations[1].first_named("url").unwrap();
        assert_eq!(generic.attr("usage"), None);
    }

    #[test]
    fn test_primary_url_without_purl() {
        let access = access(json!({
            "url": [{"value": "https://example.org/viewer", "status": "primary"}]
        }));
        let parent = write(Some(&access), None);
        let url = parent
            .first_named("location")
            .unwrap()
            .first_named("url")
            .unwrap();
        assert_eq!(url.attr("usage"), Some("primary display"));
    }

    #[test]
    fn test_shelf_locator_split_from_physical_location() {
        let access = access(json!({
            "physicalLocation": [
                {
                    "value": "Stanford University Libraries",
                    "type": "repository",
                    "uri": "https://sws.geonames.org/5398563/",
                    "source": {"code": "geonames"}
                },
                {"value": "Box 1, Folder 3", "type": "shelf locator"}
            ]
        }));
        let parent = write(Some(&access), None);
        let location = parent.first_named("location").unwrap();
        let physical = location.first_named("physicalLocation").unwrap();
        assert_eq!(physical.attr("type"), Some("repository"));
        assert_eq!(physical.attr("authority"), Some("geonames"));
        assert_eq!(
            location.first_named("shelfLocator").unwrap().text_content(),
            "Box 1, Folder 3"
        );
    }

    #[test]
    fn test_empty_access_writes_nothing() {
        let parent = write(Some(&Access::default()), None);
        assert!(parent.is_empty());
    }
}
