//! Form writer: `genre`, `typeOfResource` and `physicalDescription`.
//!
//! Forms split into three destinations. Genres and resource types are
//! top-level elements; cartographic forms (`map scale`/`map projection`)
//! are consumed by the subject writer and skipped here; everything else
//! collects under one shared `physicalDescription` element.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::{DescriptiveValue, Shape};
use crate::write::attributes::apply_authority_attrs;
use crate::write::context::WriteContext;
use crate::xml::XmlElement;

/// Form types already handled by the subject writer's cartographics.
const CARTOGRAPHIC_FORM_TYPES: [&str; 2] = ["map scale", "map projection"];

/// Physical-description types with a dedicated MODS tag.
static PHYSICAL_DESCRIPTION_TAG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("extent", "extent"),
        ("digital origin", "digitalOrigin"),
        ("media type", "internetMediaType"),
        ("reformatting quality", "reformattingQuality"),
    ])
});

/// Write all forms of one resource.
pub fn write_forms(parent: &mut XmlElement, forms: &[DescriptiveValue], _ctx: &mut WriteContext<'_>) {
    let mut physical = XmlElement::new("physicalDescription");

    for form in forms {
        let Some(Shape::Plain(value)) = form.shape() else {
            continue;
        };
        match form.value_type.as_deref() {
            Some("genre") => {
                let genre = parent.child("genre");
                genre.set_attr_opt("displayLabel", form.display_label.as_deref());
                if form.is_primary() {
                    genre.set_attr("usage", "primary");
                }
                apply_authority_attrs(genre, form);
                genre.text(value);
            }
            Some("resource type") => {
                let resource_type = parent.child("typeOfResource");
                if form.is_primary() {
                    resource_type.set_attr("usage", "primary");
                }
                apply_authority_attrs(resource_type, form);
                resource_type.text(value);
            }
            Some(form_type) if CARTOGRAPHIC_FORM_TYPES.contains(&form_type) => {}
            form_type => {
                let tag = form_type
                    .and_then(|t| PHYSICAL_DESCRIPTION_TAG.get(t).copied());
                match tag {
                    Some(tag) => {
                        physical.child(tag).text(value);
                    }
                    None => {
                        let el = physical.child("form");
                        el.set_attr_opt("type", form.value_type.as_deref());
                        apply_authority_attrs(el, form);
                        el.text(value);
                    }
                }
            }
        }
    }

    if !physical.is_empty() {
        parent.push(physical);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoticeLog;
    use serde_json::json;

    fn form(v: serde_json::Value) -> DescriptiveValue {
        serde_json::from_value(v).unwrap()
    }

    fn write(forms: &[DescriptiveValue]) -> XmlElement {
        let mut log = NoticeLog::new();
        let mut parent = XmlElement::new("mods");
        let mut ctx = WriteContext::new(&mut log);
        write_forms(&mut parent, forms, &mut ctx);
        parent
    }

    #[test]
    fn test_genre_and_resource_type_are_top_level() {
        let parent = write(&[
            form(json!({
                "value": "photographs",
                "type": "genre",
                "source": {"code": "aat"},
                "status": "primary"
            })),
            form(json!({"value": "still image", "type": "resource type"})),
        ]);
        let genre = parent.first_named("genre").unwrap();
        assert_eq!(genre.text_content(), "photographs");
        assert_eq!(genre.attr("authority"), Some("aat"));
        assert_eq!(genre.attr("usage"), Some("primary"));
        let resource_type = parent.first_named("typeOfResource").unwrap();
        assert_eq!(resource_type.text_content(), "still image");
    }

    #[test]
    fn test_physical_description_collects_under_one_wrapper() {
        let parent = write(&[
            form(json!({"value": "1 photograph", "type": "extent"})),
            form(json!({"value": "reformatted digital", "type": "digital origin"})),
            form(json!({"value": "image/jpeg", "type": "media type"})),
            form(json!({"value": "gelatin silver print", "type": "form"})),
        ]);
        assert_eq!(parent.elements_named("physicalDescription").count(), 1);
        let physical = parent.first_named("physicalDescription").unwrap();
        assert_eq!(
            physical.first_named("extent").unwrap().text_content(),
            "1 photograph"
        );
        assert_eq!(
            physical.first_named("digitalOrigin").unwrap().text_content(),
            "reformatted digital"
        );
        assert_eq!(
            physical.first_named("internetMediaType").unwrap().text_content(),
            "image/jpeg"
        );
        let el = physical.first_named("form").unwrap();
        assert_eq!(el.attr("type"), Some("form"));
        assert_eq!(el.text_content(), "gelatin silver print");
    }

    #[test]
    fn test_cartographic_forms_are_skipped() {
        let parent = write(&[
            form(json!({"value": "1:22,000,000", "type": "map scale"})),
            form(json!({"value": "conic proj.", "type": "map projection"})),
        ]);
        assert!(parent.is_empty());
    }

    #[test]
    fn test_empty_forms_write_nothing() {
        let parent = write(&[form(json!({"type": "genre"}))]);
        assert!(parent.is_empty());
    }
}
