//! Related-resource writer: `relatedItem`.
//!
//! A related resource is a nested description, so this writer recurses
//! through the same title, contributor, note and identifier writers as the
//! root document. The shared [`WriteContext`] keeps group ids unique
//! document-wide across that recursion; name/title pairings are resolved
//! fresh inside each related item, scoped to its own collections.

use crate::error::WriteResult;
use crate::models::RelatedResource;
use crate::vocab::mods_related_resource_type;
use crate::write::context::WriteContext;
use crate::write::contributor::write_contributors;
use crate::write::identifier::write_identifiers;
use crate::write::name_title::NameTitleGroups;
use crate::write::note::write_notes;
use crate::write::title::write_titles;
use crate::xml::XmlElement;

/// Write all related resources of one document.
pub fn write_related_resources(
    parent: &mut XmlElement,
    related: &[RelatedResource],
    ctx: &mut WriteContext<'_>,
) -> WriteResult<()> {
    for resource in related {
        write_related_resource(parent, resource, ctx)?;
    }
    Ok(())
}

fn write_related_resource(
    parent: &mut XmlElement,
    resource: &RelatedResource,
    ctx: &mut WriteContext<'_>,
) -> WriteResult<()> {
    let mut el = XmlElement::new("relatedItem");
    if let Some(resource_type) = resource.value_type.as_deref() {
        el.set_attr("type", mods_related_resource_type(resource_type)?);
    }
    el.set_attr_opt("displayLabel", resource.display_label.as_deref());

    let groups = NameTitleGroups::resolve(&resource.title, &resource.contributor, &mut ctx.ids);
    write_titles(&mut el, &resource.title, &groups, ctx)?;
    write_contributors(&mut el, &resource.contributor, &groups, ctx)?;
    write_notes(&mut el, &resource.note, ctx);
    write_identifiers(&mut el, &resource.identifier, ctx);
    if let Some(purl) = resource.purl.as_deref() {
        let location = el.child("location");
        location.child("url").text(purl);
    }

    // A bare type with no content still describes a relationship worth
    // keeping; a fully empty item does not.
    if !el.is_empty() || resource.value_type.is_some() {
        parent.push(el);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoticeLog;
    use crate::error::{VocabularyError, WriteError};
    use serde_json::json;

    fn related(v: serde_json::Value) -> RelatedResource {
        serde_json::from_value(v).unwrap()
    }

    fn write(related: &[RelatedResource]) -> WriteResult<XmlElement> {
        let mut log = NoticeLog::new();
        let mut parent = XmlElement::new("mods");
        let mut ctx = WriteContext::new(&mut log);
        write_related_resources(&mut parent, related, &mut ctx)?;
        Ok(parent)
    }

    #[test]
    fn test_typed_related_item_with_nested_description() {
        let parent = write(&[related(json!({
            "type": "part of",
            "displayLabel": "Appears in",
            "title": [{"value": "The Complete Works"}],
            "contributor": [{
                "name": [{"value": "Shakespeare, William"}],
                "type": "person"
            }],
            "note": [{"value": "Vol. 2", "type": "other relation type"}],
            "identifier": [{"value": "0491001304", "type": "ISBN"}],
            "purl": "https://purl.example.org/zz999xx0001"
        }))])
        .unwrap();

        let item = parent.first_named("relatedItem").unwrap();
        assert_eq!(item.attr("type"), Some("host"));
        assert_eq!(item.attr("displayLabel"), Some("Appears in"));
        assert_eq!(
            item.first_named("titleInfo")
                .unwrap()
                .first_named("title")
                .unwrap()
                .text_content(),
            "The Complete Works"
        );
        assert!(item.first_named("name").is_some());
        assert!(item.first_named("note").is_some());
        assert!(item.first_named("identifier").is_some());
        assert_eq!(
            item.first_named("location")
                .unwrap()
                .first_named("url")
                .unwrap()
                .text_content(),
            "https://purl.example.org/zz999xx0001"
        );
    }

    #[test]
    fn test_unknown_relation_type_is_fatal() {
        let result = write(&[related(json!({"type": "sibling of"}))]);
        assert!(matches!(
            result,
            Err(WriteError::Vocabulary(
                VocabularyError::UnknownRelatedResourceType(_)
            ))
        ));
    }

    #[test]
    fn test_group_ids_stay_unique_across_nesting() {
        let mut log = NoticeLog::new();
        let mut parent = XmlElement::new("mods");
        let mut ctx = WriteContext::new(&mut log);
        // Burn one altRepGroup id at document level first.
        let outer = ctx.ids.next_alt_rep_group();
        write_related_resources(
            &mut parent,
            &[related(json!({
                "type": "other version",
                "title": [{"parallelValue": [
                    {"value": "Война и мир"},
                    {"value": "War and peace"}
                ]}]
            }))],
            &mut ctx,
        )
        .unwrap();
        let item = parent.first_named("relatedItem").unwrap();
        let info = item.first_named("titleInfo").unwrap();
        assert_ne!(info.attr("altRepGroup"), Some(outer.as_str()));
    }

    #[test]
    fn test_bare_typed_item_survives_but_empty_item_does_not() {
        let parent = write(&[
            related(json!({"type": "references"})),
            related(json!({})),
        ])
        .unwrap();
        assert_eq!(parent.elements_named("relatedItem").count(), 1);
    }
}
