//! Title writer: `titleInfo` elements (basic, structured, parallel,
//! uniform).
//!
//! Uniform titles are the one place this writer emits a `name` element
//! itself: the name is structurally embedded in the title's own data, not
//! a separate contributor. When the embedded name matches an actual
//! contributor (resolved up front), the Contributor Writer owns the `name`
//! side and this writer only tags its `titleInfo` with the shared
//! `nameTitleGroup` id.

use crate::diagnostics::Notice;
use crate::error::{WriteError, WriteResult};
use crate::models::{DescriptiveValue, Shape};
use crate::vocab::mods_title_part_tag;
use crate::write::attributes::apply_authority_attrs;
use crate::write::context::WriteContext;
use crate::write::name_title::NameTitleGroups;
use crate::xml::XmlElement;

const COMPONENT: &str = "title";

/// Write all titles of one resource, index-ordered.
pub fn write_titles(
    parent: &mut XmlElement,
    titles: &[DescriptiveValue],
    groups: &NameTitleGroups,
    ctx: &mut WriteContext<'_>,
) -> WriteResult<()> {
    for (index, title) in titles.iter().enumerate() {
        write_title(parent, index, title, groups, ctx)?;
    }
    Ok(())
}

fn write_title(
    parent: &mut XmlElement,
    index: usize,
    title: &DescriptiveValue,
    groups: &NameTitleGroups,
    ctx: &mut WriteContext<'_>,
) -> WriteResult<()> {
    match title.shape() {
        None => Ok(()),
        Some(Shape::Plain(value)) => {
            let mut el = title_info(title);
            if title.is_primary() {
                el.set_attr("usage", "primary");
            }
            el.set_attr_opt("type", title.value_type.as_deref());
            el.child("title").text(value);
            parent.push(el);
            Ok(())
        }
        Some(Shape::Parallel(variants)) => {
            write_parallel_title(parent, title, variants, ctx)
        }
        Some(Shape::Structured(parts)) => {
            if title.type_is("uniform") {
                write_uniform_title(parent, index, title, parts, groups, ctx)
            } else {
                let mut el = title_info(title);
                if title.is_primary() {
                    el.set_attr("usage", "primary");
                }
                el.set_attr_opt("type", title.value_type.as_deref());
                write_title_parts(&mut el, parts, ctx);
                if el.elements().next().is_none() {
                    // Nothing recognizable at all: a hard shape violation.
                    return Err(WriteError::EmptyStructuredValue("title"));
                }
                parent.push(el);
                Ok(())
            }
        }
        Some(Shape::Grouped(_)) => {
            ctx.notify(Notice::warning(COMPONENT, "Grouped title values are not mapped"));
            Ok(())
        }
    }
}

fn title_info(title: &DescriptiveValue) -> XmlElement {
    let mut el = XmlElement::new("titleInfo");
    el.set_attr_opt("displayLabel", title.display_label.as_deref());
    apply_authority_attrs(&mut el, title);
    el
}

/// One `titleInfo` per variant, all sharing a fresh altRepGroup id. The
/// first variant is the primary rendering; every later one is translated.
fn write_parallel_title(
    parent: &mut XmlElement,
    title: &DescriptiveValue,
    variants: &[DescriptiveValue],
    ctx: &mut WriteContext<'_>,
) -> WriteResult<()> {
    let alt_rep_group = ctx.ids.next_alt_rep_group();
    for (index, variant) in variants.iter().enumerate() {
        let mut el = title_info(variant);
        el.set_attr("altRepGroup", &alt_rep_group);
        el.set_attr_opt("lang", variant.language_code());
        el.set_attr_opt("script", variant.script_code());
        if index == 0 {
            el.set_attr("usage", "primary");
            el.set_attr_opt("type", title.value_type.as_deref());
        } else {
            el.set_attr("type", "translated");
        }
        match variant.shape() {
            Some(Shape::Plain(value)) => el.child("title").text(value),
            Some(Shape::Structured(parts)) => write_title_parts(&mut el, parts, ctx),
            _ => continue,
        }
        if !el.is_empty() {
            parent.push(el);
        }
    }
    Ok(())
}

/// Map structured-title sub-parts through the fixed vocabulary. A sub-part
/// with an unrecognized type is dropped with a notice - fatal to the
/// sub-part, not the whole write.
fn write_title_parts(element: &mut XmlElement, parts: &[DescriptiveValue], ctx: &mut WriteContext<'_>) {
    for part in parts {
        let Some(value) = part.value.as_deref() else {
            continue;
        };
        let Some(part_type) = part.value_type.as_deref() else {
            element.child("title").text(value);
            continue;
        };
        match mods_title_part_tag(part_type) {
            Ok(tag) => {
                element.child(tag).text(value);
            }
            Err(err) => {
                ctx.notify(Notice::warning(COMPONENT, err.to_string()));
            }
        }
    }
}

/// Split a uniform title into the `title`-typed sub-parts (its own
/// `titleInfo`) and the `name`-typed sub-parts (a sibling `name`, unless a
/// real contributor claimed the pairing).
fn write_uniform_title(
    parent: &mut XmlElement,
    index: usize,
    title: &DescriptiveValue,
    parts: &[DescriptiveValue],
    groups: &NameTitleGroups,
    ctx: &mut WriteContext<'_>,
) -> WriteResult<()> {
    let group = groups.for_title(index);

    let mut el = title_info(title);
    el.set_attr("type", "uniform");
    if title.is_primary() {
        el.set_attr("usage", "primary");
    }
    if let Some(group) = group {
        el.set_attr("nameTitleGroup", &group.id);
    }
    for part in parts {
        let Some(value) = part.value.as_deref() else {
            continue;
        };
        match part.value_type.as_deref() {
            Some("name") => {}
            Some("title") | None => {
                el.child("title").text(value);
            }
            Some(part_type) => match mods_title_part_tag(part_type) {
                Ok(tag) => {
                    el.child(tag).text(value);
                }
                Err(err) => ctx.notify(Notice::warning(COMPONENT, err.to_string())),
            },
        }
    }
    if el.elements().next().is_none() {
        return Err(WriteError::EmptyStructuredValue("title"));
    }
    parent.push(el);

    // The sibling name, only when no contributor owns the pairing.
    let title_owns_name = group.map(|g| g.contributor_index.is_none()).unwrap_or(false);
    if title_owns_name {
        let mut name = XmlElement::new("name");
        name.set_attr("type", "personal");
        if let Some(group) = group {
            name.set_attr("nameTitleGroup", &group.id);
        }
        for part in parts.iter().filter(|p| p.type_is("name")) {
            apply_authority_attrs(&mut name, part);
            match part.shape() {
                Some(Shape::Plain(value)) => {
                    name.child("namePart").text(value);
                }
                Some(Shape::Structured(tokens)) => {
                    for token in tokens {
                        if let Some(value) = token.value.as_deref() {
                            name.child("namePart").text(value);
                        }
                    }
                }
                _ => {}
            }
        }
        if !name.is_empty() {
            parent.push(name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoticeLog;

    use serde_json::json;

    fn title(v: serde_json::Value) -> DescriptiveValue {
        serde_json::from_value(v).unwrap()
    }

    fn write_with_groups(
        titles: &[DescriptiveValue],
        contributors: &[crate::models::Contributor],
    ) -> WriteResult<XmlElement> {
        let mut log = NoticeLog::new();
        let mut parent = XmlElement::new("mods");
        let mut ctx = WriteContext::new(&mut log);
        let groups = NameTitleGroups::resolve(titles, contributors, &mut ctx.ids);
        write_titles(&mut parent, titles, &groups, &mut ctx)?;
        Ok(parent)
    }

    #[test]
    fn test_plain_title() {
        let parent = write_with_groups(
            &[title(json!({"value": "Gaudy Night", "status": "primary"}))],
            &[],
        )
        .unwrap();
        let el = parent.first_named("titleInfo").unwrap();
        assert_eq!(el.attr("usage"), Some("primary"));
        assert_eq!(el.first_named("title").unwrap().text_content(), "Gaudy Night");
    }

    #[test]
    fn test_structured_title_vocabulary() {
        let parent = write_with_groups(
            &[title(json!({
                "structuredValue": [
                    {"value": "The", "type": "nonsorting characters"},
                    {"value": "Nine Tailors", "type": "main title"},
                    {"value": "changes rung on an old theme", "type": "subtitle"},
                    {"value": "book 1", "type": "part number"}
                ]
            }))],
            &[],
        )
        .unwrap();
        let el = parent.first_named("titleInfo").unwrap();
        let tags: Vec<_> = el.elements().map(|c| c.name().to_string()).collect();
        assert_eq!(tags, ["nonSort", "title", "subTitle", "partNumber"]);
    }

    #[test]
    fn test_structured_title_with_no_recognizable_parts_is_fatal() {
        let result = write_with_groups(
            &[title(json!({
                "structuredValue": [{"value": "x", "type": "volume designation"}]
            }))],
            &[],
        );
        assert!(matches!(
            result,
            Err(WriteError::EmptyStructuredValue("title"))
        ));
    }

    #[test]
    fn test_parallel_title_first_primary_rest_translated() {
        let parent = write_with_groups(
            &[title(json!({
                "parallelValue": [
                    {
                        "value": "Война и мир",
                        "valueLanguage": {"code": "rus", "valueScript": {"code": "Cyrl"}}
                    },
                    {
                        "value": "War and peace",
                        "valueLanguage": {"code": "eng", "valueScript": {"code": "Latn"}}
                    }
                ]
            }))],
            &[],
        )
        .unwrap();
        let infos: Vec<_> = parent.elements_named("titleInfo").collect();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].attr("altRepGroup"), infos[1].attr("altRepGroup"));
        assert_eq!(infos[0].attr("usage"), Some("primary"));
        assert_eq!(infos[0].attr("type"), None);
        assert_eq!(infos[1].attr("type"), Some("translated"));
        assert_eq!(infos[1].attr("script"), Some("Latn"));
    }

    #[test]
    fn test_uniform_title_split_without_contributor() {
        let parent = write_with_groups(
            &[title(json!({
                "type": "uniform",
                "structuredValue": [
                    {"value": "Hamlet", "type": "title"},
                    {"value": "Shakespeare, William", "type": "name"}
                ]
            }))],
            &[],
        )
        .unwrap();

        let info = parent.first_named("titleInfo").unwrap();
        assert_eq!(info.attr("type"), Some("uniform"));
        assert_eq!(info.elements().count(), 1);
        assert_eq!(info.first_named("title").unwrap().text_content(), "Hamlet");

        let name = parent.first_named("name").unwrap();
        assert_eq!(name.attr("type"), Some("personal"));
        assert_eq!(
            name.first_named("namePart").unwrap().text_content(),
            "Shakespeare, William"
        );
        // Both sides share one nameTitleGroup id.
        assert_eq!(info.attr("nameTitleGroup"), name.attr("nameTitleGroup"));
        assert!(info.attr("nameTitleGroup").is_some());
    }

    #[test]
    fn test_uniform_title_with_matching_contributor_defers_name() {
        let contributors = vec![serde_json::from_value(json!({
            "name": [{"value": "Shakespeare, William"}],
            "type": "person"
        }))
        .unwrap()];
        let parent = write_with_groups(
            &[title(json!({
                "type": "uniform",
                "structuredValue": [
                    {"value": "Hamlet", "type": "title"},
                    {"value": "Shakespeare, William", "type": "name"}
                ]
            }))],
            &contributors,
        )
        .unwrap();
        // The contributor writer owns the name element in this case.
        assert_eq!(parent.elements_named("name").count(), 0);
        let info = parent.first_named("titleInfo").unwrap();
        assert!(info.attr("nameTitleGroup").is_some());
    }

    #[test]
    fn test_empty_collection_writes_nothing() {
        let parent = write_with_groups(&[], &[]).unwrap();
        assert!(parent.is_empty());
    }
}
