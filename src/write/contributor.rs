//! Contributor writer: `name` elements with nameParts, identifiers,
//! note-derived children and roles.
//!
//! A contributor whose primary name entry carries parallel variants emits
//! one `name` element per variant, all tagged with a freshly allocated
//! `altRepGroup` id. Otherwise a single `name` is emitted. Contributors
//! that participate in a name/title pairing (resolved up front, see
//! [`crate::write::name_title`]) additionally carry the shared
//! `nameTitleGroup` id.

use crate::diagnostics::Notice;
use crate::error::WriteResult;
use crate::models::{Contributor, DescriptiveValue, Shape};
use crate::vocab::{mods_identifier_type, mods_name_type, NAME_PART_TYPE_TO_MODS, URI_IDENTIFIER_TYPE};
use crate::write::attributes::apply_authority_attrs;
use crate::write::context::WriteContext;
use crate::write::name_title::NameTitleGroups;
use crate::write::role::{role_is_suppressed, write_role};
use crate::xml::XmlElement;

const COMPONENT: &str = "contributor";

/// Write all contributors of one resource.
pub fn write_contributors(
    parent: &mut XmlElement,
    contributors: &[Contributor],
    groups: &NameTitleGroups,
    ctx: &mut WriteContext<'_>,
) -> WriteResult<()> {
    for (index, contributor) in contributors.iter().enumerate() {
        write_contributor(parent, index, contributor, groups, ctx)?;
    }
    Ok(())
}

fn write_contributor(
    parent: &mut XmlElement,
    index: usize,
    contributor: &Contributor,
    groups: &NameTitleGroups,
    ctx: &mut WriteContext<'_>,
) -> WriteResult<()> {
    let Some(name) = contributor.primary_name() else {
        return Ok(());
    };
    let group = groups.for_contributor(index);

    match name.shape() {
        Some(Shape::Parallel(variants)) => {
            let alt_rep_group = ctx.ids.next_alt_rep_group();
            for (parallel_index, variant) in variants.iter().enumerate() {
                let mut el = XmlElement::new("name");
                set_name_type(&mut el, contributor)?;
                el.set_attr("altRepGroup", &alt_rep_group);
                el.set_attr_opt("script", variant.script_code());
                el.set_attr_opt("lang", variant.language_code());
                if variant.is_primary() {
                    el.set_attr("usage", "primary");
                }
                if variant.type_is("transliteration") {
                    el.set_attr_opt(
                        "transliteration",
                        variant.standard.as_ref().and_then(|s| s.value.as_deref()),
                    );
                }
                apply_authority_attrs(&mut el, variant);
                if let Some(group) = group {
                    // Only the matched variant joins the name/title pair.
                    if group.parallel_index == Some(parallel_index) {
                        el.set_attr("nameTitleGroup", &group.id);
                    }
                }
                write_name_children(&mut el, variant, contributor, ctx);
                if !el.is_empty() {
                    parent.push(el);
                }
            }
        }
        _ => {
            let mut el = XmlElement::new("name");
            set_name_type(&mut el, contributor)?;
            if contributor.is_primary() {
                el.set_attr("usage", "primary");
            }
            el.set_attr_opt("displayLabel", name.display_label.as_deref());
            apply_authority_attrs(&mut el, name);
            if let Some(group) = group {
                el.set_attr("nameTitleGroup", &group.id);
            }
            write_name_children(&mut el, name, contributor, ctx);
            if !el.is_empty() {
                parent.push(el);
            }
        }
    }
    Ok(())
}

/// Set the MODS name type attribute from the contributor type. An unknown
/// contributor type is a hard vocabulary error (data-quality bug upstream).
fn set_name_type(element: &mut XmlElement, contributor: &Contributor) -> WriteResult<()> {
    if let Some(cocina_type) = contributor.value_type.as_deref() {
        element.set_attr("type", mods_name_type(cocina_type)?);
    }
    Ok(())
}

/// Children of a `name` element: nameParts, then nameIdentifiers, then
/// note-derived elements, then filtered roles.
fn write_name_children(
    element: &mut XmlElement,
    name: &DescriptiveValue,
    contributor: &Contributor,
    ctx: &mut WriteContext<'_>,
) {
    match name.shape() {
        Some(Shape::Structured(parts)) => {
            for part in parts {
                let Some(value) = part.value.as_deref() else {
                    continue;
                };
                let name_part = element.child("namePart");
                if let Some(part_type) = part.value_type.as_deref() {
                    name_part.set_attr_opt(
                        "type",
                        NAME_PART_TYPE_TO_MODS.get(part_type).copied(),
                    );
                }
                name_part.text(value);
            }
        }
        Some(Shape::Plain(value)) => {
            element.child("namePart").text(value);
        }
        _ => {}
    }

    for identifier in &contributor.identifier {
        write_name_identifier(element, identifier);
    }

    for note in &contributor.note {
        match note.value_type.as_deref() {
            Some("affiliation") => {
                if let Some(value) = note.value.as_deref() {
                    element.child("affiliation").text(value);
                }
            }
            Some("description") => {
                if let Some(value) = note.value.as_deref() {
                    element.child("description").text(value);
                }
            }
            other => {
                ctx.notify(Notice::warning(
                    COMPONENT,
                    format!(
                        "Unknown contributor note type: {}",
                        other.unwrap_or("(untyped)")
                    ),
                ));
            }
        }
    }

    for role in &contributor.role {
        if role_is_suppressed(role, contributor.value_type.as_deref()) {
            ctx.notify(Notice::info(COMPONENT, "Role suppressed"));
            continue;
        }
        write_role(element, role);
    }
}

fn write_name_identifier(element: &mut XmlElement, identifier: &DescriptiveValue) {
    let Some(value) = identifier.value.as_deref().or(identifier.uri.as_deref()) else {
        return;
    };
    let el = element.child("nameIdentifier");
    let identifier_type = if value.starts_with("http://") || value.starts_with("https://") {
        URI_IDENTIFIER_TYPE
    } else {
        identifier
            .value_type
            .as_deref()
            .map(mods_identifier_type)
            .unwrap_or_default()
    };
    el.set_attr("type", identifier_type);
    if identifier.status.as_deref() == Some("invalid") {
        el.set_attr("invalid", "yes");
    }
    el.text(value);
}
