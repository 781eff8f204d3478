//! The root orchestrator: one descriptive resource in, MODS children out.
//!
//! [`write_descriptive`] appends the document's descriptive elements to a
//! caller-supplied parent element in fixed MODS order. It owns the only
//! per-document state (a fresh [`WriteContext`]) and resolves name/title
//! pairings up front so the title and contributor writers agree on shared
//! `nameTitleGroup` ids before either runs.

use crate::diagnostics::DiagnosticsSink;
use crate::error::WriteResult;
use crate::models::DescriptiveResource;
use crate::write::admin_metadata::write_admin_metadata;
use crate::write::context::WriteContext;
use crate::write::contributor::write_contributors;
use crate::write::event::write_events;
use crate::write::form::write_forms;
use crate::write::geographic::write_geographic;
use crate::write::identifier::write_identifiers;
use crate::write::language::write_languages;
use crate::write::location::write_location;
use crate::write::name_title::NameTitleGroups;
use crate::write::note::write_notes;
use crate::write::related_resource::write_related_resources;
use crate::write::subject::write_subjects;
use crate::write::title::write_titles;
use crate::xml::XmlElement;

/// Write one descriptive resource into `parent`, in fixed MODS order:
/// titleInfo, name, genre/typeOfResource/physicalDescription, language,
/// note, subject, originInfo, identifier, location, recordInfo,
/// relatedItem, extension.
///
/// The caller owns `parent` (normally the `mods` root) and the
/// diagnostics sink. One call per document; group-id scoping does not
/// survive the call.
pub fn write_descriptive(
    parent: &mut XmlElement,
    resource: &DescriptiveResource,
    diagnostics: &mut dyn DiagnosticsSink,
) -> WriteResult<()> {
    let mut ctx = WriteContext::new(diagnostics);
    let groups = NameTitleGroups::resolve(&resource.title, &resource.contributor, &mut ctx.ids);

    write_titles(parent, &resource.title, &groups, &mut ctx)?;
    write_contributors(parent, &resource.contributor, &groups, &mut ctx)?;
    write_forms(parent, &resource.form, &mut ctx);
    write_languages(parent, &resource.language, &mut ctx);
    write_notes(parent, &resource.note, &mut ctx);
    write_subjects(parent, &resource.subject, &resource.form, &mut ctx);
    write_events(parent, &resource.event, &mut ctx);
    write_identifiers(parent, &resource.identifier, &mut ctx);
    write_location(
        parent,
        resource.access.as_ref(),
        resource.purl.as_deref(),
        &mut ctx,
    );
    write_admin_metadata(parent, resource.admin_metadata.as_ref(), &mut ctx);
    write_related_resources(parent, &resource.related_resource, &mut ctx)?;
    write_geographic(parent, &resource.geographic, resource.purl.as_deref(), &mut ctx);

    Ok(())
}
