//! Note writer: `note`, `abstract`, `tableOfContents`, `targetAudience`.
//!
//! Tag selection is driven by the note's type (and display label for
//! abstracts). When the tag itself already encodes the type, no `type`
//! attribute is repeated on the element. Notes typed `part` are
//! structural and delegate entirely to the part writer.
//!
//! Note values may carry literal `<i>...</i>` markup; those runs are
//! passed through as raw markup so the italics survive serialization
//! instead of being escaped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::Notice;
use crate::models::{DescriptiveValue, Shape};
use crate::vocab::{ABSTRACT_DISPLAY_LABELS, ABSTRACT_NOTE_TYPES};
use crate::write::attributes::apply_authority_attrs;
use crate::write::context::WriteContext;
use crate::write::part::write_part;
use crate::xml::XmlElement;

const COMPONENT: &str = "note";

/// Separator joining structured note sub-parts.
const STRUCTURED_JOIN: &str = " -- ";

static ITALIC_TAG: Lazy<Regex> = Lazy::new(|| Regex::new("</?i>").expect("static pattern"));

/// Write all notes of one resource.
pub fn write_notes(parent: &mut XmlElement, notes: &[DescriptiveValue], ctx: &mut WriteContext<'_>) {
    for note in notes {
        write_note(parent, note, ctx);
    }
}

fn write_note(parent: &mut XmlElement, note: &DescriptiveValue, ctx: &mut WriteContext<'_>) {
    if note.type_is("part") {
        write_part(parent, note, ctx);
        return;
    }

    match note.shape() {
        None => {}
        Some(Shape::Plain(value)) => {
            let mut el = note_element(note);
            write_note_text(&mut el, value);
            parent.push(el);
        }
        Some(Shape::Structured(parts)) => {
            let joined = parts
                .iter()
                .filter_map(|p| p.value.as_deref())
                .collect::<Vec<_>>()
                .join(STRUCTURED_JOIN);
            if joined.is_empty() {
                return;
            }
            let mut el = note_element(note);
            write_note_text(&mut el, &joined);
            parent.push(el);
        }
        Some(Shape::Parallel(variants)) => {
            let alt_rep_group = ctx.ids.next_alt_rep_group();
            for variant in variants {
                let Some(value) = variant.value.as_deref() else {
                    continue;
                };
                // Tag resolution comes from the parent note; language
                // attributes from the variant.
                let mut el = note_element(note);
                el.set_attr("altRepGroup", &alt_rep_group);
                el.set_attr_opt("lang", variant.language_code());
                el.set_attr_opt("script", variant.script_code());
                write_note_text(&mut el, value);
                parent.push(el);
            }
        }
        Some(Shape::Grouped(_)) => {
            ctx.notify(Notice::warning(
                COMPONENT,
                "Grouped note values are only mapped for part notes",
            ));
        }
    }
}

/// Build the element shell: tag, retained type, display label, authority.
fn note_element(note: &DescriptiveValue) -> XmlElement {
    let tag = tag_name(note);
    let mut el = XmlElement::new(tag);
    // The dedicated tags already encode the type.
    if tag == "note" {
        el.set_attr_opt("type", note.value_type.as_deref());
    }
    el.set_attr_opt("displayLabel", note.display_label.as_deref());
    apply_authority_attrs(&mut el, note);
    el
}

fn tag_name(note: &DescriptiveValue) -> &'static str {
    let type_is_abstract = note.value_type.as_deref().is_some_and(|t| {
        ABSTRACT_NOTE_TYPES
            .iter()
            .any(|a| a.eq_ignore_ascii_case(t))
    });
    let label_is_abstract = note
        .display_label
        .as_deref()
        .is_some_and(|l| ABSTRACT_DISPLAY_LABELS.contains(&l));
    if type_is_abstract || label_is_abstract {
        return "abstract";
    }
    match note.value_type.as_deref() {
        Some("table of contents") => "tableOfContents",
        Some("target audience") => "targetAudience",
        _ => "note",
    }
}

/// Write note text, splitting literal `<i>`/`</i>` markers into raw runs
/// so they are not escaped. Plain runs alternate with raw markers; the
/// trailing run never gains a marker.
fn write_note_text(el: &mut XmlElement, text: &str) {
    if !ITALIC_TAG.is_match(text) {
        el.text(text);
        return;
    }
    let mut last = 0;
    for found in ITALIC_TAG.find_iter(text) {
        if found.start() > last {
            el.text(&text[last..found.start()]);
        }
        el.raw(found.as_str());
        last = found.end();
    }
    if last < text.len() {
        el.text(&text[last..]);
    }
}
