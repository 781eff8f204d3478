//! Event writer: `originInfo` blocks.
//!
//! An event is either BASIC (one `originInfo`) or TRANSLATED (one
//! `originInfo` per parallel group, all sharing an `altRepGroup` id). The
//! translated path aligns parallel dates, locations, contributor names
//! and edition notes positionally: the Nth variant of each collection
//! belongs to the Nth group. Positional alignment is trusted, not
//! verified against language/script tags - same-index entries are assumed
//! to correspond.
//!
//! Non-parallel values are merged into the groups whose language is
//! English or script is Latin when at least one such group exists,
//! otherwise into every group.

use crate::diagnostics::Notice;
use crate::models::{DescriptiveValue, Event, Shape, ValueLanguage};
use crate::vocab::{date_tag, mods_event_type, ENGLISH_LANGUAGE_CODE, LATIN_SCRIPT_CODE};
use crate::write::attributes::apply_authority_attrs;
use crate::write::context::WriteContext;
use crate::xml::XmlElement;

const COMPONENT: &str = "event";

/// The event type whose dates carry `type="developed"`.
const DEVELOPMENT_EVENT_TYPE: &str = "development";

/// Event note types with a dedicated originInfo child element.
const EVENT_NOTE_TAGS: [(&str, &str); 3] = [
    ("edition", "edition"),
    ("issuance", "issuance"),
    ("frequency", "frequency"),
];

/// Write all events of one resource.
pub fn write_events(parent: &mut XmlElement, events: &[Event], ctx: &mut WriteContext<'_>) {
    for event in events {
        if event_is_translated(event) {
            write_translated_event(parent, event, ctx);
        } else {
            write_basic_event(parent, event, ctx);
        }
    }
}

/// An event is translated when any of its locations, dates, notes or
/// contributor names carries parallel variants.
fn event_is_translated(event: &Event) -> bool {
    event.location.iter().any(DescriptiveValue::is_parallel)
        || event.date.iter().any(DescriptiveValue::is_parallel)
        || event.note.iter().any(DescriptiveValue::is_parallel)
        || event
            .contributor
            .iter()
            .filter_map(|c| c.primary_name())
            .any(DescriptiveValue::is_parallel)
}

// =============================================================================
// Basic path
// =============================================================================

fn write_basic_event(parent: &mut XmlElement, event: &Event, ctx: &mut WriteContext<'_>) {
    let mods_type = event.value_type.as_deref().and_then(mods_event_type);

    let mut origin = XmlElement::new("originInfo");
    origin.set_attr_opt("eventType", mods_type);
    origin.set_attr_opt("displayLabel", event.display_label.as_deref());

    for date in &event.date {
        write_date(&mut origin, date, mods_type);
    }
    for location in &event.location {
        write_place(&mut origin, location);
    }
    for contributor in &event.contributor {
        if let Some(name) = contributor.primary_name() {
            write_publisher(&mut origin, name, false);
        }
    }
    for note in &event.note {
        write_event_note(&mut origin, note, note, ctx);
    }

    // Attributes alone (eventType, displayLabel) are not content.
    if !origin.children().is_empty() {
        parent.push(origin);
    }
}

// =============================================================================
// Translated path
// =============================================================================

/// One positional slice across the event's parallel collections, built by
/// zipping same-index variants together. Transient: assembled and emitted
/// within a single event write.
#[derive(Default)]
struct GroupedParallelValues<'a> {
    locations: Vec<&'a DescriptiveValue>,
    names: Vec<&'a DescriptiveValue>,
    dates: Vec<&'a DescriptiveValue>,
    /// Note pairs: the type lives on the parent note, the value on the
    /// variant sliced into this group.
    notes: Vec<(&'a DescriptiveValue, &'a DescriptiveValue)>,
    value_language: Option<&'a ValueLanguage>,
}

impl<'a> GroupedParallelValues<'a> {
    fn is_english_or_latin(&self) -> bool {
        let Some(language) = self.value_language else {
            return false;
        };
        language.code.as_deref() == Some(ENGLISH_LANGUAGE_CODE)
            || language
                .value_script
                .as_ref()
                .and_then(|s| s.code.as_deref())
                == Some(LATIN_SCRIPT_CODE)
    }
}

fn write_translated_event(parent: &mut XmlElement, event: &Event, ctx: &mut WriteContext<'_>) {
    let mods_type = event.value_type.as_deref().and_then(mods_event_type);
    let alt_rep_group = ctx.ids.next_alt_rep_group();

    // The parallel sub-collections that participate in zipping.
    let parallel_locations: Vec<&[DescriptiveValue]> = event
        .location
        .iter()
        .filter(|l| l.is_parallel())
        .map(|l| l.parallel_value.as_slice())
        .collect();
    let parallel_dates: Vec<&[DescriptiveValue]> = event
        .date
        .iter()
        .filter(|d| d.is_parallel())
        .map(|d| d.parallel_value.as_slice())
        .collect();
    let parallel_notes: Vec<(&DescriptiveValue, &[DescriptiveValue])> = event
        .note
        .iter()
        .filter(|n| n.is_parallel())
        .map(|n| (n, n.parallel_value.as_slice()))
        .collect();
    let parallel_names: Vec<&[DescriptiveValue]> = event
        .contributor
        .iter()
        .filter_map(|c| c.primary_name())
        .filter(|n| n.is_parallel())
        .map(|n| n.parallel_value.as_slice())
        .collect();

    let parallel_size = parallel_locations
        .iter()
        .chain(&parallel_dates)
        .chain(&parallel_names)
        .map(|variants| variants.len())
        .chain(parallel_notes.iter().map(|(_, variants)| variants.len()))
        .max()
        .unwrap_or(0);

    // Zip positionally: the Nth variant of every collection joins group N.
    let mut groups: Vec<GroupedParallelValues<'_>> = (0..parallel_size)
        .map(|i| {
            let mut group = GroupedParallelValues {
                locations: slice_at(&parallel_locations, i),
                names: slice_at(&parallel_names, i),
                dates: slice_at(&parallel_dates, i),
                notes: parallel_notes
                    .iter()
                    .filter_map(|(parent, variants)| variants.get(i).map(|v| (*parent, v)))
                    .collect(),
                value_language: None,
            };
            group.value_language = group
                .locations
                .iter()
                .chain(&group.names)
                .chain(&group.dates)
                .copied()
                .chain(group.notes.iter().map(|(_, variant)| *variant))
                .filter_map(|v| v.value_language.as_ref())
                .next();
            group
        })
        .collect();

    // Merge non-parallel values into the eng/Latn groups when any exist,
    // otherwise into every group.
    let non_parallel_locations: Vec<&DescriptiveValue> =
        event.location.iter().filter(|l| !l.is_parallel()).collect();
    let non_parallel_dates: Vec<&DescriptiveValue> =
        event.date.iter().filter(|d| !d.is_parallel()).collect();
    let non_parallel_notes: Vec<&DescriptiveValue> =
        event.note.iter().filter(|n| !n.is_parallel()).collect();
    let non_parallel_names: Vec<&DescriptiveValue> = event
        .contributor
        .iter()
        .filter_map(|c| c.primary_name())
        .filter(|n| !n.is_parallel())
        .collect();

    let any_english = groups.iter().any(GroupedParallelValues::is_english_or_latin);
    for group in &mut groups {
        if any_english && !group.is_english_or_latin() {
            continue;
        }
        group.locations.extend(&non_parallel_locations);
        group.dates.extend(&non_parallel_dates);
        group.notes.extend(non_parallel_notes.iter().map(|n| (*n, *n)));
        group.names.extend(&non_parallel_names);
    }

    for group in groups {
        let mut origin = XmlElement::new("originInfo");
        if let Some(language) = group.value_language {
            origin.set_attr_opt(
                "script",
                language.value_script.as_ref().and_then(|s| s.code.as_deref()),
            );
            origin.set_attr_opt("lang", language.code.as_deref());
        }
        origin.set_attr("altRepGroup", &alt_rep_group);
        origin.set_attr_opt("eventType", mods_type);
        origin.set_attr_opt("displayLabel", event.display_label.as_deref());

        for date in &group.dates {
            write_date(&mut origin, date, mods_type);
        }
        for location in &group.locations {
            write_place(&mut origin, location);
        }
        for name in &group.names {
            // Language attributes already live on the parent originInfo.
            write_publisher(&mut origin, name, true);
        }
        for (note, variant) in &group.notes {
            write_event_note(&mut origin, variant, note, ctx);
        }

        if !origin.children().is_empty() {
            parent.push(origin);
        }
    }
}

fn slice_at<'a>(collections: &[&'a [DescriptiveValue]], index: usize) -> Vec<&'a DescriptiveValue> {
    collections
        .iter()
        .filter_map(|variants| variants.get(index))
        .collect()
}

// =============================================================================
// Dates
// =============================================================================

/// Write one date as one or more date-tag elements. A structured date is
/// a range: one element per sub-part, tagged start/end.
fn write_date(origin: &mut XmlElement, date: &DescriptiveValue, mods_type: Option<&str>) {
    let tag = mods_type.map(date_tag).unwrap_or(crate::vocab::DATE_OTHER_TAG);

    match date.shape() {
        Some(Shape::Structured(parts)) => {
            for part in parts {
                let Some(value) = part.value.as_deref() else {
                    continue;
                };
                let el = origin.child(tag);
                set_date_attrs(el, part, Some(date), mods_type);
                if matches!(part.value_type.as_deref(), Some("start") | Some("end")) {
                    el.set_attr_opt("point", part.value_type.as_deref());
                }
                el.text(value);
            }
        }
        Some(Shape::Plain(value)) => {
            let el = origin.child(tag);
            set_date_attrs(el, date, None, mods_type);
            if tag == crate::vocab::DATE_OTHER_TAG && mods_type != Some(DEVELOPMENT_EVENT_TYPE) {
                // dateOther takes its type from a companion note.
                el.set_attr_opt(
                    "type",
                    date.note_of_type("date type").and_then(|n| n.value.as_deref()),
                );
            }
            el.text(value);
        }
        _ => {}
    }
}

fn set_date_attrs(
    el: &mut XmlElement,
    date: &DescriptiveValue,
    fallback: Option<&DescriptiveValue>,
    mods_type: Option<&str>,
) {
    let encoding = date
        .encoding
        .as_ref()
        .or(fallback.and_then(|f| f.encoding.as_ref()))
        .and_then(|e| e.code.as_deref());
    el.set_attr_opt("encoding", encoding);

    let qualifier = date
        .qualifier
        .as_deref()
        .or(fallback.and_then(|f| f.qualifier.as_deref()));
    el.set_attr_opt("qualifier", qualifier);

    if date.is_primary() {
        el.set_attr("keyDate", "yes");
    }
    if mods_type == Some(DEVELOPMENT_EVENT_TYPE) {
        el.set_attr("type", "developed");
    }
}

// =============================================================================
// Places and publishers
// =============================================================================

/// A `place` wrapper with up to two `placeTerm` children (text and code),
/// each carrying its own authority attributes. Absent terms are omitted.
fn write_place(origin: &mut XmlElement, location: &DescriptiveValue) {
    let mut place = XmlElement::new("place");
    if let Some(text) = location.value.as_deref() {
        let term = place.child("placeTerm");
        term.set_attr("type", "text");
        apply_authority_attrs(term, location);
        term.text(text);
    }
    if let Some(code) = location.code.as_deref() {
        let term = place.child("placeTerm");
        term.set_attr("type", "code");
        apply_authority_attrs(term, location);
        term.text(code);
    }
    if !place.is_empty() {
        origin.push(place);
    }
}

/// A contributor name written as `publisher`. In parallel context the
/// language attributes are carried by the parent `originInfo` instead.
fn write_publisher(origin: &mut XmlElement, name: &DescriptiveValue, in_parallel: bool) {
    let Some(Shape::Plain(text)) = name.shape() else {
        return;
    };
    let publisher = origin.child("publisher");
    if !in_parallel {
        publisher.set_attr_opt("lang", name.language_code());
        publisher.set_attr_opt("script", name.script_code());
        publisher.set_attr_opt(
            "transliteration",
            name.standard.as_ref().and_then(|s| s.value.as_deref()),
        );
    }
    publisher.text(text);
}

// =============================================================================
// Notes
// =============================================================================

/// Write one event note. A parallel variant carries no type of its own, so
/// the type is resolved against `type_source` (the parent note; in the
/// basic path, the note itself).
fn write_event_note(
    origin: &mut XmlElement,
    note: &DescriptiveValue,
    type_source: &DescriptiveValue,
    ctx: &mut WriteContext<'_>,
) {
    let Some(value) = note.value.as_deref() else {
        return;
    };
    let note_type = note
        .value_type
        .as_deref()
        .or(type_source.value_type.as_deref());
    let tag = EVENT_NOTE_TAGS
        .iter()
        .find(|(candidate, _)| note_type == Some(*candidate))
        .map(|(_, tag)| *tag);
    match tag {
        Some(tag) => {
            origin.child(tag).text(value);
        }
        None => {
            if note_type != Some("date type") {
                ctx.notify(Notice::warning(
                    COMPONENT,
                    format!(
                        "Unknown event note type: {}",
                        note_type.unwrap_or("(untyped)")
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoticeLog;
    use serde_json::json;

    fn event(v: serde_json::Value) -> Event {
        serde_json::from_value(v).unwrap()
    }

    fn write(events: &[Event]) -> XmlElement {
        let mut log = NoticeLog::new();
        let mut parent = XmlElement::new("mods");
        let mut ctx = WriteContext::new(&mut log);
        write_events(&mut parent, events, &mut ctx);
        parent
    }

    #[test]
    fn test_basic_creation_event() {
        let parent = write(&[event(json!({
            "type": "creation",
            "date": [{"value": "1980"}]
        }))]);
        assert_eq!(
            parent.to_xml().unwrap(),
            "<mods><originInfo eventType=\"production\">\
             <dateCreated>1980</dateCreated></originInfo></mods>"
        );
    }

    #[test]
    fn test_date_range_with_key_date() {
        let parent = write(&[event(json!({
            "type": "publication",
            "date": [{
                "structuredValue": [
                    {"value": "1920", "type": "start", "status": "primary"},
                    {"value": "1925", "type": "end"}
                ],
                "encoding": {"code": "w3cdtf"}
            }]
        }))]);
        let origin = parent.first_named("originInfo").unwrap();
        let dates: Vec<_> = origin.elements_named("dateIssued").collect();
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].attr("point"), Some("start"));
        assert_eq!(dates[0].attr("keyDate"), Some("yes"));
        assert_eq!(dates[0].attr("encoding"), Some("w3cdtf"));
        assert_eq!(dates[1].attr("point"), Some("end"));
        assert_eq!(dates[1].attr("keyDate"), None);
    }

    #[test]
    fn test_date_other_takes_type_from_companion_note() {
        let parent = write(&[event(json!({
            "type": "distribution",
            "date": [{
                "value": "1937",
                "note": [{"value": "distribution", "type": "date type"}]
            }]
        }))]);
        let origin = parent.first_named("originInfo").unwrap();
        let date = origin.first_named("dateOther").unwrap();
        assert_eq!(date.attr("type"), Some("distribution"));
    }

    #[test]
    fn test_development_date_is_typed_developed() {
        let parent = write(&[event(json!({
            "type": "development",
            "date": [{"value": "2024-01-01"}]
        }))]);
        let origin = parent.first_named("originInfo").unwrap();
        let date = origin.first_named("dateOther").unwrap();
        assert_eq!(date.attr("type"), Some("developed"));
    }

    #[test]
    fn test_place_text_and_code_terms() {
        let parent = write(&[event(json!({
            "type": "publication",
            "location": [{
                "value": "London",
                "code": "enk",
                "source": {"code": "marccountry"}
            }]
        }))]);
        let place = parent
            .first_named("originInfo")
            .unwrap()
            .first_named("place")
            .unwrap();
        let terms: Vec<_> = place.elements_named("placeTerm").collect();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].attr("type"), Some("text"));
        assert_eq!(terms[0].text_content(), "London");
        assert_eq!(terms[1].attr("type"), Some("code"));
        assert_eq!(terms[1].text_content(), "enk");
        assert_eq!(terms[1].attr("authority"), Some("marccountry"));
    }

    #[test]
    fn test_positional_zipping_never_crosses_groups() {
        // Parallel locations [A1, A2] and parallel dates [B1, B2] must
        // emit exactly two originInfo: (A1, B1) and (A2, B2).
        let parent = write(&[event(json!({
            "type": "publication",
            "location": [{
                "parallelValue": [
                    {"value": "Moskva", "valueLanguage": {"code": "rus", "valueScript": {"code": "Latn"}}},
                    {"value": "Москва", "valueLanguage": {"code": "rus", "valueScript": {"code": "Cyrl"}}}
                ]
            }],
            "date": [{
                "parallelValue": [
                    {"value": "1905a"},
                    {"value": "1905b"}
                ]
            }]
        }))]);
        let origins: Vec<_> = parent.elements_named("originInfo").collect();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0].attr("altRepGroup"), origins[1].attr("altRepGroup"));

        let first_place = origins[0].first_named("place").unwrap();
        assert_eq!(
            first_place.first_named("placeTerm").unwrap().text_content(),
            "Moskva"
        );
        assert_eq!(
            origins[0].first_named("dateIssued").unwrap().text_content(),
            "1905a"
        );
        assert_eq!(
            origins[1].first_named("dateIssued").unwrap().text_content(),
            "1905b"
        );
        assert_eq!(origins[0].attr("script"), Some("Latn"));
        assert_eq!(origins[1].attr("script"), Some("Cyrl"));
    }

    #[test]
    fn test_non_parallel_merge_prefers_english_or_latin_group() {
        let parent = write(&[event(json!({
            "type": "publication",
            "location": [{
                "parallelValue": [
                    {"value": "Kyoto", "valueLanguage": {"code": "eng", "valueScript": {"code": "Latn"}}},
                    {"value": "京都", "valueLanguage": {"code": "jpn", "valueScript": {"code": "Hani"}}}
                ]
            }],
            "date": [{"value": "1965"}]
        }))]);
        let origins: Vec<_> = parent.elements_named("originInfo").collect();
        assert_eq!(origins.len(), 2);
        // The non-parallel date lands only in the eng/Latn group.
        assert!(origins[0].first_named("dateIssued").is_some());
        assert!(origins[1].first_named("dateIssued").is_none());
    }

    #[test]
    fn test_non_parallel_merge_falls_back_to_every_group() {
        let parent = write(&[event(json!({
            "type": "publication",
            "location": [{
                "parallelValue": [
                    {"value": "京都", "valueLanguage": {"code": "jpn", "valueScript": {"code": "Hani"}}},
                    {"value": "キョウト", "valueLanguage": {"code": "jpn", "valueScript": {"code": "Kana"}}}
                ]
            }],
            "date": [{"value": "1965"}]
        }))]);
        let origins: Vec<_> = parent.elements_named("originInfo").collect();
        assert_eq!(origins.len(), 2);
        // No eng/Latn group exists: the date joins both.
        assert!(origins[0].first_named("dateIssued").is_some());
        assert!(origins[1].first_named("dateIssued").is_some());
    }

    #[test]
    fn test_parallel_publisher_carries_no_language_attrs() {
        let parent = write(&[event(json!({
            "type": "publication",
            "contributor": [{
                "name": [{
                    "parallelValue": [
                        {"value": "Tōkyō Shuppan", "valueLanguage": {"code": "jpn", "valueScript": {"code": "Latn"}}},
                        {"value": "東京出版", "valueLanguage": {"code": "jpn", "valueScript": {"code": "Hani"}}}
                    ]
                }]
            }]
        }))]);
        let origins: Vec<_> = parent.elements_named("originInfo").collect();
        assert_eq!(origins.len(), 2);
        let publisher = origins[0].first_named("publisher").unwrap();
        assert_eq!(publisher.attr("lang"), None);
        assert_eq!(publisher.attr("script"), None);
        assert_eq!(origins[0].attr("lang"), Some("jpn"));
    }

    #[test]
    fn test_parallel_edition_note_takes_type_from_parent_note() {
        let parent = write(&[event(json!({
            "type": "publication",
            "note": [{
                "type": "edition",
                "parallelValue": [
                    {"value": "2nd ed.", "valueLanguage": {"code": "eng", "valueScript": {"code": "Latn"}}},
                    {"value": "Изд. 2-е", "valueLanguage": {"code": "rus", "valueScript": {"code": "Cyrl"}}}
                ]
            }]
        }))]);
        let origins: Vec<_> = parent.elements_named("originInfo").collect();
        assert_eq!(origins.len(), 2);
        assert_eq!(
            origins[0].first_named("edition").unwrap().text_content(),
            "2nd ed."
        );
        assert_eq!(
            origins[1].first_named("edition").unwrap().text_content(),
            "Изд. 2-е"
        );
        assert_eq!(origins[1].attr("script"), Some("Cyrl"));
    }

    #[test]
    fn test_edition_note() {
        let parent = write(&[event(json!({
            "type": "publication",
            "note": [{"value": "2nd ed.", "type": "edition"}]
        }))]);
        let origin = parent.first_named("originInfo").unwrap();
        assert_eq!(origin.first_named("edition").unwrap().text_content(), "2nd ed.");
    }

    #[test]
    fn test_empty_event_emits_nothing() {
        let parent = write(&[event(json!({"type": "creation"}))]);
        assert!(parent.is_empty());
    }
}
