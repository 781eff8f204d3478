//! Canonical vocabulary tables shared by the write and parse directions.
//!
//! Every fixed Cocina-type-to-MODS-tag mapping lives here, in one module,
//! so the two translation directions cannot drift independently. Inverse
//! tables are derived from the forward tables at initialization rather
//! than written out twice.
//!
//! The policy constants at the bottom (suppressed role sources, the
//! eng/Latn merge targets, the "this means abstract" sets) are deliberate
//! mapping decisions, not incidental implementation detail - keep them
//! named and in one place.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{VocabResult, VocabularyError};

// =============================================================================
// Name Types
// =============================================================================

/// Cocina contributor type -> MODS name type.
///
/// `event -> corporate` is a documented one-way mapping: MODS has no event
/// name type, so events round-trip back as organizations.
pub static NAME_TYPE_TO_MODS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("person", "personal"),
        ("organization", "corporate"),
        ("conference", "conference"),
        ("family", "family"),
        ("event", "corporate"),
    ])
});

/// MODS name type -> Cocina contributor type. Derived from
/// [`NAME_TYPE_TO_MODS`]; `corporate` is pinned to `organization` so the
/// one-way `event` entry never wins the inversion.
pub static NAME_TYPE_FROM_MODS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut inverse: HashMap<&'static str, &'static str> = NAME_TYPE_TO_MODS
        .iter()
        .filter(|(cocina, _)| **cocina != "event")
        .map(|(cocina, mods)| (*mods, *cocina))
        .collect();
    inverse.insert("corporate", "organization");
    inverse
});

/// Look up the MODS name type for a Cocina contributor type.
pub fn mods_name_type(cocina_type: &str) -> VocabResult<&'static str> {
    NAME_TYPE_TO_MODS
        .get(cocina_type)
        .copied()
        .ok_or_else(|| VocabularyError::UnknownNameType(cocina_type.to_string()))
}

/// Whether a Cocina contributor type has a MODS name type at all.
pub fn is_mods_name_type(cocina_type: &str) -> bool {
    NAME_TYPE_TO_MODS.contains_key(cocina_type)
}

// =============================================================================
// Name Part Types
// =============================================================================

/// Cocina structured-name sub-part type -> MODS namePart type attribute.
/// Untyped sub-parts emit an untyped namePart.
pub static NAME_PART_TYPE_TO_MODS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("forename", "given"),
        ("surname", "family"),
        ("term of address", "termsOfAddress"),
        ("life dates", "date"),
        ("activity dates", "date"),
    ])
});

// =============================================================================
// Title Part Types
// =============================================================================

/// Cocina structured-title sub-part type -> MODS titleInfo child tag.
pub static TITLE_PART_TO_MODS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("nonsorting characters", "nonSort"),
        ("main title", "title"),
        ("subtitle", "subTitle"),
        ("part name", "partName"),
        ("part number", "partNumber"),
    ])
});

/// Look up the titleInfo child tag for a structured-title sub-part type.
pub fn mods_title_part_tag(part_type: &str) -> VocabResult<&'static str> {
    TITLE_PART_TO_MODS
        .get(part_type)
        .copied()
        .ok_or_else(|| VocabularyError::UnknownTitlePartType(part_type.to_string()))
}

// =============================================================================
// Event Types and Date Tags
// =============================================================================

/// Cocina event type -> MODS originInfo eventType attribute.
pub static EVENT_TYPE_TO_MODS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("creation", "production"),
        ("production", "production"),
        ("publication", "publication"),
        ("distribution", "distribution"),
        ("manufacture", "manufacture"),
        ("capture", "capture"),
        ("copyright", "copyright notice"),
        ("development", "development"),
        ("validity", "validity"),
    ])
});

/// MODS eventType -> date element tag. Anything else is `dateOther`.
pub static DATE_TAG_FOR_EVENT: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("production", "dateCreated"),
        ("publication", "dateIssued"),
        ("copyright notice", "copyrightDate"),
        ("capture", "dateCaptured"),
        ("validity", "dateValid"),
    ])
});

/// Fallback date tag when the event type has no dedicated date element.
pub const DATE_OTHER_TAG: &str = "dateOther";

/// Resolve the MODS eventType for a Cocina event type, if mapped.
pub fn mods_event_type(cocina_type: &str) -> Option<&'static str> {
    EVENT_TYPE_TO_MODS.get(cocina_type).copied()
}

/// Resolve the date element tag for a MODS eventType.
pub fn date_tag(mods_event_type: &str) -> &'static str {
    DATE_TAG_FOR_EVENT
        .get(mods_event_type)
        .copied()
        .unwrap_or(DATE_OTHER_TAG)
}

// =============================================================================
// Identifier Types
// =============================================================================

/// Cocina identifier type -> MODS identifier type attribute.
pub static IDENTIFIER_TYPE_TO_MODS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ARK", "ark"),
        ("DOI", "doi"),
        ("Handle", "hdl"),
        ("ISBN", "isbn"),
        ("ISMN", "ismn"),
        ("ISRC", "isrc"),
        ("ISSN", "issn"),
        ("LCCN", "lccn"),
        ("OCLC", "oclc"),
        ("UPC", "upc"),
        ("URN", "urn"),
        ("accession number", "accession number"),
        ("local", "local"),
        ("matrix number", "matrix-number"),
        ("music publisher", "music-publisher"),
        ("stock number", "stock-number"),
        ("videorecording identifier", "videorecording-identifier"),
    ])
});

/// MODS identifier type used when the identifier value is itself a URI.
pub const URI_IDENTIFIER_TYPE: &str = "uri";

/// Resolve the MODS identifier type for a Cocina identifier type.
/// Unknown types pass through unchanged - identifiers are open-ended.
pub fn mods_identifier_type(cocina_type: &str) -> &str {
    IDENTIFIER_TYPE_TO_MODS
        .get(cocina_type)
        .copied()
        .unwrap_or(cocina_type)
}

// =============================================================================
// Related Resource Types
// =============================================================================

/// Cocina related-resource type -> MODS relatedItem type attribute.
pub static RELATED_RESOURCE_TYPE_TO_MODS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| {
        HashMap::from([
            ("part of", "host"),
            ("has part", "constituent"),
            ("preceded by", "preceding"),
            ("succeeded by", "succeeding"),
            ("other version", "otherVersion"),
            ("other format", "otherFormat"),
            ("referenced by", "isReferencedBy"),
            ("references", "references"),
            ("original version", "original"),
            ("in series", "series"),
            ("reviewed by", "reviewOf"),
        ])
    });

/// Look up the relatedItem type for a Cocina related-resource type.
pub fn mods_related_resource_type(cocina_type: &str) -> VocabResult<&'static str> {
    RELATED_RESOURCE_TYPE_TO_MODS
        .get(cocina_type)
        .copied()
        .ok_or_else(|| VocabularyError::UnknownRelatedResourceType(cocina_type.to_string()))
}

// =============================================================================
// Subject Topic Tags
// =============================================================================

/// Cocina subject type -> MODS topic-class tag. Types with structural
/// treatment (person, title, map coordinates, place-in-structured) are
/// handled by the subject writer itself.
pub static SUBJECT_TAG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("time", "temporal"),
        ("genre", "genre"),
        ("place", "geographic"),
        ("occupation", "occupation"),
    ])
});

/// Fallback subject child tag.
pub const SUBJECT_TOPIC_TAG: &str = "topic";

// =============================================================================
// Policy Constants
// =============================================================================

/// Role text that is never exported (MODS encodes conferences via the
/// name type, not a role).
pub const CONFERENCE_ROLE: &str = "conference";

/// Role vocabularies with no valid MODS representation. A role from one of
/// these sources is dropped when the owning contributor has a recognized
/// MODS name type.
pub const UNMAPPABLE_ROLE_SOURCES: [&str; 3] = [
    "Stanford self-deposit contributor types",
    "DataCite contributor types",
    "DataCite properties",
];

/// Note types that emit `abstract` (compared case-insensitively).
pub const ABSTRACT_NOTE_TYPES: [&str; 3] = ["abstract", "summary", "scope and content"];

/// Display labels that emit `abstract` (compared exactly).
pub const ABSTRACT_DISPLAY_LABELS: [&str; 4] = ["Abstract", "Summary", "Review", "Scope and content"];

/// Language code that attracts non-parallel values when merging parallel
/// event groups.
pub const ENGLISH_LANGUAGE_CODE: &str = "eng";

/// Script code that attracts non-parallel values when merging parallel
/// event groups.
pub const LATIN_SCRIPT_CODE: &str = "Latn";
