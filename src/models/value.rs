//! The universal Cocina value variant and its close relatives.
//!
//! [`DescriptiveValue`] is the workhorse of the whole input tree: titles,
//! names, dates, notes, subjects and identifiers are all instances of it.
//! Exactly one of `value` / `structuredValue` / `parallelValue` /
//! `groupedValue` is populated per node; writers dispatch on that via
//! [`DescriptiveValue::shape`], which exposes the four shapes as a sum
//! type so the dispatch is an exhaustive match.

use serde::{Deserialize, Serialize};

/// Authority/source attribution for a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Code for the source vocabulary (e.g. "lcsh", "marcrelator").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// URI of the source vocabulary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Free-text source name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Version of the source vocabulary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Script of a value's language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    /// ISO 15924 script code (e.g. "Latn", "Cyrl").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

/// Language (and script) of one value rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueLanguage {
    /// Language code (e.g. "eng", "rus").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_script: Option<Script>,
}

/// The four content shapes a value node can carry. Borrowed views; the
/// underlying node owns the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// A single plain string.
    Plain(&'a str),
    /// One logical value decomposed into ordered, typed sub-parts.
    Structured(&'a [DescriptiveValue]),
    /// Multiple equivalent renderings (language/script variants) of one
    /// logical value.
    Parallel(&'a [DescriptiveValue]),
    /// Distinct-but-related sub-values (e.g. a name plus its pseudonym).
    Grouped(&'a [DescriptiveValue]),
}

/// The universal descriptive value node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveValue {
    /// Plain string content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Ordered, typed sub-parts of one logical value.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub structured_value: Vec<DescriptiveValue>,
    /// Ordered language/script variants of one logical value.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parallel_value: Vec<DescriptiveValue>,
    /// Ordered, semantically distinct parts.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub grouped_value: Vec<DescriptiveValue>,

    /// Semantic type of the value (vocabulary depends on context).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Status, most importantly "primary".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Code counterpart of `value` (e.g. a MARC relator code on a role).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// URI identifying this value in its authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Display label carried through to the output element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    /// Date qualifier ("approximate", "inferred", "questionable").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    /// Date encoding (e.g. code "w3cdtf").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Source>,
    /// Standard governing a transliteration (e.g. ALA-LC romanization).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_language: Option<ValueLanguage>,
    /// Notes attached to this value.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub note: Vec<DescriptiveValue>,
    /// Identifiers attached to this value.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub identifier: Vec<DescriptiveValue>,
    /// Parts of the resource this value applies to.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub applies_to: Vec<DescriptiveValue>,
}

impl DescriptiveValue {
    /// Content shape of this node. `None` means the node carries no
    /// content at all and is treated as absent (absence is not an error).
    pub fn shape(&self) -> Option<Shape<'_>> {
        if !self.parallel_value.is_empty() {
            Some(Shape::Parallel(&self.parallel_value))
        } else if !self.structured_value.is_empty() {
            Some(Shape::Structured(&self.structured_value))
        } else if !self.grouped_value.is_empty() {
            Some(Shape::Grouped(&self.grouped_value))
        } else {
            self.value.as_deref().map(Shape::Plain)
        }
    }

    /// Whether this value is marked primary.
    pub fn is_primary(&self) -> bool {
        self.status.as_deref() == Some("primary")
    }

    /// Whether this value carries language/script variants.
    pub fn is_parallel(&self) -> bool {
        !self.parallel_value.is_empty()
    }

    /// Whether the type matches (exact comparison).
    pub fn type_is(&self, value_type: &str) -> bool {
        self.value_type.as_deref() == Some(value_type)
    }

    /// First note of the given type, if any.
    pub fn note_of_type(&self, note_type: &str) -> Option<&DescriptiveValue> {
        self.note.iter().find(|n| n.type_is(note_type))
    }

    /// Language code from `valueLanguage`, if any.
    pub fn language_code(&self) -> Option<&str> {
        self.value_language.as_ref()?.code.as_deref()
    }

    /// Script code from `valueLanguage.valueScript`, if any.
    pub fn script_code(&self) -> Option<&str> {
        self.value_language.as_ref()?.value_script.as_ref()?.code.as_deref()
    }
}

/// A contributor (agent) with one or more name renderings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    /// Name renderings - normally a singleton unless parallel/translated
    /// forms coexist.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub name: Vec<DescriptiveValue>,
    /// Cocina contributor type (person, organization, conference, family,
    /// event).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Roles; `value` is the role text, `code` the role code.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub role: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub note: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub identifier: Vec<DescriptiveValue>,
}

impl Contributor {
    /// The primary name entry (first in the list).
    pub fn primary_name(&self) -> Option<&DescriptiveValue> {
        self.name.first()
    }

    /// Whether this contributor is marked primary.
    pub fn is_primary(&self) -> bool {
        self.status.as_deref() == Some("primary")
    }
}

/// An event in the life of the resource (creation, publication, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub date: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub location: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub contributor: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub note: Vec<DescriptiveValue>,
}
