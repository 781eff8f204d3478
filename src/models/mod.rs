//! Domain models: the Cocina descriptive-metadata input tree.
//!
//! These types mirror the normalized Cocina descriptive model. The tree is
//! owned by the caller, arrives already validated, and is never mutated by
//! the writers - everything here is read-and-emit.
//!
//! - [`DescriptiveResource`] - root; ordered collections of every concept
//! - [`DescriptiveValue`] - the universal value variant (see [`value`])
//! - [`Contributor`] / [`Event`] - agents and lifecycle events
//! - [`Language`] - a language of the resource content
//! - [`Access`] - locations, URLs and access contacts
//! - [`AdminMetadata`] - provenance of the metadata record itself
//! - [`RelatedResource`] - linked descriptions of other resources
//! - [`Geographic`] - geospatial forms and coordinate subjects

pub mod value;

pub use value::{Contributor, DescriptiveValue, Event, Script, Shape, Source, ValueLanguage};

use serde::{Deserialize, Serialize};

// =============================================================================
// Language
// =============================================================================

/// A language of the resource content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Language name (e.g. "English").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Language code (e.g. "eng").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Script of the language (value/code/source).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<DescriptiveValue>,
    /// Parts of the resource this language applies to.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub applies_to: Vec<DescriptiveValue>,
}

// =============================================================================
// Access / Location
// =============================================================================

/// Access and location information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Access {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub physical_location: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub access_contact: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub url: Vec<DescriptiveValue>,
}

impl Access {
    /// Whether nothing at all is populated.
    pub fn is_empty(&self) -> bool {
        self.physical_location.is_empty() && self.access_contact.is_empty() && self.url.is_empty()
    }
}

// =============================================================================
// Administrative Metadata
// =============================================================================

/// Provenance of the metadata record itself (not the resource).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMetadata {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub contributor: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub event: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub language: Vec<Language>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub note: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub identifier: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub metadata_standard: Vec<DescriptiveValue>,
}

// =============================================================================
// Related Resource
// =============================================================================

/// A description of a related resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedResource {
    /// Relationship type ("part of", "has part", ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub title: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub contributor: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub note: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub identifier: Vec<DescriptiveValue>,
    /// PURL of the related resource, when registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
}

// =============================================================================
// Geographic Metadata
// =============================================================================

/// Geospatial description: media types/formats plus coordinate subjects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geographic {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub form: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub subject: Vec<DescriptiveValue>,
}

// =============================================================================
// Descriptive Resource (root)
// =============================================================================

/// The root descriptive-metadata record for one resource.
///
/// Order within each collection is significant: the first title is
/// logically primary unless `status: primary` marks another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveResource {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub title: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub contributor: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub form: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub language: Vec<Language>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub note: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub subject: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub event: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub identifier: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_metadata: Option<AdminMetadata>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub related_resource: Vec<RelatedResource>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub geographic: Vec<Geographic>,
    /// PURL of this resource; drives Location and Geographic output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_from_json() {
        let resource: DescriptiveResource = serde_json::from_value(json!({
            "title": [{"value": "Hamlet"}],
            "contributor": [{
                "name": [{"value": "Shakespeare, William"}],
                "type": "person",
                "role": [{"value": "author", "code": "aut"}]
            }],
            "event": [{"type": "creation", "date": [{"value": "1600"}]}],
            "purl": "https://purl.example.org/bc123df4567"
        }))
        .unwrap();

        assert_eq!(resource.title.len(), 1);
        assert_eq!(
            resource.contributor[0].value_type.as_deref(),
            Some("person")
        );
        assert_eq!(resource.event[0].value_type.as_deref(), Some("creation"));
        assert!(resource.access.is_none());
    }

    #[test]
    fn test_empty_resource_deserializes() {
        let resource: DescriptiveResource = serde_json::from_value(json!({})).unwrap();
        assert!(resource.title.is_empty());
        assert!(resource.related_resource.is_empty());
    }

    #[test]
    fn test_access_is_empty() {
        let access = Access::default();
        assert!(access.is_empty());
        let access: Access = serde_json::from_value(json!({
            "url": [{"value": "https://example.org"}]
        }))
        .unwrap();
        assert!(!access.is_empty());
    }
}
