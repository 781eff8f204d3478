//! Role emission and contributor-role filtering.
//!
//! A role emits up to two `roleTerm` nodes inside one `role` wrapper: a
//! `type="text"` term from the role value and a `type="code"` term from
//! the role code. Some ingested vocabularies encode role information with
//! no valid MODS rendering; those roles are suppressed entirely by
//! [`role_is_suppressed`] before this writer runs.

use crate::models::DescriptiveValue;
use crate::vocab::{is_mods_name_type, CONFERENCE_ROLE, UNMAPPABLE_ROLE_SOURCES};
use crate::write::attributes::authority_attrs;
use crate::xml::XmlElement;

/// Whether a role must be dropped rather than mis-rendered.
///
/// Suppressed when the role text is "conference" (any case), or when the
/// role comes from one of the non-exportable vocabularies and the owning
/// contributor's type has a recognized MODS name type.
pub fn role_is_suppressed(role: &DescriptiveValue, contributor_type: Option<&str>) -> bool {
    if role
        .value
        .as_deref()
        .is_some_and(|v| v.eq_ignore_ascii_case(CONFERENCE_ROLE))
    {
        return true;
    }

    let unmappable_source = role
        .source
        .as_ref()
        .and_then(|s| s.value.as_deref())
        .is_some_and(|v| UNMAPPABLE_ROLE_SOURCES.contains(&v));

    unmappable_source && contributor_type.is_some_and(is_mods_name_type)
}

/// Emit a `role` element for one role. Writes nothing when the role has
/// neither text nor code.
pub fn write_role(parent: &mut XmlElement, role: &DescriptiveValue) {
    let mut el = XmlElement::new("role");
    let attrs = authority_attrs(role);

    if let Some(text) = role.value.as_deref() {
        let term = el.child("roleTerm");
        term.set_attr("type", "text");
        term.set_attrs(attrs.clone());
        term.text(text);
    }
    if let Some(code) = role.code.as_deref() {
        let term = el.child("roleTerm");
        term.set_attr("type", "code");
        term.set_attrs(attrs);
        term.text(code);
    }

    if !el.is_empty() {
        parent.push(el);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn role(v: serde_json::Value) -> DescriptiveValue {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_text_and_code_emit_two_terms() {
        let mut parent = XmlElement::new("name");
        write_role(
            &mut parent,
            &role(json!({
                "value": "author",
                "code": "aut",
                "uri": "http://id.loc.gov/vocabulary/relators/aut",
                "source": {
                    "code": "marcrelator",
                    "uri": "http://id.loc.gov/vocabulary/relators/"
                }
            })),
        );

        let el = parent.first_named("role").unwrap();
        let terms: Vec<_> = el.elements_named("roleTerm").collect();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].attr("type"), Some("text"));
        assert_eq!(terms[0].text_content(), "author");
        assert_eq!(terms[0].attr("authority"), Some("marcrelator"));
        assert_eq!(
            terms[0].attr("valueURI"),
            Some("http://id.loc.gov/vocabulary/relators/aut")
        );
        assert_eq!(terms[1].attr("type"), Some("code"));
        assert_eq!(terms[1].text_content(), "aut");
    }

    #[test]
    fn test_text_only_emits_one_term() {
        let mut parent = XmlElement::new("name");
        write_role(&mut parent, &role(json!({"value": "illustrator"})));
        let el = parent.first_named("role").unwrap();
        assert_eq!(el.elements_named("roleTerm").count(), 1);
    }

    #[test]
    fn test_empty_role_emits_nothing() {
        let mut parent = XmlElement::new("name");
        write_role(&mut parent, &role(json!({"uri": "http://example.org/role"})));
        assert!(parent.is_empty());
    }

    #[test]
    fn test_conference_role_is_suppressed_case_insensitively() {
        assert!(role_is_suppressed(
            &role(json!({"value": "Conference"})),
            None
        ));
        assert!(role_is_suppressed(
            &role(json!({"value": "conference"})),
            Some("person")
        ));
    }

    #[test]
    fn test_self_deposit_role_suppressed_only_for_mods_name_types() {
        let r = role(json!({
            "value": "Publisher",
            "source": {"value": "Stanford self-deposit contributor types"}
        }));
        assert!(role_is_suppressed(&r, Some("person")));
        assert!(role_is_suppressed(&r, Some("organization")));
        // No contributor type: the vocabulary rule does not apply.
        assert!(!role_is_suppressed(&r, None));
        assert!(!role_is_suppressed(&r, Some("unspecified others")));
    }

    #[test]
    fn test_ordinary_role_is_not_suppressed() {
        assert!(!role_is_suppressed(
            &role(json!({"value": "author", "source": {"code": "marcrelator"}})),
            Some("person")
        ));
    }
}
