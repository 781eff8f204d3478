//! Language writer: `language` with text/code term pairs.
//!
//! One `language` element per input language, holding `languageTerm` pairs
//! (type `text` from the name, type `code` from the code) and `scriptTerm`
//! pairs from the script field. `objectPart` comes from `appliesTo` and
//! `usage` from a primary status. The same element shape serves
//! `languageOfCataloging` inside `recordInfo`, so the element builder is
//! shared with the admin-metadata writer.

use crate::models::Language;
use crate::write::attributes::authority_attrs_parts;
use crate::write::context::WriteContext;
use crate::xml::XmlElement;

/// Write all languages of one resource.
pub fn write_languages(
    parent: &mut XmlElement,
    languages: &[Language],
    _ctx: &mut WriteContext<'_>,
) {
    for language in languages {
        let el = language_element("language", language);
        // A status or appliesTo alone yields attributes but no terms;
        // an attribute-only wrapper is not worth emitting.
        if !el.children().is_empty() {
            parent.push(el);
        }
    }
}

/// Build one language element under the given tag. Also used for
/// `languageOfCataloging` in `recordInfo`.
pub fn language_element(tag: &str, language: &Language) -> XmlElement {
    let mut el = XmlElement::new(tag);
    if language.status.as_deref() == Some("primary") {
        el.set_attr("usage", "primary");
    }
    if let Some(part) = language
        .applies_to
        .first()
        .and_then(|a| a.value.as_deref())
    {
        el.set_attr("objectPart", part);
    }

    if let Some(value) = language.value.as_deref() {
        let term = el.child("languageTerm");
        term.set_attr("type", "text");
        term.set_attrs(authority_attrs_parts(
            language.uri.as_deref(),
            language.source.as_ref(),
        ));
        term.text(value);
    }
    if let Some(code) = language.code.as_deref() {
        let term = el.child("languageTerm");
        term.set_attr("type", "code");
        term.set_attrs(authority_attrs_parts(
            language.uri.as_deref(),
            language.source.as_ref(),
        ));
        term.text(code);
    }

    if let Some(script) = &language.script {
        if let Some(value) = script.value.as_deref() {
            let term = el.child("scriptTerm");
            term.set_attr("type", "text");
            term.set_attrs(authority_attrs_parts(None, script.source.as_ref()));
            term.text(value);
        }
        if let Some(code) = script.code.as_deref() {
            let term = el.child("scriptTerm");
            term.set_attr("type", "code");
            term.set_attrs(authority_attrs_parts(None, script.source.as_ref()));
            term.text(code);
        }
    }

    el
}
