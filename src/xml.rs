//! In-memory XML element tree for MODS output.
//!
//! Writers build an [`XmlElement`] tree (ordered attributes, ordered
//! children) and the caller serializes it with [`XmlElement::to_xml`],
//! which drives a `quick-xml` event writer. The tree exists so that
//! writers can append children at any nesting depth without owning the
//! serialization order, and so tests can assert on structure instead of
//! string output.
//!
//! Content comes in three kinds:
//!
//! - [`XmlContent::Element`] - a nested element
//! - [`XmlContent::Text`] - character data, escaped on serialization
//! - [`XmlContent::Raw`] - pre-escaped markup written through verbatim
//!   (used to keep literal `<i>`/`</i>` runs inside notes)

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{XmlError, XmlResult};

/// A single node in the output tree.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlContent {
    /// Nested child element.
    Element(XmlElement),
    /// Character data (escaped when serialized).
    Text(String),
    /// Pre-escaped markup emitted verbatim.
    Raw(String),
}

/// An XML element with ordered attributes and mixed-content children.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlContent>,
}

impl XmlElement {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Element tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute. Empty values are dropped - MODS consumers treat
    /// an empty attribute as bad data, so absence always wins.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.attributes.push((name.into(), value));
    }

    /// Set an attribute only when the value is present (and non-empty).
    pub fn set_attr_opt(&mut self, name: impl Into<String>, value: Option<&str>) {
        if let Some(value) = value {
            self.set_attr(name, value);
        }
    }

    /// Set a batch of attributes, preserving order.
    pub fn set_attrs<N, V>(&mut self, attrs: impl IntoIterator<Item = (N, V)>)
    where
        N: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attrs {
            self.set_attr(name, value);
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Append a child element and return a mutable reference to it.
    pub fn child(&mut self, name: impl Into<String>) -> &mut XmlElement {
        self.children.push(XmlContent::Element(XmlElement::new(name)));
        match self.children.last_mut() {
            Some(XmlContent::Element(el)) => el,
            _ => unreachable!("child element was just pushed"),
        }
    }

    /// Append an already-built child element.
    pub fn push(&mut self, element: XmlElement) {
        self.children.push(XmlContent::Element(element));
    }

    /// Append a text node.
    pub fn text(&mut self, text: impl Into<String>) {
        self.children.push(XmlContent::Text(text.into()));
    }

    /// Append pre-escaped markup that must survive serialization verbatim.
    pub fn raw(&mut self, markup: impl Into<String>) {
        self.children.push(XmlContent::Raw(markup.into()));
    }

    /// True when the element carries neither attributes nor children.
    /// Writers use this to avoid emitting empty wrapper elements.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }

    /// All children, in document order.
    pub fn children(&self) -> &[XmlContent] {
        &self.children
    }

    /// Element children only, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|c| match c {
            XmlContent::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Element children with the given tag name.
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |el| el.name == name)
    }

    /// First element child with the given tag name. The result borrows
    /// only from `self`, not from `name`.
    pub fn first_named(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|el| el.name == name)
    }

    /// Concatenated text content of this element (direct text/raw children).
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                XmlContent::Text(t) | XmlContent::Raw(t) => out.push_str(t),
                XmlContent::Element(_) => {}
            }
        }
        out
    }

    /// Serialize this element (and its subtree) to a string.
    pub fn to_xml(&self) -> XmlResult<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_into(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(|e| XmlError::Encoding(e.to_string()))
    }

    fn write_into(&self, writer: &mut Writer<Vec<u8>>) -> XmlResult<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                XmlContent::Element(el) => el.write_into(writer)?,
                XmlContent::Text(t) => {
                    writer.write_event(Event::Text(BytesText::new(t)))?;
                }
                XmlContent::Raw(t) => {
                    writer.write_event(Event::Text(BytesText::from_escaped(t.as_str())))?;
                }
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}
