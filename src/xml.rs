//! Owned XML element tree built from `quick-xml` events.
//!
//! WS2 documents are small, so the whole payload is read into a tree and the
//! entity mappers walk it. Namespace prefixes are dropped from element and
//! attribute names (`ext:score` is stored as `score`) and namespace
//! declarations are skipped.

use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::DecodeError;

/// One decoded element with its attributes, child elements and text content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    pub text: String,
}

impl XmlElement {
    /// Returns the value of an attribute by local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an attribute or an error naming the element.
    pub fn required_attr(&self, name: &str) -> Result<&str, DecodeError> {
        self.attr(name)
            .ok_or_else(|| DecodeError::MissingAttribute {
                element: self.name.clone(),
                attribute: name.to_string(),
            })
    }

    /// Parses a numeric attribute. Missing attributes yield `Ok(None)`.
    pub fn number_attr<T: FromStr>(&self, name: &str) -> Result<Option<T>, DecodeError> {
        let Some(raw) = self.attr(name) else {
            return Ok(None);
        };
        raw.trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| DecodeError::InvalidNumber {
                field: format!("{}@{}", self.name, name),
                value: raw.to_string(),
            })
    }

    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Items of a `<{item}-list>`-style wrapper child, empty when the wrapper is absent.
    pub fn list_items<'a>(&'a self, list: &str, item: &'a str) -> Vec<&'a XmlElement> {
        self.child(list)
            .map(|wrapper| wrapper.children_named(item).collect())
            .unwrap_or_default()
    }

    /// Text of a child element, `None` when the child is absent or empty.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name)
            .map(|child| child.text.trim())
            .filter(|text| !text.is_empty())
            .map(ToOwned::to_owned)
    }

    /// Text of a child element, empty when absent.
    pub fn child_text_or_default(&self, name: &str) -> String {
        self.child_text(name).unwrap_or_default()
    }

    /// Parses the text of a child element as a number.
    pub fn child_number<T: FromStr>(&self, name: &str) -> Result<Option<T>, DecodeError> {
        let Some(raw) = self.child_text(name) else {
            return Ok(None);
        };
        raw.parse::<T>()
            .map(Some)
            .map_err(|_| DecodeError::InvalidNumber {
                field: format!("{}/{}", self.name, name),
                value: raw,
            })
    }
}

fn local_name_string(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn start_element(start: &BytesStart<'_>) -> Result<XmlElement, DecodeError> {
    let mut element = XmlElement {
        name: local_name_string(start.local_name().as_ref()),
        ..XmlElement::default()
    };
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|err| DecodeError::Syntax(err.to_string()))?;
        if attribute.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = local_name_string(attribute.key.local_name().as_ref());
        let value = attribute
            .unescape_value()
            .map_err(|err| DecodeError::Syntax(err.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), DecodeError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(DecodeError::Syntax(format!(
            "second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

/// Parses a complete document and returns its root element.
///
/// Input that ends while elements are still open is rejected, so a truncated
/// body never produces a partial tree.
pub fn parse_document(input: &str) -> Result<XmlElement, DecodeError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(start_element(e)?),
            Ok(Event::Empty(ref e)) => {
                let element = start_element(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(ref e)) => {
                let Some(element) = stack.pop() else {
                    return Err(DecodeError::Syntax(format!(
                        "unexpected closing tag </{}>",
                        local_name_string(e.local_name().as_ref())
                    )));
                };
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(ref e)) => {
                if let Some(current) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .map_err(|err| DecodeError::Syntax(err.to_string()))?;
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(current) = stack.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(DecodeError::Syntax(err.to_string())),
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(DecodeError::Truncated(open.name.clone()));
    }
    root.ok_or(DecodeError::Empty)
}

#[cfg(test)]
mod tests {
    use super::parse_document;
    use crate::error::DecodeError;

    #[test]
    fn test_parse_strips_namespace_prefixes() {
        let root = parse_document(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0">
  <tag-list count="1" offset="0"><tag ext:score="100"><name>rock</name></tag></tag-list>
</metadata>"#,
        )
        .expect("document should parse");

        assert_eq!(root.name, "metadata");
        assert!(root.attributes.is_empty());
        let tag = &root.list_items("tag-list", "tag")[0];
        assert_eq!(tag.attr("score"), Some("100"));
        assert_eq!(tag.child_text("name").as_deref(), Some("rock"));
    }

    #[test]
    fn test_parse_unescapes_text_and_attributes() {
        let root = parse_document(
            r#"<artist name="A &amp; B"><name>Simon &amp; Garfunkel</name></artist>"#,
        )
        .expect("document should parse");
        assert_eq!(root.attr("name"), Some("A & B"));
        assert_eq!(root.child_text("name").as_deref(), Some("Simon & Garfunkel"));
    }

    #[test]
    fn test_parse_rejects_truncated_document() {
        let error = parse_document(r#"<metadata><artist-list count="2" offset="0"><artist id="a">"#)
            .expect_err("truncated input must fail");
        assert!(
            matches!(error, DecodeError::Truncated(_) | DecodeError::Syntax(_)),
            "unexpected error: {error:?}"
        );
    }

    #[test]
    fn test_parse_rejects_text_without_elements() {
        assert_eq!(
            parse_document("service unavailable").expect_err("no root element"),
            DecodeError::Empty
        );
    }

    #[test]
    fn test_parse_rejects_mismatched_tags() {
        assert!(parse_document("<a><b></a></b>").is_err());
    }

    #[test]
    fn test_number_helpers_report_field() {
        let root = parse_document(r#"<cdstub id="x"><track-list count="ten"/></cdstub>"#)
            .expect("document should parse");
        let track_list = root.child("track-list").expect("track-list present");
        let error = track_list
            .number_attr::<u32>("count")
            .expect_err("non-numeric count");
        assert_eq!(
            error,
            DecodeError::InvalidNumber {
                field: "track-list@count".to_string(),
                value: "ten".to_string(),
            }
        );
        assert_eq!(root.number_attr::<u32>("missing"), Ok(None));
    }
}
