//! Owned element tree over `quick-xml` events.
//!
//! E2B(R2) transmissions nest inconsistently in the wild, so the extractors
//! need "first matching descendant at any depth" lookups rather than reads at
//! a fixed depth. The event stream is materialized into a small tree once and
//! queried from there; documents are single-digit megabytes at worst.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{ParseError, Result};

/// One XML element: local tag name, accumulated character data, and child
/// elements in document order. Attributes and namespaces are not modeled;
/// E2B(R2) carries its payload in element text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn new(name: String) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Trimmed text content, `None` when empty. Absence and empty text are
    /// the same condition downstream.
    pub fn value(&self) -> Option<&str> {
        let text = self.text.trim();
        if text.is_empty() { None } else { Some(text) }
    }

    /// First element matching a `/`-separated path, or `None`.
    ///
    /// A plain path (`sender/sendertype`) matches a direct-child chain; a
    /// `.//` prefix lets the first step match at any depth below this
    /// element. Matches are resolved in document order and absent paths are
    /// never an error.
    pub fn find_first(&self, path: &str) -> Option<&XmlElement> {
        if let Some(rest) = path.strip_prefix(".//") {
            let steps: Vec<&str> = rest.split('/').collect();
            self.find_any_depth(&steps)
        } else {
            let steps: Vec<&str> = path.split('/').collect();
            self.find_children(&steps)
        }
    }

    /// Trimmed text of the first element matching `path`, `None` when the
    /// path is absent or the element holds no text.
    pub fn text_at(&self, path: &str) -> Option<&str> {
        self.find_first(path).and_then(XmlElement::value)
    }

    /// Owned copy of [`Self::text_at`], the shape the extractors store.
    pub fn text_of(&self, path: &str) -> Option<String> {
        self.text_at(path).map(str::to_string)
    }

    /// All descendants with the given tag name, any depth, document order.
    /// The element itself is not considered.
    pub fn descendants<'a>(&'a self, tag: &str) -> Vec<&'a XmlElement> {
        let mut found = Vec::new();
        self.collect_descendants(tag, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, tag: &str, found: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            if child.name == tag {
                found.push(child);
            }
            child.collect_descendants(tag, found);
        }
    }

    fn find_children(&self, steps: &[&str]) -> Option<&XmlElement> {
        let (first, rest) = steps.split_first()?;
        for child in self.children.iter().filter(|child| child.name == *first) {
            if rest.is_empty() {
                return Some(child);
            }
            if let Some(found) = child.find_children(rest) {
                return Some(found);
            }
        }
        None
    }

    fn find_any_depth(&self, steps: &[&str]) -> Option<&XmlElement> {
        for child in &self.children {
            if child.name == steps[0] {
                if steps.len() == 1 {
                    return Some(child);
                }
                if let Some(found) = child.find_children(&steps[1..]) {
                    return Some(found);
                }
            }
            if let Some(found) = child.find_any_depth(steps) {
                return Some(found);
            }
        }
        None
    }
}

/// Parse XML text into its root element.
///
/// Any well-formedness problem is fatal: mismatched or unclosed tags, text
/// outside the root, or an empty document all abort with [`ParseError`] and
/// no partial tree.
pub fn parse_tree(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if root.is_some() && stack.is_empty() {
                    return Err(ParseError::MalformedDocument(
                        "multiple root elements".to_string(),
                    ));
                }
                stack.push(XmlElement::new(local_name(start.local_name().as_ref())));
            }
            Event::Empty(start) => {
                let element = XmlElement::new(local_name(start.local_name().as_ref()));
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    ParseError::MalformedDocument(format!(
                        "unexpected closing tag </{}>",
                        local_name(end.local_name().as_ref())
                    ))
                })?;
                let closing = local_name(end.local_name().as_ref());
                if element.name != closing {
                    return Err(ParseError::MalformedDocument(format!(
                        "expected </{}>, found </{closing}>",
                        element.name
                    )));
                }
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let value = text.xml_content().map_err(quick_xml::Error::from)?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&value);
                } else if !value.trim().is_empty() {
                    return Err(ParseError::MalformedDocument(
                        "text outside of root element".to_string(),
                    ));
                }
            }
            Event::CData(cdata) => {
                let value = String::from_utf8_lossy(cdata.as_ref()).into_owned();
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&value);
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctype
            // carry no case data.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::MalformedDocument(format!(
            "unclosed element <{}>",
            open.name
        )));
    }
    root.ok_or_else(|| ParseError::MalformedDocument("no root element".to_string()))
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_some() {
        return Err(ParseError::MalformedDocument(
            "multiple root elements".to_string(),
        ));
    } else {
        *root = Some(element);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(xml: &str) -> XmlElement {
        parse_tree(xml).expect("well-formed XML")
    }

    #[test]
    fn reads_direct_child_text() {
        let root = tree("<report><id>CASE001</id></report>");
        assert_eq!(root.text_at("id"), Some("CASE001"));
    }

    #[test]
    fn missing_path_is_absent_not_an_error() {
        let root = tree("<report><id>CASE001</id></report>");
        assert_eq!(root.text_at("version"), None);
        assert_eq!(root.text_at(".//deeply/nested"), None);
    }

    #[test]
    fn empty_element_text_is_absent() {
        let root = tree("<report><id></id><blank/></report>");
        assert_eq!(root.text_at("id"), None);
        assert_eq!(root.text_at("blank"), None);
    }

    #[test]
    fn whitespace_only_text_is_absent() {
        let root = tree("<report><id>\n  </id></report>");
        assert_eq!(root.text_at("id"), None);
    }

    #[test]
    fn any_depth_prefix_searches_below_fixed_nesting() {
        let root = tree(
            "<report><wrapper><sender><sendertype>2</sendertype></sender></wrapper></report>",
        );
        assert_eq!(root.text_at(".//sender/sendertype"), Some("2"));
        assert_eq!(root.text_at("sender/sendertype"), None);
    }

    #[test]
    fn descendants_are_document_ordered() {
        let root = tree(
            "<patient><drug><n>a</n></drug><wrap><drug><n>b</n></drug></wrap><drug><n>c</n></drug></patient>",
        );
        let names: Vec<_> = root
            .descendants("drug")
            .iter()
            .map(|drug| drug.text_at("n").unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn cdata_is_read_as_text() {
        let root = tree("<report><narrative><![CDATA[Patient <3 weeks]]></narrative></report>");
        assert_eq!(root.text_at("narrative"), Some("Patient <3 weeks"));
    }

    #[test]
    fn mismatched_tags_are_fatal() {
        assert!(parse_tree("<report><id>CASE001</report>").is_err());
        assert!(parse_tree("<report>").is_err());
        assert!(parse_tree("").is_err());
    }
}
