//! Flattening XML into structural events.
//!
//! An element becomes either one [`XmlEvent::Complete`] (no child elements)
//! or an [`XmlEvent::Open`] … [`XmlEvent::Close`] pair around its children.
//! Declarations, comments, processing instructions and the DOCTYPE produce no
//! events, and whitespace-only text is skipped. Text that sits next to child
//! elements has no event to carry it and is dropped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ReportError;

/// One unit of an XML document's tag structure.
///
/// `level` is the nesting depth, 1 for the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    /// Start of an element that has child elements.
    Open { tag: String, level: usize },
    /// An element without child elements. `value` is its text, if any.
    Complete {
        tag: String,
        attributes: Vec<(String, String)>,
        value: Option<String>,
        level: usize,
    },
    /// End of an element opened by [`XmlEvent::Open`].
    Close { tag: String, level: usize },
}

impl XmlEvent {
    pub fn tag(&self) -> &str {
        match self {
            XmlEvent::Open { tag, .. }
            | XmlEvent::Complete { tag, .. }
            | XmlEvent::Close { tag, .. } => tag,
        }
    }

    pub fn level(&self) -> usize {
        match self {
            XmlEvent::Open { level, .. }
            | XmlEvent::Complete { level, .. }
            | XmlEvent::Close { level, .. } => *level,
        }
    }
}

/// An element whose kind is not known until a child or its end tag shows up.
struct Pending {
    tag: String,
    attributes: Vec<(String, String)>,
    value: String,
    opened: bool,
    level: usize,
}

/// Tokenizes `text` into structural events.
///
/// # Example
///
/// ```rust
/// use vtreport_render::xml::{tokenize, XmlEvent};
///
/// let events = tokenize("<a><b>x</b></a>").unwrap();
/// assert_eq!(events.len(), 3);
/// assert_eq!(events[0], XmlEvent::Open { tag: "a".into(), level: 1 });
/// assert_eq!(events[1].level(), 2);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<XmlEvent>, ReportError> {
    let mut reader = Reader::from_str(text);
    let mut events = Vec::new();
    let mut stack: Vec<Pending> = Vec::new();

    loop {
        match reader.read_event().map_err(|e| ReportError::Parser(e.to_string()))? {
            Event::Start(start) => {
                open_parent(&mut stack, &mut events);
                let (tag, attributes) = tag_and_attributes(&start)?;
                let level = stack.len() + 1;
                stack.push(Pending {
                    tag,
                    attributes,
                    value: String::new(),
                    opened: false,
                    level,
                });
            }
            Event::Empty(start) => {
                open_parent(&mut stack, &mut events);
                let (tag, attributes) = tag_and_attributes(&start)?;
                events.push(XmlEvent::Complete {
                    tag,
                    attributes,
                    value: None,
                    level: stack.len() + 1,
                });
            }
            Event::Text(content) => {
                if !content.iter().all(u8::is_ascii_whitespace) {
                    append_value(&mut stack, &String::from_utf8_lossy(&content));
                }
            }
            Event::CData(content) => {
                append_value(&mut stack, &String::from_utf8_lossy(&content));
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ReportError::Parser("unbalanced end tag".to_string()))?;
                events.push(if element.opened {
                    XmlEvent::Close {
                        tag: element.tag,
                        level: element.level,
                    }
                } else {
                    XmlEvent::Complete {
                        tag: element.tag,
                        attributes: element.attributes,
                        value: (!element.value.is_empty()).then_some(element.value),
                        level: element.level,
                    }
                });
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(events)
}

/// The current element has a child, so it is emitted as `Open`.
fn open_parent(stack: &mut [Pending], events: &mut Vec<XmlEvent>) {
    if let Some(parent) = stack.last_mut() {
        if !parent.opened {
            parent.opened = true;
            events.push(XmlEvent::Open {
                tag: parent.tag.clone(),
                level: parent.level,
            });
        }
    }
}

fn append_value(stack: &mut [Pending], text: &str) {
    if let Some(current) = stack.last_mut() {
        if !current.opened {
            current.value.push_str(text);
        }
    }
}

fn tag_and_attributes(
    start: &BytesStart<'_>,
) -> Result<(String, Vec<(String, String)>), ReportError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let attributes = start
        .attributes()
        .map(|attr| {
            let attr = attr.map_err(|e| ReportError::Parser(e.to_string()))?;
            Ok((
                String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                String::from_utf8_lossy(&attr.value).into_owned(),
            ))
        })
        .collect::<Result<Vec<_>, ReportError>>()?;
    Ok((tag, attributes))
}
