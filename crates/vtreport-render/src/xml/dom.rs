//! A minimal document tree for re-indenting XML.
//!
//! Only what pretty-printing needs is kept: element names, attributes as
//! written, text as written (entity references stay escaped), CDATA,
//! comments, processing instructions and the DOCTYPE. Whitespace-only text is
//! dropped while building the tree. Output goes through a quick-xml
//! [`Writer`]; the tree only decides where line breaks and indentation go.

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::ReportError;

const INDENT: &[u8] = b"  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Declaration {
    version: String,
    encoding: Option<String>,
    standalone: Option<String>,
}

impl Declaration {
    fn from_event(decl: &BytesDecl<'_>) -> Result<Self, ReportError> {
        let version = decl.version().map_err(parser_error)?;
        let encoding = decl.encoding().transpose().map_err(parser_error)?;
        let standalone = decl.standalone().transpose().map_err(parser_error)?;
        Ok(Self {
            version: lossy(&version),
            encoding: encoding.map(|e| lossy(&e)),
            standalone: standalone.map(|s| lossy(&s)),
        })
    }

    fn event(&self) -> Event<'_> {
        Event::Decl(BytesDecl::new(
            &self.version,
            self.encoding.as_deref(),
            self.standalone.as_deref(),
        ))
    }
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: None,
            standalone: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
    Pi(String),
    DocType(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    fn from_event(start: &BytesStart<'_>) -> Result<Self, ReportError> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| ReportError::Parser(e.to_string()))?;
            attributes.push((lossy(attr.key.as_ref()), quoted_value(&attr.value)));
        }
        Ok(Self {
            name: lossy(start.name().as_ref()),
            attributes,
            children: Vec::new(),
        })
    }

    /// Only text and CDATA children: rendered on one line.
    fn is_text_only(&self) -> bool {
        self.children
            .iter()
            .all(|c| matches!(c, Node::Text(_) | Node::CData(_)))
    }

    /// Text mixed with other nodes: rendered without added whitespace.
    fn has_mixed_content(&self) -> bool {
        self.children.iter().any(|c| matches!(c, Node::Text(_)))
    }

    /// Start tag with the attributes as written; values are already escaped.
    fn start(&self) -> BytesStart<'_> {
        let mut start = BytesStart::new(self.name.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_bytes(), value.as_bytes()));
        }
        start
    }

    fn end(&self) -> BytesEnd<'_> {
        BytesEnd::new(self.name.as_str())
    }

    fn write_pretty(&self, printer: &mut Printer, depth: usize) -> Result<(), ReportError> {
        printer.indent(depth);
        if self.children.is_empty() {
            printer.write(Event::Empty(self.start()))?;
        } else if self.is_text_only() || self.has_mixed_content() {
            self.write_inline(printer)?;
        } else {
            printer.write(Event::Start(self.start()))?;
            printer.line_break();
            for child in &self.children {
                child.write_pretty(printer, depth + 1)?;
            }
            printer.indent(depth);
            printer.write(Event::End(self.end()))?;
        }
        printer.line_break();
        Ok(())
    }

    fn write_inline(&self, printer: &mut Printer) -> Result<(), ReportError> {
        if self.children.is_empty() {
            return printer.write(Event::Empty(self.start()));
        }
        printer.write(Event::Start(self.start()))?;
        for child in &self.children {
            child.write_inline(printer)?;
        }
        printer.write(Event::End(self.end()))
    }
}

impl Node {
    fn write_pretty(&self, printer: &mut Printer, depth: usize) -> Result<(), ReportError> {
        match self {
            Node::Element(element) => element.write_pretty(printer, depth),
            other => {
                printer.indent(depth);
                other.write_inline(printer)?;
                printer.line_break();
                Ok(())
            }
        }
    }

    fn write_inline(&self, printer: &mut Printer) -> Result<(), ReportError> {
        let event = match self {
            Node::Element(element) => return element.write_inline(printer),
            Node::Text(text) => Event::Text(BytesText::from_escaped(text.as_str())),
            Node::CData(text) => Event::CData(BytesCData::new(text.as_str())),
            Node::Comment(text) => Event::Comment(BytesText::from_escaped(text.as_str())),
            Node::Pi(text) => Event::PI(BytesPI::new(text.as_str())),
            Node::DocType(text) => Event::DocType(BytesText::from_escaped(text.trim())),
        };
        printer.write(event)
    }
}

/// A quick-xml writer plus the line layout the tree asks for.
struct Printer {
    writer: Writer<Vec<u8>>,
}

impl Printer {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), ReportError> {
        self.writer.write_event(event).map_err(parser_error)
    }

    fn indent(&mut self, depth: usize) {
        let out = self.writer.get_mut();
        for _ in 0..depth {
            out.extend_from_slice(INDENT);
        }
    }

    fn line_break(&mut self) {
        self.writer.get_mut().push(b'\n');
    }

    fn finish(self) -> Result<String, ReportError> {
        String::from_utf8(self.writer.into_inner()).map_err(parser_error)
    }
}

/// A parsed, well-formed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Document {
    declaration: Declaration,
    prolog: Vec<Node>,
    root: Element,
    epilog: Vec<Node>,
}

impl Document {
    /// Builds the tree. Expects input the validator has accepted.
    pub fn parse(text: &str) -> Result<Self, ReportError> {
        let mut reader = Reader::from_str(text);

        let mut declaration = None;
        let mut prolog = Vec::new();
        let mut epilog = Vec::new();
        let mut root = None;
        let mut stack: Vec<Element> = Vec::new();

        loop {
            let event = reader.read_event().map_err(parser_error)?;
            let node = match event {
                Event::Decl(decl) => {
                    declaration = Some(Declaration::from_event(&decl)?);
                    continue;
                }
                Event::Start(start) => {
                    stack.push(Element::from_event(&start)?);
                    continue;
                }
                Event::End(_) => match stack.pop() {
                    Some(element) => Node::Element(element),
                    None => return Err(ReportError::Parser("unbalanced end tag".to_string())),
                },
                Event::Empty(start) => Node::Element(Element::from_event(&start)?),
                Event::Text(content) => {
                    if content.iter().all(u8::is_ascii_whitespace) {
                        continue;
                    }
                    Node::Text(lossy(&content))
                }
                Event::CData(content) => Node::CData(lossy(&content)),
                Event::Comment(content) => Node::Comment(lossy(&content)),
                Event::PI(content) => Node::Pi(lossy(&content)),
                Event::DocType(content) => Node::DocType(lossy(&content)),
                Event::Eof => break,
            };

            match (stack.last_mut(), node) {
                (Some(parent), node) => parent.children.push(node),
                (None, Node::Element(element)) if root.is_none() => root = Some(element),
                (None, node) if root.is_none() => prolog.push(node),
                (None, node) => epilog.push(node),
            }
        }

        let root = root.ok_or_else(|| ReportError::Parser("no root element".to_string()))?;
        Ok(Self {
            declaration: declaration.unwrap_or_default(),
            prolog,
            root,
            epilog,
        })
    }

    /// Serializes with two spaces of indentation per nesting level.
    pub fn to_pretty_string(&self) -> Result<String, ReportError> {
        let mut printer = Printer::new();
        printer.write(self.declaration.event())?;
        printer.line_break();
        for node in &self.prolog {
            node.write_pretty(&mut printer, 0)?;
        }
        self.root.write_pretty(&mut printer, 0)?;
        for node in &self.epilog {
            node.write_pretty(&mut printer, 0)?;
        }
        printer.finish()
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Raw attribute value, made safe to re-emit between double quotes.
fn quoted_value(raw: &[u8]) -> String {
    lossy(raw).replace('"', "&quot;")
}

fn parser_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Parser(err.to_string())
}
