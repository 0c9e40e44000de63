//! Well-formedness checking with positioned errors.
//!
//! The validator never fails: a malformed document produces a list of
//! [`XmlError`]s and an empty list means the document is well-formed. Errors
//! are computed on first request and cached for the lifetime of the
//! [`XmlValidator`].

use std::collections::HashMap;
use std::fmt;

use once_cell::unsync::OnceCell;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::Reader;

/// A syntax error with a 1-based line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl XmlError {
    /// Creates an error located at byte `offset` of `source`.
    pub fn at(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let (line, column) = line_column(source, offset);
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Converts a byte offset to a 1-based (line, column) pair.
///
/// Columns count characters, not bytes. Offsets past the end clamp to the end.
pub fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let bytes = &source.as_bytes()[..offset];

    let line = 1 + bytes.iter().filter(|&&b| b == b'\n').count();
    let line_start = bytes
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |pos| pos + 1);
    let column = 1 + source
        .get(line_start..offset)
        .map_or(offset - line_start, |s| s.chars().count());

    (line, column)
}

/// Lazily validates one XML string.
///
/// # Example
///
/// ```rust
/// use vtreport_render::xml::XmlValidator;
///
/// let validator = XmlValidator::new("<a><b></a>");
/// assert!(!validator.is_valid());
/// assert_eq!(validator.errors()[0].line, 1);
///
/// assert!(XmlValidator::new("<a><b/></a>").is_valid());
/// ```
#[derive(Debug)]
pub struct XmlValidator<'a> {
    text: &'a str,
    errors: OnceCell<Vec<XmlError>>,
}

impl<'a> XmlValidator<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            errors: OnceCell::new(),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the syntax errors, computing them on first call.
    pub fn errors(&self) -> &[XmlError] {
        self.errors.get_or_init(|| validate(self.text))
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

/// Entities declared in a DOCTYPE internal subset, by name.
type Entities = HashMap<String, String>;

/// Checks `text` for well-formedness.
///
/// Scanning stops at the first error that leaves the tokenizer without a
/// reliable position (broken markup, invalid element names, mismatched end
/// tags, content after the root). Problems inside an otherwise readable tag,
/// such as a bad encoding name or an undefined entity, are recorded and
/// scanning continues.
pub fn validate(text: &str) -> Vec<XmlError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().check_comments = true;

    let mut errors = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut entities = Entities::new();
    let mut root_seen = false;
    let mut doctype_seen = false;
    let mut first = true;

    loop {
        let start = reader.buffer_position() as usize;
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => {
                let offset = reader.error_position() as usize;
                errors.push(XmlError::at(text, offset, err.to_string()));
                break;
            }
        };
        let at_document_start = std::mem::replace(&mut first, false);

        match event {
            Event::Decl(decl) => {
                if !at_document_start {
                    errors.push(XmlError::at(
                        text,
                        start,
                        "XML declaration allowed only at the start of the document",
                    ));
                }
                if let Some((field, problem)) = declaration_problem(&decl) {
                    let end = reader.buffer_position() as usize;
                    let offset = text
                        .get(start..end)
                        .and_then(|decl| decl.find(field))
                        .map_or(start, |i| start + i);
                    errors.push(XmlError::at(text, offset, problem));
                }
            }
            Event::DocType(doctype) => {
                if root_seen || doctype_seen {
                    errors.push(XmlError::at(
                        text,
                        start,
                        "DOCTYPE is only allowed once, before the root element",
                    ));
                }
                doctype_seen = true;
                entities.extend(declared_entities(&String::from_utf8_lossy(&doctype)));
            }
            Event::Start(element) | Event::Empty(element) if !is_name(element.name().as_ref()) => {
                errors.push(XmlError::at(text, start, "StartTag: invalid element name"));
                break;
            }
            Event::Start(element) | Event::Empty(element) if open.is_empty() && root_seen => {
                let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                errors.push(XmlError::at(
                    text,
                    start,
                    format!("Extra content at the end of the document: <{}>", name),
                ));
                break;
            }
            Event::Start(element) => {
                errors.extend(
                    element_problems(&element, &entities)
                        .into_iter()
                        .map(|m| XmlError::at(text, start, m)),
                );
                root_seen = true;
                open.push(String::from_utf8_lossy(element.name().as_ref()).into_owned());
            }
            Event::Empty(element) => {
                errors.extend(
                    element_problems(&element, &entities)
                        .into_iter()
                        .map(|m| XmlError::at(text, start, m)),
                );
                root_seen = true;
            }
            Event::End(_) => {
                open.pop();
            }
            Event::Text(content) => {
                if open.is_empty() {
                    if !is_blank(&content) {
                        let message = if root_seen {
                            "Extra content at the end of the document"
                        } else {
                            "Start tag expected, '<' not found"
                        };
                        errors.push(XmlError::at(text, start, message));
                        break;
                    }
                    continue;
                }
                if content.windows(3).any(|w| w == b"]]>") {
                    errors.push(XmlError::at(
                        text,
                        start,
                        "Sequence ']]>' not allowed in content",
                    ));
                }
                if let Err(err) = content.unescape_with(|name| resolve_entity(&entities, name)) {
                    errors.push(XmlError::at(text, start, err.to_string()));
                }
            }
            Event::CData(_) if open.is_empty() => {
                errors.push(XmlError::at(
                    text,
                    start,
                    "CDATA section is not allowed outside the root element",
                ));
                break;
            }
            Event::Eof => {
                if let Some(name) = open.last() {
                    errors.push(XmlError::at(
                        text,
                        text.len(),
                        format!("Premature end of data in tag {}", name),
                    ));
                } else if !root_seen {
                    errors.push(XmlError::at(text, text.len(), "Document is empty"));
                }
                break;
            }
            _ => {}
        }
    }

    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "XML document is not well-formed");
    }
    errors
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

/// The offending pseudo-attribute and a message.
fn declaration_problem(decl: &BytesDecl) -> Option<(&'static str, String)> {
    match decl.version() {
        Ok(version) if !version.is_empty() => {}
        _ => {
            return Some((
                "version",
                "Malformed declaration expecting version".to_string(),
            ))
        }
    }

    match decl.encoding() {
        Some(Ok(encoding)) if !is_encoding_name(&encoding) => {
            return Some((
                "encoding",
                format!(
                    "Invalid XML encoding name '{}'",
                    String::from_utf8_lossy(&encoding)
                ),
            ))
        }
        Some(Err(err)) => {
            return Some((
                "encoding",
                format!("Malformed encoding in declaration: {}", err),
            ))
        }
        _ => {}
    }

    match decl.standalone() {
        Some(Ok(value)) if !matches!(value.as_ref(), b"yes" | b"no") => Some((
            "standalone",
            format!(
                "standalone accepts only 'yes' or 'no', not '{}'",
                String::from_utf8_lossy(&value)
            ),
        )),
        Some(Err(err)) => Some((
            "standalone",
            format!("Malformed standalone in declaration: {}", err),
        )),
        _ => None,
    }
}

/// `[A-Za-z] ([A-Za-z0-9._] | '-')*`
fn is_encoding_name(name: &[u8]) -> bool {
    match name.split_first() {
        Some((first, rest)) => {
            first.is_ascii_alphabetic()
                && rest
                    .iter()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
        }
        None => false,
    }
}

/// XML `Name`. Non-ASCII characters are accepted wholesale.
fn is_name(name: &[u8]) -> bool {
    let Ok(name) = std::str::from_utf8(name) else {
        return false;
    };
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => {
            chars.all(|c| is_name_start(c) || c.is_ascii_digit() || matches!(c, '-' | '.'))
        }
        _ => false,
    }
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | ':') || !c.is_ascii()
}

fn resolve_entity<'e>(entities: &'e Entities, name: &str) -> Option<&'e str> {
    match name {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "apos" => Some("'"),
        "quot" => Some("\""),
        _ => entities.get(name).map(String::as_str),
    }
}

/// General entities declared with `<!ENTITY name ...>` in a DOCTYPE.
///
/// Parameter entities are skipped. External entities map to an empty value.
fn declared_entities(doctype: &str) -> Entities {
    const MARKER: &str = "<!ENTITY";

    let mut entities = Entities::new();
    let mut rest = doctype;
    while let Some(at) = rest.find(MARKER) {
        rest = rest[at + MARKER.len()..].trim_start();
        if rest.starts_with('%') {
            continue;
        }
        let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (name, tail) = rest.split_at(name_end);
        let tail = tail.trim_start();
        let value = match tail.chars().next() {
            Some(quote @ ('"' | '\'')) => tail[1..].split(quote).next().unwrap_or_default(),
            _ => "",
        };
        entities.insert(name.to_string(), value.to_string());
        rest = tail;
    }
    entities
}

fn element_problems(element: &BytesStart<'_>, entities: &Entities) -> Vec<String> {
    let mut problems = Vec::new();
    for attr in element.attributes() {
        let attr = match attr {
            Ok(attr) => attr,
            Err(err) => {
                problems.push(err.to_string());
                continue;
            }
        };
        if !is_name(attr.key.as_ref()) {
            problems.push(format!(
                "Invalid attribute name '{}'",
                String::from_utf8_lossy(attr.key.as_ref())
            ));
        }
        if attr.value.contains(&b'<') {
            problems.push("Unescaped '<' not allowed in attribute values".to_string());
        }
        if let Err(err) = attr.unescape_value_with(|name| resolve_entity(entities, name)) {
            problems.push(err.to_string());
        }
    }
    problems
}
