//! Pretty-printing with a fallback for malformed input.

use crate::error::ReportError;

use super::dom::Document;
use super::validate::{XmlError, XmlValidator};

/// First line of the error report placed above malformed XML.
pub const ERROR_HEADER: &str = "<!-- There are XML syntax errors: -->";

/// Re-indents an XML document.
///
/// - Empty input is returned unchanged.
/// - Well-formed input is re-serialized with two spaces per nesting level.
/// - Malformed input is returned as written, optionally preceded by a comment
///   block listing every error (see [`display_errors`](Self::display_errors)).
///
/// # Example
///
/// ```rust
/// use vtreport_render::xml::XmlFormatter;
///
/// let formatted = XmlFormatter::new("<a><b>x</b></a>").format().unwrap();
/// assert_eq!(formatted, "<?xml version=\"1.0\"?>\n<a>\n  <b>x</b>\n</a>\n");
///
/// let broken = XmlFormatter::new("<a>").display_errors(true).format().unwrap();
/// assert!(broken.starts_with("<!-- There are XML syntax errors: -->\n"));
/// assert!(broken.ends_with("\n\n<a>"));
/// ```
#[derive(Debug)]
pub struct XmlFormatter<'a> {
    validator: XmlValidator<'a>,
    display_errors: bool,
}

impl<'a> XmlFormatter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            validator: XmlValidator::new(text),
            display_errors: false,
        }
    }

    /// Whether malformed input is annotated with its errors.
    pub fn display_errors(mut self, display: bool) -> Self {
        self.display_errors = display;
        self
    }

    pub fn text(&self) -> &'a str {
        self.validator.text()
    }

    pub fn is_valid(&self) -> bool {
        self.validator.is_valid()
    }

    pub fn errors(&self) -> &[XmlError] {
        self.validator.errors()
    }

    /// Produces the display text.
    ///
    /// Fails only with [`ReportError::Parser`], when a document the validator
    /// accepted cannot be rebuilt.
    pub fn format(&self) -> Result<String, ReportError> {
        let text = self.text();
        if text.is_empty() {
            return Ok(String::new());
        }

        if self.is_valid() {
            return Document::parse(text)?.to_pretty_string();
        }

        if self.display_errors {
            Ok(error_report(self.errors(), text))
        } else {
            tracing::debug!("malformed XML passed through unformatted");
            Ok(text.to_string())
        }
    }
}

/// Builds the comment block listing `errors`, followed by the raw `text`.
pub fn error_report(errors: &[XmlError], text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 64 * (errors.len() + 1));
    out.push_str(ERROR_HEADER);
    out.push('\n');
    for (i, error) in errors.iter().enumerate() {
        out.push_str(&format!(
            "    <!-- #{} on {}:{} - `{}` -->\n",
            i + 1,
            error.line,
            error.column,
            error.message.trim()
        ));
    }
    out.push('\n');
    out.push_str(text);
    out
}
