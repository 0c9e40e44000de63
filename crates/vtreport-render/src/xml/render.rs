//! Per-token XML coloring.

use crate::colorize::Colorizer;
use crate::config::XmlStyles;
use crate::error::ReportError;
use crate::style::StyleList;

use super::events::{tokenize, XmlEvent};

/// How `write_xml` colors a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlColorMode {
    /// Every tag, attribute and value gets its own style from
    /// [`XmlStyles`], one element per line.
    Structural,
    /// The formatted document is colored as one block.
    Block(StyleList),
}

/// Renders formatted XML one structural event per line.
///
/// Lines are indented by `level * 2` spaces for nested elements; the root
/// element's lines are not indented.
///
/// # Example
///
/// ```rust
/// use vtreport_render::xml::XmlColorizer;
/// use vtreport_render::{Colorizer, XmlStyles};
///
/// let colorizer = Colorizer::new(false);
/// let styles = XmlStyles::default();
/// let out = XmlColorizer::new(&colorizer, &styles).render("<a/>").unwrap();
/// assert_eq!(out, "\x1b[36m<\x1b[0m\x1b[36ma\x1b[0m\x1b[36m/>\x1b[0m\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct XmlColorizer<'a> {
    colorizer: &'a Colorizer,
    styles: &'a XmlStyles,
}

impl<'a> XmlColorizer<'a> {
    pub fn new(colorizer: &'a Colorizer, styles: &'a XmlStyles) -> Self {
        Self { colorizer, styles }
    }

    /// Tokenizes `formatted` and renders every event.
    pub fn render(&self, formatted: &str) -> Result<String, ReportError> {
        let events = tokenize(formatted)?;
        let mut out = String::new();
        for event in &events {
            out.push_str(&self.render_event(event));
            out.push('\n');
        }
        Ok(out)
    }

    /// Renders one event as an indented line without the line break.
    pub fn render_event(&self, event: &XmlEvent) -> String {
        let mut line = indent(event.level());
        match event {
            XmlEvent::Open { tag, .. } => {
                line.push_str(&self.open_tag(tag, ">"));
            }
            XmlEvent::Complete {
                tag,
                attributes,
                value: Some(value),
                ..
            } => {
                line.push_str(&self.paint("<", &self.styles.angle));
                line.push_str(&self.paint(tag, &self.styles.tag));
                for (name, attr_value) in attributes {
                    line.push(' ');
                    line.push_str(&self.attribute(name, attr_value));
                }
                line.push_str(&self.paint(">", &self.styles.angle));
                line.push_str(&self.paint(value, &self.styles.tag_value));
                line.push_str(&self.close_tag(tag));
            }
            XmlEvent::Complete {
                tag, value: None, ..
            } => {
                line.push_str(&self.open_tag(tag, "/>"));
            }
            XmlEvent::Close { tag, .. } => {
                line.push_str(&self.close_tag(tag));
            }
        }
        line
    }

    fn open_tag(&self, tag: &str, end: &str) -> String {
        let mut out = self.paint("<", &self.styles.angle);
        out.push_str(&self.paint(tag, &self.styles.tag));
        out.push_str(&self.paint(end, &self.styles.angle));
        out
    }

    fn close_tag(&self, tag: &str) -> String {
        let mut out = self.paint("</", &self.styles.angle);
        out.push_str(&self.paint(tag, &self.styles.tag));
        out.push_str(&self.paint(">", &self.styles.angle));
        out
    }

    fn attribute(&self, name: &str, value: &str) -> String {
        let mut out = self.paint(name, &self.styles.attribute);
        out.push_str(&self.paint("=", &self.styles.equal_sign));
        out.push_str(&self.paint(&format!("\"{}\"", value), &self.styles.attribute_value));
        out
    }

    fn paint(&self, text: &str, styles: &StyleList) -> String {
        self.colorizer.colorize_list(text, styles)
    }
}

fn indent(level: usize) -> String {
    if level > 1 {
        " ".repeat(level * 2)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_styles() -> XmlStyles {
        XmlStyles {
            angle: StyleList::new(),
            tag: StyleList::new(),
            tag_value: StyleList::new(),
            attribute: StyleList::new(),
            equal_sign: StyleList::new(),
            attribute_value: StyleList::new(),
        }
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent(1), "");
        assert_eq!(indent(2), "    ");
        assert_eq!(indent(3), "      ");
    }

    #[test]
    fn test_unstyled_render_reads_as_xml() {
        let colorizer = Colorizer::new(false);
        let styles = plain_styles();
        let out = XmlColorizer::new(&colorizer, &styles)
            .render("<r>\n  <a k=\"v\">1</a>\n  <b>\n    <c/>\n  </b>\n</r>\n")
            .unwrap();
        assert_eq!(
            out,
            "<r>\n    <a k=\"v\">1</a>\n    <b>\n      <c/>\n    </b>\n</r>\n"
        );
    }

    #[test]
    fn test_open_and_self_closing_drop_attributes() {
        let colorizer = Colorizer::new(false);
        let styles = plain_styles();
        let out = XmlColorizer::new(&colorizer, &styles)
            .render("<r id=\"1\"><c x=\"y\"/></r>")
            .unwrap();
        assert_eq!(out, "<r>\n    <c/>\n</r>\n");
    }

    #[test]
    fn test_attribute_styling() {
        let colorizer = Colorizer::new(false);
        let styles = XmlStyles::default();
        let line = XmlColorizer::new(&colorizer, &styles).render_event(&XmlEvent::Complete {
            tag: "R".into(),
            attributes: vec![("param".into(), "value".into())],
            value: Some("1".into()),
            level: 2,
        });
        assert_eq!(
            line,
            "    \x1b[36m<\x1b[0m\x1b[36mR\x1b[0m \x1b[34;1;3mparam\x1b[0m\x1b[37m=\x1b[0m\
             \x1b[35;3m\"value\"\x1b[0m\x1b[36m>\x1b[0m\x1b[37m1\x1b[0m\
             \x1b[36m</\x1b[0m\x1b[36mR\x1b[0m\x1b[36m>\x1b[0m"
        );
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        let colorizer = Colorizer::new(false);
        let styles = XmlStyles::default();
        assert_eq!(XmlColorizer::new(&colorizer, &styles).render("").unwrap(), "");
    }
}
