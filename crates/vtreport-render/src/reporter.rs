//! The message-writing entry points.

use crate::colorize::Colorizer;
use crate::config::ReportConfig;
use crate::detect::{ColorDetector, EnvColorDetector};
use crate::error::ReportError;
use crate::style::{StyleList, StyleRegistry};
use crate::xml::{XmlColorMode, XmlColorizer, XmlFormatter};

/// Builds styled strings for terminal output.
///
/// The reporter owns a [`ReportConfig`] and a [`ColorDetector`]. It never
/// writes anywhere itself: every method returns the string to print.
///
/// The reporter is reentrant for read-only use. Changes through
/// [`config_mut`](Self::config_mut) must be serialized by the caller relative
/// to other calls.
///
/// # Example
///
/// ```rust
/// use vtreport_render::Reporter;
///
/// let reporter = Reporter::new();
/// assert_eq!(reporter.title("Results"), "\x1b[1;4mResults\x1b[0m\n");
/// assert_eq!(reporter.write("done", "green", false), "\x1b[32mdone\x1b[0m");
/// ```
pub struct Reporter {
    config: ReportConfig,
    detector: Box<dyn ColorDetector>,
}

impl Reporter {
    /// Creates a reporter with default configuration and `TERM` detection.
    pub fn new() -> Self {
        Self::with_config(ReportConfig::default())
    }

    pub fn with_config(config: ReportConfig) -> Self {
        Self {
            config,
            detector: Box::new(EnvColorDetector),
        }
    }

    /// Replaces the 256-color detector.
    pub fn with_detector(mut self, detector: impl ColorDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ReportConfig {
        &mut self.config
    }

    /// `true` when forced by configuration or reported by the detector.
    pub fn supports_256_colors(&self) -> bool {
        self.config.force_support_256_color || self.detector.supports_256()
    }

    fn colorizer(&self) -> Colorizer {
        Colorizer::detect(self.config.force_support_256_color, &*self.detector)
    }

    /// Wraps `text` in the escape sequence for `styles`.
    pub fn colorize<S: Into<StyleList>>(&self, text: &str, styles: S) -> String {
        self.colorizer().colorize(text, styles)
    }

    /// A title line in the configured title styles.
    pub fn title(&self, text: &str) -> String {
        self.colorizer().colorize_list(text, &self.config.title_styles) + "\n"
    }

    /// A subtitle line; shares the title styles.
    pub fn subtitle(&self, text: &str) -> String {
        self.title(text)
    }

    /// A message in `styles`, or in the default styles when `styles` is empty.
    pub fn write<S: Into<StyleList>>(&self, text: &str, styles: S, append_newline: bool) -> String {
        let styles = styles.into();
        let styles = if styles.is_empty() {
            &self.config.default_styles
        } else {
            &styles
        };

        let mut out = self.colorizer().colorize_list(text, styles);
        if append_newline {
            out.push('\n');
        }
        out
    }

    /// Pretty-prints and colors an XML document.
    ///
    /// With `Some(styles)` the formatted document is colored as one block;
    /// with `None` every tag, attribute and value is colored on its own.
    pub fn write_xml(&self, text: &str, styles: Option<StyleList>) -> Result<String, ReportError> {
        let mode = match styles {
            Some(styles) => XmlColorMode::Block(styles),
            None => XmlColorMode::Structural,
        };
        self.write_xml_with_mode(text, &mode)
    }

    /// Pretty-prints and colors an XML document in an explicit mode.
    ///
    /// Malformed documents cannot be tokenized, so in structural mode their
    /// fallback text is colored as a block in the default styles.
    pub fn write_xml_with_mode(&self, text: &str, mode: &XmlColorMode) -> Result<String, ReportError> {
        let formatter = XmlFormatter::new(text).display_errors(self.config.display_xml_errors);
        let formatted = formatter.format()?;
        let colorizer = self.colorizer();

        match mode {
            XmlColorMode::Block(styles) => Ok(colorizer.colorize_list(&formatted, styles) + "\n"),
            XmlColorMode::Structural if text.is_empty() => Ok(formatted),
            XmlColorMode::Structural if !formatter.is_valid() => {
                tracing::debug!(
                    errors = formatter.errors().len(),
                    "structural coloring skipped for malformed XML"
                );
                Ok(colorizer.colorize_list(&formatted, &self.config.default_styles) + "\n")
            }
            XmlColorMode::Structural => XmlColorizer::new(&colorizer, &self.config.xml).render(&formatted),
        }
    }

    /// Snapshot of every named style and its code.
    pub fn styles(&self) -> Vec<(&'static str, Option<&'static str>)> {
        StyleRegistry::global().snapshot()
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter")
            .field("config", &self.config)
            .field("supports_256_colors", &self.supports_256_colors())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::FixedColorDetector;

    fn reporter() -> Reporter {
        Reporter::new().with_detector(FixedColorDetector(false))
    }

    #[test]
    fn test_write_falls_back_to_default_styles() {
        let mut r = reporter();
        assert_eq!(r.write("Simple text", StyleList::new(), true), "Simple text\n");

        r.config_mut().default_styles = StyleList::from("yellow");
        assert_eq!(r.write("x", StyleList::new(), false), "\x1b[33mx\x1b[0m");
        assert_eq!(r.write("x", "red", false), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn test_title_and_subtitle() {
        let r = reporter();
        assert_eq!(r.title("T"), "\x1b[1;4mT\x1b[0m\n");
        assert_eq!(r.subtitle("S"), "\x1b[1;4mS\x1b[0m\n");
    }

    #[test]
    fn test_force_256_overrides_detector() {
        let mut r = reporter();
        assert!(!r.supports_256_colors());
        assert_eq!(r.colorize("x", "color_255"), "x");

        r.config_mut().force_support_256_color = true;
        assert!(r.supports_256_colors());
        assert_eq!(r.colorize("x", "color_255"), "\x1b[38;5;255mx\x1b[0m");
    }

    #[test]
    fn test_detector_enables_256() {
        let r = Reporter::new().with_detector(FixedColorDetector(true));
        assert_eq!(r.colorize("x", "bg_color_1"), "\x1b[48;5;1mx\x1b[0m");
    }

    #[test]
    fn test_write_xml_structural_empty() {
        assert_eq!(reporter().write_xml("", None).unwrap(), "");
    }

    #[test]
    fn test_write_xml_structural_invalid_uses_default_styles() {
        let mut r = reporter();
        r.config_mut().default_styles = StyleList::from("red");
        assert_eq!(r.write_xml("<a>", None).unwrap(), "\x1b[31m<a>\x1b[0m\n");
    }

    #[test]
    fn test_write_xml_block_mode() {
        let r = reporter();
        assert_eq!(
            r.write_xml_with_mode("<a/>", &XmlColorMode::Block(StyleList::from("cyan")))
                .unwrap(),
            "\x1b[36m<?xml version=\"1.0\"?>\n<a/>\n\x1b[0m\n"
        );
    }

    #[test]
    fn test_styles_snapshot() {
        let styles = reporter().styles();
        assert!(styles.contains(&("underline", Some("4"))));
        assert!(styles.contains(&("none", None)));
    }
}
