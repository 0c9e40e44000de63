//! Escape sequence composition.
//!
//! A [`Colorizer`] turns a [`StyleList`] into one SGR escape prefix and wraps
//! text between that prefix and a hard reset:
//!
//! ```text
//! ESC[<code>;<code>...m <text> ESC[0m
//! ```
//!
//! Names that are not styles are skipped. Palette names (`color_<N>`) are
//! skipped too when the colorizer was built without 256-color support. When
//! nothing is left the text is returned exactly as given, with no escapes.

use crate::detect::ColorDetector;
use crate::style::{Color256, Lookup, StyleList, StyleRegistry};

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Resets every attribute.
pub const RESET: &str = "\x1b[0m";

/// Wraps SGR parameters into an escape sequence.
pub fn wrap_sequence(params: &str) -> String {
    format!("{}{}m", CSI, params)
}

/// Resolves style names to escape sequences.
///
/// The 256-color decision is taken once, at construction.
///
/// # Example
///
/// ```rust
/// use vtreport_render::Colorizer;
///
/// let colorizer = Colorizer::new(false);
/// assert_eq!(colorizer.colorize("ok", ["bold", "green"]), "\x1b[1;32mok\x1b[0m");
/// assert_eq!(colorizer.colorize("ok", "color_208"), "ok");
/// assert_eq!(colorizer.colorize("ok", "no-such-style"), "ok");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colorizer {
    support_256: bool,
}

impl Colorizer {
    pub fn new(support_256: bool) -> Self {
        Self { support_256 }
    }

    /// Builds a colorizer from a detector, with `force` taking precedence.
    pub fn detect(force: bool, detector: &dyn ColorDetector) -> Self {
        Self::new(force || detector.supports_256())
    }

    pub fn supports_256(&self) -> bool {
        self.support_256
    }

    /// Resolves one style name to its SGR parameters.
    ///
    /// Returns `None` for unknown names, for `none`, and for palette names
    /// when 256 colors are unavailable.
    pub fn resolve(&self, style: &str) -> Option<String> {
        match StyleRegistry::global().lookup(style) {
            Lookup::Code(code) => Some(code.to_string()),
            Lookup::NoCode => None,
            Lookup::NotFound => Color256::parse(style)
                .filter(|_| self.support_256)
                .map(|color| color.sequence()),
        }
    }

    /// Returns the escape prefix for `styles`, or `None` if nothing resolves.
    pub fn sequence<S: Into<StyleList>>(&self, styles: S) -> Option<String> {
        self.sequence_for(&styles.into())
    }

    /// Wraps `text` in the escape sequence for `styles`.
    pub fn colorize<S: Into<StyleList>>(&self, text: &str, styles: S) -> String {
        self.colorize_list(text, &styles.into())
    }

    pub(crate) fn colorize_list(&self, text: &str, styles: &StyleList) -> String {
        match self.sequence_for(styles) {
            Some(prefix) => format!("{}{}{}", prefix, text, RESET),
            None => text.to_string(),
        }
    }

    fn sequence_for(&self, styles: &StyleList) -> Option<String> {
        let codes: Vec<String> = styles.iter().filter_map(|s| self.resolve(s)).collect();
        if codes.is_empty() {
            None
        } else {
            Some(wrap_sequence(&codes.join(";")))
        }
    }
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new(false)
    }
}
