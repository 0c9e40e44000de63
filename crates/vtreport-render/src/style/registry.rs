//! The fixed table of named ANSI styles.
//!
//! Every entry maps a style name to the SGR parameter it contributes to an
//! escape sequence. The `none` entry is a valid name that contributes nothing,
//! which is distinct from an unknown name.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Declaration-ordered style table.
const STYLE_TABLE: &[(&str, Option<&str>)] = &[
    ("none", None),
    ("bold", Some("1")),
    ("dark", Some("2")),
    ("italic", Some("3")),
    ("underline", Some("4")),
    ("blink", Some("5")),
    ("reverse", Some("7")),
    ("concealed", Some("8")),
    // Foreground
    ("default", Some("39")),
    ("black", Some("30")),
    ("red", Some("31")),
    ("green", Some("32")),
    ("yellow", Some("33")),
    ("blue", Some("34")),
    ("magenta", Some("35")),
    ("cyan", Some("36")),
    ("light_gray", Some("37")),
    ("dark_gray", Some("90")),
    ("light_red", Some("91")),
    ("light_green", Some("92")),
    ("light_yellow", Some("93")),
    ("light_blue", Some("94")),
    ("light_magenta", Some("95")),
    ("light_cyan", Some("96")),
    ("white", Some("97")),
    // Background
    ("bg_default", Some("49")),
    ("bg_black", Some("40")),
    ("bg_red", Some("41")),
    ("bg_green", Some("42")),
    ("bg_yellow", Some("43")),
    ("bg_blue", Some("44")),
    ("bg_magenta", Some("45")),
    ("bg_cyan", Some("46")),
    ("bg_light_gray", Some("47")),
    ("bg_dark_gray", Some("100")),
    ("bg_light_red", Some("101")),
    ("bg_light_green", Some("102")),
    ("bg_light_yellow", Some("103")),
    ("bg_light_blue", Some("104")),
    ("bg_light_magenta", Some("105")),
    ("bg_light_cyan", Some("106")),
    ("bg_white", Some("107")),
];

static REGISTRY: Lazy<StyleRegistry> = Lazy::new(StyleRegistry::build);

/// Result of looking a name up in the [`StyleRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// A known style with an SGR code.
    Code(&'static str),
    /// A known style that contributes no code (`none`).
    NoCode,
    /// Not a registry name.
    NotFound,
}

/// Read-only registry of named styles.
///
/// There is exactly one registry per process, reachable through
/// [`StyleRegistry::global`]. It has no mutation API.
///
/// # Example
///
/// ```rust
/// use vtreport_render::style::{Lookup, StyleRegistry};
///
/// let registry = StyleRegistry::global();
/// assert_eq!(registry.lookup("red"), Lookup::Code("31"));
/// assert_eq!(registry.lookup("none"), Lookup::NoCode);
/// assert_eq!(registry.lookup("purple"), Lookup::NotFound);
/// ```
#[derive(Debug)]
pub struct StyleRegistry {
    index: HashMap<&'static str, Option<&'static str>>,
}

impl StyleRegistry {
    fn build() -> Self {
        Self {
            index: STYLE_TABLE.iter().copied().collect(),
        }
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static StyleRegistry {
        &REGISTRY
    }

    /// Looks up a style name.
    pub fn lookup(&self, name: &str) -> Lookup {
        match self.index.get(name) {
            Some(Some(code)) => Lookup::Code(code),
            Some(None) => Lookup::NoCode,
            None => Lookup::NotFound,
        }
    }

    /// Returns `true` if `name` is a registry key.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over all styles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&'static str>)> {
        STYLE_TABLE.iter().copied()
    }

    /// Returns a snapshot of the table in declaration order.
    pub fn snapshot(&self) -> Vec<(&'static str, Option<&'static str>)> {
        self.iter().collect()
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
