//! Style lists and the single-or-many style parameter.

use serde::{Deserialize, Serialize};

/// A style argument as callers write it: one name or several.
///
/// Config files use the same shape, so both of these are accepted:
///
/// ```yaml
/// tag: cyan
/// attribute: [blue, bold, italic]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StyleSpec {
    One(String),
    Many(Vec<String>),
}

/// An ordered list of style names.
///
/// Order decides the order of codes in the escape sequence. Unknown names are
/// kept here and ignored at resolution time.
///
/// # Example
///
/// ```rust
/// use vtreport_render::StyleList;
///
/// let single = StyleList::from("red");
/// let many = StyleList::from(["blue", "bold"]);
///
/// assert_eq!(single.len(), 1);
/// assert_eq!(many.iter().collect::<Vec<_>>(), vec!["blue", "bold"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StyleSpec", into = "Vec<String>")]
pub struct StyleList(Vec<String>);

impl StyleList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a style, returning the list for chaining.
    pub fn with(mut self, style: impl Into<String>) -> Self {
        self.0.push(style.into());
        self
    }

    pub fn push(&mut self, style: impl Into<String>) {
        self.0.push(style.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<StyleSpec> for StyleList {
    fn from(spec: StyleSpec) -> Self {
        match spec {
            StyleSpec::One(name) => StyleList(vec![name]),
            StyleSpec::Many(names) => StyleList(names),
        }
    }
}

impl From<StyleList> for Vec<String> {
    fn from(list: StyleList) -> Self {
        list.0
    }
}

impl From<&StyleList> for StyleList {
    fn from(list: &StyleList) -> Self {
        list.clone()
    }
}

impl From<&str> for StyleList {
    fn from(name: &str) -> Self {
        StyleList(vec![name.to_string()])
    }
}

impl From<String> for StyleList {
    fn from(name: String) -> Self {
        StyleList(vec![name])
    }
}

impl From<Vec<String>> for StyleList {
    fn from(names: Vec<String>) -> Self {
        StyleList(names)
    }
}

impl From<Vec<&str>> for StyleList {
    fn from(names: Vec<&str>) -> Self {
        names.as_slice().into()
    }
}

impl From<&[&str]> for StyleList {
    fn from(names: &[&str]) -> Self {
        StyleList(names.iter().map(|n| n.to_string()).collect())
    }
}

impl From<&[String]> for StyleList {
    fn from(names: &[String]) -> Self {
        Self(names.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for StyleList {
    fn from(names: [&str; N]) -> Self {
        names.as_slice().into()
    }
}

impl FromIterator<String> for StyleList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        StyleList(iter.into_iter().collect())
    }
}
