//! Reporter configuration.
//!
//! A [`ReportConfig`] holds every style list the [`Reporter`](crate::Reporter)
//! uses plus the two behavior switches. It can be built in code or loaded from
//! YAML, where every key is optional and style lists accept either a single
//! name or a sequence:
//!
//! ```yaml
//! title_styles: [bold, light_cyan]
//! default_styles: light_gray
//! display_xml_errors: true
//! force_support_256_color: false
//! xml:
//!   angle: dark_gray
//!   tag: cyan
//!   tag_value: white
//!   attribute: [blue, italic]
//!   equal_sign: dark_gray
//!   attribute_value: magenta
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::style::StyleList;

/// Styles for each structural part of colorized XML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct XmlStyles {
    /// `<`, `>`, `</` and `/>`.
    pub angle: StyleList,
    pub tag: StyleList,
    /// Text content of leaf elements.
    pub tag_value: StyleList,
    pub attribute: StyleList,
    pub equal_sign: StyleList,
    /// Quoted attribute values, quotes included.
    pub attribute_value: StyleList,
}

impl Default for XmlStyles {
    fn default() -> Self {
        Self {
            angle: "cyan".into(),
            tag: "cyan".into(),
            tag_value: "light_gray".into(),
            attribute: ["blue", "bold", "italic"].into(),
            equal_sign: "light_gray".into(),
            attribute_value: ["magenta", "italic"].into(),
        }
    }
}

/// Configuration owned by a [`Reporter`](crate::Reporter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Used by `title` and `subtitle`.
    pub title_styles: StyleList,
    /// Used by `write` when no styles are given.
    pub default_styles: StyleList,
    /// Prefix malformed XML with a comment block listing its errors.
    pub display_xml_errors: bool,
    /// Treat the terminal as 256-color capable without detection.
    pub force_support_256_color: bool,
    pub xml: XmlStyles,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title_styles: ["bold", "underline"].into(),
            default_styles: StyleList::new(),
            display_xml_errors: false,
            force_support_256_color: false,
            xml: XmlStyles::default(),
        }
    }
}

impl ReportConfig {
    /// Parses a configuration from YAML. Missing keys keep their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vtreport_render::{ReportConfig, StyleList};
    ///
    /// let config = ReportConfig::from_yaml("title_styles: red\ndisplay_xml_errors: true").unwrap();
    /// assert_eq!(config.title_styles, StyleList::from("red"));
    /// assert!(config.display_xml_errors);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, ReportError> {
        // An empty document deserializes as null, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ReportError::Config {
            path: Some(path.to_path_buf()),
            message: format!("failed to read: {}", e),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            ReportError::Config { message, .. } => ReportError::Config {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, ReportError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
