//! XML validation, pretty-printing and colorizing.
//!
//! The pipeline for one document:
//!
//! 1. [`XmlValidator`] checks well-formedness and collects [`XmlError`]s.
//! 2. [`XmlFormatter`] re-indents valid input, or falls back to the raw text
//!    (optionally under an error report) when it is malformed.
//! 3. [`tokenize`] flattens the formatted text into [`XmlEvent`]s, which
//!    [`XmlColorizer`] renders with per-part styles.
//!
//! [`Reporter::write_xml`](crate::Reporter::write_xml) runs the whole thing.

mod dom;
mod events;
mod format;
mod render;
mod validate;

pub use events::{tokenize, XmlEvent};
pub use format::{error_report, XmlFormatter, ERROR_HEADER};
pub use render::{XmlColorMode, XmlColorizer};
pub use validate::{line_column, validate, XmlError, XmlValidator};
