//! # VtReport Render - Styled Console Messages and Colorized XML
//!
//! `vtreport-render` turns symbolic style names into ANSI/VT100 escape
//! sequences and pretty-prints XML documents with per-token colors. Every
//! operation returns a `String`; nothing is written to the terminal.
//!
//! ## Core Concepts
//!
//! - [`StyleRegistry`]: the fixed table of named styles (`bold`, `red`,
//!   `bg_light_blue`, ...)
//! - Palette names: `color_<N>` and `bg_color_<N>` for 256-color terminals
//! - [`Colorizer`]: wraps text in the escape sequence for a [`StyleList`]
//! - [`ColorDetector`]: decides whether 256-color names may be used
//! - [`xml`]: validation, pretty-printing and structural coloring of XML
//! - [`Reporter`]: `title`, `write` and `write_xml` over a [`ReportConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use vtreport_render::{Reporter, StyleList};
//!
//! let reporter = Reporter::new();
//!
//! print!("{}", reporter.title("Build"));
//! print!("{}", reporter.write("compiled", ["green", "bold"], true));
//! print!("{}", reporter.write("plain", StyleList::new(), true));
//! ```
//!
//! ## Unknown Styles
//!
//! Style names are never an error. A name that is not in the registry and is
//! not a palette name contributes nothing, and text whose styles all resolve
//! to nothing comes back unchanged:
//!
//! ```rust
//! use vtreport_render::Colorizer;
//!
//! let colorizer = Colorizer::new(false);
//! assert_eq!(colorizer.colorize("text", ["sparkly", "none"]), "text");
//! ```
//!
//! ## XML
//!
//! ```rust
//! use vtreport_render::{FixedColorDetector, Reporter, StyleList};
//!
//! let reporter = Reporter::new().with_detector(FixedColorDetector(false));
//!
//! // One style for the whole pretty-printed document
//! let block = reporter
//!     .write_xml("<a><b>x</b></a>", Some(StyleList::from("cyan")))
//!     .unwrap();
//! assert_eq!(
//!     block,
//!     "\x1b[36m<?xml version=\"1.0\"?>\n<a>\n  <b>x</b>\n</a>\n\x1b[0m\n"
//! );
//!
//! // Tag, attribute and value colors from the configuration
//! let structural = reporter.write_xml("<a><b>x</b></a>", None).unwrap();
//! assert_eq!(vtreport_render::strip_styles(&structural), "<a>\n    <b>x</b>\n</a>\n");
//! ```

mod colorize;
mod config;
mod detect;
mod error;
mod reporter;
pub mod style;
mod util;
pub mod xml;

pub use colorize::{wrap_sequence, Colorizer, CSI, RESET};
pub use config::{ReportConfig, XmlStyles};
pub use detect::{term_has_256_colors, ColorDetector, EnvColorDetector, FixedColorDetector};
pub use error::ReportError;
pub use reporter::Reporter;
pub use style::{is_valid_style, Color256, Lookup, StyleList, StyleRegistry, StyleSpec};
pub use util::{strip_styles, visible_width};
pub use xml::{XmlColorMode, XmlError, XmlEvent};
