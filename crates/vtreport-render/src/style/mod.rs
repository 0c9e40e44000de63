//! Style names and their ANSI codes.
//!
//! - [`StyleRegistry`]: the fixed name → code table
//! - [`Color256`]: `color_<N>` / `bg_color_<N>` palette names
//! - [`StyleList`] / [`StyleSpec`]: the ordered style argument
//!
//! A name is valid when it is a registry key or a palette name. Whether a
//! valid name produces a code is decided by the [`Colorizer`](crate::Colorizer).

mod color256;
mod list;
mod registry;

pub use color256::{Color256, Layer, BACKGROUND_INDEX, FOREGROUND_INDEX};
pub use list::{StyleList, StyleSpec};
pub use registry::{Lookup, StyleRegistry};

/// Returns `true` if `name` is a registry key or a palette name.
pub fn is_valid_style(name: &str) -> bool {
    StyleRegistry::global().contains(name) || Color256::matches(name)
}
