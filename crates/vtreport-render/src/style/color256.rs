//! Parametrized 256-color style names.
//!
//! Besides the registry names, a style may address the extended palette with
//! `color_<N>` (foreground) or `bg_color_<N>` (background), where `N` is one
//! to three ASCII digits. The digit count is the only bound: `color_999`
//! parses and produces an out-of-palette code, as terminals have always
//! received from this naming scheme.

/// SGR selector for an indexed foreground color.
pub const FOREGROUND_INDEX: u8 = 38;

/// SGR selector for an indexed background color.
pub const BACKGROUND_INDEX: u8 = 48;

/// Which plane an indexed color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// The SGR selector for this layer.
    pub fn selector(self) -> u8 {
        match self {
            Layer::Foreground => FOREGROUND_INDEX,
            Layer::Background => BACKGROUND_INDEX,
        }
    }
}

/// A parsed `color_<N>` / `bg_color_<N>` name.
///
/// The index keeps the digits exactly as written, so `color_007` renders
/// `38;5;007`.
///
/// # Example
///
/// ```rust
/// use vtreport_render::style::{Color256, Layer};
///
/// let color = Color256::parse("bg_color_208").unwrap();
/// assert_eq!(color.layer(), Layer::Background);
/// assert_eq!(color.sequence(), "48;5;208");
///
/// assert!(Color256::parse("color_1234").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color256<'a> {
    layer: Layer,
    digits: &'a str,
}

impl<'a> Color256<'a> {
    /// Parses a style name, returning `None` unless it matches the pattern.
    pub fn parse(name: &'a str) -> Option<Self> {
        let (layer, rest) = match name.strip_prefix("bg_") {
            Some(rest) => (Layer::Background, rest),
            None => (Layer::Foreground, name),
        };
        let digits = rest.strip_prefix("color_")?;

        if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self { layer, digits })
    }

    /// Returns `true` if `name` is a parametrized color name.
    pub fn matches(name: &str) -> bool {
        Color256::parse(name).is_some()
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// The palette index as written.
    pub fn digits(&self) -> &'a str {
        self.digits
    }

    /// The numeric palette index. Values above 255 are possible.
    pub fn index(&self) -> u16 {
        // At most three ASCII digits, always fits.
        self.digits.bytes().fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
    }

    /// The SGR parameters for this color, e.g. `38;5;255`.
    pub fn sequence(&self) -> String {
        format!("{};5;{}", self.layer.selector(), self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_foreground() {
        let color = Color256::parse("color_255").unwrap();
        assert_eq!(color.layer(), Layer::Foreground);
        assert_eq!(color.index(), 255);
        assert_eq!(color.sequence(), "38;5;255");
    }

    #[test]
    fn test_parse_background() {
        let color = Color256::parse("bg_color_0").unwrap();
        assert_eq!(color.layer(), Layer::Background);
        assert_eq!(color.sequence(), "48;5;0");
    }

    #[test]
    fn test_no_numeric_clamp() {
        let color = Color256::parse("color_999").unwrap();
        assert_eq!(color.index(), 999);
        assert_eq!(color.sequence(), "38;5;999");
    }

    #[test]
    fn test_leading_zeros_preserved() {
        assert_eq!(Color256::parse("color_007").unwrap().sequence(), "38;5;007");
    }

    #[test]
    fn test_rejects_non_matching_names() {
        for name in [
            "color_",
            "color_1234",
            "color_12a",
            "color_-1",
            "colour_12",
            "bg_color_",
            "bg_bg_color_1",
            "xcolor_1",
            "color_1 ",
            " color_1",
            "red",
            "",
        ] {
            assert!(Color256::parse(name).is_none(), "{:?} should not match", name);
        }
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert!(!Color256::matches("color_١٢"));
    }
}
