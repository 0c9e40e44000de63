//! Utility functions for styled text.

/// Removes every ANSI escape sequence from `text`.
///
/// Colorizing and then stripping gives back the input text.
///
/// # Example
///
/// ```rust
/// use vtreport_render::{strip_styles, Colorizer};
///
/// let styled = Colorizer::new(false).colorize("hello", ["bold", "red"]);
/// assert_eq!(strip_styles(&styled), "hello");
/// ```
pub fn strip_styles(text: &str) -> String {
    console::strip_ansi_codes(text).into_owned()
}

/// Display width of `text` in terminal columns, ignoring escape sequences.
pub fn visible_width(text: &str) -> usize {
    console::measure_text_width(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_styles_plain_text() {
        assert_eq!(strip_styles("plain"), "plain");
        assert_eq!(strip_styles(""), "");
    }

    #[test]
    fn test_strip_styles_removes_sequences() {
        assert_eq!(strip_styles("\x1b[1;4mTitle\x1b[0m\n"), "Title\n");
        assert_eq!(strip_styles("\x1b[38;5;255mx\x1b[0m"), "x");
    }

    #[test]
    fn test_visible_width() {
        assert_eq!(visible_width("\x1b[31mabc\x1b[0m"), 3);
    }
}
