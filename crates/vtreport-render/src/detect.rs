//! 256-color support detection.
//!
//! There is no reliable way to ask a terminal about its palette without
//! talking to it, so detection is a best-effort heuristic: on platforms with
//! a `/` path separator, a `TERM` value containing `256color` (for example
//! `xterm-256color` or `screen-256color`) counts as support. Everything else,
//! including a missing `TERM`, does not.
//!
//! Detection sits behind the [`ColorDetector`] trait so tests and callers that
//! already know the answer can substitute a [`FixedColorDetector`]:
//!
//! ```rust
//! use vtreport_render::{ColorDetector, FixedColorDetector, Reporter};
//!
//! let reporter = Reporter::new().with_detector(FixedColorDetector(true));
//! assert!(reporter.supports_256_colors());
//! ```

/// Decides whether 256-color sequences may be emitted.
pub trait ColorDetector: Send + Sync {
    fn supports_256(&self) -> bool;
}

/// Reads the `TERM` environment variable on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorDetector;

impl ColorDetector for EnvColorDetector {
    fn supports_256(&self) -> bool {
        let term = std::env::var("TERM").ok();
        let supported = posix_paths() && term_has_256_colors(term.as_deref());
        tracing::trace!(?term, supported, "256-color detection");
        supported
    }
}

/// Always answers with the wrapped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColorDetector(pub bool);

impl ColorDetector for FixedColorDetector {
    fn supports_256(&self) -> bool {
        self.0
    }
}

impl<F> ColorDetector for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn supports_256(&self) -> bool {
        self()
    }
}

/// Returns `true` if a `TERM` value advertises the 256-color palette.
pub fn term_has_256_colors(term: Option<&str>) -> bool {
    term.is_some_and(|t| t.contains("256color"))
}

fn posix_paths() -> bool {
    std::path::MAIN_SEPARATOR == '/'
}
