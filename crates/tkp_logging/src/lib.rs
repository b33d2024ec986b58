#![deny(missing_docs)]
//! Shared logging utilities for the Auto-TKP workspace.
//!
//! This crate provides the `tkp_*` logging macros used across the codebase,
//! a helper for keeping free-text client requests short in log lines, and a
//! minimal test initializer for the global logger.

/// Maximum number of characters of user text that end up in a log line.
pub const PREVIEW_CHARS: usize = 48;

/// Returns a single-line, length-limited rendition of `text` for logging.
///
/// Line breaks are folded into spaces and anything past [`PREVIEW_CHARS`]
/// characters is replaced by an ellipsis. Counting is done in characters, not
/// bytes, so Cyrillic input is never cut in the middle of a code point.
pub fn preview(text: &str) -> String {
    let mut out = String::with_capacity(text.len().min(PREVIEW_CHARS * 4));
    for (i, ch) in text.chars().enumerate() {
        if i == PREVIEW_CHARS {
            out.push('…');
            break;
        }
        out.push(if ch == '\n' || ch == '\r' { ' ' } else { ch });
    }
    out
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! tkp_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! tkp_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! tkp_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! tkp_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! tkp_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_text() {
        assert_eq!(preview("Лоток 100х100"), "Лоток 100х100");
    }

    #[test]
    fn preview_folds_newlines_and_truncates_by_chars() {
        let long = "я".repeat(PREVIEW_CHARS + 10);
        let out = preview(&long);
        assert_eq!(out.chars().count(), PREVIEW_CHARS + 1);
        assert!(out.ends_with('…'));

        assert_eq!(preview("a\nb\r\nc"), "a b  c");
    }
}
