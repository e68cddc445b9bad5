//! Terminal logging with colored module prefixes.
//!
//! ```ignore
//! log!("build"; "rendered {} sections", count);
//! // [build] rendered 7 sections
//! ```
//!
//! Single-line messages are cut to the terminal width so watch-mode output
//! stays one line per event.

use colored::{ColoredString, Colorize};
use crossterm::terminal::size;
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Fallback when the width cannot be queried (pipes, CI)
const DEFAULT_WIDTH: u16 = 120;

/// "[" + "]" + trailing space around the module name
const PREFIX_OVERHEAD: usize = 3;

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

fn terminal_width() -> usize {
    usize::from(*TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(DEFAULT_WIDTH)))
}

/// Write `[module] message` to stdout.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    let message = if message.contains('\n') {
        message
    } else {
        let budget = terminal_width().saturating_sub(module.len() + PREFIX_OVERHEAD);
        truncate_str(message, budget)
    };

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "serve" => prefix.bright_blue().bold(),
        "watch" => prefix.bright_green().bold(),
        "error" => prefix.bright_red().bold(),
        "clipboard" => prefix.bright_magenta().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to at most `max_len` bytes on a char boundary.
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
