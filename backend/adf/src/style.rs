//! ANSI styling for terminal output: SGR codes, URL and status colouring.

use std::io::IsTerminal;

// ---------------------------------------------------------------------------
// SGR codes
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const GREY: &str = "\x1b[90m";

/// Whether stdout should receive colour: a terminal, `NO_COLOR` unset and a
/// non-dumb `TERM`.
pub fn supports_color() -> bool {
    std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none()
        && std::env::var("TERM").map(|t| t != "dumb").unwrap_or(false)
}

/// Wrap `text` in the given SGR codes followed by a reset. Returns `text`
/// untouched when colour is disabled.
pub fn paint(text: &str, codes: &[&str], enabled: bool) -> String {
    if !enabled || codes.is_empty() {
        return text.to_string();
    }
    format!("{}{text}{RESET}", codes.concat())
}

/// Underlined cyan, the way links are shown.
pub fn colour_url(url: &str, enabled: bool) -> String {
    paint(url, &[UNDERLINE, CYAN], enabled)
}

/// Colour a workflow status by name (case-insensitive).
pub fn colour_status(status: &str, enabled: bool) -> String {
    let codes: &[&str] = match status.to_lowercase().as_str() {
        "in progress" => &[BOLD, BLUE],
        "done" => &[GREEN],
        "review" => &[BOLD, YELLOW],
        "blocked" => &[RED],
        _ => &[BOLD, GREY],
    };
    paint(status, codes, enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_underline_and_cyan() {
        assert_eq!(
            colour_url("https://x.io", true),
            "\x1b[4m\x1b[36mhttps://x.io\x1b[0m"
        );
        assert_eq!(colour_url("https://x.io", false), "https://x.io");
    }

    #[test]
    fn status_colours() {
        assert_eq!(colour_status("In Progress", true), "\x1b[1m\x1b[34mIn Progress\x1b[0m");
        assert_eq!(colour_status("Done", true), "\x1b[32mDone\x1b[0m");
        assert_eq!(colour_status("REVIEW", true), "\x1b[1m\x1b[33mREVIEW\x1b[0m");
        assert_eq!(colour_status("Blocked", true), "\x1b[31mBlocked\x1b[0m");
        assert_eq!(colour_status("To Do", true), "\x1b[1m\x1b[90mTo Do\x1b[0m");
        assert_eq!(colour_status("To Do", false), "To Do");
    }
}
