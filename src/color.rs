//! ANSI terminal colors
//!
//! Wraps text in Select Graphic Rendition escape sequences and maps
//! Jenkins job statuses to the color they are shown in.

use std::fmt;
use std::str::FromStr;

/// Escape sequence that resets all text attributes.
pub const RESET: &str = "\x1b[0m";

/// A terminal color with a fixed SGR code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Reset attributes
    Off,
    /// Red foreground
    Red,
    /// Green foreground
    Green,
    /// Yellow foreground
    Yellow,
    /// Blue foreground
    Blue,
    /// White foreground
    White,
    /// Bold white foreground
    Gray,
}

impl Color {
    /// Every supported color.
    pub const ALL: [Color; 7] = [
        Color::Off,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::White,
        Color::Gray,
    ];

    /// SGR parameter for this color
    #[must_use]
    pub fn sgr_code(self) -> &'static str {
        match self {
            Self::Off => "0",
            Self::Red => "31",
            Self::Green => "32",
            Self::Yellow => "33",
            Self::Blue => "34",
            Self::White => "37",
            Self::Gray => "1;37",
        }
    }

    /// Lowercase color name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::White => "white",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| format!("Unknown color: {s}"))
    }
}

/// Wraps `text` in the escape sequence for `color`, followed by a reset
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    format!("\x1b[{}m{}{}", color.sgr_code(), text, RESET)
}

/// Color a job status is displayed in, if it has one
#[must_use]
pub fn status_color(status: &str) -> Option<Color> {
    match status {
        "OK" => Some(Color::Green),
        "FAIL" => Some(Color::Red),
        "DISABLED" => Some(Color::Yellow),
        _ => None,
    }
}

/// Colorizes a job status keyword.
///
/// Statuses without a mapped color are returned unchanged.
#[must_use]
pub fn colorize_job_status(status: &str) -> String {
    match status_color(status) {
        Some(color) => colorize(status, color),
        None => status.to_string(),
    }
}
