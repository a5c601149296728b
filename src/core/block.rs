// src/core/block.rs

//! Icon classification, color markup and the two-line block emitted to the bar.

use crate::core::config::ColorConfig;
use std::io::{self, Write};

// Font Awesome battery glyphs, one per charge quintile
const ICON_EMPTY: &str = "\u{f244}";
const ICON_QUARTER: &str = "\u{f243}";
const ICON_HALF: &str = "\u{f242}";
const ICON_THREE_QUARTERS: &str = "\u{f241}";
const ICON_FULL: &str = "\u{f240}";

// Placeholder shown whenever no real display could be produced
pub const FALLBACK_TEXT: &str = "error";

// The two lines an i3blocks-style bar consumes positionally. This program
// always emits the same text on both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBlock {
    pub full_text: String,
    pub short_text: String,
}

impl StatusBlock {
    pub fn new(text: String) -> Self {
        StatusBlock {
            short_text: text.clone(),
            full_text: text,
        }
    }

    pub fn fallback() -> Self {
        StatusBlock::new(FALLBACK_TEXT.to_string())
    }

    // Emit `full_text\n` then `short_text\n`. Every terminal state of the
    // program writes its block through here.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "{}", self.full_text)?;
        writeln!(w, "{}", self.short_text)
    }
}

// Depending on current charge percentage, pick the battery glyph
pub fn icon_for(percent: u8) -> &'static str {
    match percent {
        0..=20 => ICON_EMPTY,
        21..=40 => ICON_QUARTER,
        41..=60 => ICON_HALF,
        61..=80 => ICON_THREE_QUARTERS,
        _ => ICON_FULL,
    }
}

// A charging battery always gets the charging color regardless of percent;
// a discharging one goes red, orange, yellow, then uncolored above 40%.
pub fn color_for(charging: bool, percent: u8, colors: &ColorConfig) -> Option<&str> {
    if charging {
        return Some(&colors.charging);
    }
    match percent {
        0..=20 => Some(&colors.critical),
        21..=30 => Some(&colors.low),
        31..=40 => Some(&colors.warn),
        _ => None,
    }
}

// Pango span markup around the icon, percent right-aligned to four columns
// with a literal `%`.
pub fn render(charging: bool, percent: u8, colors: &ColorConfig) -> StatusBlock {
    let icon = icon_for(percent);
    let text = match color_for(charging, percent, colors) {
        Some(color) => format!("<span foreground=\"{color}\">{icon}</span>{percent:4}%"),
        None => format!("{icon}{percent:4}%"),
    };
    StatusBlock::new(text)
}
