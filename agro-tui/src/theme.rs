//! Slate/emerald theme tokens for the AccraAgro console.
//!
//! # Color Palette
//! - **Background**: Deep slate (base layer)
//! - **Accent**: Emerald (focus, active nav item, positive trends)
//! - **Warning**: Amber (low stock, solar series)
//! - **Negative**: Red (critical stock, falling trends, errors)
//! - **Info**: Blue (info toasts, grid series)
//! - **Muted**: Slate grey (secondary text, inactive chrome)

use ratatui::style::{Color, Modifier, Style};

use agro_core::charts::Rgb;
use agro_core::Severity;

pub const BACKGROUND: Color = Color::Rgb(15, 23, 42);
pub const SURFACE: Color = Color::Rgb(30, 41, 59);
pub const ACCENT: Color = Color::Rgb(16, 185, 129);
pub const WARNING: Color = Color::Rgb(245, 158, 11);
pub const NEGATIVE: Color = Color::Rgb(239, 68, 68);
pub const INFO: Color = Color::Rgb(59, 130, 246);
pub const MUTED: Color = Color::Rgb(148, 163, 184);
pub const TEXT: Color = Color::Rgb(226, 232, 240);

/// Convert a chart colour.
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn text_bold() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn info() -> Style {
    Style::default().fg(INFO)
}

/// Border for a view surface; brightens once active styling lands.
pub fn surface_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn nav_item(active: bool, cursor: bool) -> Style {
    let style = if active { accent_bold() } else { muted() };
    if cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

pub fn severity(severity: Severity) -> Style {
    match severity {
        Severity::Success => accent(),
        Severity::Info => info(),
        Severity::Error => negative(),
    }
}

/// Glyph standing in for a toast icon.
pub fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Info => "ℹ",
        Severity::Error => "⚠",
    }
}

/// Stock badge colour by badge class.
pub fn badge(class: &str) -> Style {
    match class {
        "crit" => negative().add_modifier(Modifier::BOLD),
        "low" => warning(),
        _ => accent(),
    }
}

/// Machine status dot colour by status class.
pub fn machine_status(class: &str) -> Style {
    match class {
        "on" => accent(),
        "fix" => warning(),
        _ => muted(),
    }
}

pub fn trend(falling: bool) -> Style {
    if falling {
        negative()
    } else {
        accent()
    }
}
