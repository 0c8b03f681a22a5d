// Theme module - Color constants and theme re-exports
//
// This module provides the color palette and status styling for the MorVPN
// terminal UI: brand blue accents on slate, with green/yellow/orange/red
// reserved for connection and signal state.

pub mod default;

use ratatui::style::Color;

/// Brand accent - used for borders, titles, selection
/// RGB: (37, 99, 235)
pub const BRAND_BLUE: Color = Color::Rgb(37, 99, 235);

/// Healthy/connected indicator
/// RGB: (22, 163, 74)
pub const SIGNAL_GREEN: Color = Color::Rgb(22, 163, 74);

/// In-flight/connecting indicator
/// RGB: (202, 138, 4)
pub const CAUTION_YELLOW: Color = Color::Rgb(202, 138, 4);

/// Reconnecting/degraded indicator
/// RGB: (234, 88, 12)
pub const WARN_ORANGE: Color = Color::Rgb(234, 88, 12);

/// Disconnect button and errors
/// RGB: (220, 38, 38)
pub const ALERT_RED: Color = Color::Rgb(220, 38, 38);

/// AI routing accents
/// RGB: (147, 51, 234)
pub const AI_PURPLE: Color = Color::Rgb(147, 51, 234);

/// Neutral body text and idle state
/// RGB: (100, 116, 139)
pub const SLATE: Color = Color::Rgb(100, 116, 139);

/// Background for the selected row
/// RGB: (30, 41, 59)
pub const SELECTION_BG: Color = Color::Rgb(30, 41, 59);

/// Foreground/background pair for a whole view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub muted: Color,
    pub bg: Color,
    pub accent: Color,
}

pub const LIGHT: Palette = Palette {
    fg: Color::Rgb(30, 41, 59),
    muted: SLATE,
    bg: Color::Rgb(248, 250, 252),
    accent: BRAND_BLUE,
};

pub const DARK: Palette = Palette {
    fg: Color::Rgb(226, 232, 240),
    muted: Color::Rgb(148, 163, 184),
    bg: Color::Rgb(15, 23, 42),
    accent: Color::Rgb(96, 165, 250),
};

pub fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        DARK
    } else {
        LIGHT
    }
}

// Re-export theme functions for convenient access
pub use default::*;
