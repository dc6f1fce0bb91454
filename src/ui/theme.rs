//! Theme system
//!
//! Provides:
//! - Theme struct with all UI colors
//! - Built-in presets (harbor, catppuccin, nord, gruvbox)
//! - Hex color parsing for config overrides

use ratatui::style::Color;
use thiserror::Error;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Background for the selected card and highlighted menu entry
    pub selection_bg: Color,
    /// Text color for selected items
    pub selection_fg: Color,
    /// Accent color (borders, avatar, arrows)
    pub accent: Color,
    /// Dimmed text (location, secondary info)
    pub dimmed: Color,
    /// More dimmed text (placeholders, tertiary info)
    pub dimmed_alt: Color,
    /// Search/filter highlight color
    pub search_highlight: Color,
    /// Filled favorite heart
    pub favorite: Color,
    /// Pagination dot for the current image
    pub indicator_active: Color,
    /// Pagination dots for the other images
    pub indicator_inactive: Color,
    pub notice_info: Color,
    pub notice_error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::harbor()
    }
}

impl Theme {
    /// Harbor theme - default
    pub fn harbor() -> Self {
        Self {
            background: Color::Rgb(13, 17, 22),          // #0d1116
            foreground: Color::Rgb(229, 234, 241),       // #e5eaf1
            selection_bg: Color::Rgb(20, 28, 42),        // #141c2a
            selection_fg: Color::Rgb(229, 234, 241),     // #e5eaf1
            accent: Color::Rgb(14, 165, 233),            // #0ea5e9 (sky)
            dimmed: Color::Rgb(156, 163, 175),           // #9ca3af
            dimmed_alt: Color::Rgb(107, 114, 128),       // #6b7280
            search_highlight: Color::Rgb(180, 83, 9),    // #b45309
            favorite: Color::Rgb(244, 63, 94),           // #f43f5e (rose)
            indicator_active: Color::Rgb(229, 234, 241), // #e5eaf1
            indicator_inactive: Color::Rgb(75, 85, 99),  // #4b5563
            notice_info: Color::Rgb(34, 197, 94),        // #22c55e
            notice_error: Color::Rgb(239, 68, 68),       // #ef4444
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            background: Color::Rgb(30, 30, 46),          // #1e1e2e (base)
            foreground: Color::Rgb(205, 214, 244),       // #cdd6f4 (text)
            selection_bg: Color::Rgb(49, 50, 68),        // #313244 (surface0)
            selection_fg: Color::Rgb(205, 214, 244),     // #cdd6f4 (text)
            accent: Color::Rgb(137, 180, 250),           // #89b4fa (blue)
            dimmed: Color::Rgb(166, 173, 200),           // #a6adc8 (subtext0)
            dimmed_alt: Color::Rgb(147, 153, 178),       // #9399b2 (overlay2)
            search_highlight: Color::Rgb(249, 226, 175), // #f9e2af (yellow)
            favorite: Color::Rgb(243, 139, 168),         // #f38ba8 (red)
            indicator_active: Color::Rgb(205, 214, 244), // #cdd6f4 (text)
            indicator_inactive: Color::Rgb(88, 91, 112), // #585b70 (surface2)
            notice_info: Color::Rgb(166, 227, 161),      // #a6e3a1 (green)
            notice_error: Color::Rgb(243, 139, 168),     // #f38ba8 (red)
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),          // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244),       // #eceff4 (nord6)
            selection_bg: Color::Rgb(67, 76, 94),        // #434c5e (nord2)
            selection_fg: Color::Rgb(236, 239, 244),     // #eceff4 (nord6)
            accent: Color::Rgb(136, 192, 208),           // #88c0d0 (nord8)
            dimmed: Color::Rgb(216, 222, 233),           // #d8dee9 (nord4)
            dimmed_alt: Color::Rgb(76, 86, 106),         // #4c566a (nord3)
            search_highlight: Color::Rgb(235, 203, 139), // #ebcb8b (nord13)
            favorite: Color::Rgb(191, 97, 106),          // #bf616a (nord11)
            indicator_active: Color::Rgb(236, 239, 244), // #eceff4 (nord6)
            indicator_inactive: Color::Rgb(76, 86, 106), // #4c566a (nord3)
            notice_info: Color::Rgb(163, 190, 140),      // #a3be8c (nord14)
            notice_error: Color::Rgb(191, 97, 106),      // #bf616a (nord11)
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),          // #282828 (bg)
            foreground: Color::Rgb(235, 219, 178),       // #ebdbb2 (fg)
            selection_bg: Color::Rgb(60, 56, 54),        // #3c3836 (bg1)
            selection_fg: Color::Rgb(235, 219, 178),     // #ebdbb2 (fg)
            accent: Color::Rgb(215, 153, 33),            // #d79921 (yellow)
            dimmed: Color::Rgb(168, 153, 132),           // #a89984 (gray)
            dimmed_alt: Color::Rgb(146, 131, 116),       // #928374 (gray)
            search_highlight: Color::Rgb(250, 189, 47),  // #fabd2f (bright yellow)
            favorite: Color::Rgb(251, 73, 52),           // #fb4934 (bright red)
            indicator_active: Color::Rgb(235, 219, 178), // #ebdbb2 (fg)
            indicator_inactive: Color::Rgb(102, 92, 84), // #665c54 (bg3)
            notice_info: Color::Rgb(152, 151, 26),       // #98971a (green)
            notice_error: Color::Rgb(204, 36, 29),       // #cc241d (red)
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "harbor" | "default" => Some(Self::harbor()),
            "catppuccin-mocha" | "catppuccin_mocha" | "catppuccin" => {
                Some(Self::catppuccin_mocha())
            }
            "nord" => Some(Self::nord()),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(Self::gruvbox()),
            _ => None,
        }
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, #rrggbbaa (alpha ignored), with or without '#'
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        s.get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .ok_or(ColorError::InvalidHex)
    };

    match s.len() {
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 | 8 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}
