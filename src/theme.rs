use std::fmt;

use clap::ValueEnum;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    /// Glyph for the taskbar toggle; shows the mode a click switches to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "☾",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => f.write_str("dark"),
            ThemeMode::Light => f.write_str("light"),
        }
    }
}

pub const ACCENT_RGB: (u8, u8, u8) = (0, 200, 200);

// Centralized theme colors, one palette per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub desktop_bg: Color,
    pub desktop_fg: Color,
    pub window_bg: Color,
    pub window_fg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub header_inactive_bg: Color,
    pub border: Color,
    pub taskbar_bg: Color,
    pub taskbar_fg: Color,
    pub taskbar_active_bg: Color,
    pub taskbar_active_fg: Color,
    pub muted: Color,
    pub accent: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let accent = Color::Rgb(ACCENT_RGB.0, ACCENT_RGB.1, ACCENT_RGB.2);
        match mode {
            ThemeMode::Dark => Self {
                desktop_bg: Color::Black,
                desktop_fg: Color::White,
                window_bg: Color::Rgb(24, 24, 32),
                window_fg: Color::Gray,
                header_bg: Color::Blue,
                header_fg: Color::White,
                header_inactive_bg: Color::DarkGray,
                border: Color::DarkGray,
                taskbar_bg: Color::DarkGray,
                taskbar_fg: Color::White,
                taskbar_active_bg: Color::Gray,
                taskbar_active_fg: Color::Black,
                muted: Color::DarkGray,
                accent,
            },
            ThemeMode::Light => Self {
                desktop_bg: Color::Gray,
                desktop_fg: Color::Black,
                window_bg: Color::White,
                window_fg: Color::Black,
                header_bg: Color::LightBlue,
                header_fg: Color::Black,
                header_inactive_bg: Color::Gray,
                border: Color::DarkGray,
                taskbar_bg: Color::White,
                taskbar_fg: Color::Black,
                taskbar_active_bg: Color::LightBlue,
                taskbar_active_fg: Color::Black,
                muted: Color::DarkGray,
                accent,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn parse_accepts_only_known_modes() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("sepia"), None);
    }

    #[test]
    fn palettes_differ_per_mode() {
        assert_ne!(
            Palette::for_mode(ThemeMode::Dark).window_bg,
            Palette::for_mode(ThemeMode::Light).window_bg
        );
    }
}
