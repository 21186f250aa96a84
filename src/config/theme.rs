//! Theme System
//!
//! Color palettes for the terminal window. Colors are written as `#rrggbb`
//! in configuration and theme files.

use crate::error::{Error, Result};
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
        };
        Ok(Self::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_egui(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

/// A named palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Window background
    pub background: Color,
    /// Input line and status bar background
    pub surface: Color,
    /// Regular text
    pub foreground: Color,
    /// Prompt and command echoes
    pub prompt: Color,
    /// Strong spans and headings
    pub strong: Color,
    /// Glow spans and the banner
    pub glow: Color,
    /// Links
    pub link: Color,
    /// Error entries
    pub error: Color,
    /// Secondary text such as completion candidates
    pub muted: Color,
}

/// Holds the built-in themes and tracks the active one
#[derive(Debug, Clone)]
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut manager = Self {
            themes: HashMap::new(),
            current_theme: "dracula".to_string(),
        };
        manager.load_builtin_themes();
        manager
    }

    fn load_builtin_themes(&mut self) {
        for theme in [Self::create_dracula_theme(), Self::create_green_screen_theme()] {
            self.themes.insert(theme.name.clone(), theme);
        }
    }

    fn create_dracula_theme() -> Theme {
        Theme {
            name: "dracula".to_string(),
            colors: ThemeColors {
                background: Color::from_rgb(0x28, 0x2a, 0x36),
                surface: Color::from_rgb(0x21, 0x22, 0x2c),
                foreground: Color::from_rgb(0xf8, 0xf8, 0xf2),
                prompt: Color::from_rgb(0x50, 0xfa, 0x7b),
                strong: Color::from_rgb(0xff, 0x79, 0xc6),
                glow: Color::from_rgb(0xbd, 0x93, 0xf9),
                link: Color::from_rgb(0x8b, 0xe9, 0xfd),
                error: Color::from_rgb(0xff, 0x55, 0x55),
                muted: Color::from_rgb(0x62, 0x72, 0xa4),
            },
        }
    }

    fn create_green_screen_theme() -> Theme {
        Theme {
            name: "green-screen".to_string(),
            colors: ThemeColors {
                background: Color::from_rgb(0x0a, 0x0f, 0x0a),
                surface: Color::from_rgb(0x05, 0x0a, 0x05),
                foreground: Color::from_rgb(0x33, 0xff, 0x33),
                prompt: Color::from_rgb(0x99, 0xff, 0x99),
                strong: Color::from_rgb(0xcc, 0xff, 0xcc),
                glow: Color::from_rgb(0x66, 0xff, 0x66),
                link: Color::from_rgb(0x00, 0xcc, 0x66),
                error: Color::from_rgb(0xff, 0x66, 0x33),
                muted: Color::from_rgb(0x1f, 0x99, 0x1f),
            },
        }
    }

    pub fn has_theme(&self, theme_name: &str) -> bool {
        self.themes.contains_key(theme_name)
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme
    }

    pub fn current_theme(&self) -> Result<&Theme> {
        self.themes
            .get(&self.current_theme)
            .ok_or_else(|| Error::ThemeNotFound {
                theme_name: self.current_theme.clone(),
            })
    }

    pub fn set_theme(&mut self, theme_name: &str) -> Result<()> {
        if !self.has_theme(theme_name) {
            return Err(Error::ThemeNotFound {
                theme_name: theme_name.to_string(),
            });
        }
        self.current_theme = theme_name.to_string();
        Ok(())
    }

    /// Theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Apply the current theme and font size to an egui context
    pub fn apply_to_egui(&self, ctx: &egui::Context, font_size: f32) -> Result<()> {
        let colors = &self.current_theme()?.colors;
        let mut style = (*ctx.style()).clone();

        style.visuals.dark_mode = true;
        style.visuals.window_fill = colors.background.to_egui();
        style.visuals.panel_fill = colors.background.to_egui();
        style.visuals.extreme_bg_color = colors.surface.to_egui();
        style.visuals.override_text_color = Some(colors.foreground.to_egui());
        style.visuals.hyperlink_color = colors.link.to_egui();
        style.visuals.selection.bg_fill = colors.muted.to_egui();
        style.visuals.selection.stroke.color = colors.foreground.to_egui();
        style.visuals.text_cursor.stroke.color = colors.prompt.to_egui();

        for text_style in [
            egui::TextStyle::Monospace,
            egui::TextStyle::Body,
            egui::TextStyle::Button,
        ] {
            style
                .text_styles
                .insert(text_style, egui::FontId::monospace(font_size));
        }
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::monospace((font_size * 0.8).max(8.0)),
        );

        ctx.set_style(style);
        Ok(())
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
