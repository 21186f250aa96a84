//! Color utilities for UI rendering
//!
//! Converts the active theme into egui colors once per theme change so the
//! render loop does not re-resolve them every frame.

use crate::config::theme::{Theme, ThemeManager};
use crate::content::SpanStyle;
use crate::error::Result;
use eframe::egui;

/// Theme colors resolved for egui
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiColors {
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub foreground: egui::Color32,
    pub prompt: egui::Color32,
    pub strong: egui::Color32,
    pub glow: egui::Color32,
    pub link: egui::Color32,
    pub error: egui::Color32,
    pub muted: egui::Color32,
}

impl UiColors {
    pub fn from_theme(theme: &Theme) -> Self {
        let c = &theme.colors;
        Self {
            background: c.background.to_egui(),
            surface: c.surface.to_egui(),
            foreground: c.foreground.to_egui(),
            prompt: c.prompt.to_egui(),
            strong: c.strong.to_egui(),
            glow: c.glow.to_egui(),
            link: c.link.to_egui(),
            error: c.error.to_egui(),
            muted: c.muted.to_egui(),
        }
    }

    /// Colors of the manager's current theme
    pub fn from_manager(manager: &ThemeManager) -> Result<Self> {
        Ok(Self::from_theme(manager.current_theme()?))
    }

    /// Text color for a span style
    pub fn for_span(&self, style: &SpanStyle) -> egui::Color32 {
        match style {
            SpanStyle::Plain => self.foreground,
            SpanStyle::Strong => self.strong,
            SpanStyle::Glow => self.glow,
            SpanStyle::Link(_) => self.link,
        }
    }
}

impl Default for UiColors {
    fn default() -> Self {
        let manager = ThemeManager::new();
        manager
            .current_theme()
            .map(Self::from_theme)
            .unwrap_or(Self {
                background: egui::Color32::from_rgb(40, 42, 54),
                surface: egui::Color32::from_rgb(33, 34, 44),
                foreground: egui::Color32::from_rgb(248, 248, 242),
                prompt: egui::Color32::from_rgb(80, 250, 123),
                strong: egui::Color32::from_rgb(255, 121, 198),
                glow: egui::Color32::from_rgb(189, 147, 249),
                link: egui::Color32::from_rgb(139, 233, 253),
                error: egui::Color32::from_rgb(255, 85, 85),
                muted: egui::Color32::from_rgb(98, 114, 164),
            })
    }
}
