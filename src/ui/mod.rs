//! UI components and rendering
//!
//! egui drawing for the terminal window. Nothing here owns terminal state;
//! everything is rendered from the [`Terminal`](crate::terminal::Terminal)
//! and [`WelcomeTyper`](crate::terminal::WelcomeTyper) handed in.

pub mod blocks;
pub mod colors;
pub mod input;
pub mod text;

// Re-exports for convenience
pub use blocks::{render_block, render_entry, render_log};
pub use colors::UiColors;
pub use input::{InputAction, InputPrompt};
pub use text::TextStyle;

use eframe::egui;

/// ASCII banner above the welcome message
pub fn render_banner(ui: &mut egui::Ui, banner: &str, style: &TextStyle) {
    if banner.trim().is_empty() {
        return;
    }
    ui.label(
        egui::RichText::new(banner)
            .font(style.font())
            .color(style.colors.glow),
    );
}

/// Partially typed welcome message
pub fn render_welcome(ui: &mut egui::Ui, visible: &str, style: &TextStyle) {
    if visible.is_empty() {
        return;
    }
    ui.label(
        egui::RichText::new(visible)
            .font(style.font())
            .color(style.colors.foreground),
    );
    ui.add_space(style.font_size * 0.6);
}

/// One-line status message under the input
pub fn render_status(ui: &mut egui::Ui, message: &str, is_error: bool, style: &TextStyle) {
    let color = if is_error {
        style.colors.error
    } else {
        style.colors.muted
    };
    ui.label(
        egui::RichText::new(message)
            .font(egui::FontId::monospace(style.font_size * 0.85))
            .color(color),
    );
}
