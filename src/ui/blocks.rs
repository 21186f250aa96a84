//! Output log rendering
//!
//! Draws each [`OutputEntry`] of the log: command echoes with their prompt,
//! content blocks line by line, errors and completion candidates.

use eframe::egui;
use egui::text::LayoutJob;

use super::text::{has_links, render_spans, span_widgets, TextStyle};
use crate::content::{ContentBlock, Line, Span};
use crate::models::{EntryKind, OutputEntry};

/// Indentation per bullet depth
const BULLET_INDENT: &str = "  ";

/// Layout job for a command echo: colored prompt, a space, the input
pub fn echo_job(prompt: &str, input: &str, style: &TextStyle) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.append(prompt, 0.0, style.plain_format(style.colors.prompt));
    job.append(" ", 0.0, style.plain_format(style.colors.foreground));
    job.append(input, 0.0, style.plain_format(style.colors.foreground));
    job
}

/// Layout job for a `label: value` line without links
pub fn field_job(label: &str, value: &[Span], style: &TextStyle) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.append(label, 0.0, style.plain_format(style.colors.strong));
    for span in value {
        job.append(&span.text, 0.0, style.format(&span.style));
    }
    job
}

/// Bullet marker for a nesting depth
pub fn bullet_prefix(depth: u8) -> String {
    let marker = if depth == 0 { "• " } else { "◦ " };
    format!("{}{}", BULLET_INDENT.repeat(depth as usize + 1), marker)
}

pub fn render_entry(ui: &mut egui::Ui, entry: &OutputEntry, style: &TextStyle) {
    match &entry.kind {
        EntryKind::Echo { prompt, input } => {
            ui.label(echo_job(prompt, input, style));
        }
        EntryKind::Content { title, block } => {
            if let Some(title) = title {
                ui.add_space(style.font_size * 0.5);
                ui.label(
                    egui::RichText::new(title)
                        .font(egui::FontId::monospace(style.font_size * 1.2))
                        .color(style.colors.glow)
                        .strong(),
                );
            }
            render_block(ui, block, style);
        }
        EntryKind::Error(message) => {
            ui.label(
                egui::RichText::new(message)
                    .font(style.font())
                    .color(style.colors.error),
            );
        }
        EntryKind::Candidates(names) => {
            ui.label(
                egui::RichText::new(names.join(" "))
                    .font(style.font())
                    .color(style.colors.muted),
            );
        }
    }
}

pub fn render_block(ui: &mut egui::Ui, block: &ContentBlock, style: &TextStyle) {
    for line in &block.lines {
        match line {
            Line::Heading(text) => {
                ui.label(
                    egui::RichText::new(text)
                        .font(style.font())
                        .color(style.colors.strong)
                        .strong(),
                );
            }
            Line::Paragraph(spans) => render_spans(ui, "", spans, style),
            Line::Bullet { depth, spans } => render_spans(ui, &bullet_prefix(*depth), spans, style),
            Line::Field { label, value } => {
                let label = format!("{}: ", label);
                if has_links(value) {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        ui.label(
                            egui::RichText::new(&label)
                                .font(style.font())
                                .color(style.colors.strong),
                        );
                        span_widgets(ui, value, style);
                    });
                } else {
                    ui.label(field_job(&label, value, style));
                }
            }
            Line::Blank => {
                ui.add_space(style.font_size * 0.6);
            }
        }
    }
}

/// Render the whole log, top to bottom
pub fn render_log<'a>(
    ui: &mut egui::Ui,
    entries: impl IntoIterator<Item = &'a OutputEntry>,
    style: &TextStyle,
) {
    for entry in entries {
        ui.push_id(&entry.id, |ui| render_entry(ui, entry, style));
    }
}
