//! Styled text rendering
//!
//! Turns content spans into egui layout jobs. Lines without links are laid
//! out as a single job; lines with links fall back to one widget per span so
//! the links stay clickable.

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};

use super::colors::UiColors;
use crate::content::{Span, SpanStyle};

/// Font and colors shared by all text of one frame
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub font_size: f32,
    pub colors: UiColors,
}

impl TextStyle {
    pub fn new(font_size: f32, colors: UiColors) -> Self {
        Self { font_size, colors }
    }

    pub fn font(&self) -> egui::FontId {
        egui::FontId::monospace(self.font_size)
    }

    /// Text format for a span style
    pub fn format(&self, style: &SpanStyle) -> TextFormat {
        let color = self.colors.for_span(style);
        TextFormat {
            font_id: self.font(),
            color,
            underline: match style {
                SpanStyle::Link(_) => egui::Stroke::new(1.0, color),
                _ => egui::Stroke::NONE,
            },
            ..Default::default()
        }
    }

    pub fn plain_format(&self, color: egui::Color32) -> TextFormat {
        TextFormat {
            font_id: self.font(),
            color,
            ..Default::default()
        }
    }
}

/// One layout job for a run of spans, with an optional leading indent
pub fn spans_job(prefix: &str, spans: &[Span], style: &TextStyle) -> LayoutJob {
    let mut job = LayoutJob::default();
    if !prefix.is_empty() {
        job.append(prefix, 0.0, style.format(&SpanStyle::Plain));
    }
    for span in spans {
        job.append(&span.text, 0.0, style.format(&span.style));
    }
    job
}

pub fn has_links(spans: &[Span]) -> bool {
    spans
        .iter()
        .any(|span| matches!(span.style, SpanStyle::Link(_)))
}

/// Render a line of spans
pub fn render_spans(ui: &mut egui::Ui, prefix: &str, spans: &[Span], style: &TextStyle) {
    if !has_links(spans) {
        ui.label(spans_job(prefix, spans, style));
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        if !prefix.is_empty() {
            ui.label(
                egui::RichText::new(prefix)
                    .font(style.font())
                    .color(style.colors.foreground),
            );
        }
        span_widgets(ui, spans, style);
    });
}

/// One widget per span, links as hyperlinks; the caller owns the layout
pub fn span_widgets(ui: &mut egui::Ui, spans: &[Span], style: &TextStyle) {
    for span in spans {
        let text = egui::RichText::new(&span.text)
            .font(style.font())
            .color(style.colors.for_span(&span.style));
        match &span.style {
            SpanStyle::Link(url) => {
                ui.hyperlink_to(text.underline(), url);
            }
            SpanStyle::Strong => {
                ui.label(text.strong());
            }
            _ => {
                ui.label(text);
            }
        }
    }
}
