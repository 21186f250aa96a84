//! Static content blocks
//!
//! Content is authored as lines of lightweight inline markup:
//!
//! - `**text**` renders strong
//! - `[[text]]` renders with the glow color
//! - `[label](url)` renders as a link
//!
//! Markup is parsed once when a block is built, so renderers only deal with
//! styled [`Span`]s.

pub mod pages;
pub mod registry;

pub use registry::ContentRegistry;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static INLINE_MARKUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(?P<strong>.+?)\*\*|\[\[(?P<glow>.+?)\]\]|\[(?P<label>[^\]]+)\]\((?P<url>[^)\s]+)\)")
        .expect("inline markup pattern is valid")
});

/// How a span of text is styled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanStyle {
    Plain,
    Strong,
    Glow,
    Link(String),
}

/// A run of uniformly styled text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

/// One line of a content block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    Heading(String),
    Paragraph(Vec<Span>),
    /// List item; depth 0 is top level
    Bullet { depth: u8, spans: Vec<Span> },
    /// `label: value` pair
    Field { label: String, value: Vec<Span> },
    Blank,
}

/// Ordered lines making up one response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub lines: Vec<Line>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Plain,
        }
    }
}

impl ContentBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.lines.push(Line::Heading(text.into()));
        self
    }

    pub fn paragraph(mut self, markup: &str) -> Self {
        self.lines.push(Line::Paragraph(parse_inline(markup)));
        self
    }

    pub fn bullet(self, markup: &str) -> Self {
        self.nested_bullet(0, markup)
    }

    pub fn nested_bullet(mut self, depth: u8, markup: &str) -> Self {
        self.lines.push(Line::Bullet {
            depth,
            spans: parse_inline(markup),
        });
        self
    }

    pub fn field(mut self, label: impl Into<String>, markup: &str) -> Self {
        self.lines.push(Line::Field {
            label: label.into(),
            value: parse_inline(markup),
        });
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(Line::Blank);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text with all markup removed, one line per [`Line`]
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                Line::Heading(text) => text.clone(),
                Line::Paragraph(spans) => spans_text(spans),
                Line::Bullet { depth, spans } => {
                    format!("{}- {}", "  ".repeat(*depth as usize), spans_text(spans))
                }
                Line::Field { label, value } => format!("{}: {}", label, spans_text(value)),
                Line::Blank => String::new(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

/// Split a markup string into styled spans
pub fn parse_inline(markup: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE_MARKUP.captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(Span::plain(&markup[last..whole.start()]));
        }

        let span = if let Some(text) = caps.name("strong") {
            Span {
                text: text.as_str().to_string(),
                style: SpanStyle::Strong,
            }
        } else if let Some(text) = caps.name("glow") {
            Span {
                text: text.as_str().to_string(),
                style: SpanStyle::Glow,
            }
        } else {
            let label = caps.name("label").map(|m| m.as_str()).unwrap_or_default();
            let url = caps.name("url").map(|m| m.as_str()).unwrap_or_default();
            Span {
                text: label.trim_matches('*').to_string(),
                style: SpanStyle::Link(url.to_string()),
            }
        };
        spans.push(span);
        last = whole.end();
    }

    if last < markup.len() {
        spans.push(Span::plain(&markup[last..]));
    }
    spans
}
