//! Input prompt rendering
//!
//! The pinned input line at the bottom of the window. Key presses the
//! terminal cares about are read before the text field sees them and handed
//! back as an [`InputAction`]; the caller decides what they do.

use eframe::egui;

use super::text::TextStyle;

/// What the user asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Submit,
    HistoryPrevious,
    HistoryNext,
    Complete,
}

/// Single-line command input
#[derive(Debug, Clone)]
pub struct InputPrompt {
    id: egui::Id,
    text: String,
    /// Move the cursor to the end on the next frame
    cursor_to_end: bool,
}

impl InputPrompt {
    pub fn new() -> Self {
        Self {
            id: egui::Id::new("termfolio_input"),
            text: String::new(),
            cursor_to_end: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the input (history recall, completion)
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor_to_end = true;
    }

    /// Take the current input, leaving the line empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// Draw the prompt and the text field
    ///
    /// A disabled prompt is drawn but ignores keys.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        prompt: &str,
        enabled: bool,
        focus: bool,
        style: &TextStyle,
    ) -> InputAction {
        let mut action = InputAction::None;

        if enabled {
            let has_focus = ui.memory(|mem| mem.has_focus(self.id));
            if has_focus {
                action = ui.input_mut(|i| {
                    if i.consume_key(egui::Modifiers::NONE, egui::Key::Tab) {
                        InputAction::Complete
                    } else if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp) {
                        InputAction::HistoryPrevious
                    } else if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown) {
                        InputAction::HistoryNext
                    } else {
                        InputAction::None
                    }
                });
            }
        }

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(prompt)
                    .font(style.font())
                    .color(style.colors.prompt),
            );

            let response = ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut self.text)
                    .id(self.id)
                    .font(style.font())
                    .text_color(style.colors.foreground)
                    .frame(false)
                    .desired_width(f32::INFINITY)
                    .lock_focus(true),
            );

            if enabled && response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = InputAction::Submit;
            }

            if enabled && (focus || action == InputAction::Submit) {
                response.request_focus();
            }

            if self.cursor_to_end {
                if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), self.id) {
                    let ccursor = egui::text::CCursor::new(self.text.chars().count());
                    state
                        .cursor
                        .set_char_range(Some(egui::text::CCursorRange::one(ccursor)));
                    state.store(ui.ctx(), self.id);
                }
                self.cursor_to_end = false;
            }
        });

        action
    }
}

impl Default for InputPrompt {
    fn default() -> Self {
        Self::new()
    }
}
