//! Startup typing animation
//!
//! The welcome message is revealed one character per interval while the
//! input line stays disabled. The typer is driven by timestamps handed in by
//! the caller, so it never reads a clock itself.

use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TyperState {
    /// Characters are still being revealed; input is disabled
    Typing,
    /// Whole message visible; input is enabled
    Done,
    /// Torn down; further ticks are ignored
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct WelcomeTyper {
    message: String,
    /// Byte offset after each character, so slicing stays on char boundaries
    boundaries: Vec<usize>,
    revealed: usize,
    interval: Duration,
    started_at: Option<Instant>,
    state: TyperState,
    focus_requested: bool,
}

impl WelcomeTyper {
    pub fn new(message: impl Into<String>, interval: Duration) -> Self {
        let message = message.into();
        let boundaries: Vec<usize> = message
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        let state = if boundaries.is_empty() {
            TyperState::Done
        } else {
            TyperState::Typing
        };
        Self {
            message,
            boundaries,
            revealed: 0,
            interval,
            started_at: None,
            state,
            focus_requested: state == TyperState::Done,
        }
    }

    /// Begin revealing at `now`; later calls keep the first start time
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Reveal every character due by `now`; returns whether anything changed
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.state != TyperState::Typing {
            return false;
        }
        let Some(started_at) = self.started_at else {
            return false;
        };

        let total = self.boundaries.len();
        let elapsed = now.saturating_duration_since(started_at);
        let due = if self.interval.is_zero() {
            total
        } else {
            let ticks = elapsed.as_nanos() / self.interval.as_nanos();
            usize::try_from(ticks).unwrap_or(usize::MAX).min(total)
        };

        if due <= self.revealed {
            return false;
        }
        self.revealed = due;

        if self.revealed == total {
            debug!("Welcome message fully typed ({} chars)", total);
            self.state = TyperState::Done;
            self.focus_requested = true;
        }
        true
    }

    /// Time until the next character is due, while typing
    pub fn next_tick(&self, now: Instant) -> Option<Duration> {
        if self.state != TyperState::Typing {
            return None;
        }
        let Some(started_at) = self.started_at else {
            return Some(Duration::ZERO);
        };
        let due_at = started_at + self.interval * (self.revealed as u32 + 1);
        Some(due_at.saturating_duration_since(now))
    }

    /// Stop for good; the visible text is frozen
    pub fn cancel(&mut self) {
        if self.state == TyperState::Typing {
            debug!("Welcome typing cancelled at {} chars", self.revealed);
        }
        self.state = TyperState::Cancelled;
        self.focus_requested = false;
    }

    pub fn visible_text(&self) -> &str {
        match self.revealed {
            0 => "",
            n => &self.message[..self.boundaries[n - 1]],
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn state(&self) -> TyperState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == TyperState::Done
    }

    pub fn input_enabled(&self) -> bool {
        self.state == TyperState::Done
    }

    /// True exactly once, when typing finishes
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}
