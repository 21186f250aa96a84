//! The eframe application
//!
//! Owns the [`Terminal`] controller, the welcome typer and the input line,
//! and runs the work a submission asks for: saving the CV on the UI thread,
//! fetching hiscores on the tokio runtime.

use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use termfolio::config::RuntimeConfig;
use termfolio::download;
use termfolio::models::StatRecord;
use termfolio::stats::{StatsClient, StatsError};
use termfolio::terminal::{StatsRequest, Submission, Terminal, WelcomeTyper};
use termfolio::ui::{self, InputAction, InputPrompt, TextStyle, UiColors};

/// How long a status message stays visible
const STATUS_TTL: Duration = Duration::from_secs(6);

/// Poll interval while a hiscore lookup is outstanding
const STATS_POLL: Duration = Duration::from_millis(100);

type StatsResult = (StatsRequest, Result<Vec<StatRecord>, StatsError>);

/// Short message under the input line
struct StatusMessage {
    text: String,
    is_error: bool,
    shown_at: Instant,
}

pub struct TermfolioApp {
    runtime_config: RuntimeConfig,
    terminal: Terminal,
    typer: WelcomeTyper,
    input: InputPrompt,
    colors: UiColors,
    style_applied: bool,
    status: Option<StatusMessage>,

    stats_client: Arc<StatsClient>,
    stats_tx: mpsc::UnboundedSender<StatsResult>,
    stats_rx: mpsc::UnboundedReceiver<StatsResult>,

    /// Kept alive for the lifetime of the window
    runtime: tokio::runtime::Runtime,
}

impl TermfolioApp {
    pub fn new(runtime_config: RuntimeConfig, runtime: tokio::runtime::Runtime) -> Self {
        let config = runtime_config.config();
        let terminal = Terminal::from_config(&config.terminal);
        let typer = WelcomeTyper::new(
            config.terminal.welcome_message.clone(),
            config.terminal.typing_interval(),
        );
        let stats_client = Arc::new(StatsClient::from_config(&config.stats));
        let colors = UiColors::from_manager(runtime_config.theme_manager()).unwrap_or_else(|e| {
            warn!("Falling back to default colors: {}", e);
            UiColors::default()
        });
        let (stats_tx, stats_rx) = mpsc::unbounded_channel();

        Self {
            runtime_config,
            terminal,
            typer,
            input: InputPrompt::new(),
            colors,
            style_applied: false,
            status: None,
            stats_client,
            stats_tx,
            stats_rx,
            runtime,
        }
    }

    fn text_style(&self) -> TextStyle {
        TextStyle::new(self.runtime_config.config().ui.font_size as f32, self.colors)
    }

    fn apply_style(&mut self, ctx: &egui::Context) {
        let font_size = self.runtime_config.config().ui.font_size as f32;
        if let Err(e) = self
            .runtime_config
            .theme_manager()
            .apply_to_egui(ctx, font_size)
        {
            warn!("Failed to apply theme: {}", e);
        }
        self.style_applied = true;
    }

    fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
            shown_at: Instant::now(),
        });
    }

    fn handle_action(&mut self, action: InputAction, ctx: &egui::Context) {
        match action {
            InputAction::None => {}
            InputAction::Submit => {
                let line = self.input.take();
                match self.terminal.submit(&line) {
                    Submission::DownloadCv => self.download_cv(),
                    Submission::FetchStats(request) => self.spawn_stats_fetch(request, ctx),
                    other => debug!("Submission handled: {:?}", other),
                }
            }
            InputAction::HistoryPrevious => {
                let recalled = self.terminal.recall_previous();
                self.input.set_text(recalled);
            }
            InputAction::HistoryNext => {
                let recalled = self.terminal.recall_next();
                self.input.set_text(recalled);
            }
            InputAction::Complete => {
                let current = self.input.text().to_string();
                let completed = self.terminal.autocomplete(&current);
                if completed != current {
                    self.input.set_text(completed);
                }
            }
        }
    }

    fn download_cv(&mut self) {
        match download::save_cv(&self.runtime_config.config().cv) {
            Ok(path) => {
                self.set_status(format!("CV saved to {}", path.display()), false);
            }
            Err(e) => {
                error!("CV download failed: {}", e);
                self.set_status(format!("Could not save the CV: {}", e), true);
            }
        }
    }

    fn spawn_stats_fetch(&self, request: StatsRequest, ctx: &egui::Context) {
        info!("Fetching hiscores from {}", self.stats_client.target());
        let client = Arc::clone(&self.stats_client);
        let tx = self.stats_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = client.fetch_stats().await;
            if tx.send((request, result)).is_err() {
                debug!("Window closed before stats arrived");
            }
            ctx.request_repaint();
        });
    }

    fn drain_stats(&mut self) {
        while let Ok((request, result)) = self.stats_rx.try_recv() {
            self.terminal.complete_stats(request, result);
        }
    }
}

impl eframe::App for TermfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            self.apply_style(ctx);
        }

        let now = Instant::now();
        self.typer.start(now);
        self.typer.advance(now);
        if let Some(delay) = self.typer.next_tick(now) {
            ctx.request_repaint_after(delay);
        }

        self.drain_stats();
        if self.terminal.stats_pending() {
            ctx.request_repaint_after(STATS_POLL);
        }

        if let Some(status) = &self.status {
            let age = now.saturating_duration_since(status.shown_at);
            if age >= STATUS_TTL {
                self.status = None;
            } else {
                ctx.request_repaint_after(STATUS_TTL - age);
            }
        }

        let style = self.text_style();
        let prompt = self.terminal.prompt().to_string();
        let focus = self.typer.take_focus_request();
        let input_enabled = self.typer.input_enabled();

        let mut action = InputAction::None;
        egui::TopBottomPanel::bottom("input_panel")
            .frame(
                egui::Frame::none()
                    .fill(self.colors.surface)
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0)),
            )
            .show(ctx, |ui| {
                action = self.input.show(ui, &prompt, input_enabled, focus, &style);
                if let Some(status) = &self.status {
                    ui::render_status(ui, &status.text, status.is_error, &style);
                }
            });
        self.handle_action(action, ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.colors.background)
                    .inner_margin(egui::Margin::symmetric(16.0, 12.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui::render_banner(ui, &self.runtime_config.config().terminal.banner, &style);
                        ui::render_welcome(ui, self.typer.visible_text(), &style);
                        ui::render_log(ui, self.terminal.output(), &style);
                    });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.typer.cancel();
        info!("Closing with {} output entries", self.terminal.output().len());
    }
}
