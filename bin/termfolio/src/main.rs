//! termfolio - an interactive portfolio in a terminal window
//!
//! Opens a single window with a banner, a typed welcome message, the
//! scrolling output log and a pinned input prompt.

mod app;

use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::{bail, Context as _};
use eframe::egui;
use tracing::{debug, error, info, warn};

use termfolio::config::RuntimeConfig;

use app::TermfolioApp;

/// Command line options
#[derive(Debug, Default, PartialEq)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Window width
    width: Option<f32>,
    /// Window height
    height: Option<f32>,
    /// Theme override
    theme: Option<String>,
}

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum Invocation {
    Run(AppArgs),
    Help,
    Version,
}

impl AppArgs {
    /// Parse arguments, excluding the program name
    fn parse_from<I>(args: I) -> anyhow::Result<Invocation>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut app_args = AppArgs::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args.next().context("Missing config file path")?;
                    app_args.config_path = Some(PathBuf::from(path));
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--width" | "-w" => {
                    let value = args.next().context("Missing window width")?;
                    app_args.width = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid width: {}", value))?,
                    );
                }
                "--height" | "-h" => {
                    let value = args.next().context("Missing window height")?;
                    app_args.height = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid height: {}", value))?,
                    );
                }
                "--theme" | "-t" => {
                    app_args.theme = Some(args.next().context("Missing theme name")?);
                }
                "--help" | "-?" => return Ok(Invocation::Help),
                "--version" | "-v" => return Ok(Invocation::Version),
                other if other.starts_with('-') => bail!("Unknown option: {}", other),
                other => {
                    warn!("Ignoring positional argument: {}", other);
                }
            }
        }

        Ok(Invocation::Run(app_args))
    }
}

fn print_help() {
    println!("termfolio - an interactive portfolio in a terminal window");
    println!();
    println!("USAGE:");
    println!("    termfolio [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug logging");
    println!("    -w, --width <WIDTH>    Initial window width");
    println!("    -h, --height <HEIGHT>  Initial window height");
    println!("    -t, --theme <THEME>    Theme (dracula, green-screen)");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    termfolio looks for config.toml or config.json in:");
    println!("    1. Path given with --config or $TERMFOLIO_CONFIG");
    println!("    2. $XDG_CONFIG_HOME/termfolio/");
    println!("    3. <platform config dir>/termfolio/");
    println!("    4. ~/.termfolio/");
    println!("    5. ./.termfolio/");
    println!("    6. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    TERMFOLIO_CONFIG       Path to configuration file");
    println!("    TERMFOLIO_DEBUG        Enable debug logging (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn debug_requested(args: &AppArgs) -> bool {
    args.debug
        || env::var("TERMFOLIO_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = match AppArgs::parse_from(env::args().skip(1)) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            print_help();
            return Ok(());
        }
        Ok(Invocation::Version) => {
            println!("termfolio v{}", termfolio::VERSION);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            print_help();
            process::exit(2);
        }
    };

    init_logging(debug_requested(&args));
    info!("Starting termfolio v{}", termfolio::VERSION);
    debug!("Arguments: {:?}", args);

    let runtime_config = load_configuration(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .thread_name("termfolio-worker")
        .build()
        .context("Failed to start the async runtime")?;

    let native_options = create_native_options(&args, &runtime_config);
    let app = TermfolioApp::new(runtime_config, runtime);

    if let Err(e) = eframe::run_native(
        "termfolio",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    ) {
        error!("Application failed: {}", e);
        process::exit(1);
    }

    info!("termfolio shutdown complete");
    Ok(())
}

/// Load configuration from the given file, the environment or defaults
fn load_configuration(args: &AppArgs) -> anyhow::Result<RuntimeConfig> {
    let mut runtime_config = match &args.config_path {
        Some(path) => match RuntimeConfig::load_from_file(path) {
            Ok(config) => {
                info!("Configuration loaded from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config from {}: {}", path.display(), e);
                termfolio::init()?
            }
        },
        None => termfolio::init()?,
    };

    if let Some(theme_name) = &args.theme {
        debug!("Applying theme override: {}", theme_name);
        if let Err(e) = runtime_config.set_theme(theme_name) {
            warn!("Failed to apply theme '{}': {}", theme_name, e);
        }
    }

    Ok(runtime_config)
}

fn create_native_options(args: &AppArgs, runtime_config: &RuntimeConfig) -> eframe::NativeOptions {
    let ui = &runtime_config.config().ui;
    let size = [args.width.unwrap_or(ui.width), args.height.unwrap_or(ui.height)];

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("termfolio")
            .with_app_id("termfolio")
            .with_icon(Arc::new(load_or_create_window_icon()))
            .with_inner_size(size)
            .with_min_inner_size([400.0, 300.0])
            .with_resizable(true),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    }
}

/// A 32x32 prompt glyph: `>` and an underscore cursor on a dark square
fn create_window_icon() -> egui::IconData {
    const SIZE: u32 = 32;
    let background = [40, 42, 54, 255];
    let glyph = [80, 250, 123, 255];

    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE as i32 {
        for x in 0..SIZE as i32 {
            // `>`: two diagonals meeting at (14, 16)
            let d = (y - 16).abs();
            let chevron = (6..=14).contains(&x) && (d == 14 - x || d == 15 - x);
            let cursor = (17..=26).contains(&x) && (22..=24).contains(&y);
            let pixel = if chevron || cursor { glyph } else { background };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: SIZE,
        height: SIZE,
    }
}

/// `icon.png` from the working directory or `assets/`, else the generated icon
fn load_or_create_window_icon() -> egui::IconData {
    let candidates: [&Path; 2] = [Path::new("icon.png"), Path::new("assets/icon.png")];

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                return egui::IconData {
                    rgba: rgba.into_raw(),
                    width,
                    height,
                };
            }
            Err(e) => warn!("Failed to load icon {}: {}", path.display(), e),
        }
    }

    create_window_icon()
}
