//! Pocket Calculator terminal front end
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc                                # Start with defaults
//! pocket-calc --config calc.json             # Load engine settings
//! pocket-calc --max-fraction-digits 4        # Override one setting
//! RUST_LOG=debug pocket-calc --log-file calc.log
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocket_calculator::config::EngineConfig;
use pocket_calculator::core::CalcResult;
use pocket_calculator::tui::{button_at, render, CalculatorApp, InputHandler};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

/// Four-function pocket calculator for the terminal
#[derive(Debug, Parser)]
#[command(name = "pocket-calc", version, about)]
struct Cli {
    /// JSON engine configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG, default "warn")
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Fractional digits kept in results (overrides the config file)
    #[arg(long, value_name = "N")]
    max_fraction_digits: Option<u8>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CalcResult<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = build_config(&cli)?;
    tracing::info!(?config, "starting");

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, CalculatorApp::with_config(config));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    result
}

/// Raw mode, alternate screen and mouse capture; raw mode is undone if any
/// later step fails
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    undo_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
                tracing::warn!(error = %e, "failed to leave alternate screen");
            }
            if let Err(e) = disable_raw_mode() {
                tracing::warn!(error = %e, "failed to leave raw mode");
            }
        },
    )
}

fn undo_on_error<T>(
    step: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    let result = step();
    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal setup failed");
        undo();
    }
    result
}

fn init_logging(path: &Path) -> CalcResult<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn build_config(cli: &Cli) -> CalcResult<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(digits) = cli.max_fraction_digits {
        config = config.with_max_fraction_digits(digits);
        config.validate()?;
    }
    Ok(config)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> CalcResult<()> {
    let input_handler = InputHandler::new();
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|f| {
            area = f.area();
            render(&app, f);
        })?;

        match event::read()? {
            Event::Key(key) => app.handle_action(input_handler.handle_key(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(command) = button_at(area, app.keypad(), mouse.column, mouse.row) {
                    app.apply(command);
                }
            }
            _ => {}
        }
    }

    Ok(())
}
