//! AccraAgro TUI: operations console with sidebar navigation.
//!
//! Views:
//! 1. Dashboard: KPI cards and the production chart
//! 2. Inventory: stock table with status badges
//! 3. Energy: daily solar and grid draw
//! 4. Maintenance: machine cards and simulated diagnostics
//! 5. By-products: waste stream shares
//!
//! The landing page shows before any of them, without app chrome.

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableFocusChange, EnableFocusChange, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agro_core::ConsoleConfig;
use agro_tui::app::AppState;
use agro_tui::{input, ui};

#[derive(Parser, Debug)]
#[command(name = "agro-tui", version, about = "AccraAgro operations console")]
struct Args {
    /// Config file (defaults to <config dir>/accra-agro/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging()?;

    let config_path = args.config.unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("accra-agro")
            .join("config.toml")
    });
    let config = ConsoleConfig::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableFocusChange);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let width = terminal.size()?.width;
    tracing::info!(width, config = %config_path.display(), "console starting");
    let mut app = AppState::new(config, width);

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

/// Logs go to the file named by `AGRO_LOG`; the terminal belongs to the UI.
fn init_logging() -> Result<()> {
    match std::env::var_os("AGRO_LOG") {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating log file {}", path.to_string_lossy()))?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "agro_core=debug,agro_tui=debug".into()),
                )
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "off".into()),
                )
                .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
                .init();
        }
    }
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Fire due timers
        app.tick();

        // 2. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Resize(width, _) => app.resize(width),
                Event::FocusGained => app.console.nav_mut().handle_visibility_change(true),
                Event::FocusLost => app.console.nav_mut().handle_visibility_change(false),
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
