//! ThesisOS dashboard binary.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use thesisos_core::config::{self, ThesisConfig};
use thesisos_tui::{input, logging, persistence, ui, AppState};

#[derive(Parser)]
#[command(name = "thesisos-tui", about = "Investment thesis dashboard", version)]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read company info from <DIR>/<TICKER>.json instead of Yahoo Finance
    #[arg(long, value_name = "DIR")]
    offline: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_path) = ThesisConfig::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;

    if let Some(log_path) = config.log_file() {
        if let Err(e) = logging::init(&log_path, &config.log.level) {
            eprintln!("warning: logging disabled: {e}");
        }
    }
    if let Some(p) = &config_path {
        log::info!("config: {}", p.display());
    }

    let provider = thesisos_core::build_provider(&config.provider, args.offline.as_deref())
        .context("failed to set up data provider")?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let state_path = config::default_state_path();
    let mut app = AppState::new(provider, &config);
    if let Some(path) = &state_path {
        persistence::apply(&mut app, persistence::load(path));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Some(path) = &state_path {
        if let Err(e) = persistence::save(path, &persistence::extract(&app)) {
            log::warn!("could not save UI state: {e}");
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. A queued submission blocks here, after its "Fetching" frame is up.
        if app.submit_requested {
            app.run_submission();
            continue;
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
