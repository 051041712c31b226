//! Marquee - browse TMDb from the terminal
//!
//! ```sh
//! # API key from the environment, start on the home view
//! TMDB_API_KEY=... marquee
//!
//! # Open a movie directly and log to a file
//! marquee --fragment '#movie=550' --log-file /tmp/marquee.log
//! ```

use std::cell::RefCell;
use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use marquee::{logging, Args, Config, MarqueeUi, Runtime};
use marquee_api::{MovieGateway, TmdbClient};
use marquee_core::{Action, AppState, LoggingMiddleware, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(args).context("invalid configuration")?;

    logging::init_tracing(config.log_file.as_deref()).context("cannot open log file")?;
    tracing::info!(?config, "Starting marquee");

    let client = TmdbClient::new(config.client_config()).context("cannot create API client")?;
    let gateway: Arc<dyn MovieGateway> = Arc::new(client);

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config, gateway).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.context("terminal error")?;
    tracing::info!("Exiting");
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    gateway: Arc<dyn MovieGateway>,
) -> io::Result<()> {
    let state = AppState::new(config.initial_fragment.clone(), config.image_base_url.clone());
    let store = Store::with_middleware(state, LoggingMiddleware::new());
    let mut runtime = Runtime::new(store, gateway);

    // First route comes from the initial fragment
    runtime.enqueue(Action::RouteFragmentChanged(config.initial_fragment.clone()));

    let ui = RefCell::new(MarqueeUi::new());

    runtime
        .run(
            terminal,
            |frame, state| ui.borrow_mut().render(frame, state),
            |event, state| ui.borrow_mut().map_event(event, state),
        )
        .await
}
