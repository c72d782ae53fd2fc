use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
            MouseEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod actions;
mod cli;
mod command_id;
mod dispatcher;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod utils;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use folio_config::AppConfig;
use folio_model::PortfolioData;
use middleware::{
    browser::BrowserMiddleware, keyboard::KeyboardMiddleware, logging::LoggingMiddleware,
    mouse::MouseMiddleware, pull_requests::PullRequestsMiddleware,
};
use state::AppState;
use store::Store;
use utils::browser::SystemOpener;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting folio, logging to {}", log_file.display());

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load(),
    };
    let config = cli.apply(config);

    // Fail before the terminal is taken over, so the error stays readable
    let portfolio = PortfolioData::load(&config.portfolio_path).with_context(|| {
        format!(
            "Failed to load portfolio from {}",
            config.portfolio_path.display()
        )
    })?;
    for id in portfolio.duplicate_pull_request_ids() {
        log::warn!("Duplicate pull request id {:?}", id);
    }
    log::info!(
        "Loaded {} pull requests from {}",
        portfolio.pull_requests.len(),
        config.portfolio_path.display()
    );

    let theme = config.theme(&portfolio.theme);
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    // Middleware executes in this order
    let mut store = Store::new(AppState::new(portfolio, theme, config));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(MouseMiddleware::new()));
    store.add_middleware(Box::new(PullRequestsMiddleware::new()));
    store.add_middleware(Box::new(BrowserMiddleware::new(SystemOpener::new(
        runtime.handle().clone(),
    ))));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Let spawned browser processes detach
    runtime.shutdown_timeout(Duration::from_millis(500));

    log::info!("Exiting folio");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> Result<()> {
    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resized {
        width: size.width,
        height: size.height,
    }));

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let action = match event::read()? {
            // Only process key press events (ignore key release)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Action::Global(GlobalAction::KeyPressed(key))
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Action::Global(GlobalAction::MouseClicked {
                    column: mouse.column,
                    row: mouse.row,
                })
            }
            Event::Resize(width, height) => Action::Global(GlobalAction::Resized { width, height }),
            _ => continue,
        };

        store.dispatch(action);
    }

    Ok(())
}
