//! Interview TUI - terminal form for requesting generated interview questions
//!
//! Collects the interview parameters, validates them locally and posts them
//! as JSON to a configured webhook, which generates the questions and emails
//! them to the recipients.

mod app;
mod config;
mod platform;
mod state;
mod ui;
mod webhook;

use anyhow::{Context, Result};
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webhook::WebhookClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interview_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load().context("Failed to load configuration")?;
    let endpoint = config.webhook_url();
    match &endpoint {
        Some((url, source)) => {
            tracing::info!(source = source.label(), "Webhook endpoint resolved");
            tracing::debug!(%url, "Webhook endpoint");
        }
        None => tracing::warn!("No webhook URL configured; submissions will be refused"),
    }
    let (url, source) = endpoint.unzip();
    let client = WebhookClient::new(url)?;
    if let Some(url) = client.endpoint() {
        tracing::debug!(%url, "Webhook client ready");
    }

    let mut app = App::new(Arc::new(client), source);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Pick up finished submissions before drawing
        app.poll_submissions();
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while loading keeps the spinner moving
        let poll_duration = if app.is_loading() {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
