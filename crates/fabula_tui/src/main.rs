//! Fabula - interactive children's story teller.
//!
//! Prompts a hosted chat-completion deployment for story text branching
//! on two binary decision points and renders it in a terminal UI.

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use fabula_client::{AzureChatClient, StoryConfig};
use fabula_tui::App;
use fabula_tui::ui;
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "fabula")]
#[command(about = "Fabula - interactive children's story teller")]
#[command(version)]
struct Args {
    /// Path to a configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Starting Fabula");

    let config = StoryConfig::load(args.config.as_deref())?;
    let key_warning = config.validate().err();
    if let Some(e) = &key_warning {
        // Missing key is reported but does not halt startup
        warn!(error = %e, "API key missing; story requests will fail");
    }

    let mut app = App::new(config.into_client());
    if let Some(e) = key_warning {
        app.set_status(e.message);
    }

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app).await;
    ratatui::restore();

    info!("Fabula stopped");
    result
}

/// Event loop: render, then wait for one key press at a time.
async fn run(
    terminal: &mut DefaultTerminal,
    app: &mut App<AzureChatClient>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key).await;
                }
            }
        }
    }
}
