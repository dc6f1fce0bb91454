mod app;
mod carousel;
mod config;
mod favorites;
mod listing;
mod menu;
mod pointer;
mod router;
mod session;
mod ui;
mod user;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Position, Terminal};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Control};
use config::Config;
use favorites::Favorites;
use menu::Role;
use ui::images::ImageManager;

#[derive(Parser, Debug)]
#[command(name = "staydeck")]
#[command(about = "Browse hotel listings in the terminal")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/staydeck/config.toml")]
    config: String,

    /// Listings JSON file, overriding the config
    #[arg(long)]
    listings: Option<PathBuf>,

    /// Sign in with this role (client, owner, admin, super_admin)
    #[arg(long)]
    role: Option<String>,

    /// Log file (default: staydeck/staydeck.log under the data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The TUI owns the terminal, so logs always go to a file
fn log_path(requested: Option<PathBuf>) -> PathBuf {
    requested.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("staydeck")
            .join("staydeck.log")
    })
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("Failed to create log file {}", path.display()))
}

fn init_logging(path: &Path) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "staydeck=info".into());
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&log_path(cli.log_file.clone()))?;

    // Load config
    let mut config = Config::load(&cli.config)?;
    if let Some(path) = cli.listings {
        config.listings_path = path;
    }
    if let Some(ref tag) = cli.role {
        config.user.role = Role::from_tag(tag);
    }

    let listings = listing::load_all(&config.listings_path)?;
    tracing::info!("Loaded {} listings", listings.len());

    let mut favorites = Favorites::new();
    if let Err(e) = favorites.load() {
        tracing::warn!("Failed to load favorites: {:#}", e);
    }

    let session_service = session::service_from_config(&config.session);

    // Graphics detection queries the terminal, so it runs before raw mode
    let mut images = config.appearance.images.then(ImageManager::new);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(listings, config, favorites, session_service);

    // Run main loop
    let result = run_app(&mut terminal, &mut app, &mut images).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    images: &mut Option<ImageManager>,
) -> Result<()> {
    loop {
        app.drain_events();
        app.tick();

        terminal.draw(|f| ui::draw(f, app, images.as_mut()))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.on_key(key) == Control::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    app.on_pointer_down(Position::new(mouse.column, mouse.row));
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_defaults_to_data_dir_file() {
        let path = log_path(None);
        assert!(path.ends_with("staydeck/staydeck.log"));
        assert_eq!(log_path(Some(PathBuf::from("/tmp/x.log"))), PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("staydeck.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
