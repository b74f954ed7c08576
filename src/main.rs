//! # Roster CLI Entry Point
//!
//! This is the main entry point for the Roster TUI application.
//!
//! ## Overview
//!
//! Roster loads a member list once at startup and shows it as an admin table
//! that can be searched, paged, edited in place and pruned. Nothing is written
//! back: every change lives in memory until the program exits.
//!
//! ## Usage
//!
//! ```bash
//! # Fetch the built-in member list
//! roster
//!
//! # Fetch from another URL
//! roster --url https://example.com/members.json
//!
//! # Load a local copy of the payload
//! roster --file ./members.json
//!
//! # Debug mode - print loaded members and exit
//! roster --debug
//! ```
//!
//! ## Logging
//!
//! The TUI owns stdout, so diagnostics go to a log file (by default
//! `roster.log` in the platform data directory). The level is read from the
//! `ROSTER_LOG` environment variable and defaults to `info`.
//!
//! ## Key Bindings
//!
//! - `j` / `k` / `Up` / `Down` - Move between rows
//! - `h` / `l` / `Left` / `Right` - Previous / next page
//! - `Space` - Check the current row, `a` - check all
//! - `e` / `Enter` - Edit the current row, or save it
//! - `d` - Delete the current row, `D` - delete checked rows
//! - `/` - Search
//! - `q` / `Ctrl+c` - Quit

use roster::member::{self, Member};
use roster::ui;
use roster::ui::config::Config;
use roster::ui::theme::Theme;
use roster::ui::App;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing_subscriber::EnvFilter;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Roster - search, page, edit and prune a member list from the terminal
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal admin table for member lists", long_about = None)]
struct Args {
    /// URL of the member list (JSON array)
    #[arg(short, long, value_name = "URL", conflicts_with = "file")]
    url: Option<String>,

    /// Load the member list from a local JSON file instead of fetching it
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Write diagnostics to this file instead of the default log location
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Print the loaded members and exit
    #[arg(long)]
    debug: bool,
}

/// Where the member list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MemberSource {
    Url(String),
    File(PathBuf),
}

impl MemberSource {
    fn resolve(args: &Args, config: &Config) -> Self {
        match &args.file {
            Some(path) => MemberSource::File(path.clone()),
            None => MemberSource::Url(config.resolve_source_url(args.url.as_deref())),
        }
    }

    async fn load(self) -> Result<Vec<Member>> {
        match self {
            MemberSource::Url(url) => member::fetch_members(&url).await,
            MemberSource::File(path) => member::load_members_from_file(&path),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

fn default_log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "roster")
        .context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("roster.log"))
}

/// Install a file-backed tracing subscriber and return the log path.
fn init_logging(path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_log_path()?,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env("ROSTER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))?;

    Ok(path)
}

async fn run_application(args: Args) -> Result<()> {
    if let Err(e) = init_logging(args.log.as_deref()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let config = Config::load();
    let theme = Theme::by_name(&config.theme)
        .unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "unknown theme, using default");
            Theme::default_theme()
        })
        .clone();

    let source = MemberSource::resolve(&args, &config);
    tracing::info!(?source, "starting");

    // Debug mode: load before any terminal setup, print members and exit
    if args.debug {
        let members = source.load().await?;
        for m in &members {
            println!(
                "  Id: {}\n    Name: {}\n    Email: {}\n    Role: {}\n",
                m.id, m.name, m.email, m.role
            );
        }
        println!("\nTotal: {} members", members.len());
        return Ok(());
    }

    // The table starts empty and fills in when the loader reports back
    let (tx, mut rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = tx.send(source.load().await);
    });

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(theme);
    let mut config = config;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        &mut event_reader,
        &mut rx,
        &mut config,
    );

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Hand the loader's result to the app once it arrives.
fn poll_loader(app: &mut App, loader: &mut oneshot::Receiver<Result<Vec<Member>>>) {
    if !app.loading {
        return;
    }
    match loader.try_recv() {
        Ok(Ok(members)) => app.load_members(members),
        Ok(Err(e)) => {
            tracing::error!(error = %format!("{e:#}"), "failed to load members");
            app.load_failed();
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Closed) => {
            tracing::error!("member loader stopped without a result");
            app.load_failed();
        }
    }
}

fn save_theme(app: &mut App, config: &mut Config) {
    if !app.pending_config_save {
        return;
    }
    app.pending_config_save = false;
    config.theme = app.theme.name.to_string();
    if let Err(e) = config.save() {
        tracing::warn!(error = %format!("{e:#}"), "failed to save config");
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    loader: &mut oneshot::Receiver<Result<Vec<Member>>>,
    config: &mut Config,
) -> Result<()> {
    loop {
        poll_loader(app, loader);
        save_theme(app, config);

        terminal
            .draw(|f| ui::render(f, app))
            .map_err(|e| anyhow!("Failed to draw terminal UI: {e}"))?;

        // Poll faster while the initial fetch is outstanding
        let poll_timeout = if app.loading {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };

        let Some(event) = event_reader.read_event(poll_timeout)? else {
            continue;
        };

        if let Event::Key(key) = event {
            ui::handle_key(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            match self.events.pop_front() {
                Some(event) => Ok(Some(event)),
                None => Err(anyhow!("event script exhausted")),
            }
        }
    }

    /// Helper to create a key event
    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn members() -> Vec<Member> {
        (1..=3)
            .map(|i| Member::new(i, format!("User {i}"), format!("u{i}@x.com"), "member"))
            .collect()
    }

    fn run_scripted(
        events: Vec<Event>,
        loaded: Option<Result<Vec<Member>>>,
    ) -> (App, Result<()>) {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
        let mut app = App::new(Theme::default_theme().clone());
        let mut reader = MockEventReader::new(events);
        let mut config = Config::default();

        let (tx, mut rx) = oneshot::channel();
        match loaded {
            Some(result) => {
                let _ = tx.send(result);
            }
            None => drop(tx),
        }

        let result = run_app(&mut terminal, &mut app, &mut reader, &mut rx, &mut config);
        (app, result)
    }

    #[test]
    fn test_run_app_quits_on_q() {
        let (app, result) = run_scripted(vec![key_event(KeyCode::Char('q'))], Some(Ok(members())));
        assert!(result.is_ok());
        assert!(app.should_quit);
        assert_eq!(app.table.store().len(), 3);
    }

    #[test]
    fn test_run_app_bulk_delete() {
        let events = vec![
            key_event(KeyCode::Char('j')),
            key_event(KeyCode::Char(' ')),
            key_event(KeyCode::Char('j')),
            key_event(KeyCode::Char(' ')),
            key_event(KeyCode::Char('D')),
            key_event(KeyCode::Char('q')),
        ];
        let (app, result) = run_scripted(events, Some(Ok(members())));
        assert!(result.is_ok());
        let ids: Vec<i64> = app.table.store().members().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1]);
        assert!(app.table.selection().is_empty());
    }

    #[test]
    fn test_run_app_load_failure_leaves_table_empty() {
        let events = vec![key_event(KeyCode::Char('q'))];
        let (app, result) = run_scripted(events, Some(Err(anyhow!("connection refused"))));
        assert!(result.is_ok());
        assert!(!app.loading);
        assert!(app.table.store().is_empty());
        assert!(app.status.is_none());
    }

    #[test]
    fn test_run_app_dropped_loader() {
        let (app, result) = run_scripted(vec![key_event(KeyCode::Char('q'))], None);
        assert!(result.is_ok());
        assert!(!app.loading);
    }

    #[test]
    fn test_run_app_propagates_reader_errors() {
        let (_, result) = run_scripted(Vec::new(), Some(Ok(members())));
        let err = result.expect_err("reader exhausted");
        assert!(err.to_string().contains("event script exhausted"));
    }

    #[test]
    fn test_member_source_resolution() {
        let config = Config::default();

        let args = Args::parse_from(["roster"]);
        assert_eq!(
            MemberSource::resolve(&args, &config),
            MemberSource::Url(member::DEFAULT_SOURCE_URL.to_string())
        );

        let args = Args::parse_from(["roster", "--url", "http://localhost/m.json"]);
        assert_eq!(
            MemberSource::resolve(&args, &config),
            MemberSource::Url("http://localhost/m.json".to_string())
        );

        let args = Args::parse_from(["roster", "--file", "members.json"]);
        assert_eq!(
            MemberSource::resolve(&args, &config),
            MemberSource::File(PathBuf::from("members.json"))
        );
    }

    #[test]
    fn test_args_url_conflicts_with_file() {
        let result = Args::try_parse_from(["roster", "--url", "http://x", "--file", "m.json"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_member_source_file_missing() {
        let source = MemberSource::File(PathBuf::from("/nonexistent/members.json"));
        let err = source.load().await.expect_err("missing file");
        assert!(err.to_string().contains("Failed to read member file"));
    }

    #[test]
    fn test_init_logging_creates_file() {
        let temp_dir = tempfile::TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("logs").join("roster.log");
        // A global subscriber may already be installed by another test
        let _ = init_logging(Some(&path));
        assert!(path.exists());
    }
}
