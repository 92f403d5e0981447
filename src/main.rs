use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use soundditto::{
    app::App,
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    deck::Decks,
    engine::Engine,
    language::Language,
    runtime::{AppEvent, Runner, TerminalEvents},
};
use std::{
    error::Error,
    fs::{self, OpenOptions},
    io::{self, stdin},
    path::PathBuf,
    sync::Mutex,
    time::Instant,
};
use tracing::info;

/// party word-guessing game: make the sound, your team guesses the word
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Pick an easy or a hard word, act it out using only sounds, and let your team guess. Skips cost time, hard words score double."
)]
pub struct Cli {
    /// language of the words and the interface
    #[clap(short = 'l', long, value_enum)]
    language: Option<Language>,

    /// play without the countdown and end the round by hand
    #[clap(long)]
    no_timer: bool,

    /// round length in seconds
    #[clap(short = 'd', long)]
    duration: Option<u32>,

    /// seconds taken off the clock for every skipped word
    #[clap(long)]
    skip_penalty: Option<u32>,

    /// read settings from this file instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// save the effective settings to the config file and exit
    #[clap(long)]
    write_config: bool,

    /// write logs to this file instead of the default state directory
    #[clap(long)]
    log: Option<PathBuf>,
}

impl Cli {
    /// Command line flags win over the config file
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(language) = self.language {
            config.language = language;
        }
        if self.no_timer {
            config.timer_enabled = false;
        }
        if let Some(duration) = self.duration {
            config.round_duration_secs = duration;
        }
        if let Some(penalty) = self.skip_penalty {
            config.skip_penalty_secs = penalty;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.log.clone());

    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let config = cli.apply_to(store.load());
    let rules = config.rules();
    rules.validate()?;

    if cli.write_config {
        store.save(&config)?;
        println!("wrote {}", store.path().display());
        return Ok(());
    }

    let decks = Decks::load_all()?;

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(language = %config.language, timer = config.timer_enabled, ?rules, "starting");
    let mut app = App::new(Engine::new(
        decks,
        rules,
        config.language,
        config.timer_enabled,
    ));
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::with_default_rate(TerminalEvents::spawn());

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    while !app.should_quit {
        let redraw = match runner.step() {
            AppEvent::Tick => app.on_tick(Instant::now()),
            AppEvent::Resize => true,
            AppEvent::Key(key) => app.on_key(key, Instant::now()),
        };

        if redraw && !app.should_quit {
            terminal.draw(|f| f.render_widget(&*app, f.area()))?;
        }
    }

    Ok(())
}

/// Logs go to a file; the terminal belongs to the UI. Failing to set up
/// logging is not a reason to refuse to play.
fn init_logging(path: Option<PathBuf>) {
    let Some(path) = path.or_else(AppDirs::log_path) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("soundditto=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
