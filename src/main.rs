use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use momentum::{
    app::App,
    app_dirs::AppDirs,
    band::Band,
    config::{Config, ConfigStore, FileConfigStore},
    form::{FormDefaults, MAX_DAILY_HOURS, MIN_DAILY_HOURS},
    logging::init_logging,
    runtime::{self, ChannelEvents},
    ui,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};
use tracing::info;

/// terminal study planner: tick off daily tasks and watch your predicted band rise
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Enter your current and target IELTS band, the days left and your daily study time, then work through today's checklist while the dashboard tracks your predicted score and progress."
)]
pub struct Cli {
    /// current band to prefill (0.0 to 9.0 in 0.5 steps)
    #[clap(short = 'c', long, value_parser = parse_band)]
    current: Option<f64>,

    /// target band to prefill (0.5 to 9.0 in 0.5 steps)
    #[clap(short = 't', long, value_parser = parse_band)]
    target: Option<f64>,

    /// days left until the exam
    #[clap(short = 'd', long)]
    days: Option<u32>,

    /// daily study hours (0.5 to 24)
    #[clap(long, value_parser = parse_hours)]
    hours: Option<f64>,

    /// path of the config file holding the form defaults
    #[clap(long)]
    config: Option<PathBuf>,

    /// save the effective defaults to the config file and exit
    #[clap(long)]
    write_config: bool,

    /// where to write the log (default: ~/.local/state/momentum/momentum.log)
    #[clap(long)]
    log_file: Option<PathBuf>,
}

fn parse_band(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    Band::from_f64(value)
        .map(Band::as_f64)
        .ok_or_else(|| "expected a band between 0.0 and 9.0 in 0.5 steps".to_string())
}

fn parse_hours(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if (MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "expected between {} and {} hours",
            MIN_DAILY_HOURS, MAX_DAILY_HOURS
        ))
    }
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Layers the command line flags over `base`.
    fn form_defaults(&self, base: FormDefaults) -> FormDefaults {
        FormDefaults {
            current_band: self
                .current
                .and_then(Band::from_f64)
                .unwrap_or(base.current_band),
            target_band: self
                .target
                .and_then(Band::from_f64)
                .unwrap_or(base.target_band),
            days_left: self.days.unwrap_or(base.days_left),
            daily_hours: self.hours.unwrap_or(base.daily_hours),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().or_else(AppDirs::log_path);
    init_logging(log_path.as_deref());

    let store = cli.config_store();
    let defaults = cli.form_defaults(store.load().form_defaults());

    if cli.write_config {
        store.save(&Config::from(defaults))?;
        info!(path = %store.path().display(), "config written");
        println!("wrote {}", store.path().display());
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("starting");
    let mut app = App::new(defaults);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut events = ChannelEvents::terminal();
    runtime::run(app, &mut events, |app| {
        terminal.draw(|f| ui::draw(app, f)).map(|_| ())
    })?;
    Ok(())
}
