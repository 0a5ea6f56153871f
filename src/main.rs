use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use tagpick::app::App;
use tagpick::config::{ConfigOverrides, load_config, load_config_from_path};
use tagpick::suggest::SuggestionSource;

/// Env var naming the log file; logging is off when unset
const LOG_ENV: &str = "TAGPICK_LOG";
/// Event poll interval, which bounds timer latency
const TICK_RATE: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "tagpick")]
#[command(about = "Edit an article draft with tag autocomplete")]
#[command(version)]
struct Args {
    /// Suggestion endpoint, queried as GET <URL>?q=<keyword>
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Local tag catalog (JSON) to suggest from instead of an endpoint
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Config file (default: ~/.config/tagpick/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Quiet period before a keystroke triggers a fetch
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Maximum number of suggestions shown
    #[arg(long, value_name = "N")]
    max_suggestions: Option<usize>,

    /// Initial title
    #[arg(long, default_value = "")]
    title: String,

    /// Initial tags, comma-separated
    #[arg(long, default_value = "")]
    tags: String,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging()?;

    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config()?,
    }
    .with_overrides(ConfigOverrides {
        endpoint_url: args.endpoint.clone(),
        catalog: args.catalog.clone(),
        debounce_delay_ms: args.debounce_ms,
        max_suggestions: args.max_suggestions,
    });

    // Resolve the source before touching the terminal so errors print plainly
    let options = config.autocomplete.to_options();
    let source = SuggestionSource::from_settings(
        options.endpoint_url.as_deref(),
        config.catalog.path.as_deref(),
        options.max_suggestions,
    )?;
    let app = App::new(&args.title, &args.tags, options, source)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, app);

    if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
        log::warn!("failed to disable mouse capture: {}", e);
    }
    ratatui::restore();

    if let Some(draft) = result? {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer(&mut stdout, &draft)?;
        writeln!(stdout)?;
    }
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<tagpick::app::Draft>> {
    loop {
        app.tick(Instant::now());

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_RATE)? {
            app.handle_event(event::read()?, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(app.submitted().cloned())
}

/// Log to the file named by `TAGPICK_LOG`; stderr belongs to the TUI
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };

    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to open log file {}", PathBuf::from(&path).display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("tagpick=debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .wrap_err("failed to initialize logger")?;

    log::info!("tagpick {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
