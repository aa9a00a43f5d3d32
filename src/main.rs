use anyhow::{Context, Result};
use clap::Parser;
use peekphone::app::App;
use peekphone::cli::{Cli, CliContext};
use peekphone::styles::ThemeType;
use peekphone::utils::get_log_dir;
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture,
            crossterm::event::DisableFocusChange
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Headless commands print to stdout and skip logging
    if cli.command.is_some() {
        return cli.execute();
    }

    setup_panic_hook();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "peekphone.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let CliContext {
        config,
        config_path,
    } = CliContext::load(cli.config.as_deref())?;
    info!("Loaded config from {:?}", config_path);

    let mut app = App::new(config, config_path);
    if cli.no_colors || std::env::var_os("NO_COLOR").is_some() {
        app = app.with_theme(ThemeType::NoColor);
    }
    let result = app.run();

    drop(guard);
    result
}
