use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use colorpref::tui::Terminal;
use colorpref::{Config, PreferenceScreen, TomlFileStore};

/// Log to a file so the terminal UI stays clean
fn init_logging() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("colorpref")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("colorpref.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("colorpref=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Load configuration
    let config = Config::load()?;

    init_logging();
    tracing::info!("colorpref v{} starting", env!("CARGO_PKG_VERSION"));

    // Build the screen before touching the terminal so configuration
    // errors are reported on a normal screen
    let store = TomlFileStore::open(config.store.path())?;
    let mut screen = PreferenceScreen::new(config, store)?;

    let terminal = Terminal::new()?;
    screen.run(terminal)?;

    Ok(())
}
