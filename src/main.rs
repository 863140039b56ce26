// algotty: step-by-step sorting and tree traversal visualizer

use std::fs::File;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algotty::config::Cli;
use algotty::input::{self, Dataset};
use algotty::playback::PlaybackController;
use algotty::ui::App;

/// Route diagnostics to `path`. The TUI owns the terminal, so nothing is
/// logged unless a file is given.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Error: cannot open log file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let limits = cli.input_limits();

    let numbers = match input::array_input(cli.numbers.as_deref(), &limits) {
        Ok(numbers) => numbers,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let tree = match input::tree_input(cli.tree_values.as_deref(), &limits) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let controller = PlaybackController::new(Dataset::Array(numbers), cli.playback_config());
    let mut app = App::new(controller, Rc::new(tree), limits, cli.sort_order());

    if let Some(key) = cli.algorithm.as_deref() {
        if let Err(e) = app.preselect(key) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
    app.set_autoplay_on_start(cli.autoplay);

    tracing::info!("starting terminal UI");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
