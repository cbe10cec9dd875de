use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{read as event_read, Event as CrosstermEvent};
use jot::config::Config;
use jot::config_io::{self, DirectoryContext};
use jot::input::key::{self, InputEvent};
use jot::services::tracing_setup;
use jot::session::EditorSession;
use jot::view::render::{render_session, ScreenLayout};
use ratatui::layout::{Rect, Size};
use ratatui::DefaultTerminal;
use std::path::PathBuf;

/// A small modal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "jot")]
#[command(about = "A small modal terminal text editor", long_about = None)]
#[command(version)]
struct Args {
    /// File to edit. It is created on the first save if it does not exist.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn layout_for(size: Size, config: &Config) -> ScreenLayout {
    ScreenLayout::compute(
        Rect::new(0, 0, size.width, size.height),
        config.editor.show_status_bar,
    )
}

fn dump_config(args: &Args, dir_context: &DirectoryContext) -> AnyhowResult<()> {
    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config_io::load_config(None, dir_context),
    };
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("{}", json);
    Ok(())
}

/// Draw, wait for an event, apply it; until the quit key arrives
fn run(
    terminal: &mut DefaultTerminal,
    session: &mut EditorSession,
    config: &Config,
) -> AnyhowResult<()> {
    let mut layout = layout_for(terminal.size()?, config);

    loop {
        terminal.draw(|frame| render_session(frame, session, &layout))?;

        match event_read()? {
            CrosstermEvent::Key(key_event) => {
                let Some(event) = key::translate(&key_event, session.keys()) else {
                    continue;
                };
                if event == InputEvent::Quit {
                    tracing::info!("Quit requested");
                    return Ok(());
                }
                if let Err(e) = session.handle_input(event) {
                    session.set_status_message(format!("save failed: {e:#}"));
                }
            }
            CrosstermEvent::Resize(width, height) => {
                layout = layout_for(Size::new(width, height), config);
                session.resize(layout.editor);
            }
            _ => {}
        }
    }
}

fn start(terminal: &mut DefaultTerminal, args: &Args, config: &Config) -> AnyhowResult<()> {
    let size = terminal.size()?;
    tracing::info!("Terminal size: {}x{}", size.width, size.height);

    let layout = layout_for(size, config);
    let mut session = match &args.file {
        Some(path) => EditorSession::load(path, layout.editor, config.keys.clone()),
        None => EditorSession::new(layout.editor, config.keys.clone()),
    };
    run(terminal, &mut session, config)
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();
    let dir_context = DirectoryContext::from_system()?;

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        return dump_config(&args, &dir_context);
    }

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| dir_context.default_log_path());
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled: {e:#}");
    }
    tracing::info!("Editor starting");

    let config = config_io::load_config(args.config.as_deref(), &dir_context);

    let mut terminal = ratatui::init();
    let result = start(&mut terminal, &args, &config);
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!("Editor exited with error: {:#}", e);
    }
    result
}
