use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;

use listnav_core::AppConfig;
use listnav_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    widgets,
};

pub fn run(config: Arc<AppConfig>, file: Option<PathBuf>, count: usize) -> Result<()> {
    let items = load_items(file.as_deref(), count)?;
    info!(items = items.len(), "starting list");

    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap, &config.bindings);
    let mut app = App::new(config.clone(), items);

    // Create event handler, polling faster while animating
    let event_handler = EventHandler::new(
        config.ui.tick_rate_ms,
        config.ui.scroll.frame_interval(),
    );

    // Setup terminal; draw on stderr so the picked item can go to stdout
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(
        stderr,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("listnav")
    )?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;
    result?;

    match app.picked {
        Some(item) => {
            info!("item picked");
            println!("{}", item);
        }
        None => info!("quit without a pick"),
    }

    Ok(())
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = false;

    loop {
        // Update scroll animation
        app.tick(Instant::now());

        // Draw UI
        terminal.draw(|frame| widgets::draw(frame, app))?;

        // Handle events (use faster tick rate during animations)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.apply_action(action);
                }
                AppEvent::Mouse(mouse) => app.on_mouse(mouse),
                // The next draw lays the list out again
                AppEvent::Resize(_, _) => {}
                AppEvent::FocusLost => app.on_focus_lost(),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Items from a file, stdin ("-") or a generated demo list
fn load_items(file: Option<&Path>, count: usize) -> Result<Vec<String>> {
    let content = match file {
        None => return Ok((1..=count).map(|i| format!("Item {}", i)).collect()),
        Some(path) if path == Path::new("-") => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read items from stdin")?;
            content
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read items from {}", path.display()))?,
    };
    Ok(parse_items(&content))
}

/// One item per non-blank line
fn parse_items(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}
