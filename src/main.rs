//! SCITUI - Terminal Calculator Suite
//!
//! A terminal application bundling three small tools: a scientific
//! calculator with reactive expression evaluation, a product manager
//! over a flat JSON store, and a static planet browser.

use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, AppMode, Screen};
use infrastructure::ProductRepository;
use presentation::{render_ui, InputHandler};


/// Entry point for the SCITUI terminal suite.
///
/// Sets up the terminal interface, loads the product store, and runs the
/// main event loop until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();

    // The store auto-creates on first save; a missing file is not an error.
    let repository = ProductRepository::new(app.store_path.clone());
    match repository.get_all() {
        Ok(products) => app.set_products(products),
        Err(error) => app.status_message = Some(format!("Store load failed: {}", error)),
    }

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Handles terminal rendering and keyboard input processing. Quits on
/// Ctrl+Q anywhere, or on 'q' in normal mode outside the calculator
/// screen (where 'q' is an ordinary input character).
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Char('q') if ctrl => return Ok(()),
                    KeyCode::Char('q')
                        if matches!(app.mode, AppMode::Normal)
                            && app.screen != Screen::Calculator =>
                    {
                        return Ok(())
                    }
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
