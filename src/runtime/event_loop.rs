use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, InputMode, InsertTarget};
use crate::config;
use crate::ui;

/// Main terminal event loop: draws the UI and feeds key presses to `app`.
/// Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Dispatch one key press. Returns `true` when shutdown is requested.
fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.mode {
        InputMode::Normal => return handle_normal_key(key, app),
        InputMode::ConfirmClear => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_clear(true),
            KeyCode::Esc => app.cancel_input(),
            _ => app.confirm_clear(false),
        },
        _ => match key.code {
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Enter => app.submit_input(),
            KeyCode::Backspace => app.pop_input_char(),
            KeyCode::Char(c) => app.push_input_char(c),
            _ => {}
        },
    }

    false
}

fn handle_normal_key(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            tracing::info!("quit requested with {} tracks queued", app.queue.len());
            return true;
        }
        KeyCode::Char('a') => app.begin_track_form(InsertTarget::End),
        KeyCode::Char('i') => app.begin_track_form(InsertTarget::AfterCurrent),
        KeyCode::Char('d') => app.begin_remove_by_title(),
        KeyCode::Char('x') => app.remove_current(),
        KeyCode::Char('j') | KeyCode::Char('l') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Char('h') | KeyCode::Up => app.prev(),
        KeyCode::Char('g') => app.begin_jump(),
        KeyCode::Char('c') => app.request_clear(),
        _ => {}
    }

    false
}
