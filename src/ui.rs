//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the queue and prompt state held by `App` using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, StatusKind};
use crate::config::UiSettings;
use crate::queue::Entry;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("a", "add at end");
    map.insert("i", "insert after current");
    map.insert("d", "remove by title");
    map.insert("x", "remove current");
    map.insert("j/l", "next");
    map.insert("k/h", "previous");
    map.insert("g", "jump to position");
    map.insert("c", "clear");
    map.insert("q", "quit");
    map
});

/// Render the controls help text in a stable, human-friendly order.
fn controls_text() -> String {
    let order = ["a", "i", "j/l", "k/h", "g", "d", "x", "c", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format one queue row: `<marker> <position>. <track>`.
pub fn entry_line(entry: &Entry<'_>, ui: &UiSettings) -> String {
    let marker = if entry.is_cursor {
        ui.cursor_marker.as_str()
    } else {
        ""
    };
    let marker_width = ui.cursor_marker.chars().count();
    format!(
        "{:<mw$} {:0pw$}. {}",
        marker,
        entry.position,
        entry.track.display(),
        mw = marker_width,
        pw = ui.position_width,
    )
}

fn status_text(app: &App) -> String {
    let mut parts: Vec<String> = Vec::new();

    match app.queue.current() {
        Some(track) => parts.push(format!("Now playing: {}", track.display())),
        None => parts.push("Nothing playing".to_string()),
    }

    let position = app
        .queue
        .cursor_position()
        .map(|p| format!("{}/{}", p, app.queue.len()))
        .unwrap_or_else(|| "0/0".to_string());
    parts.push(format!("Track {}", position));

    parts.join(" • ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let prompt_height = if app.prompt_label().is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(prompt_height),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" encore ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box: now playing plus the last command result.
    let mut status_lines = vec![status_text(app)];
    let mut status_style = Style::default();
    if let Some(status) = &app.status {
        status_lines.push(status.text.clone());
        if status.kind == StatusKind::Error {
            status_style = status_style.fg(Color::Red);
        }
    }
    let status_par = Paragraph::new(status_lines.join("\n"))
        .style(status_style)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Queue list
    {
        // Only build ListItems for the visible window, centered on the cursor.
        let total = app.queue.len();
        let list_height = chunks[2].height.saturating_sub(2) as usize;
        let cursor_pos = app.queue.cursor_position().unwrap_or(1).saturating_sub(1);
        let (start, end) = if total <= list_height || list_height == 0 {
            (0, total)
        } else {
            let half = list_height / 2;
            let mut start = cursor_pos.saturating_sub(half);
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height)
        };

        let items: Vec<ListItem> = app
            .queue
            .iter()
            .skip(start)
            .take(end - start)
            .map(|entry| ListItem::new(entry_line(&entry, ui_settings)))
            .collect();

        let title = if total == 0 {
            " queue (empty) ".to_string()
        } else {
            format!(" queue ({}) ", total)
        };
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default();
        if total > 0 {
            state.select(Some(cursor_pos - start));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Prompt
    if let Some(label) = app.prompt_label() {
        let prompt = Paragraph::new(format!("{}_", app.input)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} (enter to submit, esc to cancel) ", label)),
        );
        frame.render_widget(prompt, chunks[3]);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueueSettings;
    use crate::queue::Track;

    fn app_with(names: &[&str]) -> App {
        let mut app = App::new(QueueSettings::default());
        for name in names {
            app.queue.append(Track::new(name, None, None).unwrap());
        }
        app
    }

    #[test]
    fn entry_line_marks_cursor_and_pads_position() {
        let mut app = app_with(&["A", "B"]);
        app.queue.jump_to(2);
        let ui = UiSettings::default();

        let lines: Vec<String> = app.queue.iter().map(|e| entry_line(&e, &ui)).collect();
        assert_eq!(lines, vec!["   01. A", "-> 02. B"]);
    }

    #[test]
    fn entry_line_honors_custom_marker_and_width() {
        let app = app_with(&["Solo"]);
        let ui = UiSettings {
            cursor_marker: "*".into(),
            position_width: 3,
            ..UiSettings::default()
        };
        let line = app.queue.iter().map(|e| entry_line(&e, &ui)).next();
        assert_eq!(line.as_deref(), Some("* 001. Solo"));
    }

    #[test]
    fn status_text_shows_position_or_empty_state() {
        let app = app_with(&[]);
        assert_eq!(status_text(&app), "Nothing playing • Track 0/0");

        let mut app = app_with(&["A", "B", "C"]);
        app.queue.advance();
        assert_eq!(status_text(&app), "Now playing: B • Track 2/3");
    }

    #[test]
    fn controls_text_lists_every_binding() {
        let text = controls_text();
        for key in ["[a]", "[i]", "[j/l]", "[k/h]", "[g]", "[d]", "[x]", "[c]", "[q]"] {
            assert!(text.contains(key), "missing {key}");
        }
    }
}
