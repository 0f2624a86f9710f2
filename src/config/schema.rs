use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/encore/config.toml` or `~/.config/encore/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ENCORE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub queue: QueueSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

/// Validation failures for otherwise well-formed settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("ui.cursor_marker must not be empty")]
    EmptyCursorMarker,
    #[error("ui.position_width must be between 1 and 6, got {0}")]
    PositionWidth(usize),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    /// Whether adding a track at the end also makes it the current track.
    /// The first track of an empty queue always becomes current.
    pub select_appended: bool,
    /// Whether "insert after current" moves the cursor onto the new track.
    pub follow_inserted: bool,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            select_appended: false,
            follow_inserted: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Marker drawn in front of the current track.
    pub cursor_marker: String,

    /// Zero-padding width for queue positions (`2` renders `01.`).
    pub position_width: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ encore: one more track ~ ".to_string(),
            cursor_marker: "->".to_string(),
            position_width: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive, e.g. `info` or `encore::queue=trace`.
    pub level: String,
    /// File that receives log lines. Logging is disabled when unset, since
    /// the terminal itself belongs to the UI.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
