use std::path::Path;

use crate::config::{self, Settings};

/// Load settings, falling back to defaults when the file is unreadable
/// or fails validation.
///
/// Runs before the terminal is switched to raw mode, so problems are
/// reported on stderr together with the config path that was tried.
pub fn load_settings() -> Settings {
    match checked(Settings::load()) {
        Ok(settings) => settings,
        Err(reason) => {
            let source = config::resolve_config_path();
            eprintln!(
                "encore: {reason} ({}), using defaults",
                describe_source(source.as_deref())
            );
            Settings::default()
        }
    }
}

fn checked(loaded: Result<Settings, ::config::ConfigError>) -> Result<Settings, String> {
    let settings = loaded.map_err(|e| format!("failed to load config: {e}"))?;
    settings
        .validate()
        .map_err(|e| format!("invalid config: {e}"))?;
    Ok(settings)
}

fn describe_source(path: Option<&Path>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "no config directory".to_string(),
    }
}
