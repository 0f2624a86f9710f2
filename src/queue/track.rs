use std::fmt;

/// Rejections raised while building a [`Track`] from user-supplied text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    #[error("track title must not be empty")]
    EmptyTitle,
}

/// A queued track record.
///
/// `duration` is kept as the display text the user typed (e.g. `3:45`); it is
/// never parsed into a time value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    title: String,
    artist: Option<String>,
    duration: Option<String>,
}

/// Trim `value` and drop it entirely when nothing is left.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl Track {
    /// Build a track, rejecting a blank title.
    ///
    /// All fields are trimmed; blank `artist`/`duration` become `None`.
    pub fn new(
        title: &str,
        artist: Option<&str>,
        duration: Option<&str>,
    ) -> Result<Self, TrackError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TrackError::EmptyTitle);
        }

        Ok(Self {
            title: title.to_string(),
            artist: non_blank(artist),
            duration: non_blank(duration),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    /// `Title by Artist [3:45]`, omitting the parts that are absent.
    pub fn display(&self) -> String {
        let mut parts: Vec<String> = vec![self.title.clone()];
        if let Some(artist) = self.artist() {
            parts.push(format!("by {artist}"));
        }
        if let Some(duration) = self.duration() {
            parts.push(format!("[{duration}]"));
        }
        parts.join(" ")
    }

    /// Case-insensitive title comparison used by removal.
    pub(crate) fn title_matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase() == needle_lower
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
