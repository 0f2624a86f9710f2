//! Application model types: `App`, `InputMode` and `Status`.
//!
//! The `App` struct owns the track queue and the prompt state used by the
//! UI. Every queue call goes through here so that `None`/`false` results
//! turn into status messages.

use std::mem;

use crate::config::QueueSettings;
use crate::queue::{Track, TrackError, TrackQueue};

/// Where a track built by the form ends up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertTarget {
    /// Append after the last track.
    End,
    /// Splice right after the current track.
    AfterCurrent,
}

/// Which field of the track form is being typed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormStep {
    Title,
    Artist,
    Duration,
}

/// Fields collected so far by the track form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackDraft {
    pub title: String,
    pub artist: String,
}

/// What the keyboard is currently feeding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    TrackForm {
        target: InsertTarget,
        step: FormStep,
        draft: TrackDraft,
    },
    RemoveTitle,
    JumpTo,
    ConfirmClear,
}

impl Default for InputMode {
    fn default() -> Self {
        Self::Normal
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Last message shown in the status box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

const EMPTY_QUEUE: &str = "Queue is empty. Add tracks first.";

/// The main application model.
pub struct App {
    pub queue: TrackQueue,
    pub mode: InputMode,
    pub input: String,
    pub status: Option<Status>,
    settings: QueueSettings,
}

impl App {
    /// Create an `App` around an empty queue.
    pub fn new(settings: QueueSettings) -> Self {
        Self {
            queue: TrackQueue::new(),
            mode: InputMode::Normal,
            input: String::new(),
            status: None,
            settings,
        }
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    fn error(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            kind: StatusKind::Error,
            text: text.into(),
        });
    }

    fn enter(&mut self, mode: InputMode) {
        self.input.clear();
        self.mode = mode;
    }

    /// Label for the open prompt, if any.
    pub fn prompt_label(&self) -> Option<&'static str> {
        match &self.mode {
            InputMode::Normal => None,
            InputMode::TrackForm { step, .. } => Some(match step {
                FormStep::Title => "Title",
                FormStep::Artist => "Artist (optional)",
                FormStep::Duration => "Duration, e.g. 3:45 (optional)",
            }),
            InputMode::RemoveTitle => Some("Exact title to remove"),
            InputMode::JumpTo => Some("Position to play (1-n)"),
            InputMode::ConfirmClear => Some("Clear the whole queue? (y/N)"),
        }
    }

    /// Open the track form.
    pub fn begin_track_form(&mut self, target: InsertTarget) {
        self.enter(InputMode::TrackForm {
            target,
            step: FormStep::Title,
            draft: TrackDraft::default(),
        });
    }

    /// Open the remove-by-title prompt, unless there is nothing to remove.
    pub fn begin_remove_by_title(&mut self) {
        if self.queue.is_empty() {
            self.error("No tracks to remove.");
            return;
        }
        self.enter(InputMode::RemoveTitle);
    }

    /// Open the jump prompt, unless the queue is empty.
    pub fn begin_jump(&mut self) {
        if self.queue.is_empty() {
            self.error(EMPTY_QUEUE);
            return;
        }
        self.enter(InputMode::JumpTo);
    }

    /// Ask for confirmation before clearing.
    pub fn request_clear(&mut self) {
        if self.queue.is_empty() {
            self.info("Queue is already empty.");
            return;
        }
        self.enter(InputMode::ConfirmClear);
    }

    /// Answer the clear confirmation.
    pub fn confirm_clear(&mut self, yes: bool) {
        if self.mode != InputMode::ConfirmClear {
            return;
        }
        self.enter(InputMode::Normal);
        if yes {
            let count = self.queue.len();
            self.queue.clear();
            tracing::info!("queue cleared by user ({} tracks)", count);
            self.info("Queue cleared.");
        } else {
            self.info("Cancelled.");
        }
    }

    /// Close any prompt without acting on it.
    pub fn cancel_input(&mut self) {
        if self.mode == InputMode::Normal {
            return;
        }
        self.enter(InputMode::Normal);
        self.info("Cancelled.");
    }

    pub fn push_input_char(&mut self, c: char) {
        if self.mode != InputMode::Normal && !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn pop_input_char(&mut self) {
        self.input.pop();
    }

    /// Remove the current track.
    pub fn remove_current(&mut self) {
        if !self.queue.remove_current() {
            self.error("No current track to remove.");
            return;
        }
        match self.queue.current() {
            Some(track) => {
                let text = format!("Removed current track. Now playing: {}", track.display());
                self.info(text);
            }
            None => self.info("Removed current track. Queue is now empty."),
        }
    }

    /// Move to the next track.
    pub fn next(&mut self) {
        match self.queue.advance().map(Track::display) {
            Some(display) => self.info(format!("Next: {display}")),
            None => self.error(EMPTY_QUEUE),
        }
    }

    /// Move to the previous track.
    pub fn prev(&mut self) {
        match self.queue.retreat().map(Track::display) {
            Some(display) => self.info(format!("Previous: {display}")),
            None => self.error(EMPTY_QUEUE),
        }
    }

    /// Act on the text typed into the open prompt.
    pub fn submit_input(&mut self) {
        let input = mem::take(&mut self.input);
        let value = input.trim();

        match mem::take(&mut self.mode) {
            InputMode::Normal => {}
            InputMode::TrackForm {
                target,
                step,
                mut draft,
            } => match step {
                FormStep::Title => {
                    if value.is_empty() {
                        self.error("A title is required.");
                        self.mode = InputMode::TrackForm {
                            target,
                            step,
                            draft,
                        };
                        return;
                    }
                    draft.title = value.to_string();
                    self.mode = InputMode::TrackForm {
                        target,
                        step: FormStep::Artist,
                        draft,
                    };
                }
                FormStep::Artist => {
                    draft.artist = value.to_string();
                    self.mode = InputMode::TrackForm {
                        target,
                        step: FormStep::Duration,
                        draft,
                    };
                }
                FormStep::Duration => self.finish_track(target, &draft, value),
            },
            InputMode::RemoveTitle => {
                if value.is_empty() {
                    self.error("Enter a title.");
                    self.mode = InputMode::RemoveTitle;
                } else if self.queue.remove_by_title(value) {
                    self.info(format!("Removed '{value}'."));
                } else {
                    self.error(format!("No track titled '{value}'."));
                }
            }
            InputMode::JumpTo => match value.parse::<i64>() {
                Ok(position) => {
                    // Zero and negatives are numbers, just never in range.
                    let hit = usize::try_from(position)
                        .ok()
                        .and_then(|p| self.queue.jump_to(p))
                        .map(Track::display);
                    match hit {
                        Some(display) => self.info(format!("Playing #{position}: {display}")),
                        None => {
                            let len = self.queue.len();
                            self.error(format!("Position out of range (1-{len})."));
                        }
                    }
                }
                Err(_) => self.error("Enter a valid number."),
            },
            InputMode::ConfirmClear => {
                self.mode = InputMode::ConfirmClear;
                self.confirm_clear(false);
            }
        }
    }

    fn finish_track(&mut self, target: InsertTarget, draft: &TrackDraft, duration: &str) {
        let artist = Some(draft.artist.as_str());
        let built: Result<Track, TrackError> = Track::new(&draft.title, artist, Some(duration));
        let track = match built {
            Ok(track) => track,
            Err(e) => {
                tracing::warn!("rejected track form: {}", e);
                self.error(e.to_string());
                return;
            }
        };
        let display = track.display();

        match target {
            InsertTarget::End => {
                if self.settings.select_appended {
                    self.queue.append_and_select(track);
                } else {
                    self.queue.append(track);
                }
                self.info(format!("Added {display}"));
            }
            InsertTarget::AfterCurrent => {
                if self.settings.follow_inserted {
                    self.queue.insert_after_cursor(track);
                    self.info(format!("Now playing: {display}"));
                } else {
                    self.queue.insert_after_cursor_quietly(track);
                    self.info(format!("Queued next: {display}"));
                }
            }
        }
    }
}
