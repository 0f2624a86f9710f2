//! Track queue: the ordered, doubly-linked list of tracks behind the player.
//!
//! `TrackQueue` keeps a "now playing" cursor that stays on a live track
//! through every insertion and removal. It performs no I/O; the `app` layer
//! drives it and renders `TrackQueue::iter`.

mod iter;
mod list;
mod track;

pub use iter::Entry;
pub use list::TrackQueue;
pub use track::{Track, TrackError};

#[cfg(test)]
mod tests;
