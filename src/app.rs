//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the track queue, the
//! active prompt and the last status message.

mod model;

pub use model::*;
