//! Configuration loader and schema types.
//!
//! This module exposes the settings that shape queue behavior, rendering
//! and logging, plus helpers to load them from disk and the environment.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;
