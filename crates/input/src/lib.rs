//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Filtering out
//! reversals is left to the core, which knows the committed heading.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
