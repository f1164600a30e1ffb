//! Terminal rendering for the snake game.
//!
//! Rendering is split in two: [`GameView`] turns a `core::GameSnapshot`
//! into a framebuffer without touching the terminal, and
//! [`TerminalRenderer`] flushes framebuffers through crossterm, re-sending
//! only the cells that changed since the previous frame.
//!
//! No widget toolkit is involved; each grid cell maps to two terminal
//! columns (or half a row in the compact layout).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, CellLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
