//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation engine: grid state, the per-tick
//! transition, fruit placement and reset.
//! It has **zero dependencies** on UI, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule and edge case
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation tick
//!
//! # Module Structure
//!
//! - [`grid`]: 32x32 lattice of empty / fruit / snake cells with decay counters
//! - [`game_state`]: Head, heading, fruit, length and the tick transition
//! - [`spawner`]: Uniform fruit placement on free cells
//! - [`snapshot`]: Copyable frame data for renderers
//! - [`config`]: Settings a reset restores
//!
//! # Game Rules
//!
//! - **Body as lifetimes**: The head cell is written with `length + 1`; every
//!   tick all snake cells lose one tick and vanish at zero
//! - **Growth**: Eating adds one tick to *every* snake cell, so the tail waits
//!   one extra tick
//! - **Walls**: `NoWalls` wraps to the opposite edge, `Classic` resets the game
//! - **Self-collision**: Moving into any snake cell resets the game
//! - **No reversal**: A request for the exact reverse of the heading is ignored
//! - **Full board**: When no free cell is left for a fruit the game is won
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, GameAction, Position, TickOutcome};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.tick(), TickOutcome::Idle);
//!
//! game.apply_action(GameAction::Turn(Direction::Right));
//! game.tick();
//! assert_eq!(game.head(), Position::new(17, 16));
//!
//! // Reversing is ignored
//! assert!(!game.apply_action(GameAction::Turn(Direction::Left)));
//! ```
//!
//! # Timing
//!
//! The core has no clock. A scheduler calls
//! [`GameState::tick`](game_state::GameState::tick) once every
//! [`GameState::tick_interval`](game_state::GameState::tick_interval)
//! (`1s / speed`, 6 ticks per second by default).

pub mod config;
pub mod game_state;
pub mod grid;
pub mod snapshot;
pub mod spawner;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameSettings;
pub use game_state::GameState;
pub use grid::Grid;
pub use snapshot::GameSnapshot;
pub use spawner::FruitSpawner;
