//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, input mapping).
//!
//! # Grid
//!
//! The playfield is a square lattice fixed at build time:
//!
//! - **Size**: `GRID_SIZE` x `GRID_SIZE` cells (indexed 0..GRID_SIZE-1 on both axes)
//! - **Origin**: (0, 0) is the top-left cell, `y` grows downwards
//! - **Start cell**: the centre cell `(GRID_SIZE / 2, GRID_SIZE / 2)`
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 32 | Cells per side |
//! | `INITIAL_SPEED` | 6 | Ticks per second handed to the scheduler |
//! | `INITIAL_MODE` | `NoWalls` | Boundary policy after a reset |
//! | `INITIAL_FRUITS_EATEN` | 1 | Starting body length |
//! | `SPAWN_ATTEMPTS` | 64 | Random probes before the spawner enumerates empty cells |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, GameMode, Heading, Position, GRID_SIZE};
//!
//! let heading = Heading::Moving(Direction::Right);
//! assert!(heading.reverses(Direction::Left));
//! assert!(!Heading::Idle.reverses(Direction::Left));
//!
//! let start = Position::center();
//! assert_eq!(start.stepped(heading), Position::new(GRID_SIZE as i32 / 2 + 1, GRID_SIZE as i32 / 2));
//!
//! assert_eq!(GameMode::NoWalls.toggled(), GameMode::Classic);
//! assert_eq!(GameAction::from_str("up"), Some(GameAction::Turn(Direction::Up)));
//! ```

/// Cells per side of the square grid
pub const GRID_SIZE: usize = 32;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Scheduler target after a reset, in ticks per second
pub const INITIAL_SPEED: u32 = 6;

/// Boundary policy after a reset
pub const INITIAL_MODE: GameMode = GameMode::NoWalls;

/// Body length (and lifetime base) after a reset
pub const INITIAL_FRUITS_EATEN: u32 = 1;

/// Uniform random probes the fruit spawner makes before falling back to
/// enumerating the empty cells.
pub const SPAWN_ATTEMPTS: u32 = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_build() {
        assert_eq!(GRID_SIZE, 32);
        assert_eq!(GRID_CELLS, 1024);
        assert_eq!(INITIAL_SPEED, 6);
        assert_eq!(INITIAL_MODE, GameMode::NoWalls);
        assert_eq!(INITIAL_FRUITS_EATEN, 1);
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn opposite_directions() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert!(dir.is_opposite(dir.opposite()));
            assert!(!dir.is_opposite(dir));
        }
        assert!(!Direction::Up.is_opposite(Direction::Left));
    }

    #[test]
    fn idle_heading_reverses_nothing() {
        for dir in Direction::ALL {
            assert!(!Heading::Idle.reverses(dir));
        }
        assert!(Heading::Moving(Direction::Up).reverses(Direction::Down));
    }

    #[test]
    fn stepped_does_not_wrap() {
        let p = Position::new(0, 0);
        assert_eq!(p.stepped(Heading::Moving(Direction::Left)), Position::new(-1, 0));
        assert!(!p.stepped(Heading::Moving(Direction::Up)).in_bounds());
        assert_eq!(p.stepped(Heading::Idle), p);
    }

    #[test]
    fn cell_lifetime() {
        assert_eq!(Cell::Empty.lifetime(), 0);
        assert_eq!(Cell::Fruit.lifetime(), 0);
        assert_eq!(Cell::Snake(7).lifetime(), 7);
        assert!(Cell::Snake(1).is_snake());
        assert!(Cell::Fruit.is_fruit());
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn action_strings() {
        for action in [
            GameAction::Turn(Direction::Up),
            GameAction::Turn(Direction::Right),
            GameAction::Turn(Direction::Down),
            GameAction::Turn(Direction::Left),
            GameAction::Restart,
            GameAction::ToggleMode,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::from_str("RESTART"), Some(GameAction::Restart));
        assert_eq!(GameAction::from_str("jump"), None);
    }
}

/// Boundary-crossing policy
///
/// - **Classic**: leaving the grid ends the game (the state is reset)
/// - **NoWalls**: leaving the grid wraps the head to the opposite edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    Classic,
    #[default]
    NoWalls,
}

impl GameMode {
    /// The other boundary policy
    pub fn toggled(self) -> Self {
        match self {
            GameMode::Classic => GameMode::NoWalls,
            GameMode::NoWalls => GameMode::Classic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::NoWalls => "no-walls",
        }
    }
}

/// One of the four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Grid offset `(dx, dy)` of one step in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Returns true if turning from `self` to `other` is a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Direction committed for a tick
///
/// `Idle` only occurs between a reset and the first accepted input. While
/// idle the head does not move and the self-collision check is skipped, since
/// the lone start cell would otherwise collide with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heading {
    #[default]
    Idle,
    Moving(Direction),
}

impl Heading {
    /// Returns true if `dir` is the exact reverse of this heading
    pub fn reverses(&self, dir: Direction) -> bool {
        match self {
            Heading::Idle => false,
            Heading::Moving(current) => current.is_opposite(dir),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Heading::Idle)
    }
}

/// A cell coordinate, `0 <= x, y < GRID_SIZE` once normalized
///
/// Signed so that a raw step off the grid can be represented before the
/// boundary policy is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Start cell of every game
    pub const fn center() -> Self {
        Self::new((GRID_SIZE / 2) as i32, (GRID_SIZE / 2) as i32)
    }

    /// Offset by one cell along `heading`, without any boundary handling
    pub fn stepped(&self, heading: Heading) -> Self {
        match heading {
            Heading::Idle => *self,
            Heading::Moving(dir) => {
                let (dx, dy) = dir.delta();
                Self::new(self.x + dx, self.y + dy)
            }
        }
    }

    pub fn in_bounds(&self) -> bool {
        let n = GRID_SIZE as i32;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }
}

/// A cell on the grid
///
/// - `Empty`: free cell
/// - `Fruit`: the single fruit
/// - `Snake(k)`: snake body with `k >= 1` ticks of remaining lifetime
///
/// The lifetime is not a segment index. Every tick decrements it, and a cell
/// becomes `Empty` when it reaches zero, which is how the tail recedes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Fruit,
    Snake(u32),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_fruit(&self) -> bool {
        matches!(self, Cell::Fruit)
    }

    pub fn is_snake(&self) -> bool {
        matches!(self, Cell::Snake(_))
    }

    /// Remaining lifetime of a snake cell, 0 for anything else
    pub fn lifetime(&self) -> u32 {
        match self {
            Cell::Snake(k) => *k,
            _ => 0,
        }
    }
}

/// Player intents produced by input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading for the next tick
    Turn(Direction),
    /// Throw the current game away and start over
    Restart,
    /// Switch between `Classic` and `NoWalls`
    ToggleMode,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Turn(Direction::Left)));
    /// assert_eq!(GameAction::from_str("toggleMode"), Some(GameAction::ToggleMode));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(GameAction::Turn(Direction::Up)),
            "right" => Some(GameAction::Turn(Direction::Right)),
            "down" => Some(GameAction::Turn(Direction::Down)),
            "left" => Some(GameAction::Turn(Direction::Left)),
            "restart" => Some(GameAction::Restart),
            "togglemode" => Some(GameAction::ToggleMode),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(dir) => dir.as_str(),
            GameAction::Restart => "restart",
            GameAction::ToggleMode => "toggleMode",
        }
    }
}

/// What a single tick did
///
/// Informational only: a tick never fails. Collisions are absorbed by a reset
/// and reported here so callers do not have to diff state to notice them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Heading was idle; the head stayed put
    Idle,
    /// The head advanced one cell
    Moved,
    /// The head advanced onto the fruit and the body grew
    AteFruit,
    /// The head left the grid in `Classic` mode; the game was reset
    WallReset,
    /// The head ran into the body; the game was reset
    CollisionReset,
    /// No empty cell was left for a new fruit; the game is over and won
    Won,
}

impl TickOutcome {
    /// Returns true if this tick replaced the game with a fresh one
    pub fn is_reset(&self) -> bool {
        matches!(self, TickOutcome::WallReset | TickOutcome::CollisionReset)
    }
}
