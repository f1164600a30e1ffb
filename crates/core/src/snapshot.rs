use crate::types::{
    Cell, GameMode, Heading, Position, GRID_SIZE, INITIAL_FRUITS_EATEN, INITIAL_MODE,
    INITIAL_SPEED,
};

/// Read-only copy of everything a renderer needs for one frame.
///
/// Only the sign of a cell matters for drawing (empty, fruit, snake); the
/// lifetime is kept so views can shade the tail if they want to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[Cell; GRID_SIZE]; GRID_SIZE],
    pub head: Position,
    pub fruit: Option<Position>,
    pub mode: GameMode,
    pub speed: u32,
    pub fruits_eaten: u32,
    pub heading: Heading,
    pub episode_id: u32,
    pub tick_count: u64,
    pub won: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Cell at (x, y); out-of-bounds reads as `Empty`
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(Cell::Empty)
    }

    /// Number of snake cells on the grid
    pub fn snake_len(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| c.is_snake())
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
            head: Position::center(),
            fruit: None,
            mode: INITIAL_MODE,
            speed: INITIAL_SPEED,
            fruits_eaten: INITIAL_FRUITS_EATEN,
            heading: Heading::Idle,
            episode_id: 0,
            tick_count: 0,
            won: false,
        }
    }
}
