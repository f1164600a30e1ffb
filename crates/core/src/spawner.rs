//! Fruit spawner - uniform placement on free cells
//!
//! Placement first probes random cells (cheap while the board is mostly
//! free), then falls back to drawing a uniform index among the free cells so
//! a crowded board never spins. A full board yields `None`.
//!
//! The RNG is seeded explicitly so games are reproducible in tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::grid::Grid;
use crate::types::{Position, GRID_SIZE, SPAWN_ATTEMPTS};

/// Seeded fruit placement
#[derive(Debug, Clone)]
pub struct FruitSpawner {
    rng: SmallRng,
}

impl FruitSpawner {
    /// Create a new spawner with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Pick a free cell uniformly at random.
    ///
    /// Never returns a snake or fruit cell. Returns `None` only when the grid
    /// has no free cell left.
    pub fn spawn(&mut self, grid: &Grid) -> Option<Position> {
        for _ in 0..SPAWN_ATTEMPTS {
            let pos = Position::new(
                self.rng.gen_range(0..GRID_SIZE) as i32,
                self.rng.gen_range(0..GRID_SIZE) as i32,
            );
            if grid.is_empty_at(pos) {
                return Some(pos);
            }
        }

        let free = grid.empty_count();
        if free == 0 {
            return None;
        }
        grid.nth_empty(self.rng.gen_range(0..free))
    }
}

impl Default for FruitSpawner {
    fn default() -> Self {
        Self::new(1)
    }
}
