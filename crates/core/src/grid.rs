//! Grid module - the decay-counter lattice
//!
//! The grid is a `GRID_SIZE` x `GRID_SIZE` lattice where each cell is empty,
//! the fruit, or a snake cell carrying its remaining lifetime.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! The snake body is never stored as a segment list. The head cell is written
//! with `length + 1` each tick and every snake cell then loses one tick of
//! lifetime, so exactly `length` cells stay alive. Growing by one means adding
//! one tick of lifetime to every snake cell.

use crate::types::{Cell, Position, GRID_CELLS, GRID_SIZE};

/// The game grid - `GRID_SIZE` x `GRID_SIZE` cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * GRID_SIZE + x)
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_CELLS],
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(pos: Position) -> Option<usize> {
        if !pos.in_bounds() {
            return None;
        }
        Some((pos.y as usize) * GRID_SIZE + (pos.x as usize))
    }

    #[inline(always)]
    fn position(index: usize) -> Position {
        Position::new((index % GRID_SIZE) as i32, (index / GRID_SIZE) as i32)
    }

    /// Get cell at `pos`
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Get cell at (x, y); out-of-bounds reads as `Empty`
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return Cell::Empty;
        }
        self.cells[y * GRID_SIZE + x]
    }

    /// Set cell at `pos`
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if `pos` is in bounds and free
    pub fn is_empty_at(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Check if `pos` is in bounds and part of the snake
    pub fn is_snake_at(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Snake(_)))
    }

    /// Add one tick of lifetime to every snake cell
    pub fn grow_snake(&mut self) {
        for cell in &mut self.cells {
            if let Cell::Snake(k) = cell {
                *k += 1;
            }
        }
    }

    /// Remove one tick of lifetime from every snake cell, freeing cells that
    /// reach zero
    pub fn decay_snake(&mut self) {
        for cell in &mut self.cells {
            if let Cell::Snake(k) = *cell {
                *cell = if k > 1 { Cell::Snake(k - 1) } else { Cell::Empty };
            }
        }
    }

    /// Number of free cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Number of snake cells
    pub fn snake_len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_snake()).count()
    }

    /// Number of fruit cells
    pub fn fruit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_fruit()).count()
    }

    /// The `n`-th free cell in row-major order
    pub fn nth_empty(&self, n: usize) -> Option<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .nth(n)
            .map(|(idx, _)| Self::position(idx))
    }

    /// Iterate every cell with its position, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, c)| (Self::position(idx), *c))
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Copy the grid into a caller-owned 2D buffer (`rows[y][x]`).
    pub fn write_rows_into(&self, rows: &mut [[Cell; GRID_SIZE]; GRID_SIZE]) {
        for (y, row) in rows.iter_mut().enumerate() {
            let start = y * GRID_SIZE;
            row.copy_from_slice(&self.cells[start..start + GRID_SIZE]);
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
