//! Game state module - manages the complete game state
//!
//! This module ties together the grid, the fruit spawner and the snake's
//! head/heading. It owns the per-tick transition and the reset that every
//! fatal situation collapses into.

use std::time::Duration;

use tracing::debug;

use crate::config::GameSettings;
use crate::grid::Grid;
use crate::snapshot::GameSnapshot;
use crate::spawner::FruitSpawner;
use crate::types::*;

/// Complete game state
///
/// One value per game; nothing here is global, so independent games can run
/// side by side.
#[derive(Debug, Clone)]
pub struct GameState {
    settings: GameSettings,
    mode: GameMode,
    /// Ticks per second; only read by the scheduler.
    speed: u32,
    head: Position,
    fruit: Option<Position>,
    /// Body length, and the lifetime written into the head cell (plus one).
    fruits_eaten: u32,
    /// Latest accepted request, committed at the start of the next tick.
    input_direction: Heading,
    heading: Heading,
    grid: Grid,
    spawner: FruitSpawner,
    /// Monotonic episode id (increments on every reset).
    episode_id: u32,
    /// Completed ticks in the current episode.
    tick_count: u64,
    won: bool,
}

impl GameState {
    /// Create a new game with default settings and the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, GameSettings::default())
    }

    pub fn with_settings(seed: u64, settings: GameSettings) -> Self {
        let mut state = Self {
            settings,
            mode: settings.mode,
            speed: settings.speed,
            head: Position::center(),
            fruit: None,
            fruits_eaten: INITIAL_FRUITS_EATEN,
            input_direction: Heading::Idle,
            heading: Heading::Idle,
            grid: Grid::new(),
            spawner: FruitSpawner::new(seed),
            episode_id: 0,
            tick_count: 0,
            won: false,
        };
        state.restore_start();
        state
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Time between ticks at the current speed
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn fruit(&self) -> Option<Position> {
        self.fruit
    }

    pub fn fruits_eaten(&self) -> u32 {
        self.fruits_eaten
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn input_direction(&self) -> Heading {
        self.input_direction
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Discard the current game and start a new one.
    ///
    /// Restores the settings' mode and speed, puts a one-cell snake on the
    /// centre cell, clears the fruit and goes idle. Never fails.
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.restore_start();
    }

    fn restore_start(&mut self) {
        self.mode = self.settings.mode;
        self.speed = self.settings.speed;
        self.grid.clear();
        self.head = Position::center();
        self.grid.set(self.head, Cell::Snake(INITIAL_FRUITS_EATEN));
        self.fruit = None;
        self.fruits_eaten = INITIAL_FRUITS_EATEN;
        self.input_direction = Heading::Idle;
        self.heading = Heading::Idle;
        self.tick_count = 0;
        self.won = false;
    }

    /// Request a heading for the next tick.
    ///
    /// Returns false (and changes nothing) when `dir` is the exact reverse of
    /// the committed heading.
    pub fn set_input_direction(&mut self, dir: Direction) -> bool {
        if self.heading.reverses(dir) {
            return false;
        }
        self.input_direction = Heading::Moving(dir);
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => self.set_input_direction(dir),
            GameAction::Restart => {
                debug!(
                    episode = self.episode_id,
                    length = self.fruits_eaten,
                    "restart requested"
                );
                self.reset();
                true
            }
            GameAction::ToggleMode => {
                self.mode = self.mode.toggled();
                self.settings.mode = self.mode;
                debug!(mode = self.mode.as_str(), "boundary policy changed");
                true
            }
        }
    }

    /// Head position after one step along the committed heading, with the
    /// boundary policy applied. `None` means the head left a walled grid.
    fn next_head(&self) -> Option<Position> {
        let raw = self.head.stepped(self.heading);
        if raw.in_bounds() {
            return Some(raw);
        }

        match self.mode {
            GameMode::NoWalls => {
                let n = GRID_SIZE as i32;
                Some(Position::new(raw.x.rem_euclid(n), raw.y.rem_euclid(n)))
            }
            GameMode::Classic => None,
        }
    }

    /// Advance the simulation by exactly one step.
    ///
    /// Leaving the grid in `Classic` mode and running into the body both reset
    /// the game and end the tick early. Once the board is full the game is won
    /// and further ticks do nothing until a restart.
    pub fn tick(&mut self) -> TickOutcome {
        if self.won {
            return TickOutcome::Won;
        }

        self.heading = self.input_direction;

        let Some(next) = self.next_head() else {
            debug!(
                episode = self.episode_id,
                length = self.fruits_eaten,
                "head left the grid, resetting"
            );
            self.reset();
            return TickOutcome::WallReset;
        };

        // The lone cell right after a reset would otherwise collide with itself.
        if !self.heading.is_idle() && self.grid.is_snake_at(next) {
            debug!(
                episode = self.episode_id,
                length = self.fruits_eaten,
                x = next.x,
                y = next.y,
                "head ran into the body, resetting"
            );
            self.reset();
            return TickOutcome::CollisionReset;
        }

        self.grid.set(next, Cell::Snake(self.fruits_eaten + 1));
        self.head = next;
        self.tick_count += 1;

        let mut outcome = if self.heading.is_idle() {
            TickOutcome::Idle
        } else {
            TickOutcome::Moved
        };

        if self.fruit == Some(next) {
            self.fruits_eaten += 1;
            self.grid.grow_snake();
            self.fruit = None;
            outcome = TickOutcome::AteFruit;
            debug!(length = self.fruits_eaten, "fruit eaten");
        }

        if self.fruit.is_none() {
            match self.spawner.spawn(&self.grid) {
                Some(pos) => {
                    self.grid.set(pos, Cell::Fruit);
                    self.fruit = Some(pos);
                }
                None => {
                    // Board is full: keep it on screen instead of decaying the tail.
                    self.won = true;
                    debug!(length = self.fruits_eaten, "no free cell left, game won");
                    return TickOutcome::Won;
                }
            }
        }

        self.grid.decay_snake();
        outcome
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows_into(&mut out.grid);
        out.head = self.head;
        out.fruit = self.fruit;
        out.mode = self.mode;
        out.speed = self.speed;
        out.fruits_eaten = self.fruits_eaten;
        out.heading = self.heading;
        out.episode_id = self.episode_id;
        out.tick_count = self.tick_count;
        out.won = self.won;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
