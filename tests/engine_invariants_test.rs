//! End-to-end rules of the simulation, driven only through the public API.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use tui_snake::core::{GameSettings, GameState};
use tui_snake::types::{
    Cell, Direction, GameAction, GameMode, Heading, Position, TickOutcome, GRID_SIZE,
};

const CENTER: Position = Position::center();

fn check_invariants(state: &GameState) {
    let grid = state.grid();
    let head = state.head();
    assert!(head.in_bounds(), "head out of bounds: {head:?}");

    if state.won() {
        assert_eq!(state.fruit(), None);
        assert_eq!(grid.empty_count(), 0);
        return;
    }

    assert!(grid.fruit_count() <= 1);
    match state.fruit() {
        Some(pos) => assert_eq!(grid.get(pos), Some(Cell::Fruit)),
        None => assert_eq!(grid.fruit_count(), 0),
    }

    assert_eq!(grid.get(head), Some(Cell::Snake(state.fruits_eaten())));
    assert_eq!(grid.snake_len() as u32, state.fruits_eaten());
    assert!(grid
        .iter()
        .all(|(_, c)| c.lifetime() <= state.fruits_eaten()));
}

#[test]
fn fresh_game_is_a_single_idle_cell() {
    let state = GameState::new(7);

    assert_eq!(state.head(), CENTER);
    assert_eq!(state.fruits_eaten(), 1);
    assert_eq!(state.heading(), Heading::Idle);
    assert_eq!(state.mode(), GameMode::NoWalls);
    assert_eq!(state.fruit(), None);
    assert_eq!(state.grid().get(CENTER), Some(Cell::Snake(1)));
    assert_eq!(state.grid().snake_len(), 1);
    assert_eq!(state.tick_interval(), Duration::from_secs(1) / 6);
}

#[test]
fn idle_tick_spawns_fruit_and_keeps_snake_in_place() {
    let mut state = GameState::new(7);

    assert_eq!(state.tick(), TickOutcome::Idle);
    assert_eq!(state.head(), CENTER);
    assert!(state.fruit().is_some());
    check_invariants(&state);

    for _ in 0..10 {
        state.tick();
    }
    assert_eq!(state.head(), CENTER);
    assert_eq!(state.fruits_eaten(), 1);
    check_invariants(&state);
}

#[test]
fn snake_moves_one_cell_per_tick() {
    let mut state = GameState::new(3);
    assert!(state.apply_action(GameAction::Turn(Direction::Right)));

    state.tick();
    assert_eq!(state.head(), Position::new(17, 16));
    state.tick();
    assert_eq!(state.head(), Position::new(18, 16));
    check_invariants(&state);
}

#[test]
fn no_walls_wraps_to_opposite_edge() {
    let mut state = GameState::new(11);
    state.apply_action(GameAction::Turn(Direction::Up));

    for _ in 0..CENTER.y {
        state.tick();
    }
    assert_eq!(state.head(), Position::new(CENTER.x, 0));

    assert_ne!(state.tick(), TickOutcome::WallReset);
    assert_eq!(state.head(), Position::new(CENTER.x, GRID_SIZE as i32 - 1));
    assert_eq!(state.episode_id(), 0);
    check_invariants(&state);
}

#[test]
fn classic_wall_resets_the_game() {
    let mut state = GameState::with_settings(11, GameSettings::classic());
    state.apply_action(GameAction::Turn(Direction::Left));

    for _ in 0..CENTER.x {
        assert!(!state.tick().is_reset());
    }
    assert_eq!(state.head(), Position::new(0, CENTER.y));

    assert_eq!(state.tick(), TickOutcome::WallReset);
    assert_eq!(state.head(), CENTER);
    assert_eq!(state.fruits_eaten(), 1);
    assert_eq!(state.heading(), Heading::Idle);
    assert_eq!(state.mode(), GameMode::Classic);
    assert_eq!(state.episode_id(), 1);
    check_invariants(&state);
}

#[test]
fn reversing_the_heading_is_ignored() {
    let mut state = GameState::new(5);
    state.apply_action(GameAction::Turn(Direction::Down));
    state.tick();

    assert!(!state.apply_action(GameAction::Turn(Direction::Up)));
    state.tick();
    assert_eq!(state.head(), Position::new(CENTER.x, CENTER.y + 2));
}

#[test]
fn mode_toggle_survives_restart() {
    let mut state = GameState::new(5);
    state.apply_action(GameAction::ToggleMode);
    assert_eq!(state.mode(), GameMode::Classic);

    state.apply_action(GameAction::Restart);
    assert_eq!(state.mode(), GameMode::Classic);
    assert_eq!(state.episode_id(), 1);
}

#[test]
fn same_seed_and_inputs_replay_identically() {
    let script = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);

    for step in 0..400 {
        if step % 7 == 0 {
            let dir = script[(step / 7) % script.len()];
            a.apply_action(GameAction::Turn(dir));
            b.apply_action(GameAction::Turn(dir));
        }
        assert_eq!(a.tick(), b.tick());
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn random_play_keeps_invariants_in_both_modes() {
    for (seed, settings) in [
        (1u64, GameSettings::default()),
        (2, GameSettings::classic()),
        (3, GameSettings::new(GameMode::NoWalls, 12)),
    ] {
        let mut state = GameState::with_settings(seed, settings);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0xC0FFEE);
        let mut resets = 0u32;

        for _ in 0..5_000 {
            if rng.gen_bool(0.2) {
                let dir = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
                state.apply_action(GameAction::Turn(dir));
            }

            let episode = state.episode_id();
            let outcome = state.tick();
            if outcome.is_reset() {
                resets += 1;
                assert_eq!(state.episode_id(), episode.wrapping_add(1));
                assert_eq!(state.head(), CENTER);
                assert_eq!(state.fruits_eaten(), 1);
                assert_eq!(state.mode(), settings.mode);
            } else {
                assert_eq!(state.episode_id(), episode);
            }
            check_invariants(&state);
        }

        assert_eq!(state.episode_id(), resets);
    }
}
