use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{FruitSpawner, GameSnapshot, GameState, Grid};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Cell, Direction, GameAction, Position, GRID_SIZE};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.apply_action(GameAction::Turn(Direction::Right));

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            black_box(state.tick());
        })
    });
}

fn bench_grow_and_decay(c: &mut Criterion) {
    let mut grid = Grid::new();
    for x in 0..GRID_SIZE as i32 {
        grid.set(Position::new(x, 0), Cell::Snake(x as u32 + 1));
    }

    c.bench_function("grow_then_decay", |b| {
        b.iter(|| {
            grid.grow_snake();
            grid.decay_snake();
            black_box(grid.snake_len());
        })
    });
}

fn bench_spawn_crowded(c: &mut Criterion) {
    // Everything but the last row is body, so most random probes miss.
    let mut grid = Grid::new();
    for y in 0..GRID_SIZE as i32 - 1 {
        for x in 0..GRID_SIZE as i32 {
            grid.set(Position::new(x, y), Cell::Snake(1));
        }
    }
    let mut spawner = FruitSpawner::new(12345);

    c.bench_function("spawn_fruit_crowded", |b| {
        b.iter(|| black_box(spawner.spawn(black_box(&grid))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let snap = state.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(100, 40);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_into", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_grow_and_decay,
    bench_spawn_crowded,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
