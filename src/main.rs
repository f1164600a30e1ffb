//! Terminal Snake runner (default binary).
//!
//! Renders with the framebuffer-based terminal renderer, reads keys with
//! crossterm and ticks the simulation at `1s / speed`. Set `RUST_LOG` to
//! write a log to `tui-snake.log` (stdout belongs to the game screen).

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const LOG_FILE: &str = "tui-snake.log";

fn main() -> Result<()> {
    init_tracing();

    let seed = clock_seed();
    info!(seed, "starting session");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => info!("session ended"),
        Err(err) => warn!(error = %err, "session aborted"),
    }
    result
}

fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Ok(file) = File::create(LOG_FILE) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u64) -> Result<()> {
    let mut game_state = GameState::new(seed);
    let view = GameView::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();

    loop {
        // Render.
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let tick_duration = game_state.tick_interval();
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(
                            episode = game_state.episode_id(),
                            length = game_state.fruits_eaten(),
                            "quit requested"
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game_state.tick();
        }
    }
}
