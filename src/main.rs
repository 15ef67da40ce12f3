//! Terminal blockfall runner.
//!
//! Owns the gravity timer: the engine exposes the current drop interval and
//! this loop fires a passive gravity step whenever that much wall-clock time
//! has passed since the last drop. Soft drop, hard drop, restart, and
//! resuming from pause all reset the baseline so no catch-up drop fires.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Game;
use blockfall::input::{map_key, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, GamePhase};

/// Render/input poll granularity.
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Seed the piece stream from wall clock; each launch plays differently.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(clock_seed());
    let view = GameView::default();
    let mut last_drop = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        if event::poll(Duration::from_millis(FRAME_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        let was_paused = game.phase() == GamePhase::Paused;
                        game.apply(action);
                        match action {
                            GameAction::SoftDrop
                            | GameAction::HardDrop
                            | GameAction::Restart => {
                                last_drop = Instant::now();
                            }
                            GameAction::Pause if was_paused => {
                                // Resumed: gravity must not catch up.
                                last_drop = Instant::now();
                            }
                            _ => {}
                        }
                    }
                }
            }
        }

        if game.phase() == GamePhase::Playing {
            let interval = Duration::from_millis(u64::from(game.drop_interval_ms()));
            if last_drop.elapsed() >= interval {
                game.step_down(false);
                last_drop = Instant::now();
            }
        }
    }
}
