//! The game loop: one consumer multiplexing a tick timer and the input queue.
//!
//! Every tick runs update, collision check, spawn and render strictly in that
//! order against the single `GameState` the loop owns. Input events arrive
//! through the relay's channel and are applied between ticks; a quit ends the
//! loop at once instead of waiting for the next tick.

use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::event::Event;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::core::GameState;
use crate::input::{is_acknowledge, map_event};
use crate::term::{FrameBuffer, GameView, Surface, Viewport};
use crate::types::{Phase, TickOutcome, TICK_MS};

/// Loop timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    pub tick: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(u64::from(TICK_MS)),
        }
    }
}

/// Run until the game ends.
///
/// Returns [`Phase::Quit`] after a quit key, or [`Phase::GameOver`] once the
/// game-over screen has been acknowledged. Fails if the surface fails or the
/// input queue closes while the game is still running.
pub async fn run<S: Surface>(
    state: &mut GameState,
    surface: &mut S,
    events: &mut mpsc::Receiver<Event>,
    config: &LoopConfig,
) -> Result<Phase> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    // First tick one period from now, like a ticker.
    let mut ticker = time::interval_at(Instant::now() + config.tick, config.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while state.is_running() {
        tokio::select! {
            _ = ticker.tick() => {
                step(state, surface, &view, &mut fb)?;
            }
            event = events.recv() => {
                let Some(event) = event else {
                    bail!("input queue closed while the game was running");
                };
                apply_event(state, &event);
            }
        }
    }

    if state.phase == Phase::GameOver {
        show_game_over(surface, &view, &mut fb)?;
        wait_for_acknowledge(events).await;
    }

    tracing::info!(phase = state.phase.as_str(), ticks = state.ticks(), "game loop finished");
    Ok(state.phase)
}

/// One tick: advance the world, then draw it.
///
/// Nothing is drawn on a collision tick; the caller shows the game-over screen.
pub fn step<S: Surface>(
    state: &mut GameState,
    surface: &mut S,
    view: &GameView,
    fb: &mut FrameBuffer,
) -> Result<TickOutcome> {
    let (width, height) = surface.size()?;
    let outcome = state.tick(width);
    if outcome == TickOutcome::Continue {
        view.render_into(state, Viewport::new(width, height), fb);
        surface.present(fb)?;
    }
    Ok(outcome)
}

/// Apply a raw terminal event to the game state. Unmapped events are dropped.
pub fn apply_event(state: &mut GameState, event: &Event) {
    match map_event(event) {
        Some(action) => {
            if state.apply_action(action) {
                tracing::debug!(action = action.as_str(), "input applied");
            }
        }
        None => tracing::trace!(?event, "input ignored"),
    }
}

fn show_game_over<S: Surface>(surface: &mut S, view: &GameView, fb: &mut FrameBuffer) -> Result<()> {
    let (width, height) = surface.size()?;
    view.render_game_over_into(Viewport::new(width, height), fb);
    surface.present(fb)
}

/// Block until the player dismisses the game-over screen.
///
/// A closed queue counts as dismissed, since no acknowledgement can arrive.
async fn wait_for_acknowledge(events: &mut mpsc::Receiver<Event>) {
    while let Some(event) = events.recv().await {
        if is_acknowledge(&event) {
            return;
        }
    }
    tracing::debug!("input queue closed on the game-over screen");
}
