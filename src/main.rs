//! Terminal dino runner (default binary).
//!
//! Space/Up jumps, Esc/q quits. Collide with an obstacle and the game ends
//! after the game-over screen is dismissed with Esc.

use std::panic;

use anyhow::Result;

use tui_dino::config::Settings;
use tui_dino::core::GameState;
use tui_dino::engine::{self, LoopConfig};
use tui_dino::input::spawn_terminal_relay;
use tui_dino::logging::init_file_logging;
use tui_dino::term::{restore_terminal, TerminalRenderer};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env()?;
    if let Some(path) = settings.log_path.as_deref() {
        init_file_logging(path)?;
    }
    setup_panic_handler();

    let mut term = TerminalRenderer::new();
    term.enter()?;
    tracing::info!(seed = settings.seed, "game started");

    let result = run(&mut term, settings.seed).await;

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!("game loop failed: {:#}", e);
    }
    result
}

async fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut events = spawn_terminal_relay()?;
    let mut state = GameState::new(seed);
    engine::run(&mut state, term, &mut events, &LoopConfig::default()).await?;
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}
