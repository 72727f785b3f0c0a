//! Game loop orchestration.
//!
//! Ties the pieces together: the [`game_loop`] consumes ticks from a tokio
//! interval and events from the input relay, drives `core` in a fixed order
//! and hands finished frames to a `term` surface.

pub mod game_loop;

pub use tui_dino_core as core;
pub use tui_dino_input as input;
pub use tui_dino_term as term;
pub use tui_dino_types as types;

pub use game_loop::{apply_event, run, step, LoopConfig};
