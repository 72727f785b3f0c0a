//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and runs the input
//! relay that moves blocking terminal reads onto their own thread.

pub mod map;
pub mod relay;

pub use tui_dino_types as types;

pub use map::{handle_key_event, is_acknowledge, map_event, should_quit};
pub use relay::{spawn_relay, spawn_terminal_relay};
