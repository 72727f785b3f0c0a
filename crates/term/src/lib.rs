//! Terminal "game renderer" module.
//!
//! This is the terminal I/O side of the game. It owns raw mode and the
//! alternate screen, renders the world into a simple framebuffer, and flushes
//! that framebuffer to the terminal with diffed updates.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw a complete frame before anything reaches the terminal
//! - Always give the terminal back, whichever way the game ends

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;

pub use tui_dino_core as core;
pub use tui_dino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, restore_terminal, TerminalRenderer};
pub use surface::Surface;
