//! TUI Dino (workspace facade crate).
//!
//! Re-exports the member crates as `tui_dino::{core,engine,input,term,types}`
//! and hosts the process-level pieces used by the binary: environment
//! [`config`] and file [`logging`].

pub mod config;
pub mod logging;

pub use tui_dino_core as core;
pub use tui_dino_engine as engine;
pub use tui_dino_input as input;
pub use tui_dino_term as term;
pub use tui_dino_types as types;
