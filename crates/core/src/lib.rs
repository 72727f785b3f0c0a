//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation: entity state, the jump/scroll physics,
//! obstacle spawning and collision detection. It has **no dependencies** on the
//! terminal, input devices or timers, making it:
//!
//! - **Deterministic**: Same seed produces the same obstacle stream
//! - **Testable**: Every rule is a plain function over plain data
//! - **Bounded**: Obstacles live in a fixed-capacity [`Obstacles`] array
//!
//! # Module Structure
//!
//! - [`game_state`]: Player, obstacles and phase, plus the ordered tick
//! - [`physics`]: Triangular jump arc and obstacle scrolling
//! - [`spawner`]: Spacing- and count-bounded probabilistic spawning
//! - [`collision`]: Exact single-cell overlap test
//! - [`rng`]: Seeded LCG for spawn draws
//!
//! # Example
//!
//! ```
//! use tui_dino_core::GameState;
//! use tui_dino_types::{GameAction, TickOutcome, GROUND_LEVEL};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::Jump);
//!
//! assert_eq!(game.tick(80), TickOutcome::Continue);
//! assert_eq!(game.player.y, GROUND_LEVEL - 1);
//! ```
//!
//! # Tick Order
//!
//! [`GameState::tick`] runs, in order:
//! 1. physics on the player and on every obstacle
//! 2. collision detection (ends the game on overlap)
//! 3. spawning at the right edge of the screen
//!
//! Rendering happens after the tick, so a frame always shows a fully updated world.

pub mod collision;
pub mod game_state;
pub mod physics;
pub mod rng;
pub mod spawner;

pub use tui_dino_types as types;

/// Live obstacles in spawn order, bounded by [`types::MAX_OBSTACLES`].
pub type Obstacles = arrayvec::ArrayVec<types::Obstacle, { types::MAX_OBSTACLES }>;

// Re-export commonly used types for convenience
pub use collision::detect;
pub use game_state::GameState;
pub use physics::{advance_obstacles, step_player};
pub use rng::SimpleRng;
pub use spawner::{is_spawn_eligible, maybe_spawn, SpawnRules};
