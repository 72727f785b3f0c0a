//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping).
//!
//! # Coordinates
//!
//! The world is a text grid addressed in terminal cells:
//!
//! - `x` grows to the right, `y` grows downward (smaller `y` = higher on screen)
//! - The player never moves horizontally; obstacles scroll toward it instead
//! - Both the player and obstacles rest on [`GROUND_LEVEL`]
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed timestep interval |
//! | `GROUND_LEVEL` | 10 | Resting row for player and obstacles |
//! | `APEX_HEIGHT` | 5 | Highest row reached by a jump |
//! | `PLAYER_X` | 5 | Fixed player column |
//! | `MIN_OBSTACLE_SPACING` | 10 | Gap required before the next spawn |
//! | `MAX_OBSTACLES` | 5 | Obstacle collection bound |
//! | `SPAWN_CHANCE` | 0.3 | Per-tick spawn probability once eligible |
//!
//! # Examples
//!
//! ```
//! use tui_dino_types::{GameAction, Phase, Player, GROUND_LEVEL, PLAYER_X};
//!
//! let player = Player::new();
//! assert_eq!((player.x, player.y), (PLAYER_X, GROUND_LEVEL));
//! assert!(!player.jumping);
//!
//! assert_eq!(GameAction::from_str("jump"), Some(GameAction::Jump));
//! assert!(Phase::GameOver.is_terminal());
//! ```

/// Fixed timestep interval in milliseconds.
pub const TICK_MS: u32 = 50;

/// Resting row of the player and every obstacle.
pub const GROUND_LEVEL: i32 = 10;

/// Highest row (minimum `y`) a jump reaches.
pub const APEX_HEIGHT: i32 = 5;

/// Column the player occupies for the whole game.
pub const PLAYER_X: i32 = 5;

/// Column of the obstacle present when the game starts.
pub const INITIAL_OBSTACLE_X: i32 = 20;

/// Horizontal gap the newest obstacle must open before another may spawn.
pub const MIN_OBSTACLE_SPACING: i32 = 10;

/// Maximum number of live obstacles.
pub const MAX_OBSTACLES: usize = 5;

/// Probability of spawning on a tick where spawning is allowed.
pub const SPAWN_CHANCE: f64 = 0.3;

/// Capacity of the hand-off queue between the input relay and the game loop.
pub const INPUT_QUEUE_CAPACITY: usize = 1;

pub const PLAYER_GLYPH: char = '@';
pub const OBSTACLE_GLYPH: char = '#';
pub const GROUND_GLYPH: char = '─';

/// Message shown after a collision.
pub const GAME_OVER_MESSAGE: &str = "Game Over! Press ESC to exit.";

/// Screen position of [`GAME_OVER_MESSAGE`].
pub const GAME_OVER_ORIGIN: (u16, u16) = (5, 5);


/// The player-controlled runner.
///
/// `jumping` is set by a jump trigger and cleared once the apex is reached;
/// gravity then pulls the player back to the ground one row per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub jumping: bool,
}

impl Player {
    /// A grounded player at the fixed start column.
    pub fn new() -> Self {
        Self {
            x: PLAYER_X,
            y: GROUND_LEVEL,
            jumping: false,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A single-cell obstacle scrolling toward the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
}

impl Obstacle {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Input intents the game reacts to.
///
/// Every other key is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a jump (ignored while a jump is in progress)
    Jump,
    /// End the game immediately
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dino_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("Quit"), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_str("duck"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jump" => Some(GameAction::Jump),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Jump => "jump",
            GameAction::Quit => "quit",
        }
    }
}

/// Game loop state.
///
/// The loop starts `Running`; `GameOver` and `Quit` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
    Quit,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::GameOver => "game_over",
            Phase::Quit => "quit",
        }
    }
}

/// Result of advancing the simulation by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The world advanced and play continues.
    Continue,
    /// The player shares a cell with an obstacle.
    Collision,
}
