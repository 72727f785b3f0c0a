//! Obstacle spawning.
//!
//! A new obstacle enters at the right edge of the screen when the collection
//! has room, the newest obstacle has opened enough of a gap, and a coin flip
//! succeeds. The gap rule keeps every pair of consecutive obstacles jumpable;
//! the count rule keeps the collection bounded.

use crate::rng::SimpleRng;
use crate::types::{Obstacle, MAX_OBSTACLES, MIN_OBSTACLE_SPACING, SPAWN_CHANCE};
use crate::Obstacles;

/// Tunables for [`maybe_spawn`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRules {
    /// Columns the newest obstacle must travel before the next may spawn.
    pub min_spacing: i32,
    /// Collection bound (also capped by the collection's capacity).
    pub max_obstacles: usize,
    /// Spawn probability per eligible tick.
    pub chance: f64,
}

impl Default for SpawnRules {
    fn default() -> Self {
        Self {
            min_spacing: MIN_OBSTACLE_SPACING,
            max_obstacles: MAX_OBSTACLES,
            chance: SPAWN_CHANCE,
        }
    }
}

impl SpawnRules {
    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = chance;
        self
    }
}

/// Whether the spacing and count preconditions allow a spawn this tick.
///
/// A screen with no columns has no right edge to spawn at.
pub fn is_spawn_eligible(obstacles: &Obstacles, screen_width: i32, rules: &SpawnRules) -> bool {
    if screen_width <= 0 {
        return false;
    }
    if obstacles.len() >= rules.max_obstacles || obstacles.is_full() {
        return false;
    }
    match obstacles.last() {
        None => true,
        Some(newest) => newest.x < screen_width - rules.min_spacing,
    }
}

/// Possibly append one obstacle at `(screen_width - 1, ground)`.
///
/// The RNG is only consulted when the tick is eligible. Returns true when an
/// obstacle was added.
pub fn maybe_spawn(
    obstacles: &mut Obstacles,
    screen_width: i32,
    ground: i32,
    rules: &SpawnRules,
    rng: &mut SimpleRng,
) -> bool {
    if !is_spawn_eligible(obstacles, screen_width, rules) {
        return false;
    }
    if !rng.chance(rules.chance) {
        return false;
    }

    let obstacle = Obstacle::new(screen_width - 1, ground);
    tracing::debug!(x = obstacle.x, y = obstacle.y, "obstacle spawned");
    obstacles.try_push(obstacle).is_ok()
}
