//! Complete game state and the ordered per-tick update.

use crate::collision;
use crate::physics;
use crate::rng::SimpleRng;
use crate::spawner::{self, SpawnRules};
use crate::types::{
    GameAction, Obstacle, Phase, Player, TickOutcome, APEX_HEIGHT, GROUND_LEVEL,
    INITIAL_OBSTACLE_X,
};
use crate::Obstacles;

/// Everything the simulation mutates, owned by the game loop.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub obstacles: Obstacles,
    pub phase: Phase,
    pub ground: i32,
    pub apex: i32,
    rules: SpawnRules,
    rng: SimpleRng,
    ticks: u64,
}

impl GameState {
    /// New game with the default spawn rules and one obstacle already on its way.
    pub fn new(seed: u32) -> Self {
        Self::with_rules(seed, SpawnRules::default())
    }

    pub fn with_rules(seed: u32, rules: SpawnRules) -> Self {
        let mut obstacles = Obstacles::new();
        obstacles.push(Obstacle::new(INITIAL_OBSTACLE_X, GROUND_LEVEL));
        Self {
            player: Player::new(),
            obstacles,
            phase: Phase::Running,
            ground: GROUND_LEVEL,
            apex: APEX_HEIGHT,
            rules,
            rng: SimpleRng::new(seed),
            ticks: 0,
        }
    }

    /// Replace the obstacle collection (extra entries beyond capacity are dropped).
    pub fn set_obstacles(&mut self, obstacles: impl IntoIterator<Item = Obstacle>) {
        self.obstacles.clear();
        for obstacle in obstacles {
            if self.obstacles.try_push(obstacle).is_err() {
                break;
            }
        }
    }

    /// Ticks advanced so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// A jump may start whenever no jump is in progress, including on the way down.
    pub fn can_jump(&self) -> bool {
        self.is_running() && !self.player.jumping
    }

    /// Apply an input action.
    ///
    /// Returns true if the action changed the state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Jump => {
                if !self.can_jump() {
                    return false;
                }
                self.player.jumping = true;
                true
            }
            GameAction::Quit => {
                if self.phase.is_terminal() {
                    return false;
                }
                self.phase = Phase::Quit;
                true
            }
        }
    }

    /// Advance the world by one tick: physics, collision, then spawning.
    ///
    /// On collision the phase becomes [`Phase::GameOver`] and nothing spawns.
    /// Does nothing once the phase is terminal.
    pub fn tick(&mut self, screen_width: u16) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Continue;
        }
        self.ticks += 1;

        physics::step_player(&mut self.player, self.ground, self.apex);
        physics::advance_obstacles(&mut self.obstacles);

        if collision::detect(&self.player, &self.obstacles) {
            self.phase = Phase::GameOver;
            tracing::debug!(
                tick = self.ticks,
                x = self.player.x,
                y = self.player.y,
                "player hit an obstacle"
            );
            return TickOutcome::Collision;
        }

        spawner::maybe_spawn(
            &mut self.obstacles,
            i32::from(screen_width),
            self.ground,
            &self.rules,
            &mut self.rng,
        );
        TickOutcome::Continue
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
