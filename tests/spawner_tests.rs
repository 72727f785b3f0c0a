//! Spawner bounds checked over long simulations.

use tui_dino::core::{maybe_spawn, GameState, Obstacles, SimpleRng, SpawnRules};
use tui_dino::types::{GameAction, GROUND_LEVEL, MAX_OBSTACLES, MIN_OBSTACLE_SPACING};

/// Play `ticks` ticks, jumping whenever possible so the run lasts.
fn simulate(seed: u32, width: u16, ticks: usize, mut check: impl FnMut(&GameState)) {
    let mut game = GameState::with_rules(seed, SpawnRules::default().with_chance(1.0));
    for _ in 0..ticks {
        game.apply_action(GameAction::Jump);
        game.tick(width);
        if !game.is_running() {
            break;
        }
        check(&game);
    }
}

#[test]
fn test_collection_never_exceeds_max() {
    // A very wide screen lets many obstacles be in flight at once.
    simulate(3, 400, 2_000, |g| assert!(g.obstacles.len() <= MAX_OBSTACLES));
}

#[test]
fn test_consecutive_spawns_are_spaced() {
    simulate(11, 120, 2_000, |g| {
        for pair in g.obstacles.windows(2) {
            assert!(
                pair[1].x - pair[0].x >= MIN_OBSTACLE_SPACING,
                "too close: {:?}",
                pair
            );
        }
    });
}

#[test]
fn test_obstacles_spawn_on_the_ground_at_right_edge() {
    let mut obstacles = Obstacles::new();
    let mut rng = SimpleRng::new(5);
    let rules = SpawnRules::default().with_chance(1.0);

    assert!(maybe_spawn(&mut obstacles, 60, GROUND_LEVEL, &rules, &mut rng));
    let spawned = obstacles[0];
    assert_eq!((spawned.x, spawned.y), (59, GROUND_LEVEL));

    // Newest obstacle still within the spacing window: no second spawn.
    assert!(!maybe_spawn(&mut obstacles, 60, GROUND_LEVEL, &rules, &mut rng));
}

#[test]
fn test_same_seed_same_obstacle_stream() {
    let run = |seed| {
        let mut game = GameState::new(seed);
        let mut frames = Vec::new();
        for _ in 0..300 {
            game.apply_action(GameAction::Jump);
            game.tick(100);
            frames.push(game.obstacles.iter().map(|o| o.x).collect::<Vec<_>>());
        }
        frames
    };
    assert_eq!(run(1234), run(1234));
}
