//! Per-tick motion: the player's jump arc and obstacle scrolling.

use crate::types::{Obstacle, Player};
use crate::Obstacles;

/// Advance the player's vertical position by one tick.
///
/// Ascends one row per tick while `jumping`, clearing the flag on the tick the
/// apex is reached; otherwise falls one row per tick until `ground`.
/// `y` never leaves `[apex, ground]`.
pub fn step_player(player: &mut Player, ground: i32, apex: i32) {
    if player.jumping {
        if player.y > apex {
            player.y -= 1;
        }
        if player.y <= apex {
            player.jumping = false;
        }
    } else if player.y < ground {
        player.y += 1;
    }
}

/// Scroll every obstacle one column left and drop the ones that left the screen.
///
/// Survivors keep their spawn order.
pub fn advance_obstacles(obstacles: &mut Obstacles) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= 1;
    }
    obstacles.retain(|o| is_on_screen(o));
}

#[inline]
fn is_on_screen(obstacle: &Obstacle) -> bool {
    obstacle.x >= 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{APEX_HEIGHT, GROUND_LEVEL};

    #[test]
    fn grounded_player_stays_put() {
        let mut p = Player::new();
        step_player(&mut p, GROUND_LEVEL, APEX_HEIGHT);
        assert_eq!(p.y, GROUND_LEVEL);
        assert!(!p.jumping);
    }

    #[test]
    fn jumping_player_rises_one_row() {
        let mut p = Player::new();
        p.jumping = true;
        step_player(&mut p, GROUND_LEVEL, APEX_HEIGHT);
        assert_eq!(p.y, GROUND_LEVEL - 1);
        assert!(p.jumping);
    }

    #[test]
    fn jump_flag_clears_on_reaching_apex() {
        let mut p = Player {
            y: APEX_HEIGHT + 1,
            jumping: true,
            ..Player::new()
        };
        step_player(&mut p, GROUND_LEVEL, APEX_HEIGHT);
        assert_eq!(p.y, APEX_HEIGHT);
        assert!(!p.jumping);
    }

    #[test]
    fn airborne_player_falls() {
        let mut p = Player {
            y: APEX_HEIGHT,
            ..Player::new()
        };
        step_player(&mut p, GROUND_LEVEL, APEX_HEIGHT);
        assert_eq!(p.y, APEX_HEIGHT + 1);
    }

    #[test]
    fn obstacles_scroll_left_and_fall_off() {
        let mut obstacles = Obstacles::new();
        obstacles.push(Obstacle::new(0, GROUND_LEVEL));
        obstacles.push(Obstacle::new(4, GROUND_LEVEL));
        obstacles.push(Obstacle::new(9, GROUND_LEVEL));

        advance_obstacles(&mut obstacles);

        let xs: Vec<i32> = obstacles.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![3, 8]);
    }
}
