//! Collision detection: exact single-cell overlap.

use crate::types::{Obstacle, Player};

/// True iff some obstacle occupies exactly the player's cell.
pub fn detect(player: &Player, obstacles: &[Obstacle]) -> bool {
    obstacles
        .iter()
        .any(|o| o.x == player.x && o.y == player.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_never_collides() {
        assert!(!detect(&Player::new(), &[]));
    }

    #[test]
    fn same_cell_collides() {
        let player = Player {
            x: 5,
            y: 10,
            jumping: false,
        };
        assert!(detect(&player, &[Obstacle::new(5, 10)]));
    }

    #[test]
    fn adjacent_cells_do_not_collide() {
        let player = Player {
            x: 5,
            y: 10,
            jumping: false,
        };
        let near = [
            Obstacle::new(4, 10),
            Obstacle::new(6, 10),
            Obstacle::new(5, 11),
            Obstacle::new(5, 9),
        ];
        assert!(!detect(&player, &near));
    }

    #[test]
    fn jumping_over_obstacle_avoids_collision() {
        let player = Player {
            x: 5,
            y: 7,
            jumping: true,
        };
        assert!(!detect(&player, &[Obstacle::new(5, 10)]));
    }
}
