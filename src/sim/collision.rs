//! Player/enemy hit testing
//!
//! Sprites are approximated by circles around their centers. Both radii
//! come from the enemy's width.

use glam::Vec2;

use super::enemy::Enemy;
use super::player::Player;

/// True if two circles with the given combined radius overlap.
/// Touching exactly at the boundary is not a hit.
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, combined_radius: f32) -> bool {
    a.distance(b) < combined_radius
}

/// Combined hit radius for a player/enemy pair
#[inline]
pub fn hit_radius(enemy: &Enemy) -> f32 {
    enemy.width / 2.0 + enemy.width / 2.0
}

/// Whether the player touches the given enemy
pub fn player_hits_enemy(player: &Player, enemy: &Enemy) -> bool {
    circles_overlap(player.center(), enemy.center(), hit_radius(enemy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_boundary_is_not_a_hit() {
        let a = Vec2::new(0.0, 0.0);
        assert!(!circles_overlap(a, Vec2::new(3.0, 4.0), 5.0));
        assert!(circles_overlap(a, Vec2::new(3.0, 3.9), 5.0));
        assert!(!circles_overlap(a, Vec2::new(30.0, 40.0), 5.0));
    }

    #[test]
    fn test_hit_radius_uses_enemy_width_twice() {
        let enemy = Enemy::new(GAME_WIDTH, GAME_HEIGHT);
        assert_eq!(hit_radius(&enemy), ENEMY_WIDTH);
    }

    #[test]
    fn test_player_enemy_overlap() {
        let player = Player::new(GAME_WIDTH, GAME_HEIGHT);
        let mut enemy = Enemy::new(GAME_WIDTH, GAME_HEIGHT);
        // Freshly spawned at the right edge: far away
        assert!(!player_hits_enemy(&player, &enemy));

        // Same center column
        enemy.pos.x = player.center().x - enemy.width / 2.0;
        assert!(player_hits_enemy(&player, &enemy));
    }

    #[test]
    fn test_player_enemy_exact_boundary() {
        let player = Player::new(GAME_WIDTH, GAME_HEIGHT);
        let mut enemy = Enemy::new(GAME_WIDTH, GAME_HEIGHT);
        // Line the centers up horizontally at exactly the hit radius
        enemy.pos.y = player.center().y - enemy.height / 2.0;
        enemy.pos.x = player.center().x + hit_radius(&enemy) - enemy.width / 2.0;
        assert_eq!(player.center().distance(enemy.center()), hit_radius(&enemy));
        assert!(!player_hits_enemy(&player, &enemy));

        enemy.pos.x -= 1.0;
        assert!(player_hits_enemy(&player, &enemy));
    }
}
