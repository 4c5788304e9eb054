//! Obstacles and their spawner
//!
//! Enemies enter at the right edge, run left at a fixed speed and are
//! pruned once fully past the left edge. Each pruned enemy is one point.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::animation::FrameTimer;
use crate::consts::*;
use crate::renderer::{Rect, SpriteId, Surface};
use crate::sprite::SpriteSheet;

/// A single obstacle
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub anim: FrameTimer,
    /// Set once the enemy is fully off the left edge
    pub marked_for_deletion: bool,
}

impl Enemy {
    /// New enemy standing on the ground at the right edge
    pub fn new(game_width: f32, game_height: f32) -> Self {
        Self {
            id: 0,
            pos: Vec2::new(game_width, game_height - ENEMY_HEIGHT),
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            speed: ENEMY_SPEED,
            anim: FrameTimer::with_max_frame(ENEMY_MAX_FRAME),
            marked_for_deletion: false,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }

    pub fn update(&mut self, delta_ms: f64) {
        self.anim.advance(delta_ms);
        self.pos.x -= self.speed;
        if self.pos.x < -self.width {
            self.marked_for_deletion = true;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let sheet = SpriteSheet::new(self.width, self.height);
        surface.draw_sub_image(
            SpriteId::Enemy,
            sheet.cell(self.anim.frame, 0),
            Rect::at(self.pos, self.width, self.height),
        );
    }
}

/// Owns every live enemy and decides when the next one appears
#[derive(Debug, Clone)]
pub struct EnemyManager {
    enemies: Vec<Enemy>,
    game_width: f32,
    game_height: f32,
    /// Milliseconds since the last spawn
    timer_ms: f64,
    /// Random delay added to the base interval for the next spawn
    jitter_ms: f64,
    rng: Pcg32,
    next_id: u32,
}

impl EnemyManager {
    pub fn new(game_width: f32, game_height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let jitter_ms = draw_jitter(&mut rng);
        Self {
            enemies: Vec::new(),
            game_width,
            game_height,
            timer_ms: 0.0,
            jitter_ms,
            rng,
            next_id: 1,
        }
    }

    /// Live enemies in spawn order
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Delay until the next spawn is due, measured from the last one
    pub fn spawn_threshold_ms(&self) -> f64 {
        ENEMY_BASE_INTERVAL_MS + self.jitter_ms
    }

    /// Add an enemy at the right edge
    pub fn spawn(&mut self) -> &mut Enemy {
        let mut enemy = Enemy::new(self.game_width, self.game_height);
        enemy.id = self.next_id;
        self.next_id += 1;
        log::debug!("Spawned enemy {}", enemy.id);
        self.enemies.push(enemy);
        let last = self.enemies.len() - 1;
        &mut self.enemies[last]
    }

    /// One tick of spawning, drawing, moving and pruning.
    /// Returns how many enemies left the playfield.
    pub fn handle(&mut self, delta_ms: f64, surface: &mut dyn Surface) -> u64 {
        self.timer_ms += delta_ms.max(0.0);
        if self.timer_ms > self.spawn_threshold_ms() {
            self.spawn();
            self.timer_ms = 0.0;
            self.jitter_ms = draw_jitter(&mut self.rng);
        }

        for enemy in &mut self.enemies {
            enemy.draw(surface);
            enemy.update(delta_ms);
        }

        let before = self.enemies.len();
        self.enemies.retain(|e| !e.marked_for_deletion);
        let escaped = (before - self.enemies.len()) as u64;
        if escaped > 0 {
            log::debug!("{} enemies left the playfield", escaped);
        }
        escaped
    }

    /// Drop every enemy and restart the spawn clock
    pub fn clear(&mut self) {
        self.enemies.clear();
        self.timer_ms = 0.0;
    }
}

fn draw_jitter(rng: &mut Pcg32) -> f64 {
    rng.random_range(SPAWN_JITTER_MIN_MS..SPAWN_JITTER_MAX_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;

    fn manager() -> EnemyManager {
        EnemyManager::new(GAME_WIDTH, GAME_HEIGHT, 42)
    }

    #[test]
    fn test_enemy_spawns_on_ground_at_right_edge() {
        let enemy = Enemy::new(GAME_WIDTH, GAME_HEIGHT);
        assert_eq!(enemy.pos, Vec2::new(GAME_WIDTH, GAME_HEIGHT - ENEMY_HEIGHT));
        assert!(!enemy.marked_for_deletion);
    }

    #[test]
    fn test_enemy_flags_itself_past_left_edge() {
        let mut enemy = Enemy::new(GAME_WIDTH, GAME_HEIGHT);
        enemy.pos.x = -enemy.width + ENEMY_SPEED; // lands exactly on -width
        enemy.update(16.0);
        assert!(!enemy.marked_for_deletion);
        enemy.update(16.0);
        assert!(enemy.marked_for_deletion);
    }

    #[test]
    fn test_jitter_within_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let j = draw_jitter(&mut rng);
            assert!((SPAWN_JITTER_MIN_MS..SPAWN_JITTER_MAX_MS).contains(&j));
        }
    }

    #[test]
    fn test_spawns_after_threshold_exceeded() {
        let mut mgr = manager();
        let mut surface = RecordingSurface::new();
        let threshold = mgr.spawn_threshold_ms();

        // Exactly at the threshold is not enough
        mgr.handle(threshold, &mut surface);
        assert!(mgr.is_empty());

        mgr.handle(1.0, &mut surface);
        assert_eq!(mgr.len(), 1);
        assert_eq!(mgr.enemies()[0].id, 1);

        // Timer restarted and jitter redrawn
        let next = mgr.spawn_threshold_ms();
        assert!(next >= ENEMY_BASE_INTERVAL_MS + SPAWN_JITTER_MIN_MS);
        mgr.handle(next / 2.0, &mut surface);
        assert_eq!(mgr.len(), 1);
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let a = manager();
        let b = manager();
        assert_eq!(a.spawn_threshold_ms(), b.spawn_threshold_ms());
    }

    #[test]
    fn test_each_escaped_enemy_scores_once() {
        let mut mgr = manager();
        let mut surface = RecordingSurface::new();
        for _ in 0..3 {
            mgr.spawn();
        }

        let mut total = 0;
        // (800 + 160) / 8 = 120 ticks to reach -width; one more to pass it
        for _ in 0..121 {
            total += mgr.handle(0.0, &mut surface);
        }
        assert_eq!(total, 3);
        assert!(mgr.is_empty());

        // Nothing left to score
        assert_eq!(mgr.handle(0.0, &mut surface), 0);
    }

    #[test]
    fn test_draws_before_moving() {
        let mut mgr = manager();
        let mut surface = RecordingSurface::new();
        mgr.spawn();
        mgr.handle(0.0, &mut surface);
        assert_eq!(surface.blits_of(SpriteId::Enemy)[0].x, GAME_WIDTH);
        assert_eq!(mgr.enemies()[0].pos.x, GAME_WIDTH - ENEMY_SPEED);
    }

    #[test]
    fn test_clear_empties_collection() {
        let mut mgr = manager();
        mgr.spawn();
        mgr.spawn();
        mgr.clear();
        assert!(mgr.is_empty());
    }
}
