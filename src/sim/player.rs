//! The player-controlled runner
//!
//! Physics run per tick (pixels/tick), animation runs on elapsed
//! milliseconds. The player is either on the ground or in the air; which one
//! is derived from the position alone.

use glam::Vec2;

use super::animation::FrameTimer;
use super::collision::player_hits_enemy;
use super::enemy::Enemy;
use super::input::{InputState, Signal};
use crate::consts::*;
use crate::floor_y;
use crate::renderer::{Rect, SpriteId, Surface};
use crate::sprite::{AnimationTable, SpriteSheet};

/// Ground contact state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Grounded,
    Airborne,
}

impl Stance {
    /// Sprite sheet row for this stance
    pub fn row(&self) -> u32 {
        match self {
            Stance::Grounded => 0,
            Stance::Airborne => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity (pixels/tick, negative is up)
    pub vy: f32,
    /// Horizontal speed chosen this tick
    pub speed: f32,
    pub anim: FrameTimer,
    /// Sprite sheet row (0 running, 1 airborne)
    pub row: u32,
    sheet: SpriteSheet,
    run_max_frame: u32,
    jump_max_frame: u32,
    game_width: f32,
    game_height: f32,
}

impl Player {
    pub fn new(game_width: f32, game_height: f32) -> Self {
        let table = AnimationTable::player();
        let run_max_frame = table.max_frame("run").unwrap_or(8);
        let jump_max_frame = table.max_frame("jump").unwrap_or(5);
        Self {
            pos: Vec2::new(PLAYER_START_X, floor_y(game_height, PLAYER_HEIGHT)),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            vy: 0.0,
            speed: 0.0,
            anim: FrameTimer::with_max_frame(run_max_frame),
            row: Stance::Grounded.row(),
            sheet: table.sheet,
            run_max_frame,
            jump_max_frame,
            game_width,
            game_height,
        }
    }

    /// Lowest y the player may occupy
    pub fn floor(&self) -> f32 {
        floor_y(self.game_height, self.height)
    }

    pub fn on_ground(&self) -> bool {
        self.pos.y >= self.floor()
    }

    pub fn stance(&self) -> Stance {
        if self.on_ground() {
            Stance::Grounded
        } else {
            Stance::Airborne
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }

    /// Rightmost x the player may occupy
    pub fn max_x(&self) -> f32 {
        self.game_width - self.width
    }

    /// Advance one tick. Returns true if the player touched an enemy.
    pub fn update(&mut self, input: &InputState, delta_ms: f64, enemies: &[Enemy]) -> bool {
        let hit = enemies.iter().any(|enemy| player_hits_enemy(self, enemy));

        self.anim.advance(delta_ms);

        // First matching control wins
        self.speed = 0.0;
        if input.is_active(Signal::Right) {
            self.speed = PLAYER_SPEED;
        } else if input.is_active(Signal::Left) {
            self.speed = -PLAYER_SPEED;
        } else if input.jump_requested() && self.on_ground() {
            self.vy -= JUMP_IMPULSE;
        }

        self.pos.x = (self.pos.x + self.speed).clamp(0.0, self.max_x());

        self.pos.y += self.vy;
        if self.on_ground() {
            self.pos.y = self.floor();
            self.vy = 0.0;
            self.set_stance(Stance::Grounded);
        } else {
            self.vy += GRAVITY;
            self.set_stance(Stance::Airborne);
        }

        hit
    }

    fn set_stance(&mut self, stance: Stance) {
        self.row = stance.row();
        self.anim.set_max_frame(match stance {
            Stance::Grounded => self.run_max_frame,
            Stance::Airborne => self.jump_max_frame,
        });
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_sub_image(
            SpriteId::Player,
            self.sheet.cell(self.anim.frame, self.row),
            Rect::at(self.pos, self.width, self.height),
        );
    }

    /// Back to the start position, standing still on the ground
    pub fn restart(&mut self) {
        self.pos = Vec2::new(PLAYER_START_X, self.floor());
        self.vy = 0.0;
        self.speed = 0.0;
        self.anim.reset();
        self.set_stance(Stance::Grounded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(GAME_WIDTH, GAME_HEIGHT)
    }

    fn held(signals: &[Signal]) -> InputState {
        let mut input = InputState::new();
        for s in signals {
            input.activate(*s);
        }
        input
    }

    #[test]
    fn test_starts_grounded() {
        let p = player();
        assert_eq!(p.pos, Vec2::new(100.0, 520.0));
        assert_eq!(p.stance(), Stance::Grounded);
        assert_eq!(p.anim.max_frame(), 8);
    }

    #[test]
    fn test_right_moves_and_clamps() {
        let mut p = player();
        let input = held(&[Signal::Right]);
        p.update(&input, 16.0, &[]);
        assert_eq!(p.pos.x, 105.0);
        for _ in 0..200 {
            p.update(&input, 16.0, &[]);
        }
        assert_eq!(p.pos.x, GAME_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_left_clamps_at_zero() {
        let mut p = player();
        let input = held(&[Signal::Left]);
        for _ in 0..100 {
            p.update(&input, 16.0, &[]);
        }
        assert_eq!(p.pos.x, 0.0);
    }

    #[test]
    fn test_jump_applies_impulse_and_gravity() {
        let mut p = player();
        let input = held(&[Signal::Jump]);
        p.update(&input, 16.0, &[]);
        assert_eq!(p.pos.y, 520.0 - JUMP_IMPULSE);
        assert_eq!(p.vy, -JUMP_IMPULSE + GRAVITY);
        assert_eq!(p.stance(), Stance::Airborne);
        assert_eq!(p.row, 1);
        assert_eq!(p.anim.max_frame(), 5);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut p = player();
        let input = held(&[Signal::Jump]);
        p.update(&input, 16.0, &[]);
        let vy = p.vy;
        p.update(&input, 16.0, &[]);
        assert_eq!(p.vy, vy + GRAVITY);
    }

    #[test]
    fn test_direction_beats_jump() {
        let mut p = player();
        let input = held(&[Signal::Jump, Signal::Right]);
        p.update(&input, 16.0, &[]);
        assert_eq!(p.vy, 0.0);
        assert_eq!(p.pos.x, 105.0);
        assert_eq!(p.stance(), Stance::Grounded);
    }

    #[test]
    fn test_lands_back_on_floor() {
        let mut p = player();
        p.update(&held(&[Signal::Jump]), 16.0, &[]);
        let idle = InputState::new();
        let mut airborne_ticks = 1;
        while p.stance() == Stance::Airborne {
            p.update(&idle, 16.0, &[]);
            assert!(p.pos.y <= p.floor());
            airborne_ticks += 1;
            assert!(airborne_ticks < 200, "never landed");
        }
        assert_eq!(p.pos.y, p.floor());
        assert_eq!(p.vy, 0.0);
        assert_eq!(p.row, 0);
    }

    #[test]
    fn test_reports_collision() {
        let mut p = player();
        let mut enemy = Enemy::new(GAME_WIDTH, GAME_HEIGHT);
        assert!(!p.update(&InputState::new(), 16.0, std::slice::from_ref(&enemy)));
        enemy.pos.x = p.pos.x;
        assert!(p.update(&InputState::new(), 16.0, std::slice::from_ref(&enemy)));
    }

    #[test]
    fn test_restart_clears_motion() {
        let mut p = player();
        let input = held(&[Signal::Jump]);
        for _ in 0..5 {
            p.update(&input, 60.0, &[]);
        }
        p.pos.x = 400.0;
        p.restart();
        assert_eq!(p.pos, Vec2::new(PLAYER_START_X, p.floor()));
        assert_eq!(p.vy, 0.0);
        assert_eq!(p.anim.frame, 0);
        assert_eq!(p.row, 0);
        assert_eq!(p.anim.max_frame(), 8);
    }

    #[test]
    fn test_draw_selects_sheet_cell() {
        use crate::renderer::{DrawCommand, RecordingSurface};

        let mut p = player();
        p.update(&held(&[Signal::Jump]), 16.0, &[]);
        p.anim.frame = 3;
        let mut surface = RecordingSurface::new();
        p.draw(&mut surface);
        match &surface.commands[0] {
            DrawCommand::SubImage { src, dst, .. } => {
                assert_eq!(*src, Rect::new(600.0, 200.0, 200.0, 200.0));
                assert_eq!(dst.x, p.pos.x);
                assert_eq!(dst.y, p.pos.y);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
