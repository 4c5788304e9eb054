//! Shadow Runner - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (player physics, enemies, collisions)
//! - `renderer`: Drawing surface abstraction and Canvas 2D backend
//! - `platform`: Keyboard/touch translation and frame timing helpers
//! - `sprite`: Sprite sheet cells and named animation tables
//! - `config`: Runtime configuration

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod sprite;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Default playfield size (pixels)
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 720.0;

    /// Sprite animation rate shared by player and enemies
    pub const ANIMATION_FPS: f64 = 20.0;
    /// Milliseconds between animation frames
    pub const FRAME_INTERVAL_MS: f64 = 1000.0 / ANIMATION_FPS;

    /// Largest frame delta fed to the simulation (tab switches, first frame)
    pub const MAX_FRAME_DELTA_MS: f64 = 100.0;

    /// Player sprite cell size
    pub const PLAYER_WIDTH: f32 = 200.0;
    pub const PLAYER_HEIGHT: f32 = 200.0;
    /// Player spawn x
    pub const PLAYER_START_X: f32 = 100.0;
    /// Horizontal speed while a direction is held (pixels/tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Upward velocity impulse applied on jump (pixels/tick)
    pub const JUMP_IMPULSE: f32 = 32.0;
    /// Gravity accumulated into vy each airborne tick
    pub const GRAVITY: f32 = 1.0;

    /// Enemy sprite cell size
    pub const ENEMY_WIDTH: f32 = 160.0;
    pub const ENEMY_HEIGHT: f32 = 119.0;
    /// Enemy scroll speed (pixels/tick)
    pub const ENEMY_SPEED: f32 = 8.0;
    /// Last animation frame of the enemy sheet
    pub const ENEMY_MAX_FRAME: u32 = 5;
    /// Base delay between spawns
    pub const ENEMY_BASE_INTERVAL_MS: f64 = 1000.0;
    /// Random delay added to the base interval, redrawn after each spawn
    pub const SPAWN_JITTER_MIN_MS: f64 = 100.0;
    pub const SPAWN_JITTER_MAX_MS: f64 = 2000.0;

    /// Background image size and scroll speed (pixels/tick)
    pub const BACKGROUND_WIDTH: f32 = 2400.0;
    pub const BACKGROUND_HEIGHT: f32 = 720.0;
    pub const BACKGROUND_SPEED: f32 = 7.0;

    /// Vertical touch travel (pixels) before a swipe registers
    pub const SWIPE_THRESHOLD: f32 = 30.0;
}

/// Floor y for an entity of the given height, snapped to whole pixels
#[inline]
pub fn floor_y(game_height: f32, height: f32) -> f32 {
    (game_height - height).floor()
}
