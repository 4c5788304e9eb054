//! Frame-stepped simulation
//!
//! All gameplay logic lives here:
//! - Physics in pixels per tick, animation in elapsed milliseconds
//! - Seeded RNG only (spawn jitter)
//! - Enemies kept in spawn order
//! - Drawing goes through the `Surface` trait, never a concrete backend

pub mod animation;
pub mod autopilot;
pub mod background;
pub mod collision;
pub mod enemy;
pub mod input;
pub mod player;
pub mod state;
pub mod tick;

pub use animation::FrameTimer;
pub use autopilot::Autopilot;
pub use background::Background;
pub use collision::{circles_overlap, player_hits_enemy};
pub use enemy::{Enemy, EnemyManager};
pub use input::{InputEvent, InputState, Signal};
pub use player::{Player, Stance};
pub use state::{GamePhase, GameState};
pub use tick::{GAME_OVER_TEXT, TickOutcome, tick};
