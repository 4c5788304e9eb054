//! Per-frame simulation step
//!
//! One call = one display frame. The stage order is fixed: every stage reads
//! state the previous one produced during the same tick.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use crate::renderer::{Rect, Surface, TextAlign, TextStyle};

/// Whether the host should schedule another tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Halt,
}

const SCORE_FONT: &str = "40px Helvetica";
const SCORE_STYLE: TextStyle = TextStyle::new(SCORE_FONT, "black", TextAlign::Left);
const SCORE_SHADOW_STYLE: TextStyle = TextStyle::new(SCORE_FONT, "white", TextAlign::Left);
const BANNER_STYLE: TextStyle = TextStyle::new(SCORE_FONT, "black", TextAlign::Center);
const BANNER_SHADOW_STYLE: TextStyle = TextStyle::new(SCORE_FONT, "white", TextAlign::Center);

/// Text shown once the player has been hit
pub const GAME_OVER_TEXT: &str = "GAME OVER, press Enter or swipe down to restart!";

/// Advance the game by one display frame stamped `timestamp` (milliseconds)
pub fn tick(state: &mut GameState, timestamp: f64, surface: &mut dyn Surface) -> TickOutcome {
    state.flush_events();

    let delta_ms = state.frame_delta(timestamp);
    state.time_ticks += 1;

    surface.clear(Rect::new(0.0, 0.0, state.config.width, state.config.height));

    state.background.draw(surface);
    state.background.update();

    state.player.draw(surface);
    let hit = state
        .player
        .update(&state.input, delta_ms, state.enemies.enemies());
    if hit && state.phase == GamePhase::Running {
        state.phase = GamePhase::Over;
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
    }

    draw_status_text(state, surface);

    state.score += state.enemies.handle(delta_ms, surface);

    if state.is_over() {
        TickOutcome::Halt
    } else {
        TickOutcome::Continue
    }
}

/// Score in the corner, plus the restart banner once the run is over
fn draw_status_text(state: &GameState, surface: &mut dyn Surface) {
    let score = format!("Score: {}", state.score);
    surface.draw_text(&score, Vec2::new(20.0, 50.0), &SCORE_STYLE);
    surface.draw_text(&score, Vec2::new(22.0, 52.0), &SCORE_SHADOW_STYLE);

    if state.is_over() {
        let x = state.config.width / 2.0;
        surface.draw_text(GAME_OVER_TEXT, Vec2::new(x, 200.0), &BANNER_STYLE);
        surface.draw_text(GAME_OVER_TEXT, Vec2::new(x + 2.0, 202.0), &BANNER_SHADOW_STYLE);
    }
}
