//! Demo mode - the game plays itself
//!
//! Holds jump while the nearest incoming enemy is inside a take-off window
//! and lets go otherwise. Emits events only when the decision changes, so it
//! goes through the same queue as real input.

use super::input::{InputEvent, Signal};
use super::state::GameState;

/// Horizontal center distance at which a jump clears an enemy at the
/// default speeds (airtime ~65 ticks, enemy moves 8 px/tick)
pub const TAKEOFF_MAX_DISTANCE: f32 = 280.0;
pub const TAKEOFF_MIN_DISTANCE: f32 = 160.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    holding_jump: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center distance to the closest enemy still ahead of the player
    pub fn nearest_threat(state: &GameState) -> Option<f32> {
        let player_x = state.player.center().x;
        state
            .enemies
            .enemies()
            .iter()
            .map(|e| e.center().x - player_x)
            .filter(|dx| *dx > 0.0)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Input to queue for the next tick, if the decision changed
    pub fn decide(&mut self, state: &GameState) -> Option<InputEvent> {
        if state.is_over() {
            return self.release();
        }

        let want_jump = Self::nearest_threat(state)
            .is_some_and(|dx| (TAKEOFF_MIN_DISTANCE..=TAKEOFF_MAX_DISTANCE).contains(&dx));

        if want_jump && !self.holding_jump {
            self.holding_jump = true;
            Some(InputEvent::Press(Signal::Jump))
        } else if !want_jump {
            self.release()
        } else {
            None
        }
    }

    fn release(&mut self) -> Option<InputEvent> {
        if self.holding_jump {
            self.holding_jump = false;
            Some(InputEvent::Release(Signal::Jump))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), 3)
    }

    #[test]
    fn test_idle_without_enemies() {
        let mut pilot = Autopilot::new();
        let s = state();
        assert_eq!(Autopilot::nearest_threat(&s), None);
        assert_eq!(pilot.decide(&s), None);
    }

    #[test]
    fn test_presses_then_releases() {
        let mut pilot = Autopilot::new();
        let mut s = state();
        let player_center = s.player.center().x;
        let enemy = s.enemies.spawn();
        enemy.pos.x = player_center + 200.0 - enemy.width / 2.0;

        assert_eq!(pilot.decide(&s), Some(InputEvent::Press(Signal::Jump)));
        // Still in the window: no repeated press
        assert_eq!(pilot.decide(&s), None);

        s.enemies.clear();
        s.enemies.spawn().pos.x = player_center + 700.0;
        assert_eq!(pilot.decide(&s), Some(InputEvent::Release(Signal::Jump)));
        assert_eq!(pilot.decide(&s), None);
    }

    #[test]
    fn test_ignores_enemies_behind() {
        let mut s = state();
        s.enemies.spawn().pos.x = 0.0;
        assert_eq!(Autopilot::nearest_threat(&s), None);
    }
}
