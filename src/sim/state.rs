//! Session state
//!
//! Everything one run of the game owns: entities, score, phase, RNG and
//! input. Several sessions can live side by side (tests do this).

use std::collections::VecDeque;

use super::background::Background;
use super::enemy::EnemyManager;
use super::input::{InputEvent, InputState, Signal};
use super::player::Player;
use crate::config::GameConfig;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticks keep getting scheduled
    Running,
    /// Player was hit; waiting for a restart
    Over,
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed the enemy schedule was drawn from
    pub seed: u64,
    pub phase: GamePhase,
    /// Enemies that made it past the left edge
    pub score: u64,
    /// Ticks since the last (re)start
    pub time_ticks: u64,
    pub input: InputState,
    pub background: Background,
    pub player: Player,
    pub enemies: EnemyManager,
    /// Timestamp of the previous tick; `None` right after (re)start
    last_timestamp: Option<f64>,
    /// Input waiting for the next tick boundary
    pending: VecDeque<InputEvent>,
}

impl GameState {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        log::info!("New session {}x{} (seed {})", config.width, config.height, seed);
        Self {
            seed,
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            input: InputState::new(),
            background: Background::default(),
            player: Player::new(config.width, config.height),
            enemies: EnemyManager::new(config.width, config.height, seed),
            last_timestamp: None,
            pending: VecDeque::new(),
            config,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Reinitialize the run: entities back to start, no enemies, no score
    pub fn restart(&mut self) {
        self.player.restart();
        self.background.restart();
        self.enemies.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.last_timestamp = None;
        log::info!("Game restarted");
    }

    /// Queue an input change for the next tick boundary
    pub fn queue_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Apply queued input. A fresh swipe down or an explicit restart while
    /// the game is over restarts the run; returns true if that happened.
    pub fn flush_events(&mut self) -> bool {
        let mut restart = false;
        while let Some(event) = self.pending.pop_front() {
            match event {
                InputEvent::Press(signal) => {
                    let fresh = self.input.activate(signal);
                    if fresh && signal == Signal::SwipeDown && self.is_over() {
                        restart = true;
                    }
                }
                InputEvent::Release(signal) => {
                    self.input.deactivate(signal);
                }
                InputEvent::Restart => {
                    if self.is_over() {
                        restart = true;
                    } else {
                        log::debug!("Ignoring restart request while running");
                    }
                }
            }
        }
        if restart {
            self.restart();
        }
        restart
    }

    /// Milliseconds since the previous tick, clamped to a sane range.
    /// Records `timestamp` as the new baseline.
    pub(crate) fn frame_delta(&mut self, timestamp: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(last) => timestamp - last,
            None => 0.0,
        };
        if timestamp.is_finite() {
            self.last_timestamp = Some(timestamp);
        }
        // max() also maps NaN to zero
        delta.max(0.0).min(self.config.max_frame_delta_ms)
    }
}
