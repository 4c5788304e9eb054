//! Device event translation
//!
//! Keys map straight to signals. Touch is turned into vertical swipes: once
//! the finger travels past the threshold from where it landed, a swipe
//! signal is pressed, and lifting the finger releases both swipe signals.

use crate::sim::{InputEvent, Signal};

/// Translate a `KeyboardEvent.key` value. Enter only acts on press.
pub fn key_event(key: &str, pressed: bool) -> Option<InputEvent> {
    let signal = match key {
        "ArrowLeft" => Signal::Left,
        "ArrowRight" => Signal::Right,
        "ArrowUp" => Signal::Jump,
        "Enter" if pressed => return Some(InputEvent::Restart),
        _ => return None,
    };
    Some(if pressed {
        InputEvent::Press(signal)
    } else {
        InputEvent::Release(signal)
    })
}

/// Recognizes vertical swipes from raw touch positions
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_y: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_y: None,
        }
    }

    pub fn touch_start(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    /// Returns a swipe press once the finger is far enough from the start
    pub fn touch_move(&mut self, y: f32) -> Option<InputEvent> {
        let distance = y - self.start_y?;
        if distance < -self.threshold {
            Some(InputEvent::Press(Signal::SwipeUp))
        } else if distance > self.threshold {
            Some(InputEvent::Press(Signal::SwipeDown))
        } else {
            None
        }
    }

    /// Finger lifted: both swipe directions end
    pub fn touch_end(&mut self) -> [InputEvent; 2] {
        self.start_y = None;
        [
            InputEvent::Release(Signal::SwipeUp),
            InputEvent::Release(Signal::SwipeDown),
        ]
    }
}
