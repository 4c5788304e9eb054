//! Time-driven sprite frame stepping
//!
//! Sprites animate on their own clock, independent of the tick rate: the
//! elapsed milliseconds are accumulated and the frame steps once the
//! interval is exceeded.

use crate::consts::FRAME_INTERVAL_MS;

/// Cycles a frame index through `0..=max_frame` on a fixed interval
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTimer {
    /// Current column on the sprite sheet
    pub frame: u32,
    max_frame: u32,
    interval_ms: f64,
    timer_ms: f64,
}

impl FrameTimer {
    pub fn new(max_frame: u32, interval_ms: f64) -> Self {
        Self {
            frame: 0,
            max_frame,
            interval_ms,
            timer_ms: 0.0,
        }
    }

    /// Timer running at the shared sprite frame rate
    pub fn with_max_frame(max_frame: u32) -> Self {
        Self::new(max_frame, FRAME_INTERVAL_MS)
    }

    pub fn max_frame(&self) -> u32 {
        self.max_frame
    }

    /// Accumulate elapsed time; returns true if the frame stepped
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        self.timer_ms += delta_ms.max(0.0);
        if self.timer_ms > self.interval_ms {
            self.frame = if self.frame >= self.max_frame {
                0
            } else {
                self.frame + 1
            };
            self.timer_ms = 0.0;
            true
        } else {
            false
        }
    }

    /// Switch to a row with a different length, keeping the frame in range
    pub fn set_max_frame(&mut self, max_frame: u32) {
        self.max_frame = max_frame;
        self.frame = self.frame.min(max_frame);
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer_ms = 0.0;
    }
}
