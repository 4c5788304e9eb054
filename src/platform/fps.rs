//! Frames-per-second measurement over a sliding window

/// Number of frames in the measurement window
const WINDOW: usize = 60;

/// Tracks the timestamps of the last `WINDOW` frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `time` (milliseconds) and return the current rate
    pub fn record(&mut self, time: f64) -> u32 {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % WINDOW;

        // The slot we will overwrite next holds the oldest sample
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_until_window_fills() {
        let mut counter = FpsCounter::new();
        for i in 1..WINDOW {
            assert_eq!(counter.record(i as f64 * 16.0), 0);
        }
    }

    #[test]
    fn test_steady_sixty() {
        let mut counter = FpsCounter::new();
        let frame = 1000.0 / 60.0;
        for i in 1..=(WINDOW * 2) {
            counter.record(i as f64 * frame);
        }
        assert_eq!(counter.fps(), 60);
    }
}
