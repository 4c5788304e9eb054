//! Platform helpers
//!
//! Handles the device-facing side of the game:
//! - Keyboard/touch translation into simulation input events
//! - Frame rate measurement

pub mod fps;
pub mod input;

pub use fps::FpsCounter;
pub use input::{SwipeTracker, key_event};
