//! Active input signals
//!
//! Device events are translated elsewhere (see `platform::input`); the
//! simulation only sees which signals are currently held.

/// A directional or action signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Left,
    Right,
    Jump,
    SwipeUp,
    SwipeDown,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Left => "left",
            Signal::Right => "right",
            Signal::Jump => "jump",
            Signal::SwipeUp => "swipe-up",
            Signal::SwipeDown => "swipe-down",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Signal::Left),
            "right" => Some(Signal::Right),
            "jump" => Some(Signal::Jump),
            "swipe-up" | "swipe up" => Some(Signal::SwipeUp),
            "swipe-down" | "swipe down" => Some(Signal::SwipeDown),
            _ => None,
        }
    }
}

/// Input change delivered by the host, applied at the next tick boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press(Signal),
    Release(Signal),
    /// Explicit restart request (Enter key); only honored after game over
    Restart,
}

/// Ordered set of currently active signals
#[derive(Debug, Clone, Default)]
pub struct InputState {
    active: Vec<Signal>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a signal active; returns false if it already was
    pub fn activate(&mut self, signal: Signal) -> bool {
        if self.active.contains(&signal) {
            return false;
        }
        self.active.push(signal);
        true
    }

    /// Mark a signal inactive; returns false if it was not active
    pub fn deactivate(&mut self, signal: Signal) -> bool {
        match self.active.iter().position(|s| *s == signal) {
            Some(i) => {
                self.active.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, signal: Signal) -> bool {
        self.active.contains(&signal)
    }

    /// Jump key held or upward swipe in progress
    pub fn jump_requested(&self) -> bool {
        self.is_active(Signal::Jump) || self.is_active(Signal::SwipeUp)
    }

    /// Signals in activation order
    pub fn iter(&self) -> impl Iterator<Item = Signal> + '_ {
        self.active.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_is_idempotent() {
        let mut input = InputState::new();
        assert!(input.activate(Signal::Right));
        assert!(!input.activate(Signal::Right));
        assert_eq!(input.len(), 1);
        assert!(input.is_active(Signal::Right));
    }

    #[test]
    fn test_deactivate_absent_is_noop() {
        let mut input = InputState::new();
        assert!(!input.deactivate(Signal::Left));
        input.activate(Signal::Left);
        input.activate(Signal::Jump);
        assert!(input.deactivate(Signal::Left));
        assert!(!input.is_active(Signal::Left));
        assert_eq!(input.iter().collect::<Vec<_>>(), vec![Signal::Jump]);
    }

    #[test]
    fn test_keeps_activation_order() {
        let mut input = InputState::new();
        input.activate(Signal::SwipeDown);
        input.activate(Signal::Left);
        input.activate(Signal::SwipeDown);
        input.activate(Signal::Jump);
        assert_eq!(
            input.iter().collect::<Vec<_>>(),
            vec![Signal::SwipeDown, Signal::Left, Signal::Jump]
        );
    }

    #[test]
    fn test_swipe_up_counts_as_jump() {
        let mut input = InputState::new();
        assert!(!input.jump_requested());
        input.activate(Signal::SwipeUp);
        assert!(input.jump_requested());
    }

    #[test]
    fn test_signal_names_round_trip() {
        for signal in [
            Signal::Left,
            Signal::Right,
            Signal::Jump,
            Signal::SwipeUp,
            Signal::SwipeDown,
        ] {
            assert_eq!(Signal::from_str(signal.as_str()), Some(signal));
        }
        assert_eq!(Signal::from_str("swipe down"), Some(Signal::SwipeDown));
        assert_eq!(Signal::from_str("fire"), None);
    }
}
