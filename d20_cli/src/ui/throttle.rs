//! Leading-edge throttle for the roll key.
//!
//! The original app debounced the spacebar with a 5 second `throttleTime`:
//! the first press fires immediately, everything else inside the window is
//! swallowed. Same semantics here.

use std::time::{Duration, Instant};

pub struct Throttle {
    window: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// Returns true and opens a new window if the throttle allows firing.
    pub fn try_fire(&mut self) -> bool {
        let now = Instant::now();
        match self.last_fired {
            Some(last) if now.duration_since(last) < self.window => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }

    /// Time left until the next fire is allowed, if the window is open.
    pub fn remaining(&self) -> Option<Duration> {
        let last = self.last_fired?;
        self.window.checked_sub(last.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_fires_immediately() {
        let mut throttle = Throttle::new(Duration::from_secs(5));
        assert!(throttle.try_fire());
    }

    #[test]
    fn test_presses_inside_window_are_swallowed() {
        let mut throttle = Throttle::new(Duration::from_secs(5));
        assert!(throttle.try_fire());
        assert!(!throttle.try_fire());
        assert!(!throttle.try_fire());
        assert!(throttle.remaining().is_some());
    }

    #[test]
    fn test_fires_again_after_window() {
        let mut throttle = Throttle::new(Duration::from_millis(10));
        assert!(throttle.try_fire());
        std::thread::sleep(Duration::from_millis(15));
        assert!(throttle.remaining().is_none());
        assert!(throttle.try_fire());
    }
}
