// Countdown timer driven by an external per-frame tick

use crate::config::KitConfig;

/// Default countdown length in seconds
pub const DEFAULT_DURATION: f32 = 60.0;

/// Counts down from `default_duration` while running
///
/// The timer never reads a clock itself; the host calls [`advance`] once per
/// frame with the elapsed seconds (see [`FrameClock`]).
///
/// [`advance`]: CountdownTimer::advance
/// [`FrameClock`]: super::FrameClock
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    /// Length of a countdown started with [`CountdownTimer::start`]
    default_duration: f32,

    /// Seconds left; only meaningful while running. Not clamped, so an
    /// overshooting final tick leaves it negative.
    remaining: f32,

    running: bool,

    /// Whether `start` has ever been called
    started: bool,
}

impl CountdownTimer {
    /// Create a stopped timer with the default 60 second duration
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_DURATION)
    }

    pub fn with_duration(default_duration: f32) -> Self {
        Self {
            default_duration,
            remaining: 0.0,
            running: false,
            started: false,
        }
    }

    pub fn from_config(config: &KitConfig) -> Self {
        Self::with_duration(config.timer_duration)
    }

    pub fn default_duration(&self) -> f32 {
        self.default_duration
    }

    /// Change the duration used by the next `start`; a running countdown is
    /// not affected
    pub fn set_default_duration(&mut self, duration: f32) {
        self.default_duration = duration;
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Started at least once and has since run out
    pub fn is_expired(&self) -> bool {
        self.started && !self.running
    }

    /// (Re)start the countdown from the default duration
    pub fn start(&mut self) {
        self.running = true;
        self.started = true;
        self.remaining = self.default_duration;
        log::debug!("Timer started ({}s)", self.default_duration);
    }

    /// Consume `delta_seconds` of the countdown. No-op when stopped.
    pub fn advance(&mut self, delta_seconds: f32) {
        if !self.running {
            return;
        }

        self.remaining -= delta_seconds;
        if self.remaining <= 0.0 {
            self.running = false;
            log::debug!("Timer expired (overshoot {}s)", -self.remaining);
        }
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_creation() {
        let timer = CountdownTimer::new();
        assert_eq!(timer.default_duration(), 60.0);
        assert_eq!(timer.remaining(), 0.0);
        assert!(!timer.is_running());
        assert!(!timer.is_expired());
    }

    #[test]
    fn test_start_resets_remaining() {
        let mut timer = CountdownTimer::with_duration(5.0);
        timer.start();
        assert!(timer.is_running());
        assert_eq!(timer.remaining(), 5.0);

        timer.advance(2.0);
        assert_eq!(timer.remaining(), 3.0);

        timer.start();
        assert_eq!(timer.remaining(), 5.0);
    }

    #[test]
    fn test_advance_ignored_when_stopped() {
        let mut timer = CountdownTimer::with_duration(5.0);
        timer.advance(1.0);
        assert_eq!(timer.remaining(), 0.0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_expires_at_exactly_zero() {
        let mut timer = CountdownTimer::with_duration(1.0);
        timer.start();
        timer.advance(0.5);
        assert!(timer.is_running());
        timer.advance(0.5);
        assert!(!timer.is_running());
        assert!(timer.is_expired());
        assert_eq!(timer.remaining(), 0.0);
    }

    #[test]
    fn test_overshoot_is_not_clamped() {
        let mut timer = CountdownTimer::with_duration(1.0);
        timer.start();
        timer.advance(1.5);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), -0.5);

        // Further ticks do nothing once stopped
        timer.advance(1.0);
        assert_eq!(timer.remaining(), -0.5);
    }

    #[test]
    fn test_non_positive_duration_expires_on_next_tick() {
        let mut timer = CountdownTimer::with_duration(0.0);
        timer.start();
        assert!(timer.is_running());
        timer.advance(0.0);
        assert!(!timer.is_running());

        let mut timer = CountdownTimer::with_duration(-3.0);
        timer.start();
        timer.advance(0.016);
        assert!(timer.is_expired());
    }

    #[test]
    fn test_set_default_duration_applies_on_next_start() {
        let mut timer = CountdownTimer::with_duration(10.0);
        timer.start();
        timer.set_default_duration(2.0);
        assert_eq!(timer.remaining(), 10.0);

        timer.start();
        assert_eq!(timer.remaining(), 2.0);
    }

    #[test]
    fn test_from_config() {
        let config = KitConfig {
            timer_duration: 15.0,
            ..KitConfig::default()
        };
        let timer = CountdownTimer::from_config(&config);
        assert_eq!(timer.default_duration(), 15.0);
    }
}
