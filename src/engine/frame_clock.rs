//! Frame timing for hosts that drive timers
//!
//! Measures the wall-clock time between frames and hands it out in seconds,
//! the value a [`CountdownTimer`](super::CountdownTimer) expects in
//! `advance`. While paused every frame reports a zero delta.
use std::time::{Duration, Instant};

/// Longest frame delta handed out, so a stall (debugger, window drag) does
/// not drain every running timer at once
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Per-frame delta source
pub struct FrameClock {
    /// Time of last frame
    last_frame_time: Instant,

    /// Time when the clock was created
    start_time: Instant,

    /// Whether ticking is paused
    paused: bool,

    /// Current frame number
    frame_count: u64,

    /// Delta handed out by the latest frame (seconds)
    delta_seconds: f32,

    /// Sum of all deltas handed out
    game_time: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame_time: now,
            start_time: now,
            paused: false,
            frame_count: 0,
            delta_seconds: 0.0,
            game_time: Duration::ZERO,
        }
    }

    /// Begin a new frame, returning the seconds since the previous one
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance_by(frame_time)
    }

    /// Begin a new frame that took `frame_time`
    ///
    /// Used by `tick`; also lets hosts with their own clock (or tests) feed
    /// fixed steps.
    pub fn advance_by(&mut self, frame_time: Duration) -> f32 {
        self.frame_count += 1;

        let step = if self.paused {
            Duration::ZERO
        } else {
            frame_time.min(MAX_FRAME_DELTA)
        };
        self.game_time += step;
        self.delta_seconds = step.as_secs_f32();
        self.delta_seconds
    }

    /// Delta handed out by the latest frame (seconds)
    pub fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }

    /// Sum of every delta handed out, excluding paused time (seconds)
    pub fn game_time(&self) -> f32 {
        self.game_time.as_secs_f32()
    }

    /// Get total wall-clock time since creation
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of frames ticked
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Frame clock paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Don't hand the paused stretch to the next frame
            self.last_frame_time = Instant::now();
            log::info!("Frame clock resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
