//! Playback clock driving the time offset fed to [`crate::position_at_time`].

use thiserror::Error;

/// Furthest the clock runs from the present, either direction (hours).
pub const MAX_OFFSET_HOURS: f64 = 168.0;
/// Selectable playback speeds, in simulated hours per real second.
pub const SPEED_OPTIONS: [f64; 5] = [0.5, 1.0, 2.0, 5.0, 10.0];
/// Granularity of the scrubber (hours).
pub const SEEK_STEP_HOURS: f64 = 0.5;

#[derive(Debug, Error, PartialEq)]
pub enum PlaybackError {
    #[error("unsupported playback speed {0}x")]
    UnsupportedSpeed(f64),
}

/// Bounded simulation clock with play/pause and speed control.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    offset_hours: f64,
    speed: f64,
    playing: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            offset_hours: 0.0,
            speed: 1.0,
            playing: false,
        }
    }
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset_hours(&self) -> f64 {
        self.offset_hours
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Back to the present, paused.
    pub fn reset(&mut self) {
        self.offset_hours = 0.0;
        self.playing = false;
    }

    /// Jump to an offset, snapped to [`SEEK_STEP_HOURS`] and clamped to the window.
    pub fn seek(&mut self, hours: f64) {
        if !hours.is_finite() {
            return;
        }
        let snapped = (hours / SEEK_STEP_HOURS).round() * SEEK_STEP_HOURS;
        self.offset_hours = snapped.clamp(-MAX_OFFSET_HOURS, MAX_OFFSET_HOURS);
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<(), PlaybackError> {
        if SPEED_OPTIONS.contains(&speed) {
            self.speed = speed;
            Ok(())
        } else {
            Err(PlaybackError::UnsupportedSpeed(speed))
        }
    }

    /// Advance by `elapsed_seconds` of wall time; one second moves `speed` hours.
    ///
    /// Reaching either end of the window pins the offset there and pauses.
    pub fn advance(&mut self, elapsed_seconds: f64) -> f64 {
        if !self.playing || !elapsed_seconds.is_finite() {
            return self.offset_hours;
        }
        let next = self.offset_hours + elapsed_seconds * self.speed;
        if next >= MAX_OFFSET_HOURS {
            self.offset_hours = MAX_OFFSET_HOURS;
            self.playing = false;
        } else if next <= -MAX_OFFSET_HOURS {
            self.offset_hours = -MAX_OFFSET_HOURS;
            self.playing = false;
        } else {
            self.offset_hours = next;
        }
        self.offset_hours
    }
}
