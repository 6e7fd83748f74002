//! Blade session state

use embassy_time::Duration;

use crate::audio::ClipName;
use crate::time::Millis;

/// Which way the blade is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Extend the blade, lighting pixels from the hilt outwards
    Ignite,
    /// Retract the blade, clearing pixels from the tip inwards
    Retract,
}

impl Direction {
    /// Blade state once a session in this direction completes
    pub const fn target_on(self) -> bool {
        matches!(self, Self::Ignite)
    }

    /// Threshold a session in this direction starts from
    pub const fn initial_threshold(self, pixel_count: usize) -> usize {
        match self {
            Self::Ignite => 0,
            Self::Retract => pixel_count,
        }
    }
}

/// Session lengths for each direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimings {
    /// Length of the ignite animation
    pub ignite: Duration,
    /// Length of the retract animation
    pub retract: Duration,
}

impl SessionTimings {
    pub const DEFAULT: Self = Self {
        ignite: Duration::from_millis(980),
        retract: Duration::from_millis(930),
    };

    /// Duration for a direction
    pub const fn for_direction(&self, direction: Direction) -> Duration {
        match direction {
            Direction::Ignite => self.ignite,
            Direction::Retract => self.retract,
        }
    }
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One ignite or retract cycle in progress
#[derive(Debug, Clone)]
pub struct AnimationSession {
    pub direction: Direction,
    pub start: Millis,
    pub duration_ms: u32,
    /// Pixels lit as of the last rendered tick
    pub previous_threshold: usize,
    pub clip: ClipName,
    /// Ticks evaluated so far
    pub ticks: u32,
}

impl AnimationSession {
    pub(crate) fn new(
        direction: Direction,
        start: Millis,
        duration_ms: u32,
        pixel_count: usize,
        clip: ClipName,
    ) -> Self {
        Self {
            direction,
            start,
            duration_ms,
            previous_threshold: direction.initial_threshold(pixel_count),
            clip,
            ticks: 0,
        }
    }

    /// Keep a freshly computed threshold from moving against the session direction
    pub(crate) fn monotonic(&self, threshold: usize) -> usize {
        match self.direction {
            Direction::Ignite => threshold.max(self.previous_threshold),
            Direction::Retract => threshold.min(self.previous_threshold),
        }
    }
}
