//! Blade ignition and retraction
//!
//! [`BladeAnimator`] drives the pixel strip and the audio sink from one shared
//! clock. A session is started with [`BladeAnimator::begin_session`] and then
//! advanced by calling [`BladeAnimator::tick`] until it returns `false`.
//!
//! Each tick pumps one audio chunk, maps the elapsed time through the easing
//! curve into a pixel threshold, and draws only the pixels between the
//! previous threshold and the new one. A session ends when its duration has
//! passed, when the threshold stops moving between ticks, or (when igniting)
//! when the audio clip has run out and the blade is fully drawn.
//!
//! Both collaborators are assumed to return quickly. A sink that blocks in
//! `pump_chunk` or a strip that blocks in `show` stalls the whole loop.

use embassy_time::Duration;

use crate::audio::{AudioSink, ClipName};
use crate::color::Rgb;
use crate::config::BladeConfig;
use crate::easing::{blade_threshold, session_progress};
use crate::error::SessionError;
use crate::input::InputEvent;
use crate::logging::{debug, info, warning};
use crate::session::{AnimationSession, Direction};
use crate::strip::PixelStrip;
use crate::time::{Clock, duration_to_millis};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The configured duration passed
    Elapsed,
    /// The threshold did not move between two ticks
    Stalled,
    /// Ignite audio ran out with the blade fully drawn
    AudioExhausted,
}

/// Owns the blade state and the hardware used to present it
pub struct BladeAnimator<S: PixelStrip, A: AudioSink, C: Clock> {
    strip: S,
    audio: A,
    clock: C,
    config: BladeConfig,

    is_on: bool,
    session: Option<AnimationSession>,
    last_end: Option<SessionEnd>,
    /// Set once the hum clip failed to open, cleared by the next session
    hum_unavailable: bool,
}

impl<S: PixelStrip, A: AudioSink, C: Clock> BladeAnimator<S, A, C> {
    /// Create an animator with the blade off
    pub fn new(strip: S, audio: A, clock: C, config: &BladeConfig) -> Self {
        Self {
            strip,
            audio,
            clock,
            config: *config,
            is_on: false,
            session: None,
            last_end: None,
            hum_unavailable: false,
        }
    }

    /// Start an ignite or retract session
    ///
    /// Refused while another session is running, or when the blade is
    /// already in the state `direction` leads to. Nothing changes on refusal.
    /// The strip is not touched until the first [`tick`](Self::tick).
    pub fn begin_session(
        &mut self,
        direction: Direction,
        clip: &str,
        duration: Duration,
    ) -> Result<(), SessionError> {
        if let Some(session) = &self.session {
            return Err(SessionError::Busy(session.direction));
        }
        if self.is_on == direction.target_on() {
            return Err(SessionError::InvalidStateTransition(direction));
        }
        let clip = ClipName::try_from(clip).map_err(|()| SessionError::ClipNameTooLong)?;

        let start = self.clock.now();
        let duration_ms = duration_to_millis(duration);
        info!("{:?} begins, {} ms, clip {}", direction, duration_ms, clip.as_str());

        if let Err(error) = self.audio.start_clip(&clip) {
            warning!("{} ({}), animating without sound", error, clip.as_str());
        }

        self.session = Some(AnimationSession::new(
            direction,
            start,
            duration_ms,
            self.strip.len(),
            clip,
        ));
        self.hum_unavailable = false;
        Ok(())
    }

    /// Start the session an input event asks for
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), SessionError> {
        let (direction, clip) = match event {
            InputEvent::Ignite => (Direction::Ignite, self.config.clips.ignite),
            InputEvent::LongPressRetract => (Direction::Retract, self.config.clips.retract),
        };
        let duration = self.config.timings.for_direction(direction);
        self.begin_session(direction, clip, duration)
    }

    /// Advance the active session by one step
    ///
    /// Returns `true` while the session is still running. Without an active
    /// session this does nothing and returns `false`.
    pub fn tick(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let has_more_audio = self.audio.pump_chunk();

        let elapsed = self.clock.now().elapsed_since(session.start);
        if elapsed > session.duration_ms {
            self.finish(SessionEnd::Elapsed);
            return false;
        }

        let mut progress = session_progress(elapsed, session.duration_ms);
        if session.direction == Direction::Retract {
            progress = 1.0 - progress;
        }
        let eased = (self.config.easing)(progress);
        let threshold = session.monotonic(blade_threshold(eased, self.strip.len()));

        let first_tick = session.ticks == 0;
        session.ticks = session.ticks.saturating_add(1);

        let previous = session.previous_threshold;
        if threshold == previous {
            if !first_tick {
                debug!("threshold stalled at {} after {} ms", threshold, elapsed);
                self.finish(SessionEnd::Stalled);
                return false;
            }
            self.strip.show();
        } else {
            match session.direction {
                Direction::Ignite => fill(&mut self.strip, previous..threshold, self.config.color),
                Direction::Retract => {
                    fill(&mut self.strip, threshold..previous, Rgb::default());
                }
            }
            session.previous_threshold = threshold;
            self.strip.show();
        }

        if session.direction == Direction::Ignite
            && !has_more_audio
            && session.previous_threshold == self.strip.len()
        {
            self.finish(SessionEnd::AudioExhausted);
            return false;
        }

        true
    }

    /// Start the hum clip when the blade is on, idle and silent
    ///
    /// Returns `true` if the hum was started.
    pub fn maintain_idle_hum(&mut self) -> bool {
        if !self.is_on || self.session.is_some() || self.hum_unavailable || !self.audio.is_idle() {
            return false;
        }
        match self.audio.start_clip(self.config.clips.hum) {
            Ok(()) => true,
            Err(error) => {
                warning!("{} ({}), hum disabled", error, self.config.clips.hum);
                self.hum_unavailable = true;
                false
            }
        }
    }

    /// Pump one chunk of background audio outside of a session
    pub fn service_audio(&mut self) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.audio.pump_chunk()
    }

    /// End the active session: drain the audio, settle the final frame and
    /// flip the blade state.
    fn finish(&mut self, reason: SessionEnd) {
        let Some(session) = self.session.take() else {
            return;
        };

        // Let the clip play out instead of cutting it off
        while !self.audio.is_idle() {
            if !self.audio.pump_chunk() {
                break;
            }
        }

        let pixel_count = self.strip.len();
        match session.direction {
            Direction::Ignite => {
                if session.previous_threshold < pixel_count {
                    fill(
                        &mut self.strip,
                        session.previous_threshold..pixel_count,
                        self.config.color,
                    );
                    self.strip.show();
                }
            }
            Direction::Retract => {
                // Rounding can leave pixels behind
                self.strip.clear();
                self.strip.show();
            }
        }

        self.is_on = session.direction.target_on();
        self.last_end = Some(reason);
        info!(
            "{:?} ends ({:?}) at threshold {} after {} ticks, clip {}",
            session.direction,
            reason,
            session.previous_threshold,
            session.ticks,
            session.clip.as_str()
        );
    }

    /// Whether the blade is on
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Whether a session is running
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The running session, if any
    pub fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }

    /// How the most recent session ended
    pub fn last_end(&self) -> Option<SessionEnd> {
        self.last_end
    }

    pub fn config(&self) -> &BladeConfig {
        &self.config
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (S, A, C) {
        (self.strip, self.audio, self.clock)
    }
}

fn fill<S: PixelStrip>(strip: &mut S, range: core::ops::Range<usize>, color: Rgb) {
    for index in range {
        strip.set_pixel(index, color);
    }
}
