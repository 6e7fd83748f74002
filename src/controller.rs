//! Control loop step
//!
//! [`SaberController`] is one iteration of the device main loop: it consumes
//! queued input events, advances the active session, and keeps the idle hum
//! going. The caller owns the actual loop and the sleeping between polls.

use embassy_time::Duration;

use crate::animator::BladeAnimator;
use crate::audio::AudioSink;
use crate::input::InputReceiver;
use crate::logging::debug;
use crate::strip::PixelStrip;
use crate::time::{Clock, Millis, duration_to_millis};

/// Default poll interval during a session (100 Hz)
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(10);

/// Result of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollResult {
    /// A session is still running after this poll
    pub session_active: bool,
    /// When the next poll is due
    pub next_deadline: Millis,
    /// How long to wait until then (zero if behind schedule)
    pub sleep_duration: Duration,
}

/// Drives a [`BladeAnimator`] from an input queue
///
/// ```ignore
/// static EVENTS: InputChannel<8> = InputChannel::new();
///
/// let mut controller = SaberController::new(animator, EVENTS.receiver(), &clock);
/// loop {
///     button.poll(read_pin(), clock.now(), &EVENTS.sender())?;
///     let result = controller.poll();
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct SaberController<'a, S: PixelStrip, A: AudioSink, C: Clock, const QUEUE: usize> {
    animator: BladeAnimator<S, A, C>,
    events: InputReceiver<'a, QUEUE>,
    clock: C,
    next_frame: Millis,
    frame_ms: u32,
}

impl<'a, S, A, C, const QUEUE: usize> SaberController<'a, S, A, C, QUEUE>
where
    S: PixelStrip,
    A: AudioSink,
    C: Clock,
{
    /// Create a controller with [`DEFAULT_FRAME_DURATION`] pacing
    pub fn new(animator: BladeAnimator<S, A, C>, events: InputReceiver<'a, QUEUE>, clock: C) -> Self {
        Self::with_frame_duration(animator, events, clock, DEFAULT_FRAME_DURATION)
    }

    /// Create a controller with custom pacing
    pub fn with_frame_duration(
        animator: BladeAnimator<S, A, C>,
        events: InputReceiver<'a, QUEUE>,
        clock: C,
        frame_duration: Duration,
    ) -> Self {
        let next_frame = clock.now();
        Self {
            animator,
            events,
            clock,
            next_frame,
            frame_ms: duration_to_millis(frame_duration),
        }
    }

    /// Run one loop iteration
    ///
    /// While a session runs only the session advances; queued events wait
    /// for it to finish, so a retract never cuts an ignite short. Between
    /// sessions, events are consumed until one starts a session. Events that
    /// do not fit the blade state are dropped.
    pub fn poll(&mut self) -> PollResult {
        if self.animator.is_active() {
            self.animator.tick();
        } else {
            self.dispatch_events();
            if self.animator.is_active() {
                self.animator.tick();
            } else {
                self.animator.service_audio();
                self.animator.maintain_idle_hum();
            }
        }

        self.schedule()
    }

    fn dispatch_events(&mut self) {
        while let Some(event) = self.events.pop() {
            match self.animator.handle_event(event) {
                Ok(()) => return,
                Err(error) => debug!("ignoring {:?}: {}", event, error),
            }
        }
    }

    fn schedule(&mut self) -> PollResult {
        let now = self.clock.now();

        // Too far behind: skip the backlog instead of catching up
        let lag = now.elapsed_since(self.next_frame);
        if lag < u32::MAX / 2 && lag > self.frame_ms.saturating_mul(2) {
            self.next_frame = now;
        }
        self.next_frame = self.next_frame.wrapping_add(self.frame_ms);

        let ahead = self.next_frame.elapsed_since(now);
        let sleep_ms = if ahead < u32::MAX / 2 { ahead } else { 0 };

        PollResult {
            session_active: self.animator.is_active(),
            next_deadline: self.next_frame,
            sleep_duration: Duration::from_millis(u64::from(sleep_ms)),
        }
    }

    pub fn animator(&self) -> &BladeAnimator<S, A, C> {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut BladeAnimator<S, A, C> {
        &mut self.animator
    }
}
