//! Button input
//!
//! Turns raw button levels into debounced, edge-triggered [`InputEvent`]s.
//! A short press ignites the blade, holding the button retracts it.

use embassy_time::Duration;

use crate::channel::{Channel, QueueFull, Receiver, Sender};
use crate::time::{Millis, duration_to_millis};

/// Discrete request from the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Button pressed and released
    Ignite,
    /// Button held for the long-press duration
    LongPressRetract,
}

/// Type alias for the input event channel
pub type InputChannel<const SIZE: usize> = Channel<InputEvent, SIZE>;

/// Type alias for the input event sender
pub type InputSender<'a, const SIZE: usize> = Sender<'a, InputEvent, SIZE>;

/// Type alias for the input event receiver
pub type InputReceiver<'a, const SIZE: usize> = Receiver<'a, InputEvent, SIZE>;

/// Button timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    /// How long a level must hold before it counts
    pub debounce: Duration,
    /// Hold time that turns a press into a long press
    pub long_press: Duration,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(35),
            long_press: Duration::from_millis(1000),
        }
    }
}

/// Debounced push button with long-press detection
#[derive(Debug, Clone)]
pub struct Button {
    debounce_ms: u32,
    long_press_ms: u32,
    /// Last raw level seen
    raw: bool,
    raw_since: Millis,
    /// Debounced level
    pressed: bool,
    pressed_at: Millis,
    long_press_sent: bool,
}

impl Button {
    pub fn new(config: &ButtonConfig) -> Self {
        Self {
            debounce_ms: duration_to_millis(config.debounce),
            long_press_ms: duration_to_millis(config.long_press),
            raw: false,
            raw_since: Millis(0),
            pressed: false,
            pressed_at: Millis(0),
            long_press_sent: false,
        }
    }

    /// Feed the current raw level
    ///
    /// Call this on every loop iteration. Returns at most one event.
    pub fn update(&mut self, level: bool, now: Millis) -> Option<InputEvent> {
        if level != self.raw {
            self.raw = level;
            self.raw_since = now;
        }

        let stable = now.elapsed_since(self.raw_since) >= self.debounce_ms;
        if stable && self.raw != self.pressed {
            self.pressed = self.raw;
            if self.pressed {
                self.pressed_at = now;
                self.long_press_sent = false;
                return None;
            }
            // Released: a long press already reported itself
            return (!self.long_press_sent).then_some(InputEvent::Ignite);
        }

        if self.pressed
            && !self.long_press_sent
            && now.elapsed_since(self.pressed_at) >= self.long_press_ms
        {
            self.long_press_sent = true;
            return Some(InputEvent::LongPressRetract);
        }

        None
    }

    /// Feed the current raw level and queue any resulting event
    pub fn poll<const SIZE: usize>(
        &mut self,
        level: bool,
        now: Millis,
        events: &InputSender<'_, SIZE>,
    ) -> Result<(), QueueFull<InputEvent>> {
        match self.update(level, now) {
            Some(event) => events.push(event),
            None => Ok(()),
        }
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new(&ButtonConfig::default())
    }
}
