#![no_std]

mod logging;

pub mod animator;
pub mod audio;
pub mod channel;
pub mod color;
pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod input;
pub mod session;
pub mod strip;
pub mod time;

pub use animator::{BladeAnimator, SessionEnd};
pub use audio::{AudioSink, ClipName, ClipSet};
pub use config::{BladeConfig, ConfigProvider, JsonConfig, SaberConfig};
pub use controller::{PollResult, SaberController};
pub use easing::{EasingCurve, ease_sqrt};
pub use error::{AudioError, ConfigError, SessionError};
pub use input::{Button, ButtonConfig, InputChannel, InputEvent, InputReceiver, InputSender};
pub use session::{AnimationSession, Direction, SessionTimings};
pub use strip::{FrameStrip, PixelStrip};
pub use time::{Clock, EmbassyClock, Millis};

pub use color::Rgb;
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`FrameStrip`] is generic over it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
