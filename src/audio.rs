//! Audio playback seam
//!
//! The animator never decodes audio itself. It asks an [`AudioSink`] to start
//! a clip and then pumps it one chunk per tick, interleaved with the pixel
//! updates.

use heapless::String;

use crate::error::AudioError;

/// Maximum length of a clip name in bytes
pub const CLIP_NAME_CAPACITY: usize = 32;

/// Name of a sound asset, e.g. `/on.wav`
pub type ClipName = String<CLIP_NAME_CAPACITY>;

/// Streaming audio output
///
/// Implementations wrap the decoder and the I2S (or other) transmitter.
pub trait AudioSink {
    /// Stop whatever is playing and start streaming `clip`
    ///
    /// Playback must be stopped even if the new clip cannot be opened.
    fn start_clip(&mut self, clip: &str) -> Result<(), AudioError>;

    /// Decode and transmit one chunk
    ///
    /// Returns `true` while the current clip has more data. Must not block
    /// for longer than one I/O buffer fill.
    fn pump_chunk(&mut self) -> bool;

    /// True when nothing is playing and nothing is buffered
    fn is_idle(&self) -> bool;
}

/// Sound assets used by the blade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipSet {
    /// Played while the blade extends
    pub ignite: &'static str,
    /// Played while the blade retracts
    pub retract: &'static str,
    /// Looped while the blade is on and idle
    pub hum: &'static str,
}

impl ClipSet {
    pub const DEFAULT: Self = Self {
        ignite: "/on.wav",
        retract: "/off.wav",
        hum: "/Hum-4.wav",
    };
}

impl Default for ClipSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}
