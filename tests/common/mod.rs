//! Shared mocks for the integration tests

#![allow(dead_code)] // Each test file uses a different subset
#![allow(unreachable_pub)]

use std::cell::Cell;

use saber_blade::{
    AudioError, AudioSink, BladeAnimator, BladeConfig, Clock, Millis, PixelStrip, Rgb,
};

pub const PIXELS: usize = 50;
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 20, g: 0, b: 0 };

/// Clock that only moves when told to
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u32) -> Self {
        Self {
            now: Cell::new(millis),
        }
    }

    pub fn advance(&self, millis: u32) {
        self.now.set(self.now.get().wrapping_add(millis));
    }
}

impl Clock for MockClock {
    fn now(&self) -> Millis {
        Millis(self.now.get())
    }
}

/// Strip that keeps both the working buffer and the last shown frame
pub struct MockStrip {
    buffer: Vec<Rgb>,
    shown: Vec<Rgb>,
    pub show_count: usize,
}

impl MockStrip {
    pub fn new(len: usize) -> Self {
        Self {
            buffer: vec![BLACK; len],
            shown: vec![BLACK; len],
            show_count: 0,
        }
    }

    /// Frame as last transmitted
    pub fn shown(&self) -> &[Rgb] {
        &self.shown
    }

    /// Number of lit pixels in the last transmitted frame
    pub fn lit(&self) -> usize {
        self.shown.iter().filter(|pixel| **pixel != BLACK).count()
    }
}

impl PixelStrip for MockStrip {
    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.buffer.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.shown.clone_from(&self.buffer);
        self.show_count += 1;
    }

    fn clear(&mut self) {
        self.buffer.fill(BLACK);
    }
}

/// Audio sink where each clip is a fixed number of chunks
pub struct MockAudio {
    library: Vec<(&'static str, usize)>,
    remaining: usize,
    pub started: Vec<String>,
    pub failed: Vec<String>,
    pub pumps: usize,
}

impl MockAudio {
    /// Sink that knows the default clips
    pub fn new() -> Self {
        Self::with_clips(&[("/on.wav", 500), ("/off.wav", 500), ("/Hum-4.wav", 50)])
    }

    pub fn with_clips(clips: &[(&'static str, usize)]) -> Self {
        Self {
            library: clips.to_vec(),
            remaining: 0,
            started: Vec::new(),
            failed: Vec::new(),
            pumps: 0,
        }
    }

    pub fn silent() -> Self {
        Self::with_clips(&[])
    }
}

impl AudioSink for MockAudio {
    fn start_clip(&mut self, clip: &str) -> Result<(), AudioError> {
        self.remaining = 0;
        match self.library.iter().find(|(name, _)| *name == clip) {
            Some((_, chunks)) => {
                self.remaining = *chunks;
                self.started.push(clip.to_string());
                Ok(())
            }
            None => {
                self.failed.push(clip.to_string());
                Err(AudioError::ClipMissing)
            }
        }
    }

    fn pump_chunk(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            self.pumps += 1;
        }
        self.remaining > 0
    }

    fn is_idle(&self) -> bool {
        self.remaining == 0
    }
}

pub type TestAnimator<'c> = BladeAnimator<MockStrip, MockAudio, &'c MockClock>;

pub fn animator(clock: &MockClock) -> TestAnimator<'_> {
    animator_with(clock, MockAudio::new(), &BladeConfig::default())
}

pub fn animator_with<'c>(
    clock: &'c MockClock,
    audio: MockAudio,
    config: &BladeConfig,
) -> TestAnimator<'c> {
    BladeAnimator::new(MockStrip::new(PIXELS), audio, clock, config)
}

/// Run an ignite to completion with coarse ticks that never stall
pub fn ignite_fully(animator: &mut TestAnimator<'_>, clock: &MockClock) {
    animator
        .handle_event(saber_blade::InputEvent::Ignite)
        .expect("blade should be off");
    assert!(animator.tick());
    clock.advance(1000);
    assert!(!animator.tick());
    assert!(animator.is_on());
}
