//! Pixel strip abstraction and a frame-buffered implementation

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};

/// Default blade length in pixels
pub const DEFAULT_PIXEL_COUNT: usize = 50;

/// Addressable LED strip with a fixed pixel count
///
/// Writes go to a buffer; nothing reaches the hardware until [`show`](Self::show).
pub trait PixelStrip {
    /// Number of pixels
    fn len(&self) -> usize;

    /// Set one pixel in the buffer. Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Transmit the buffer to the hardware
    fn show(&mut self);

    /// Turn every pixel off in the buffer
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pixel strip backed by a frame buffer and an [`OutputDriver`]
///
/// `MAX_LEDS` is the buffer capacity; the active length can be shorter.
pub struct FrameStrip<D: OutputDriver, const MAX_LEDS: usize> {
    driver: D,
    frame_buffer: [Rgb; MAX_LEDS],
    len: usize,
}

impl<D: OutputDriver, const MAX_LEDS: usize> FrameStrip<D, MAX_LEDS> {
    /// Create a strip using the whole buffer
    pub fn new(driver: D) -> Self {
        Self::with_len(driver, MAX_LEDS)
    }

    /// Create a strip with `len` active pixels (capped at `MAX_LEDS`)
    pub fn with_len(driver: D, len: usize) -> Self {
        Self {
            driver,
            frame_buffer: [BLACK; MAX_LEDS],
            len: len.min(MAX_LEDS),
        }
    }

    /// Active part of the frame buffer
    pub fn pixels(&self) -> &[Rgb] {
        &self.frame_buffer[..self.len]
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<D: OutputDriver, const MAX_LEDS: usize> PixelStrip for FrameStrip<D, MAX_LEDS> {
    fn len(&self) -> usize {
        self.len
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame_buffer[..self.len].get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.driver.write(&self.frame_buffer[..self.len]);
    }

    fn clear(&mut self) {
        self.frame_buffer[..self.len].fill(BLACK);
    }
}
