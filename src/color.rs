use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Resolve a configured color name into the blade color
///
/// Only the first letter matters: `r`, `g` and `b` select a single channel,
/// anything else (including an empty name) gives white. Every lit channel is
/// set to `brightness`.
pub fn blade_color(code: &str, brightness: u8) -> Rgb {
    match code.as_bytes().first() {
        Some(b'r') => Rgb::new(brightness, 0, 0),
        Some(b'g') => Rgb::new(0, brightness, 0),
        Some(b'b') => Rgb::new(0, 0, brightness),
        _ => Rgb::new(brightness, brightness, brightness),
    }
}
