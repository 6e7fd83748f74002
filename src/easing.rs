//! Progress and easing math for blade sessions
//!
//! Progress is a fraction in `[0.0, 1.0]`. An easing curve maps time
//! progress to visual progress, and the visual progress is turned into the
//! number of lit pixels.

/// Maps normalized time progress to normalized visual progress
pub type EasingCurve = fn(progress: f32) -> f32;

/// Square-root curve: fast start, slow finish
#[inline]
pub fn ease_sqrt(progress: f32) -> f32 {
    libm::sqrtf(progress)
}

/// Identity curve
#[inline]
pub fn ease_linear(progress: f32) -> f32 {
    progress
}

/// Quadratic ease out
#[inline]
pub fn ease_out_quad(progress: f32) -> f32 {
    let inverse = 1.0 - progress;
    1.0 - inverse * inverse
}

/// Time progress of a session, clamped to `[0.0, 1.0]`
///
/// A zero duration counts as already complete.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn session_progress(elapsed_ms: u32, duration_ms: u32) -> f32 {
    if duration_ms == 0 {
        return 1.0;
    }
    (elapsed_ms as f32 / duration_ms as f32).clamp(0.0, 1.0)
}

/// Number of lit pixels for an eased progress value
///
/// Rounds half up and never exceeds `pixel_count`.
#[inline]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn blade_threshold(eased: f32, pixel_count: usize) -> usize {
    let eased = eased.clamp(0.0, 1.0);
    let lit = libm::floorf(pixel_count as f32 * eased + 0.5) as usize;
    lit.min(pixel_count)
}
