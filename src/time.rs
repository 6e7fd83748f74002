//! Millisecond clock abstraction
//!
//! Sessions are timed with a 32-bit millisecond counter, the width most
//! microcontroller tick counters expose. Elapsed time is computed with
//! wrapping subtraction, so a session that straddles a single counter wrap
//! still measures correctly.

use embassy_time::{Duration, Instant};

/// Wrapping millisecond timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Millis(pub u32);

impl Millis {
    /// Milliseconds elapsed since `earlier`, tolerant of one wrap
    #[inline]
    pub const fn elapsed_since(self, earlier: Self) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Timestamp `millis` later, wrapping
    #[inline]
    pub const fn wrapping_add(self, millis: u32) -> Self {
        Self(self.0.wrapping_add(millis))
    }
}

/// Source of monotonic timestamps
pub trait Clock {
    /// Current time
    fn now(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Millis {
        (**self).now()
    }
}

/// Clock backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now(&self) -> Millis {
        // Truncation is the wrap.
        Millis(Instant::now().as_millis() as u32)
    }
}

/// Convert a duration to whole milliseconds, saturating at `u32::MAX`
#[inline]
pub fn duration_to_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_survives_wrap() {
        let start = Millis(u32::MAX - 10);
        let now = start.wrapping_add(25);
        assert_eq!(now, Millis(14));
        assert_eq!(now.elapsed_since(start), 25);
    }

    #[test]
    fn duration_saturates() {
        assert_eq!(duration_to_millis(Duration::from_millis(980)), 980);
        assert_eq!(duration_to_millis(Duration::from_secs(u64::from(u32::MAX))), u32::MAX);
    }
}
