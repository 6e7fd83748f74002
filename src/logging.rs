//! Feature-gated logging
//!
//! The crate is silent unless a backend is enabled:
//! - `esp32-log` prints through `esp-println`
//! - `log` forwards to the `log` facade
//!
//! Without a backend the arguments are still type-checked, so a log line
//! cannot rot behind a disabled feature.

macro_rules! emit {
    ($level:ident, $($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::$level!($($arg)*);
        #[cfg(feature = "esp32-log")]
        ::esp_println::println!($($arg)*);
        #[cfg(not(any(feature = "log", feature = "esp32-log")))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => { $crate::logging::emit!(debug, $($arg)*) };
}

macro_rules! info {
    ($($arg:tt)*) => { $crate::logging::emit!(info, $($arg)*) };
}

macro_rules! warning {
    ($($arg:tt)*) => { $crate::logging::emit!(warn, $($arg)*) };
}

pub(crate) use {debug, emit, info, warning};
