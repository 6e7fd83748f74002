use thiserror::Error;

use crate::session::Direction;

/// Reading the startup configuration failed
///
/// Never fatal: the caller falls back to [`SaberConfig::default`](crate::SaberConfig).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config file is missing")]
    Missing,
    #[error("config file is not valid json")]
    Malformed,
}

/// Audio sink failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioError {
    /// The requested clip does not exist or cannot be read
    #[error("audio clip is missing or unreadable")]
    ClipMissing,
}

/// Reasons a session request is refused
///
/// The animator state is untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Another session is still running
    #[error("a {0:?} session is already running")]
    Busy(Direction),
    /// Ignite while on, or retract while off
    #[error("blade is already in the state a {0:?} would produce")]
    InvalidStateTransition(Direction),
    /// The clip name does not fit into a [`ClipName`](crate::audio::ClipName)
    #[error("clip name is too long")]
    ClipNameTooLong,
}
