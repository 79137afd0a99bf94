//! Backend fan-out for the emission macros.
//!
//! Lives in a function rather than in the macro bodies so the feature checks
//! resolve against this crate's features, not the caller's.

use crate::Level;

#[cfg(feature = "log")]
const fn log_level(level: Level) -> Option<log::Level> {
    match level {
        Level::None => None,
        Level::Error => Some(log::Level::Error),
        Level::Warn => Some(log::Level::Warn),
        Level::Info => Some(log::Level::Info),
        Level::Dbg => Some(log::Level::Debug),
        Level::Verbose => Some(log::Level::Trace),
    }
}

/// Emits a message at `level` for `tag` on every enabled backend.
///
/// Callers are expected to have passed the registry's level check already;
/// `Level::None` never emits.
pub fn emit(_level: Level, _tag: &str, _args: core::fmt::Arguments<'_>) {
    #[cfg(feature = "tracing")]
    match _level {
        Level::Error => tracing::error!(tag = _tag, "{}", _args),
        Level::Warn => tracing::warn!(tag = _tag, "{}", _args),
        Level::Info => tracing::info!(tag = _tag, "{}", _args),
        Level::Dbg => tracing::debug!(tag = _tag, "{}", _args),
        Level::Verbose => tracing::trace!(tag = _tag, "{}", _args),
        Level::None => {}
    }

    #[cfg(feature = "log")]
    if let Some(level) = log_level(_level) {
        log::log!(target: _tag, level, "{}", _args);
    }

    #[cfg(feature = "defmt")]
    match _level {
        Level::Error => defmt::error!("[{=str}] {}", _tag, defmt::Display2Format(&_args)),
        Level::Warn => defmt::warn!("[{=str}] {}", _tag, defmt::Display2Format(&_args)),
        Level::Info => defmt::info!("[{=str}] {}", _tag, defmt::Display2Format(&_args)),
        Level::Dbg => defmt::debug!("[{=str}] {}", _tag, defmt::Display2Format(&_args)),
        Level::Verbose => defmt::trace!("[{=str}] {}", _tag, defmt::Display2Format(&_args)),
        Level::None => {}
    }
}
