//! Internal logging helpers.
//!
//! Everything in here forwards to the `log` crate if the `log` feature is enabled and expands to
//! nothing otherwise.

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)+);
    };
}
pub(crate) use trace;

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)+);
    };
}
pub(crate) use debug;

/// Starts a timer that is only created when logging is enabled.
macro_rules! start_timer {
    ($timer:ident) => {
        #[cfg(feature = "log")]
        let $timer = std::time::Instant::now();
    };
}
pub(crate) use start_timer;
