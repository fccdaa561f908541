//! Logging shims over `tracing` (requires `tracing` feature to emit).
//!
//! Without the feature the macros expand to nothing, so only pass
//! expressions that have no side effects.

macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! log_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
    };
}
