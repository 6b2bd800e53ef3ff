#![warn(clippy::all, rust_2018_idioms)]

//! Crate-internal logging macros with file, module and line context.
//!
//! These write to `tracing` only. Handlers that still use the `log` facade
//! reach the same subscriber through the bridge installed by
//! [`crate::logging::init_logging`], so each message is emitted once.
//! Output looks like:
//!
//! ```text
//! [src/cloudwatch_logs/adapters.rs:cwllink::cloudwatch_logs::adapters:47] No request id in first event 3719 of 2025/03/01/[$LATEST]abc
//! ```
//!
//! TRACE: byte counts and per-stage pipeline details
//! DEBUG: fallbacks that still produce a result (no request id, env fallback)
//! WARN: inputs outside the expected shape that are handled anyway

macro_rules! trace_trace {
    ($($arg:tt)*) => {
        tracing::trace!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

macro_rules! trace_warn {
    ($($arg:tt)*) => {
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}
