//! Diagnostic events.
//!
//! With the `tracing` feature enabled these macros forward to the `tracing`
//! crate. Without it they expand to nothing and their arguments are never
//! evaluated.

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($argument:tt)*) => {
        ::tracing::debug!(target: "seqkit", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($argument:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::trace!(target: "seqkit", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}

pub(crate) use debug_event;
pub(crate) use trace_event;
