//! Diagnostics hooks.
//!
//! With the `tracing` feature enabled, refused insertions are reported as
//! `debug` events under the `ballast` target. Without it the macros expand to
//! nothing and the crate carries no logging code at all.

/// Reports that a container turned an element away for lack of room.
#[cfg(feature = "tracing")]
macro_rules! capacity_event {
    ($container:expr, $capacity:expr) => {
        ::tracing::debug!(
            target: "ballast",
            container = $container,
            capacity = $capacity,
            "insertion refused, capacity exhausted"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! capacity_event {
    ($container:expr, $capacity:expr) => {{
        let _ = (&$container, &$capacity);
    }};
}

/// Reports a bulk transfer that moved fewer elements than asked for.
#[cfg(feature = "tracing")]
macro_rules! partial_transfer {
    ($op:expr, $requested:expr, $done:expr) => {
        ::tracing::trace!(
            target: "ballast",
            op = $op,
            requested = $requested,
            done = $done,
            "partial transfer"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! partial_transfer {
    ($op:expr, $requested:expr, $done:expr) => {{
        let _ = (&$op, &$requested, &$done);
    }};
}

pub(crate) use capacity_event;
pub(crate) use partial_transfer;
