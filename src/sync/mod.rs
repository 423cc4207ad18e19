//! Scoped exclusion and scope-exit actions.
//!
//! Neither type allocates or needs an operating system; both work in
//! `no_std` builds.

pub mod defer;
pub mod mutex;

pub use defer::{defer, Defer};
pub use mutex::{SpinMutex, SpinMutexGuard};
