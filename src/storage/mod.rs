//! Raw storage: the aligned slots every container constructs its values into.
//!
//! - `raw`: `RawStorage<T>`, one possibly-uninitialized `T`
//! - `layout`: size/alignment of the largest member of a type set

pub mod layout;
pub mod raw;

pub use raw::RawStorage;
