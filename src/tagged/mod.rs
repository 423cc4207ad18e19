//! Tagged types: a discriminant plus storage for exactly one live alternative.
//!
//! - `variant`: `Variant`, up to eight alternatives selected by type
//! - `optional`: `Optional<T>`, a value or nothing
//! - `outcome`: `Outcome<T, E>`, an ok value or an error value
//!
//! All three are native Rust enums, so the compiler enforces the one-live-value
//! rule and drops the right alternative. `Optional` and `Outcome` also pin
//! their layout with `repr(C, u8)`.

pub mod optional;
pub mod outcome;
pub mod variant;

pub use optional::Optional;
pub use outcome::Outcome;
pub use variant::{Alternative, At, Unused, Variant};
