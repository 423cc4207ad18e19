//! Error types for the soft-failure paths.
//!
//! Nothing in this crate unwinds on a full container. Insertions that cannot be
//! satisfied hand the rejected value back inside a [`CapacityError`] so the
//! caller decides what to drop.

use core::fmt;

/// Returned when a fixed-capacity container has no room for another element.
///
/// The payload is whatever was refused: the element itself for single-element
/// insertions, or the number of elements requested for bulk transfers.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityError<T = ()> {
    rejected: T,
}

impl<T> CapacityError<T> {
    /// Wraps the value that could not be stored.
    #[inline]
    pub const fn new(rejected: T) -> Self {
        Self { rejected }
    }

    /// Returns the value that could not be stored.
    #[inline]
    pub fn into_inner(self) -> T {
        self.rejected
    }

    /// Borrows the value that could not be stored.
    #[inline]
    pub const fn rejected(&self) -> &T {
        &self.rejected
    }
}

// Not derived: `T` does not have to be `Debug` for the error to be reported.
impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("container capacity exhausted")
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for CapacityError<T> {}

/// Returned by [`BitSet::parse`](crate::collections::BitSet::parse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBitsError {
    /// A character other than `0`, `1` or `_` was found at this byte offset.
    InvalidDigit(usize),
    /// The string holds more digits than the set has bits.
    TooManyBits {
        /// Capacity of the set.
        capacity: usize,
    },
}

impl fmt::Display for ParseBitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBitsError::InvalidDigit(at) => write!(f, "invalid bit digit at offset {at}"),
            ParseBitsError::TooManyBits { capacity } => {
                write!(f, "more digits than the {capacity} available bits")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBitsError {}
