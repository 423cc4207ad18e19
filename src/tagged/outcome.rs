//! `Outcome`: an ok value or an error value, with a fixed in-memory layout.
//!
//! Like [`Optional`], the type is `#[repr(C, u8)]` so it can travel inside
//! bus-transmitted structs. Exactly one of `T` or `E` is live; the tag says
//! which. The checked accessors `ok()` and `error()` return `None` for the
//! wrong state; the unchecked ones are `unsafe` and debug-asserted.

use super::optional::Optional;

/// Either an ok value `T` or an error value `E`, laid out as `repr(C, u8)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C, u8)]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// Success.
    Ok(T),
    /// Failure.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps an ok value.
    #[inline(always)]
    pub const fn ok_value(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Wraps an error value.
    #[inline(always)]
    pub const fn err_value(error: E) -> Self {
        Outcome::Err(error)
    }

    /// Returns `true` if the ok value is live.
    #[inline(always)]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if the error value is live.
    #[inline(always)]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrows the ok value, `None` when the error is live.
    #[inline]
    pub const fn ok(&self) -> Option<&T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Borrows the error value, `None` when the ok value is live.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Mutably borrows the ok value.
    #[inline]
    pub fn ok_mut(&mut self) -> Option<&mut T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Mutably borrows the error value.
    #[inline]
    pub fn error_mut(&mut self) -> Option<&mut E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Borrows the ok value without checking the tag.
    ///
    /// # Safety
    /// `self.is_ok()` must hold.
    #[inline]
    pub unsafe fn ok_unchecked(&self) -> &T {
        debug_assert!(self.is_ok(), "Outcome::ok_unchecked on an `Err`");
        match self {
            Outcome::Ok(value) => value,
            // SAFETY: the caller guarantees the ok value is live.
            Outcome::Err(_) => core::hint::unreachable_unchecked(),
        }
    }

    /// Borrows the error value without checking the tag.
    ///
    /// # Safety
    /// `self.is_err()` must hold.
    #[inline]
    pub unsafe fn error_unchecked(&self) -> &E {
        debug_assert!(self.is_err(), "Outcome::error_unchecked on an `Ok`");
        match self {
            Outcome::Err(error) => error,
            // SAFETY: the caller guarantees the error value is live.
            Outcome::Ok(_) => core::hint::unreachable_unchecked(),
        }
    }

    /// Returns the ok value.
    ///
    /// # Panics
    /// Panics if the error is live. Calling this on an error is a programming
    /// error.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("called `Outcome::unwrap()` on an `Err` value"),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    /// Panics if the ok value is live.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Ok(_) => panic!("called `Outcome::unwrap_err()` on an `Ok` value"),
            Outcome::Err(error) => error,
        }
    }

    /// Returns the ok value, or `default` when the error is live.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the ok value, or derives one from the error with `f`.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => f(error),
        }
    }

    /// Maps the ok value. `f` is not called on an error.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the error value. `f` is not called on an ok value.
    #[inline]
    pub fn map_err<R, F>(self, f: F) -> Outcome<T, R>
    where
        F: FnOnce(E) -> R,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chains another fallible step on the ok value.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Keeps the ok value, discarding any error.
    #[inline]
    pub fn into_optional(self) -> Optional<T> {
        match self {
            Outcome::Ok(value) => Optional::Some(value),
            Outcome::Err(_) => Optional::None,
        }
    }

    /// Converts into a standard `Result`, so `?` can be used on it.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T: Default, E> Default for Outcome<T, E> {
    /// An ok `T::default()`.
    fn default() -> Self {
        Outcome::Ok(T::default())
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum BusError {
        Nack,
        Timeout,
    }

    #[test]
    fn test_error_state_queries() {
        let res: Outcome<u32, BusError> = Outcome::err_value(BusError::Nack);
        assert!(res.is_err());
        assert!(!res.is_ok());
        assert_eq!(res.error(), Some(&BusError::Nack));
        assert_eq!(res.ok(), None);

        let good: Outcome<u32, BusError> = Outcome::ok_value(9);
        assert_eq!(good.ok(), Some(&9));
        assert_eq!(good.error(), None);
    }

    #[test]
    fn test_unwrap_or_picks_live_side() {
        let good: Outcome<u32, BusError> = Outcome::ok_value(3);
        let bad: Outcome<u32, BusError> = Outcome::err_value(BusError::Timeout);
        assert_eq!(good.unwrap_or(0), 3);
        assert_eq!(bad.unwrap_or(0), 0);
        assert_eq!(bad.unwrap_or_else(|e| if e == BusError::Timeout { 7 } else { 8 }), 7);
    }

    #[test]
    #[should_panic(expected = "on an `Err` value")]
    fn test_unwrap_err_state_panics() {
        let bad: Outcome<u8, BusError> = Outcome::err_value(BusError::Nack);
        bad.unwrap();
    }

    #[test]
    fn test_map_and_map_err_touch_one_side() {
        let calls = Cell::new(0);
        let good: Outcome<u8, BusError> = Outcome::ok_value(2);
        let mapped = good.map_err(|e| {
            calls.set(calls.get() + 1);
            e
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.map(u16::from).unwrap(), 2u16);

        let bad: Outcome<u8, BusError> = Outcome::err_value(BusError::Nack);
        let mapped = bad.map(|v| {
            calls.set(calls.get() + 1);
            v
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.map_err(|_| "nack").unwrap_err(), "nack");
    }

    #[test]
    fn test_unchecked_accessors_on_matching_state() {
        let good: Outcome<i32, u8> = Outcome::ok_value(-1);
        let bad: Outcome<i32, u8> = Outcome::err_value(5);
        // SAFETY: states checked by construction.
        unsafe {
            assert_eq!(*good.ok_unchecked(), -1);
            assert_eq!(*bad.error_unchecked(), 5);
        }
    }

    #[test]
    fn test_move_transfers_live_alternative() {
        let shared = Rc::new(());
        let original: Outcome<Rc<()>, u8> = Outcome::ok_value(Rc::clone(&shared));
        let moved = original;
        assert_eq!(Rc::strong_count(&shared), 2);
        let cloned = moved.clone();
        assert_eq!(Rc::strong_count(&shared), 3);
        drop(moved);
        drop(cloned);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_default_and_conversions() {
        let d: Outcome<u16, BusError> = Outcome::default();
        assert_eq!(d, Outcome::Ok(0));

        let from_std: Outcome<u8, &str> = Err("bad").into();
        assert_eq!(from_std.into_result(), Err("bad"));
        assert!(Outcome::<u8, ()>::ok_value(1).into_optional().is_some());
        assert!(Outcome::<u8, ()>::err_value(()).into_optional().is_none());
        let chained = Outcome::<u8, ()>::ok_value(1).and_then(|v| Outcome::ok_value(v + 1));
        assert_eq!(chained, Outcome::Ok(2));
    }

    #[test]
    fn test_layout_is_tag_then_union() {
        use core::mem::size_of;
        assert_eq!(size_of::<Outcome<u32, u8>>(), 8);
        assert_eq!(size_of::<Outcome<[u8; 3], u8>>(), 4);
    }
}
