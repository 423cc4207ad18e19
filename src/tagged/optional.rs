//! `Optional`: a value that may be absent, with a fixed in-memory layout.
//!
//! `core::option::Option` leaves its layout to the compiler. `Optional` is
//! `#[repr(C, u8)]`: a one-byte tag followed by the payload, so it can be
//! embedded in structs that are mapped onto hardware or sent over a bus.
//! Conversions to and from `Option` are free to use everywhere else.

use core::mem;

/// A `T` or nothing, laid out as `repr(C, u8)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C, u8)]
pub enum Optional<T> {
    /// No value.
    None,
    /// A live value.
    Some(T),
}

impl<T> Optional<T> {
    /// The empty state.
    #[inline(always)]
    pub const fn none() -> Self {
        Optional::None
    }

    /// Wraps `value`.
    #[inline(always)]
    pub const fn some(value: T) -> Self {
        Optional::Some(value)
    }

    /// Returns `true` if a value is present.
    #[inline(always)]
    pub const fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline(always)]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns the value.
    ///
    /// # Panics
    /// Panics if there is no value. Calling this on an empty `Optional` is a
    /// programming error.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => panic!("called `Optional::unwrap()` on a `None` value"),
        }
    }

    /// Returns the value without checking for it.
    ///
    /// # Safety
    /// `self` must hold a value.
    #[inline]
    #[track_caller]
    pub unsafe fn unwrap_unchecked(self) -> T {
        debug_assert!(self.is_some(), "Optional::unwrap_unchecked on `None`");
        match self {
            Optional::Some(value) => value,
            // SAFETY: the caller guarantees a value is present.
            Optional::None => core::hint::unreachable_unchecked(),
        }
    }

    /// Returns the value, or `default` when empty.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => default,
        }
    }

    /// Returns the value, or computes one with `f` when empty.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Some(value) => value,
            Optional::None => f(),
        }
    }

    /// Returns the value, or `T::default()` when empty.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Applies `f` to the value. `f` is not called when empty.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(value) => Optional::Some(f(value)),
            Optional::None => Optional::None,
        }
    }

    /// Chains another fallible lookup. `f` is not called when empty.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => Optional::None,
        }
    }

    /// Borrows the value, if any.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Mutably borrows the value, if any.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Borrows the value as a standard `Option`.
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }

    /// Mutably borrows the value as a standard `Option`.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }

    /// Drops the value, if any, leaving `None`.
    #[inline]
    pub fn reset(&mut self) {
        *self = Optional::None;
    }

    /// Moves the value out, leaving `None`.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Optional::None)
    }

    /// Stores `value` and returns whatever was there before.
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Optional::Some(value))
    }

    /// Stores `value`, dropping any previous one, and returns a reference to it.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Optional::Some(value);
        match self {
            Optional::Some(value) => value,
            Optional::None => unreachable!(),
        }
    }

    /// Returns the value, first storing `f()` if empty.
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_none() {
            *self = Optional::Some(f());
        }
        match self {
            Optional::Some(value) => value,
            Optional::None => unreachable!(),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<T> for Optional<T> {
    #[inline]
    fn from(value: T) -> Self {
        Optional::Some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_unwrap_some() {
        assert_eq!(Optional::some(5).unwrap(), 5);
        assert_eq!(Optional::from(5).unwrap(), 5);
    }

    #[test]
    fn test_default_is_none() {
        let opt: Optional<u32> = Optional::default();
        assert!(opt.is_none());
        assert!(!opt.is_some());
    }

    #[test]
    #[should_panic(expected = "on a `None` value")]
    fn test_unwrap_none_panics() {
        Optional::<u8>::none().unwrap();
    }

    #[test]
    fn test_map_skips_none() {
        let mut called = false;
        let mapped = Optional::<i32>::none().map(|v| {
            called = true;
            v * 2
        });
        assert!(mapped.is_none());
        assert!(!called);

        assert_eq!(Optional::some(21).map(|v| v * 2), Optional::some(42));
    }

    #[test]
    fn test_fallbacks_never_fail() {
        assert_eq!(Optional::some(1).unwrap_or(9), 1);
        assert_eq!(Optional::none().unwrap_or(9), 9);
        assert_eq!(Optional::<u8>::none().unwrap_or_else(|| 3), 3);
        assert_eq!(Optional::<String>::none().unwrap_or_default(), "");
    }

    #[test]
    fn test_reset_drops_value() {
        let shared = Rc::new(());
        let mut opt = Optional::some(Rc::clone(&shared));
        assert_eq!(Rc::strong_count(&shared), 2);
        opt.reset();
        assert!(opt.is_none());
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_take_replace_insert() {
        let mut opt = Optional::some(String::from("a"));
        assert_eq!(opt.take(), Optional::some(String::from("a")));
        assert!(opt.is_none());

        assert!(opt.replace(String::from("b")).is_none());
        opt.insert(String::from("c")).push('!');
        assert_eq!(opt.get().map(String::as_str), Some("c!"));

        let mut empty: Optional<u8> = Optional::none();
        *empty.get_or_insert_with(|| 1) += 1;
        assert_eq!(empty, Optional::some(2));
    }

    #[test]
    fn test_option_round_trip() {
        let opt: Optional<u8> = Some(4).into();
        assert_eq!(opt.into_option(), Some(4));
        let back: Option<u8> = Optional::<u8>::none().into();
        assert_eq!(back, None);
    }

    #[test]
    fn test_layout_is_tag_then_payload() {
        use core::mem::{align_of, size_of};
        assert_eq!(size_of::<Optional<u32>>(), 8);
        assert_eq!(align_of::<Optional<u32>>(), 4);
        assert_eq!(size_of::<Optional<u8>>(), 2);
    }

    #[test]
    fn test_copy_preserves_state() {
        let a = Optional::some(7u16);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(b.as_ref().unwrap(), &7);
    }
}
