//! `Variant`: a tagged union of up to eight alternative types.
//!
//! The union is a plain enum: the compiler sizes it for the largest
//! alternative, keeps the discriminant, and drops whichever alternative is
//! live. Access by type goes through [`Alternative`], implemented once per
//! slot with an [`At`] index marker so that a type that is not declared does
//! not compile, and a type declared twice is rejected as ambiguous.
//!
//! Checked access (`get_if`, `holds`) is the default path. Unchecked access
//! exists only as `unsafe fn`s and asserts the discriminant in debug builds.
//!
//! ```
//! use ballast::Variant;
//!
//! let mut v: Variant<u8, &str> = Variant::new();
//! assert!(v.is_valueless());
//!
//! v.emplace("hello");
//! assert_eq!(v.index(), Some(1));
//! assert_eq!(v.get_if::<&str, _>(), Some(&"hello"));
//! assert_eq!(v.get_if::<u8, _>(), None);
//! ```

use core::fmt;
use core::mem;

/// Placeholder for unused alternative slots. Has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unused {}

/// Type-level index of an alternative slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct At<const I: usize>;

/// Implemented by `Variant` for each of its alternatives.
///
/// `I` is an [`At`] marker that keeps the per-slot impls apart. Callers leave
/// it to inference: `v.get_if::<u32, _>()`.
pub trait Alternative<T, I>: Sized {
    /// Zero-based position of `T` among the alternatives.
    const INDEX: usize;

    /// Wraps `value` as this alternative.
    fn inject(value: T) -> Self;

    /// The alternative, if it is the live one.
    fn project(&self) -> Option<&T>;

    /// The alternative, mutably, if it is the live one.
    fn project_mut(&mut self) -> Option<&mut T>;

    /// Unwraps the alternative, or hands the variant back unchanged.
    fn extract(self) -> Result<T, Self>;
}

/// A tagged union over up to eight types.
///
/// Unused trailing slots default to [`Unused`], which cannot be constructed.
#[derive(Clone, PartialEq, Eq, Hash)]
#[repr(C, u8)]
pub enum Variant<
    A,
    B = Unused,
    C = Unused,
    D = Unused,
    E = Unused,
    F = Unused,
    G = Unused,
    H = Unused,
> {
    /// No live alternative.
    Valueless,
    /// Alternative 0.
    V0(A),
    /// Alternative 1.
    V1(B),
    /// Alternative 2.
    V2(C),
    /// Alternative 3.
    V3(D),
    /// Alternative 4.
    V4(E),
    /// Alternative 5.
    V5(F),
    /// Alternative 6.
    V6(G),
    /// Alternative 7.
    V7(H),
}

macro_rules! impl_alternatives {
    ($($idx:literal => $slot:ident : $ty:ident),+ $(,)?) => {$(
        impl<A, B, C, D, E, F, G, H> Alternative<$ty, At<$idx>> for Variant<A, B, C, D, E, F, G, H> {
            const INDEX: usize = $idx;

            #[inline(always)]
            fn inject(value: $ty) -> Self {
                Variant::$slot(value)
            }

            #[inline(always)]
            fn project(&self) -> Option<&$ty> {
                match self {
                    Variant::$slot(value) => Some(value),
                    _ => None,
                }
            }

            #[inline(always)]
            fn project_mut(&mut self) -> Option<&mut $ty> {
                match self {
                    Variant::$slot(value) => Some(value),
                    _ => None,
                }
            }

            #[inline(always)]
            fn extract(self) -> Result<$ty, Self> {
                match self {
                    Variant::$slot(value) => Ok(value),
                    other => Err(other),
                }
            }
        }
    )+};
}

impl_alternatives! {
    0 => V0: A,
    1 => V1: B,
    2 => V2: C,
    3 => V3: D,
    4 => V4: E,
    5 => V5: F,
    6 => V6: G,
    7 => V7: H,
}

impl<A, B, C, D, E, F, G, H> Variant<A, B, C, D, E, F, G, H> {
    /// Size in bytes of the largest alternative.
    pub const PAYLOAD_SIZE: usize = crate::largest_size!(A, B, C, D, E, F, G, H);

    /// Alignment of the most strictly aligned alternative.
    pub const PAYLOAD_ALIGN: usize = crate::largest_align!(A, B, C, D, E, F, G, H);

    /// Creates a valueless variant.
    #[inline]
    pub const fn new() -> Self {
        Variant::Valueless
    }

    /// Creates a variant holding `value`.
    #[inline]
    pub fn from_alternative<T, I>(value: T) -> Self
    where
        Self: Alternative<T, I>,
    {
        <Self as Alternative<T, I>>::inject(value)
    }

    /// Discriminant of the live alternative, `None` when valueless.
    #[inline]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Variant::Valueless => None,
            Variant::V0(_) => Some(0),
            Variant::V1(_) => Some(1),
            Variant::V2(_) => Some(2),
            Variant::V3(_) => Some(3),
            Variant::V4(_) => Some(4),
            Variant::V5(_) => Some(5),
            Variant::V6(_) => Some(6),
            Variant::V7(_) => Some(7),
        }
    }

    /// Returns `true` if no alternative is live.
    #[inline]
    pub const fn is_valueless(&self) -> bool {
        matches!(self, Variant::Valueless)
    }

    /// Returns `true` if `T` is the live alternative.
    #[inline]
    pub fn holds<T, I>(&self) -> bool
    where
        Self: Alternative<T, I>,
    {
        self.index() == Some(<Self as Alternative<T, I>>::INDEX)
    }

    /// Drops the live alternative, then stores `value`.
    pub fn emplace<T, I>(&mut self, value: T) -> &mut T
    where
        Self: Alternative<T, I>,
    {
        self.emplace_with(move || value)
    }

    /// Drops the live alternative, then constructs the new one with `make`.
    ///
    /// The old value is gone before `make` runs. If `make` panics the variant
    /// is left valueless.
    pub fn emplace_with<T, I, M>(&mut self, make: M) -> &mut T
    where
        Self: Alternative<T, I>,
        M: FnOnce() -> T,
    {
        self.reset();
        *self = <Self as Alternative<T, I>>::inject(make());
        match <Self as Alternative<T, I>>::project_mut(self) {
            Some(value) => value,
            // `inject` always produces the slot that `project_mut` matches.
            None => unreachable!(),
        }
    }

    /// The live alternative as `T`, or `None` if another one (or none) is live.
    #[inline]
    pub fn get_if<T, I>(&self) -> Option<&T>
    where
        Self: Alternative<T, I>,
    {
        <Self as Alternative<T, I>>::project(self)
    }

    /// Mutable counterpart of [`get_if`](Self::get_if).
    #[inline]
    pub fn get_if_mut<T, I>(&mut self) -> Option<&mut T>
    where
        Self: Alternative<T, I>,
    {
        <Self as Alternative<T, I>>::project_mut(self)
    }

    /// The live alternative as `T`, without checking the discriminant.
    ///
    /// # Safety
    /// `T` must be the live alternative (`self.holds::<T, _>()`).
    #[inline]
    pub unsafe fn get_unchecked<T, I>(&self) -> &T
    where
        Self: Alternative<T, I>,
    {
        debug_assert!(
            self.holds::<T, I>(),
            "Variant::get_unchecked on alternative {} while {:?} is live",
            <Self as Alternative<T, I>>::INDEX,
            self.index()
        );
        match <Self as Alternative<T, I>>::project(self) {
            Some(value) => value,
            // SAFETY: the caller guarantees `T` is live.
            None => core::hint::unreachable_unchecked(),
        }
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    /// `T` must be the live alternative.
    #[inline]
    pub unsafe fn get_unchecked_mut<T, I>(&mut self) -> &mut T
    where
        Self: Alternative<T, I>,
    {
        debug_assert!(self.holds::<T, I>(), "Variant::get_unchecked_mut on the wrong alternative");
        match <Self as Alternative<T, I>>::project_mut(self) {
            Some(value) => value,
            // SAFETY: the caller guarantees `T` is live.
            None => core::hint::unreachable_unchecked(),
        }
    }

    /// Takes the live alternative out as `T`, or returns the variant unchanged.
    ///
    /// # Errors
    /// Returns `self` when `T` is not the live alternative.
    #[inline]
    pub fn into_alternative<T, I>(self) -> Result<T, Self>
    where
        Self: Alternative<T, I>,
    {
        <Self as Alternative<T, I>>::extract(self)
    }

    /// Moves the contents out, leaving `self` valueless.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Variant::Valueless)
    }

    /// Drops the live alternative, if any.
    #[inline]
    pub fn reset(&mut self) {
        *self = Variant::Valueless;
    }
}

impl<A, B, C, D, E, F, G, H> Default for Variant<A, B, C, D, E, F, G, H> {
    fn default() -> Self {
        Variant::Valueless
    }
}

impl<A, B, C, D, E, F, G, H> fmt::Debug for Variant<A, B, C, D, E, F, G, H>
where
    A: fmt::Debug,
    B: fmt::Debug,
    C: fmt::Debug,
    D: fmt::Debug,
    E: fmt::Debug,
    F: fmt::Debug,
    G: fmt::Debug,
    H: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (index, value): (usize, &dyn fmt::Debug) = match self {
            Variant::Valueless => return f.write_str("Valueless"),
            Variant::V0(v) => (0, v as &dyn fmt::Debug),
            Variant::V1(v) => (1, v as &dyn fmt::Debug),
            Variant::V2(v) => (2, v as &dyn fmt::Debug),
            Variant::V3(v) => (3, v as &dyn fmt::Debug),
            Variant::V4(v) => (4, v as &dyn fmt::Debug),
            Variant::V5(v) => (5, v as &dyn fmt::Debug),
            Variant::V6(v) => (6, v as &dyn fmt::Debug),
            Variant::V7(v) => (7, v as &dyn fmt::Debug),
        };
        f.debug_tuple("Variant").field(&index).field(value).finish()
    }
}
