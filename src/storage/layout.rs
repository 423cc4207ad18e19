//! Compile-time size and alignment of the largest member of a type set.

/// Returns the largest value in `values`, or `0` for an empty slice.
pub const fn largest(values: &[usize]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < values.len() {
        if values[i] > max {
            max = values[i];
        }
        i += 1;
    }
    max
}

/// Size in bytes of the largest type in the list.
///
/// ```
/// assert_eq!(ballast::largest_size!(u8, u32, [u8; 6]), 6);
/// ```
#[macro_export]
macro_rules! largest_size {
    ($($ty:ty),+ $(,)?) => {
        $crate::storage::layout::largest(&[$(::core::mem::size_of::<$ty>()),+])
    };
}

/// Alignment of the most strictly aligned type in the list.
///
/// ```
/// assert_eq!(ballast::largest_align!(u8, u16, [u8; 6]), 2);
/// ```
#[macro_export]
macro_rules! largest_align {
    ($($ty:ty),+ $(,)?) => {
        $crate::storage::layout::largest(&[$(::core::mem::align_of::<$ty>()),+])
    };
}
