//! Run a closure when a scope exits, unless cancelled.

use core::fmt;
use core::mem::ManuallyDrop;

/// Calls its closure on drop.
#[must_use = "the closure runs as soon as the `Defer` is dropped"]
pub struct Defer<F: FnOnce()> {
    action: ManuallyDrop<F>,
    armed: bool,
}

/// Schedules `action` to run when the returned guard goes out of scope.
///
/// ```
/// use ballast::sync::defer;
/// use core::cell::Cell;
///
/// let released = Cell::new(false);
/// {
///     let _release = defer(|| released.set(true));
///     assert!(!released.get());
/// }
/// assert!(released.get());
/// ```
#[inline]
pub fn defer<F: FnOnce()>(action: F) -> Defer<F> {
    Defer {
        action: ManuallyDrop::new(action),
        armed: true,
    }
}

impl<F: FnOnce()> Defer<F> {
    /// Disarms the guard; the closure is dropped without being called.
    #[inline]
    pub fn cancel(mut self) {
        self.armed = false;
    }

    /// Returns `true` until [`cancel`](Self::cancel) is called.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        // SAFETY: `action` is taken exactly once, here.
        let action = unsafe { ManuallyDrop::take(&mut self.action) };
        if self.armed {
            action();
        }
    }
}

impl<F: FnOnce()> fmt::Debug for Defer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defer").field("armed", &self.armed).finish_non_exhaustive()
    }
}
