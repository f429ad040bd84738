//! Shared storage for composite value payloads.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted handle to an immutable heap payload.
///
/// The constructor is private to the `value` module, so strings, lists and
/// closures can only be allocated through the factory methods on
/// [`Value`](super::Value) and [`Function`](super::Function). Cloning a
/// `Heap` shares the payload; nothing is deep-copied.
///
/// The interpreter is single-threaded, so this is `Rc`, not `Arc`.
#[repr(transparent)]
pub struct Heap<T>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }

    /// Whether two handles share one allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
