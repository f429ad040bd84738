//! Stack growth for deeply nested source and deep call chains.
//!
//! Both the parser (nested parentheses) and evaluation (thunks invoking
//! thunks) recurse on the native stack. Wrapping the recursive step in
//! [`ensure_sufficient_stack`] lets `stacker` move onto a fresh segment
//! instead of overflowing.

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// On WASM this calls `f` directly.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Remaining stack below which a new segment is allocated (128KB).
    const RED_ZONE: usize = 128 * 1024;

    /// Size of each newly allocated segment (2MB).
    const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
