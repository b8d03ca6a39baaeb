//! Stack growth for nested parentheses.
//!
//! Every `(` recurses through the full precedence chain, so input such as
//! `((((...))))` nests as deep as it is long. On native targets the stack is
//! grown with `stacker` before it runs out; WASM calls straight through.

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow once less than this much stack is left (100KB).
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each new stack segment (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
